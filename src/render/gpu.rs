//! GPU backend seam: texture management and immediate-mode draw calls.
//!
//! The core never talks to a graphics API directly. Everything it needs, from
//! texture creation to drawing a quad, goes through [`GpuBackend`]. A real
//! embedding implements it over OpenGL (or similar); the headless
//! [`RecordingGpu`](crate::testing::RecordingGpu) records the calls instead.

use crate::geometry::{Offset, Region};

// ---------------------------------------------------------------------------
// TextureHandle
// ---------------------------------------------------------------------------

/// Opaque identifier of a GPU-resident texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// Sentinel returned when a texture could not be created or loaded.
    pub const INVALID: TextureHandle = TextureHandle(u32::MAX);

    /// Whether this handle refers to a real texture.
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

// ---------------------------------------------------------------------------
// Texture parameters
// ---------------------------------------------------------------------------

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Nearest,
    Linear,
    LinearMipmapLinear,
}

/// Texture coordinate wrapping on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Internal storage format of an uploaded texture.
///
/// The pixel data handed to the backend is always RGBA8; this only selects what
/// the GPU keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Rgb8,
    Rgba8,
}

impl TextureFormat {
    /// Storage format for an image decoded from `channels` source channels.
    pub fn for_channels(channels: u8) -> Self {
        if channels == 3 {
            TextureFormat::Rgb8
        } else {
            TextureFormat::Rgba8
        }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// ---------------------------------------------------------------------------
// GpuBackend
// ---------------------------------------------------------------------------

/// Side-effecting sink for every GPU command the core issues.
///
/// Only texture handles flow back to the core; every other call is
/// fire-and-forget.
pub trait GpuBackend {
    /// Allocate a new 2-D texture name.
    fn create_texture(&mut self) -> TextureHandle;

    /// Upload RGBA8 pixels to `texture` and build its full mip chain.
    fn upload_mipmapped(
        &mut self,
        texture: TextureHandle,
        format: TextureFormat,
        width: u32,
        height: u32,
        rgba: &[u8],
    );

    /// Set the minification and magnification filters of `texture`.
    fn set_filter(&mut self, texture: TextureHandle, min: FilterMode, mag: FilterMode);

    /// Set the wrap mode of `texture` on the S and T axes.
    fn set_wrap(&mut self, texture: TextureHandle, s: WrapMode, t: WrapMode);

    /// Free `texture`.
    fn delete_texture(&mut self, texture: TextureHandle);

    /// Enter 2-D mode: orthographic projection over `width` x `height` pixels
    /// with the origin top-left, depth testing off, polygons filled.
    fn begin_2d(&mut self, width: i32, height: i32);

    /// Leave 2-D mode, restoring the caller's matrices.
    fn end_2d(&mut self);

    /// Draw a solid rectangle.
    fn draw_quad(&mut self, region: Region, color: Color);

    /// Draw `texture` stretched over `region`.
    fn draw_textured_quad(&mut self, region: Region, texture: TextureHandle);

    /// Draw a line of text with its top-left corner at `at`.
    fn draw_text(&mut self, at: Offset, text: &str, color: Color);
}
