//! Recording GPU backend for headless runs and tests.

use crate::geometry::{Offset, Region};
use crate::render::{Color, FilterMode, GpuBackend, TextureFormat, TextureHandle, WrapMode};

/// One call received by a [`RecordingGpu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuCommand {
    CreateTexture(TextureHandle),
    Upload { texture: TextureHandle, format: TextureFormat, width: u32, height: u32 },
    Filter { texture: TextureHandle, min: FilterMode, mag: FilterMode },
    Wrap { texture: TextureHandle, s: WrapMode, t: WrapMode },
    DeleteTexture(TextureHandle),
    Begin2d { width: i32, height: i32 },
    End2d,
    Quad { region: Region, color: Color },
    TexturedQuad { region: Region, texture: TextureHandle },
    Text { at: Offset, text: String, color: Color },
}

/// A [`GpuBackend`] that records every call and hands out sequential handles.
///
/// Handles start at 1. An optional texture limit makes `create_texture`
/// return [`TextureHandle::INVALID`] once exhausted.
#[derive(Debug)]
pub struct RecordingGpu {
    commands: Vec<GpuCommand>,
    next_handle: u32,
    texture_limit: Option<u32>,
}

impl RecordingGpu {
    /// A recorder with no texture limit.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            next_handle: 1,
            texture_limit: None,
        }
    }

    /// Refuse texture allocation after `limit` textures (builder).
    pub fn with_texture_limit(mut self, limit: u32) -> Self {
        self.texture_limit = Some(limit);
        self
    }

    /// Every call received so far, in order.
    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    /// Drain recorded calls, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<GpuCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text drawn so far, in draw order.
    pub fn drawn_text(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                GpuCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingGpu {
    fn default() -> Self {
        Self::new()
    }
}

impl GpuBackend for RecordingGpu {
    fn create_texture(&mut self) -> TextureHandle {
        let created = self.next_handle - 1;
        if self.texture_limit.is_some_and(|limit| created >= limit) {
            return TextureHandle::INVALID;
        }
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.commands.push(GpuCommand::CreateTexture(handle));
        handle
    }

    fn upload_mipmapped(
        &mut self,
        texture: TextureHandle,
        format: TextureFormat,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        self.commands.push(GpuCommand::Upload { texture, format, width, height });
    }

    fn set_filter(&mut self, texture: TextureHandle, min: FilterMode, mag: FilterMode) {
        self.commands.push(GpuCommand::Filter { texture, min, mag });
    }

    fn set_wrap(&mut self, texture: TextureHandle, s: WrapMode, t: WrapMode) {
        self.commands.push(GpuCommand::Wrap { texture, s, t });
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.commands.push(GpuCommand::DeleteTexture(texture));
    }

    fn begin_2d(&mut self, width: i32, height: i32) {
        self.commands.push(GpuCommand::Begin2d { width, height });
    }

    fn end_2d(&mut self) {
        self.commands.push(GpuCommand::End2d);
    }

    fn draw_quad(&mut self, region: Region, color: Color) {
        self.commands.push(GpuCommand::Quad { region, color });
    }

    fn draw_textured_quad(&mut self, region: Region, texture: TextureHandle) {
        self.commands.push(GpuCommand::TexturedQuad { region, texture });
    }

    fn draw_text(&mut self, at: Offset, text: &str, color: Color) {
        self.commands.push(GpuCommand::Text { at, text: text.to_owned(), color });
    }
}
