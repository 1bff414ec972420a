//! Widget trait: per-controller behavior for rendering, animation and input.
//!
//! Every controller in the tree owns one `Box<dyn Widget>`. The tree decides
//! *when* a widget is drawn, updated or told about input; the widget decides
//! *what* happens. All input methods have empty defaults so a purely visual
//! widget only implements [`Widget::render`].

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton};
use crate::geometry::{Region, Size};
use crate::render::GpuBackend;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

/// What a widget may touch while drawing: the GPU sink and the theme.
pub struct RenderContext<'a> {
    pub gpu: &'a mut dyn GpuBackend,
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    /// Bundle a GPU backend and theme for one render pass.
    pub fn new(gpu: &'a mut dyn GpuBackend, theme: &'a Theme) -> Self {
        Self { gpu, theme }
    }
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Behavior attached to a controller node.
///
/// Widget is object-safe. Positional methods receive the controller's current
/// screen region so widgets can do their own bounds checks; the tree delivers
/// positional events to every controller regardless of bounds.
pub trait Widget {
    /// Type name used to look up theme entries (e.g. "Button").
    fn widget_type(&self) -> &str;

    /// Size used when the controller is created. Defaults to the theme entry size.
    fn preferred_size(&self, theme: &Theme) -> Size {
        theme.entry(self.widget_type()).size
    }

    /// Draw this widget into `region`. Children are drawn afterwards by the tree.
    fn render(&self, region: Region, ctx: &mut RenderContext<'_>);

    /// Advance animation or internal state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Handle a key while this widget's controller holds focus.
    fn key_event(&mut self, _key: Key) {}

    /// The pointer moved with no button held.
    fn mouse_hover(&mut self, _region: Region, _x: i32, _y: i32) {}

    /// The pointer moved with a button held.
    fn mouse_drag(&mut self, _region: Region, _x: i32, _y: i32) {}

    /// A mouse button was pressed or released.
    fn mouse_click(
        &mut self,
        _region: Region,
        _button: MouseButton,
        _state: ButtonState,
        _x: i32,
        _y: i32,
    ) {
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
