//! CheckBox widget: a box that toggles on click, with a label to its right.

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton};
use crate::geometry::{Offset, Region, Spacing};
use crate::widget::{RenderContext, Widget};

/// A two-state toggle.
///
/// The left button going down inside the box flips the state; Space does the
/// same while focused. The label is drawn beside the box and is not clickable.
#[derive(Debug, Clone)]
pub struct CheckBox {
    label: String,
    checked: bool,
}

impl CheckBox {
    /// An unchecked box with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), checked: false }
    }

    /// Set the initial state (builder pattern).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Widget for CheckBox {
    fn widget_type(&self) -> &str {
        "CheckBox"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);
        if self.checked {
            ctx.gpu.draw_quad(region.shrink(Spacing::all(2)), entry.highlight);
        }
        if !self.label.is_empty() {
            let gap = ctx.theme.glyph_size().width / 2;
            ctx.gpu
                .draw_text(Offset::new(region.right() + gap, region.y), &self.label, entry.foreground);
        }
    }

    fn key_event(&mut self, key: Key) {
        if key == Key::Char(' ') {
            self.toggle();
        }
    }

    fn mouse_click(
        &mut self,
        region: Region,
        button: MouseButton,
        state: ButtonState,
        x: i32,
        y: i32,
    ) {
        if button == MouseButton::Left && state == ButtonState::Down && region.contains(x, y) {
            self.toggle();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
