//! Label widget: a single line of static text.

use std::any::Any;

use crate::geometry::{Region, Size};
use crate::theme::Theme;
use crate::widget::{RenderContext, Widget};

/// A line of text sized to its content.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn preferred_size(&self, theme: &Theme) -> Size {
        Size::new(theme.text_width(&self.text), theme.glyph_size().height)
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let color = ctx.theme.entry(self.widget_type()).foreground;
        ctx.gpu.draw_text(region.offset(), &self.text, color);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
