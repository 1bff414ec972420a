//! Panel widget: an anchored background that groups other controllers.

use std::any::Any;

use crate::geometry::{Offset, Region};
use crate::widget::{RenderContext, Widget};

/// A filled rectangle with an optional title, used as a container.
///
/// Panels are usually created with stretching anchors so they follow the
/// window; their children are placed relative to the panel's region.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    title: Option<String>,
}

impl Panel {
    /// An untitled panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The panel title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &str {
        "Panel"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);
        if let Some(title) = &self.title {
            ctx.gpu
                .draw_text(region.offset() + Offset::new(4, 2), title, entry.foreground);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
