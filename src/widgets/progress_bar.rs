//! ProgressBar widget: a read-only fill proportional to progress.

use std::any::Any;

use crate::geometry::Region;
use crate::widget::{RenderContext, Widget};

/// Progress in `[0, 1]`, set by the application.
#[derive(Debug, Clone, Default)]
pub struct ProgressBar {
    progress: f32,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set progress, clamped to `[0, 1]`. NaN maps to 0.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Widget for ProgressBar {
    fn widget_type(&self) -> &str {
        "ProgressBar"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);
        let filled = (self.progress * region.width as f32).round() as i32;
        if filled > 0 {
            ctx.gpu
                .draw_quad(Region::new(region.x, region.y, filled, region.height), entry.highlight);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
