//! Slider widget: a horizontal track holding a value in `[0, 1]`.

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton, SpecialKey};
use crate::geometry::Region;
use crate::widget::{RenderContext, Widget};

/// Value change applied by the Left and Right keys.
const KEY_STEP: f32 = 0.05;

/// Width of the knob drawn at the current value.
const KNOB_WIDTH: i32 = 4;

/// A draggable horizontal slider.
///
/// Pressing the left button inside the track jumps the value to the pointer
/// and starts a drag; drag events then follow the pointer (clamped to the
/// track) until the button is released anywhere.
#[derive(Debug, Clone, Default)]
pub struct Slider {
    value: f32,
    dragging: bool,
}

impl Slider {
    /// A slider at `value`, clamped to `[0, 1]`.
    pub fn new(value: f32) -> Self {
        let mut slider = Self::default();
        slider.set_value(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to `[0, 1]`. NaN maps to 0.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    }

    /// Whether a drag started inside the track is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn set_from_pointer(&mut self, region: Region, x: i32) {
        let span = (region.width - 1).max(1) as f32;
        self.set_value((x - region.x) as f32 / span);
    }
}

impl Widget for Slider {
    fn widget_type(&self) -> &str {
        "Slider"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);
        let travel = (region.width - KNOB_WIDTH).max(0) as f32;
        let knob_x = region.x + (self.value * travel).round() as i32;
        ctx.gpu
            .draw_quad(Region::new(knob_x, region.y, KNOB_WIDTH, region.height), entry.highlight);
    }

    fn key_event(&mut self, key: Key) {
        match key {
            Key::Special(SpecialKey::Left) => self.set_value(self.value - KEY_STEP),
            Key::Special(SpecialKey::Right) => self.set_value(self.value + KEY_STEP),
            Key::Special(SpecialKey::Home) => self.set_value(0.0),
            Key::Special(SpecialKey::End) => self.set_value(1.0),
            _ => {}
        }
    }

    fn mouse_drag(&mut self, region: Region, x: i32, _y: i32) {
        if self.dragging {
            self.set_from_pointer(region, x);
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
        if button != MouseButton::Left {
            return;
        }
        match state {
            ButtonState::Down if region.contains(x, y) => {
                self.dragging = true;
                self.set_from_pointer(region, x);
            }
            ButtonState::Down => {}
            ButtonState::Up => self.dragging = false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
