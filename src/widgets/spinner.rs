//! Spinner widget: a numeric field stepped by keys or clicks.
//!
//! Clicking the upper half increments, the lower half decrements. Up/Down
//! step once, PageUp/PageDown step ten times.

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton, SpecialKey};
use crate::geometry::{Offset, Region};
use crate::widget::{RenderContext, Widget};

/// Whether a spinner holds whole numbers or fractional ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerKind {
    Int,
    Float,
}

/// A bounded numeric value with a fixed step.
#[derive(Debug, Clone)]
pub struct Spinner {
    kind: SpinnerKind,
    value: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl Spinner {
    /// An integer spinner starting at `value`, unbounded.
    pub fn int(value: i64, step: i64) -> Self {
        Self {
            kind: SpinnerKind::Int,
            value: value as f64,
            step: step as f64,
            min: f64::MIN,
            max: f64::MAX,
        }
    }

    /// A float spinner starting at `value`, unbounded.
    pub fn float(value: f64, step: f64) -> Self {
        Self {
            kind: SpinnerKind::Float,
            value,
            step,
            min: f64::MIN,
            max: f64::MAX,
        }
    }

    /// Bound the value to `[min, max]` (builder pattern).
    ///
    /// Bounds given in the wrong order are swapped. A NaN bound leaves that
    /// side unbounded.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        let min = if min.is_nan() { f64::MIN } else { min };
        let max = if max.is_nan() { f64::MAX } else { max };
        (self.min, self.max) = if min <= max { (min, max) } else { (max, min) };
        self.set_value(self.value);
        self
    }

    pub fn kind(&self) -> SpinnerKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value rounded to the nearest integer.
    pub fn int_value(&self) -> i64 {
        self.value.round() as i64
    }

    /// Set the value, clamped to the range and rounded for integer spinners.
    pub fn set_value(&mut self, value: f64) {
        let value = match self.kind {
            SpinnerKind::Int => value.round(),
            SpinnerKind::Float => value,
        };
        self.value = value.clamp(self.min, self.max);
    }

    /// Move the value by `steps` steps (negative steps decrement).
    pub fn step_by(&mut self, steps: i32) {
        self.set_value(self.value + self.step * f64::from(steps));
    }

    fn display(&self) -> String {
        match self.kind {
            SpinnerKind::Int => self.int_value().to_string(),
            SpinnerKind::Float => format!("{:.2}", self.value),
        }
    }
}

impl Widget for Spinner {
    fn widget_type(&self) -> &str {
        "Spinner"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);
        let glyph = ctx.theme.glyph_size();
        let at = Offset::new(region.x + 2, region.y + (region.height - glyph.height) / 2);
        ctx.gpu.draw_text(at, &self.display(), entry.foreground);
    }

    fn key_event(&mut self, key: Key) {
        match key {
            Key::Special(SpecialKey::Up) => self.step_by(1),
            Key::Special(SpecialKey::Down) => self.step_by(-1),
            Key::Special(SpecialKey::PageUp) => self.step_by(10),
            Key::Special(SpecialKey::PageDown) => self.step_by(-10),
            _ => {}
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
        if button != MouseButton::Left || state != ButtonState::Down {
            return;
        }
        let (upper, lower) = region.split_horizontal(region.height / 2);
        if upper.contains(x, y) {
            self.step_by(1);
        } else if lower.contains(x, y) {
            self.step_by(-1);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
