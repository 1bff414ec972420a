//! Button widget: a clickable button with a centered label.
//!
//! The callback fires when the left button is released inside the button
//! after a press that also started inside it. A focused button also fires on
//! Enter or Space.

use std::any::Any;
use std::fmt;

use crate::event::input::{ButtonState, Key, MouseButton};
use crate::geometry::{Offset, Region, Size};
use crate::theme::Theme;
use crate::widget::{RenderContext, Widget};

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A push button with a label and an optional press callback.
///
/// # Examples
///
/// ```ignore
/// let button = Button::new("Quit").on_press(|| println!("bye"));
/// ```
pub struct Button {
    label: String,
    pressed: bool,
    hovered: bool,
    presses: usize,
    callback: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// Create a button with the given label and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pressed: false,
            hovered: false,
            presses: 0,
            callback: None,
        }
    }

    /// Set the callback invoked on every completed press (builder pattern).
    pub fn on_press(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Return the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the left button went down inside and has not been released yet.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the pointer was inside the button at the last hover event.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Number of completed presses so far.
    pub fn presses(&self) -> usize {
        self.presses
    }

    fn fire(&mut self) {
        self.presses += 1;
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("pressed", &self.pressed)
            .field("hovered", &self.hovered)
            .field("presses", &self.presses)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "Button"
    }

    fn preferred_size(&self, theme: &Theme) -> Size {
        let size = theme.entry(self.widget_type()).size;
        let text = theme.text_width(&self.label) + 2 * theme.glyph_size().width;
        Size::new(size.width.max(text), size.height)
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        let fill = if self.pressed || self.hovered {
            entry.highlight
        } else {
            entry.background
        };
        ctx.gpu.draw_quad(region, fill);

        // Center the label; it may overflow a region that is too small.
        let glyph = ctx.theme.glyph_size();
        let text_width = ctx.theme.text_width(&self.label);
        let at = Offset::new(
            region.x + (region.width - text_width) / 2,
            region.y + (region.height - glyph.height) / 2,
        );
        ctx.gpu.draw_text(at, &self.label, entry.foreground);
    }

    fn key_event(&mut self, key: Key) {
        if key == Key::Char(Key::ENTER) || key == Key::Char(' ') {
            self.fire();
        }
    }

    fn mouse_hover(&mut self, region: Region, x: i32, y: i32) {
        self.hovered = region.contains(x, y);
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
        let inside = region.contains(x, y);
        match state {
            ButtonState::Down => self.pressed = inside,
            ButtonState::Up => {
                let was_pressed = std::mem::replace(&mut self.pressed, false);
                if was_pressed && inside {
                    self.fire();
                }
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
