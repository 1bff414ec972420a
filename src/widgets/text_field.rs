//! TextField widget: single-line editable text.
//!
//! Keys arrive only while the field's controller holds focus. The cursor is a
//! byte offset into the text and every cursor operation is char-boundary safe.

use std::any::Any;

use crate::event::input::{Key, SpecialKey};
use crate::geometry::{Offset, Region};
use crate::widget::{RenderContext, Widget};

/// Seconds between caret visibility flips.
const BLINK_INTERVAL: f32 = 0.5;

// ---------------------------------------------------------------------------
// TextField
// ---------------------------------------------------------------------------

/// An editable line of text with a blinking caret.
#[derive(Debug, Clone)]
pub struct TextField {
    text: String,
    cursor: usize,
    caret_visible: bool,
    blink_elapsed: f32,
}

impl TextField {
    /// Create a field holding `text`, with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
            caret_visible: true,
            blink_elapsed: 0.0,
        }
    }

    /// Return the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Return the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the caret is in the visible half of its blink cycle.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let next = self.next_boundary();
        self.text.drain(self.cursor..next);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    fn prev_boundary(&self) -> usize {
        let mut pos = self.cursor.saturating_sub(1);
        while pos > 0 && !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self) -> usize {
        let mut pos = self.cursor + 1;
        while pos < self.text.len() && !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new("")
    }
}

impl Widget for TextField {
    fn widget_type(&self) -> &str {
        "TextField"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        ctx.gpu.draw_quad(region, entry.background);

        let glyph = ctx.theme.glyph_size();
        let origin = Offset::new(region.x + 2, region.y + (region.height - glyph.height) / 2);
        ctx.gpu.draw_text(origin, &self.text, entry.foreground);

        if self.caret_visible {
            let before = ctx.theme.text_width(&self.text[..self.cursor]);
            let caret = Region::new(origin.x + before, origin.y, 1, glyph.height);
            ctx.gpu.draw_quad(caret, entry.foreground);
        }
    }

    fn update(&mut self, dt: f32) {
        self.blink_elapsed += dt;
        while self.blink_elapsed >= BLINK_INTERVAL {
            self.blink_elapsed -= BLINK_INTERVAL;
            self.caret_visible = !self.caret_visible;
        }
    }

    fn key_event(&mut self, key: Key) {
        match key {
            Key::Char(Key::BACKSPACE) => self.backspace(),
            Key::Char(Key::DELETE) => self.delete_forward(),
            Key::Char(ch) if !ch.is_control() => self.insert_char(ch),
            Key::Special(SpecialKey::Left) => self.move_left(),
            Key::Special(SpecialKey::Right) => self.move_right(),
            Key::Special(SpecialKey::Home) => self.cursor = 0,
            Key::Special(SpecialKey::End) => self.cursor = self.text.len(),
            _ => return,
        }
        // Any edit or cursor move shows the caret immediately.
        self.caret_visible = true;
        self.blink_elapsed = 0.0;
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
