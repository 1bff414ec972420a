//! Console widget: a scrolling text log with an input line.
//!
//! Output lines are appended with [`Console::print`]. While the console's
//! controller holds focus, typed characters edit the input line and Enter
//! submits it; the application drains submitted lines with
//! [`Console::take_command`].

use std::any::Any;
use std::collections::VecDeque;

use crate::event::input::{Key, SpecialKey};
use crate::geometry::{Offset, Region};
use crate::widget::{RenderContext, Widget};

/// Lines kept by [`Console::new`].
const DEFAULT_CAPACITY: usize = 256;

/// Lines moved per PageUp / PageDown.
const SCROLL_PAGE: usize = 5;

const PROMPT: &str = "> ";

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// A bounded output log plus a one-line command prompt.
///
/// When the log is full the oldest line is dropped. New output scrolls the
/// view back to the newest line.
#[derive(Debug, Clone)]
pub struct Console {
    lines: VecDeque<String>,
    capacity: usize,
    input: String,
    commands: VecDeque<String>,
    scroll: usize,
}

impl Console {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A console keeping at most `capacity` lines (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            input: String::new(),
            commands: VecDeque::new(),
            scroll: 0,
        }
    }

    /// Append output. Embedded newlines start new lines.
    pub fn print(&mut self, text: &str) {
        for line in text.split('\n') {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line.to_owned());
        }
        self.scroll = 0;
    }

    /// Logged lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line being typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Pop the oldest submitted command.
    pub fn take_command(&mut self) -> Option<String> {
        self.commands.pop_front()
    }

    /// How many lines the view is scrolled back from the newest one.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Drop every logged line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    /// Echo the input line into the log and queue it as a command.
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.input.clear();
            return;
        }
        let command = std::mem::take(&mut self.input);
        self.print(&format!("{PROMPT}{command}"));
        self.commands.push_back(command);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Console {
    fn widget_type(&self) -> &str {
        "Console"
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        let glyph = ctx.theme.glyph_size();
        ctx.gpu.draw_quad(region, entry.background);
        if glyph.height <= 0 {
            return;
        }

        // The bottom row belongs to the prompt.
        let rows = (region.height / glyph.height - 1).max(0) as usize;
        let end = self.lines.len() - self.scroll;
        let start = end.saturating_sub(rows);
        for (row, line) in self.lines.range(start..end).enumerate() {
            let at = Offset::new(region.x + 2, region.y + glyph.height * row as i32);
            ctx.gpu.draw_text(at, line, entry.foreground);
        }

        let prompt = Offset::new(region.x + 2, region.bottom() - glyph.height);
        ctx.gpu
            .draw_text(prompt, &format!("{PROMPT}{}", self.input), entry.highlight);
    }

    fn key_event(&mut self, key: Key) {
        match key {
            Key::Char(Key::ENTER) => self.submit(),
            Key::Char(Key::BACKSPACE) => {
                self.input.pop();
            }
            Key::Char(Key::ESCAPE) => self.input.clear(),
            Key::Char(ch) if !ch.is_control() => self.input.push(ch),
            Key::Special(SpecialKey::PageUp) => self.scroll_up(SCROLL_PAGE),
            Key::Special(SpecialKey::PageDown) => self.scroll_down(SCROLL_PAGE),
            _ => {}
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingGpu;
    use crate::theme::Theme;

    fn typed(console: &mut Console, text: &str) {
        for ch in text.chars() {
            console.key_event(Key::Char(ch));
        }
    }

    #[test]
    fn print_splits_lines() {
        let mut console = Console::new();
        console.print("one\ntwo");
        console.print("three");
        assert_eq!(console.lines().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut console = Console::with_capacity(2);
        console.print("a");
        console.print("b");
        console.print("c");
        assert_eq!(console.lines().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(Console::with_capacity(0).capacity, 1);
    }

    #[test]
    fn enter_submits_and_echoes() {
        let mut console = Console::new();
        typed(&mut console, "spawn 3");
        assert_eq!(console.input(), "spawn 3");
        console.key_event(Key::Char(Key::ENTER));
        assert_eq!(console.input(), "");
        assert_eq!(console.lines().last(), Some("> spawn 3"));
        assert_eq!(console.take_command().as_deref(), Some("spawn 3"));
        assert_eq!(console.take_command(), None);
    }

    #[test]
    fn blank_input_is_not_submitted() {
        let mut console = Console::new();
        typed(&mut console, "   ");
        console.key_event(Key::Char(Key::ENTER));
        assert_eq!(console.line_count(), 0);
        assert_eq!(console.take_command(), None);
    }

    #[test]
    fn editing_keys() {
        let mut console = Console::new();
        typed(&mut console, "ab\u{e9}");
        console.key_event(Key::Char(Key::BACKSPACE));
        assert_eq!(console.input(), "ab");
        console.key_event(Key::Char(Key::TAB));
        assert_eq!(console.input(), "ab");
        console.key_event(Key::Char(Key::ESCAPE));
        assert_eq!(console.input(), "");
    }

    #[test]
    fn page_keys_scroll_within_log() {
        let mut console = Console::new();
        for i in 0..8 {
            console.print(&i.to_string());
        }
        console.key_event(Key::Special(SpecialKey::PageUp));
        assert_eq!(console.scroll(), 5);
        console.key_event(Key::Special(SpecialKey::PageUp));
        assert_eq!(console.scroll(), 7);
        console.key_event(Key::Special(SpecialKey::PageDown));
        assert_eq!(console.scroll(), 2);
        console.print("new");
        assert_eq!(console.scroll(), 0);
    }

    #[test]
    fn renders_newest_lines_above_prompt() {
        let theme = Theme::default();
        let mut gpu = RecordingGpu::new();
        let mut console = Console::new();
        for line in ["a", "b", "c", "d"] {
            console.print(line);
        }
        typed(&mut console, "go");
        // 48px tall with 12px glyphs: three log rows and the prompt
        console.render(Region::new(0, 0, 200, 48), &mut RenderContext::new(&mut gpu, &theme));
        assert_eq!(gpu.drawn_text(), vec!["b", "c", "d", "> go"]);

        let mut gpu = RecordingGpu::new();
        console.scroll_up(1);
        console.render(Region::new(0, 0, 200, 48), &mut RenderContext::new(&mut gpu, &theme));
        assert_eq!(gpu.drawn_text(), vec!["a", "b", "c", "> go"]);
    }
}
