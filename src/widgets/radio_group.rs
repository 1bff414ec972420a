//! RadioGroup widget: a column of mutually exclusive options.

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton, SpecialKey};
use crate::geometry::{Offset, Region, Size, Spacing};
use crate::theme::Theme;
use crate::widget::{RenderContext, Widget};

/// Options stacked in equal-height rows; at most one is selected.
///
/// Each row shows a marker box (the theme entry size) followed by the option
/// text. A left press anywhere in a row selects it.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    options: Vec<String>,
    selected: Option<usize>,
}

impl RadioGroup {
    /// A group with nothing selected.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// Preselect an option (builder pattern). Out-of-range indices are ignored.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the selected option.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Select `index`. Returns false (and keeps the selection) if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    fn row_height(&self, region: Region) -> i32 {
        region.height / self.options.len().max(1) as i32
    }

    fn row_at(&self, region: Region, y: i32) -> Option<usize> {
        let height = self.row_height(region);
        if height <= 0 {
            return None;
        }
        let row = ((y - region.y) / height) as usize;
        (row < self.options.len()).then_some(row)
    }
}

impl Widget for RadioGroup {
    fn widget_type(&self) -> &str {
        "RadioGroup"
    }

    fn preferred_size(&self, theme: &Theme) -> Size {
        let marker = theme.entry(self.widget_type()).size;
        let glyph = theme.glyph_size();
        let widest = self.options.iter().map(|o| theme.text_width(o)).max().unwrap_or(0);
        let row = marker.height.max(glyph.height);
        Size::new(
            marker.width + glyph.width + widest,
            row * self.options.len() as i32,
        )
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        let glyph = ctx.theme.glyph_size();
        let height = self.row_height(region);
        for (i, option) in self.options.iter().enumerate() {
            let y = region.y + height * i as i32;
            let marker = Region::new(region.x, y, entry.size.width, entry.size.height);
            ctx.gpu.draw_quad(marker, entry.background);
            if self.selected == Some(i) {
                ctx.gpu.draw_quad(marker.shrink(Spacing::all(3)), entry.highlight);
            }
            let at = Offset::new(region.x + entry.size.width + glyph.width, y);
            ctx.gpu.draw_text(at, option, entry.foreground);
        }
    }

    fn key_event(&mut self, key: Key) {
        let last = match self.options.len() {
            0 => return,
            n => n - 1,
        };
        match (key, self.selected) {
            (Key::Special(SpecialKey::Up), Some(i)) => self.selected = Some(i.saturating_sub(1)),
            (Key::Special(SpecialKey::Down), Some(i)) => self.selected = Some((i + 1).min(last)),
            (Key::Special(SpecialKey::Up | SpecialKey::Down), None) => self.selected = Some(0),
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
        if button != MouseButton::Left || state != ButtonState::Down || !region.contains(x, y) {
            return;
        }
        if let Some(row) = self.row_at(region, y) {
            self.selected = Some(row);
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

    const AREA: Region = Region::new(0, 100, 80, 36);

    fn modes() -> RadioGroup {
        RadioGroup::new(["Fill", "Wire", "Points"])
    }

    #[test]
    fn starts_unselected() {
        let group = modes();
        assert_eq!(group.selected(), None);
        assert_eq!(group.selected_option(), None);
        assert_eq!(group.options().len(), 3);
    }

    #[test]
    fn click_selects_row() {
        let mut group = modes();
        group.mouse_click(AREA, MouseButton::Left, ButtonState::Down, 40, 113);
        assert_eq!(group.selected_option(), Some("Wire"));
        group.mouse_click(AREA, MouseButton::Left, ButtonState::Down, 40, 135);
        assert_eq!(group.selected(), Some(2));
    }

    #[test]
    fn selection_is_exclusive_and_sticky() {
        let mut group = modes().with_selected(0);
        group.mouse_click(AREA, MouseButton::Left, ButtonState::Down, 40, 300);
        group.mouse_click(AREA, MouseButton::Left, ButtonState::Up, 40, 125);
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn select_out_of_range_is_refused() {
        let mut group = modes().with_selected(1);
        assert!(!group.select(7));
        assert_eq!(group.selected(), Some(1));
    }

    #[test]
    fn arrow_keys_move_selection() {
        let mut group = modes();
        group.key_event(Key::Special(SpecialKey::Down));
        assert_eq!(group.selected(), Some(0));
        group.key_event(Key::Special(SpecialKey::Down));
        group.key_event(Key::Special(SpecialKey::Down));
        group.key_event(Key::Special(SpecialKey::Down));
        assert_eq!(group.selected(), Some(2));
        group.key_event(Key::Special(SpecialKey::Up));
        assert_eq!(group.selected(), Some(1));
    }

    #[test]
    fn empty_group_ignores_input() {
        let mut group = RadioGroup::new(Vec::<String>::new());
        group.key_event(Key::Special(SpecialKey::Down));
        group.mouse_click(AREA, MouseButton::Left, ButtonState::Down, 1, 101);
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn preferred_size_stacks_rows() {
        let theme = Theme::default();
        assert_eq!(modes().preferred_size(&theme), Size::new(12 + 8 + 48, 36));
    }

    #[test]
    fn renders_every_option() {
        let theme = Theme::default();
        let mut gpu = RecordingGpu::new();
        modes().with_selected(1).render(AREA, &mut RenderContext::new(&mut gpu, &theme));
        assert_eq!(gpu.drawn_text(), vec!["Fill", "Wire", "Points"]);
        // three markers, three labels, one selection mark
        assert_eq!(gpu.commands().len(), 7);
    }
}
