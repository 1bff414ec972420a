//! DropDown widget: a collapsed selection row that opens into an option list.
//!
//! The controller's region is the collapsed row. The open list is drawn
//! directly below it, outside that region; clicks on the list still arrive
//! because positional events are broadcast to every controller.

use std::any::Any;

use crate::event::input::{ButtonState, Key, MouseButton, SpecialKey};
use crate::geometry::{Offset, Region, Size};
use crate::theme::Theme;
use crate::widget::{RenderContext, Widget};

// ---------------------------------------------------------------------------
// DropDown
// ---------------------------------------------------------------------------

/// A single-choice list shown one row at a time.
///
/// A left press on the row toggles the list. While open, a press on an option
/// selects it and closes the list; a press anywhere else just closes it.
#[derive(Debug, Clone)]
pub struct DropDown {
    options: Vec<String>,
    selected: Option<usize>,
    expanded: bool,
}

impl DropDown {
    /// A closed drop-down with the first option selected.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            selected: (!options.is_empty()).then_some(0),
            options,
            expanded: false,
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

    /// Whether the option list is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded && !self.options.is_empty();
    }

    /// Region of option `index` in the open list below `region`.
    fn option_region(region: Region, index: usize) -> Region {
        Region::new(
            region.x,
            region.bottom() + region.height * index as i32,
            region.width,
            region.height,
        )
    }

    fn option_at(&self, region: Region, x: i32, y: i32) -> Option<usize> {
        (0..self.options.len()).find(|&i| Self::option_region(region, i).contains(x, y))
    }

    fn step(&mut self, forward: bool) {
        let Some(last) = self.options.len().checked_sub(1) else {
            return;
        };
        self.selected = Some(match (self.selected, forward) {
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
            (None, _) => 0,
        });
    }
}

impl Widget for DropDown {
    fn widget_type(&self) -> &str {
        "DropDown"
    }

    /// Wide enough for the longest option plus the arrow box.
    fn preferred_size(&self, theme: &Theme) -> Size {
        let base = theme.entry(self.widget_type()).size;
        let widest = self.options.iter().map(|o| theme.text_width(o)).max().unwrap_or(0);
        let width = widest + theme.glyph_size().width + base.height;
        Size::new(base.width.max(width), base.height)
    }

    fn render(&self, region: Region, ctx: &mut RenderContext<'_>) {
        let entry = *ctx.theme.entry(self.widget_type());
        let glyph = ctx.theme.glyph_size();
        let text_y = (region.height - glyph.height) / 2;

        ctx.gpu.draw_quad(region, entry.background);
        let arrow = Region::new(region.right() - region.height, region.y, region.height, region.height);
        ctx.gpu.draw_quad(arrow, entry.highlight);
        if let Some(text) = self.selected_option() {
            ctx.gpu
                .draw_text(Offset::new(region.x + 2, region.y + text_y), text, entry.foreground);
        }

        if !self.expanded {
            return;
        }
        for (i, option) in self.options.iter().enumerate() {
            let row = Self::option_region(region, i);
            let fill = if self.selected == Some(i) { entry.highlight } else { entry.background };
            ctx.gpu.draw_quad(row, fill);
            ctx.gpu
                .draw_text(Offset::new(row.x + 2, row.y + text_y), option, entry.foreground);
        }
    }

    fn key_event(&mut self, key: Key) {
        match key {
            Key::Special(SpecialKey::Up) => self.step(false),
            Key::Special(SpecialKey::Down) => self.step(true),
            Key::Char(Key::ENTER | ' ') => self.set_expanded(!self.expanded),
            Key::Char(Key::ESCAPE) => self.expanded = false,
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
        if region.contains(x, y) {
            self.set_expanded(!self.expanded);
            return;
        }
        if self.expanded {
            if let Some(index) = self.option_at(region, x, y) {
                self.selected = Some(index);
            }
            self.expanded = false;
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

    const ROW: Region = Region::new(10, 10, 100, 20);

    fn shapes() -> DropDown {
        DropDown::new(["Cube", "Sphere", "Torus"])
    }

    fn press(dropdown: &mut DropDown, x: i32, y: i32) {
        dropdown.mouse_click(ROW, MouseButton::Left, ButtonState::Down, x, y);
    }

    #[test]
    fn starts_closed_on_first_option() {
        let dropdown = shapes();
        assert!(!dropdown.is_expanded());
        assert_eq!(dropdown.selected_option(), Some("Cube"));
        assert_eq!(DropDown::new(Vec::<String>::new()).selected(), None);
    }

    #[test]
    fn click_row_toggles_list() {
        let mut dropdown = shapes();
        press(&mut dropdown, 20, 15);
        assert!(dropdown.is_expanded());
        press(&mut dropdown, 20, 15);
        assert!(!dropdown.is_expanded());
    }

    #[test]
    fn click_option_selects_and_closes() {
        let mut dropdown = shapes();
        press(&mut dropdown, 20, 15);
        // rows below the collapsed one: 30..50, 50..70, 70..90
        press(&mut dropdown, 20, 75);
        assert_eq!(dropdown.selected_option(), Some("Torus"));
        assert!(!dropdown.is_expanded());
    }

    #[test]
    fn click_elsewhere_closes_without_selecting() {
        let mut dropdown = shapes().with_selected(1);
        press(&mut dropdown, 20, 15);
        press(&mut dropdown, 300, 300);
        assert!(!dropdown.is_expanded());
        assert_eq!(dropdown.selected(), Some(1));
    }

    #[test]
    fn closed_list_ignores_option_area() {
        let mut dropdown = shapes();
        press(&mut dropdown, 20, 75);
        dropdown.mouse_click(ROW, MouseButton::Left, ButtonState::Up, 20, 15);
        assert_eq!(dropdown.selected(), Some(0));
        assert!(!dropdown.is_expanded());
    }

    #[test]
    fn keys_step_and_toggle() {
        let mut dropdown = shapes();
        dropdown.key_event(Key::Special(SpecialKey::Down));
        dropdown.key_event(Key::Special(SpecialKey::Down));
        dropdown.key_event(Key::Special(SpecialKey::Down));
        assert_eq!(dropdown.selected(), Some(2));
        dropdown.key_event(Key::Char(Key::ENTER));
        assert!(dropdown.is_expanded());
        dropdown.key_event(Key::Char(Key::ESCAPE));
        assert!(!dropdown.is_expanded());
    }

    #[test]
    fn empty_dropdown_never_opens() {
        let mut dropdown = DropDown::new(Vec::<String>::new());
        press(&mut dropdown, 20, 15);
        dropdown.key_event(Key::Special(SpecialKey::Down));
        assert!(!dropdown.is_expanded());
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn preferred_size_fits_longest_option() {
        let theme = Theme::default();
        assert_eq!(shapes().preferred_size(&theme), Size::new(100, 20));
        let wide = DropDown::new(["a much longer option"]);
        assert_eq!(wide.preferred_size(&theme), Size::new(20 * 8 + 8 + 20, 20));
    }

    #[test]
    fn renders_list_only_when_open() {
        let theme = Theme::default();
        let mut gpu = RecordingGpu::new();
        let mut dropdown = shapes();
        dropdown.render(ROW, &mut RenderContext::new(&mut gpu, &theme));
        assert_eq!(gpu.drawn_text(), vec!["Cube"]);

        let mut gpu = RecordingGpu::new();
        dropdown.set_expanded(true);
        dropdown.render(ROW, &mut RenderContext::new(&mut gpu, &theme));
        assert_eq!(gpu.drawn_text(), vec!["Cube", "Cube", "Sphere", "Torus"]);
    }
}
