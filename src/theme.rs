//! Theme: per-widget-type visual parameters.
//!
//! A [`Theme`] is populated by the application (or a theme loader living
//! outside this crate) and handed to every widget while rendering. The core
//! only reads it.

use std::collections::HashMap;

use crate::geometry::Size;
use crate::render::Color;

/// Visual parameters for one widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeEntry {
    /// Fill color of the widget body.
    pub background: Color,
    /// Fill color used while hovered, pressed or checked.
    pub highlight: Color,
    /// Text and glyph color.
    pub foreground: Color,
    /// Default body size for widgets whose size is not content-driven.
    pub size: Size,
}

impl Default for ThemeEntry {
    fn default() -> Self {
        Self {
            background: Color::rgb(60, 60, 60),
            highlight: Color::rgb(90, 120, 180),
            foreground: Color::WHITE,
            size: Size::new(100, 20),
        }
    }
}

/// The set of visual parameters for every widget type.
#[derive(Debug, Clone)]
pub struct Theme {
    entries: HashMap<String, ThemeEntry>,
    fallback: ThemeEntry,
    glyph: Size,
}

impl Theme {
    /// An empty theme: every widget type gets the fallback entry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: ThemeEntry::default(),
            glyph: Size::new(8, 12),
        }
    }

    /// Set the entry for `widget_type` (builder).
    pub fn with_entry(mut self, widget_type: impl Into<String>, entry: ThemeEntry) -> Self {
        self.set(widget_type, entry);
        self
    }

    /// Set the size of one text glyph cell (builder).
    pub fn with_glyph_size(mut self, glyph: Size) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the entry for `widget_type`, replacing any previous one.
    pub fn set(&mut self, widget_type: impl Into<String>, entry: ThemeEntry) {
        self.entries.insert(widget_type.into(), entry);
    }

    /// The entry for `widget_type`, or the fallback entry if none was set.
    pub fn entry(&self, widget_type: &str) -> &ThemeEntry {
        self.entries.get(widget_type).unwrap_or(&self.fallback)
    }

    /// Size of one text glyph cell.
    pub fn glyph_size(&self) -> Size {
        self.glyph
    }

    /// Pixel width of `text` drawn in the theme's monospaced font.
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.glyph.width
    }
}

impl Default for Theme {
    /// Built-in entries for every widget shipped with the crate.
    fn default() -> Self {
        let base = ThemeEntry::default();
        Self::new()
            .with_entry("Panel", ThemeEntry { background: Color::rgb(40, 40, 40), ..base })
            .with_entry("Button", ThemeEntry { size: Size::new(80, 24), ..base })
            .with_entry("CheckBox", ThemeEntry { size: Size::new(12, 12), ..base })
            .with_entry("TextField", ThemeEntry { background: Color::BLACK, size: Size::new(120, 20), ..base })
            .with_entry("Slider", ThemeEntry { size: Size::new(120, 12), ..base })
            .with_entry("ProgressBar", ThemeEntry { size: Size::new(120, 12), ..base })
            .with_entry("Spinner", ThemeEntry { size: Size::new(60, 20), ..base })
            .with_entry("RadioGroup", ThemeEntry { size: Size::new(12, 12), ..base })
            .with_entry("DropDown", ThemeEntry { size: Size::new(100, 20), ..base })
            .with_entry("Console", ThemeEntry {
                background: Color::rgba(0, 0, 0, 200),
                highlight: Color::rgb(120, 220, 120),
                size: Size::new(0, 160),
                ..base
            })
    }
}
