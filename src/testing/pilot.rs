//! Pilot: programmatic interaction with a headless Gui.
//!
//! The `Pilot` wraps a [`Gui`] backed by a [`RecordingGpu`] and a
//! [`MemoryDecoder`], and provides methods to simulate user input (keys,
//! clicks, pointer motion, resize), advance frames, and inspect what was
//! drawn.

use std::sync::MutexGuard;

use crate::app::{Gui, GuiConfig};
use crate::controller::ControllerId;
use crate::event::input::{ButtonState, InputEvent, MouseButton, SpecialKey};
use crate::geometry::Offset;
use crate::widget::Widget;

use super::decoder::MemoryDecoder;
use super::gpu::{GpuCommand, RecordingGpu};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless GUI driver for testing.
///
/// Keys are sent at the last pointer position, like a windowing host would.
/// A pilot holds [`gui_lock`](super::gui_lock) for its whole life, so tests
/// using pilots run one at a time.
///
/// # Examples
///
/// ```ignore
/// use ortho_ui::testing::Pilot;
///
/// let mut pilot = Pilot::new(640, 480);
/// let root = pilot.gui().root();
/// let field = pilot.gui_mut().add_text_field(root, 10, 10, "");
/// pilot.click(15, 15);
/// pilot.type_text("hello");
/// ```
pub struct Pilot {
    gui: Gui<RecordingGpu, MemoryDecoder>,
    pointer: Offset,
    // Declared after `gui` so the lock outlives it.
    _lock: MutexGuard<'static, ()>,
}

impl Pilot {
    /// Create a headless GUI with the given window size and no images.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(GuiConfig::new().with_size(width, height), MemoryDecoder::new())
    }

    /// Create a headless GUI from `config`, serving images from `decoder`.
    pub fn with_config(config: GuiConfig, decoder: MemoryDecoder) -> Self {
        let lock = super::gui_lock();
        Self {
            gui: Gui::new(config, RecordingGpu::new(), decoder),
            pointer: Offset::new(0, 0),
            _lock: lock,
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a character key.
    pub fn press_key(&mut self, key: char) {
        self.gui.keyboard(key, self.pointer.x, self.pointer.y);
    }

    /// Simulate a special key.
    pub fn press_special(&mut self, key: SpecialKey) {
        self.gui.special(key, self.pointer.x, self.pointer.y);
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(ch);
        }
    }

    /// Press the left button at (x, y) without releasing it.
    pub fn press(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.gui.mouse(MouseButton::Left, ButtonState::Down, x, y);
    }

    /// Release the left button at (x, y).
    pub fn release(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.gui.mouse(MouseButton::Left, ButtonState::Up, x, y);
    }

    /// Simulate a full left-button click (press then release) at (x, y).
    pub fn click(&mut self, x: i32, y: i32) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Move the pointer with no button held.
    pub fn hover(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.gui.hover(x, y);
    }

    /// Move the pointer with a button held.
    pub fn drag(&mut self, x: i32, y: i32) {
        self.pointer = Offset::new(x, y);
        self.gui.drag(x, y);
    }

    /// Simulate a window resize.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.gui.reshape(width, height);
    }

    /// Route a raw event through [`Gui::dispatch`].
    pub fn send(&mut self, event: InputEvent) {
        match event {
            InputEvent::Mouse { x, y, .. } | InputEvent::Hover { x, y } | InputEvent::Drag { x, y } => {
                self.pointer = Offset::new(x, y);
            }
            _ => {}
        }
        self.gui.dispatch(event);
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Advance one frame by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.gui.update(dt);
    }

    /// Render one frame and return the GPU calls it produced.
    pub fn render(&mut self) -> Vec<GpuCommand> {
        self.gui.gpu_mut().take_commands();
        self.gui.render();
        self.gui.gpu_mut().take_commands()
    }

    /// Render one frame and return the text it drew, in draw order.
    pub fn render_text(&mut self) -> Vec<String> {
        self.render()
            .into_iter()
            .filter_map(|command| match command {
                GpuCommand::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying GUI immutably.
    pub fn gui(&self) -> &Gui<RecordingGpu, MemoryDecoder> {
        &self.gui
    }

    /// Borrow the underlying GUI mutably.
    pub fn gui_mut(&mut self) -> &mut Gui<RecordingGpu, MemoryDecoder> {
        &mut self.gui
    }

    /// Downcast the widget of `id`.
    pub fn widget<W: Widget + 'static>(&self, id: ControllerId) -> Option<&W> {
        self.gui.widget::<W>(id)
    }

    /// The controller currently holding keyboard focus.
    pub fn focused(&self) -> Option<ControllerId> {
        self.gui.focus().controller()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
