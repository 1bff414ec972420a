//! Host callback slots: application handlers that run after the GUI's own.

use crate::event::input::{ButtonState, MouseButton, SpecialKey};

type IdleFn = Box<dyn FnMut()>;
type ReshapeFn = Box<dyn FnMut(i32, i32)>;
type KeyboardFn = Box<dyn FnMut(char, i32, i32)>;
type SpecialFn = Box<dyn FnMut(SpecialKey, i32, i32)>;
type MouseFn = Box<dyn FnMut(MouseButton, ButtonState, i32, i32)>;
type MotionFn = Box<dyn FnMut(i32, i32)>;

/// Optional application handlers, one per host callback slot.
///
/// The GUI always handles an event first and then calls the matching handler
/// here. Keyboard and special-key handlers only run while no controller has
/// focus.
#[derive(Default)]
pub struct HostCallbacks {
    idle: Option<IdleFn>,
    reshape: Option<ReshapeFn>,
    keyboard: Option<KeyboardFn>,
    special: Option<SpecialFn>,
    mouse: Option<MouseFn>,
    hover: Option<MotionFn>,
    drag: Option<MotionFn>,
}

impl HostCallbacks {
    /// No handlers installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run after every idle tick (builder).
    pub fn on_idle(mut self, f: impl FnMut() + 'static) -> Self {
        self.idle = Some(Box::new(f));
        self
    }

    /// Run after every window resize with the new width and height (builder).
    pub fn on_reshape(mut self, f: impl FnMut(i32, i32) + 'static) -> Self {
        self.reshape = Some(Box::new(f));
        self
    }

    /// Run for unfocused keyboard characters with the pointer position (builder).
    pub fn on_keyboard(mut self, f: impl FnMut(char, i32, i32) + 'static) -> Self {
        self.keyboard = Some(Box::new(f));
        self
    }

    /// Run for unfocused special keys with the pointer position (builder).
    pub fn on_special(mut self, f: impl FnMut(SpecialKey, i32, i32) + 'static) -> Self {
        self.special = Some(Box::new(f));
        self
    }

    /// Run after every mouse button press or release (builder).
    pub fn on_mouse(mut self, f: impl FnMut(MouseButton, ButtonState, i32, i32) + 'static) -> Self {
        self.mouse = Some(Box::new(f));
        self
    }

    /// Run after every pointer move with no button held (builder).
    pub fn on_hover(mut self, f: impl FnMut(i32, i32) + 'static) -> Self {
        self.hover = Some(Box::new(f));
        self
    }

    /// Run after every pointer move with a button held (builder).
    pub fn on_drag(mut self, f: impl FnMut(i32, i32) + 'static) -> Self {
        self.drag = Some(Box::new(f));
        self
    }

    pub(crate) fn idle(&mut self) {
        if let Some(f) = self.idle.as_mut() {
            f();
        }
    }

    pub(crate) fn reshape(&mut self, width: i32, height: i32) {
        if let Some(f) = self.reshape.as_mut() {
            f(width, height);
        }
    }

    pub(crate) fn keyboard(&mut self, key: char, x: i32, y: i32) {
        if let Some(f) = self.keyboard.as_mut() {
            f(key, x, y);
        }
    }

    pub(crate) fn special(&mut self, key: SpecialKey, x: i32, y: i32) {
        if let Some(f) = self.special.as_mut() {
            f(key, x, y);
        }
    }

    pub(crate) fn mouse(&mut self, button: MouseButton, state: ButtonState, x: i32, y: i32) {
        if let Some(f) = self.mouse.as_mut() {
            f(button, state, x, y);
        }
    }

    pub(crate) fn hover(&mut self, x: i32, y: i32) {
        if let Some(f) = self.hover.as_mut() {
            f(x, y);
        }
    }

    pub(crate) fn drag(&mut self, x: i32, y: i32) {
        if let Some(f) = self.drag.as_mut() {
            f(x, y);
        }
    }
}

impl std::fmt::Debug for HostCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCallbacks")
            .field("idle", &self.idle.is_some())
            .field("reshape", &self.reshape.is_some())
            .field("keyboard", &self.keyboard.is_some())
            .field("special", &self.special.is_some())
            .field("mouse", &self.mouse.is_some())
            .field("hover", &self.hover.is_some())
            .field("drag", &self.drag.is_some())
            .finish()
    }
}
