//! Event system: raw input, focus routing, host callback slots.

pub mod focus;
pub mod host;
pub mod input;

pub use focus::{EventRouter, FocusState, KeyRoute};
pub use host::HostCallbacks;
pub use input::{from_crossterm, ButtonState, InputEvent, Key, MouseButton, SpecialKey};
