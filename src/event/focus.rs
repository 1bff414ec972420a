//! Focus state machine: which controller, if any, owns the keyboard.
//!
//! Focus moves only when a mouse button goes down: the press point is hit
//! tested and the result becomes the focused controller. A hit on the root
//! means nothing under the pointer, which leaves the GUI unfocused and lets
//! keyboard input fall through to the host.

use tracing::debug;

use crate::controller::{ControllerId, ControllerTree};
use crate::event::input::{ButtonState, Key, MouseButton};

/// Current keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(ControllerId),
}

impl FocusState {
    /// The focused controller, if any.
    pub fn controller(self) -> Option<ControllerId> {
        match self {
            FocusState::Unfocused => None,
            FocusState::Focused(id) => Some(id),
        }
    }

    /// Whether a controller holds focus.
    pub fn is_focused(self) -> bool {
        matches!(self, FocusState::Focused(_))
    }
}

/// Where a keyboard event ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Delivered to the focused controller.
    Controller(ControllerId),
    /// Nothing is focused; the host should see the key.
    Host,
}

/// Routes input between the controller tree and the host.
///
/// Positional events always reach the whole tree; keyboard events reach either
/// the focused controller or the host, never both.
#[derive(Debug, Default)]
pub struct EventRouter {
    state: FocusState,
}

impl EventRouter {
    /// A router with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current focus state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Drop focus without a click (e.g. when the application wants the
    /// keyboard back).
    pub fn clear(&mut self) {
        self.state = FocusState::Unfocused;
    }

    /// Deliver a click to every controller, then refocus on a press.
    ///
    /// Releases never move focus.
    pub fn mouse_click(
        &mut self,
        tree: &mut ControllerTree,
        button: MouseButton,
        state: ButtonState,
        x: i32,
        y: i32,
    ) {
        tree.mouse_click(button, state, x, y);
        if state != ButtonState::Down {
            return;
        }
        let hit = tree.hit_test(x, y);
        let next = if hit == tree.root() {
            FocusState::Unfocused
        } else {
            FocusState::Focused(hit)
        };
        if next != self.state {
            debug!(?next, x, y, "focus changed");
        }
        self.state = next;
    }

    /// Deliver a key to the focused controller, or report that the host
    /// should handle it.
    pub fn key_event(&self, tree: &mut ControllerTree, key: Key) -> KeyRoute {
        match self.state {
            FocusState::Focused(id) => {
                tree.key_event(id, key);
                KeyRoute::Controller(id)
            }
            FocusState::Unfocused => KeyRoute::Host,
        }
    }
}
