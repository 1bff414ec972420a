//! Node types: ControllerId, Controller.

use std::fmt;

use slotmap::new_key_type;

use super::anchor::AnchorSpec;
use crate::geometry::Region;
use crate::widget::Widget;

new_key_type! {
    /// Stable handle to a controller in the tree arena. Copy, lightweight (u64).
    pub struct ControllerId;
}

/// One node of the controller tree: placement, visibility and behavior.
pub struct Controller {
    /// Behavior attached to this node.
    pub widget: Box<dyn Widget>,
    /// Placement rule relative to the parent region.
    pub anchor: AnchorSpec,
    /// Screen region computed by the last resize pass.
    pub region: Region,
    /// Invisible controllers are neither drawn nor hit.
    pub visible: bool,
}

impl Controller {
    /// Wrap a widget with the given anchor. The region stays empty until the
    /// first resize pass.
    pub fn new(widget: Box<dyn Widget>, anchor: AnchorSpec) -> Self {
        Self {
            widget,
            anchor,
            region: Region::EMPTY,
            visible: true,
        }
    }

    /// Set visibility (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Type name of the attached widget.
    pub fn widget_type(&self) -> &str {
        self.widget.widget_type()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("widget", &self.widget.widget_type())
            .field("anchor", &self.anchor)
            .field("region", &self.region)
            .field("visible", &self.visible)
            .finish()
    }
}
