//! Controller tree: slotmap-backed widget ownership hierarchy.

pub mod anchor;
pub mod node;
pub mod tree;

pub use anchor::{Anchor, AnchorSpec};
pub use node::{Controller, ControllerId};
pub use tree::ControllerTree;
