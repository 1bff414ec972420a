//! Widget system: the per-controller behavior trait.

pub mod traits;

pub use traits::{RenderContext, Widget};
