//! Anchor specification: how a controller's region follows its parent on resize.

use bitflags::bitflags;

use crate::geometry::{Region, Size, Spacing};

bitflags! {
    /// Parent edges a controller is pinned to.
    ///
    /// Pinning both edges of an axis stretches the controller along it; pinning
    /// only the far edge (right or bottom) keeps it a fixed distance from that
    /// edge; otherwise it keeps a fixed distance from the near edge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Anchor: u8 {
        const LEFT = 1;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

/// Declarative placement rule for one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnchorSpec {
    /// Pinned parent edges.
    pub anchor: Anchor,
    /// Distance kept from each pinned edge.
    pub margin: Spacing,
    /// Extent along any axis that is not stretched.
    pub size: Size,
}

impl AnchorSpec {
    /// Fixed `size` at `(x, y)` from the parent's top-left corner.
    pub const fn at(x: i32, y: i32, size: Size) -> Self {
        Self {
            anchor: Anchor::LEFT.union(Anchor::TOP),
            margin: Spacing::new(y, 0, 0, x),
            size,
        }
    }

    /// Pin to `anchor` edges with the given margins and fallback size.
    pub const fn new(anchor: Anchor, margin: Spacing, size: Size) -> Self {
        Self { anchor, margin, size }
    }

    /// Compute the screen region for a controller inside `parent`.
    ///
    /// Pure function of the spec and the parent region.
    pub fn resolve(&self, parent: Region) -> Region {
        let (x, width) = resolve_axis(
            self.anchor.contains(Anchor::LEFT),
            self.anchor.contains(Anchor::RIGHT),
            parent.x,
            parent.width,
            self.margin.left,
            self.margin.right,
            self.size.width,
        );
        let (y, height) = resolve_axis(
            self.anchor.contains(Anchor::TOP),
            self.anchor.contains(Anchor::BOTTOM),
            parent.y,
            parent.height,
            self.margin.top,
            self.margin.bottom,
            self.size.height,
        );
        Region::new(x, y, width, height)
    }
}

/// Resolve one axis to `(origin, extent)`.
fn resolve_axis(
    near: bool,
    far: bool,
    start: i32,
    extent: i32,
    near_margin: i32,
    far_margin: i32,
    size: i32,
) -> (i32, i32) {
    match (near, far) {
        (true, true) => (start + near_margin, (extent - near_margin - far_margin).max(0)),
        (false, true) => (start + extent - far_margin - size, size),
        _ => (start + near_margin, size),
    }
}
