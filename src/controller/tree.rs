//! Tree operations: insert, traverse, resize, hit test.

use std::any::Any;

use slotmap::{SecondaryMap, SlotMap};

use super::anchor::{Anchor, AnchorSpec};
use super::node::{Controller, ControllerId};
use crate::event::input::{ButtonState, Key, MouseButton};
use crate::geometry::{Region, Size, Spacing};
use crate::widget::{RenderContext, Widget};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[ControllerId] = &[];

/// Behavior of the root controller: covers the window, draws nothing.
struct Root;

impl Widget for Root {
    fn widget_type(&self) -> &str {
        "Root"
    }

    fn render(&self, _region: Region, _ctx: &mut RenderContext<'_>) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The controller ownership tree, backed by a slotmap arena.
///
/// All controllers live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps; the child list order is insertion order, which is
/// paint order (back to front) and reverse hit-test priority.
pub struct ControllerTree {
    nodes: SlotMap<ControllerId, Controller>,
    children: SecondaryMap<ControllerId, Vec<ControllerId>>,
    parent: SecondaryMap<ControllerId, ControllerId>,
    root: ControllerId,
}

impl ControllerTree {
    /// Create a tree holding only the root controller.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Controller::new(
            Box::new(Root),
            AnchorSpec::new(Anchor::all(), Spacing::ZERO, Size::ZERO),
        ));
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            root,
        }
    }

    /// Append a new controller as the last child of `parent`.
    ///
    /// The new controller's region stays empty until a resize pass covers it.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not exist in the tree.
    pub fn insert_child(
        &mut self,
        parent: ControllerId,
        widget: Box<dyn Widget>,
        anchor: AnchorSpec,
    ) -> ControllerId {
        assert!(self.nodes.contains_key(parent), "parent controller does not exist");
        let id = self.nodes.insert(Controller::new(widget, anchor));
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// The root controller.
    pub fn root(&self) -> ControllerId {
        self.root
    }

    /// Get the parent of a controller, if it has one.
    pub fn parent(&self, id: ControllerId) -> Option<ControllerId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a controller in insertion order. Returns an empty
    /// slice if the controller has no children or does not exist.
    pub fn children(&self, id: ControllerId) -> &[ControllerId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: ControllerId) -> Vec<ControllerId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a controller.
    pub fn get(&self, id: ControllerId) -> Option<&Controller> {
        self.nodes.get(id)
    }

    /// Mutable access to a controller.
    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut Controller> {
        self.nodes.get_mut(id)
    }

    /// The widget of `id`, downcast to `W`.
    pub fn widget<W: Widget + 'static>(&self, id: ControllerId) -> Option<&W> {
        self.nodes.get(id)?.widget.as_any().downcast_ref::<W>()
    }

    /// The widget of `id`, mutably downcast to `W`.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: ControllerId) -> Option<&mut W> {
        self.nodes.get_mut(id)?.widget.as_any_mut().downcast_mut::<W>()
    }

    /// Screen region computed for `id` by the last resize pass.
    pub fn region(&self, id: ControllerId) -> Option<Region> {
        self.nodes.get(id).map(|node| node.region)
    }

    /// Show or hide a controller and, with it, its subtree.
    pub fn set_visible(&mut self, id: ControllerId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = visible;
        }
    }

    /// Number of controllers, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether the tree contains a controller with the given id.
    pub fn contains(&self, id: ControllerId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: ControllerId) -> Vec<ControllerId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // ── Frame traversals ─────────────────────────────────────────────

    /// Draw every visible controller, parents before children, siblings in
    /// insertion order. Hidden controllers hide their whole subtree.
    pub fn render(&self, ctx: &mut RenderContext<'_>) {
        self.render_node(self.root, ctx);
    }

    fn render_node(&self, id: ControllerId, ctx: &mut RenderContext<'_>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        node.widget.render(node.region, ctx);
        for &child in self.children(id) {
            self.render_node(child, ctx);
        }
    }

    /// Advance every controller by `dt` seconds, in render order.
    pub fn update(&mut self, dt: f32) {
        for id in self.walk_depth_first(self.root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget.update(dt);
            }
        }
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Recompute every region for a window of `width` x `height` pixels.
    pub fn resize(&mut self, width: i32, height: i32) {
        let root = self.root;
        if let Some(node) = self.nodes.get_mut(root) {
            node.region = Size::new(width, height).to_region();
        }
        for child in self.children(root).to_vec() {
            self.resize_subtree(child);
        }
    }

    /// Recompute the region of `id` and its descendants from the parent's
    /// current region.
    ///
    /// Pre-order traversal guarantees each parent is placed before its children.
    pub fn resize_subtree(&mut self, id: ControllerId) {
        for current in self.walk_depth_first(id) {
            let Some(parent) = self.parent(current) else {
                continue;
            };
            let parent_region = self.nodes[parent].region;
            let node = &mut self.nodes[current];
            node.region = node.anchor.resolve(parent_region);
        }
    }

    // ── Hit testing ──────────────────────────────────────────────────

    /// The topmost, deepest visible controller containing `(x, y)`, or the root
    /// when nothing else does.
    ///
    /// Children are tested last-inserted first, so among overlapping siblings
    /// the most recently created one wins.
    pub fn hit_test(&self, x: i32, y: i32) -> ControllerId {
        self.hit_test_from(self.root, x, y)
    }

    /// Hit test the subtree under `id`, falling back to `id` itself.
    ///
    /// `id` is not checked against the point, matching [`hit_test`](Self::hit_test)
    /// for the root.
    pub fn hit_test_from(&self, id: ControllerId, x: i32, y: i32) -> ControllerId {
        self.hit_children(id, x, y).unwrap_or(id)
    }

    fn hit_children(&self, id: ControllerId, x: i32, y: i32) -> Option<ControllerId> {
        self.children(id).iter().rev().find_map(|&child| {
            let node = self.nodes.get(child)?;
            if node.visible && node.region.contains(x, y) {
                Some(self.hit_children(child, x, y).unwrap_or(child))
            } else {
                None
            }
        })
    }

    // ── Input delivery ───────────────────────────────────────────────

    /// Deliver a key to exactly one controller.
    pub fn key_event(&mut self, id: ControllerId, key: Key) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget.key_event(key);
        }
    }

    /// Deliver pointer motion (no button held) to every controller.
    pub fn mouse_hover(&mut self, x: i32, y: i32) {
        for id in self.walk_depth_first(self.root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget.mouse_hover(node.region, x, y);
            }
        }
    }

    /// Deliver pointer motion (button held) to every controller.
    pub fn mouse_drag(&mut self, x: i32, y: i32) {
        for id in self.walk_depth_first(self.root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget.mouse_drag(node.region, x, y);
            }
        }
    }

    /// Deliver a button press or release to every controller.
    pub fn mouse_click(&mut self, button: MouseButton, state: ButtonState, x: i32, y: i32) {
        for id in self.walk_depth_first(self.root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget.mouse_click(node.region, button, state, x, y);
            }
        }
    }
}

impl Default for ControllerTree {
    fn default() -> Self {
        Self::new()
    }
}
