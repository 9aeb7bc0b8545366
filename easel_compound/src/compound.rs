// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The compound group node: per-kind primitive lists, child compounds, and
//! the cached bounding box.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{Bounded, NavigationFrame, NodeRole, Primitive, PrimitiveKind};

/// A group node in the document tree.
///
/// A compound owns one ordered list per leaf primitive kind and a list of
/// child compounds. Insertion order within a list is draw order at equal
/// depth. The cached `bounds` is only meaningful after
/// [`Compound::update_bounds`]; every structural or geometric edit must
/// recompute it before the box is read.
#[derive(Clone, Debug, PartialEq)]
pub struct Compound<G> {
    arcs: Vec<Primitive<G>>,
    ellipses: Vec<Primitive<G>>,
    lines: Vec<Primitive<G>>,
    splines: Vec<Primitive<G>>,
    texts: Vec<Primitive<G>>,
    children: Vec<Compound<G>>,
    bounds: Rect,
    role: NodeRole<G>,
}

impl<G> Default for Compound<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Compound<G> {
    /// Create an empty compound with a degenerate (zero) bounding box.
    pub const fn new() -> Self {
        Self {
            arcs: Vec::new(),
            ellipses: Vec::new(),
            lines: Vec::new(),
            splines: Vec::new(),
            texts: Vec::new(),
            children: Vec::new(),
            bounds: Rect::ZERO,
            role: NodeRole::Interior,
        }
    }

    /// The primitives of one kind, in draw order.
    pub fn primitives(&self, kind: PrimitiveKind) -> &[Primitive<G>] {
        match kind {
            PrimitiveKind::Arc => &self.arcs,
            PrimitiveKind::Ellipse => &self.ellipses,
            PrimitiveKind::Line => &self.lines,
            PrimitiveKind::Spline => &self.splines,
            PrimitiveKind::Text => &self.texts,
        }
    }

    fn primitives_mut(&mut self, kind: PrimitiveKind) -> &mut Vec<Primitive<G>> {
        match kind {
            PrimitiveKind::Arc => &mut self.arcs,
            PrimitiveKind::Ellipse => &mut self.ellipses,
            PrimitiveKind::Line => &mut self.lines,
            PrimitiveKind::Spline => &mut self.splines,
            PrimitiveKind::Text => &mut self.texts,
        }
    }

    /// Append a primitive to its kind's list (it draws last among equals).
    pub fn push_primitive(&mut self, kind: PrimitiveKind, primitive: Primitive<G>) {
        self.primitives_mut(kind).push(primitive);
    }

    /// Remove and return the primitive at `index` in `kind`'s list, keeping
    /// the draw order of the rest. Returns `None` when out of range.
    pub fn remove_primitive(&mut self, kind: PrimitiveKind, index: usize) -> Option<Primitive<G>> {
        let list = self.primitives_mut(kind);
        (index < list.len()).then(|| list.remove(index))
    }

    /// Mutable access to a single primitive, for geometric edits.
    pub fn primitive_mut(&mut self, kind: PrimitiveKind, index: usize) -> Option<&mut Primitive<G>> {
        self.primitives_mut(kind).get_mut(index)
    }

    /// Number of primitives directly owned by this compound (not recursive).
    ///
    /// Used to test whether a compound has become empty after an edit.
    pub fn object_count(&self) -> usize {
        self.arcs.len()
            + self.ellipses.len()
            + self.lines.len()
            + self.splines.len()
            + self.texts.len()
    }

    /// Whether this compound owns no primitives and no children.
    pub fn is_empty(&self) -> bool {
        self.object_count() == 0 && self.children.is_empty()
    }

    /// The child compounds, in draw order.
    pub fn children(&self) -> &[Compound<G>] {
        &self.children
    }

    /// Append a child compound.
    pub fn add_child(&mut self, child: Compound<G>) {
        self.children.push(child);
    }

    /// Remove and return the child at `index`. Returns `None` when out of range.
    pub fn remove_child(&mut self, index: usize) -> Option<Compound<G>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Replace the child at `index`, returning the previous occupant.
    pub fn replace_child(&mut self, index: usize, child: Compound<G>) -> Option<Compound<G>> {
        let slot = self.children.get_mut(index)?;
        Some(core::mem::replace(slot, child))
    }

    /// Drop direct children that have become empty.
    ///
    /// Maintains the invariant that a previously populated compound vanishes
    /// from its parent's child list once its last member is deleted. The
    /// document root itself is exempt; callers never prune the root.
    pub fn prune_empty_children(&mut self) {
        self.children.retain(|c| !c.is_empty());
    }

    /// Resolve a slot path to a compound in this subtree.
    ///
    /// An empty path is this compound itself. Returns `None` for out-of-range
    /// indices.
    pub fn compound_at(&self, path: &[usize]) -> Option<&Compound<G>> {
        let mut node = self;
        for &i in path {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`Compound::compound_at`].
    pub fn compound_at_mut(&mut self, path: &[usize]) -> Option<&mut Compound<G>> {
        let mut node = self;
        for &i in path {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Smallest depth of any primitive in this subtree, or `None` if the
    /// subtree holds no primitives. Used to pick depths for pasted content.
    pub fn smallest_depth(&self) -> Option<i32> {
        let mut min = None;
        self.for_each_primitive(&mut |depth, _| {
            min = Some(match min {
                Some(m) if m <= depth => m,
                _ => depth,
            });
        });
        min
    }

    /// Largest depth of any primitive in this subtree, or `None` if the
    /// subtree holds no primitives.
    pub fn largest_depth(&self) -> Option<i32> {
        let mut max = None;
        self.for_each_primitive(&mut |depth, _| {
            max = Some(match max {
                Some(m) if m >= depth => m,
                _ => depth,
            });
        });
        max
    }

    /// Visit every primitive in this subtree once, in per-type draw order,
    /// yielding its depth and kind. The depth index builds its totals from
    /// this census.
    pub fn for_each_primitive(&self, f: &mut impl FnMut(i32, PrimitiveKind)) {
        for p in &self.arcs {
            f(p.depth, PrimitiveKind::Arc);
        }
        for child in &self.children {
            child.for_each_primitive(f);
        }
        for p in &self.ellipses {
            f(p.depth, PrimitiveKind::Ellipse);
        }
        for p in &self.lines {
            f(p.depth, PrimitiveKind::Line);
        }
        for p in &self.splines {
            f(p.depth, PrimitiveKind::Spline);
        }
        for p in &self.texts {
            f(p.depth, PrimitiveKind::Text);
        }
    }

    /// The cached bounding box, as of the last [`Compound::update_bounds`].
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The navigation frame, if this compound is the active document root of
    /// an "open" operation.
    pub fn navigation_frame(&self) -> Option<&NavigationFrame<G>> {
        match &self.role {
            NodeRole::Interior => None,
            NodeRole::Opened(frame) => Some(frame),
        }
    }

    /// Detach and return the navigation frame, leaving this compound interior.
    pub fn take_navigation_frame(&mut self) -> Option<Box<NavigationFrame<G>>> {
        match core::mem::take(&mut self.role) {
            NodeRole::Interior => None,
            NodeRole::Opened(frame) => Some(frame),
        }
    }

    /// Attach a navigation frame, marking this compound as the active root.
    pub fn set_navigation_frame(&mut self, frame: Box<NavigationFrame<G>>) {
        self.role = NodeRole::Opened(frame);
    }
}

impl<G: Bounded> Compound<G> {
    /// Recompute and store this compound's bounding box.
    ///
    /// The box is the union of the boxes of all direct primitives and of all
    /// (recursively recomputed) child compounds. An empty subtree gets the
    /// degenerate [`Rect::ZERO`]; empty children contribute nothing to the
    /// union so a placeholder slot cannot drag a parent's box to the origin.
    pub fn update_bounds(&mut self) -> Rect {
        self.bounds = self.recompute_bounds().unwrap_or(Rect::ZERO);
        self.bounds
    }

    fn recompute_bounds(&mut self) -> Option<Rect> {
        let mut acc: Option<Rect> = None;
        let mut merge = |r: Rect, acc: &mut Option<Rect>| {
            *acc = Some(match acc {
                Some(b) => b.union(r),
                None => r,
            });
        };
        for kind in crate::types::PRIMITIVE_KINDS {
            for p in self.primitives(kind) {
                merge(p.geometry.bounds(), &mut acc);
            }
        }
        for child in &mut self.children {
            let child_box = child.recompute_bounds();
            child.bounds = child_box.unwrap_or(Rect::ZERO);
            if let Some(b) = child_box {
                merge(b, &mut acc);
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PRIMITIVE_KINDS, SlotPath};
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    struct Shape(Rect);

    impl Bounded for Shape {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    fn prim(depth: i32, rect: Rect) -> Primitive<Shape> {
        Primitive {
            depth,
            geometry: Shape(rect),
        }
    }

    /// Union of every primitive box in the subtree, computed the slow way.
    fn brute_force_bounds(c: &Compound<Shape>) -> Option<Rect> {
        let mut acc: Option<Rect> = None;
        for kind in PRIMITIVE_KINDS {
            for p in c.primitives(kind) {
                let b = p.geometry.bounds();
                acc = Some(acc.map_or(b, |a| a.union(b)));
            }
        }
        for child in c.children() {
            if let Some(b) = brute_force_bounds(child) {
                acc = Some(acc.map_or(b, |a| a.union(b)));
            }
        }
        acc
    }

    #[test]
    fn bounds_match_brute_force_after_edits() {
        let mut c: Compound<Shape> = Compound::new();
        c.push_primitive(PrimitiveKind::Line, prim(3, Rect::new(0.0, 0.0, 10.0, 10.0)));
        c.push_primitive(
            PrimitiveKind::Ellipse,
            prim(5, Rect::new(-4.0, 2.0, 6.0, 20.0)),
        );
        c.push_primitive(PrimitiveKind::Arc, prim(1, Rect::new(8.0, 8.0, 30.0, 12.0)));
        assert_eq!(c.update_bounds(), brute_force_bounds(&c).unwrap());

        // Remove one, add another, and check again.
        assert!(c.remove_primitive(PrimitiveKind::Arc, 0).is_some());
        c.push_primitive(PrimitiveKind::Text, prim(2, Rect::new(50.0, 50.0, 60.0, 55.0)));
        assert_eq!(c.update_bounds(), brute_force_bounds(&c).unwrap());

        // A nested child participates in the union.
        let mut child: Compound<Shape> = Compound::new();
        child.push_primitive(
            PrimitiveKind::Spline,
            prim(7, Rect::new(-100.0, -100.0, -90.0, -90.0)),
        );
        c.add_child(child);
        assert_eq!(c.update_bounds(), brute_force_bounds(&c).unwrap());
    }

    #[test]
    fn empty_compound_has_degenerate_bounds() {
        let mut c: Compound<Shape> = Compound::new();
        assert_eq!(c.update_bounds(), Rect::ZERO);
        assert!(c.is_empty());
    }

    #[test]
    fn empty_child_does_not_drag_bounds_to_origin() {
        let mut c: Compound<Shape> = Compound::new();
        c.push_primitive(
            PrimitiveKind::Line,
            prim(3, Rect::new(100.0, 100.0, 110.0, 110.0)),
        );
        c.add_child(Compound::new());
        assert_eq!(c.update_bounds(), Rect::new(100.0, 100.0, 110.0, 110.0));
    }

    #[test]
    fn nested_scenario_bounds_and_depths() {
        // Compound A: one line at depth 3, child B with one text at depth 2.
        let mut b: Compound<Shape> = Compound::new();
        b.push_primitive(PrimitiveKind::Text, prim(2, Rect::new(20.0, 0.0, 30.0, 5.0)));
        let mut a: Compound<Shape> = Compound::new();
        a.push_primitive(PrimitiveKind::Line, prim(3, Rect::new(0.0, 0.0, 10.0, 10.0)));
        a.add_child(b);

        assert_eq!(a.update_bounds(), Rect::new(0.0, 0.0, 30.0, 10.0));
        assert_eq!(a.smallest_depth(), Some(2));
        assert_eq!(a.largest_depth(), Some(3));
    }

    #[test]
    fn depth_extremes_of_empty_subtree() {
        let c: Compound<Shape> = Compound::new();
        assert_eq!(c.smallest_depth(), None);
        assert_eq!(c.largest_depth(), None);
    }

    #[test]
    fn object_count_is_not_recursive() {
        let mut child: Compound<Shape> = Compound::new();
        child.push_primitive(PrimitiveKind::Arc, prim(4, Rect::ZERO));
        let mut c: Compound<Shape> = Compound::new();
        c.push_primitive(PrimitiveKind::Line, prim(3, Rect::ZERO));
        c.push_primitive(PrimitiveKind::Line, prim(3, Rect::ZERO));
        c.add_child(child);
        assert_eq!(c.object_count(), 2);
        assert!(!c.is_empty());
    }

    #[test]
    fn remove_primitive_preserves_order() {
        let mut c: Compound<Shape> = Compound::new();
        for i in 0..4 {
            c.push_primitive(PrimitiveKind::Line, prim(i, Rect::ZERO));
        }
        let removed = c.remove_primitive(PrimitiveKind::Line, 1).unwrap();
        assert_eq!(removed.depth, 1);
        let depths: Vec<i32> = c
            .primitives(PrimitiveKind::Line)
            .iter()
            .map(|p| p.depth)
            .collect();
        assert_eq!(depths, [0, 2, 3]);
        assert!(c.remove_primitive(PrimitiveKind::Line, 10).is_none());
    }

    #[test]
    fn slot_paths_resolve() {
        let mut grandchild: Compound<Shape> = Compound::new();
        grandchild.push_primitive(PrimitiveKind::Text, prim(9, Rect::ZERO));
        let mut child: Compound<Shape> = Compound::new();
        child.add_child(grandchild);
        let mut root: Compound<Shape> = Compound::new();
        root.add_child(Compound::new());
        root.add_child(child);

        let path = SlotPath::from_slice(&[1, 0]);
        let found = root.compound_at(path.indices()).unwrap();
        assert_eq!(found.object_count(), 1);

        assert!(root.compound_at(&[2]).is_none());
        assert!(root.compound_at(&[]).is_some());

        let found_mut = root.compound_at_mut(path.indices()).unwrap();
        found_mut.push_primitive(PrimitiveKind::Text, prim(8, Rect::ZERO));
        assert_eq!(root.compound_at(path.indices()).unwrap().object_count(), 2);
    }

    #[test]
    fn prune_drops_only_empty_children() {
        let mut keep: Compound<Shape> = Compound::new();
        keep.push_primitive(PrimitiveKind::Ellipse, prim(5, Rect::ZERO));
        let mut c: Compound<Shape> = Compound::new();
        c.add_child(Compound::new());
        c.add_child(keep);
        c.add_child(Compound::new());
        c.prune_empty_children();
        assert_eq!(c.children().len(), 1);
        assert_eq!(c.children()[0].object_count(), 1);
    }

    #[test]
    fn census_visits_nested_primitives_once() {
        let mut child: Compound<Shape> = Compound::new();
        child.push_primitive(PrimitiveKind::Text, prim(2, Rect::ZERO));
        let mut c: Compound<Shape> = Compound::new();
        c.push_primitive(PrimitiveKind::Line, prim(3, Rect::ZERO));
        c.push_primitive(PrimitiveKind::Arc, prim(3, Rect::ZERO));
        c.add_child(child);

        let mut seen: Vec<(i32, PrimitiveKind)> = Vec::new();
        c.for_each_primitive(&mut |d, k| seen.push((d, k)));
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&(2, PrimitiveKind::Text)));
        assert!(seen.contains(&(3, PrimitiveKind::Line)));
        assert!(seen.contains(&(3, PrimitiveKind::Arc)));
    }

    #[test]
    fn navigation_role_round_trip() {
        let mut c: Compound<Shape> = Compound::new();
        assert!(c.navigation_frame().is_none());
        c.set_navigation_frame(alloc::boxed::Box::new(NavigationFrame {
            saved_root: Compound::new(),
            origin: SlotPath::from_slice(&[0]),
            keep_ancestors_visible: true,
        }));
        assert!(c.navigation_frame().unwrap().keep_ancestors_visible);
        let frame = c.take_navigation_frame().unwrap();
        assert_eq!(frame.origin, SlotPath::from_slice(&[0]));
        assert!(c.navigation_frame().is_none());
    }
}
