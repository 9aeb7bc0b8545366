// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Navigation: the open/close-compound stack.
//!
//! Opening a compound swaps it in as the displayed document root so the user
//! can edit a nested group in isolation; closing splices the edits back where
//! the compound came from. [`Document`] is the explicit context holding the
//! single document-root slot, so there is no ambient "current figure" global.
//!
//! The stack itself is the chain of [`NavigationFrame`]s hanging off the
//! active root: each frame owns (by move, never by copy) the root that was
//! displayed before the open, plus the [`SlotPath`] of the slot the opened
//! compound came out of. While open, that slot holds an empty placeholder;
//! [`Document::close_one`] moves the edited compound back into it.
//!
//! States are `TOP` (no frames) and `OPEN(n)` for stack depth n ≥ 1:
//! - [`Document::open`] works from any state.
//! - [`Document::close_one`] pops one frame; [`Document::close_all`] unwinds
//!   to `TOP` as a single user action.
//! - All three are refused as silent no-ops (returning `false`) while a
//!   drawing/editing gesture is in progress, and closing is likewise a no-op
//!   at `TOP`.
//!
//! On close the edited compound's bounding box is recomputed to capture
//! in-place changes, and if it ended up empty it vanishes from its parent's
//! child list; the top-level root is the one compound allowed to stay empty.
//!
//! ## Example
//!
//! ```rust
//! use easel_compound::{Bounded, Compound, Primitive, PrimitiveKind, SlotPath};
//! use easel_navigation::Document;
//! use kurbo::Rect;
//!
//! struct Shape(Rect);
//! impl Bounded for Shape {
//!     fn bounds(&self) -> Rect {
//!         self.0
//!     }
//! }
//!
//! let mut group = Compound::new();
//! group.push_primitive(
//!     PrimitiveKind::Line,
//!     Primitive { depth: 50, geometry: Shape(Rect::new(0.0, 0.0, 4.0, 4.0)) },
//! );
//! let mut root = Compound::new();
//! root.add_child(group);
//!
//! let mut doc = Document::new(root);
//! assert!(doc.open(&SlotPath::from_slice(&[0]), false));
//! assert_eq!(doc.nav_depth(), 1);
//! assert!(doc.close_one());
//! assert!(!doc.can_close());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use easel_compound::{Bounded, Compound, NavigationFrame, SlotPath};

/// The document context: the active root plus the gesture guard.
///
/// The navigation stack is not stored separately; it is the chain of frames
/// reachable from the active root's role tag.
#[derive(Clone, Debug)]
pub struct Document<G> {
    root: Compound<G>,
    gesture_active: bool,
}

impl<G> Default for Document<G> {
    fn default() -> Self {
        Self::new(Compound::new())
    }
}

impl<G> Document<G> {
    /// Create a document displaying `root`.
    pub const fn new(root: Compound<G>) -> Self {
        Self {
            root,
            gesture_active: false,
        }
    }

    /// The compound currently displayed as the document root.
    pub fn root(&self) -> &Compound<G> {
        &self.root
    }

    /// Mutable access to the active root, for edit operations.
    pub fn root_mut(&mut self) -> &mut Compound<G> {
        &mut self.root
    }

    /// Mark a drawing/editing gesture as in progress. While set, open and
    /// close requests are refused without changing state.
    pub fn set_gesture_active(&mut self, active: bool) {
        self.gesture_active = active;
    }

    /// Whether a drawing/editing gesture is in progress.
    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Navigation stack depth: 0 at top level, n while n compounds are open.
    pub fn nav_depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.root.navigation_frame();
        while let Some(f) = frame {
            depth += 1;
            frame = f.saved_root.navigation_frame();
        }
        depth
    }

    /// Whether a "close" affordance applies (at least one compound is open).
    pub fn can_close(&self) -> bool {
        self.root.navigation_frame().is_some()
    }

    /// The innermost open frame's "keep ancestors visible" flag, or `false`
    /// at top level.
    pub fn keep_ancestors_visible(&self) -> bool {
        self.root
            .navigation_frame()
            .is_some_and(|f| f.keep_ancestors_visible)
    }

    /// The chain of saved ancestor roots, ordered outermost-first.
    ///
    /// When the innermost frame keeps ancestors visible, the redraw engine
    /// paints these in a muted style, in this order, before the active root.
    pub fn ancestor_roots(&self) -> Vec<&Compound<G>> {
        let mut out = Vec::new();
        let mut frame = self.root.navigation_frame();
        while let Some(f) = frame {
            out.push(&f.saved_root);
            frame = f.saved_root.navigation_frame();
        }
        out.reverse();
        out
    }

    /// Open the compound at `path` for isolated editing.
    ///
    /// The previous root moves into a new navigation frame and the opened
    /// compound becomes the displayed root. Returns `false`, with no state
    /// change, while a gesture is in progress, for the empty path (the root
    /// is already displayed), or for a path that resolves to nothing.
    pub fn open(&mut self, path: &SlotPath, keep_ancestors_visible: bool) -> bool {
        if self.gesture_active || path.is_empty() {
            return false;
        }
        if self.root.compound_at(path.indices()).is_none() {
            return false;
        }
        let mut saved = mem::take(&mut self.root);
        let Some((last, parent_path)) = path.split_last() else {
            unreachable!("non-empty path always splits");
        };
        let Some(parent) = saved.compound_at_mut(parent_path) else {
            unreachable!("path resolved a moment ago");
        };
        let Some(opened) = parent.replace_child(last, Compound::new()) else {
            unreachable!("path resolved a moment ago");
        };
        self.root = opened;
        self.root.set_navigation_frame(Box::new(NavigationFrame {
            saved_root: saved,
            origin: path.clone(),
            keep_ancestors_visible,
        }));
        true
    }
}

impl<G: Bounded> Document<G> {
    /// Close the innermost open compound, splicing its edits back.
    ///
    /// Recomputes the closed compound's bounding box, writes it into the slot
    /// it was opened from, removes it from its parent's child list if it is
    /// now empty (pruning any ancestors that become empty in turn, short of
    /// the restored root), and restores the saved root (recomputing its boxes
    /// so ancestors see the edits). Returns `false`, with no state change, at
    /// top level or while a gesture is in progress.
    pub fn close_one(&mut self) -> bool {
        if self.gesture_active {
            return false;
        }
        let Some(frame) = self.root.take_navigation_frame() else {
            return false;
        };
        let NavigationFrame {
            saved_root, origin, ..
        } = *frame;
        let mut closed = mem::replace(&mut self.root, saved_root);
        closed.update_bounds();
        let Some((last, parent_path)) = origin.split_last() else {
            unreachable!("open() never records an empty origin path");
        };
        let Some(parent) = self.root.compound_at_mut(parent_path) else {
            unreachable!("saved roots are not edited while a child is open");
        };
        if closed.is_empty() {
            // The placeholder goes with it; an emptied compound leaves no slot.
            parent.remove_child(last);
            self.prune_empty_ancestors(parent_path);
        } else {
            parent.replace_child(last, closed);
        }
        self.root.update_bounds();
        true
    }

    /// Walk `path` outward, removing each compound that has been left with no
    /// primitives and no children. The root (empty path) stays even if empty.
    fn prune_empty_ancestors(&mut self, mut path: &[usize]) {
        while let Some((&slot, outer)) = path.split_last() {
            let Some(node) = self.root.compound_at(path) else {
                unreachable!("ancestor slots outlive the child just removed");
            };
            if !node.is_empty() {
                break;
            }
            let Some(outer_parent) = self.root.compound_at_mut(outer) else {
                unreachable!("ancestor slots outlive the child just removed");
            };
            outer_parent.remove_child(slot);
            path = outer;
        }
    }

    /// Close every open compound, ending at top level, as one user action.
    ///
    /// Equivalent to calling [`Document::close_one`] once per open frame.
    /// Returns `false` if nothing was open or a gesture is in progress.
    pub fn close_all(&mut self) -> bool {
        if self.gesture_active || !self.can_close() {
            return false;
        }
        while self.close_one() {}
        true
    }
}
