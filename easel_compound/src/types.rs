// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document tree: depths, primitive kinds, slot paths,
//! and the navigation role attached to an opened compound.

use alloc::boxed::Box;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::compound::Compound;

/// Smallest valid primitive depth (nearest to the viewer).
pub const MIN_DEPTH: i32 = 0;

/// Largest distinct primitive depth. Depths beyond this are legal but collapse
/// into the last counts bucket of `easel_depth_index`.
pub const MAX_DEPTH: i32 = 999;

/// The five leaf primitive kinds, in fixed per-type draw order.
///
/// Child compounds are not a leaf kind; during rendering they are recursed
/// into between arcs and ellipses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Circular or elliptical arc segments.
    Arc,
    /// Ellipses and circles.
    Ellipse,
    /// Polylines, polygons, and boxes.
    Line,
    /// Interpolated and approximated splines.
    Spline,
    /// Text objects.
    Text,
}

/// All leaf kinds in per-type draw order.
pub const PRIMITIVE_KINDS: [PrimitiveKind; 5] = [
    PrimitiveKind::Arc,
    PrimitiveKind::Ellipse,
    PrimitiveKind::Line,
    PrimitiveKind::Spline,
    PrimitiveKind::Text,
];

impl PrimitiveKind {
    /// Dense index of this kind, for per-kind tables.
    #[inline]
    pub const fn idx(self) -> usize {
        match self {
            Self::Arc => 0,
            Self::Ellipse => 1,
            Self::Line => 2,
            Self::Spline => 3,
            Self::Text => 4,
        }
    }
}

/// Axis-aligned bounds of an opaque primitive geometry, in object space.
///
/// This is the seam to the host's per-primitive bound functions: the tree
/// never inspects geometry beyond this.
pub trait Bounded {
    /// The geometry's axis-aligned bounding box.
    fn bounds(&self) -> Rect;
}

/// One primitive: a depth plus host-defined geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive<G> {
    /// Z-order key. Lower depths draw later (nearer the viewer).
    pub depth: i32,
    /// Opaque shape data.
    pub geometry: G,
}

/// Path of child-list indices from a document root down to a compound's slot.
///
/// A `SlotPath` records "where this compound physically lives": follow each
/// index into the next child list. It stays valid as long as the compounds
/// along it are not reordered or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SlotPath(pub SmallVec<[usize; 8]>);

impl SlotPath {
    /// Build a path from a slice of child indices.
    pub fn from_slice(indices: &[usize]) -> Self {
        Self(SmallVec::from_slice(indices))
    }

    /// The indices, root-first.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Whether the path addresses the root itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the final child index and the path to its parent.
    pub fn split_last(&self) -> Option<(usize, &[usize])> {
        let (last, parent) = self.0.split_last()?;
        Some((*last, parent))
    }

    /// Append one more child index.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }
}

/// Role of a compound with respect to the navigation stack.
///
/// Only the compound currently displayed as the document root can carry
/// [`NodeRole::Opened`]; every other node is [`NodeRole::Interior`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NodeRole<G> {
    /// An ordinary node inside a tree.
    #[default]
    Interior,
    /// The active document root, displayed because of an "open" operation.
    Opened(Box<NavigationFrame<G>>),
}

/// State saved when a compound is opened for isolated editing.
///
/// The frame owns the previously displayed root by move, plus the slot where
/// the opened compound lives inside it (holding an empty placeholder until the
/// edited compound is spliced back on close). Frames stack: `saved_root` may
/// itself carry a frame from an earlier open.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationFrame<G> {
    /// The document root that was displayed before the open.
    pub saved_root: Compound<G>,
    /// Slot of the opened compound inside `saved_root`. Never empty.
    pub origin: SlotPath,
    /// Render the chain of saved ancestor roots in a muted style behind the
    /// active root.
    pub keep_ancestors_visible: bool,
}
