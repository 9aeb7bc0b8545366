// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Compound: the nested document tree of a 2D figure editor.
//!
//! A figure is a tree of [`Compound`] group nodes. Each compound owns one list
//! per primitive kind (arcs, ellipses, lines, splines, texts), a list of child
//! compounds, and a cached axis-aligned bounding box. Primitive geometry is
//! opaque to this crate: hosts pick any payload type and implement [`Bounded`]
//! so boxes can be recomputed (the per-primitive bound function seam).
//!
//! - Depth is an integer z-order key per primitive ([`MIN_DEPTH`]..=[`MAX_DEPTH`]);
//!   lower depths render nearer to the viewer. List order is draw order at
//!   equal depth.
//! - [`Compound::update_bounds`] recomputes the cached box as the union of
//!   direct primitive boxes and recursively recomputed child boxes. Every code
//!   path that adds, removes, or geometrically alters a member must call it
//!   before the box is read.
//! - A compound that becomes empty after an edit is removed from its parent's
//!   child list ([`Compound::prune_empty_children`]); only the top-level
//!   document root may stay empty.
//! - [`SlotPath`] addresses a compound's slot in its ancestors' child lists by
//!   index, replacing parent back-pointers. [`NodeRole`] tags the one compound
//!   that is currently displayed as the document root because it was "opened"
//!   for isolated editing; the navigation transitions themselves live in
//!   `easel_navigation`.
//!
//! The tree is acyclic by construction: children are owned by value.
//!
//! ## Example
//!
//! ```rust
//! use easel_compound::{Bounded, Compound, Primitive, PrimitiveKind};
//! use kurbo::Rect;
//!
//! struct Shape(Rect);
//! impl Bounded for Shape {
//!     fn bounds(&self) -> Rect {
//!         self.0
//!     }
//! }
//!
//! let mut figure = Compound::new();
//! figure.push_primitive(
//!     PrimitiveKind::Line,
//!     Primitive {
//!         depth: 50,
//!         geometry: Shape(Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     },
//! );
//! assert_eq!(figure.update_bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(figure.object_count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod compound;
mod types;

pub use compound::Compound;
pub use types::{
    Bounded, MAX_DEPTH, MIN_DEPTH, NavigationFrame, NodeRole, PRIMITIVE_KINDS, Primitive,
    PrimitiveKind, SlotPath,
};
