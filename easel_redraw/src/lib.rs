// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Redraw: the depth-descending painter's-algorithm engine.
//!
//! A redraw pass walks the active document from the largest depth down to the
//! smallest, so farther objects paint first and nearer objects overdraw them.
//! Within a depth the per-type order is fixed (arcs, child compounds
//! recursively, ellipses, lines, splines, texts), and within a type's list the
//! insertion order holds, so overlap resolution is deterministic. The
//! `easel_depth_index` counts cache lets a scan stop early once every
//! primitive of a kind at the current depth has been painted.
//!
//! The engine is a pure function of the active document root, the layer
//! policy, and an optional clip rectangle; the only state it owns is the
//! counts cache's pass counters and a few flags. Actual pixel work happens
//! behind the [`DrawSurface`] seam, which is also where clip rectangles, the
//! busy indicator, and transient overlays live. Overlays (selection handles,
//! anchor markers) are drawn last, outside the depth model.
//!
//! - [`Canvas::redisplay_all`]: full pass, including muted outermost-first
//!   ancestor passes when the innermost open compound keeps ancestors
//!   visible.
//! - [`Canvas::redisplay_region`]: clips to a rectangle, clears exactly that
//!   rectangle, and re-runs the full logical traversal; the clip makes
//!   off-rectangle draw calls cheap no-ops.
//! - [`Canvas::redisplay_zoomed_region`]: maps an object-space rectangle
//!   through the object→device transform first.
//! - [`Canvas::redisplay_regions`]: one union redraw for overlapping damage
//!   boxes, two independent redraws for disjoint ones.
//! - [`Canvas::damage_object`] / [`Canvas::damage_pair`]: damage helpers for
//!   single- and double-box edits.
//! - While a preview is being generated ([`Canvas::begin_preview`]), redraw
//!   requests are deferred rather than executed; [`Canvas::end_preview`]
//!   reports the pending request. Once started, a pass always runs to
//!   completion.
//!
//! Layers: a [`LayerPolicy`] decides which depths are active. Inactive
//! depths are skipped, or painted in a muted style first when the
//! show-inactive-muted mode is on; active depths always paint in normal
//! style on top.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod layers;
mod surface;
mod util;

pub use canvas::{Canvas, CanvasFlags};
pub use layers::{AllActive, LayerPolicy, LayerSet};
pub use surface::{DrawMode, DrawSurface, PaintStyle};
