// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Depth Index: per-depth, per-kind draw counters for the redraw engine.
//!
//! The redraw engine walks the document once per depth, from the farthest
//! depth down to the nearest. Without help that is a full tree scan per depth.
//! The depth index bounds the cost: it keeps, for every depth bucket and leaf
//! primitive kind, how many primitives exist in the active document
//! (`total`) and how many have been painted in the current pass (`drawn`).
//! A scan may stop as soon as [`DepthIndex::is_exhausted`] reports that every
//! primitive of that kind at that depth has already been drawn.
//!
//! The cache is purely a traversal-cost bound. It never changes what gets
//! drawn, only how early a scan can stop:
//! - no primitive is drawn twice in one pass, and
//! - every primitive whose depth matches a bucket is visited before the
//!   early exit fires, because the exit only fires at `drawn == total`.
//!
//! Lifecycle:
//! - [`DepthIndex::clear_all`] then [`DepthIndex::index_subtree`] rebuild the
//!   totals wholesale on new-document/load/merge/paste.
//! - [`DepthIndex::clear_pass`] soft-resets the drawn counters at the start
//!   of every redraw pass, preserving totals.
//! - Every deletion path must call [`DepthIndex::deindex_subtree`] (or
//!   [`DepthIndex::deindex_primitive`]); a mutation path that skips it
//!   desynchronizes the cache from the tree, which is a programming error
//!   flagged by debug assertions, not a recoverable condition.
//!
//! Depths above [`MAX_DEPTH`] fold into the last bucket; negative depths
//! clamp to the first.
//!
//! ## Example
//!
//! ```rust
//! use easel_compound::{Compound, Primitive, PrimitiveKind};
//! use easel_depth_index::DepthIndex;
//!
//! let mut figure: Compound<()> = Compound::new();
//! figure.push_primitive(PrimitiveKind::Line, Primitive { depth: 40, geometry: () });
//!
//! let mut index = DepthIndex::new();
//! index.index_subtree(&figure);
//! assert_eq!(index.total(40, PrimitiveKind::Line), 1);
//! assert!(!index.is_exhausted(40, PrimitiveKind::Line));
//!
//! index.record_drawn(40, PrimitiveKind::Line);
//! assert!(index.is_exhausted(40, PrimitiveKind::Line));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod counts;

pub use counts::{DEPTH_BUCKETS, DepthIndex};
pub use easel_compound::MAX_DEPTH;
