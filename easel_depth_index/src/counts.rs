// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The counts cache itself: buckets of (total, drawn) pairs.

use alloc::vec;
use alloc::vec::Vec;

use easel_compound::{Compound, MAX_DEPTH, MIN_DEPTH, PRIMITIVE_KINDS, PrimitiveKind};

/// Number of depth buckets. Depths beyond the last bucket fold into it.
pub const DEPTH_BUCKETS: usize = (MAX_DEPTH - MIN_DEPTH) as usize + 1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Counter {
    total: u32,
    drawn: u32,
}

/// Per-depth, per-kind object counts for the active document tree.
#[derive(Clone, Debug)]
pub struct DepthIndex {
    buckets: Vec<[Counter; PRIMITIVE_KINDS.len()]>,
}

impl Default for DepthIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an arbitrary depth into a bucket index.
#[inline]
fn bucket_of(depth: i32) -> usize {
    let clamped = depth.clamp(MIN_DEPTH, MAX_DEPTH);
    (clamped - MIN_DEPTH) as usize
}

impl DepthIndex {
    /// Create an index with all counters at zero.
    pub fn new() -> Self {
        Self {
            buckets: vec![[Counter::default(); PRIMITIVE_KINDS.len()]; DEPTH_BUCKETS],
        }
    }

    /// Zero every total and drawn counter. Called on new-document/load.
    pub fn clear_all(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [Counter::default(); PRIMITIVE_KINDS.len()];
        }
    }

    /// Zero only the drawn counters, preserving totals. Called at the start
    /// of every redraw pass.
    pub fn clear_pass(&mut self) {
        for bucket in &mut self.buckets {
            for counter in bucket {
                counter.drawn = 0;
            }
        }
    }

    /// Add one primitive to the totals.
    pub fn index_primitive(&mut self, depth: i32, kind: PrimitiveKind) {
        self.buckets[bucket_of(depth)][kind.idx()].total += 1;
    }

    /// Remove one primitive from the totals.
    ///
    /// Decrementing a zero total means a mutation path indexed and deindexed
    /// asymmetrically; the counter saturates so a desynchronized cache
    /// over-scans instead of underflowing.
    pub fn deindex_primitive(&mut self, depth: i32, kind: PrimitiveKind) {
        let counter = &mut self.buckets[bucket_of(depth)][kind.idx()];
        debug_assert!(counter.total > 0, "deindex of a primitive never indexed");
        counter.total = counter.total.saturating_sub(1);
    }

    /// Walk `subtree` once and add every primitive to the totals. Called
    /// after load/merge/paste of new content.
    pub fn index_subtree<G>(&mut self, subtree: &Compound<G>) {
        subtree.for_each_primitive(&mut |depth, kind| self.index_primitive(depth, kind));
    }

    /// Walk `subtree` once and subtract every primitive from the totals.
    /// Every deletion path must call this before dropping the subtree.
    pub fn deindex_subtree<G>(&mut self, subtree: &Compound<G>) {
        subtree.for_each_primitive(&mut |depth, kind| self.deindex_primitive(depth, kind));
    }

    /// Record that one primitive of `kind` at `depth` was painted this pass.
    pub fn record_drawn(&mut self, depth: i32, kind: PrimitiveKind) {
        let counter = &mut self.buckets[bucket_of(depth)][kind.idx()];
        debug_assert!(
            counter.drawn < counter.total,
            "drawn count exceeding total; cache out of sync with the tree"
        );
        counter.drawn = counter.drawn.saturating_add(1);
    }

    /// Whether every primitive of `kind` at `depth` has been drawn this pass.
    ///
    /// This is the pure early-exit predicate: a scanner may skip the rest of
    /// a list (or a whole list) once it holds, and until it holds the scanner
    /// must keep visiting.
    #[inline]
    pub fn is_exhausted(&self, depth: i32, kind: PrimitiveKind) -> bool {
        let counter = self.buckets[bucket_of(depth)][kind.idx()];
        counter.drawn >= counter.total
    }

    /// Total primitives of `kind` in the bucket containing `depth`.
    pub fn total(&self, depth: i32, kind: PrimitiveKind) -> u32 {
        self.buckets[bucket_of(depth)][kind.idx()].total
    }

    /// Primitives of `kind` drawn so far this pass in the bucket containing
    /// `depth`.
    pub fn drawn(&self, depth: i32, kind: PrimitiveKind) -> u32 {
        self.buckets[bucket_of(depth)][kind.idx()].drawn
    }

    /// Total primitives of any kind in the bucket containing `depth`.
    /// A zero lets the redraw engine skip the depth outright.
    pub fn total_at_depth(&self, depth: i32) -> u32 {
        self.buckets[bucket_of(depth)].iter().map(|c| c.total).sum()
    }
}
