// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer activity: which depths are editable/full-color right now.

use hashbrown::HashSet;

/// Decides whether a depth belongs to an active layer.
///
/// Inactive depths are skipped during redraw, or painted muted when the
/// canvas's show-inactive-muted mode is on.
pub trait LayerPolicy {
    /// Whether `depth` is currently active.
    fn is_active(&self, depth: i32) -> bool;
}

/// Every depth active; the default for hosts without layer controls.
#[derive(Copy, Clone, Debug, Default)]
pub struct AllActive;

impl LayerPolicy for AllActive {
    fn is_active(&self, _depth: i32) -> bool {
        true
    }
}

/// Layer policy backed by a set of explicitly deactivated depths.
#[derive(Clone, Debug, Default)]
pub struct LayerSet {
    inactive: HashSet<i32>,
}

impl LayerSet {
    /// Create a policy with every depth active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate or deactivate one depth.
    pub fn set_active(&mut self, depth: i32, active: bool) {
        if active {
            self.inactive.remove(&depth);
        } else {
            self.inactive.insert(depth);
        }
    }

    /// Number of deactivated depths.
    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }
}

impl LayerPolicy for LayerSet {
    fn is_active(&self, depth: i32) -> bool {
        !self.inactive.contains(&depth)
    }
}
