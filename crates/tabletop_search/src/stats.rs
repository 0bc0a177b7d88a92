//! Counters collected during a search.

use derive_getters::Getters;
use serde::Serialize;
use std::time::Duration;

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SearchStats {
    /// Positions visited below the root.
    nodes: u64,
    /// Positions scored as terminal or at the depth horizon.
    leaves: u64,
    /// Sibling lists abandoned by an alpha-beta cutoff.
    cutoffs: u64,
    /// Wall-clock time spent.
    elapsed: Duration,
}

impl SearchStats {
    pub(crate) fn record_node(&mut self) -> u64 {
        self.nodes += 1;
        self.nodes
    }

    pub(crate) fn record_leaf(&mut self) {
        self.leaves += 1;
    }

    pub(crate) fn record_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Adds `other`'s counters and time into `self`.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.elapsed += other.elapsed;
    }
}
