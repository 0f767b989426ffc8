// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the route search.
//!
//! Every mutation the search makes to shared state — removing a
//! directed edge, flagging a vertex visited — is recorded as a
//! [`Change`] on the trail. Each search frame takes a checkpoint on
//! entry and rewinds to it on every exit path, including early aborts,
//! so restoration is unconditional and exact.
//!
//! # Restoration order
//!
//! Rewinding replays changes newest-first. Because an edge-removal entry
//! records the list slot it vacated, reverse replay reinserts each
//! neighbour at its original position: after a full rewind the adjacency
//! lists are bit-for-bit identical to their prior state, element order
//! included, not merely equal as sets.

use crate::graph::{Graph, Vertex};
use crate::state::VisitedSet;

/// A single recorded state change, with enough detail to undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// `to` was removed from `from`'s adjacency list at index `slot`.
    EdgeRemoved {
        from: Vertex,
        to: Vertex,
        slot: usize,
    },
    /// The vertex's visited flag was set.
    Visited { vertex: Vertex },
}

/// The undo log of search-state mutations.
///
/// Checkpoints are plain indices into the log, so nesting them costs
/// nothing and frames can rewind independently of one another as the
/// recursion unwinds.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<Change>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Current position, for a later [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a state change.
    pub(crate) fn record(&mut self, change: Change) {
        self.entries.push(change);
    }

    /// Undo every change recorded since `checkpoint`, newest first.
    ///
    /// # Panics
    ///
    /// Panics if `checkpoint` lies beyond the current trail position
    /// (a checkpoint from a frame that already rewound).
    pub(crate) fn rewind_to(
        &mut self,
        checkpoint: usize,
        graph: &mut Graph,
        visited: &mut VisitedSet,
    ) {
        assert!(
            checkpoint <= self.entries.len(),
            "rewind to stale checkpoint {} (trail length {})",
            checkpoint,
            self.entries.len()
        );
        while self.entries.len() > checkpoint {
            match self.entries.pop().unwrap() {
                Change::EdgeRemoved { from, to, slot } => graph.insert_edge_at(from, slot, to),
                Change::Visited { vertex } => visited.unmark(vertex),
            }
        }
    }
}
