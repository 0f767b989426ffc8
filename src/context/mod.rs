// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context owning all route-search state.
//!
//! The [`SearchContext`] replaces the global mutable state of a naive
//! formulation (shared graph, visited flags, counter, destination) with
//! one value owned by the top-level caller and passed `&mut` through
//! every recursive call. It combines:
//!
//! - the route graph (mutated in place during search, always restored),
//! - the visited set,
//! - the trail that records and undoes those mutations,
//! - the connectivity oracle with its reusable buffers,
//! - the statistics counters.
//!
//! Because a context is self-contained, repeated searches on one
//! context are independent, and a future parallel search would simply
//! build one context per worker — the mutation/rewind protocol is not
//! reentrant-safe across concurrent callers.
//!
//! # Mutation discipline
//!
//! The graph and visited set are only ever changed through the wrapper
//! methods below, which record every change on the trail. A frame that
//! took a checkpoint can therefore rewind unconditionally and be certain
//! nothing it did survives.

use crate::connectivity::ConnectivityOracle;
use crate::graph::{Graph, RouteGraph, Vertex};
use crate::grid::Grid;
use crate::state::{Counters, Statistics, VisitedSet};
use crate::trail::{Change, Trail};

/// All state for one route search, owned in one place.
#[derive(Debug)]
pub struct SearchContext {
    /// Adjacency structure; transiently shrunk during search.
    pub graph: Graph,
    /// Flags for vertices on the partial route.
    pub visited: VisitedSet,
    /// Undo log for graph and visited-set mutations.
    pub trail: Trail,
    /// Search statistics, including the route count itself.
    pub statistics: Statistics,
    oracle: ConnectivityOracle,
    source: Vertex,
    destination: Vertex,
    target_len: usize,
}

impl SearchContext {
    /// Build a context for the given floor plan.
    pub fn new(grid: &Grid) -> Self {
        Self::with_route(RouteGraph::build(grid))
    }

    /// Build a context from an already-built route graph.
    pub fn with_route(route: RouteGraph) -> Self {
        let vertex_count = route.graph.vertex_count();
        Self {
            graph: route.graph,
            visited: VisitedSet::new(vertex_count),
            trail: Trail::new(),
            statistics: Statistics::new(),
            oracle: ConnectivityOracle::new(vertex_count),
            source: route.source,
            destination: route.destination,
            target_len: route.target_len,
        }
    }

    /// Vertex of the duct entry cell.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Vertex of the duct exit cell.
    pub fn destination(&self) -> Vertex {
        self.destination
    }

    /// Number of traversable cells; every valid route contains exactly
    /// this many vertices.
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    // Safe trail wrapper methods
    // All search-time mutation of graph/visited goes through these, so
    // every change is recorded and a rewind restores state exactly.

    /// Trail position for a later [`SearchContext::rewind_to`].
    pub(crate) fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Undo every recorded change back to `checkpoint`.
    pub(crate) fn rewind_to(&mut self, checkpoint: usize) {
        self.trail
            .rewind_to(checkpoint, &mut self.graph, &mut self.visited);
    }

    /// Remove the directed entry `from → to`, recording it on the trail.
    ///
    /// # Panics
    ///
    /// Panics if the entry is not present; callers check
    /// [`Graph::contains_edge`] first.
    pub(crate) fn remove_edge(&mut self, from: Vertex, to: Vertex) {
        let slot = self
            .graph
            .remove_edge(from, to)
            .expect("removed edge must be present");
        self.trail.record(Change::EdgeRemoved { from, to, slot });
    }

    /// Flag `v` as part of the route, recording it on the trail.
    pub(crate) fn mark_visited(&mut self, v: Vertex) {
        self.visited.mark(v);
        self.trail.record(Change::Visited { vertex: v });
    }

    /// Ask the oracle whether every frontier vertex still reaches the
    /// exit through the current graph.
    pub(crate) fn frontier_connected(&mut self, frontier: &[Vertex]) -> bool {
        self.statistics.increment(Counters::OracleQueries);
        self.oracle
            .all_reach(&self.graph, frontier, self.destination)
    }
}
