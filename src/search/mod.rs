// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking enumeration of full-coverage duct routes.
//!
//! The search extends a partial route one cell at a time, depth-first,
//! and counts every extension that occupies all traversable cells and
//! lands on the exit. Before recursing it performs two cheap
//! look-aheads on the mutated graph:
//!
//! 1. **Stranding check** — occupying `v` removes each unvisited
//!    neighbour's edge back to `v`; if that would leave a neighbour
//!    with no edges at all, the neighbour can never be reached later
//!    and the whole call is abandoned on the spot.
//! 2. **Connectivity check** — every neighbour whose edge was removed
//!    (the frontier) must still reach the exit through the shrunken
//!    graph; the [`ConnectivityOracle`](crate::connectivity) decides.
//!
//! Both checks only ever cut branches; neither changes the count. All
//! mutations go through the context's trail wrappers, and every frame
//! rewinds to its entry checkpoint on every exit path, so after the
//! top-level call the graph and visited set are exactly as before it.
//!
//! Recursion depth equals the number of cells still to place, so it is
//! bounded by the traversable-cell count. For near-open floor plans the
//! running time is super-exponential in that count regardless; the
//! oracle only tames it.

use crate::context::SearchContext;
use crate::graph::Vertex;
use crate::state::Counters;
use smallvec::SmallVec;

/// Count all routes that start at the entry, end at the exit, and
/// occupy every traversable cell exactly once.
///
/// Accumulates into [`Counters::PathsFound`] and returns the number of
/// routes found by this invocation, so repeated calls on one context
/// are independent and yield identical results.
pub fn count_paths(ctx: &mut SearchContext) -> u64 {
    debug_assert!(ctx.trail.is_empty());
    debug_assert!(ctx.visited.is_clear());

    let before = ctx.statistics.get(Counters::PathsFound);
    // The entry cell already occupies one slot of the route.
    let source = ctx.source();
    let remaining = ctx.target_len() - 1;
    extend(ctx, source, remaining);

    let found = ctx.statistics.get(Counters::PathsFound) - before;
    log::debug!("route search finished: {} routes found", found);
    found
}

/// Extend the partial route ending at `v`, with `remaining` cells still
/// to occupy before (and including) the exit.
fn extend(ctx: &mut SearchContext, v: Vertex, remaining: usize) {
    let checkpoint = ctx.checkpoint();

    let candidates: SmallVec<[Vertex; 4]> = ctx
        .graph
        .neighbors(v)
        .iter()
        .copied()
        .filter(|&u| !ctx.visited.is_visited(u))
        .collect();

    // Detach v from every unvisited neighbour that still points at it.
    let mut frontier: SmallVec<[Vertex; 4]> = SmallVec::new();
    for &u in &candidates {
        if !ctx.graph.contains_edge(u, v) {
            continue;
        }
        if ctx.graph.degree(u) <= 1 {
            // Cutting u's last edge would strand it; no extension of
            // this route can reach it any more.
            ctx.statistics.increment(Counters::StrandedAborts);
            ctx.rewind_to(checkpoint);
            return;
        }
        ctx.remove_edge(u, v);
        frontier.push(u);
    }
    ctx.mark_visited(v);

    if frontier.is_empty() || ctx.frontier_connected(&frontier) {
        let remaining = remaining - 1;
        for &u in &candidates {
            if remaining == 0 {
                if u == ctx.destination() {
                    // Every traversable cell is occupied and the exit
                    // is one step away: a complete route.
                    ctx.statistics.increment(Counters::PathsFound);
                }
            } else if u != ctx.destination() {
                extend(ctx, u, remaining);
            }
        }
    } else {
        ctx.statistics.increment(Counters::ConnectivityPrunes);
    }

    ctx.rewind_to(checkpoint);
}
