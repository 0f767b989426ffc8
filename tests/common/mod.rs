// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared helpers for the integration tests.

use cooling_search::{Grid, RouteGraph, SearchContext, Vertex};

/// Parse a grid from the wire format, panicking on malformed input.
pub fn grid(input: &str) -> Grid {
    Grid::parse(input.as_bytes()).expect("test grid must be valid")
}

/// Run the engine on a freshly built context.
pub fn engine_count(grid: &Grid) -> u64 {
    let mut ctx = SearchContext::new(grid);
    cooling_search::count_paths(&mut ctx)
}

/// Reference enumerator: plain depth-first simple-path counting with no
/// edge removal, no stranding check and no connectivity oracle.
///
/// Counts the routes that occupy exactly the target number of cells and
/// end at the exit. Deliberately independent of the engine's pruning
/// machinery, so agreement between the two demonstrates that pruning
/// changes performance only, never the count.
pub fn brute_force_count(grid: &Grid) -> u64 {
    let route = RouteGraph::build(grid);
    let mut visited = vec![false; route.graph.vertex_count()];
    visited[route.source] = true;
    let mut count = 0;
    brute_force_extend(&route, &mut visited, route.source, route.target_len - 1, &mut count);
    count
}

fn brute_force_extend(
    route: &RouteGraph,
    visited: &mut [bool],
    v: Vertex,
    remaining: usize,
    count: &mut u64,
) {
    if remaining == 0 {
        if v == route.destination {
            *count += 1;
        }
        return;
    }
    for &u in route.graph.neighbors(v) {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        brute_force_extend(route, visited, u, remaining - 1, count);
        visited[u] = false;
    }
}
