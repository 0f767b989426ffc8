// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reachability oracle used to prune dead search branches.
//!
//! After the search removes the edges pointing back at the vertex it
//! just occupied, each affected neighbour (the frontier) must still be
//! able to reach the exit through the shrunken graph — otherwise no
//! extension of the current partial route can ever cover it, and the
//! whole branch is dead. The oracle answers exactly that question. It
//! never mutates the graph and is never the enumeration mechanism
//! itself: it trades extra per-branch work for exponentially fewer
//! explored branches.
//!
//! # Mark numbering
//!
//! One invocation walks the frontier with a per-vertex mark array:
//!
//! - mark `0`: not yet discovered this invocation;
//! - mark `1`: the exit vertex itself;
//! - mark `k ≥ 2`: discovered while exploring the `k`-th batch.
//!
//! Exploring a frontier vertex assigns the current batch mark to every
//! vertex it discovers. Hitting any vertex with a *smaller* mark proves
//! the whole batch reaches the exit (transitively through an earlier
//! batch, or directly), so the batch counter advances and the next
//! frontier vertex is taken. Exhausting a batch without that proof means
//! the frontier vertex cannot reach the exit, and the invocation fails
//! immediately — an any-failure short-circuit, not an exhaustive sweep.

use crate::graph::{Graph, Vertex};

/// Reusable reachability checker over one graph's vertex space.
///
/// Owns its mark and exploration buffers so repeated invocations during
/// the search allocate nothing.
#[derive(Debug)]
pub struct ConnectivityOracle {
    marks: Vec<u32>,
    stack: Vec<Vertex>,
}

impl ConnectivityOracle {
    /// Create an oracle for graphs with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![0; vertex_count],
            stack: Vec::new(),
        }
    }

    /// True iff every vertex in `frontier` can reach `dst` in the
    /// current state of `graph`.
    ///
    /// Returns `false` as soon as one frontier vertex is proven unable
    /// to reach `dst`; the remaining frontier is not examined.
    ///
    /// # Panics
    ///
    /// Panics if the graph's vertex count differs from the one the
    /// oracle was created for.
    pub fn all_reach(&mut self, graph: &Graph, frontier: &[Vertex], dst: Vertex) -> bool {
        assert_eq!(graph.vertex_count(), self.marks.len());

        self.marks.fill(0);
        self.marks[dst] = 1;
        let mut batch: u32 = 2;

        for &v in frontier {
            if self.marks[v] != 0 {
                // Already discovered by an earlier batch, hence resolved.
                continue;
            }
            self.stack.clear();
            self.stack.push(v);
            'batch: loop {
                let x = match self.stack.pop() {
                    Some(x) => x,
                    // Everything reachable from v is explored and none
                    // of it touches the exit.
                    None => return false,
                };
                for &y in graph.neighbors(x) {
                    if self.marks[y] == 0 {
                        self.marks[y] = batch;
                        self.stack.push(y);
                    } else if self.marks[y] < batch {
                        break 'batch;
                    }
                }
            }
            batch += 1;
        }
        true
    }
}
