// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search as
//! it runs. `PathsFound` is the answer itself; the other counters exist
//! for diagnostics and for reasoning about pruning effectiveness.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Completed full-coverage routes from entry to exit.
    PathsFound,
    /// Calls abandoned because an edge removal would have stranded an
    /// unvisited neighbour.
    StrandedAborts,
    /// Branches cut because a frontier vertex could no longer reach the
    /// exit.
    ConnectivityPrunes,
    /// Reachability queries issued to the connectivity oracle.
    OracleQueries,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "routes found:        {}", self.get(Counters::PathsFound))?;
        writeln!(f, "stranded aborts:     {}", self.get(Counters::StrandedAborts))?;
        writeln!(
            f,
            "connectivity prunes: {}",
            self.get(Counters::ConnectivityPrunes)
        )?;
        write!(f, "oracle queries:      {}", self.get(Counters::OracleQueries))
    }
}
