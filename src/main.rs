// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! Reads a floor plan from stdin (or a file argument), counts the
//! full-coverage duct routes, and prints the count to stdout followed
//! by a newline — nothing else goes to stdout, so the output can be
//! consumed by scripts directly.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cooling_search::{count_paths, Grid, SearchContext};

/// Count full-coverage cooling-duct routes through a datacenter floor.
///
/// The input is a header line "W H" followed by H rows of W cell codes:
/// 0 = free space, 1 = obstruction, 2 = duct entry, 3 = duct exit.
#[derive(Debug, Parser)]
#[command(name = "cooling", version)]
struct Args {
    /// Floor-plan file; stdin when omitted.
    input: Option<PathBuf>,

    /// Print search statistics to stderr after the count.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Grid::parse(BufReader::new(file))
        }
        None => Grid::parse(io::stdin().lock()),
    }
    .context("invalid floor plan")?;

    let mut ctx = SearchContext::new(&grid);
    let count = count_paths(&mut ctx);
    println!("{count}");

    if args.stats {
        eprintln!("{}", ctx.statistics);
    }
    Ok(())
}
