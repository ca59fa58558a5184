use anyhow::{Context, Result};
use clap::Parser;
use maze_descent::{read_map, render_map, render_weights, solve};
use std::io::{self, Write};
use std::path::PathBuf;

/// Solves a maze map file and draws it with the shortest path highlighted.
#[derive(Debug, Parser)]
struct CLIArgs {
    /// Path to the map file: a side length followed by that many rows of
    /// cell markers.
    map_path: PathBuf,
    /// Also print the per-cell distances assigned by the weighting pass.
    #[arg(long)]
    weights: bool,
}

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut grid = read_map(&args.map_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.map_path.display()
        )
    })?;

    let mut out = io::stdout().lock();
    render_map(&grid, &mut out)?;
    writeln!(out)?;

    let path = solve(&mut grid)?;

    if args.weights {
        render_weights(&grid, &mut out)?;
        writeln!(out)?;
    }
    render_map(&grid, &mut out)?;
    writeln!(out, "Shortest path takes {} step(s).", path.len())?;

    Ok(())
}
