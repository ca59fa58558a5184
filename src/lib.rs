//! # maze_descent
//!
//! A grid-based maze solving system. Finds the shortest path between a start
//! and an exit marker on a uniform-cost 4-grid by running a
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search)
//! weighting pass rooted at the exit, then greedily descending the weight
//! gradient from the start until the exit is adjacent. Ships with a map-file
//! loader and a colored terminal renderer; [solve] is the only entry point
//! the surrounding glue needs.

pub mod cell;
mod descent;
pub mod error;
pub mod grid;
pub mod loader;
pub mod render;
mod weights;

pub use cell::{Cell, CellKind, EMPTY_MARKER, EXIT_MARKER, START_MARKER, WALL_MARKER};
pub use error::Error;
pub use grid::{Direction, MazeGrid, Position};
pub use loader::{parse_map, read_map};
pub use render::{render_map, render_weights};

use itertools::iproduct;
use log::info;

/// Solves the maze in place: locates the unique exit and start cells, runs
/// the weighting pass, then extracts and returns the shortest path from the
/// start up to (but excluding) the exit.
///
/// A grid without exactly one start and exactly one exit is rejected before
/// any traversal; a start cut off from the exit by walls surfaces as
/// [Error::NoPathFound].
pub fn solve(grid: &mut MazeGrid) -> Result<Vec<Position>, Error> {
    let exit = locate_unique(
        grid,
        CellKind::Exit,
        Error::MissingExit,
        Error::MultipleExit,
    )?;
    let start = locate_unique(
        grid,
        CellKind::Start,
        Error::MissingStart,
        Error::MultipleStart,
    )?;
    info!(
        "solving {}x{} maze: start {}, exit {}",
        grid.rows(),
        grid.cols(),
        start,
        exit
    );
    weights::assign_weights(grid, exit);
    let path = descent::extract_path(grid, start)?;
    info!("extracted shortest path of {} step(s)", path.len());
    Ok(path)
}

/// Row-major scan for the single cell of the given kind.
fn locate_unique(
    grid: &MazeGrid,
    kind: CellKind,
    missing: Error,
    multiple: fn(Position, Position) -> Error,
) -> Result<Position, Error> {
    let mut found: Option<Position> = None;
    for (row, col) in iproduct!(0..grid.rows(), 0..grid.cols()) {
        let pos = Position::new(row, col);
        let Some(cell) = grid.cell(pos) else {
            continue;
        };
        if cell.kind() == kind {
            match found {
                None => found = Some(pos),
                Some(first) => return Err(multiple(first, pos)),
            }
        }
    }
    found.ok_or(missing)
}
