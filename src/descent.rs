use crate::error::Error;
use crate::grid::{Direction, MazeGrid, Position};

/// Greedy hill-descent from the start toward the exit on an already weighted
/// grid.
///
/// Each visited cell is marked as on the shortest path and appended to the
/// returned sequence; the exit terminates the walk and is never appended.
/// Fails with [Error::NoPathFound] when no neighbour offers a way down the
/// gradient (start and exit are disconnected) and with [Error::PathTooLong]
/// when the step count breaches the defensive `(rows + 1) * (cols + 1)`
/// bound, which a correctly weighted grid never reaches.
pub(crate) fn extract_path(grid: &mut MazeGrid, start: Position) -> Result<Vec<Position>, Error> {
    let max_steps = (grid.rows() + 1) * (grid.cols() + 1);
    let mut path: Vec<Position> = Vec::new();
    let mut current = start;
    loop {
        match grid.cell(current) {
            Some(cell) if cell.is_exit() => return Ok(path),
            Some(_) => {}
            None => return Err(Error::NoPathFound(current)),
        }
        if path.len() >= max_steps {
            return Err(Error::PathTooLong(max_steps));
        }
        if let Some(cell) = grid.cell_mut(current) {
            cell.mark_on_path();
        }
        path.push(current);
        current = descend_step(grid, current).ok_or(Error::NoPathFound(current))?;
    }
}

/// Picks the next cell: the exit wins outright, otherwise the first
/// minimum-weight passable neighbour in [Direction::ALL] order.
fn descend_step(grid: &MazeGrid, from: Position) -> Option<Position> {
    let mut best: Option<(Position, u32)> = None;
    for dir in Direction::ALL {
        let Some(next) = grid.neighbor(from, dir) else {
            continue;
        };
        let Some(cell) = grid.cell(next) else {
            continue;
        };
        if cell.is_exit() {
            return Some(next);
        }
        if !cell.is_passable() {
            continue;
        }
        if let Some(weight) = cell.weight() {
            if best.map_or(true, |(_, best_weight)| weight < best_weight) {
                best = Some((next, weight));
            }
        }
    }
    best.map(|(pos, _)| pos)
}
