use crate::cell::CellKind;
use crate::grid::{Direction, MazeGrid, Position};
use std::collections::VecDeque;

/// Breadth-first weighting pass rooted at the exit.
///
/// Every passable cell reachable from the exit gets its graph distance (in
/// orthogonal steps) assigned as weight; the exit itself keeps no weight and
/// unreachable cells stay unvisited. The pass returns early once the start
/// cell is dequeued since nothing closer to the exit remains to discover
/// beyond it.
pub(crate) fn assign_weights(grid: &mut MazeGrid, exit: Position) {
    let mut queue: VecDeque<Position> = VecDeque::new();
    queue.push_back(exit);
    while let Some(current) = queue.pop_front() {
        let Some(cell) = grid.cell(current) else {
            continue;
        };
        if cell.is_start() {
            return;
        }
        // The exit is the only dequeued cell without a weight and sits at
        // implicit distance 0.
        let next_weight = cell.weight().unwrap_or(0) + 1;
        for dir in Direction::ALL {
            let Some(next) = grid.neighbor(current, dir) else {
                continue;
            };
            let Some(neighbor) = grid.cell_mut(next) else {
                continue;
            };
            let eligible = matches!(neighbor.kind(), CellKind::Empty | CellKind::Start)
                && neighbor.weight().is_none();
            if eligible {
                neighbor.set_weight(next_weight);
                queue.push_back(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{EXIT_MARKER, START_MARKER, WALL_MARKER};

    fn weight_at(grid: &MazeGrid, row: usize, col: usize) -> Option<u32> {
        grid.cell(Position::new(row, col)).unwrap().weight()
    }

    #[test]
    fn weights_are_graph_distances() {
        // S . .
        // # # .
        // . . E
        let mut grid = MazeGrid::from_markers(vec![
            vec![START_MARKER, 0, 0],
            vec![WALL_MARKER, WALL_MARKER, 0],
            vec![0, 0, EXIT_MARKER],
        ])
        .unwrap();
        assign_weights(&mut grid, Position::new(2, 2));
        assert_eq!(weight_at(&grid, 1, 2), Some(1));
        assert_eq!(weight_at(&grid, 2, 1), Some(1));
        assert_eq!(weight_at(&grid, 0, 2), Some(2));
        assert_eq!(weight_at(&grid, 2, 0), Some(2));
        assert_eq!(weight_at(&grid, 0, 1), Some(3));
        assert_eq!(weight_at(&grid, 0, 0), Some(4));
    }

    #[test]
    fn exit_and_walls_stay_unweighted() {
        let mut grid = MazeGrid::from_markers(vec![
            vec![START_MARKER, 0],
            vec![WALL_MARKER, EXIT_MARKER],
        ])
        .unwrap();
        assign_weights(&mut grid, Position::new(1, 1));
        assert_eq!(weight_at(&grid, 1, 1), None);
        assert_eq!(weight_at(&grid, 1, 0), None);
        assert_eq!(weight_at(&grid, 0, 1), Some(1));
        assert_eq!(weight_at(&grid, 0, 0), Some(2));
    }

    #[test]
    fn unreachable_cells_stay_unvisited() {
        // S # E
        let mut grid =
            MazeGrid::from_markers(vec![vec![START_MARKER, WALL_MARKER, EXIT_MARKER]]).unwrap();
        assign_weights(&mut grid, Position::new(0, 2));
        assert_eq!(weight_at(&grid, 0, 0), None);
    }

    #[test]
    fn pass_stops_at_the_start() {
        // Cells only reachable through the start are never expanded.
        // E . S . .
        let mut grid =
            MazeGrid::from_markers(vec![vec![EXIT_MARKER, 0, START_MARKER, 0, 0]]).unwrap();
        assign_weights(&mut grid, Position::new(0, 0));
        assert_eq!(weight_at(&grid, 0, 1), Some(1));
        assert_eq!(weight_at(&grid, 0, 2), Some(2));
        assert_eq!(weight_at(&grid, 0, 3), None);
        assert_eq!(weight_at(&grid, 0, 4), None);
    }

    #[test]
    fn weighting_twice_is_a_no_op() {
        let mut grid = MazeGrid::from_markers(vec![
            vec![START_MARKER, 0, 0],
            vec![WALL_MARKER, WALL_MARKER, 0],
            vec![0, 0, EXIT_MARKER],
        ])
        .unwrap();
        assign_weights(&mut grid, Position::new(2, 2));
        let snapshot = grid
            .cells()
            .map(|cell| cell.weight())
            .collect::<Vec<Option<u32>>>();
        assign_weights(&mut grid, Position::new(2, 2));
        let rerun = grid
            .cells()
            .map(|cell| cell.weight())
            .collect::<Vec<Option<u32>>>();
        assert_eq!(snapshot, rerun);
    }
}
