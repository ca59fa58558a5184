use crate::cell::{Cell, CellKind};
use crate::error::Error;
use core::fmt;

/// A row/column index pair into a [MazeGrid].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal step directions. [Direction::ALL] fixes the neighbour
/// visit order used by both solver passes, which keeps tie-breaking
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A rectangular maze: a fixed-size grid of [Cell]s created once by the
/// loader and mutated in place by the weighting and extraction passes.
/// Never resized.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl MazeGrid {
    /// Builds a grid from pre-constructed cells. Rejects an empty grid and
    /// ragged rows; cell identity itself is validated by [Cell::new].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<MazeGrid, Error> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyMap);
        }
        let cols = rows[0].len();
        for row in &rows {
            if row.len() != cols {
                return Err(Error::InconsistentRow(cols, row.len()));
            }
        }
        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect::<Vec<Cell>>();
        debug_assert!(cells
            .iter()
            .enumerate()
            .all(|(ix, c)| c.row() * cols + c.col() == ix));
        Ok(MazeGrid {
            cells,
            rows: row_count,
            cols,
        })
    }

    /// Builds a grid straight from raw map-file markers, assigning each cell
    /// the row and column it occupies in the matrix.
    pub fn from_markers(markers: Vec<Vec<i32>>) -> Result<MazeGrid, Error> {
        let mut rows = Vec::with_capacity(markers.len());
        for (r, row) in markers.into_iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (c, value) in row.into_iter().enumerate() {
                cells.push(Cell::new(value, r as i32, c as i32)?);
            }
            rows.push(cells);
        }
        MazeGrid::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.in_bounds(pos) {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.in_bounds(pos) {
            self.cells.get_mut(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Row-major iteration over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The orthogonal neighbour of `pos` in the given direction, or [None]
    /// when that neighbour would fall outside the grid.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::Up if pos.row > 0 => Position::new(pos.row - 1, pos.col),
            Direction::Down => Position::new(pos.row + 1, pos.col),
            Direction::Left if pos.col > 0 => Position::new(pos.row, pos.col - 1),
            Direction::Right => Position::new(pos.row, pos.col + 1),
            _ => return None,
        };
        self.in_bounds(next).then_some(next)
    }

    /// Largest assigned weight on the grid, 0 when nothing has been weighted
    /// yet. The renderer uses this to pad the weight view.
    pub fn max_weight(&self) -> u32 {
        self.cells
            .iter()
            .filter_map(|cell| cell.weight())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let glyph = match cell.kind() {
                    CellKind::Wall => '#',
                    CellKind::Start => 'S',
                    CellKind::Exit => 'E',
                    CellKind::Empty if cell.on_shortest_path() => '*',
                    CellKind::Empty => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
