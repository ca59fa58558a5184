use crate::error::Error;
use crate::grid::Position;

/// Wire value for an empty cell in a map file.
pub const EMPTY_MARKER: i32 = 0;
/// Wire value for a wall cell in a map file.
pub const WALL_MARKER: i32 = -1;
/// Wire value for the start cell in a map file.
pub const START_MARKER: i32 = i32::MAX;
/// Wire value for the exit cell in a map file.
pub const EXIT_MARKER: i32 = i32::MIN;

/// What a cell is, decided once when the map is loaded and immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    Exit,
}

impl CellKind {
    /// Maps a raw map-file marker to a kind. Anything outside the four
    /// recognized markers is rejected.
    pub fn from_marker(value: i32) -> Result<CellKind, Error> {
        match value {
            EMPTY_MARKER => Ok(CellKind::Empty),
            WALL_MARKER => Ok(CellKind::Wall),
            START_MARKER => Ok(CellKind::Start),
            EXIT_MARKER => Ok(CellKind::Exit),
            other => Err(Error::InvalidCellValue(other)),
        }
    }
}

/// One grid position: a fixed [CellKind] plus the mutable state the solver
/// derives, namely the BFS distance from the exit and whether the cell ended
/// up on the extracted shortest path.
///
/// `weight` uses [None] as an explicit "not reached by the weighting pass"
/// sentinel; a reached non-exit cell always carries a distance of at least 1
/// and the exit itself is never assigned one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    pos: Position,
    weight: Option<u32>,
    on_shortest_path: bool,
}

impl Cell {
    /// The single validation gate for cell identity: no other place in the
    /// crate constructs a [Cell], so downstream code can rely on kind and
    /// coordinates being well-formed.
    pub fn new(value: i32, row: i32, col: i32) -> Result<Cell, Error> {
        let kind = CellKind::from_marker(value)?;
        if row < 0 || col < 0 {
            return Err(Error::InvalidCoordinate(row, col));
        }
        Ok(Cell {
            kind,
            pos: Position::new(row as usize, col as usize),
            weight: None,
            on_shortest_path: false,
        })
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    pub fn is_exit(&self) -> bool {
        self.kind == CellKind::Exit
    }

    /// Anything but a wall can be traversed.
    pub fn is_passable(&self) -> bool {
        self.kind != CellKind::Wall
    }

    /// BFS distance from the exit, [None] while unvisited.
    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: u32) {
        self.weight = Some(weight);
    }

    pub fn on_shortest_path(&self) -> bool {
        self.on_shortest_path
    }

    pub(crate) fn mark_on_path(&mut self) {
        self.on_shortest_path = true;
    }
}
