use crate::grid::Position;
use core::fmt;
use std::error;

/// Everything that can go wrong between reading a map file and walking out
/// of the maze. Cell construction errors come first, then the structural
/// checks performed on a whole grid, then the solver failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidCellValue(i32),
    InvalidCoordinate(i32, i32),
    EmptyMap,
    InconsistentRow(usize, usize),
    InvalidSize(String),
    WrongLineCount(usize, usize),
    WrongTokenCount(usize, usize, usize),
    InvalidToken(usize, String),
    MissingStart,
    MissingExit,
    MultipleStart(Position, Position),
    MultipleExit(Position, Position),
    NoPathFound(Position),
    PathTooLong(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCellValue(value) => {
                write!(f, "Value {} is not an allowed cell marker.", value)
            }
            Error::InvalidCoordinate(row, col) => {
                write!(f, "Cell index ({}, {}) must be non-negative.", row, col)
            }
            Error::EmptyMap => write!(f, "Map must have at least one row and one column."),
            Error::InconsistentRow(expected, got) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expected, got
            ),
            Error::InvalidSize(token) => write!(
                f,
                "First map line must hold the grid side length, cannot convert '{}' to a positive integer.",
                token
            ),
            Error::WrongLineCount(expected, got) => {
                write!(f, "Map must have {} line(s), given {}.", expected, got)
            }
            Error::WrongTokenCount(line, expected, got) => write!(
                f,
                "Map line {} must have {} cell(s), given {}.",
                line, expected, got
            ),
            Error::InvalidToken(line, token) => write!(
                f,
                "Map line {} holds '{}', which is not an integer.",
                line, token
            ),
            Error::MissingStart => write!(f, "Map doesn't contain a start cell."),
            Error::MissingExit => write!(f, "Map doesn't contain an exit cell."),
            Error::MultipleStart(first, second) => write!(
                f,
                "Expect only one start cell, given two ({}, {}).",
                first, second
            ),
            Error::MultipleExit(first, second) => write!(
                f,
                "Expect only one exit cell, given two ({}, {}).",
                first, second
            ),
            Error::NoPathFound(pos) => write!(
                f,
                "Deadlocked at {}: no next step leads toward the exit.",
                pos
            ),
            Error::PathTooLong(max_steps) => {
                write!(f, "Deadlocked: exceeded the limit of {} step(s).", max_steps)
            }
        }
    }
}

impl error::Error for Error {}
