use crate::error::Error;
use crate::grid::MazeGrid;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a maze from a map file.
///
/// The format is the first line holding the grid side length `N`, followed
/// by exactly `N` lines of `N` whitespace-separated markers: `0` for empty,
/// `-1` for a wall, the largest representable integer for the start and the
/// smallest for the exit.
pub fn read_map<P: AsRef<Path>>(path: P) -> Result<MazeGrid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open map file({}).", path.as_ref().display()))?;
    parse_map(BufReader::new(file))
}

/// Parses a maze from any buffered reader; see [read_map] for the format.
pub fn parse_map<R: BufRead>(reader: R) -> Result<MazeGrid> {
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read map line {}.", ind + 1))?;
        lines.push(line);
    }
    Ok(parse_lines(&lines)?)
}

fn parse_lines(lines: &[String]) -> Result<MazeGrid, Error> {
    let Some(size_line) = lines.first() else {
        return Err(Error::EmptyMap);
    };
    let size: usize = size_line
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSize(size_line.trim().to_owned()))?;
    if size == 0 {
        return Err(Error::InvalidSize(size_line.trim().to_owned()));
    }
    if lines.len() != size + 1 {
        return Err(Error::WrongLineCount(size + 1, lines.len()));
    }
    let mut markers = Vec::with_capacity(size);
    for (ind, line) in lines[1..].iter().enumerate() {
        let mut row = Vec::with_capacity(size);
        for token in line.split_whitespace() {
            let value: i32 = token
                .parse()
                .map_err(|_| Error::InvalidToken(ind + 2, token.to_owned()))?;
            row.push(value);
        }
        if row.len() != size {
            return Err(Error::WrongTokenCount(ind + 2, size, row.len()));
        }
        markers.push(row);
    }
    MazeGrid::from_markers(markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use std::io::Cursor;

    const GOOD_MAP: &str = "3\n2147483647 0 0\n-1 -1 0\n0 0 -2147483648\n";

    #[test]
    fn parses_a_well_formed_map() {
        let grid = parse_map(Cursor::new(GOOD_MAP)).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert!(grid.cell(Position::new(0, 0)).unwrap().is_start());
        assert!(grid.cell(Position::new(2, 2)).unwrap().is_exit());
        assert!(grid.cell(Position::new(1, 0)).unwrap().is_wall());
        assert!(grid.cell(Position::new(0, 1)).unwrap().is_empty());
    }

    #[test]
    fn rejects_an_empty_file() {
        let err = parse_map(Cursor::new("")).unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::EmptyMap);
    }

    #[test]
    fn rejects_a_non_numeric_size() {
        let err = parse_map(Cursor::new("three\n0 0 0\n")).unwrap_err();
        assert_eq!(
            err.downcast::<Error>().unwrap(),
            Error::InvalidSize("three".to_owned())
        );
    }

    #[test]
    fn rejects_a_zero_size() {
        let err = parse_map(Cursor::new("0\n")).unwrap_err();
        assert_eq!(
            err.downcast::<Error>().unwrap(),
            Error::InvalidSize("0".to_owned())
        );
    }

    #[test]
    fn rejects_a_wrong_line_count() {
        let err = parse_map(Cursor::new("2\n0 0\n")).unwrap_err();
        assert_eq!(
            err.downcast::<Error>().unwrap(),
            Error::WrongLineCount(3, 2)
        );
    }

    #[test]
    fn rejects_a_short_row() {
        let err = parse_map(Cursor::new("2\n0 0\n0\n")).unwrap_err();
        assert_eq!(
            err.downcast::<Error>().unwrap(),
            Error::WrongTokenCount(3, 2, 1)
        );
    }

    #[test]
    fn rejects_a_non_integer_token() {
        let err = parse_map(Cursor::new("2\n0 x\n0 0\n")).unwrap_err();
        assert_eq!(
            err.downcast::<Error>().unwrap(),
            Error::InvalidToken(2, "x".to_owned())
        );
    }

    #[test]
    fn rejects_an_out_of_set_marker() {
        let err = parse_map(Cursor::new("2\n0 5\n0 0\n")).unwrap_err();
        assert_eq!(err.downcast::<Error>().unwrap(), Error::InvalidCellValue(5));
    }
}
