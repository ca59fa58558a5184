use crate::cell::{Cell, CellKind};
use crate::grid::{MazeGrid, Position};
use colored::Colorize;
use std::io::{self, Write};

/// Draws the maze to the given sink, one styled character per cell: walls as
/// `#` on blue, the start as `*` on red, the exit and any cell on the
/// discovered path on yellow. Takes the grid read-only; all state lives in
/// the grid itself.
pub fn render_map<W: Write>(grid: &MazeGrid, out: &mut W) -> io::Result<()> {
    render(grid, out, 1, false)
}

/// Like [render_map] but additionally prints each weighted cell's distance
/// from the exit, right-aligned to the widest assigned weight.
pub fn render_weights<W: Write>(grid: &MazeGrid, out: &mut W) -> io::Result<()> {
    let width = digit_count(grid.max_weight()) + 1;
    render(grid, out, width, true)
}

fn render<W: Write>(grid: &MazeGrid, out: &mut W, width: usize, weights: bool) -> io::Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if let Some(cell) = grid.cell(Position::new(row, col)) {
                write_cell(cell, out, width, weights)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_cell<W: Write>(cell: &Cell, out: &mut W, width: usize, weights: bool) -> io::Result<()> {
    let text = match cell.kind() {
        CellKind::Wall => return write!(out, "{}", "#".repeat(width).on_blue()),
        CellKind::Start => return write!(out, "{}", "*".repeat(width).on_red()),
        CellKind::Exit => return write!(out, "{}", " ".repeat(width).on_yellow()),
        CellKind::Empty => match cell.weight() {
            Some(weight) if weights => format!("{:>width$}", weight),
            _ => " ".repeat(width),
        },
    };
    if cell.on_shortest_path() {
        write!(out, "{}", text.on_yellow())
    } else {
        write!(out, "{}", text)
    }
}

fn digit_count(value: u32) -> usize {
    value.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{EXIT_MARKER, START_MARKER, WALL_MARKER};
    use crate::solve;

    fn solved_grid() -> MazeGrid {
        let mut grid = MazeGrid::from_markers(vec![
            vec![START_MARKER, 0, 0],
            vec![WALL_MARKER, WALL_MARKER, 0],
            vec![0, 0, EXIT_MARKER],
        ])
        .unwrap();
        solve(&mut grid).unwrap();
        grid
    }

    #[test]
    fn map_view_is_one_char_per_cell() {
        colored::control::set_override(false);
        let grid = solved_grid();
        let mut out = Vec::new();
        render_map(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "*  \n## \n   \n");
    }

    #[test]
    fn weight_view_pads_to_the_widest_weight() {
        colored::control::set_override(false);
        let grid = solved_grid();
        let mut out = Vec::new();
        render_weights(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Max weight is 4, so every cell is two characters wide.
        assert_eq!(text, "** 3 2\n#### 1\n 2 1  \n");
    }
}
