use maze_descent::{
    render_map, render_weights, solve, MazeGrid, EMPTY_MARKER, EXIT_MARKER, START_MARKER,
    WALL_MARKER,
};
use std::io;

// Solves a small maze and draws both the map view and the weight view that
// the breadth-first pass leaves behind.
fn main() {
    let e = EMPTY_MARKER;
    let w = WALL_MARKER;
    let mut grid = MazeGrid::from_markers(vec![
        vec![START_MARKER, e, e, w, e],
        vec![w, w, e, w, e],
        vec![e, e, e, e, e],
        vec![e, w, w, w, e],
        vec![e, e, e, w, EXIT_MARKER],
    ])
    .unwrap();
    match solve(&mut grid) {
        Ok(path) => {
            let mut out = io::stdout().lock();
            render_map(&grid, &mut out).unwrap();
            println!();
            render_weights(&grid, &mut out).unwrap();
            println!("Shortest path takes {} step(s).", path.len());
        }
        Err(err) => eprintln!("{}", err),
    }
}
