use maze_descent::{solve, MazeGrid, EMPTY_MARKER, EXIT_MARKER, START_MARKER, WALL_MARKER};

// In this example a path is found on a maze with shape
// S . .
// # # .
// . . E
// S marks the start
// E marks the exit
fn main() {
    let mut grid = MazeGrid::from_markers(vec![
        vec![START_MARKER, EMPTY_MARKER, EMPTY_MARKER],
        vec![WALL_MARKER, WALL_MARKER, EMPTY_MARKER],
        vec![EMPTY_MARKER, EMPTY_MARKER, EXIT_MARKER],
    ])
    .unwrap();
    if let Ok(path) = solve(&mut grid) {
        println!("A path has been found:");
        for pos in path {
            println!("{}", pos);
        }
        print!("{}", grid);
    }
}
