use grid_astar::{path_points, AstarGrid, AstarSearch};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |  E|
// | # |
// |S  |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have an 8-neighborhood

fn main() {
    let mut grid = AstarGrid::new(3, 3, true);
    grid.set_walkable(1, 1, false).unwrap();
    grid.set_start(0, 0).unwrap();
    grid.set_end(2, 2).unwrap();
    println!("{}", grid);

    let mut search = AstarSearch::new();
    assert!(search.find(&mut grid));
    println!("Path:");
    for p in path_points(&grid) {
        println!("{:?}", p);
    }
}
