use grid_astar::{AstarGrid, AstarSearch, Error};

// The end cell is walled off, so the search exhausts its open set. The
// Result surface tells this apart from a malformed grid; the boolean
// `find` surface reports both as false.

fn main() {
    let mut grid = AstarGrid::new(5, 5, true);
    for (x, y) in [(3, 3), (3, 4), (4, 3)] {
        grid.set_walkable(x, y, false).unwrap();
    }
    grid.set_start(0, 0).unwrap();
    grid.set_end(4, 4).unwrap();
    println!("{}", grid);

    let mut search = AstarSearch::new();
    match search.search(&mut grid) {
        Ok(()) => println!("found a path"),
        Err(Error::NoPath) => println!("no path exists"),
        Err(err) => println!("invalid input: {}", err),
    }
    assert!(!search.find(&mut grid));
}
