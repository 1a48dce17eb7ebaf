use grid_astar::{path_points, AstarGrid, AstarSearch, Heuristic};

// Runs the same 8x8 problem under all three heuristics and prints the
// resulting paths with their accumulated cost at the end cell.

fn build_grid() -> AstarGrid {
    let mut grid = AstarGrid::new(8, 8, true);
    for (x, y) in [(3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (5, 4), (5, 5), (5, 6)] {
        grid.set_walkable(x, y, false).unwrap();
    }
    grid.set_start(0, 0).unwrap();
    grid.set_end(7, 7).unwrap();
    grid
}

fn main() {
    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Diagonal] {
        let mut grid = build_grid();
        let mut search = AstarSearch::with_heuristic(heuristic);
        assert!(search.find(&mut grid));
        let path = path_points(&grid);
        let cost = grid.get(7, 7).unwrap().g;
        println!("{:?}: {} steps, cost {:.4}", heuristic, path.len() - 1, cost);
        for p in path {
            print!(" {:?}", p);
        }
        println!();
    }
}
