//! Fuzzes the search by checking for many random grids that a path is found
//! exactly when the end cell is reachable from the start cell, and that
//! found paths are well formed.
use std::collections::VecDeque;

use grid_astar::{path_points, AstarGrid, AstarSearch, Heuristic};
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> AstarGrid {
    let mut grid = AstarGrid::new(w, h, true);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            grid.set_walkable(x, y, !rng.gen_bool(0.4)).unwrap();
        }
    }
    grid.set_walkable(0, 0, true).unwrap();
    grid.set_walkable(w as i32 - 1, h as i32 - 1, true).unwrap();
    grid.set_start(0, 0).unwrap();
    grid.set_end(w as i32 - 1, h as i32 - 1).unwrap();
    grid
}

/// Reference reachability: breadth-first flood fill over the walkable
/// 8-neighborhood.
fn reachable(grid: &AstarGrid) -> bool {
    let start = grid.start().unwrap();
    let end = grid.end().unwrap();
    let mut seen = vec![false; grid.len()];
    let mut frontier = VecDeque::new();
    seen[start.index()] = true;
    frontier.push_back(grid.cell(start).point());
    while let Some(p) = frontier.pop_front() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(ix) = grid.ix(p.x + dx, p.y + dy) else {
                    continue;
                };
                if seen[ix.index()] || !grid.cell(ix).walkable() {
                    continue;
                }
                if ix == end {
                    return true;
                }
                seen[ix.index()] = true;
                frontier.push_back(grid.cell(ix).point());
            }
        }
    }
    start == end
}

fn visualize_grid(grid: &AstarGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("E");
            } else if !grid.get(x, y).unwrap().walkable() {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_well_formed(grid: &AstarGrid, path: &[Point], start: &Point, end: &Point) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(end));
    for p in path {
        assert!(grid.get(p.x, p.y).unwrap().walkable());
    }
    for pair in path.windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        assert!(dx <= 1 && dy <= 1 && dx + dy > 0);
    }
    for (i, p) in path.iter().enumerate() {
        assert!(!path[i + 1..].contains(p));
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Diagonal] {
        let mut search = AstarSearch::with_heuristic(heuristic);
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng);
            let expected = reachable(&grid);
            let found = search.find(&mut grid);
            // Show the grid if the outcome disagrees with the flood fill
            if found != expected {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(found, expected);
            if found {
                assert_well_formed(&grid, &path_points(&grid), &start, &end);
            }
        }
    }
}

#[test]
fn fuzz_repeat_runs_are_stable() {
    const N: usize = 8;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(7);
    let mut search = AstarSearch::with_capacity(N * N);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let first_found = search.find(&mut grid);
        let first_path = path_points(&grid);
        grid.reset();
        let second_found = search.find(&mut grid);
        let second_path = path_points(&grid);
        assert_eq!(first_found, second_found);
        if first_found {
            assert_eq!(first_path, second_path);
        }
    }
}
