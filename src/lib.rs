//! # grid_astar
//!
//! Grid-based [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! pathfinding over an 8-neighborhood: axis-aligned steps cost 1, diagonal
//! steps cost [SQRT2]. The open set is a growable binary-heap
//! [PriorityQueue] with linear lookup, which is what lets the relaxation
//! step find and update already-discovered cells. Cells live in the grid's
//! flat storage and refer to their path predecessor by index, so a finished
//! search is read back by walking parent indices from the end cell.
//!
//! ```
//! use grid_astar::{path_points, AstarGrid, AstarSearch};
//!
//! let mut grid = AstarGrid::new(3, 3, true);
//! grid.set_walkable(1, 1, false).unwrap();
//! grid.set_start(0, 0).unwrap();
//! grid.set_end(2, 2).unwrap();
//!
//! let mut search = AstarSearch::new();
//! assert!(search.find(&mut grid));
//! println!("{:?}", path_points(&grid));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod host;
pub mod queue;
pub mod search;

pub use cell::{Cell, CellIx, Cost, COST_EPSILON};
pub use error::Error;
pub use grid::AstarGrid;
pub use heuristic::{diagonal, euclidean, manhattan, Heuristic, SQRT2};
pub use host::{AssetLoader, InstancePool};
pub use queue::PriorityQueue;
pub use search::{path_points, trace_path, AstarSearch, OpenEntry};
