use std::cmp::Ordering;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use log::{debug, info, warn};
use num_traits::Zero;

use crate::cell::{CellIx, Cost};
use crate::error::Error;
use crate::grid::AstarGrid;
use crate::heuristic::{Heuristic, SQRT2};
use crate::queue::PriorityQueue;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Edge weight of an axis-aligned step.
const DIRECT_COST: f32 = 1.0;

/// Open-set element: a cell index with the costs it was discovered at.
///
/// Ordering goes through the epsilon-tolerant [Cost] comparison of the
/// estimated total `f`, so the open queue's natural ordering is the search's
/// tie-tolerant priority.
#[derive(Clone, Copy, Debug)]
pub struct OpenEntry {
    pub cell: CellIx,
    pub g: Cost,
    pub h: Cost,
}

impl OpenEntry {
    pub fn f(&self) -> Cost {
        self.g + self.h
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f() == other.f()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f().cmp(&other.f())
    }
}

/// A* search over an [AstarGrid] with an 8-neighborhood: axis-aligned steps
/// cost 1, diagonal steps cost [SQRT2].
///
/// Owns its open queue and closed set and reuses them across runs. A search
/// instance drives one search at a time; the exclusive borrows on
/// [search](AstarSearch::search) make a second in-flight run on the same
/// instance unrepresentable.
#[derive(Debug)]
pub struct AstarSearch {
    open: PriorityQueue<OpenEntry>,
    closed: FxIndexSet<CellIx>,
    heuristic: Heuristic,
}

impl AstarSearch {
    /// A search using the default [Manhattan](Heuristic::Manhattan)
    /// heuristic.
    pub fn new() -> AstarSearch {
        AstarSearch::with_heuristic(Heuristic::default())
    }

    /// A search using the given heuristic.
    pub fn with_heuristic(heuristic: Heuristic) -> AstarSearch {
        AstarSearch {
            open: PriorityQueue::new(),
            closed: FxIndexSet::default(),
            heuristic,
        }
    }

    /// Pre-sizes the open queue and closed set, for callers that know the
    /// grid size up front.
    pub fn with_capacity(capacity: usize) -> AstarSearch {
        AstarSearch {
            open: PriorityQueue::with_capacity(capacity),
            closed: FxIndexSet::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
            heuristic: Heuristic::default(),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Runs the search, reporting success as a bare boolean: `false` covers
    /// both invalid input and an exhausted open set, exactly like the
    /// classic surface. Use [search](AstarSearch::search) to tell the
    /// failure modes apart.
    pub fn find(&mut self, grid: &mut AstarGrid) -> bool {
        self.search(grid).is_ok()
    }

    /// Runs the search. On success the grid's parent chain is final and can
    /// be read back with [trace_path] or [path_points].
    ///
    /// Fails fast with [Error::EmptyGrid], [Error::NoStart] or
    /// [Error::NoEnd] before touching any state; [Error::NoPath] reports an
    /// exhausted open set.
    pub fn search(&mut self, grid: &mut AstarGrid) -> Result<(), Error> {
        if grid.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let start = grid.start().ok_or(Error::NoStart)?;
        let end = grid.end().ok_or(Error::NoEnd)?;
        let start_point = grid.cell(start).point();
        let end_point = grid.cell(end).point();
        info!(
            "searching {}x{} grid from {} to {}",
            grid.width(),
            grid.height(),
            start_point,
            end_point
        );

        self.open.clear();
        self.closed.clear();
        let h = self.heuristic.estimate(start_point, end_point);
        {
            let cell = grid.cell_mut(start);
            cell.g = 0.0;
            cell.h = h;
            cell.parent = None;
        }
        self.open.enqueue(OpenEntry {
            cell: start,
            g: Cost::zero(),
            h: Cost(h),
        })?;

        while let Some(entry) = self.open.dequeue() {
            if !self.closed.insert(entry.cell) {
                // Stale duplicate left behind by an earlier relaxation.
                continue;
            }
            if entry.cell == end {
                info!("goal reached after closing {} cells", self.closed.len());
                return Ok(());
            }
            self.expand(grid, entry.cell, end)?;
        }
        warn!("open set exhausted, {} unreachable from {}", end_point, start_point);
        Err(Error::NoPath)
    }

    /// Relaxes the 8 neighbors of a just-closed cell.
    fn expand(&mut self, grid: &mut AstarGrid, current: CellIx, end: CellIx) -> Result<(), Error> {
        let Point { x, y } = grid.cell(current).point();

        self.relax(grid, current, end, x - 1, y, DIRECT_COST)?;
        self.relax(grid, current, end, x + 1, y, DIRECT_COST)?;
        self.relax(grid, current, end, x, y - 1, DIRECT_COST)?;
        self.relax(grid, current, end, x, y + 1, DIRECT_COST)?;

        self.relax(grid, current, end, x - 1, y - 1, SQRT2)?;
        self.relax(grid, current, end, x - 1, y + 1, SQRT2)?;
        self.relax(grid, current, end, x + 1, y - 1, SQRT2)?;
        self.relax(grid, current, end, x + 1, y + 1, SQRT2)?;
        Ok(())
    }

    fn relax(
        &mut self,
        grid: &mut AstarGrid,
        current: CellIx,
        end: CellIx,
        x: i32,
        y: i32,
        weight: f32,
    ) -> Result<(), Error> {
        let Some(ix) = grid.ix(x, y) else {
            return Ok(());
        };
        if !grid.cell(ix).walkable() || self.closed.contains(&ix) {
            return Ok(());
        }
        let tentative = grid.cell(current).g + weight;
        match self.open.find(|entry| entry.cell == ix).map(|entry| entry.g) {
            None => {
                let h = self
                    .heuristic
                    .estimate(grid.cell(ix).point(), grid.cell(end).point());
                let cell = grid.cell_mut(ix);
                cell.parent = Some(current);
                cell.g = tentative;
                cell.h = h;
                self.open.enqueue(OpenEntry {
                    cell: ix,
                    g: Cost(tentative),
                    h: Cost(h),
                })?;
            }
            // Relaxation triggers on any strict improvement; the epsilon
            // tolerance applies to open-set ordering only.
            Some(open_g) if open_g.0 > tentative => {
                debug!("relaxing ({}, {}): {} -> {}", x, y, open_g.0, tentative);
                let h = Cost(grid.cell(ix).h);
                let cell = grid.cell_mut(ix);
                cell.g = tentative;
                cell.parent = Some(current);
                if let Some(entry) = self.open.find_mut(|entry| entry.cell == ix) {
                    entry.g = Cost(tentative);
                }
                // Re-insert under the lowered priority. The updated slot
                // stays where it is until dequeued and is then skipped by
                // the closed-set check.
                self.open.enqueue(OpenEntry {
                    cell: ix,
                    g: Cost(tentative),
                    h,
                })?;
            }
            Some(_) => {}
        }
        Ok(())
    }
}

impl Default for AstarSearch {
    fn default() -> AstarSearch {
        AstarSearch::new()
    }
}

/// Walks parent references from the end cell, yielding coordinates in
/// end-to-start order. Lazy and one-shot; call again to restart from the
/// end cell. Meaningful after a successful search.
pub fn trace_path(grid: &AstarGrid) -> impl Iterator<Item = Point> + '_ {
    itertools::unfold(grid.end(), move |state| {
        let ix = (*state)?;
        let cell = grid.cell(ix);
        *state = cell.parent;
        Some(cell.point())
    })
}

/// The reconstructed path in start-to-end order.
pub fn path_points(grid: &AstarGrid) -> Vec<Point> {
    let mut path = trace_path(grid).collect::<Vec<Point>>();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the case in which start and end coincide is handled.
    #[test]
    fn equal_start_and_end() {
        let mut grid = AstarGrid::new(1, 1, true);
        grid.set_start(0, 0).unwrap();
        grid.set_end(0, 0).unwrap();
        let mut search = AstarSearch::new();
        assert!(search.find(&mut grid));
        assert_eq!(path_points(&grid), vec![Point::new(0, 0)]);
    }

    /// Asserts that the optimal 3 step solution around the obstacle is
    /// found.
    #[test]
    fn solve_simple_problem() {
        // Corresponds to the following 3x3 grid:
        //  ___
        // |  E|
        // | # |
        // |S  |
        //  ___
        let mut grid = AstarGrid::new(3, 3, true);
        grid.set_walkable(1, 1, false).unwrap();
        grid.set_start(0, 0).unwrap();
        grid.set_end(2, 2).unwrap();
        let mut search = AstarSearch::new();
        assert!(search.find(&mut grid));
        let path = path_points(&grid);
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(path[3], Point::new(2, 2));
    }

    #[test]
    fn missing_markers_fail_fast() {
        let mut search = AstarSearch::new();

        let mut empty = AstarGrid::new(0, 0, true);
        assert_eq!(search.search(&mut empty), Err(Error::EmptyGrid));

        let mut no_start = AstarGrid::new(2, 2, true);
        no_start.set_end(1, 1).unwrap();
        assert_eq!(search.search(&mut no_start), Err(Error::NoStart));

        let mut no_end = AstarGrid::new(2, 2, true);
        no_end.set_start(0, 0).unwrap();
        assert_eq!(search.search(&mut no_end), Err(Error::NoEnd));
    }

    #[test]
    fn walled_in_start_has_no_path() {
        let mut grid = AstarGrid::new(3, 3, true);
        for (x, y) in [(1, 0), (0, 1), (1, 1)] {
            grid.set_walkable(x, y, false).unwrap();
        }
        grid.set_start(0, 0).unwrap();
        grid.set_end(2, 2).unwrap();
        let mut search = AstarSearch::new();
        assert_eq!(search.search(&mut grid), Err(Error::NoPath));
        assert!(!search.find(&mut grid));
    }

    #[test]
    fn open_entry_orders_by_total_cost() {
        let near = OpenEntry {
            cell: CellIx(0),
            g: Cost(1.0),
            h: Cost(2.0),
        };
        let far = OpenEntry {
            cell: CellIx(1),
            g: Cost(4.0),
            h: Cost(2.0),
        };
        let noisy = OpenEntry {
            cell: CellIx(2),
            g: Cost(1.005),
            h: Cost(2.0),
        };
        assert!(near < far);
        assert_eq!(near, noisy);
    }
}
