use std::cmp::Ordering;
use std::ops::Add;

use grid_util::point::Point;
use num_traits::Zero;

/// Costs closer than this compare equal when ordering the open set.
pub const COST_EPSILON: f32 = 0.01;

/// Index of a cell in its grid's flat storage.
///
/// Stands in for the parent back-pointer of the classic formulation: cells
/// refer to their predecessor by index, `None` marking the root of the
/// parent tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIx(pub(crate) usize);

impl CellIx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Open-set priority. The ordering tolerates float noise: values within
/// [COST_EPSILON] of each other compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cost(pub f32);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < COST_EPSILON
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        let delta = self.0 - other.0;
        if delta.abs() < COST_EPSILON {
            Ordering::Equal
        } else if delta > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Zero for Cost {
    fn zero() -> Cost {
        Cost(0.0)
    }

    fn is_zero(&self) -> bool {
        *self == Cost(0.0)
    }
}

/// A single grid square. Walkability is fixed at construction; `g`, `h` and
/// `parent` are mutated by the search and cleared by [reset](Cell::reset).
#[derive(Clone, Debug)]
pub struct Cell {
    x: i32,
    y: i32,
    walkable: bool,
    /// Accumulated cost from the start cell.
    pub g: f32,
    /// Heuristic estimate to the end cell.
    pub h: f32,
    /// Predecessor on the current best path.
    pub parent: Option<CellIx>,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32, walkable: bool) -> Cell {
        Cell {
            x,
            y,
            walkable,
            g: 0.0,
            h: 0.0,
            parent: None,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn walkable(&self) -> bool {
        self.walkable
    }

    /// Estimated total cost; derived from `g` and `h`, never stored.
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    /// Clears search state so the owning grid can be reused.
    pub fn reset(&mut self) {
        self.g = 0.0;
        self.h = 0.0;
        self.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_tolerates_float_noise() {
        assert_eq!(Cost(1.0), Cost(1.009));
        assert_ne!(Cost(1.0), Cost(1.011));
        assert_eq!(Cost(2.0).cmp(&Cost(1.0)), Ordering::Greater);
        assert_eq!(Cost(1.0).cmp(&Cost(2.0)), Ordering::Less);
        assert!(Cost::zero().is_zero());
        assert_eq!(Cost(1.0) + Cost(0.5), Cost(1.5));
    }

    #[test]
    fn f_is_derived() {
        let mut cell = Cell::new(2, 3, true);
        cell.g = 1.5;
        cell.h = 2.5;
        assert_eq!(cell.f(), 4.0);
    }

    #[test]
    fn reset_clears_search_state() {
        let mut cell = Cell::new(0, 0, true);
        cell.g = 3.0;
        cell.h = 1.0;
        cell.parent = Some(CellIx(7));
        cell.reset();
        assert_eq!(cell.g, 0.0);
        assert_eq!(cell.h, 0.0);
        assert!(cell.parent.is_none());
        assert!(cell.walkable());
    }
}
