use core::fmt;

use grid_util::grid::{BoolGrid, Grid};

use crate::cell::{Cell, CellIx};
use crate::error::Error;

/// 2-D map of [Cell]s in flat row-major storage, with optional start and end
/// markers. The walkable cells form the traversable subgraph; markers are
/// set while building and are not reassigned during a search.
///
/// A grid can be reused across searches: call [reset](AstarGrid::reset)
/// between runs to clear per-cell search state.
#[derive(Clone, Debug)]
pub struct AstarGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Option<CellIx>,
    end: Option<CellIx>,
}

impl AstarGrid {
    /// A `width` x `height` grid with every cell's walkability set to
    /// `walkable`.
    pub fn new(width: usize, height: usize, walkable: bool) -> AstarGrid {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(x, y, walkable));
            }
        }
        AstarGrid {
            cells,
            width,
            height,
            start: None,
            end: None,
        }
    }

    /// Builds a grid from a [BoolGrid], `true` marking blocked squares.
    pub fn from_bool_grid(grid: &BoolGrid) -> AstarGrid {
        let mut out = AstarGrid::new(grid.width(), grid.height(), true);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y) {
                    out.cells[y * out.width + x] = Cell::new(x as i32, y as i32, false);
                }
            }
        }
        out
    }

    /// Sets a cell's walkability. Grid building only: the traversable
    /// subgraph must not change once markers are set and searches run.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) -> Result<(), Error> {
        let ix = self.ix(x, y).ok_or(Error::OutOfBounds)?;
        self.cells[ix.0] = Cell::new(x, y, walkable);
        Ok(())
    }

    /// Marks the start cell. Fails when the coordinate is outside the grid.
    pub fn set_start(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.start = Some(self.ix(x, y).ok_or(Error::OutOfBounds)?);
        Ok(())
    }

    /// Marks the end cell. Fails when the coordinate is outside the grid.
    pub fn set_end(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.end = Some(self.ix(x, y).ok_or(Error::OutOfBounds)?);
        Ok(())
    }

    pub fn start(&self) -> Option<CellIx> {
        self.start
    }

    pub fn end(&self) -> Option<CellIx> {
        self.end
    }

    /// Index of the cell at `(x, y)`, or `None` when out of bounds.
    pub fn ix(&self, x: i32, y: i32) -> Option<CellIx> {
        if self.in_bounds(x, y) {
            Some(CellIx(y as usize * self.width + x as usize))
        } else {
            None
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.ix(x, y).map(|ix| &self.cells[ix.0])
    }

    /// The cell at a previously obtained index.
    pub fn cell(&self, ix: CellIx) -> &Cell {
        &self.cells[ix.0]
    }

    pub(crate) fn cell_mut(&mut self, ix: CellIx) -> &mut Cell {
        &mut self.cells[ix.0]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Clears `g`, `h` and `parent` on every cell ahead of a fresh search
    /// run. Walkability and markers are untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}

impl fmt::Display for AstarGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let ix = CellIx(y as usize * self.width + x as usize);
                let glyph = if self.start == Some(ix) {
                    'S'
                } else if self.end == Some(ix) {
                    'E'
                } else if !self.cells[ix.0].walkable() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
