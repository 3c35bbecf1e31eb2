//! Grid accessor trait and a dense in-memory implementation.

use crate::{Rect, TileCell};

/// One grid cell spans this many world position units.
pub const TILE_SIZE: i32 = 16;

/// Convert a world-unit coordinate to a tile coordinate.
///
/// Arithmetic shift floors toward negative infinity, so world -1 lands on
/// tile -1, not tile 0.
pub const fn world_to_tile(world: i32) -> i32 {
    world >> 4
}

/// Read-only accessor over the live tile grid.
///
/// Hosts implement this; everything in the pattern, finder, and structure
/// crates reads cells through it and never mutates the grid. Out-of-range
/// coordinates must yield [`TileCell::default`] rather than fail.
pub trait TileGrid {
    /// Number of valid columns; valid x is `0..width()`.
    fn width(&self) -> i32;

    /// Number of valid rows; valid y is `0..height()`.
    fn height(&self) -> i32;

    /// Attribute snapshot of the cell at `(x, y)`.
    fn cell(&self, x: i32, y: i32) -> TileCell;

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }
}

/// Dense row-major grid of cells.
///
/// The reference [`TileGrid`] implementation, used by hosts that own their
/// map in memory and by tests. Writes outside the grid are ignored.
#[derive(Debug, Clone)]
pub struct GridBuffer {
    width: i32,
    height: i32,
    cells: Vec<TileCell>,
}

impl GridBuffer {
    /// Create a grid of default (empty) cells.
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![TileCell::default(); size],
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: TileCell) {
        if self.in_bounds(x, y) {
            let idx = (y * self.width + x) as usize;
            self.cells[idx] = cell;
        }
    }

    /// Fill every cell of `rect` (clipped to the grid) with `cell`.
    pub fn fill_rect(&mut self, rect: Rect, cell: TileCell) {
        for y in rect.top..rect.bottom() {
            for x in rect.left..rect.right() {
                self.set(x, y, cell);
            }
        }
    }
}

impl TileGrid for GridBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn cell(&self, x: i32, y: i32) -> TileCell {
        if self.in_bounds(x, y) {
            self.cells[(y * self.width + x) as usize]
        } else {
            TileCell::default()
        }
    }
}
