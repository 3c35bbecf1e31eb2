//! Axis-aligned integer rectangle.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in grid (or world-unit) coordinates.
///
/// `right()` and `bottom()` are exclusive. Wherever a `Rect` is used as a
/// query region, `width > 0` and `height > 0` are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}
