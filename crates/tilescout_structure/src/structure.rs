//! Structure capture.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use tilescout_core::{Rect, TileCell, TileGrid};
use tilescout_pattern::TilePattern;

use crate::StructureError;

/// A captured snapshot of a rectangular grid region.
///
/// The cell array is dense over the bounds but sparse in content: cells that
/// failed the capture pattern are `None`. Addressing is row-major
/// (`local_y * width + local_x`) everywhere — capture writes, reads, and the
/// post-load recount all use the same formula. Once built, a structure is
/// only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileStructure {
    bounds: Rect,
    cells: Vec<Option<TileCell>>,
    /// Cached number of non-`None` cells; recomputed after deserialization.
    #[serde(skip)]
    tile_count: usize,
}

impl TileStructure {
    /// Snapshot every pattern-matching cell of the rectangle
    /// `[left, right) x [top, bottom)`.
    ///
    /// Fails with [`StructureError::InvalidRegion`] if the rectangle is
    /// degenerate (`left >= right` or `top >= bottom`) or reaches outside the
    /// grid. Cells failing the pattern are skipped, with each distinct
    /// failure cause logged once per call.
    pub fn capture<G: TileGrid + ?Sized>(
        grid: &G,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        pattern: &TilePattern,
    ) -> Result<Self, StructureError> {
        let degenerate = left >= right || top >= bottom;
        let outside =
            left < 0 || top < 0 || right > grid.width() || bottom > grid.height();
        if degenerate || outside {
            return Err(StructureError::InvalidRegion {
                left,
                top,
                right,
                bottom,
            });
        }

        let width = right - left;
        let height = bottom - top;
        // Widened before multiplying; a huge host grid must not wrap i32.
        let mut cells = vec![None; width as usize * height as usize];
        let mut tile_count = 0;
        let mut logged = HashSet::new();

        for y in top..bottom {
            for x in left..right {
                match pattern.check_cell(grid, x, y) {
                    Ok(()) => {
                        let idx = (y - top) as usize * width as usize + (x - left) as usize;
                        cells[idx] = Some(grid.cell(x, y));
                        tile_count += 1;
                    }
                    Err(cause) => {
                        if logged.insert(cause) {
                            log::debug!("capture skipped cell ({x}, {y}): {cause} mismatch");
                        }
                    }
                }
            }
        }

        Ok(Self {
            bounds: Rect::new(left, top, width, height),
            cells,
            tile_count,
        })
    }

    /// The captured region, in grid-cell coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of captured (non-empty) cells.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn is_empty(&self) -> bool {
        self.tile_count == 0
    }

    /// The captured cell at local coordinates within the bounds, or `None`
    /// for empty slots and out-of-bounds coordinates.
    pub fn cell(&self, local_x: i32, local_y: i32) -> Option<&TileCell> {
        if local_x < 0
            || local_x >= self.bounds.width
            || local_y < 0
            || local_y >= self.bounds.height
        {
            return None;
        }
        let idx = local_y as usize * self.bounds.width as usize + local_x as usize;
        self.cells[idx].as_ref()
    }

    /// Structural validity check used after deserialization.
    pub(crate) fn validate(&self) -> Result<(), StructureError> {
        if self.bounds.width <= 0 || self.bounds.height <= 0 {
            return Err(StructureError::Decode(format!(
                "non-positive bounds: {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        // Positivity is already established; widen before multiplying so
        // decoded bounds cannot wrap i32.
        let expected = self.bounds.width as usize * self.bounds.height as usize;
        if self.cells.len() != expected {
            return Err(StructureError::Decode(format!(
                "cell array length {} does not match bounds {}x{}",
                self.cells.len(),
                self.bounds.width,
                self.bounds.height
            )));
        }
        Ok(())
    }

    /// Recompute the cached tile count from the cell array.
    pub(crate) fn recount(&mut self) {
        self.tile_count = self.cells.iter().filter(|c| c.is_some()).count();
    }
}
