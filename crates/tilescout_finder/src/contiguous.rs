//! Contiguous surface tracing.
//!
//! Floor and ceiling searches take an *open-space* pattern: the trace moves
//! through matching (open) cells until the first non-matching (surface) cell
//! stops it, then the surface's contiguous width is measured. All traces are
//! bounded by an explicit maximum distance and terminate unconditionally.

use tilescout_core::TileGrid;
use tilescout_pattern::TilePattern;

/// Result of [`find_top_left_of_square`].
///
/// `x`/`y` are the best edge coordinates found even when `found` is false;
/// callers must check the flag, not just the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSearch {
    pub found: bool,
    pub x: i32,
    pub y: i32,
}

/// Result of [`floor_width`] / [`ceiling_width`].
///
/// `width` is 0 when the fall/rise range was exhausted before a surface was
/// hit; `x` is then the starting column and `y` the starting row. On success
/// `x` is the leftmost tile of the contiguous surface and `y` the last
/// matching (open) row before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSpan {
    pub width: i32,
    pub x: i32,
    pub y: i32,
}

/// Find the top-left corner of a square matching region containing `(x, y)`.
///
/// `(x, y)` itself must match, else the search fails immediately. The left
/// edge is fixed by walking leftward along the row until the first non-match;
/// the top edge by walking diagonally up-and-left from the original `(x, y)`.
/// The region is assumed square (by design, not verified). Each walk gives up
/// after `max_distance` steps; `found` is set only if both edges were fixed.
pub fn find_top_left_of_square<G: TileGrid + ?Sized>(
    grid: &G,
    pattern: &TilePattern,
    x: i32,
    y: i32,
    max_distance: i32,
) -> CornerSearch {
    if !pattern.matches(grid, x, y) {
        return CornerSearch { found: false, x, y };
    }

    let (found_left, left_offset) = walk_until_miss(max_distance, |step| {
        pattern.matches(grid, x - step, y)
    });
    let (found_top, top_offset) = walk_until_miss(max_distance, |step| {
        pattern.matches(grid, x - step, y - step)
    });

    CornerSearch {
        found: found_left && found_top,
        x: x - left_offset,
        y: y - top_offset,
    }
}

/// Step outward until `still_matches` fails, returning whether it failed
/// within `max_distance` steps and the offset of the last matching step.
fn walk_until_miss(max_distance: i32, mut still_matches: impl FnMut(i32) -> bool) -> (bool, i32) {
    for step in 1..=max_distance {
        if !still_matches(step) {
            return (true, step - 1);
        }
    }
    (false, max_distance)
}

/// Trace down through open space to the nearest floor, then measure its
/// contiguous width.
///
/// `non_floor_pattern` matches open space. If `max_fall` rows pass without a
/// non-matching cell the search fails with `width: 0` at the starting
/// coordinates. Otherwise the last open row is the surface row and the span
/// is measured by [`horizontal_width_at`].
pub fn floor_width<G: TileGrid + ?Sized>(
    grid: &G,
    non_floor_pattern: &TilePattern,
    x: i32,
    y: i32,
    max_fall: i32,
) -> SurfaceSpan {
    let mut floor_y = y;

    while non_floor_pattern.matches(grid, x, floor_y) {
        floor_y += 1;

        if floor_y - y >= max_fall {
            return SurfaceSpan { width: 0, x, y };
        }
    }
    floor_y -= 1;

    let (width, left_x) = horizontal_width_at(grid, non_floor_pattern, x, floor_y);
    SurfaceSpan {
        width,
        x: left_x,
        y: floor_y,
    }
}

/// Trace up through open space to the nearest ceiling, then measure its
/// contiguous width. Mirror of [`floor_width`], including its delegation to
/// [`horizontal_width_at`] (which tests the row *below* the surface row).
pub fn ceiling_width<G: TileGrid + ?Sized>(
    grid: &G,
    non_ceiling_pattern: &TilePattern,
    x: i32,
    y: i32,
    max_rise: i32,
) -> SurfaceSpan {
    let mut ceiling_y = y;

    while non_ceiling_pattern.matches(grid, x, ceiling_y) {
        ceiling_y -= 1;

        if y - ceiling_y >= max_rise {
            return SurfaceSpan { width: 0, x, y };
        }
    }
    ceiling_y += 1;

    let (width, left_x) = horizontal_width_at(grid, non_ceiling_pattern, x, ceiling_y);
    SurfaceSpan {
        width,
        x: left_x,
        y: ceiling_y,
    }
}

/// Measure the contiguous solid-backed span at `surface_y` around `x`.
///
/// A column belongs to the span while the pattern matches at `surface_y` AND
/// does not match one row below: the surface must be backed by solid, not an
/// overhang into open space. Returns `(width, leftmost_x)`.
///
/// The expansion carries no distance bound. Off-grid cells read as the
/// default cell, so termination relies on the pattern eventually failing
/// horizontally; a coordinate-keyed [`CustomCheck`](tilescout_pattern::CustomCheck)
/// that matches an entire row regardless of cell contents will not terminate.
pub fn horizontal_width_at<G: TileGrid + ?Sized>(
    grid: &G,
    pattern: &TilePattern,
    x: i32,
    surface_y: i32,
) -> (i32, i32) {
    let on_surface = |col: i32| {
        pattern.matches(grid, col, surface_y) && !pattern.matches(grid, col, surface_y + 1)
    };

    let mut right = 1;
    while on_surface(x + right) {
        right += 1;
    }

    let mut left = 0;
    while on_surface(x - left) {
        left += 1;
    }

    let width = (right - 1) + left;
    let leftmost = if left > 0 { x - (left - 1) } else { x };
    (width, leftmost)
}

#[cfg(test)]
mod tests {
    use tilescout_core::{GridBuffer, Rect, TileCell};
    use tilescout_pattern::{TilePattern, TilePatternConfig};

    use super::*;

    fn active_pattern() -> TilePattern {
        TilePattern::new(TilePatternConfig {
            active: Some(true),
            ..TilePatternConfig::default()
        })
    }

    /// Open space: anything without an active foreground tile.
    fn open_pattern() -> TilePattern {
        TilePattern::new(TilePatternConfig {
            active: Some(false),
            ..TilePatternConfig::default()
        })
    }

    fn solid_cell() -> TileCell {
        let mut cell = TileCell::of_type(1);
        cell.solid = true;
        cell
    }

    // ── find_top_left_of_square ──────────────────────────────────────────

    #[test]
    fn square_corner_from_interior() {
        let mut grid = GridBuffer::new(16, 16);
        grid.fill_rect(Rect::new(5, 5, 4, 4), solid_cell());

        let hit = find_top_left_of_square(&grid, &active_pattern(), 7, 7, 10);
        assert!(hit.found);
        assert_eq!((hit.x, hit.y), (5, 5));
    }

    #[test]
    fn square_corner_requires_matching_start() {
        let grid = GridBuffer::new(16, 16);
        let hit = find_top_left_of_square(&grid, &active_pattern(), 7, 7, 10);
        assert!(!hit.found);
        assert_eq!((hit.x, hit.y), (7, 7));
    }

    #[test]
    fn square_corner_respects_max_distance() {
        let mut grid = GridBuffer::new(16, 16);
        grid.fill_rect(Rect::new(5, 5, 4, 4), solid_cell());

        // Both edges are 2 steps away from (7,7); a 1-step budget fails but
        // still reports how far it got.
        let hit = find_top_left_of_square(&grid, &active_pattern(), 7, 7, 1);
        assert!(!hit.found);
        assert_eq!((hit.x, hit.y), (6, 6));
    }

    // ── floor_width ──────────────────────────────────────────────────────

    /// 20x20 grid with a 5-wide solid floor at y=10, x in 10..=14.
    fn floor_grid() -> GridBuffer {
        let mut grid = GridBuffer::new(20, 20);
        grid.fill_rect(Rect::new(10, 10, 5, 1), solid_cell());
        grid
    }

    #[test]
    fn floor_width_measures_full_span() {
        let grid = floor_grid();
        let span = floor_width(&grid, &open_pattern(), 12, 5, 20);
        assert_eq!(span.width, 5);
        assert_eq!(span.x, 10, "leftmost tile of the floor");
        assert_eq!(span.y, 9, "last open row above the floor");
    }

    #[test]
    fn floor_width_fails_when_fall_range_too_short() {
        let grid = floor_grid();
        // The floor is 5 rows down; a 3-row budget exhausts first.
        let span = floor_width(&grid, &open_pattern(), 12, 5, 3);
        assert_eq!(span, SurfaceSpan { width: 0, x: 12, y: 5 });
    }

    #[test]
    fn floor_width_stops_at_gaps() {
        let mut grid = floor_grid();
        // Punch a hole at x=13: the span from x=12 ends there.
        grid.set(13, 10, TileCell::default());

        let span = floor_width(&grid, &open_pattern(), 12, 5, 20);
        assert_eq!(span.width, 3);
        assert_eq!(span.x, 10);
    }

    #[test]
    fn floor_width_excludes_overhang_columns() {
        let mut grid = floor_grid();
        // Open space below (15, 9) stays open at (15, 10): an overhang
        // column, not part of the solid-backed span.
        let span = floor_width(&grid, &open_pattern(), 12, 5, 20);
        assert_eq!(span.width, 5);
        // Extending the floor by one tile extends the span.
        grid.set(15, 10, solid_cell());
        let span = floor_width(&grid, &open_pattern(), 12, 5, 20);
        assert_eq!(span.width, 6);
    }

    #[test]
    fn floor_width_from_cell_directly_above_floor() {
        let grid = floor_grid();
        let span = floor_width(&grid, &open_pattern(), 10, 9, 20);
        assert_eq!(span.width, 5);
        assert_eq!(span.x, 10);
        assert_eq!(span.y, 9);
    }

    // ── ceiling_width ────────────────────────────────────────────────────

    #[test]
    fn ceiling_width_measures_slit() {
        // A 3-wide horizontal slit: solid at y=3 and y=5, open at y=4.
        let mut grid = GridBuffer::new(20, 20);
        grid.fill_rect(Rect::new(8, 3, 3, 1), solid_cell());
        grid.fill_rect(Rect::new(8, 5, 3, 1), solid_cell());

        let span = ceiling_width(&grid, &open_pattern(), 9, 4, 10);
        assert_eq!(span.y, 4, "first open row under the ceiling");
        assert_eq!(span.width, 3);
        assert_eq!(span.x, 8);
    }

    #[test]
    fn ceiling_width_fails_when_rise_range_too_short() {
        let mut grid = GridBuffer::new(20, 20);
        grid.fill_rect(Rect::new(8, 3, 3, 1), solid_cell());

        let span = ceiling_width(&grid, &open_pattern(), 9, 15, 5);
        assert_eq!(span, SurfaceSpan { width: 0, x: 9, y: 15 });
    }

    // ── horizontal_width_at ──────────────────────────────────────────────

    #[test]
    fn horizontal_width_counts_both_directions() {
        let grid = floor_grid();
        let (width, leftmost) = horizontal_width_at(&grid, &open_pattern(), 14, 9);
        assert_eq!(width, 5);
        assert_eq!(leftmost, 10);

        let (width, leftmost) = horizontal_width_at(&grid, &open_pattern(), 10, 9);
        assert_eq!(width, 5);
        assert_eq!(leftmost, 10);
    }
}
