//! Area and rectangle scans.

use tilescout_core::{world_to_tile, Rect, TileGrid};
use tilescout_pattern::TilePattern;

/// Find the first `width`×`height` block of matching cells inside `within`.
///
/// Candidate top-left corners are scanned x-ascending in the outer loop and
/// y-ascending in the inner loop, restricted so the block stays inside
/// `within`. The scan order is a tie-break contract: of several matches the
/// one with the smallest x wins, then the smallest y. Returns `None` when the
/// scan exhausts the region.
pub fn find_area_match_within<G: TileGrid + ?Sized>(
    grid: &G,
    pattern: &TilePattern,
    within: Rect,
    width: i32,
    height: i32,
) -> Option<(i32, i32)> {
    let max_x = within.right() - width;
    let max_y = within.bottom() - height;

    for x in within.left..=max_x {
        for y in within.top..=max_y {
            if pattern.matches_area(grid, x, y, width, height) {
                return Some((x, y));
            }
        }
    }
    None
}

/// All matching tiles under a world-unit rectangle, in scan order.
///
/// See [`tile_matches_in_world_rect_with`] for the conversion and ordering
/// rules.
pub fn tile_matches_in_world_rect<G: TileGrid + ?Sized>(
    grid: &G,
    world_rect: Rect,
    pattern: &TilePattern,
) -> Vec<(i32, i32)> {
    tile_matches_in_world_rect_with(grid, world_rect, pattern, |_, _, is_match| is_match)
}

/// All matching tiles under a world-unit rectangle, with a visitor override.
///
/// The rectangle's corners are converted to tile coordinates by flooring
/// division by 16 (both the left/top and right/bottom corners, the latter
/// inclusive). Tiles outside the grid are skipped, not an error. Cells are
/// visited x-ascending outer, y-ascending inner; the visitor receives
/// `(x, y, tentative_match)` and its return value replaces the decision for
/// that cell. Matches are appended in scan order.
pub fn tile_matches_in_world_rect_with<G, F>(
    grid: &G,
    world_rect: Rect,
    pattern: &TilePattern,
    mut visitor: F,
) -> Vec<(i32, i32)>
where
    G: TileGrid + ?Sized,
    F: FnMut(i32, i32, bool) -> bool,
{
    let left_tile = world_to_tile(world_rect.left);
    let top_tile = world_to_tile(world_rect.top);
    let right_tile = world_to_tile(world_rect.right());
    let bottom_tile = world_to_tile(world_rect.bottom());

    let mut hits = Vec::new();

    for x in left_tile..=right_tile {
        if x < 0 || x >= grid.width() {
            continue;
        }
        for y in top_tile..=bottom_tile {
            if y < 0 || y >= grid.height() {
                continue;
            }

            let is_match = visitor(x, y, pattern.matches(grid, x, y));
            if is_match {
                hits.push((x, y));
            }
        }
    }

    hits
}
