//! Tile-grid pattern matching, bounded search, and structure capture
//!
//! Umbrella crate re-exporting the tilescout family:
//! - [`tilescout_core`] - `TileCell`, `Rect`, the `TileGrid` accessor trait,
//!   and the dense `GridBuffer`
//! - [`tilescout_pattern`] - immutable composable cell predicates
//! - [`tilescout_finder`] - bounded grid-search algorithms
//! - [`tilescout_structure`] - serializable region snapshots
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashSet;
//! use tilescout::{
//!     find_area_match_within, Rect, TilePattern, TilePatternConfig,
//! };
//!
//! let floor = TilePattern::new(TilePatternConfig {
//!     active: Some(true),
//!     solid: Some(true),
//!     ..TilePatternConfig::default()
//! });
//!
//! // First 3x2 solid block in the region, x-then-y scan order.
//! let hit = find_area_match_within(&grid, &floor, Rect::new(0, 0, 100, 100), 3, 2);
//! ```

pub use tilescout_core::{
    world_to_tile, GridBuffer, Liquid, LiquidKind, Rect, Slope, TileCell, TileGrid, TILE_SIZE,
};
pub use tilescout_finder::{
    ceiling_width, find_area_match_within, find_top_left_of_square, floor_width,
    horizontal_width_at, tile_matches_in_world_rect, tile_matches_in_world_rect_with,
    CornerSearch, SurfaceSpan,
};
pub use tilescout_pattern::{CustomCheck, Mismatch, TilePattern, TilePatternConfig};
pub use tilescout_structure::{load_structure, save_structure, StructureError, TileStructure};
