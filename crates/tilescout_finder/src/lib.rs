//! Bounded grid-search algorithms for tilescout
//!
//! Stateless free functions, parameterized by a [`TilePattern`]
//! (tilescout_pattern) and a [`TileGrid`](tilescout_core::TileGrid)
//! accessor. Nothing here mutates the grid.
//!
//! - Area search: [`find_area_match_within`], [`tile_matches_in_world_rect`]
//! - Contiguous tracing: [`find_top_left_of_square`], [`floor_width`],
//!   [`ceiling_width`], [`horizontal_width_at`]
//!
//! "Not found" is a normal outcome everywhere, reported through `Option` or
//! an explicit `found` flag, never through an error.

mod area;
mod contiguous;

pub use area::{
    find_area_match_within, tile_matches_in_world_rect, tile_matches_in_world_rect_with,
};
pub use contiguous::{
    ceiling_width, find_top_left_of_square, floor_width, horizontal_width_at, CornerSearch,
    SurfaceSpan,
};
