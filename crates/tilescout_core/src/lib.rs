//! Core data structures for tilescout
//!
//! This crate provides the fundamental types shared by the pattern, finder,
//! and structure crates:
//! - `TileCell` - The read-only attribute snapshot of one grid cell
//! - `Rect` - Axis-aligned integer rectangle in grid coordinates
//! - `TileGrid` - Host-supplied read accessor over the live grid
//! - `GridBuffer` - Dense in-memory grid, for hosts and test fixtures

mod cell;
mod grid;
mod rect;

pub use cell::{Liquid, LiquidKind, Slope, TileCell};
pub use grid::{world_to_tile, GridBuffer, TileGrid, TILE_SIZE};
pub use rect::Rect;
