//! Composable cell-attribute predicates ("patterns") for tilescout
//!
//! A [`TilePattern`] is an immutable tree of per-attribute constraints over
//! [`TileCell`](tilescout_core::TileCell)s. Unset constraints are "don't
//! care"; set constraints all have to hold; a nested set of sub-patterns can
//! rescue a failed cell (any-of OR); `invert` flips the final answer.
//!
//! Patterns are built once from a [`TilePatternConfig`] and never mutated.
//! [`combine_positive`](TilePattern::combine_positive) and
//! [`combine_negative`](TilePattern::combine_negative) produce new patterns
//! with OR-like and AND-like constraint merging.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashSet;
//! use tilescout_core::GridBuffer;
//! use tilescout_pattern::{TilePattern, TilePatternConfig};
//!
//! let dirt = TilePattern::new(TilePatternConfig {
//!     active: Some(true),
//!     any_of_type: Some(HashSet::from([0])),
//!     ..TilePatternConfig::default()
//! });
//!
//! let grid = GridBuffer::new(64, 64);
//! let hit = dirt.matches(&grid, 10, 10);
//! ```

mod combine;
mod config;
mod pattern;

pub use config::{CustomCheck, TilePatternConfig};
pub use pattern::{Mismatch, TilePattern};
