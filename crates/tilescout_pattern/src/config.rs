//! Pattern construction options.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tilescout_core::{Rect, Slope, TileCell};

use crate::TilePattern;

/// A shareable custom predicate over a cell and its coordinates.
///
/// Wraps the closure in an `Arc` so combined patterns can hold both operands'
/// predicates without re-boxing.
#[derive(Clone)]
pub struct CustomCheck(Arc<dyn Fn(i32, i32, &TileCell) -> bool + Send + Sync>);

impl CustomCheck {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(i32, i32, &TileCell) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    pub fn call(&self, x: i32, y: i32, cell: &TileCell) -> bool {
        (self.0)(x, y, cell)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck(..)")
    }
}

/// Construction options for a [`TilePattern`].
///
/// Every recognized constraint is an explicit field here; `None` means the
/// attribute is not checked at all ("don't care"), never `false`. The config
/// is consumed by [`TilePattern::new`], which freezes it — patterns are never
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct TilePatternConfig {
    /// Negate the final result.
    pub invert: bool,

    /// Foreground tile present (not wall-only).
    pub active: Option<bool>,

    /// Also require every cell of this rectangle, offset from the queried
    /// cell, to satisfy the other constraints of this pattern.
    pub area_from_center: Option<Rect>,

    /// Foreground type must be one of these.
    pub any_of_type: Option<HashSet<u16>>,
    /// Wall type must be one of these.
    pub any_of_wall_type: Option<HashSet<u16>>,
    /// Foreground type must not be any of these.
    pub not_any_of_type: Option<HashSet<u16>>,
    /// Wall type must not be any of these.
    pub not_any_of_wall_type: Option<HashSet<u16>>,

    pub wire_red: Option<bool>,
    pub wire_blue: Option<bool>,
    pub wire_green: Option<bool>,
    pub wire_yellow: Option<bool>,

    pub solid: Option<bool>,
    pub platform: Option<bool>,
    pub actuated: Option<bool>,
    pub destructible: Option<bool>,

    /// Any wall present (wall type != 0).
    pub has_wall: Option<bool>,

    pub has_water: Option<bool>,
    pub has_honey: Option<bool>,
    pub has_lava: Option<bool>,

    pub slope: Option<Slope>,

    pub min_brightness: Option<f32>,
    pub max_brightness: Option<f32>,

    pub modded: Option<bool>,

    pub custom: Option<CustomCheck>,

    /// A cell also passes if any of these sub-patterns matches it, even when
    /// the direct constraints above fail. Sub-patterns are shared immutable
    /// nodes; the tree is acyclic by construction.
    pub any_of: Vec<Arc<TilePattern>>,
}
