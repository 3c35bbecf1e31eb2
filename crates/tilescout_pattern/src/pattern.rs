//! Pattern evaluation.

use std::fmt;

use tilescout_core::{LiquidKind, TileGrid};

use crate::TilePatternConfig;

/// The first constraint a cell failed, reported by [`TilePattern::check_cell`].
///
/// Informational, not an error type: callers that only need the boolean use
/// [`TilePattern::matches`]. Capture uses this to log each distinct failure
/// cause once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mismatch {
    Active,
    TileType,
    WallType,
    Wire,
    Solid,
    Platform,
    Actuated,
    Destructible,
    Wall,
    Water,
    Honey,
    Lava,
    Slope,
    Brightness,
    Modded,
    Custom,
    /// A cell of the required surrounding rectangle failed.
    Area,
    /// Every constraint passed, but the pattern is inverted.
    Inverted,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mismatch::Active => "active flag",
            Mismatch::TileType => "foreground type",
            Mismatch::WallType => "wall type",
            Mismatch::Wire => "wire",
            Mismatch::Solid => "solid flag",
            Mismatch::Platform => "platform flag",
            Mismatch::Actuated => "actuated flag",
            Mismatch::Destructible => "destructible flag",
            Mismatch::Wall => "wall presence",
            Mismatch::Water => "water",
            Mismatch::Honey => "honey",
            Mismatch::Lava => "lava",
            Mismatch::Slope => "slope",
            Mismatch::Brightness => "brightness",
            Mismatch::Modded => "modded flag",
            Mismatch::Custom => "custom check",
            Mismatch::Area => "surrounding area",
            Mismatch::Inverted => "inverted match",
        };
        f.write_str(name)
    }
}

/// An immutable, composable predicate over cell attributes.
///
/// Built once from a [`TilePatternConfig`]; long-lived and safe to share
/// (wrap in `Arc` for nesting). Evaluation reads cells only through a
/// [`TileGrid`] and never mutates anything.
#[derive(Debug, Clone)]
pub struct TilePattern {
    pub(crate) cfg: TilePatternConfig,
}

impl TilePattern {
    pub fn new(config: TilePatternConfig) -> Self {
        Self { cfg: config }
    }

    /// The frozen construction options.
    pub fn config(&self) -> &TilePatternConfig {
        &self.cfg
    }

    /// True if the cell at `(x, y)` satisfies this pattern.
    pub fn matches<G: TileGrid + ?Sized>(&self, grid: &G, x: i32, y: i32) -> bool {
        self.check_cell(grid, x, y).is_ok()
    }

    /// Like [`matches`](Self::matches), but a failing cell reports the first
    /// failed constraint.
    pub fn check_cell<G: TileGrid + ?Sized>(
        &self,
        grid: &G,
        x: i32,
        y: i32,
    ) -> Result<(), Mismatch> {
        let outcome = match self.check_direct(grid, x, y, true) {
            Ok(()) => Ok(()),
            // The nested set rescues a direct failure: OR, independent of
            // the constraint AND.
            Err(_) if self.cfg.any_of.iter().any(|p| p.matches(grid, x, y)) => Ok(()),
            Err(cause) => Err(cause),
        };

        if self.cfg.invert {
            match outcome {
                Ok(()) => Err(Mismatch::Inverted),
                Err(_) => Ok(()),
            }
        } else {
            outcome
        }
    }

    /// True iff every cell of the `width`×`height` block with top-left
    /// `(x, y)` matches.
    pub fn matches_area<G: TileGrid + ?Sized>(
        &self,
        grid: &G,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> bool {
        for j in 0..height {
            for i in 0..width {
                if !self.matches(grid, x + i, y + j) {
                    return false;
                }
            }
        }
        true
    }

    /// Evaluate the direct constraints (the AND part) against one cell.
    ///
    /// `include_area` is false when this cell is itself a member of another
    /// cell's required rectangle; the rectangle constraint is stripped there
    /// so the check cannot recurse.
    fn check_direct<G: TileGrid + ?Sized>(
        &self,
        grid: &G,
        x: i32,
        y: i32,
        include_area: bool,
    ) -> Result<(), Mismatch> {
        let cell = grid.cell(x, y);
        let cfg = &self.cfg;

        if let Some(active) = cfg.active {
            if cell.active != active {
                return Err(Mismatch::Active);
            }
        }

        if let Some(types) = &cfg.any_of_type {
            if !types.contains(&cell.tile_type) {
                return Err(Mismatch::TileType);
            }
        }
        if let Some(types) = &cfg.not_any_of_type {
            if types.contains(&cell.tile_type) {
                return Err(Mismatch::TileType);
            }
        }
        if let Some(walls) = &cfg.any_of_wall_type {
            if !walls.contains(&cell.wall_type) {
                return Err(Mismatch::WallType);
            }
        }
        if let Some(walls) = &cfg.not_any_of_wall_type {
            if walls.contains(&cell.wall_type) {
                return Err(Mismatch::WallType);
            }
        }

        let wires = [
            (cfg.wire_red, cell.wire_red),
            (cfg.wire_blue, cell.wire_blue),
            (cfg.wire_green, cell.wire_green),
            (cfg.wire_yellow, cell.wire_yellow),
        ];
        for (wanted, actual) in wires {
            if let Some(wanted) = wanted {
                if actual != wanted {
                    return Err(Mismatch::Wire);
                }
            }
        }

        let flags = [
            (cfg.solid, cell.solid, Mismatch::Solid),
            (cfg.platform, cell.platform, Mismatch::Platform),
            (cfg.actuated, cell.actuated, Mismatch::Actuated),
            (cfg.destructible, cell.destructible, Mismatch::Destructible),
            (cfg.modded, cell.modded, Mismatch::Modded),
        ];
        for (wanted, actual, cause) in flags {
            if let Some(wanted) = wanted {
                if actual != wanted {
                    return Err(cause);
                }
            }
        }

        if let Some(wanted) = cfg.has_wall {
            if cell.has_wall() != wanted {
                return Err(Mismatch::Wall);
            }
        }

        let liquids = [
            (cfg.has_water, LiquidKind::Water, Mismatch::Water),
            (cfg.has_honey, LiquidKind::Honey, Mismatch::Honey),
            (cfg.has_lava, LiquidKind::Lava, Mismatch::Lava),
        ];
        for (wanted, kind, cause) in liquids {
            if let Some(wanted) = wanted {
                if cell.has_liquid(kind) != wanted {
                    return Err(cause);
                }
            }
        }

        if let Some(slope) = cfg.slope {
            if cell.slope != slope {
                return Err(Mismatch::Slope);
            }
        }

        if let Some(min) = cfg.min_brightness {
            if cell.brightness < min {
                return Err(Mismatch::Brightness);
            }
        }
        if let Some(max) = cfg.max_brightness {
            if cell.brightness > max {
                return Err(Mismatch::Brightness);
            }
        }

        if let Some(custom) = &cfg.custom {
            if !custom.call(x, y, &cell) {
                return Err(Mismatch::Custom);
            }
        }

        if include_area {
            if let Some(area) = cfg.area_from_center {
                for dy in area.top..area.bottom() {
                    for dx in area.left..area.right() {
                        if self.check_direct(grid, x + dx, y + dy, false).is_err() {
                            return Err(Mismatch::Area);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
