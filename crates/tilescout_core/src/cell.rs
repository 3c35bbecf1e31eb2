//! Per-cell attribute snapshot types.

use serde::{Deserialize, Serialize};

/// The kind of liquid occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidKind {
    Water,
    Honey,
    Lava,
}

/// Liquid contents of a cell: a kind plus a fill volume (0 = dry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquid {
    pub kind: LiquidKind,
    pub volume: u8,
}

impl Liquid {
    pub const fn new(kind: LiquidKind, volume: u8) -> Self {
        Self { kind, volume }
    }
}

/// Slope shape of a cell's foreground tile.
///
/// `Flat` is the unsloped default. The four cardinal slopes describe which
/// face is cut; the corner variants are the merged diagonal forms produced by
/// pattern combination (e.g. `Top` + `Left` = `TopLeft`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Slope {
    #[default]
    Flat,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Read snapshot of one grid cell's attributes.
///
/// Immutable once read; hosts produce these through [`TileGrid`](crate::TileGrid)
/// and the core never writes them back. `Default` is the safe value returned
/// for out-of-range or ungenerated coordinates: inactive, no wall, no wires,
/// no liquid, flat, dark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TileCell {
    /// Foreground tile present (not wall-only).
    pub active: bool,
    /// Foreground tile type id.
    pub tile_type: u16,
    /// Wall type id; 0 means no wall.
    pub wall_type: u16,

    pub wire_red: bool,
    pub wire_blue: bool,
    pub wire_green: bool,
    pub wire_yellow: bool,

    /// Tile blocks movement.
    pub solid: bool,
    /// Solid on top only (stand-on platform).
    pub platform: bool,
    /// Deactivated by an actuator.
    pub actuated: bool,
    /// Destructible by vanilla means (bombs, picks).
    pub destructible: bool,

    pub liquid: Option<Liquid>,

    pub slope: Slope,
    pub half_brick: bool,

    /// Light level at this cell, 0.0 (dark) to 1.0 (full).
    pub brightness: f32,

    /// Tile originates from a mod rather than the base game.
    pub modded: bool,
}

impl TileCell {
    /// A cell with an active foreground tile of the given type.
    pub fn of_type(tile_type: u16) -> Self {
        Self {
            active: true,
            tile_type,
            ..Self::default()
        }
    }

    /// True if the cell holds any wall.
    pub fn has_wall(&self) -> bool {
        self.wall_type != 0
    }

    /// True if the cell holds a non-zero volume of the given liquid.
    pub fn has_liquid(&self, kind: LiquidKind) -> bool {
        matches!(self.liquid, Some(l) if l.kind == kind && l.volume > 0)
    }
}
