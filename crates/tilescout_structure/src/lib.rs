//! Serializable grid-region snapshots for tilescout
//!
//! [`TileStructure`] captures an arbitrary (pattern-selected, so possibly
//! non-contiguous) subset of a rectangular grid region into a dense array of
//! optional per-cell snapshots. [`save_structure`] / [`load_structure`] give
//! an exact byte round trip: same bounds, same per-index presence and
//! attributes, same count.
//!
//! # Example
//!
//! ```rust,ignore
//! use tilescout_structure::{load_structure, save_structure, TileStructure};
//!
//! let snapshot = TileStructure::capture(&grid, 10, 10, 20, 18, &pattern)?;
//! let bytes = save_structure(&snapshot)?;
//! let restored = load_structure(&bytes)?;
//! assert_eq!(restored, snapshot);
//! ```

mod structure;

pub use structure::TileStructure;

use thiserror::Error;

/// Errors from structure capture and serialization.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The capture rectangle is degenerate or exceeds the grid bounds.
    /// Fatal to that call only.
    #[error("invalid region: left {left}, top {top}, right {right}, bottom {bottom}")]
    InvalidRegion {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
    #[error("encode error: {0}")]
    Encode(String),
    /// Malformed serialized bytes; no partial structure is produced.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Serialize a structure to bytes.
pub fn save_structure(structure: &TileStructure) -> Result<Vec<u8>, StructureError> {
    serde_json::to_vec(structure).map_err(|e| StructureError::Encode(e.to_string()))
}

/// Deserialize a structure from bytes produced by [`save_structure`].
///
/// The decoded structure is validated (positive bounds, cell array length
/// matching the bounds) and its tile count recomputed; the cached count is
/// never trusted from the wire.
pub fn load_structure(bytes: &[u8]) -> Result<TileStructure, StructureError> {
    let mut structure: TileStructure =
        serde_json::from_slice(bytes).map_err(|e| StructureError::Decode(e.to_string()))?;

    structure.validate()?;
    structure.recount();

    Ok(structure)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tilescout_core::{GridBuffer, TileCell};
    use tilescout_pattern::{TilePattern, TilePatternConfig};

    use super::*;

    fn checkerboard_grid() -> GridBuffer {
        let mut grid = GridBuffer::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                if (x + y) % 2 == 0 {
                    grid.set(x, y, TileCell::of_type(1));
                }
            }
        }
        grid
    }

    fn active_pattern() -> TilePattern {
        TilePattern::new(TilePatternConfig {
            active: Some(true),
            ..TilePatternConfig::default()
        })
    }

    #[test]
    fn round_trip_preserves_everything() {
        let grid = checkerboard_grid();
        let original =
            TileStructure::capture(&grid, 2, 2, 7, 6, &active_pattern()).unwrap();

        let bytes = save_structure(&original).unwrap();
        let restored = load_structure(&bytes).unwrap();

        assert_eq!(restored.bounds(), original.bounds());
        assert_eq!(restored.tile_count(), original.tile_count());
        for ly in 0..4 {
            for lx in 0..5 {
                assert_eq!(
                    restored.cell(lx, ly),
                    original.cell(lx, ly),
                    "cell ({lx},{ly})"
                );
            }
        }
        assert_eq!(restored, original);
    }

    #[test]
    fn round_trip_of_rich_cells() {
        use tilescout_core::{Liquid, LiquidKind, Slope};

        let mut grid = GridBuffer::new(8, 8);
        let mut cell = TileCell::of_type(42);
        cell.wall_type = 7;
        cell.wire_green = true;
        cell.solid = true;
        cell.liquid = Some(Liquid::new(LiquidKind::Honey, 128));
        cell.slope = Slope::BottomRight;
        cell.half_brick = true;
        cell.brightness = 0.37;
        cell.modded = true;
        grid.set(1, 1, cell);

        let pattern = TilePattern::new(TilePatternConfig::default());
        let original = TileStructure::capture(&grid, 0, 0, 3, 3, &pattern).unwrap();

        let restored = load_structure(&save_structure(&original).unwrap()).unwrap();
        assert_eq!(restored.cell(1, 1), Some(&cell));
        assert_eq!(restored, original);
    }

    #[test]
    fn malformed_bytes_fail_to_decode() {
        assert!(matches!(
            load_structure(b"not json at all"),
            Err(StructureError::Decode(_))
        ));
        // Valid JSON, wrong shape.
        assert!(matches!(
            load_structure(b"{\"bounds\": 3}"),
            Err(StructureError::Decode(_))
        ));
    }

    #[test]
    fn decoded_cell_array_must_match_bounds() {
        let grid = checkerboard_grid();
        let original =
            TileStructure::capture(&grid, 0, 0, 4, 4, &active_pattern()).unwrap();
        let bytes = save_structure(&original).unwrap();

        // Shrink the declared bounds without touching the cell array.
        let text = String::from_utf8(bytes).unwrap();
        let tampered = text.replacen("\"width\":4", "\"width\":3", 1);
        assert!(matches!(
            load_structure(tampered.as_bytes()),
            Err(StructureError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_non_positive_bounds() {
        // Well-formed JSON with degenerate bounds must fail validation,
        // not produce a structure.
        let zero_width =
            br#"{"bounds":{"left":0,"top":0,"width":0,"height":4},"cells":[]}"#;
        assert!(matches!(
            load_structure(zero_width),
            Err(StructureError::Decode(_))
        ));

        let negative_height =
            br#"{"bounds":{"left":2,"top":2,"width":3,"height":-3},"cells":[]}"#;
        assert!(matches!(
            load_structure(negative_height),
            Err(StructureError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_oversized_bounds_without_panicking() {
        // width * height here overflows i32; the length check must still
        // come back as a decode error rather than abort.
        let huge =
            br#"{"bounds":{"left":0,"top":0,"width":100000,"height":100000},"cells":[null]}"#;
        assert!(matches!(
            load_structure(huge),
            Err(StructureError::Decode(_))
        ));
    }

    #[test]
    fn count_is_recomputed_on_load() {
        let mut grid = GridBuffer::new(8, 8);
        grid.set(0, 0, TileCell::of_type(1));
        grid.set(2, 1, TileCell::of_type(1));

        let original = TileStructure::capture(
            &grid,
            0,
            0,
            4,
            4,
            &TilePattern::new(TilePatternConfig {
                any_of_type: Some(HashSet::from([1])),
                ..TilePatternConfig::default()
            }),
        )
        .unwrap();
        assert_eq!(original.tile_count(), 2);

        let restored = load_structure(&save_structure(&original).unwrap()).unwrap();
        assert_eq!(restored.tile_count(), 2);
    }

    #[test]
    fn capture_rejects_bad_regions() {
        let grid = checkerboard_grid();
        let pattern = active_pattern();

        // Degenerate.
        assert!(matches!(
            TileStructure::capture(&grid, 5, 5, 5, 9, &pattern),
            Err(StructureError::InvalidRegion { .. })
        ));
        assert!(matches!(
            TileStructure::capture(&grid, 5, 9, 9, 5, &pattern),
            Err(StructureError::InvalidRegion { .. })
        ));
        // Exceeds grid bounds.
        assert!(matches!(
            TileStructure::capture(&grid, -1, 0, 4, 4, &pattern),
            Err(StructureError::InvalidRegion { .. })
        ));
        assert!(matches!(
            TileStructure::capture(&grid, 0, 0, 17, 4, &pattern),
            Err(StructureError::InvalidRegion { .. })
        ));
    }
}
