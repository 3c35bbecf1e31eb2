//! Pattern combinators.
//!
//! Pure functions over two immutable patterns; operands are never modified.
//! `combine_positive` merges constraints with OR-like rules, `combine_negative`
//! with AND-like rules. Note the long-standing caveat: the id sets are
//! unioned by *both* combinators, so a negative combination of two set
//! constraints is looser than a true AND.

use std::collections::HashSet;

use tilescout_core::Slope;

use crate::{CustomCheck, TilePattern, TilePatternConfig};

impl TilePattern {
    /// Combine two patterns so the result matches roughly "`a` OR `b`".
    ///
    /// When both sides bound brightness, `blend_light` averages the bounds
    /// instead of loosening to the smaller value.
    pub fn combine_positive(a: &TilePattern, b: &TilePattern, blend_light: bool) -> TilePattern {
        let (a, b) = (&a.cfg, &b.cfg);

        TilePattern::new(TilePatternConfig {
            invert: a.invert || b.invert,

            active: or_flag(a.active, b.active),

            // The combinators do not merge surrounding-area requirements.
            area_from_center: None,

            any_of_type: union(&a.any_of_type, &b.any_of_type),
            any_of_wall_type: union(&a.any_of_wall_type, &b.any_of_wall_type),
            not_any_of_type: union(&a.not_any_of_type, &b.not_any_of_type),
            not_any_of_wall_type: union(&a.not_any_of_wall_type, &b.not_any_of_wall_type),

            wire_red: or_flag(a.wire_red, b.wire_red),
            wire_blue: or_flag(a.wire_blue, b.wire_blue),
            wire_green: or_flag(a.wire_green, b.wire_green),
            wire_yellow: or_flag(a.wire_yellow, b.wire_yellow),

            solid: or_flag(a.solid, b.solid),
            platform: or_flag(a.platform, b.platform),
            actuated: or_flag(a.actuated, b.actuated),
            destructible: or_flag(a.destructible, b.destructible),

            has_wall: or_flag(a.has_wall, b.has_wall),

            has_water: or_flag(a.has_water, b.has_water),
            has_honey: or_flag(a.has_honey, b.has_honey),
            has_lava: or_flag(a.has_lava, b.has_lava),

            slope: merge_slope(a.slope, b.slope, SlopeFallback::Second),

            min_brightness: loosen(a.min_brightness, b.min_brightness, blend_light),
            max_brightness: loosen(a.max_brightness, b.max_brightness, blend_light),

            modded: or_flag(a.modded, b.modded),

            custom: merge_custom(&a.custom, &b.custom, CustomMerge::Or),

            any_of: carry_nested(a, b),
        })
    }

    /// Combine two patterns so the result matches roughly "`a` AND `b`".
    ///
    /// The id sets are still unioned (see module docs); brightness bounds
    /// tighten to the larger value unless `blend_light` averages them.
    pub fn combine_negative(a: &TilePattern, b: &TilePattern, blend_light: bool) -> TilePattern {
        let (a, b) = (&a.cfg, &b.cfg);

        TilePattern::new(TilePatternConfig {
            invert: a.invert && b.invert,

            active: and_flag(a.active, b.active),

            area_from_center: None,

            any_of_type: union(&a.any_of_type, &b.any_of_type),
            any_of_wall_type: union(&a.any_of_wall_type, &b.any_of_wall_type),
            not_any_of_type: union(&a.not_any_of_type, &b.not_any_of_type),
            not_any_of_wall_type: union(&a.not_any_of_wall_type, &b.not_any_of_wall_type),

            wire_red: and_flag(a.wire_red, b.wire_red),
            wire_blue: and_flag(a.wire_blue, b.wire_blue),
            wire_green: and_flag(a.wire_green, b.wire_green),
            wire_yellow: and_flag(a.wire_yellow, b.wire_yellow),

            solid: and_flag(a.solid, b.solid),
            platform: and_flag(a.platform, b.platform),
            actuated: and_flag(a.actuated, b.actuated),
            destructible: and_flag(a.destructible, b.destructible),

            has_wall: and_flag(a.has_wall, b.has_wall),

            has_water: and_flag(a.has_water, b.has_water),
            has_honey: and_flag(a.has_honey, b.has_honey),
            has_lava: and_flag(a.has_lava, b.has_lava),

            slope: merge_slope(a.slope, b.slope, SlopeFallback::First),

            min_brightness: tighten(a.min_brightness, b.min_brightness, blend_light),
            max_brightness: tighten(a.max_brightness, b.max_brightness, blend_light),

            modded: and_flag(a.modded, b.modded),

            custom: merge_custom(&a.custom, &b.custom, CustomMerge::And),

            any_of: carry_nested(a, b),
        })
    }
}

/// Both set: OR. One set: that one. Neither: still "don't care".
fn or_flag(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a || b),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

fn and_flag(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a && b),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Union of whichever sides are set. A side without a set contributes the
/// empty set; the result is unset only when both sides are.
fn union(a: &Option<HashSet<u16>>, b: &Option<HashSet<u16>>) -> Option<HashSet<u16>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b).copied().collect()),
        (Some(s), None) | (None, Some(s)) => Some(s.clone()),
        (None, None) => None,
    }
}

/// Which operand's slope survives an unmergeable both-set combination.
enum SlopeFallback {
    First,
    Second,
}

/// Directional merge: a top/bottom slope paired with a left/right slope
/// becomes the corner slope; any other pairing falls back per combinator.
fn merge_slope(a: Option<Slope>, b: Option<Slope>, fallback: SlopeFallback) -> Option<Slope> {
    match (a, b) {
        (Some(a), Some(b)) => Some(match (a, b) {
            (Slope::Top, Slope::Left) | (Slope::Left, Slope::Top) => Slope::TopLeft,
            (Slope::Top, Slope::Right) | (Slope::Right, Slope::Top) => Slope::TopRight,
            (Slope::Bottom, Slope::Left) | (Slope::Left, Slope::Bottom) => Slope::BottomLeft,
            (Slope::Bottom, Slope::Right) | (Slope::Right, Slope::Bottom) => Slope::BottomRight,
            _ => match fallback {
                SlopeFallback::First => a,
                SlopeFallback::Second => b,
            },
        }),
        (Some(s), None) | (None, Some(s)) => Some(s),
        (None, None) => None,
    }
}

/// Loosen a brightness bound: the smaller of the two, or their mean.
fn loosen(a: Option<f32>, b: Option<f32>, blend: bool) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if blend { (a + b) * 0.5 } else { a.min(b) }),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Tighten a brightness bound: the larger of the two, or their mean.
fn tighten(a: Option<f32>, b: Option<f32>, blend: bool) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if blend { (a + b) * 0.5 } else { a.max(b) }),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

enum CustomMerge {
    Or,
    And,
}

fn merge_custom(
    a: &Option<CustomCheck>,
    b: &Option<CustomCheck>,
    merge: CustomMerge,
) -> Option<CustomCheck> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let (a, b) = (a.clone(), b.clone());
            Some(match merge {
                CustomMerge::Or => {
                    CustomCheck::new(move |x, y, cell| a.call(x, y, cell) || b.call(x, y, cell))
                }
                CustomMerge::And => {
                    CustomCheck::new(move |x, y, cell| a.call(x, y, cell) && b.call(x, y, cell))
                }
            })
        }
        (Some(c), None) | (None, Some(c)) => Some(c.clone()),
        (None, None) => None,
    }
}

/// Nested sets are carried through, not merged: each sub-pattern survives
/// unchanged in the concatenation of both operands' sets.
fn carry_nested(
    a: &TilePatternConfig,
    b: &TilePatternConfig,
) -> Vec<std::sync::Arc<TilePattern>> {
    a.any_of.iter().chain(b.any_of.iter()).cloned().collect()
}
