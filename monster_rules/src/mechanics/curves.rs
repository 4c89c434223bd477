//! Growth formulas: stat interpolation, feed experience, and experience curve totals.

use super::XpCurve;
use crate::error::{RulesError, RulesResult};

/// Experience curves reach their scale constant at this level.
pub const XP_CURVE_CAP_LEVEL: u32 = 99;

const XP_CURVE_EXPONENT: f64 = 2.5;

/// Interpolate a stat between `min` (level 1) and `max` (`max_level`).
///
/// `value = min + (max - min) * ((level - 1) / (max_level - 1)) ^ scale`,
/// rounded half-to-even. Both endpoints are returned exactly regardless of
/// `scale`.
pub fn interpolate_stat(
    min: i64,
    max: i64,
    scale: f64,
    max_level: u32,
    level: u32,
) -> RulesResult<i64> {
    if max_level <= 1 {
        return Err(RulesError::Precondition(format!(
            "cannot interpolate a stat for max level {max_level}"
        )));
    }
    if level < 1 || level > max_level {
        return Err(RulesError::Precondition(format!(
            "level {level} outside 1..={max_level}"
        )));
    }
    if level == 1 {
        return Ok(min);
    }
    if level == max_level {
        return Ok(max);
    }

    let fraction = f64::from(level - 1) / f64::from(max_level - 1);
    let value = min as f64 + (max - min) as f64 * fraction.powf(scale);
    Ok(value.round_ties_even() as i64)
}

/// Experience granted by consuming a monster at `level`.
pub fn feed_experience(base_xp: f64, level: u32) -> f64 {
    base_xp * f64::from(level)
}

impl XpCurve {
    /// Total experience needed to reach `level` from level 1.
    ///
    /// Level 0 is treated as level 1.
    pub fn total_for_level(self, level: u32) -> u64 {
        let steps = f64::from(level.saturating_sub(1));
        let fraction = steps / f64::from(XP_CURVE_CAP_LEVEL - 1);
        let total = self.constant() as f64 * fraction.powf(XP_CURVE_EXPONENT);
        total.round_ties_even() as u64
    }

    /// Experience between `level` and `level + 1`.
    pub fn to_next_level(self, level: u32) -> u64 {
        self.total_for_level(level.saturating_add(1))
            .saturating_sub(self.total_for_level(level))
    }
}
