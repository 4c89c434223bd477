//! Level-scaling components attached to a monster.

use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::mechanics::{feed_experience, interpolate_stat};

/// A level-scaling stat (HP, ATK or RCV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub min: i64,
    pub max: i64,
    /// Curve exponent applied to the level fraction.
    pub scale: f64,
    /// Max level of the owning monster; the interpolation divides by it.
    pub owner_max_level: u32,
}

impl Attribute {
    pub fn new(min: i64, max: i64, scale: f64, owner_max_level: u32) -> Self {
        Self {
            min,
            max,
            scale,
            owner_max_level,
        }
    }

    /// Value of this stat at `level`.
    pub fn calc_for_level(&self, level: u32) -> RulesResult<i64> {
        interpolate_stat(self.min, self.max, self.scale, self.owner_max_level, level)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attribute {}/{} * {}", self.min, self.max, self.scale)
    }
}

/// Stat types for per-stat lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Hp,
    Atk,
    Rcv,
}

/// HP/ATK/RCV evaluated at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub level: u32,
    pub hp: i64,
    pub atk: i64,
    pub rcv: i64,
}

/// Base experience granted when a monster is consumed as feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedValue {
    pub base_xp: f64,
}

impl FeedValue {
    pub fn new(base_xp: f64) -> Self {
        Self { base_xp }
    }

    /// Experience granted when feeding an instance at `level`.
    pub fn calc_for_level(&self, level: u32) -> f64 {
        feed_experience(self.base_xp, level)
    }
}

impl std::fmt::Display for FeedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeedExp {}", self.base_xp)
    }
}

/// A portrait image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Edge length in pixels.
    pub size_px: u32,
    pub href: Option<String>,
    /// File size in bytes, when known.
    pub bytes: Option<u64>,
}

impl Image {
    pub fn new(size_px: u32, href: Option<String>, bytes: Option<u64>) -> Self {
        Self {
            size_px,
            href,
            bytes,
        }
    }
}
