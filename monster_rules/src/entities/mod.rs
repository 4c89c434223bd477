//! Entity definitions for monster records.

mod components;
mod evolution;
mod monster;
mod skills;

pub use components::*;
pub use evolution::*;
pub use monster::*;
pub use skills::*;

use serde::{Deserialize, Serialize};

/// Unique identifier of a monster, as numbered in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl From<u32> for MonsterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for MonsterId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of an awakening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AwakeningId(pub u32);

impl From<u32> for AwakeningId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AwakeningId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
