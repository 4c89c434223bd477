//! Evolution edges between monsters.

use serde::{Deserialize, Serialize};

use super::MonsterId;
use crate::raw::RawEvolution;

/// A material required by an evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionComponent {
    pub monster_id: MonsterId,
    pub count: u32,
}

/// A directed edge: `monster_id` evolves into `evolves_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub monster_id: MonsterId,
    pub evolves_to: MonsterId,
    pub is_ultimate: bool,
    /// Materials in the order the source lists them.
    pub materials: Vec<EvolutionComponent>,
}

impl Evolution {
    /// Build an edge from a raw record nested under `monster_id`.
    pub fn from_raw(monster_id: MonsterId, raw: RawEvolution) -> Self {
        Self {
            monster_id,
            evolves_to: MonsterId(raw.evolves_to),
            is_ultimate: raw.is_ultimate,
            materials: raw
                .materials
                .into_iter()
                .map(|(material, count)| EvolutionComponent {
                    monster_id: MonsterId(material),
                    count,
                })
                .collect(),
        }
    }

    /// Total number of material monsters consumed.
    pub fn material_count(&self) -> u32 {
        self.materials.iter().map(|m| m.count).sum()
    }
}

impl std::fmt::Display for Evolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evolution: {} -> {}", self.monster_id, self.evolves_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evolution_from_raw() {
        let raw = RawEvolution {
            is_ultimate: true,
            evolves_to: 312,
            materials: vec![(147, 1), (152, 3)],
        };
        let evo = Evolution::from_raw(MonsterId(65), raw);

        assert_eq!(evo.monster_id, MonsterId(65));
        assert_eq!(evo.evolves_to, MonsterId(312));
        assert!(evo.is_ultimate);
        assert_eq!(evo.materials[1].monster_id, MonsterId(152));
        assert_eq!(evo.material_count(), 4);
        assert_eq!(evo.to_string(), "Evolution: 65 -> 312");
    }
}
