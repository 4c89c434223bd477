//! Active skills, leader skills, and awakenings.

use serde::{Deserialize, Serialize};

use super::AwakeningId;
use crate::error::RulesResult;
use crate::mechanics::{ConstraintKind, Element, MonsterType};
use crate::raw::{RawActiveSkill, RawAwakening, RawConstraint, RawLeaderSkill, RawLeaderSkillData};

/// An active skill, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSkill {
    pub name: String,
    pub effect: String,
    pub min_cooldown: u32,
    pub max_cooldown: u32,
}

impl ActiveSkill {
    pub const UNSET_NAME: &'static str = "UNSET ACTIVE SKILL NAME";

    /// Build an active skill from its raw record.
    pub fn from_raw(raw: RawActiveSkill) -> Self {
        Self {
            name: raw.name,
            effect: raw.effect,
            min_cooldown: raw.min_cooldown,
            max_cooldown: raw.max_cooldown,
        }
    }

    /// Placeholder held by a monster whose active skill is unset or unresolved.
    pub fn unset() -> Self {
        Self {
            name: Self::UNSET_NAME.to_string(),
            effect: "UNSET ACTIVE SKILL".to_string(),
            min_cooldown: 0,
            max_cooldown: 0,
        }
    }

    /// Check whether this is the placeholder skill.
    pub fn is_unset(&self) -> bool {
        self.name == Self::UNSET_NAME
    }
}

impl Default for ActiveSkill {
    fn default() -> Self {
        Self::unset()
    }
}

/// A leader skill qualifier restricting its bonus to matching monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaderSkillConstraint {
    Element(Element),
    Type(MonsterType),
    NoneSet,
}

impl LeaderSkillConstraint {
    /// Resolve a raw constraint; a missing one means "no constraint".
    pub fn from_raw(raw: Option<&RawConstraint>) -> RulesResult<Self> {
        let Some(raw) = raw else {
            return Ok(LeaderSkillConstraint::NoneSet);
        };
        match ConstraintKind::from_code(&raw.kind)? {
            ConstraintKind::Element => Ok(LeaderSkillConstraint::Element(Element::from_code(
                raw.value,
            )?)),
            ConstraintKind::Type => Ok(LeaderSkillConstraint::Type(MonsterType::from_code(
                raw.value,
            )?)),
            ConstraintKind::NoneSet => Ok(LeaderSkillConstraint::NoneSet),
        }
    }

    /// The table kind of this constraint.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            LeaderSkillConstraint::Element(_) => ConstraintKind::Element,
            LeaderSkillConstraint::Type(_) => ConstraintKind::Type,
            LeaderSkillConstraint::NoneSet => ConstraintKind::NoneSet,
        }
    }

    /// Check whether a monster with the given tags satisfies this constraint.
    pub fn matches(&self, elements: [Element; 2], types: [MonsterType; 2]) -> bool {
        match self {
            LeaderSkillConstraint::Element(e) => elements.contains(e),
            LeaderSkillConstraint::Type(t) => types.contains(t),
            LeaderSkillConstraint::NoneSet => true,
        }
    }
}

impl std::fmt::Display for LeaderSkillConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderSkillConstraint::Element(e) => write!(f, "{}:{}", self.kind().short_name(), e),
            LeaderSkillConstraint::Type(t) => write!(f, "{}:{}", self.kind().short_name(), t),
            LeaderSkillConstraint::NoneSet => f.write_str(self.kind().short_name()),
        }
    }
}

/// Stat multipliers of a leader skill and who they apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSkillData {
    pub hp: f64,
    pub atk: f64,
    pub rcv: f64,
    pub constraints: Vec<LeaderSkillConstraint>,
}

impl LeaderSkillData {
    /// Resolve multipliers and constraints from raw leader skill data.
    pub fn from_raw(raw: &RawLeaderSkillData) -> RulesResult<Self> {
        let constraints = raw
            .constraints
            .iter()
            .map(|c| LeaderSkillConstraint::from_raw(c.as_ref()))
            .collect::<RulesResult<Vec<_>>>()?;
        Ok(Self {
            hp: raw.hp,
            atk: raw.atk,
            rcv: raw.rcv,
            constraints,
        })
    }
}

impl std::fmt::Display for LeaderSkillData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let constraints: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "LSData: HPx{}/ATKx{}/RCVx{} for {}",
            self.hp,
            self.atk,
            self.rcv,
            constraints.join(" ")
        )
    }
}

/// A leader skill, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSkill {
    pub name: String,
    pub effect: String,
    pub data: Option<LeaderSkillData>,
}

impl LeaderSkill {
    pub const UNSET_NAME: &'static str = "UNSET LEADER SKILL";

    /// Build a leader skill, resolving its constraint codes.
    pub fn from_raw(raw: RawLeaderSkill) -> RulesResult<Self> {
        let data = raw.data.as_ref().map(LeaderSkillData::from_raw).transpose()?;
        Ok(Self {
            name: raw.name,
            effect: raw.effect,
            data,
        })
    }

    /// Placeholder held by a monster whose leader skill is unset or unresolved.
    pub fn unset() -> Self {
        Self {
            name: Self::UNSET_NAME.to_string(),
            effect: Self::UNSET_NAME.to_string(),
            data: None,
        }
    }

    /// Check whether this is the placeholder skill.
    pub fn is_unset(&self) -> bool {
        self.name == Self::UNSET_NAME
    }
}

impl Default for LeaderSkill {
    fn default() -> Self {
        Self::unset()
    }
}

/// A discrete bonus ability a monster may possess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Awakening {
    pub id: AwakeningId,
    pub name: String,
    pub description: String,
}

impl Awakening {
    pub fn from_raw(raw: RawAwakening) -> Self {
        Self {
            id: AwakeningId(raw.id),
            name: raw.name,
            description: raw.description,
        }
    }
}
