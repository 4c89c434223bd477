//! Game mechanics: element and type tables, experience curve families, leader
//! skill constraint kinds, and the growth formulas built on top of them.
//!
//! Every table maps a small raw code to a closed enum. An absent code maps to
//! the explicit "none" variant of the table; a code that is present but not in
//! the table is a [`RulesError::UnknownCode`].

mod curves;

pub use curves::*;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Monster elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Wood,
    Dark,
    Light,
    /// Absent element (secondary element slot left empty).
    NoElement,
}

impl Element {
    /// Resolve a raw element code.
    pub fn from_code(code: Option<i64>) -> RulesResult<Self> {
        match code {
            None => Ok(Element::NoElement),
            Some(0) => Ok(Element::Fire),
            Some(1) => Ok(Element::Water),
            Some(2) => Ok(Element::Wood),
            Some(3) => Ok(Element::Dark),
            Some(4) => Ok(Element::Light),
            Some(other) => Err(RulesError::unknown_code("element", other)),
        }
    }

    /// The raw code this element was read from.
    pub fn code(self) -> Option<i64> {
        match self {
            Element::Fire => Some(0),
            Element::Water => Some(1),
            Element::Wood => Some(2),
            Element::Dark => Some(3),
            Element::Light => Some(4),
            Element::NoElement => None,
        }
    }

    /// Full display name of the element.
    pub const fn long_name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Wood => "Wood",
            Element::Dark => "Dark",
            Element::Light => "Light",
            Element::NoElement => "NoElement",
        }
    }

    /// Check whether this is the "no element" entry.
    pub fn is_none(self) -> bool {
        self == Element::NoElement
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Monster types (categories).
///
/// Codes 8 through 11 are unused in the source data and are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterType {
    EvoMaterial,
    Balanced,
    Physical,
    Healer,
    Dragon,
    God,
    Attacker,
    Devil,
    AwokenSkillMaterial,
    Protected,
    EnhanceMaterial,
    NoType,
}

impl MonsterType {
    /// Resolve a raw type code.
    pub fn from_code(code: Option<i64>) -> RulesResult<Self> {
        match code {
            None => Ok(MonsterType::NoType),
            Some(0) => Ok(MonsterType::EvoMaterial),
            Some(1) => Ok(MonsterType::Balanced),
            Some(2) => Ok(MonsterType::Physical),
            Some(3) => Ok(MonsterType::Healer),
            Some(4) => Ok(MonsterType::Dragon),
            Some(5) => Ok(MonsterType::God),
            Some(6) => Ok(MonsterType::Attacker),
            Some(7) => Ok(MonsterType::Devil),
            Some(12) => Ok(MonsterType::AwokenSkillMaterial),
            Some(13) => Ok(MonsterType::Protected),
            Some(14) => Ok(MonsterType::EnhanceMaterial),
            Some(other) => Err(RulesError::unknown_code("type", other)),
        }
    }

    /// Source code of the type; `None` for the "no type" entry.
    pub fn code(self) -> Option<i64> {
        match self {
            MonsterType::EvoMaterial => Some(0),
            MonsterType::Balanced => Some(1),
            MonsterType::Physical => Some(2),
            MonsterType::Healer => Some(3),
            MonsterType::Dragon => Some(4),
            MonsterType::God => Some(5),
            MonsterType::Attacker => Some(6),
            MonsterType::Devil => Some(7),
            MonsterType::AwokenSkillMaterial => Some(12),
            MonsterType::Protected => Some(13),
            MonsterType::EnhanceMaterial => Some(14),
            MonsterType::NoType => None,
        }
    }

    /// Full display name of the type.
    pub const fn long_name(self) -> &'static str {
        match self {
            MonsterType::EvoMaterial => "EvoMaterial",
            MonsterType::Balanced => "Balanced",
            MonsterType::Physical => "Physical",
            MonsterType::Healer => "Healer",
            MonsterType::Dragon => "Dragon",
            MonsterType::God => "God",
            MonsterType::Attacker => "Attacker",
            MonsterType::Devil => "Devil",
            MonsterType::AwokenSkillMaterial => "AwokenSkillMaterial",
            MonsterType::Protected => "Protected",
            MonsterType::EnhanceMaterial => "EnhanceMaterial",
            MonsterType::NoType => "NoType",
        }
    }

    /// Check whether this is the "no type" entry.
    pub fn is_none(self) -> bool {
        self == MonsterType::NoType
    }
}

impl std::fmt::Display for MonsterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Experience curve families, named after their total experience at level 99
/// in millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XpCurve {
    One,
    OnePointFive,
    Two,
    TwoPointFive,
    Three,
    Four,
    Five,
    NoCurve,
}

impl XpCurve {
    /// Resolve a raw curve code. The code is the curve's scale constant.
    pub fn from_code(code: Option<i64>) -> RulesResult<Self> {
        match code {
            None => Ok(XpCurve::NoCurve),
            Some(1_000_000) => Ok(XpCurve::One),
            Some(1_500_000) => Ok(XpCurve::OnePointFive),
            Some(2_000_000) => Ok(XpCurve::Two),
            Some(2_500_000) => Ok(XpCurve::TwoPointFive),
            Some(3_000_000) => Ok(XpCurve::Three),
            Some(4_000_000) => Ok(XpCurve::Four),
            Some(5_000_000) => Ok(XpCurve::Five),
            Some(other) => Err(RulesError::unknown_code("experience curve", other)),
        }
    }

    /// Scale constant of this family. `NoCurve` scales to zero.
    pub const fn constant(self) -> u64 {
        match self {
            XpCurve::One => 1_000_000,
            XpCurve::OnePointFive => 1_500_000,
            XpCurve::Two => 2_000_000,
            XpCurve::TwoPointFive => 2_500_000,
            XpCurve::Three => 3_000_000,
            XpCurve::Four => 4_000_000,
            XpCurve::Five => 5_000_000,
            XpCurve::NoCurve => 0,
        }
    }

    /// Name of the curve.
    pub const fn long_name(self) -> &'static str {
        match self {
            XpCurve::One => "One",
            XpCurve::OnePointFive => "OnePointFive",
            XpCurve::Two => "Two",
            XpCurve::TwoPointFive => "TwoPointFive",
            XpCurve::Three => "Three",
            XpCurve::Four => "Four",
            XpCurve::Five => "Five",
            XpCurve::NoCurve => "NoCurve",
        }
    }
}

impl std::fmt::Display for XpCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XP Curve {}", self.long_name())
    }
}

/// What a leader skill constraint restricts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    Element,
    Type,
    NoneSet,
}

impl ConstraintKind {
    /// Resolve a raw constraint kind code (`elem`, `type`, `none`).
    pub fn from_code(code: &str) -> RulesResult<Self> {
        match code {
            "elem" => Ok(ConstraintKind::Element),
            "type" => Ok(ConstraintKind::Type),
            "none" => Ok(ConstraintKind::NoneSet),
            other => Err(RulesError::unknown_code("constraint kind", other)),
        }
    }

    /// Short label used when a constraint is rendered as `kind:value`.
    pub const fn short_name(self) -> &'static str {
        match self {
            ConstraintKind::Element => "El",
            ConstraintKind::Type => "Ty",
            ConstraintKind::NoneSet => "NoneSet",
        }
    }
}
