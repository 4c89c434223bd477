//! Raw record shapes, exactly as the upstream record sets supply them.
//!
//! These are plain data carriers. Code resolution, defaults, and joining all
//! happen when entities are built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::RulesError;

/// A flat monster record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMonster {
    pub id: u32,
    #[serde(default)]
    pub version: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_jp: String,
    pub rarity: u8,
    pub max_level: u32,
    pub team_cost: u32,
    pub feed_xp: f64,
    #[serde(default)]
    pub xp_curve: Option<i64>,

    pub element: i64,
    #[serde(default)]
    pub element2: Option<i64>,
    #[serde(default, rename = "type")]
    pub monster_type: Option<i64>,
    #[serde(default)]
    pub type2: Option<i64>,

    pub hp_min: i64,
    pub hp_max: i64,
    pub hp_scale: f64,
    pub atk_min: i64,
    pub atk_max: i64,
    pub atk_scale: f64,
    pub rcv_min: i64,
    pub rcv_max: i64,
    pub rcv_scale: f64,

    #[serde(default)]
    pub active_skill: Option<String>,
    #[serde(default)]
    pub leader_skill: Option<String>,
    #[serde(default)]
    pub awoken_skills: Vec<u32>,

    #[serde(default)]
    pub image40_href: Option<String>,
    #[serde(default)]
    pub image40_size: Option<u64>,
    #[serde(default)]
    pub image60_href: Option<String>,
    #[serde(default)]
    pub image60_size: Option<u64>,

    #[serde(default)]
    pub jp_only: bool,
}

/// One outgoing evolution of a monster; the source id is the key it is nested under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvolution {
    #[serde(default)]
    pub is_ultimate: bool,
    pub evolves_to: u32,
    /// `(material monster id, count)` pairs.
    #[serde(default)]
    pub materials: Vec<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawActiveSkill {
    pub name: String,
    pub effect: String,
    pub min_cooldown: u32,
    pub max_cooldown: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLeaderSkill {
    pub name: String,
    pub effect: String,
    #[serde(default)]
    pub data: Option<RawLeaderSkillData>,
}

/// Leader skill multipliers and constraints.
///
/// Supplied positionally as `[hp, atk, rcv, c1?, c2?, c3?]`, where each
/// constraint is null, an empty list, or `[kind, value]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct RawLeaderSkillData {
    pub hp: f64,
    pub atk: f64,
    pub rcv: f64,
    pub constraints: Vec<Option<RawConstraint>>,
}

/// A `[kind, value]` constraint pair. The value of a `"none"` constraint is
/// ignored and left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConstraint {
    pub kind: String,
    pub value: Option<i64>,
}

const NONE_CONSTRAINT_KIND: &str = "none";

pub const MAX_LEADER_SKILL_CONSTRAINTS: usize = 3;

impl TryFrom<Vec<Value>> for RawLeaderSkillData {
    type Error = RulesError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        if values.len() < 3 {
            return Err(RulesError::MalformedRecord(format!(
                "leader skill data needs hp/atk/rcv, got {} values",
                values.len()
            )));
        }
        if values.len() > 3 + MAX_LEADER_SKILL_CONSTRAINTS {
            return Err(RulesError::MalformedRecord(format!(
                "leader skill data has {} constraints, at most {} allowed",
                values.len() - 3,
                MAX_LEADER_SKILL_CONSTRAINTS
            )));
        }

        let multiplier = |index: usize, label: &str| {
            number_as_f64(&values[index]).ok_or_else(|| {
                RulesError::MalformedRecord(format!(
                    "leader skill {label} multiplier is not a number: {}",
                    values[index]
                ))
            })
        };
        let hp = multiplier(0, "hp")?;
        let atk = multiplier(1, "atk")?;
        let rcv = multiplier(2, "rcv")?;

        let constraints = values[3..]
            .iter()
            .map(parse_constraint)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            hp,
            atk,
            rcv,
            constraints,
        })
    }
}

impl From<RawLeaderSkillData> for Vec<Value> {
    fn from(data: RawLeaderSkillData) -> Self {
        let mut values = vec![Value::from(data.hp), Value::from(data.atk), Value::from(data.rcv)];
        values.extend(data.constraints.into_iter().map(|constraint| match constraint {
            Some(c) => Value::Array(vec![
                Value::from(c.kind),
                c.value.map_or(Value::Null, Value::from),
            ]),
            None => Value::Null,
        }));
        values
    }
}

fn number_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integers, integral floats like `1.0`, and numeric strings.
fn number_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_constraint(value: &Value) -> Result<Option<RawConstraint>, RulesError> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) if items.is_empty() => return Ok(None),
        Value::Array(items) => items,
        other => {
            return Err(RulesError::MalformedRecord(format!(
                "leader skill constraint must be a list or null, got {other}"
            )))
        }
    };

    match items.as_slice() {
        [Value::String(kind), _] if kind == NONE_CONSTRAINT_KIND => Ok(Some(RawConstraint {
            kind: kind.clone(),
            value: None,
        })),
        [Value::String(kind), value] => {
            let value = number_as_i64(value).ok_or_else(|| {
                RulesError::MalformedRecord(format!("constraint value is not an integer: {value}"))
            })?;
            Ok(Some(RawConstraint {
                kind: kind.clone(),
                value: Some(value),
            }))
        }
        _ => Err(RulesError::MalformedRecord(format!(
            "leader skill constraint must be [kind, value], got {value}"
        ))),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAwakening {
    pub id: u32,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
}

/// Every record set the lookup facade is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub monsters: Vec<RawMonster>,
    /// Source monster id (as a string key) -> its outgoing evolutions.
    ///
    /// Map order is by string key; the facade reorders groups by numeric id.
    #[serde(default)]
    pub evolutions: BTreeMap<String, Vec<RawEvolution>>,
    #[serde(default)]
    pub active_skills: Vec<RawActiveSkill>,
    #[serde(default)]
    pub leader_skills: Vec<RawLeaderSkill>,
    #[serde(default)]
    pub awakenings: Vec<RawAwakening>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_skill_data_positional() {
        let data: RawLeaderSkillData =
            serde_json::from_str(r#"[1, 2.5, 1, ["elem", 3], null, []]"#).unwrap();
        assert_eq!(data.hp, 1.0);
        assert_eq!(data.atk, 2.5);
        assert_eq!(data.constraints.len(), 3);
        assert_eq!(
            data.constraints[0],
            Some(RawConstraint {
                kind: "elem".to_string(),
                value: Some(3)
            })
        );
        assert!(data.constraints[1].is_none());
        assert!(data.constraints[2].is_none());
    }

    #[test]
    fn test_leader_skill_data_string_value() {
        let data: RawLeaderSkillData =
            serde_json::from_str(r#"[1, 1, 1, ["type", "5"]]"#).unwrap();
        assert_eq!(data.constraints[0].as_ref().unwrap().value, Some(5));
    }

    #[test]
    fn test_none_constraint_ignores_value() {
        let data: RawLeaderSkillData =
            serde_json::from_str(r#"[1, 2, 1, ["none", null], ["none", "anything"]]"#).unwrap();
        for constraint in &data.constraints {
            let constraint = constraint.as_ref().unwrap();
            assert_eq!(constraint.kind, "none");
            assert!(constraint.value.is_none());
        }
    }

    #[test]
    fn test_constraint_integral_float_value() {
        let data: RawLeaderSkillData =
            serde_json::from_str(r#"[1, 2, 1, ["elem", 1.0], ["type", 5.0]]"#).unwrap();
        assert_eq!(data.constraints[0].as_ref().unwrap().value, Some(1));
        assert_eq!(data.constraints[1].as_ref().unwrap().value, Some(5));
    }

    #[test]
    fn test_constraint_fractional_or_missing_value_rejected() {
        let fractional: Result<RawLeaderSkillData, _> =
            serde_json::from_str(r#"[1, 1, 1, ["elem", 1.5]]"#);
        assert!(fractional.is_err());
        let missing: Result<RawLeaderSkillData, _> =
            serde_json::from_str(r#"[1, 1, 1, ["type", null]]"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_leader_skill_data_too_short() {
        let result: Result<RawLeaderSkillData, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_leader_skill_data_too_many_constraints() {
        let result: Result<RawLeaderSkillData, _> =
            serde_json::from_str(r#"[1, 1, 1, null, null, null, null]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_monster_defaults() {
        let json = r#"{
            "id": 1, "name": "Tyrra", "rarity": 2, "max_level": 5, "team_cost": 2,
            "feed_xp": 50, "xp_curve": 1000000, "element": 0, "type": 4,
            "hp_min": 80, "hp_max": 200, "hp_scale": 1,
            "atk_min": 70, "atk_max": 120, "atk_scale": 1,
            "rcv_min": 5, "rcv_max": 10, "rcv_scale": 1
        }"#;
        let monster: RawMonster = serde_json::from_str(json).unwrap();
        assert_eq!(monster.monster_type, Some(4));
        assert!(monster.element2.is_none());
        assert!(monster.awoken_skills.is_empty());
        assert!(!monster.jp_only);
    }

    #[test]
    fn test_raw_dataset_evolutions_nested() {
        let json = r#"{
            "evolutions": {
                "64": [{"is_ultimate": false, "evolves_to": 65, "materials": [[147, 1], [152, 2]]}]
            }
        }"#;
        let dataset: RawDataset = serde_json::from_str(json).unwrap();
        let evolutions = &dataset.evolutions["64"];
        assert_eq!(evolutions[0].evolves_to, 65);
        assert_eq!(evolutions[0].materials, vec![(147, 1), (152, 2)]);
        assert!(dataset.monsters.is_empty());
    }
}
