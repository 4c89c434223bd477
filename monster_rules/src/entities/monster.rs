//! Monster definitions.

use serde::{Deserialize, Serialize};

use super::{
    ActiveSkill, Attribute, Awakening, AwakeningId, Evolution, FeedValue, Image, LeaderSkill,
    MonsterId, StatLine, StatType,
};
use crate::error::RulesResult;
use crate::mechanics::{Element, MonsterType, XpCurve};
use crate::raw::RawMonster;

/// A collectible monster with its stats, tags, and skill references.
///
/// The join fields (`active_skill`, `leader_skill`, `evolutions`,
/// `awakenings`) hold placeholders until a lookup facade fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub version: Option<String>,
    pub name: String,
    pub name_jp: String,
    pub rarity: u8,
    pub max_level: u32,
    pub team_cost: u32,

    pub element: Element,
    pub element2: Element,
    pub monster_type: MonsterType,
    pub monster_type2: MonsterType,

    pub hp: Attribute,
    pub atk: Attribute,
    pub rcv: Attribute,
    pub feed_xp: FeedValue,
    pub xp_curve: XpCurve,

    pub image40: Image,
    pub image60: Image,
    /// Only released in the Japanese region.
    pub jp_only: bool,

    // References resolved by the facade
    pub active_skill_name: Option<String>,
    pub leader_skill_name: Option<String>,
    pub awakening_ids: Vec<AwakeningId>,

    // Joined data
    pub active_skill: ActiveSkill,
    pub leader_skill: LeaderSkill,
    pub evolutions: Vec<Evolution>,
    pub awakenings: Vec<Awakening>,
}

impl Monster {
    /// Build a monster from its raw record, resolving every code.
    pub fn from_raw(raw: RawMonster) -> RulesResult<Self> {
        let max_level = raw.max_level;
        Ok(Self {
            id: MonsterId(raw.id),
            version: raw.version,
            name: raw.name,
            name_jp: raw.name_jp,
            rarity: raw.rarity,
            max_level,
            team_cost: raw.team_cost,

            element: Element::from_code(Some(raw.element))?,
            element2: Element::from_code(raw.element2)?,
            monster_type: MonsterType::from_code(raw.monster_type)?,
            monster_type2: MonsterType::from_code(raw.type2)?,

            hp: Attribute::new(raw.hp_min, raw.hp_max, raw.hp_scale, max_level),
            atk: Attribute::new(raw.atk_min, raw.atk_max, raw.atk_scale, max_level),
            rcv: Attribute::new(raw.rcv_min, raw.rcv_max, raw.rcv_scale, max_level),
            feed_xp: FeedValue::new(raw.feed_xp),
            xp_curve: XpCurve::from_code(raw.xp_curve)?,

            image40: Image::new(40, raw.image40_href, raw.image40_size),
            image60: Image::new(60, raw.image60_href, raw.image60_size),
            jp_only: raw.jp_only,

            active_skill_name: raw.active_skill.filter(|name| !name.is_empty()),
            leader_skill_name: raw.leader_skill.filter(|name| !name.is_empty()),
            awakening_ids: raw.awoken_skills.into_iter().map(AwakeningId).collect(),

            active_skill: ActiveSkill::unset(),
            leader_skill: LeaderSkill::unset(),
            evolutions: Vec::new(),
            awakenings: Vec::new(),
        })
    }

    /// The attribute for one stat.
    pub fn attribute(&self, stat: StatType) -> &Attribute {
        match stat {
            StatType::Hp => &self.hp,
            StatType::Atk => &self.atk,
            StatType::Rcv => &self.rcv,
        }
    }

    /// HP/ATK/RCV at `level`.
    pub fn stats_at(&self, level: u32) -> RulesResult<StatLine> {
        Ok(StatLine {
            level,
            hp: self.hp.calc_for_level(level)?,
            atk: self.atk.calc_for_level(level)?,
            rcv: self.rcv.calc_for_level(level)?,
        })
    }

    /// Total experience to take this monster from level 1 to max level.
    pub fn xp_to_max(&self) -> u64 {
        self.xp_curve.total_for_level(self.max_level)
    }

    /// Primary and secondary element, for leader skill constraint checks.
    pub fn elements(&self) -> [Element; 2] {
        [self.element, self.element2]
    }

    /// Primary and secondary type, for leader skill constraint checks.
    pub fn types(&self) -> [MonsterType; 2] {
        [self.monster_type, self.monster_type2]
    }

    /// Check whether this monster has no outgoing evolutions after joining.
    pub fn is_final_form(&self) -> bool {
        self.evolutions.is_empty()
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({})",
            self.id,
            self.name,
            "*".repeat(usize::from(self.rarity))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    fn ice_ogre() -> RawMonster {
        RawMonster {
            id: 65,
            version: None,
            name: "Ice Ogre".to_string(),
            name_jp: "アイスオーガ".to_string(),
            rarity: 4,
            max_level: 99,
            team_cost: 10,
            feed_xp: 413.0,
            xp_curve: Some(3_000_000),
            element: 1,
            element2: None,
            monster_type: Some(2),
            type2: None,
            hp_min: 1000,
            hp_max: 2500,
            hp_scale: 1.0,
            atk_min: 277,
            atk_max: 875,
            atk_scale: 1.0,
            rcv_min: 0,
            rcv_max: 50,
            rcv_scale: 1.0,
            active_skill: Some("Ice Breath".to_string()),
            leader_skill: Some(String::new()),
            awoken_skills: vec![10, 11],
            image40_href: Some("/img/65_40.png".to_string()),
            image40_size: Some(2048),
            image60_href: None,
            image60_size: None,
            jp_only: false,
        }
    }

    #[test]
    fn test_monster_from_raw() {
        let monster = Monster::from_raw(ice_ogre()).unwrap();
        assert_eq!(monster.id, MonsterId(65));
        assert_eq!(monster.element, Element::Water);
        assert_eq!(monster.element2, Element::NoElement);
        assert_eq!(monster.monster_type, MonsterType::Physical);
        assert_eq!(monster.monster_type2, MonsterType::NoType);
        assert_eq!(monster.xp_curve, XpCurve::Three);
        assert_eq!(monster.atk.owner_max_level, 99);
        assert_eq!(monster.active_skill_name.as_deref(), Some("Ice Breath"));
        assert!(monster.leader_skill_name.is_none());
        assert_eq!(monster.awakening_ids, vec![AwakeningId(10), AwakeningId(11)]);
        assert!(monster.active_skill.is_unset());
        assert_eq!(monster.image40.size_px, 40);
        assert_eq!(monster.to_string(), "#65 Ice Ogre (****)");
    }

    #[test]
    fn test_monster_stats() {
        let monster = Monster::from_raw(ice_ogre()).unwrap();
        let stats = monster.stats_at(99).unwrap();
        assert_eq!(stats.atk, 875);
        assert_eq!(monster.stats_at(1).unwrap().hp, 1000);
        assert_eq!(monster.attribute(StatType::Rcv).max, 50);
        assert_eq!(monster.xp_to_max(), 3_000_000);
        assert_eq!(monster.feed_xp.calc_for_level(12), 4956.0);
    }

    #[test]
    fn test_monster_unknown_curve() {
        let mut raw = ice_ogre();
        raw.xp_curve = Some(42);
        assert!(matches!(
            Monster::from_raw(raw),
            Err(RulesError::UnknownCode { .. })
        ));
    }

    #[test]
    fn test_monster_single_level_stats() {
        let mut raw = ice_ogre();
        raw.max_level = 1;
        let monster = Monster::from_raw(raw).unwrap();
        assert!(matches!(monster.stats_at(1), Err(RulesError::Precondition(_))));
    }
}
