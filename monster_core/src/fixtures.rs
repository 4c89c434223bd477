//! Shared record sets for tests.

use std::collections::BTreeMap;

use monster_rules::{
    RawActiveSkill, RawAwakening, RawConstraint, RawDataset, RawEvolution, RawLeaderSkill,
    RawLeaderSkillData, RawMonster,
};

pub fn raw_monster(id: u32, name: &str) -> RawMonster {
    RawMonster {
        id,
        version: None,
        name: name.to_string(),
        name_jp: String::new(),
        rarity: 3,
        max_level: 99,
        team_cost: 5,
        feed_xp: 100.0,
        xp_curve: Some(1_000_000),
        element: 1,
        element2: None,
        monster_type: Some(2),
        type2: None,
        hp_min: 500,
        hp_max: 1500,
        hp_scale: 1.0,
        atk_min: 277,
        atk_max: 875,
        atk_scale: 1.0,
        rcv_min: 10,
        rcv_max: 100,
        rcv_scale: 1.0,
        active_skill: None,
        leader_skill: None,
        awoken_skills: Vec::new(),
        image40_href: None,
        image40_size: None,
        image60_href: None,
        image60_size: None,
        jp_only: false,
    }
}

fn evolution(to: u32, materials: &[(u32, u32)]) -> RawEvolution {
    RawEvolution {
        is_ultimate: false,
        evolves_to: to,
        materials: materials.to_vec(),
    }
}

/// The ogre line plus a diamond, a cycle, and a loner:
///
/// - 64 -> 65 -> {312, 313}
/// - 1 -> {2, 3} -> 4
/// - 10 -> 11 -> 12 -> 10
/// - 99 with no edges
pub fn dataset() -> RawDataset {
    let mut ice_ogre = raw_monster(65, "Ice Ogre");
    ice_ogre.rarity = 4;
    ice_ogre.active_skill = Some("Ice Breath".to_string());
    ice_ogre.leader_skill = Some("Water Guard".to_string());
    ice_ogre.awoken_skills = vec![1, 2];

    let mut monsters = vec![
        raw_monster(313, "Wood Ice Ogre"),
        ice_ogre,
        raw_monster(64, "Blue Ogre"),
        raw_monster(312, "Blazing Ice Ogre"),
    ];
    for (id, name) in [
        (4, "Diamond D"),
        (2, "Diamond B"),
        (1, "Diamond A"),
        (3, "Diamond C"),
        (10, "Cycle X"),
        (11, "Cycle Y"),
        (12, "Cycle Z"),
        (99, "Loner"),
    ] {
        monsters.push(raw_monster(id, name));
    }

    let mut evolutions = BTreeMap::new();
    evolutions.insert("64".to_string(), vec![evolution(65, &[(147, 1)])]);
    evolutions.insert(
        "65".to_string(),
        vec![
            evolution(312, &[(147, 2), (161, 1)]),
            evolution(313, &[(152, 2)]),
        ],
    );
    evolutions.insert("1".to_string(), vec![evolution(2, &[]), evolution(3, &[])]);
    evolutions.insert("2".to_string(), vec![evolution(4, &[])]);
    evolutions.insert("3".to_string(), vec![evolution(4, &[])]);
    evolutions.insert("10".to_string(), vec![evolution(11, &[])]);
    evolutions.insert("11".to_string(), vec![evolution(12, &[])]);
    evolutions.insert("12".to_string(), vec![evolution(10, &[])]);

    RawDataset {
        monsters,
        evolutions,
        active_skills: vec![RawActiveSkill {
            name: "Ice Breath".to_string(),
            effect: "Deal 3x ATK water damage to all enemies".to_string(),
            min_cooldown: 8,
            max_cooldown: 15,
        }],
        leader_skills: vec![RawLeaderSkill {
            name: "Water Guard".to_string(),
            effect: "Water attribute cards HP x1.5".to_string(),
            data: Some(RawLeaderSkillData {
                hp: 1.5,
                atk: 1.0,
                rcv: 1.0,
                constraints: vec![Some(RawConstraint {
                    kind: "elem".to_string(),
                    value: Some(1),
                })],
            }),
        }],
        awakenings: vec![
            RawAwakening {
                id: 1,
                name: "Enhanced HP".to_string(),
                description: "HP +200".to_string(),
            },
            RawAwakening {
                id: 2,
                name: "Skill Boost".to_string(),
                description: "Start with skill charged one turn".to_string(),
            },
        ],
    }
}
