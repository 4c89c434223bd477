//! Key bindings and repository aliases for each entity kind.

use monster_rules::{
    ActiveSkill, Awakening, AwakeningId, Evolution, LeaderSkill, Monster, MonsterId,
};

use super::{Keyed, Many, Repository, Single};

impl Keyed for Monster {
    type Key = MonsterId;
    const KIND: &'static str = "monster";

    fn key(&self) -> &MonsterId {
        &self.id
    }
}

/// Evolutions are keyed by their source monster.
impl Keyed for Evolution {
    type Key = MonsterId;
    const KIND: &'static str = "evolution";

    fn key(&self) -> &MonsterId {
        &self.monster_id
    }
}

impl Keyed for ActiveSkill {
    type Key = String;
    const KIND: &'static str = "active skill";

    fn key(&self) -> &String {
        &self.name
    }
}

impl Keyed for LeaderSkill {
    type Key = String;
    const KIND: &'static str = "leader skill";

    fn key(&self) -> &String {
        &self.name
    }
}

impl Keyed for Awakening {
    type Key = AwakeningId;
    const KIND: &'static str = "awakening";

    fn key(&self) -> &AwakeningId {
        &self.id
    }
}

pub type MonsterRepository = Repository<Monster, Single>;
pub type EvolutionRepository = Repository<Evolution, Many>;
pub type ActiveSkillRepository = Repository<ActiveSkill, Single>;
pub type LeaderSkillRepository = Repository<LeaderSkill, Single>;
pub type AwakeningRepository = Repository<Awakening, Single>;

impl Repository<Evolution, Many> {
    /// Outgoing edges of `source`, in input order.
    pub fn evolves_from(&self, source: MonsterId) -> Vec<&Evolution> {
        self.get_many(&source)
    }

    /// Incoming edges of `target` (what evolves into it), in input order.
    pub fn evolves_into(&self, target: MonsterId) -> Vec<&Evolution> {
        self.find_by(|evo| evo.evolves_to == target)
    }
}
