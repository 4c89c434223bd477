//! The lookup facade: one repository per entity kind, the cross-reference
//! join, and the entry points callers use.
//!
//! Repositories are built once, eagerly, and never change afterwards. Joins
//! never touch stored entities: [`Pad::fetch_one`] clones the stored monster
//! and returns the populated copy, so a `Pad` can be shared freely.

use monster_rules::{
    ActiveSkill, Awakening, AwakeningId, Evolution, LeaderSkill, Monster, MonsterId, RawDataset,
    RulesError, StatLine,
};

use crate::config::PadConfig;
use crate::error::{PadError, Result};
use crate::family::FamilyResolver;
use crate::loader::load_dataset;
use crate::repository::{
    ActiveSkillRepository, AwakeningRepository, EvolutionRepository, LeaderSkillRepository,
    Keyed, MonsterRepository, Repository, Single,
};

/// Read-only access to every monster record set.
#[derive(Debug)]
pub struct Pad {
    monsters: MonsterRepository,
    evolutions: EvolutionRepository,
    active_skills: ActiveSkillRepository,
    leader_skills: LeaderSkillRepository,
    awakenings: AwakeningRepository,
}

impl Pad {
    /// Build every repository from the raw record sets.
    ///
    /// Fails if any record references a code missing from its table.
    pub fn from_dataset(dataset: RawDataset) -> Result<Self> {
        let RawDataset {
            monsters,
            evolutions,
            active_skills,
            leader_skills,
            awakenings,
        } = dataset;

        let monsters: MonsterRepository =
            Repository::from_flat(monsters, |raw| Ok::<_, PadError>(Monster::from_raw(raw)?))?;

        // Source keys arrive as strings; group order follows the numeric id.
        let mut evolution_groups = evolutions
            .into_iter()
            .map(|(source, records)| {
                let source: MonsterId = source.parse().map_err(|_| {
                    RulesError::MalformedRecord(format!(
                        "evolution source id is not an integer: {source:?}"
                    ))
                })?;
                Ok::<_, PadError>((source, records))
            })
            .collect::<Result<Vec<_>>>()?;
        evolution_groups.sort_by_key(|(source, _)| *source);
        let evolutions: EvolutionRepository =
            Repository::from_nested(evolution_groups, |source: &MonsterId, raw| {
                Ok::<_, PadError>(Evolution::from_raw(*source, raw))
            })?;

        let active_skills: ActiveSkillRepository = Repository::from_flat(active_skills, |raw| {
            Ok::<_, PadError>(ActiveSkill::from_raw(raw))
        })?;
        let leader_skills: LeaderSkillRepository = Repository::from_flat(leader_skills, |raw| {
            Ok::<_, PadError>(LeaderSkill::from_raw(raw)?)
        })?;
        let awakenings: AwakeningRepository = Repository::from_flat(awakenings, |raw| {
            Ok::<_, PadError>(Awakening::from_raw(raw))
        })?;

        tracing::info!(
            "Loaded {} monsters, {} evolutions, {} active skills, {} leader skills, {} awakenings",
            monsters.len(),
            evolutions.len(),
            active_skills.len(),
            leader_skills.len(),
            awakenings.len()
        );

        Ok(Self {
            monsters,
            evolutions,
            active_skills,
            leader_skills,
            awakenings,
        })
    }

    /// Load the snapshot described by `config` and build the facade.
    pub fn load(config: &PadConfig) -> Result<Self> {
        Self::from_dataset(load_dataset(config)?)
    }

    /// Fetch a monster with its skills, evolutions, and awakenings joined.
    ///
    /// An unset or unresolvable skill name leaves the placeholder skill in
    /// place. A missing awakening is an error.
    pub fn fetch_one(&self, id: MonsterId) -> Result<Monster> {
        let mut monster = self.monsters.get(&id)?.clone();

        monster.active_skill = match monster.active_skill_name.as_deref() {
            Some(name) => self.resolve_or_placeholder(&self.active_skills, name, id)?,
            None => ActiveSkill::unset(),
        };

        monster.evolutions = self
            .evolutions
            .evolves_from(id)
            .into_iter()
            .cloned()
            .collect();

        monster.awakenings = monster
            .awakening_ids
            .iter()
            .map(|awakening_id| self.awakenings.get(awakening_id).cloned())
            .collect::<Result<Vec<_>>>()?;

        monster.leader_skill = match monster.leader_skill_name.as_deref() {
            Some(name) => self.resolve_or_placeholder(&self.leader_skills, name, id)?,
            None => LeaderSkill::unset(),
        };

        tracing::debug!("Fetched {}", monster);
        Ok(monster)
    }

    /// Look a skill up by name, falling back to its placeholder on a miss.
    /// Integrity errors are not swallowed.
    fn resolve_or_placeholder<T>(
        &self,
        repo: &Repository<T, Single>,
        name: &str,
        owner: MonsterId,
    ) -> Result<T>
    where
        T: Keyed<Key = String> + Clone + Default,
    {
        match repo.get(name) {
            Ok(skill) => Ok(skill.clone()),
            Err(PadError::NotFound { kind, .. }) => {
                tracing::warn!("Monster {} references unknown {} {:?}", owner, kind, name);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    /// HP/ATK/RCV of a stored monster at `level`.
    ///
    /// Levels outside `1..=max_level` are precondition errors.
    pub fn stats_at(&self, id: MonsterId, level: u32) -> Result<StatLine> {
        Ok(self.monsters.get(&id)?.stats_at(level)?)
    }

    /// Every monster, unjoined, ordered by id.
    pub fn fetch_all(&self) -> Vec<&Monster> {
        let mut monsters: Vec<&Monster> = self.monsters.iter().collect();
        monsters.sort_by_key(|m| m.id);
        monsters
    }

    /// Every monster connected to `monster` by evolutions, joined, ordered by id.
    pub fn evolution_family(&self, monster: &Monster) -> Result<Vec<Monster>> {
        FamilyResolver::new(&self.evolutions).resolve(monster.id, |id| self.fetch_one(id))
    }

    /// Outgoing evolutions of a monster.
    pub fn evolutions_from(&self, id: MonsterId) -> Vec<&Evolution> {
        self.evolutions.evolves_from(id)
    }

    /// Evolutions that produce a monster.
    pub fn evolutions_into(&self, id: MonsterId) -> Vec<&Evolution> {
        self.evolutions.evolves_into(id)
    }

    /// The active skill named `name`.
    pub fn active_skill(&self, name: &str) -> Result<&ActiveSkill> {
        self.active_skills.get(name)
    }

    /// The leader skill named `name`.
    pub fn leader_skill(&self, name: &str) -> Result<&LeaderSkill> {
        self.leader_skills.get(name)
    }

    /// The awakening with id `id`.
    pub fn awakening(&self, id: AwakeningId) -> Result<&Awakening> {
        self.awakenings.get(&id)
    }

    /// Number of stored monster records, duplicates included.
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }
}
