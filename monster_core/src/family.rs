//! Evolution family resolution - the connected component of a monster in the
//! evolution graph.
//!
//! The edge set comes straight from external data and may branch, converge,
//! cycle, or have several roots. The walk therefore tracks visited monsters by
//! [`MonsterId`], never by value identity: every join produces a fresh
//! [`Monster`], so two joins of the same id must still count as one node.
//!
//! # Algorithm
//!
//! 1. Seed the family with the joined start monster
//! 2. Queue the start's incoming edges (backward) and outgoing edges (forward)
//! 3. Drain backward edges first, then forward edges; each edge's far end is
//!    joined and, when its id is new, added and expanded in both directions
//! 4. Return the family ordered by id

use std::collections::BTreeMap;

use monster_rules::{Evolution, Monster, MonsterId};

use crate::error::Result;
use crate::repository::EvolutionRepository;

/// Which way an edge is being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDirection {
    /// From an edge's target to its source (what evolves into me).
    Backward,
    /// From an edge's source to its target (what I evolve into).
    Forward,
}

/// Reconstructs evolution families over an evolution repository.
pub struct FamilyResolver<'a> {
    evolutions: &'a EvolutionRepository,
}

impl<'a> FamilyResolver<'a> {
    pub fn new(evolutions: &'a EvolutionRepository) -> Self {
        Self { evolutions }
    }

    /// Every monster connected to `start` by evolution edges in either
    /// direction, including `start` itself, ordered by id.
    ///
    /// `join` turns an id into a fully joined monster; its errors abort the walk.
    pub fn resolve<F>(&self, start: MonsterId, mut join: F) -> Result<Vec<Monster>>
    where
        F: FnMut(MonsterId) -> Result<Monster>,
    {
        let mut family: BTreeMap<MonsterId, Monster> = BTreeMap::new();
        family.insert(start, join(start)?);

        let mut backward: Vec<&Evolution> = self.evolutions.evolves_into(start);
        let mut forward: Vec<&Evolution> = self.evolutions.evolves_from(start);

        loop {
            let (next, direction) = if let Some(edge) = backward.pop() {
                (edge.monster_id, WalkDirection::Backward)
            } else if let Some(edge) = forward.pop() {
                (edge.evolves_to, WalkDirection::Forward)
            } else {
                break;
            };

            if family.contains_key(&next) {
                continue;
            }

            let monster = join(next)?;
            tracing::trace!("family of {}: reached {} ({:?})", start, next, direction);

            backward.extend(self.evolutions.evolves_into(next));
            forward.extend(self.evolutions.evolves_from(next));
            family.insert(next, monster);
        }

        tracing::debug!("resolved family of {} with {} members", start, family.len());
        Ok(family.into_values().collect())
    }

    /// Ids of the family members, without joining anything.
    pub fn member_ids(&self, start: MonsterId) -> Vec<MonsterId> {
        let mut seen = std::collections::BTreeSet::from([start]);
        let mut pending = vec![start];

        while let Some(id) = pending.pop() {
            let neighbours = self
                .evolutions
                .evolves_into(id)
                .into_iter()
                .map(|e| e.monster_id)
                .chain(self.evolutions.evolves_from(id).into_iter().map(|e| e.evolves_to));
            for neighbour in neighbours {
                if seen.insert(neighbour) {
                    pending.push(neighbour);
                }
            }
        }

        seen.into_iter().collect()
    }
}
