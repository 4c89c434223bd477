//! Generic keyed repository over entities built from raw records.
//!
//! A repository is configured at the type level:
//! - **Lookup mode**: [`Single`] repositories answer [`Repository::get`] with
//!   exactly one entity, [`Many`] repositories answer
//!   [`Repository::get_many`] with every match.
//! - **Loading strategy**: [`Repository::from_flat`] builds one entity per
//!   record, [`Repository::from_nested`] builds one entity per record nested
//!   under an outer key.
//!
//! Entities are kept in input order; a key index is built once at load time.

mod records;

pub use records::*;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{PadError, Result};

/// An entity that can be looked up by a designated key field.
pub trait Keyed {
    type Key: Eq + Hash + Clone + Debug + Display;

    /// Entity label used in lookup errors.
    const KIND: &'static str;

    fn key(&self) -> &Self::Key;
}

/// Lookup mode: at most one entity per key; duplicates are integrity errors.
#[derive(Debug)]
pub enum Single {}

/// Lookup mode: any number of entities per key.
#[derive(Debug)]
pub enum Many {}

/// An ordered, read-only collection of entities with a key index.
#[derive(Debug)]
pub struct Repository<T: Keyed, M> {
    objects: Vec<T>,
    index: HashMap<T::Key, Vec<usize>>,
    mode: PhantomData<fn() -> M>,
}

impl<T: Keyed, M> Repository<T, M> {
    /// Build one entity per record, preserving record order.
    pub fn from_flat<R, E, F>(
        records: impl IntoIterator<Item = R>,
        mut build: F,
    ) -> std::result::Result<Self, E>
    where
        F: FnMut(R) -> std::result::Result<T, E>,
    {
        let objects = records
            .into_iter()
            .map(&mut build)
            .collect::<std::result::Result<Vec<_>, E>>()?;
        Ok(Self::from_objects(objects))
    }

    /// Build one entity per record nested under an outer key.
    ///
    /// Groups are visited in iteration order and records within a group in
    /// list order. The builder receives the outer key of each record.
    pub fn from_nested<K, R, E, F>(
        groups: impl IntoIterator<Item = (K, Vec<R>)>,
        mut build: F,
    ) -> std::result::Result<Self, E>
    where
        F: FnMut(&K, R) -> std::result::Result<T, E>,
    {
        let mut objects = Vec::new();
        for (outer, records) in groups {
            for record in records {
                objects.push(build(&outer, record)?);
            }
        }
        Ok(Self::from_objects(objects))
    }

    /// Wrap already-built entities.
    pub fn from_objects(objects: Vec<T>) -> Self {
        let mut index: HashMap<T::Key, Vec<usize>> = HashMap::new();
        for (position, object) in objects.iter().enumerate() {
            index.entry(object.key().clone()).or_default().push(position);
        }
        Self {
            objects,
            index,
            mode: PhantomData,
        }
    }

    /// All entities in input order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.iter()
    }

    /// Number of stored entities, duplicates included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check whether the repository holds no entities.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find entities matching a predicate, in input order.
    pub fn find_by<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.objects.iter().filter(|o| predicate(o)).collect()
    }

    fn matches<Q>(&self, key: &Q) -> &[usize]
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

impl<T: Keyed> Repository<T, Single> {
    /// The single entity whose key equals `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        match self.matches(key) {
            [] => Err(PadError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
            }),
            [position] => Ok(&self.objects[*position]),
            positions => Err(PadError::Integrity {
                kind: T::KIND,
                key: key.to_string(),
                count: positions.len(),
            }),
        }
    }

    /// Check whether at least one entity has key `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.matches(key).is_empty()
    }
}

impl<T: Keyed> Repository<T, Many> {
    /// Every entity whose key equals `key`, in input order. Never fails.
    pub fn get_many<Q>(&self, key: &Q) -> Vec<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.matches(key)
            .iter()
            .map(|position| &self.objects[*position])
            .collect()
    }
}
