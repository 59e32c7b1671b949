//! City name ↔ `CityId` registry.
//!
//! Ids are handed out densely in insertion order: the registry of `n` cities
//! always covers exactly `CityId(0) .. CityId(n)`.  Cities are never removed,
//! so an id stays valid for the lifetime of the registry.

use std::collections::HashMap;

use wr_core::CityId;

use crate::{GraphError, GraphResult};

/// A named city.  Identity is the exact (case-sensitive) name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct City {
    name: String,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Bidirectional name ↔ id mapping.
#[derive(Clone, Debug, Default)]
pub struct CityRegistry {
    by_name: HashMap<String, CityId>,
    cities:  Vec<City>,
}

impl CityRegistry {
    /// Ids are `u32` and `u32::MAX` is reserved for `CityId::INVALID`.
    pub const MAX_CITIES: usize = u32::MAX as usize;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` if unseen.
    ///
    /// Returns the city's id and `true` if the registry grew.  Any string is
    /// a valid name, including the empty string.
    pub fn add(&mut self, name: &str) -> (CityId, bool) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, false);
        }
        let id = id_at(self.cities.len());
        self.by_name.insert(name.to_owned(), id);
        self.cities.push(City { name: name.to_owned() });
        (id, true)
    }

    /// Id of a registered city, or [`GraphError::UnknownCity`].
    pub fn id_of(&self, name: &str) -> GraphResult<CityId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownCity(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of `id`, or `None` if out of range.
    pub fn name_of(&self, id: CityId) -> Option<&str> {
        self.cities.get(id.index()).map(City::name)
    }

    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (id_at(i), c))
    }

    /// Names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cities.iter().map(City::name)
    }
}

/// Id of the city at dense position `i`.
#[inline]
pub(crate) fn id_at(i: usize) -> CityId {
    debug_assert!(i < CityRegistry::MAX_CITIES, "city index {i} exceeds the u32 id space");
    CityId(i as u32)
}
