//! Append-only city collection and the display projection.

use crate::domain::City;

/// Ordered collection of cities for one screen session.
///
/// Insertion order is preserved. The store only ever grows: there is no
/// removal, update, or clear operation.
#[derive(Debug, Default, Clone)]
pub struct CityStore {
    cities: Vec<City>,
}

impl CityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a city at the end. The caller validates non-emptiness
    /// before invoking; the store itself performs no validation and
    /// cannot fail.
    pub fn append(&mut self, name: impl Into<String>, country: impl Into<String>) {
        self.cities.push(City::new(name, country));
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Derives the display sequence from the store contents and the sort flag.
///
/// With the flag off this is the identity on order. With it on, the result
/// is stably sorted by the first character of the city name only; names
/// sharing a leading character keep their insertion order. The input is
/// never mutated and no element is added, removed, or duplicated.
pub fn project(cities: &[City], sort_enabled: bool) -> Vec<City> {
    let mut view = cities.to_vec();
    if sort_enabled {
        view.sort_by_key(|city| city.name.chars().next());
    }
    view
}
