use tracing::debug;

pub mod domain;
pub mod error;
pub mod store;

pub use domain::City;
pub use error::SubmitError;
pub use store::{project, CityStore};

/// Screen-session state: the city store plus the sort flag.
///
/// Owned by the running screen and handed to the view layer, so append,
/// toggle, and projection behavior stay testable without any UI. State is
/// created empty at session start and discarded when the session ends.
#[derive(Debug, Default, Clone)]
pub struct CitySession {
    store: CityStore,
    sort_enabled: bool,
}

impl CitySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation gate for the add-city form.
    ///
    /// Both fields must be non-empty; there is no trimming, no length
    /// limit, and no duplicate rejection. On rejection the store is left
    /// untouched and the caller keeps the form open.
    pub fn submit(&mut self, name: &str, country: &str) -> Result<(), SubmitError> {
        if name.is_empty() {
            debug!("rejected add-city submission: empty name");
            return Err(SubmitError::EmptyName);
        }
        if country.is_empty() {
            debug!("rejected add-city submission: empty country");
            return Err(SubmitError::EmptyCountry);
        }

        self.store.append(name, country);
        debug!(city = name, country, total = self.store.len(), "added city");
        Ok(())
    }

    pub fn toggle_sort(&mut self) {
        self.sort_enabled = !self.sort_enabled;
        debug!(sort_enabled = self.sort_enabled, "toggled sort");
    }

    pub fn sort_enabled(&self) -> bool {
        self.sort_enabled
    }

    /// The stored cities in insertion order, regardless of the sort flag.
    pub fn cities(&self) -> &[City] {
        self.store.cities()
    }

    /// The sequence the screen renders, derived per the sort flag.
    pub fn displayed(&self) -> Vec<City> {
        project(self.store.cities(), self.sort_enabled)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
