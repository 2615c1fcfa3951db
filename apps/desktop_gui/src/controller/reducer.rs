//! Applies UI actions to the screen session state.

use cities_core::CitySession;
use tracing::debug;

use crate::controller::events::UiAction;

/// Everything the running screen owns: the city session plus the add-city
/// form visibility. The form is strictly two-state, open or closed.
#[derive(Debug, Default)]
pub struct ScreenState {
    pub session: CitySession,
    pub add_city_open: bool,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Synchronous state transition for one user action.
///
/// A rejected submission leaves the form open with no error surfaced; the
/// user corrects the fields and retries. Cancel never mutates the session.
pub fn reduce(state: &mut ScreenState, action: UiAction) {
    debug!(action = action.name(), "applying ui action");
    match action {
        UiAction::OpenAddCity => state.add_city_open = true,
        UiAction::CancelAddCity => state.add_city_open = false,
        UiAction::SubmitCity { name, country } => {
            if state.session.submit(&name, &country).is_ok() {
                state.add_city_open = false;
            }
        }
        UiAction::ToggleSort => state.session.toggle_sort(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(name: &str, country: &str) -> UiAction {
        UiAction::SubmitCity {
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    fn displayed_names(state: &ScreenState) -> Vec<String> {
        state
            .session
            .displayed()
            .into_iter()
            .map(|city| city.name)
            .collect()
    }

    #[test]
    fn open_then_cancel_closes_the_form_without_mutation() {
        let mut state = ScreenState::new();

        reduce(&mut state, UiAction::OpenAddCity);
        assert!(state.add_city_open);

        reduce(&mut state, UiAction::CancelAddCity);
        assert!(!state.add_city_open);
        assert!(state.session.is_empty());
    }

    #[test]
    fn valid_submission_appends_and_closes_the_form() {
        let mut state = ScreenState::new();
        reduce(&mut state, UiAction::OpenAddCity);

        reduce(&mut state, submit("Rome", "Italy"));

        assert!(!state.add_city_open);
        assert_eq!(state.session.len(), 1);
        assert_eq!(state.session.cities()[0].name, "Rome");
    }

    #[test]
    fn submission_with_empty_name_keeps_the_form_open_and_list_unchanged() {
        let mut state = ScreenState::new();
        reduce(&mut state, UiAction::OpenAddCity);

        reduce(&mut state, submit("", "Italy"));

        assert!(state.add_city_open);
        assert!(state.session.is_empty());
    }

    #[test]
    fn submission_with_empty_country_keeps_the_form_open_and_list_unchanged() {
        let mut state = ScreenState::new();
        reduce(&mut state, UiAction::OpenAddCity);

        reduce(&mut state, submit("Rome", ""));

        assert!(state.add_city_open);
        assert!(state.session.is_empty());
    }

    #[test]
    fn toggle_sort_flips_the_displayed_order() {
        let mut state = ScreenState::new();
        reduce(&mut state, submit("Rome", "Italy"));
        reduce(&mut state, submit("Amsterdam", "Netherlands"));

        reduce(&mut state, UiAction::ToggleSort);
        assert_eq!(displayed_names(&state), ["Amsterdam", "Rome"]);

        reduce(&mut state, UiAction::ToggleSort);
        assert_eq!(displayed_names(&state), ["Rome", "Amsterdam"]);
    }
}
