//! Discrete user actions the screen can dispatch.

/// Every mutation of screen state goes through one of these actions,
/// applied synchronously by the reducer before the next frame renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenAddCity,
    CancelAddCity,
    SubmitCity { name: String, country: String },
    ToggleSort,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::OpenAddCity => "open_add_city",
            UiAction::CancelAddCity => "cancel_add_city",
            UiAction::SubmitCity { .. } => "submit_city",
            UiAction::ToggleSort => "toggle_sort",
        }
    }
}
