use thiserror::Error;

/// Rejection reasons for an add-city submission.
///
/// Callers surface no message for these: a rejected submission leaves the
/// form open and the store untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("city name must not be empty")]
    EmptyName,
    #[error("country must not be empty")]
    EmptyCountry,
}
