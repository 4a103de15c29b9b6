use thiserror::Error;

/// The two conditions a user ever gets to see.
///
/// Provider failures of every kind (transport, HTTP status, bad body) collapse
/// into [`WidgetError::FetchFailed`]; the underlying cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Please enter a location.")]
    EmptyLocation,

    #[error("Unable to fetch weather data. Please check the location.")]
    FetchFailed,
}
