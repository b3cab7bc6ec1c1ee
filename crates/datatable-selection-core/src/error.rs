use thiserror::Error;

/// Returned when a string does not name a [`SelectMode`](crate::mode::SelectMode).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown select mode '{value}', expected 'single' or 'multiple'")]
pub struct ParseSelectModeError {
    pub value: String,
}
