use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("form value '{0}' is missing")]
    MissingValue(String),

    #[error("form value '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("schedule has no occurrence at index {0}")]
    NoOccurrence(usize),
}

impl ListingError {
    pub(crate) fn invalid(field: &str, reason: impl ToString) -> Self {
        ListingError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
