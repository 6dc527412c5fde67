use thiserror::Error;

/// Failures of event store operations. The store is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event with id {0} not found")]
    NotFound(String),

    #[error("Invalid event: {0}")]
    Validation(String),

    #[error("Hour {0} is outside 0-23")]
    InvalidHour(u32),
}
