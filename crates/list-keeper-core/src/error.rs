//! Error type shared by the store, codec and controller

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Failures a list operation can report.
///
/// Cancelled prompts and unknown item ids are not errors; they come back as
/// [`Outcome::Cancelled`](crate::Outcome::Cancelled) and
/// [`Outcome::Ignored`](crate::Outcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("no active list selected")]
    NoActiveList,
    #[error("no ids left to assign")]
    IdsExhausted,
    #[error("stored lists are unreadable: {0}")]
    CorruptState(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("failed to encode lists: {0}")]
    Encode(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
