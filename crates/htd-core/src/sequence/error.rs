//! Input validation errors for suffix ranges.

use thiserror::Error;

use super::Suffix;

/// Rejected range input. Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Bound is not a member of the (possibly limited) range.
    #[error("invalid suffix {0:?}: use a two-digit number (01-99) or a letter and digit (A0-Z9)")]
    InvalidBound(String),
    /// Limit must be a letter+digit suffix.
    #[error("invalid limit {0:?}: use a letter and digit such as K6")]
    InvalidLimit(String),
    #[error("start {start} cannot be after end {end}")]
    StartAfterEnd { start: Suffix, end: Suffix },
}
