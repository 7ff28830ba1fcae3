//! Listing error types.

use thiserror::Error;

/// Errors raised by the pagination entry points.
///
/// Undated posts and out-of-range pages are not errors; they are
/// represented in the data (`None` timestamp, empty page).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("invalid argument `{name}`: {value} (must be at least 1)")]
    InvalidArgument { name: &'static str, value: usize },
}

impl ListingError {
    /// Reject `value` if it is zero.
    pub(super) fn require_positive(name: &'static str, value: usize) -> Result<usize, Self> {
        if value == 0 {
            return Err(Self::InvalidArgument { name, value });
        }
        Ok(value)
    }
}
