//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting raw values into card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Value is not a known suit.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// Value is not a known rank.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}
