//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card amount is outside the valid range.
    #[error("amount must be between 1 and 5")]
    InvalidAmount,
}
