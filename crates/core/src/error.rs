//! Domain error model.

use thiserror::Error;

/// Result type used across the planning and inventory layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, synchronous validation failure. None of
/// them are retryable: the caller passed something the model cannot accept.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An input value was out of its allowed range (negative cost, zero
    /// demand, NaN, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A removal asked for more units than are on hand.
    #[error("cannot remove {requested} units, only {available} available")]
    InsufficientStock { requested: f64, available: f64 },

    /// A domain invariant was violated (e.g. an order applied to the wrong product).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn insufficient_stock(requested: f64, available: f64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }
}
