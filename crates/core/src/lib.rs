//! `stockplan-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup):
//! the error model, the injected clock and the numeric guards every
//! constructor and formula runs its inputs through.

pub mod clock;
pub mod error;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use validate::{ensure_non_negative, ensure_positive};
