//! Core capability errors (parsing, validation, snapshot invariants).
//!
//! These are bounded and stable: core errors represent domain/refusal
//! states, not library implementation details.

use thiserror::Error;

use crate::error::{Effect, Transience};

/// Invalid identifier or enum wire form.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum InvalidId {
    #[error("letter id `{raw}` is invalid: {reason}")]
    Letter { raw: String, reason: String },
    #[error("counter key `{raw}` is invalid: {reason}")]
    CounterKey { raw: String, reason: String },
    #[error("classification `{raw}` is unknown")]
    Classification { raw: String },
    #[error("status `{raw}` is unknown")]
    Status { raw: String },
}

/// A caller-supplied field failed validation before any state mutation.
#[derive(Debug, Error, Clone)]
#[error("{field} is invalid: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

/// An import payload was rejected; existing state is untouched.
#[derive(Debug, Error, Clone)]
#[error("snapshot rejected: {reason}")]
pub struct InvalidSnapshot {
    pub reason: String,
}

/// Canonical error enum for the core capability.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    InvalidId(#[from] InvalidId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidSnapshot(#[from] InvalidSnapshot),
}

impl CoreError {
    pub fn transience(&self) -> Transience {
        // Core errors are pure domain/input failures.
        Transience::Permanent
    }

    pub fn effect(&self) -> Effect {
        // Validation always precedes mutation.
        Effect::None
    }
}
