//! Error types for Reffect.
//!
//! - [`ReffectError`] - Errors raised while wiring effect modules
//! - [`BoxError`] - Faults raised by handlers and forwarded unchanged

use crate::action_type::Segment;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while finalizing an effect module.
#[derive(Error, Debug)]
pub enum ReffectError {
    /// A namespace or method name cannot be qualified.
    #[error("invalid {segment} {value:?}: must be non-empty")]
    InvalidSegment {
        /// Which segment was rejected.
        segment: Segment,
        /// The rejected value.
        value: String,
    },

    /// A reducer was declared under a reserved option name.
    #[error("reducer key {key:?} on effect {method:?} is reserved")]
    ReservedReducerKey {
        /// The effect method declaring the reducer.
        method: String,
        /// The reserved key.
        key: String,
    },

    /// A scoped reducer type is already registered.
    #[error("reducer already registered for {0:?}")]
    DuplicateReducer(String),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

impl From<BoxError> for ReffectError {
    fn from(err: BoxError) -> Self {
        ReffectError::Custom(err)
    }
}
