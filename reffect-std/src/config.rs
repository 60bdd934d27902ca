//! Module configuration.

use reffect_core::RelabelPolicy;
use serde::{Deserialize, Serialize};

/// What finalizing a module does when a scoped reducer type is already
/// registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReducerPolicy {
    /// Replace the existing reducer and log a warning.
    #[default]
    Overwrite,
    /// Fail with [`ReffectError::DuplicateReducer`] and register nothing.
    ///
    /// [`ReffectError::DuplicateReducer`]: reffect_core::ReffectError::DuplicateReducer
    Reject,
}

/// Settings applied to every effect of a module.
///
/// Deserializable with per-field defaults, so a partial document such as
/// `{ "duplicate_reducers": "reject" }` is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// How emitted actions are retagged.
    pub relabel: RelabelPolicy,
    /// Collision handling in the reducer registry.
    pub duplicate_reducers: DuplicateReducerPolicy,
}

impl ModuleConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relabel policy.
    pub fn with_relabel(mut self, relabel: RelabelPolicy) -> Self {
        self.relabel = relabel;
        self
    }

    /// Set the duplicate reducer policy.
    pub fn with_duplicate_reducers(mut self, policy: DuplicateReducerPolicy) -> Self {
        self.duplicate_reducers = policy;
        self
    }
}
