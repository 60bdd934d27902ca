//! Action-type namespacing.
//!
//! Start actions are typed `namespace/method`; actions an effect emits are
//! retagged `namespace/method/key`, where `key` is the emitted action's own
//! unqualified type.

use crate::{action::Action, error::ReffectError};
use serde::{Deserialize, Serialize};

/// Separator between type segments.
pub const SEPARATOR: char = '/';

/// Type prefix of router actions, which are never retagged.
pub const ROUTER_ACTION_PREFIX: &str = "@@router/";

/// Compute the start-action type of an effect.
///
/// ```rust
/// assert_eq!(reffect_core::qualify("Todo", "add"), "Todo/add");
/// ```
pub fn qualify(namespace: &str, method: &str) -> String {
    format!("{namespace}{SEPARATOR}{method}")
}

/// Compute the reducer-scoped type for `key` under an effect.
///
/// ```rust
/// assert_eq!(
///     reffect_core::scoped_type("Todo", "add", "success"),
///     "Todo/add/success"
/// );
/// ```
pub fn scoped_type(namespace: &str, method: &str, key: &str) -> String {
    format!("{namespace}{SEPARATOR}{method}{SEPARATOR}{key}")
}

/// Which part of an action type a segment names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A module namespace.
    Namespace,
    /// An effect method name.
    Method,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Namespace => f.write_str("namespace"),
            Segment::Method => f.write_str("method"),
        }
    }
}

/// Check that a namespace or method name is present.
///
/// Segments may themselves contain [`SEPARATOR`]; they are joined verbatim.
pub fn validate_segment(segment: Segment, value: &str) -> Result<(), ReffectError> {
    if value.is_empty() {
        return Err(ReffectError::InvalidSegment {
            segment,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Rules for retagging actions emitted by an effect.
///
/// An emitted action keeps its type when it is marked global or when its
/// type starts with one of the pass-through prefixes; otherwise it is
/// rewritten to [`scoped_type`] with its own type as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelabelPolicy {
    passthrough_prefixes: Vec<String>,
}

impl Default for RelabelPolicy {
    fn default() -> Self {
        Self {
            passthrough_prefixes: vec![ROUTER_ACTION_PREFIX.to_string()],
        }
    }
}

impl RelabelPolicy {
    /// Create the default policy (router actions pass through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another type prefix whose actions pass through unchanged.
    pub fn with_passthrough_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.passthrough_prefixes.push(prefix.into());
        self
    }

    /// The configured pass-through prefixes.
    pub fn passthrough_prefixes(&self) -> &[String] {
        &self.passthrough_prefixes
    }

    /// Whether `action` keeps its type when re-emitted.
    pub fn is_passthrough(&self, action: &Action) -> bool {
        action.is_global()
            || self
                .passthrough_prefixes
                .iter()
                .any(|prefix| action.kind.starts_with(prefix.as_str()))
    }

    /// Retag an action emitted by the effect `namespace/method`.
    pub fn relabel(&self, action: Action, namespace: &str, method: &str) -> Action {
        if self.is_passthrough(&action) {
            return action;
        }
        let kind = scoped_type(namespace, method, &action.kind);
        action.with_kind(kind)
    }
}
