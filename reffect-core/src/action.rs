//! The action record flowing through the global action stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dispatched action.
///
/// Serializes to the conventional `{ "type", "payload", "meta", "error" }`
/// shape. The "do not transfer" marker is in-process only and never
/// serialized.
///
/// # Example
///
/// ```rust
/// use reffect_core::Action;
/// use serde_json::json;
///
/// let action = Action::new("Todo/add").with_payload(json!({ "text": "x" }));
/// assert_eq!(action.kind, "Todo/add");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action type.
    #[serde(rename = "type")]
    pub kind: String,

    /// The action payload; `Null` when absent.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,

    /// Optional metadata attached by a meta creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Whether the payload describes a failure.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,

    #[serde(skip)]
    no_transfer: bool,
}

impl Action {
    /// Create an action of the given type with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
            meta: None,
            error: false,
            no_transfer: false,
        }
    }

    /// Set the payload.
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Set the metadata.
    pub fn with_meta(mut self, meta: impl Into<Value>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Set the error flag.
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Mark the action as global.
    ///
    /// Effects re-emit global actions with their type untouched, so they are
    /// seen by whichever subsystem owns that type instead of being captured
    /// into the emitting effect's reducer scope.
    pub fn global(mut self) -> Self {
        self.no_transfer = true;
        self
    }

    /// Whether the action was marked with [`Action::global`].
    pub fn is_global(&self) -> bool {
        self.no_transfer
    }

    /// Return a copy of this action carrying a different type.
    ///
    /// Every other field, including the global marker, is preserved.
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self
        }
    }
}
