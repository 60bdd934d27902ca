//! Start-action creators.

use crate::action::Action;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// Reserved option name for the payload creator.
pub const PAYLOAD_CREATOR_KEY: &str = "createActionPayloadCreator";

/// Reserved option name for the meta creator.
pub const META_CREATOR_KEY: &str = "createActionMetaCreator";

/// Derives an action payload from call arguments.
pub type PayloadCreator = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Derives action metadata from call arguments.
pub type MetaCreator = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A factory for actions of one fixed type.
///
/// Displays as its action type, so it can stand in wherever the type string
/// is expected.
///
/// # Example
///
/// ```rust
/// use reffect_core::ActionCreator;
/// use serde_json::json;
///
/// let add = ActionCreator::new("Todo/add");
/// let action = add.create(json!({ "text": "x" }));
///
/// assert_eq!(action.kind, "Todo/add");
/// assert_eq!(add.to_string(), "Todo/add");
/// ```
#[derive(Clone)]
pub struct ActionCreator {
    kind: Arc<str>,
    payload_creator: Option<PayloadCreator>,
    meta_creator: Option<MetaCreator>,
}

impl ActionCreator {
    /// Create an action creator whose payload is its argument.
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self {
            kind: kind.into(),
            payload_creator: None,
            meta_creator: None,
        }
    }

    /// Derive payloads through `creator` instead of passing arguments through.
    pub fn with_payload_creator(mut self, creator: Option<PayloadCreator>) -> Self {
        self.payload_creator = creator;
        self
    }

    /// Attach metadata derived through `creator`.
    pub fn with_meta_creator(mut self, creator: Option<MetaCreator>) -> Self {
        self.meta_creator = creator;
        self
    }

    /// The action type this creator produces.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether `action` has this creator's type.
    pub fn matches(&self, action: &Action) -> bool {
        action.kind == *self.kind
    }

    /// Build an action from call arguments.
    pub fn create(&self, args: Value) -> Action {
        let meta = self.meta_creator.as_ref().map(|creator| creator(args.clone()));
        let payload = match &self.payload_creator {
            Some(creator) => creator(args),
            None => args,
        };
        attach_meta(Action::new(self.kind.as_ref()).with_payload(payload), meta)
    }

    /// Build an error action carrying `error`'s message.
    ///
    /// The payload creator is bypassed; the meta creator still sees the
    /// message.
    pub fn fail(&self, error: impl fmt::Display) -> Action {
        let message = Value::String(error.to_string());
        let meta = self.meta_creator.as_ref().map(|creator| creator(message.clone()));
        let action = Action::new(self.kind.as_ref())
            .with_payload(message)
            .with_error(true);
        attach_meta(action, meta)
    }
}

fn attach_meta(action: Action, meta: Option<Value>) -> Action {
    match meta {
        Some(meta) => action.with_meta(meta),
        None => action,
    }
}

impl fmt::Display for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)
    }
}

impl fmt::Debug for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("kind", &self.kind)
            .field("payload_creator", &self.payload_creator.is_some())
            .field("meta_creator", &self.meta_creator.is_some())
            .finish()
    }
}
