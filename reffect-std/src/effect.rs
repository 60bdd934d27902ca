//! The epic transformer behind every declared effect.
//!
//! An [`EffectEpic`] narrows the global action stream to its start action,
//! hands the payloads to the effect's handler and retags whatever the handler
//! emits so it lands in the effect's reducer scope.

use futures::{StreamExt, TryStreamExt, future};
use reffect_core::{
    Action, ActionCreator, ActionStream, BoxReducer, EffectHandler, EffectStream, Epic,
    MetaCreator, PayloadCreator, Reducer, RelabelPolicy,
};
use serde_json::Value;
use std::sync::Arc;

/// Per-effect options: how start actions are built and which reducers the
/// effect feeds.
///
/// # Example
///
/// ```rust,ignore
/// let options = EffectOptions::new()
///     .payload_creator(|text| json!({ "text": text }))
///     .reducer("setLoading", |state, _action: &Action| state);
/// ```
#[derive(Default, Clone)]
pub struct EffectOptions {
    pub(crate) payload_creator: Option<PayloadCreator>,
    pub(crate) meta_creator: Option<MetaCreator>,
    pub(crate) reducers: Vec<(String, BoxReducer)>,
}

impl EffectOptions {
    /// Options with identity payloads, no metadata and no reducers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive start-action payloads from call arguments.
    pub fn payload_creator<F>(mut self, creator: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.payload_creator = Some(Arc::new(creator));
        self
    }

    /// Derive start-action metadata from call arguments.
    pub fn meta_creator<F>(mut self, creator: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.meta_creator = Some(Arc::new(creator));
        self
    }

    /// Register a reducer for actions this effect emits as `key`.
    pub fn reducer<F>(mut self, key: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(Value, &Action) -> Value + Send + Sync + 'static,
    {
        self.reducers.push((key.into(), Arc::new(reducer)));
        self
    }

    /// Register an already shared reducer for actions emitted as `key`.
    pub fn shared_reducer(mut self, key: impl Into<String>, reducer: BoxReducer) -> Self {
        self.reducers.push((key.into(), reducer));
        self
    }

    /// Register a reducer implemented as a type.
    pub fn reducer_impl<R: Reducer>(self, key: impl Into<String>, reducer: R) -> Self {
        self.shared_reducer(key, Arc::new(reducer))
    }

    /// The declared reducer keys, in declaration order.
    pub fn reducer_keys(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|(key, _)| key.as_str())
    }
}

impl std::fmt::Debug for EffectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectOptions")
            .field("payload_creator", &self.payload_creator.is_some())
            .field("meta_creator", &self.meta_creator.is_some())
            .field("reducers", &self.reducer_keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A finalized effect: its start action paired with the stream transformer
/// that reacts to it.
pub struct EffectEpic<S> {
    start_action: ActionCreator,
    namespace: Arc<str>,
    method: Arc<str>,
    policy: Arc<RelabelPolicy>,
    handler: Arc<dyn EffectHandler<S>>,
}

impl<S> Clone for EffectEpic<S> {
    fn clone(&self) -> Self {
        Self {
            start_action: self.start_action.clone(),
            namespace: Arc::clone(&self.namespace),
            method: Arc::clone(&self.method),
            policy: Arc::clone(&self.policy),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S> EffectEpic<S> {
    pub(crate) fn new(
        start_action: ActionCreator,
        namespace: Arc<str>,
        method: Arc<str>,
        policy: Arc<RelabelPolicy>,
        handler: Arc<dyn EffectHandler<S>>,
    ) -> Self {
        Self {
            start_action,
            namespace,
            method,
            policy,
            handler,
        }
    }

    /// The creator of the action that triggers this epic.
    pub fn start_action(&self) -> &ActionCreator {
        &self.start_action
    }

    /// The namespace of the owning module.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The effect method name.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl<S> std::fmt::Debug for EffectEpic<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectEpic")
            .field("start_action", &self.start_action.kind())
            .finish_non_exhaustive()
    }
}

impl<S: Send + 'static> Epic<S> for EffectEpic<S> {
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream {
        let start = self.start_action.clone();
        let payloads = actions
            .filter(move |action| future::ready(start.matches(action)))
            .map(|action| action.payload)
            .boxed();

        let namespace = Arc::clone(&self.namespace);
        let method = Arc::clone(&self.method);
        let policy = Arc::clone(&self.policy);
        self.handler
            .handle(payloads, store)
            .map_ok(move |action| {
                let relabeled = policy.relabel(action, &namespace, &method);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    namespace = %namespace,
                    method = %method,
                    kind = %relabeled.kind,
                    "effect emitted action"
                );
                relabeled
            })
            .boxed()
    }
}
