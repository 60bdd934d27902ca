//! Effect modules.
//!
//! Effects are declared on an [`EffectModuleBuilder`] in order. Nothing is
//! registered until [`EffectModuleBuilder::finalize`] supplies the module's
//! namespace; it then qualifies every action type, fills the module's
//! [`DispatchMap`] and epic list in declaration order and registers the
//! declared reducers.
//!
//! A builder that is never finalized registers nothing.

use crate::{
    combine::{ActionHub, CombinedEpic, combine_epics},
    config::{DuplicateReducerPolicy, ModuleConfig},
    effect::{EffectEpic, EffectOptions},
    registry::ReducerRegistry,
};
use reffect_core::{
    ActionCreator, EffectHandler, EffectStream, META_CREATOR_KEY, PAYLOAD_CREATOR_KEY,
    PayloadStream, ReffectError, Segment, qualify, scoped_type, validate_segment,
};
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// Start-action creators of a module, keyed by effect method.
#[derive(Debug, Default, Clone)]
pub struct DispatchMap {
    creators: HashMap<String, ActionCreator>,
}

impl DispatchMap {
    /// Get the start-action creator of `method`.
    pub fn get(&self, method: &str) -> Option<&ActionCreator> {
        self.creators.get(method)
    }

    /// The effect methods, in no particular order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    /// Iterate over `(method, creator)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator)> {
        self.creators
            .iter()
            .map(|(method, creator)| (method.as_str(), creator))
    }

    /// Number of effect methods.
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    fn insert(&mut self, method: String, creator: ActionCreator) -> Option<ActionCreator> {
        self.creators.insert(method, creator)
    }
}

struct EffectEntry<S> {
    method: String,
    options: EffectOptions,
    handler: Arc<dyn EffectHandler<S>>,
}

/// Collects effect declarations until the module's namespace is known.
///
/// # Example
///
/// ```rust,ignore
/// let mut reducers = ReducerRegistry::new();
/// let module = EffectModuleBuilder::<()>::new()
///     .effect("add", EffectOptions::new().reducer("success", on_success), add_todo)
///     .effect("remove", EffectOptions::new(), remove_todo)
///     .finalize("Todo", &mut reducers)?;
///
/// let add = module.action("add").unwrap();
/// assert_eq!(add.kind(), "Todo/add");
/// ```
pub struct EffectModuleBuilder<S = ()> {
    config: ModuleConfig,
    effects: Vec<EffectEntry<S>>,
}

impl<S> Default for EffectModuleBuilder<S> {
    fn default() -> Self {
        Self {
            config: ModuleConfig::default(),
            effects: Vec::new(),
        }
    }
}

impl<S: Send + 'static> EffectModuleBuilder<S> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the module configuration.
    pub fn with_config(mut self, config: ModuleConfig) -> Self {
        self.config = config;
        self
    }

    /// Declare an effect whose body is a closure or function.
    pub fn effect<F>(self, method: impl Into<String>, options: EffectOptions, handler: F) -> Self
    where
        F: Fn(PayloadStream, Option<S>) -> EffectStream + Send + Sync + 'static,
    {
        self.effect_handler(method, options, handler)
    }

    /// Declare an effect whose body implements [`EffectHandler`].
    pub fn effect_handler<H>(
        mut self,
        method: impl Into<String>,
        options: EffectOptions,
        handler: H,
    ) -> Self
    where
        H: EffectHandler<S>,
    {
        self.effects.push(EffectEntry {
            method: method.into(),
            options,
            handler: Arc::new(handler),
        });
        self
    }

    /// Number of declared effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether no effect has been declared.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Declared method names, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|entry| entry.method.as_str())
    }

    /// Wire every declared effect under `namespace`.
    ///
    /// All declarations are validated before anything is registered, so an
    /// error leaves `reducers` untouched.
    pub fn finalize(
        self,
        namespace: &str,
        reducers: &mut ReducerRegistry,
    ) -> Result<EffectModule<S>, ReffectError> {
        self.validate(namespace, reducers)?;

        let ns: Arc<str> = Arc::from(namespace);
        let policy = Arc::new(self.config.relabel);
        let mut dispatch = DispatchMap::default();
        let mut epics = Vec::with_capacity(self.effects.len());

        for EffectEntry {
            method,
            options,
            handler,
        } in self.effects
        {
            let start_action = ActionCreator::new(qualify(namespace, &method))
                .with_payload_creator(options.payload_creator)
                .with_meta_creator(options.meta_creator);

            for (key, reducer) in options.reducers {
                let replaced = reducers.insert(scoped_type(namespace, &method, &key), reducer);
                #[cfg(feature = "tracing")]
                if replaced.is_some() {
                    tracing::warn!(%namespace, %method, %key, "reducer replaced");
                } else {
                    tracing::debug!(%namespace, %method, %key, "reducer registered");
                }
                #[cfg(not(feature = "tracing"))]
                let _ = replaced;
            }

            if dispatch.insert(method.clone(), start_action.clone()).is_some() {
                #[cfg(feature = "tracing")]
                tracing::debug!(%namespace, %method, "effect redeclared, replacing start action");
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(%namespace, %method, start = %start_action, "effect registered");

            epics.push(EffectEpic::new(
                start_action,
                Arc::clone(&ns),
                Arc::from(method),
                Arc::clone(&policy),
                handler,
            ));
        }

        Ok(EffectModule {
            namespace: namespace.to_string(),
            dispatch,
            epics,
        })
    }

    fn validate(&self, namespace: &str, reducers: &ReducerRegistry) -> Result<(), ReffectError> {
        validate_segment(Segment::Namespace, namespace)?;

        let reject = self.config.duplicate_reducers == DuplicateReducerPolicy::Reject;
        let mut pending = HashSet::new();
        for entry in &self.effects {
            validate_segment(Segment::Method, &entry.method)?;

            for key in entry.options.reducer_keys() {
                if key == PAYLOAD_CREATOR_KEY || key == META_CREATOR_KEY {
                    return Err(ReffectError::ReservedReducerKey {
                        method: entry.method.clone(),
                        key: key.to_string(),
                    });
                }
                if reject {
                    let scoped = scoped_type(namespace, &entry.method, key);
                    if reducers.contains_key(&scoped) || !pending.insert(scoped.clone()) {
                        return Err(ReffectError::DuplicateReducer(scoped));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A finalized module: its namespace, start-action creators and epics.
pub struct EffectModule<S = ()> {
    namespace: String,
    dispatch: DispatchMap,
    epics: Vec<EffectEpic<S>>,
}

impl<S> EffectModule<S> {
    /// The module namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Start-action creators by method.
    pub fn dispatch(&self) -> &DispatchMap {
        &self.dispatch
    }

    /// Start-action creator of `method`.
    pub fn action(&self, method: &str) -> Option<&ActionCreator> {
        self.dispatch.get(method)
    }

    /// The module's epics, in declaration order.
    pub fn epics(&self) -> &[EffectEpic<S>] {
        &self.epics
    }

    /// Take the epics out of the module.
    pub fn into_epics(self) -> Vec<EffectEpic<S>> {
        self.epics
    }
}

impl<S: Clone + Send + 'static> EffectModule<S> {
    /// Subscribe every epic to `hub` and merge their outputs.
    pub fn run(&self, hub: &ActionHub, store: Option<S>) -> EffectStream {
        combine_epics(&self.epics, hub, store)
    }

    /// Combine the module's epics into a single epic.
    pub fn into_epic(self) -> CombinedEpic<EffectEpic<S>> {
        CombinedEpic::new(self.epics)
    }
}

impl<S> std::fmt::Debug for EffectModule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectModule")
            .field("namespace", &self.namespace)
            .field("dispatch", &self.dispatch)
            .field("epics", &self.epics)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{StreamExt, stream};
    use reffect_core::{Action, BoxError};

    fn noop(_payloads: PayloadStream, _store: Option<()>) -> EffectStream {
        stream::empty::<Result<Action, BoxError>>().boxed()
    }

    #[test]
    fn test_reducers_registered_only_on_finalize() {
        let mut registry = ReducerRegistry::new();
        registry.insert(
            "Other/load/done",
            Arc::new(|state: serde_json::Value, _action: &Action| state),
        );

        let builder = EffectModuleBuilder::<()>::new().effect(
            "add",
            EffectOptions::new().reducer("success", |state, _action: &Action| state),
            noop,
        );
        assert_eq!(builder.len(), 1);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains_key("Todo/add/success"));

        let module = builder.finalize("Todo", &mut registry).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("Todo/add/success"));
        assert!(registry.contains_key("Other/load/done"));
        assert_eq!(module.epics().len(), 1);
    }

    #[test]
    fn test_namespace_with_separator_is_joined_verbatim() {
        let mut registry = ReducerRegistry::new();
        let module = EffectModuleBuilder::<()>::new()
            .effect(
                "add",
                EffectOptions::new().reducer("success", |state, _action: &Action| state),
                noop,
            )
            .finalize("app/Todo", &mut registry)
            .unwrap();

        assert_eq!(module.action("add").unwrap().kind(), "app/Todo/add");
        assert_eq!(module.epics()[0].start_action().kind(), "app/Todo/add");
        assert!(registry.contains_key("app/Todo/add/success"));
    }

    #[test]
    fn test_methods_in_declaration_order() {
        let builder = EffectModuleBuilder::<()>::new()
            .effect("b", EffectOptions::new(), noop)
            .effect("a", EffectOptions::new(), noop);

        assert_eq!(builder.methods().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_invalid_namespace() {
        let mut registry = ReducerRegistry::new();
        let result = EffectModuleBuilder::<()>::new()
            .effect("add", EffectOptions::new(), noop)
            .finalize("", &mut registry);

        assert!(matches!(
            result,
            Err(ReffectError::InvalidSegment { segment: Segment::Namespace, .. })
        ));
    }

    #[test]
    fn test_invalid_method_registers_nothing() {
        let mut registry = ReducerRegistry::new();
        let result = EffectModuleBuilder::<()>::new()
            .effect(
                "add",
                EffectOptions::new().reducer("success", |state, _action: &Action| state),
                noop,
            )
            .effect("", EffectOptions::new(), noop)
            .finalize("Todo", &mut registry);

        assert!(matches!(
            result,
            Err(ReffectError::InvalidSegment { segment: Segment::Method, .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reserved_reducer_key() {
        let mut registry = ReducerRegistry::new();
        let result = EffectModuleBuilder::<()>::new()
            .effect(
                "add",
                EffectOptions::new().reducer(PAYLOAD_CREATOR_KEY, |state, _action: &Action| state),
                noop,
            )
            .finalize("Todo", &mut registry);

        assert!(matches!(result, Err(ReffectError::ReservedReducerKey { .. })));
        assert!(registry.is_empty());
    }
}
