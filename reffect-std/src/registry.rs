//! The reducer registry shared between modules.

use reffect_core::{Action, BoxReducer};
use std::collections::HashMap;

/// Reducers keyed by scoped action type.
///
/// One registry is typically shared by every module of an application and
/// handed to the reducer-combination step once all modules are finalized.
#[derive(Default, Clone)]
pub struct ReducerRegistry {
    reducers: HashMap<String, BoxReducer>,
}

impl ReducerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `reducer` under `key`, returning the reducer it replaced.
    pub fn insert(&mut self, key: impl Into<String>, reducer: BoxReducer) -> Option<BoxReducer> {
        self.reducers.insert(key.into(), reducer)
    }

    /// Get the reducer registered under `key`.
    pub fn get(&self, key: &str) -> Option<&BoxReducer> {
        self.reducers.get(key)
    }

    /// Get the reducer that handles `action`'s type.
    pub fn reducer_for(&self, action: &Action) -> Option<&BoxReducer> {
        self.get(&action.kind)
    }

    /// Whether a reducer is registered under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.reducers.contains_key(key)
    }

    /// The registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.reducers.keys().map(String::as_str)
    }

    /// Iterate over all registrations.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoxReducer)> {
        self.reducers.iter().map(|(key, reducer)| (key.as_str(), reducer))
    }

    /// Number of registered reducers.
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl std::fmt::Debug for ReducerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ReducerRegistry").field("keys", &keys).finish()
    }
}
