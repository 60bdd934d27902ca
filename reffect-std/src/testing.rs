//! Testing utilities for Reffect.
//!
//! This module provides utilities to make testing effects and modules easier.
//!
//! # Features
//!
//! - [`RecordingHandler`]: An effect handler that records the payloads it receives
//! - [`CountingReducer`]: A reducer that counts invocations

use futures::{StreamExt, stream};
use reffect_core::{Action, EffectHandler, EffectStream, PayloadStream, Reducer};
use serde_json::Value;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// An effect handler that records every payload and answers each one with a
/// fixed list of actions.
///
/// # Example
///
/// ```rust,ignore
/// let handler = RecordingHandler::emitting(vec![Action::new("success")]);
/// let probe = handler.clone();
///
/// let module = EffectModuleBuilder::<()>::new()
///     .effect_handler("add", EffectOptions::new(), handler)
///     .finalize("Todo", &mut registry)?;
///
/// // Drive the module...
/// assert_eq!(probe.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingHandler {
    received: Arc<Mutex<Vec<Value>>>,
    responses: Arc<Vec<Action>>,
}

impl RecordingHandler {
    /// Create a recording handler that emits nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording handler that emits `responses` for every payload.
    pub fn emitting(responses: Vec<Action>) -> Self {
        Self {
            received: Arc::default(),
            responses: Arc::new(responses),
        }
    }

    /// Get a clone of the recorded payloads.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<S> EffectHandler<S> for RecordingHandler {
    fn handle(&self, payloads: PayloadStream, _store: Option<S>) -> EffectStream {
        let received = Arc::clone(&self.received);
        let responses = Arc::clone(&self.responses);
        payloads
            .flat_map(move |payload| {
                received.lock().unwrap().push(payload);
                stream::iter(responses.iter().cloned().map(Ok).collect::<Vec<_>>())
            })
            .boxed()
    }
}

// ============================================================================
// Counting Reducer
// ============================================================================

/// A reducer that counts invocations and returns the state unchanged.
#[derive(Clone, Default)]
pub struct CountingReducer {
    count: Arc<AtomicUsize>,
}

impl CountingReducer {
    /// Create a new counting reducer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Reducer for CountingReducer {
    fn reduce(&self, state: Value, _action: &Action) -> Value {
        self.count.fetch_add(1, Ordering::SeqCst);
        state
    }
}
