//! Reducer trait.

use crate::action::Action;
use serde_json::Value;
use std::sync::Arc;

/// A pure function from the current state and an action to the next state.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Reducer`",
    label = "missing `Reducer` implementation",
    note = "Reducers must implement `reduce`, or be a closure `Fn(Value, &Action) -> Value`."
)]
pub trait Reducer: Send + Sync + 'static {
    /// Compute the next state.
    fn reduce(&self, state: Value, action: &Action) -> Value;
}

impl<F> Reducer for F
where
    F: Fn(Value, &Action) -> Value + Send + Sync + 'static,
{
    fn reduce(&self, state: Value, action: &Action) -> Value {
        (self)(state, action)
    }
}

/// A shared, type-erased reducer.
pub type BoxReducer = Arc<dyn Reducer>;
