//! Stream transformer traits.
//!
//! An [`Epic`] is the unit the surrounding store combines: it reads the
//! global action stream and yields further actions. An [`EffectHandler`] is
//! the user-written body of an effect, fed only with the payloads of its own
//! start action.
//!
//! Output streams carry `Result` items so handler faults reach the
//! subscriber exactly as raised.

use crate::{action::Action, error::BoxError};
use futures::stream::BoxStream;
use serde_json::Value;

/// The global action stream.
pub type ActionStream = BoxStream<'static, Action>;

/// Payloads of the actions that start one effect.
pub type PayloadStream = BoxStream<'static, Value>;

/// Actions produced by an epic or handler, interleaved with faults.
pub type EffectStream = BoxStream<'static, Result<Action, BoxError>>;

/// A transformer from the global action stream to further actions.
///
/// `S` is the store handle passed through to handlers, if any.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Epic` for store `{S}`",
    label = "missing `Epic` implementation",
    note = "Epics must implement `run`, or be a closure `Fn(ActionStream, Option<S>) -> EffectStream`."
)]
pub trait Epic<S>: Send + Sync + 'static {
    /// Subscribe to `actions` and return the resulting action stream.
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream;
}

impl<F, S> Epic<S> for F
where
    F: Fn(ActionStream, Option<S>) -> EffectStream + Send + Sync + 'static,
{
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream {
        (self)(actions, store)
    }
}

/// The body of an effect.
///
/// Receives the payloads of its start action and returns the actions to
/// emit. Emitted types are unqualified; the surrounding epic retags them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `EffectHandler` for store `{S}`",
    label = "missing `EffectHandler` implementation",
    note = "Handlers must implement `handle`, or be a closure `Fn(PayloadStream, Option<S>) -> EffectStream`."
)]
pub trait EffectHandler<S>: Send + Sync + 'static {
    /// Turn start-action payloads into emitted actions.
    fn handle(&self, payloads: PayloadStream, store: Option<S>) -> EffectStream;
}

impl<F, S> EffectHandler<S> for F
where
    F: Fn(PayloadStream, Option<S>) -> EffectStream + Send + Sync + 'static,
{
    fn handle(&self, payloads: PayloadStream, store: Option<S>) -> EffectStream {
        (self)(payloads, store)
    }
}
