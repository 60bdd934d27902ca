//! # reffect-core
//!
//! Core types and traits for the Reffect effect wiring library.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that declares effects or consumes their artifacts without needing the
//! builder from `reffect-std`.
//!
//! # Building Blocks
//!
//! ## Actions ([`Action`])
//!
//! JSON-shaped records flowing through the global action stream: a `type`,
//! an optional `payload` and `meta`, and an `error` flag. An action can be
//! marked global (see [`Action::global`]) so that effects re-emit it without
//! rewriting its type.
//!
//! ## Namespacing ([`qualify`], [`scoped_type`], [`RelabelPolicy`])
//!
//! Effect start actions are typed `namespace/method`. Actions emitted by an
//! effect are retagged `namespace/method/key` so they reach the reducer
//! registered under that key.
//!
//! ## Action Creators ([`ActionCreator`])
//!
//! Factories for start actions, with optional payload and meta creators.
//!
//! ## Streams ([`Epic`], [`EffectHandler`])
//!
//! An [`Epic`] consumes the global action stream and yields further actions.
//! An [`EffectHandler`] is the user-written half: it only ever sees the
//! payloads of its own start action.
//!
//! ## Reducers ([`Reducer`])
//!
//! Pure `(state, action) -> state` functions keyed by scoped action type.
//!
//! # Error Types
//!
//! - [`ReffectError`] - Registration errors
//! - [`BoxError`] - Faults raised by handlers, forwarded untouched

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod action_type;
mod creator;
mod epic;
mod error;
mod reducer;

// Re-exports
pub use action::Action;
pub use action_type::{
    ROUTER_ACTION_PREFIX, RelabelPolicy, SEPARATOR, Segment, qualify, scoped_type,
    validate_segment,
};
pub use creator::{
    ActionCreator, META_CREATOR_KEY, MetaCreator, PAYLOAD_CREATOR_KEY, PayloadCreator,
};
pub use epic::{ActionStream, EffectHandler, EffectStream, Epic, PayloadStream};
pub use error::{BoxError, ReffectError};
pub use reducer::{BoxReducer, Reducer};
