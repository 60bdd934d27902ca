//! # reffect-std
//!
//! Standard implementations for the Reffect effect wiring library.
//!
//! This crate provides:
//! - **Effects**: [`EffectEpic`], [`EffectOptions`]
//! - **Modules**: [`EffectModuleBuilder`], [`EffectModule`], [`DispatchMap`]
//! - **Reducer registration**: [`ReducerRegistry`]
//! - **Configuration**: [`ModuleConfig`], [`DuplicateReducerPolicy`]
//! - **Combination**: [`ActionHub`], [`combine_epics`]
//! - **Instrumentation**: [`TracedEpic`]
//!
//! [`EffectEpic`]: effect::EffectEpic
//! [`EffectOptions`]: effect::EffectOptions
//! [`EffectModuleBuilder`]: module::EffectModuleBuilder
//! [`EffectModule`]: module::EffectModule
//! [`DispatchMap`]: module::DispatchMap
//! [`ReducerRegistry`]: registry::ReducerRegistry
//! [`ModuleConfig`]: config::ModuleConfig
//! [`DuplicateReducerPolicy`]: config::DuplicateReducerPolicy
//! [`ActionHub`]: combine::ActionHub
//! [`combine_epics`]: combine::combine_epics
//! [`TracedEpic`]: instrument::TracedEpic

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use reffect_core;

// Modules
pub mod combine;
pub mod config;
pub mod effect;
pub mod instrument;
pub mod module;
pub mod registry;
pub mod testing;
