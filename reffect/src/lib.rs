//! # reffect - Namespaced Effect Wiring
//!
//! `reffect` turns plain stream handlers into registered **effects**. An
//! effect listens for one namespaced start action, runs arbitrary stream
//! logic over that action's payloads, and re-emits its results under
//! scope-qualified types so they reach the reducers the effect declared.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reffect::prelude::*;
//! use serde_json::json;
//!
//! fn add(payloads: PayloadStream, _store: Option<()>) -> EffectStream {
//!     payloads
//!         .map(|payload| Ok(Action::new("success").with_payload(payload)))
//!         .boxed()
//! }
//!
//! let mut reducers = ReducerRegistry::new();
//! let module = EffectModuleBuilder::<()>::new()
//!     .effect(
//!         "add",
//!         EffectOptions::new().reducer("success", |_state, action: &Action| action.payload.clone()),
//!         add,
//!     )
//!     .finalize("Todo", &mut reducers)?;
//!
//! // `Todo/add` starts the effect; its `success` lands on `Todo/add/success`.
//! let start = module.action("add").unwrap().create(json!({ "text": "x" }));
//! assert!(reducers.contains_key("Todo/add/success"));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Actions
pub use reffect_core::{Action, ActionCreator, MetaCreator, PayloadCreator};
pub use reffect_core::{META_CREATOR_KEY, PAYLOAD_CREATOR_KEY};

// Namespacing
pub use reffect_core::{
    ROUTER_ACTION_PREFIX, RelabelPolicy, SEPARATOR, Segment, qualify, scoped_type,
    validate_segment,
};

// Streams
pub use reffect_core::{ActionStream, EffectHandler, EffectStream, Epic, PayloadStream};

// Reducers
pub use reffect_core::{BoxReducer, Reducer};

// Error types
pub use reffect_core::{BoxError, ReffectError};

// Effects and modules
pub use reffect_std::{
    combine::{ActionHub, CombinedEpic, combine_epics},
    config::{DuplicateReducerPolicy, ModuleConfig},
    effect::{EffectEpic, EffectOptions},
    instrument::TracedEpic,
    module::{DispatchMap, EffectModule, EffectModuleBuilder},
    registry::ReducerRegistry,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use reffect_std::testing::*;
}

/// Prelude module - common imports for Reffect.
///
/// # Usage
///
/// ```rust,ignore
/// use reffect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, ActionCreator, ActionHub, ActionStream, BoxError, EffectHandler, EffectModule,
        EffectModuleBuilder, EffectOptions, EffectStream, Epic, ModuleConfig, PayloadStream,
        Reducer, ReducerRegistry, ReffectError,
    };
    pub use futures::StreamExt;
}
