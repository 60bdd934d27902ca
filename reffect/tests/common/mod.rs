#![allow(dead_code)]

use futures::{StreamExt, stream};
use reffect::{Action, ActionHub, BoxError, EffectModule, EffectStream, PayloadStream};
use serde_json::Value;

// ============================================================================
// Test Handlers
// ============================================================================

/// Emits `success` carrying each payload.
pub fn echo(payloads: PayloadStream, _store: Option<()>) -> EffectStream {
    payloads
        .map(|payload| Ok(Action::new("success").with_payload(payload)))
        .boxed()
}

/// Emits a router navigation and a global action for each payload.
pub fn navigate(payloads: PayloadStream, _store: Option<()>) -> EffectStream {
    payloads
        .flat_map(|payload| {
            stream::iter(vec![
                Ok(Action::new("@@router/LOCATION_CHANGE").with_payload(payload)),
                Ok(Action::new("Session/expired").global()),
                Ok(Action::new("done")),
            ])
        })
        .boxed()
}

/// Emits `success` for objects and fails on anything else.
pub fn strict(payloads: PayloadStream, _store: Option<()>) -> EffectStream {
    payloads
        .map(|payload| {
            if payload.is_object() {
                Ok(Action::new("success").with_payload(payload))
            } else {
                Err::<Action, BoxError>(format!("expected an object, got {payload}").into())
            }
        })
        .boxed()
}

/// Emits nothing.
pub fn noop(_payloads: PayloadStream, _store: Option<()>) -> EffectStream {
    stream::empty().boxed()
}

pub fn keep(state: Value, _action: &Action) -> Value {
    state
}

// ============================================================================
// Drivers
// ============================================================================

/// Feed `actions` through every epic of `module` and collect the output.
pub async fn drive(
    module: &EffectModule<()>,
    actions: Vec<Action>,
) -> Vec<Result<Action, BoxError>> {
    let hub = ActionHub::new();
    let output = module.run(&hub, None);
    for action in actions {
        hub.dispatch(action);
    }
    hub.close();
    output.collect().await
}

/// Like [`drive`], but panics on any fault.
pub async fn drive_ok(module: &EffectModule<()>, actions: Vec<Action>) -> Vec<Action> {
    drive(module, actions)
        .await
        .into_iter()
        .map(|item| item.expect("effect failed"))
        .collect()
}
