//! Logging wrapper for epics.

use reffect_core::{ActionStream, EffectStream, Epic};

#[cfg(feature = "tracing")]
use futures::StreamExt;

/// An epic wrapper that logs every emitted action and fault.
///
/// With the `tracing` feature disabled it forwards to the inner epic
/// unchanged.
pub struct TracedEpic<E> {
    inner: E,
    name: &'static str,
}

impl<E> TracedEpic<E> {
    /// Wrap `inner`, labelling its log events with `name`.
    pub const fn new(inner: E, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The label attached to log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped epic.
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Clone> Clone for TracedEpic<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<S, E: Epic<S>> Epic<S> for TracedEpic<E> {
    #[cfg(feature = "tracing")]
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream {
        let name = self.name;
        tracing::debug!(epic = %name, "epic subscribed");
        self.inner
            .run(actions, store)
            .inspect(move |item| match item {
                Ok(action) => tracing::debug!(epic = %name, kind = %action.kind, "epic emitted action"),
                Err(error) => tracing::warn!(epic = %name, %error, "epic emitted error"),
            })
            .boxed()
    }

    #[cfg(not(feature = "tracing"))]
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream {
        self.inner.run(actions, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{StreamExt, stream};
    use reffect_core::{Action, BoxError};

    fn flaky(actions: ActionStream, _store: Option<()>) -> EffectStream {
        actions
            .map(|action| {
                if action.kind == "fail" {
                    Err::<Action, BoxError>("boom".into())
                } else {
                    Ok(action)
                }
            })
            .boxed()
    }

    #[tokio::test]
    async fn test_traced_epic_passthrough() {
        let epic = TracedEpic::new(flaky, "flaky");
        let input = stream::iter(vec![Action::new("ok"), Action::new("fail")]).boxed();

        let out: Vec<_> = epic.run(input, None::<()>).collect().await;

        assert_eq!(epic.name(), "flaky");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_ref().unwrap().kind, "ok");
        assert_eq!(out[1].as_ref().unwrap_err().to_string(), "boom");
    }
}
