//! Fan-out of the global action stream to several epics.

use futures::{
    StreamExt,
    channel::mpsc,
    future,
    stream::{self, select_all},
};
use reffect_core::{Action, ActionStream, BoxError, EffectStream, Epic};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A multicast source of actions.
///
/// Every [`subscribe`](Self::subscribe) call yields a stream that receives
/// each action dispatched afterwards. Streams end once the hub is
/// [closed](Self::close).
#[derive(Default)]
pub struct ActionHub {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Action>>>,
}

impl ActionHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new action stream.
    pub fn subscribe(&self) -> ActionStream {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers().push(tx);
        rx.boxed()
    }

    /// Deliver `action` to every live subscriber, returning how many received it.
    ///
    /// Subscribers whose stream has been dropped are forgotten.
    pub fn dispatch(&self, action: Action) -> usize {
        let mut subscribers = self.subscribers();
        subscribers.retain(|tx| tx.unbounded_send(action.clone()).is_ok());
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %action.kind, delivered = subscribers.len(), "action dispatched");
        subscribers.len()
    }

    /// End every subscribed stream.
    pub fn close(&self) {
        self.subscribers().clear();
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<Action>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ActionHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Subscribe each epic to `hub` and merge their outputs.
///
/// Subscription happens before this function returns, so actions dispatched
/// afterwards reach every epic.
pub fn combine_epics<S, E>(epics: &[E], hub: &ActionHub, store: Option<S>) -> EffectStream
where
    S: Clone + Send + 'static,
    E: Epic<S>,
{
    select_all(
        epics
            .iter()
            .map(|epic| epic.run(hub.subscribe(), store.clone())),
    )
    .boxed()
}

/// Several epics behaving as one.
///
/// The incoming stream is multicast to every inner epic; the combined output
/// ends once the input ends and every inner epic has finished.
pub struct CombinedEpic<E> {
    epics: Vec<E>,
}

impl<E> CombinedEpic<E> {
    /// Combine `epics`.
    pub fn new(epics: Vec<E>) -> Self {
        Self { epics }
    }

    /// The inner epics, in order.
    pub fn epics(&self) -> &[E] {
        &self.epics
    }
}

impl<S, E> Epic<S> for CombinedEpic<E>
where
    S: Clone + Send + 'static,
    E: Epic<S>,
{
    fn run(&self, actions: ActionStream, store: Option<S>) -> EffectStream {
        let hub = Arc::new(ActionHub::new());
        let outputs = combine_epics(&self.epics, &hub, store);

        let feed = actions
            .map(Some)
            .chain(stream::once(future::ready(None)))
            .filter_map(move |action| {
                match action {
                    Some(action) => {
                        hub.dispatch(action);
                    }
                    None => hub.close(),
                }
                future::ready(None::<Result<Action, BoxError>>)
            });

        stream::select(feed, outputs).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(kind: &'static str) -> impl Fn(ActionStream, Option<()>) -> EffectStream {
        move |actions: ActionStream, _store: Option<()>| -> EffectStream {
            actions
                .map(move |action| Ok(action.with_kind(kind)))
                .boxed()
        }
    }

    #[tokio::test]
    async fn test_hub_multicasts() {
        let hub = ActionHub::new();
        let first = hub.subscribe();
        let second = hub.subscribe();

        assert_eq!(hub.dispatch(Action::new("ping")), 2);
        hub.close();

        assert_eq!(first.collect::<Vec<_>>().await, vec![Action::new("ping")]);
        assert_eq!(second.collect::<Vec<_>>().await, vec![Action::new("ping")]);
    }

    #[test]
    fn test_dropped_subscribers_are_forgotten() {
        let hub = ActionHub::new();
        let kept = hub.subscribe();
        drop(hub.subscribe());

        assert_eq!(hub.dispatch(Action::new("ping")), 1);
        assert_eq!(hub.subscriber_count(), 1);
        drop(kept);
    }

    #[tokio::test]
    async fn test_combine_epics_fans_out() {
        let hub = ActionHub::new();
        let epics = vec![tag("a"), tag("b")];
        let merged = combine_epics(&epics, &hub, None::<()>);

        hub.dispatch(Action::new("ping"));
        hub.close();

        let mut kinds: Vec<_> = merged.map(|item| item.unwrap().kind).collect().await;
        kinds.sort();
        assert_eq!(kinds, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_combined_epic_ends_with_input() {
        let combined = CombinedEpic::new(vec![tag("a"), tag("b")]);
        let input = stream::iter(vec![Action::new("x"), Action::new("y")]).boxed();

        let out: Vec<_> = combined.run(input, None::<()>).collect().await;

        assert_eq!(out.len(), 4);
    }
}
