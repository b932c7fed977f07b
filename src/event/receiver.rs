//! Single-shot result receiver.
//!
//! A receiver is armed with a [`Subscription`] and consumes exactly one
//! intent from it. The subscription is dropped before the intent is looked
//! at, so the receiver is unregistered whether or not the intent turns out
//! to be a result.

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::event::{ListenerSlot, ResultListener};
use crate::protocol::{Intent, RESULT_ACTION, parse_result};
use crate::transport::Subscription;

/// Lifecycle of a [`ResultReceiver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverState {
    /// Not registered.
    Idle,
    /// Registered and waiting for one intent.
    Armed,
    /// Unregistered and handling the intent it received.
    Fired,
}

/// Receiver that handles the first intent of a subscription.
#[derive(Debug)]
pub struct ResultReceiver {
    subscription: Subscription,
    slot: ListenerSlot,
    state: watch::Sender<ReceiverState>,
}

impl ResultReceiver {
    /// Creates an armed receiver.
    #[must_use]
    pub fn new(subscription: Subscription, slot: ListenerSlot) -> Self {
        let (state, _) = watch::channel(ReceiverState::Armed);
        Self {
            subscription,
            slot,
            state,
        }
    }

    /// Returns a watch on the receiver state.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<ReceiverState> {
        self.state.subscribe()
    }

    /// Waits for one intent and dispatches it.
    pub async fn run(self) {
        let Self {
            mut subscription,
            slot,
            state,
        } = self;

        let intent = subscription.next().await;
        subscription.unregister();

        let Some(intent) = intent else {
            tracing::debug!("result subscription closed before any intent arrived");
            state.send_replace(ReceiverState::Idle);
            return;
        };

        state.send_replace(ReceiverState::Fired);
        handle_intent(&intent, &slot).await;
        state.send_replace(ReceiverState::Idle);
    }

    /// Spawns the receiver on the runtime.
    #[must_use]
    pub fn arm(self, displaced: Option<ResultListener>) -> PendingResult {
        let state = self.state();
        let handle = tokio::spawn(self.run());
        PendingResult {
            handle,
            state,
            displaced,
        }
    }
}

/// Handles an intent delivered to a result receiver.
async fn handle_intent(intent: &Intent, slot: &ListenerSlot) {
    if intent.action() != Some(RESULT_ACTION) {
        tracing::warn!(
            "ignoring received intent that didn't have action: {}",
            RESULT_ACTION
        );
        return;
    }

    tracing::trace!("received result intent with {} extras", intent.extras.len());

    match parse_result(intent) {
        Some(result) => slot.dispatch(result).await,
        None => tracing::debug!("result intent carried neither a result list nor result info"),
    }
}

/// Handle to an armed result receiver.
#[derive(Debug)]
pub struct PendingResult {
    handle: JoinHandle<()>,
    state: watch::Receiver<ReceiverState>,
    displaced: Option<ResultListener>,
}

impl PendingResult {
    /// Returns the current receiver state.
    #[must_use]
    pub fn state(&self) -> ReceiverState {
        *self.state.borrow()
    }

    /// Returns true while the receiver waits for its intent.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state() == ReceiverState::Armed
    }

    /// Returns the listener this request replaced, if any.
    #[must_use]
    pub const fn displaced(&self) -> Option<&ResultListener> {
        self.displaced.as_ref()
    }

    /// Takes the listener this request replaced, if any.
    pub fn take_displaced(&mut self) -> Option<ResultListener> {
        self.displaced.take()
    }

    /// Waits until the receiver has handled its intent or its subscription
    /// closed.
    pub async fn finished(self) -> Result<()> {
        self.handle.await?;
        Ok(())
    }

    pub(crate) fn abort(&self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;
    use crate::protocol::{Bundle, RESULT_INFO_KEY, RESULT_KEY};
    use crate::types::LastResult;

    fn receiver_with_channel(slot: &ListenerSlot) -> (ResultReceiver, mpsc::Sender<Intent>) {
        let (tx, rx) = mpsc::channel(4);
        (ResultReceiver::new(Subscription::new(rx), slot.clone()), tx)
    }

    fn success_intent() -> Intent {
        Intent::new(RESULT_ACTION)
            .extra(RESULT_KEY, "SUCCESS")
            .extra(RESULT_INFO_KEY, Bundle::new())
    }

    #[tokio::test]
    async fn test_fires_once_and_unregisters() {
        let slot = ListenerSlot::new();
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        slot.replace(Some(ResultListener::Last(Arc::new(move |r: LastResult| {
            let _ = result_tx.send(r.successful);
        }))))
        .await;

        let (receiver, tx) = receiver_with_channel(&slot);
        let pending = receiver.arm(None);
        assert!(pending.is_armed());

        tx.send(success_intent()).await.unwrap();
        pending.finished().await.unwrap();

        assert_eq!(result_rx.recv().await, Some(true));
        assert!(tx.is_closed());
        assert!(tx.send(success_intent()).await.is_err());
    }

    #[tokio::test]
    async fn test_mismatched_action_unregisters_without_dispatch() {
        let slot = ListenerSlot::new();
        slot.replace(Some(ResultListener::Last(Arc::new(|_: LastResult| {
            panic!("listener must not be invoked");
        }))))
        .await;

        let (receiver, tx) = receiver_with_channel(&slot);
        let mut state = receiver.state();
        let pending = receiver.arm(None);

        tx.send(Intent::new("com.example.OTHER")).await.unwrap();
        tokio::time::timeout(Duration::from_secs(1), pending.finished())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(*state.borrow_and_update(), ReceiverState::Idle);
        assert!(tx.is_closed());
        assert!(slot.is_pending().await);
    }

    #[tokio::test]
    async fn test_closed_subscription_goes_idle() {
        let slot = ListenerSlot::new();
        let (receiver, tx) = receiver_with_channel(&slot);
        let mut state = receiver.state();
        let pending = receiver.arm(None);

        drop(tx);
        pending.finished().await.unwrap();

        assert_eq!(*state.borrow_and_update(), ReceiverState::Idle);
    }
}
