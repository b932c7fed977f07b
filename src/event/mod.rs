//! Result listeners and their registration slot.
//!
//! A client holds at most one pending listener. Registering a new one
//! replaces the old occupant, which is handed back to the caller instead of
//! being notified. The slot is emptied when a result intent is consumed.

pub mod receiver;

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::{CommandResult, CompleteResult, LastResult};

pub use receiver::{PendingResult, ReceiverState, ResultReceiver};

/// Receives the outcome of a command sent with a last-result request.
pub trait LastResultListener: Send + Sync {
    /// Called once with the parsed result.
    fn on_result(&self, result: LastResult);
}

impl<F> LastResultListener for F
where
    F: Fn(LastResult) + Send + Sync,
{
    fn on_result(&self, result: LastResult) {
        self(result);
    }
}

/// Receives the outcome of a command sent with a complete-result request.
pub trait CompleteResultListener: Send + Sync {
    /// Called once with the parsed result list.
    fn on_result(&self, result: CompleteResult);
}

impl<F> CompleteResultListener for F
where
    F: Fn(CompleteResult) + Send + Sync,
{
    fn on_result(&self, result: CompleteResult) {
        self(result);
    }
}

/// A registered listener of either kind.
#[derive(Clone)]
pub enum ResultListener {
    /// Expects a [`LastResult`].
    Last(Arc<dyn LastResultListener>),
    /// Expects a [`CompleteResult`].
    Complete(Arc<dyn CompleteResultListener>),
}

impl ResultListener {
    /// Hands a result to the listener.
    ///
    /// Returns the result back if it is of the wrong kind for this listener.
    pub fn deliver(&self, result: CommandResult) -> Option<CommandResult> {
        match (self, result) {
            (Self::Last(listener), CommandResult::Last(result)) => {
                listener.on_result(result);
                None
            }
            (Self::Complete(listener), CommandResult::Complete(result)) => {
                listener.on_result(result);
                None
            }
            (_, result) => Some(result),
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Last(_) => "last",
            Self::Complete(_) => "complete",
        }
    }
}

impl fmt::Debug for ResultListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultListener::{}", self.kind())
    }
}

/// Single-slot listener registration.
///
/// Clones share the same slot, so one slot can be injected into several
/// clients.
#[derive(Debug, Clone, Default)]
pub struct ListenerSlot {
    inner: Arc<Mutex<Option<ResultListener>>>,
}

impl ListenerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `listener`, returning the previous occupant.
    ///
    /// Passing `None` empties the slot.
    pub async fn replace(&self, listener: Option<ResultListener>) -> Option<ResultListener> {
        let mut slot = self.inner.lock().await;
        let previous = std::mem::replace(&mut *slot, listener);
        if let Some(ref previous) = previous {
            tracing::debug!("replacing pending {} listener", previous.kind());
        }
        previous
    }

    /// Removes and returns the pending listener.
    pub async fn take(&self) -> Option<ResultListener> {
        self.inner.lock().await.take()
    }

    /// Returns true if a listener is pending.
    pub async fn is_pending(&self) -> bool {
        self.inner.lock().await.is_some()
    }

    /// Consumes the pending listener and hands it `result`.
    ///
    /// The slot stays locked until the listener returns, so a concurrent
    /// [`replace`](Self::replace) lands either before the take or after the
    /// delivery. Results without a listener, or for a listener of the other
    /// kind, are logged and dropped.
    pub async fn dispatch(&self, result: CommandResult) {
        let mut slot = self.inner.lock().await;
        let Some(listener) = slot.take() else {
            tracing::debug!(
                "no listener registered, dropping result for {:?}",
                result.command()
            );
            return;
        };

        if let Some(result) = listener.deliver(result) {
            tracing::warn!(
                "{} listener cannot take result for {:?}, dropping",
                listener.kind(),
                result.command()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;

    fn last(successful: bool) -> CommandResult {
        CommandResult::Last(LastResult {
            successful,
            info: None,
            display: String::new(),
            command: None,
            profile_name: None,
        })
    }

    fn complete() -> CommandResult {
        CommandResult::Complete(CompleteResult {
            results: Vec::new(),
            display: String::new(),
            command: None,
            profile_name: None,
        })
    }

    fn counting_last(counter: &Arc<AtomicUsize>) -> ResultListener {
        let counter = Arc::clone(counter);
        ResultListener::Last(Arc::new(move |_: LastResult| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[tokio::test]
    async fn test_replace_returns_previous() {
        let slot = ListenerSlot::new();
        let counter = Arc::new(AtomicUsize::new(0));

        assert!(slot.replace(Some(counting_last(&counter))).await.is_none());
        let previous = slot.replace(Some(counting_last(&counter))).await;

        assert!(matches!(previous, Some(ResultListener::Last(_))));
        assert!(slot.is_pending().await);
    }

    #[tokio::test]
    async fn test_dispatch_consumes_listener() {
        let slot = ListenerSlot::new();
        let counter = Arc::new(AtomicUsize::new(0));
        slot.replace(Some(counting_last(&counter))).await;

        slot.dispatch(last(true)).await;
        slot.dispatch(last(true)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!slot.is_pending().await);
    }

    #[tokio::test]
    async fn test_dispatch_wrong_kind_is_dropped() {
        let slot = ListenerSlot::new();
        let counter = Arc::new(AtomicUsize::new(0));
        slot.replace(Some(counting_last(&counter))).await;

        slot.dispatch(complete()).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!slot.is_pending().await);
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let slot = ListenerSlot::new();
        let shared = slot.clone();
        let counter = Arc::new(AtomicUsize::new(0));

        shared.replace(Some(counting_last(&counter))).await;
        assert!(slot.is_pending().await);
        assert!(slot.replace(None).await.is_some());
        assert!(!shared.is_pending().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_replace_waits_for_running_delivery() {
        let slot = ListenerSlot::new();
        let delivered = Arc::new(AtomicBool::new(false));
        let (started_tx, started_rx) = oneshot::channel();
        let started_tx = std::sync::Mutex::new(Some(started_tx));

        let done = Arc::clone(&delivered);
        slot.replace(Some(ResultListener::Last(Arc::new(move |_: LastResult| {
            if let Some(tx) = started_tx.lock().unwrap().take() {
                let _ = tx.send(());
            }
            std::thread::sleep(Duration::from_millis(50));
            done.store(true, Ordering::SeqCst);
        }))))
        .await;

        let dispatcher = slot.clone();
        let dispatch = tokio::spawn(async move { dispatcher.dispatch(last(true)).await });
        started_rx.await.unwrap();

        let counter = Arc::new(AtomicUsize::new(0));
        let previous = slot.replace(Some(counting_last(&counter))).await;

        assert!(previous.is_none());
        assert!(delivered.load(Ordering::SeqCst));
        assert!(slot.is_pending().await);
        dispatch.await.unwrap();
    }

    #[test]
    fn test_listener_debug() {
        let listener = ResultListener::Complete(Arc::new(|_: CompleteResult| {}));
        assert_eq!(format!("{listener:?}"), "ResultListener::complete");
    }
}
