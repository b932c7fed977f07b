//! Transport layer for DataWedge communication.
//!
//! This module provides the abstraction over the platform broadcast
//! mechanism. [`LocalBroadcast`] is an in-process implementation.

pub mod local;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::protocol::{Intent, IntentFilter};

/// Trait for transport implementations.
pub trait Transport: Send + Sync {
    /// Broadcasts an intent.
    fn send(&mut self, intent: Intent) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Registers a receiver for intents matching `filter`.
    ///
    /// The receiver stays registered until the returned [`Subscription`]
    /// is dropped.
    fn subscribe(
        &mut self,
        filter: IntentFilter,
    ) -> Pin<Box<dyn Future<Output = Result<Subscription>> + Send + '_>>;
}

/// A registered receiver.
///
/// Dropping the subscription unregisters it.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<Intent>,
}

impl Subscription {
    /// Wraps the receiving half of a delivery channel.
    #[must_use]
    pub const fn new(receiver: mpsc::Receiver<Intent>) -> Self {
        Self { receiver }
    }

    /// Receives the next intent.
    ///
    /// Returns `None` once the transport has dropped the registration.
    pub async fn recv(&mut self) -> Option<Intent> {
        self.receiver.recv().await
    }

    /// Unregisters the receiver.
    pub fn unregister(self) {
        drop(self);
    }
}

impl Stream for Subscription {
    type Item = Intent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Intent>> {
        self.receiver.poll_recv(cx)
    }
}

pub use local::{LocalBroadcast, LocalBroadcastConfig};
