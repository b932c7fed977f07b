//! In-process broadcast transport.
//!
//! Every intent sent through a [`LocalBroadcast`] is delivered to each
//! registered receiver whose filter matches, including receivers registered
//! through other clones of the same bus. Both the client and a simulated
//! service can therefore share one bus.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::error::{Error, Result};
use crate::protocol::{Intent, IntentFilter};
use crate::transport::{Subscription, Transport};

/// Default per-receiver queue capacity.
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration for [`LocalBroadcast`].
#[derive(Debug, Clone)]
pub struct LocalBroadcastConfig {
    /// Bus name, used in log output.
    pub name: String,
    /// Intents queued per receiver before new ones are dropped.
    pub capacity: usize,
}

impl LocalBroadcastConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the per-receiver queue capacity.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for LocalBroadcastConfig {
    fn default() -> Self {
        Self::new("local")
    }
}

#[derive(Debug)]
struct Registration {
    filter: IntentFilter,
    sender: mpsc::Sender<Intent>,
}

#[derive(Debug, Default)]
struct Registry {
    receivers: Vec<Registration>,
    closed: bool,
}

impl Registry {
    fn prune(&mut self) {
        self.receivers.retain(|r| !r.sender.is_closed());
    }
}

/// In-process broadcast bus.
#[derive(Debug, Clone)]
pub struct LocalBroadcast {
    config: Arc<LocalBroadcastConfig>,
    registry: Arc<Mutex<Registry>>,
}

impl LocalBroadcast {
    /// Creates a bus with the given configuration.
    #[must_use]
    pub fn new(config: LocalBroadcastConfig) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Returns the bus configuration.
    #[must_use]
    pub fn config(&self) -> &LocalBroadcastConfig {
        &self.config
    }

    /// Returns the number of live receivers.
    pub async fn receiver_count(&self) -> usize {
        let mut registry = self.registry.lock().await;
        registry.prune();
        registry.receivers.len()
    }

    /// Closes the bus.
    ///
    /// All registrations are dropped, so pending subscriptions end, and
    /// later sends and subscriptions fail.
    pub async fn close(&self) {
        let mut registry = self.registry.lock().await;
        registry.closed = true;
        registry.receivers.clear();
        tracing::debug!("{}: bus closed", self.config.name);
    }

    /// Delivers an intent to every matching receiver.
    ///
    /// Returns the number of receivers the intent was queued for.
    pub async fn broadcast(&self, intent: Intent) -> Result<usize> {
        let mut registry = self.registry.lock().await;
        if registry.closed {
            return Err(self.closed_error());
        }
        registry.prune();

        tracing::trace!(
            "{}: broadcasting {:?} to {} receivers",
            self.config.name,
            intent.action(),
            registry.receivers.len()
        );

        let mut delivered = 0;
        for registration in &registry.receivers {
            if !registration.filter.matches(&intent) {
                continue;
            }
            match registration.sender.try_send(intent.clone()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!("{}: receiver queue full, dropping intent", self.config.name);
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {}
            }
        }
        Ok(delivered)
    }

    /// Registers a receiver.
    pub async fn register(&self, filter: IntentFilter) -> Result<Subscription> {
        let mut registry = self.registry.lock().await;
        if registry.closed {
            return Err(self.closed_error());
        }

        let (sender, receiver) = mpsc::channel(self.config.capacity.max(1));
        tracing::debug!("{}: registering receiver for {:?}", self.config.name, filter.actions);
        registry.receivers.push(Registration { filter, sender });
        Ok(Subscription::new(receiver))
    }

    fn closed_error(&self) -> Error {
        Error::Transport {
            message: format!("{} bus is closed", self.config.name),
        }
    }
}

impl Default for LocalBroadcast {
    fn default() -> Self {
        Self::new(LocalBroadcastConfig::default())
    }
}

impl Transport for LocalBroadcast {
    fn send(&mut self, intent: Intent) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.broadcast(intent).await?;
            Ok(())
        })
    }

    fn subscribe(
        &mut self,
        filter: IntentFilter,
    ) -> Pin<Box<dyn Future<Output = Result<Subscription>> + Send + '_>> {
        Box::pin(async move { self.register(filter).await })
    }
}
