//! Main [`DataWedge`] client implementation.
//!
//! This module provides the high-level [`DataWedge`] client that combines
//! a transport, the listener slot and result receivers into one interface.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::event::{
    CompleteResultListener, LastResultListener, ListenerSlot, PendingResult, ResultListener,
    ResultReceiver,
};
use crate::protocol::{
    Bundle, COMMAND_IDENTIFIER_KEY, CommandIdentifier, DW_ACTION, Intent, IntentType, ResultType,
    SEND_RESULT_KEY, ScannerPluginCommand, SoftScanTrigger, result_filter,
};
use crate::transport::{LocalBroadcast, Transport};
use crate::types::ProfileConfig;

/// Command payload: a structured bundle or a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Structured payload.
    Bundle(Bundle),
    /// Opaque string payload.
    String(String),
}

impl From<Bundle> for Payload {
    fn from(bundle: Bundle) -> Self {
        Self::Bundle(bundle)
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Builds a command intent.
///
/// Bundle payloads without a requested result are marked
/// [`ResultType::None`]. String payloads carry no result metadata unless a
/// result is requested.
#[must_use]
pub fn command_intent(
    intent_type: IntentType,
    payload: Payload,
    result: Option<ResultType>,
    identifier: Option<&CommandIdentifier>,
) -> Intent {
    let mut intent = Intent::new(DW_ACTION);
    let result = match payload {
        Payload::Bundle(bundle) => {
            intent.extras.insert(intent_type.extra_key(), bundle);
            Some(result.unwrap_or_default())
        }
        Payload::String(value) => {
            intent.extras.insert(intent_type.extra_key(), value);
            result
        }
    };

    if let Some(result) = result {
        intent.extras.insert(SEND_RESULT_KEY, result.as_str());
    }
    if let Some(identifier) = identifier {
        intent.extras.insert(COMMAND_IDENTIFIER_KEY, identifier.as_str());
    }
    intent
}

/// Client for sending commands to DataWedge.
pub struct DataWedge<T> {
    transport: Arc<Mutex<T>>,
    slot: ListenerSlot,
}

impl DataWedge<LocalBroadcast> {
    /// Creates a client on an in-process broadcast bus.
    #[must_use]
    pub fn local(bus: LocalBroadcast) -> Self {
        Self::new(bus)
    }
}

impl<T: Transport + 'static> DataWedge<T> {
    /// Creates a client with its own listener slot.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_slot(transport, ListenerSlot::new())
    }

    /// Creates a client that registers listeners in `slot`.
    #[must_use]
    pub fn with_slot(transport: T, slot: ListenerSlot) -> Self {
        Self {
            transport: Arc::new(Mutex::new(transport)),
            slot,
        }
    }

    /// Returns the listener slot.
    #[must_use]
    pub const fn slot(&self) -> &ListenerSlot {
        &self.slot
    }

    /// Sends a command without waiting for a result.
    pub async fn send(&self, intent_type: IntentType, payload: impl Into<Payload>) -> Result<()> {
        let intent = command_intent(intent_type, payload.into(), None, None);
        tracing::debug!("sending {intent_type}");

        let mut transport = self.transport.lock().await;
        transport.send(intent).await
    }

    /// Sends a command and reports its final outcome to `listener`.
    ///
    /// Any listener still pending is replaced and returned through
    /// [`PendingResult::displaced`]. If the command cannot be sent, the
    /// previous listener is put back. There is no timeout: the receiver stays
    /// armed until a result intent arrives.
    pub async fn send_with_last_result(
        &self,
        intent_type: IntentType,
        payload: impl Into<Payload>,
        identifier: Option<CommandIdentifier>,
        listener: Option<Arc<dyn LastResultListener>>,
    ) -> Result<PendingResult> {
        self.send_with_result(
            intent_type,
            payload.into(),
            ResultType::LastResult,
            identifier,
            listener.map(ResultListener::Last),
        )
        .await
    }

    /// Sends a command and reports every per-item outcome to `listener`.
    ///
    /// Replacement and timeout behave as in
    /// [`send_with_last_result`](Self::send_with_last_result).
    pub async fn send_with_complete_result(
        &self,
        intent_type: IntentType,
        payload: impl Into<Payload>,
        identifier: Option<CommandIdentifier>,
        listener: Option<Arc<dyn CompleteResultListener>>,
    ) -> Result<PendingResult> {
        self.send_with_result(
            intent_type,
            payload.into(),
            ResultType::CompleteResult,
            identifier,
            listener.map(ResultListener::Complete),
        )
        .await
    }

    async fn send_with_result(
        &self,
        intent_type: IntentType,
        payload: Payload,
        result: ResultType,
        identifier: Option<CommandIdentifier>,
        listener: Option<ResultListener>,
    ) -> Result<PendingResult> {
        let mut transport = self.transport.lock().await;

        // Register before sending so a fast reply is not missed.
        let subscription = transport.subscribe(result_filter()).await?;
        let displaced = self.slot.replace(listener).await;
        let mut pending = ResultReceiver::new(subscription, self.slot.clone()).arm(displaced);

        let intent = command_intent(intent_type, payload, Some(result), identifier.as_ref());
        tracing::debug!("sending {intent_type} with {result}");

        if let Err(e) = transport.send(intent).await {
            pending.abort();
            self.slot.replace(pending.take_displaced()).await;
            return Err(e);
        }
        Ok(pending)
    }

    // ==================== Command Helpers ====================

    /// Applies a profile configuration and reports the outcome to `listener`.
    pub async fn set_config(
        &self,
        profile: &ProfileConfig,
        identifier: Option<CommandIdentifier>,
        listener: Option<Arc<dyn LastResultListener>>,
    ) -> Result<PendingResult> {
        self.send_with_last_result(IntentType::SetConfig, profile.to_bundle(), identifier, listener)
            .await
    }

    /// Switches to a named profile.
    pub async fn switch_to_profile(&self, profile_name: &str) -> Result<()> {
        self.send(IntentType::SwitchToProfile, profile_name).await
    }

    /// Triggers a software scan.
    pub async fn soft_scan_trigger(&self, trigger: SoftScanTrigger) -> Result<()> {
        self.send(IntentType::SoftScanTrigger, trigger.as_str()).await
    }

    /// Enables, disables, suspends or resumes the scanner input plugin.
    pub async fn scanner_input_plugin(&self, command: ScannerPluginCommand) -> Result<()> {
        self.send(IntentType::ScannerInputPlugin, command.as_str()).await
    }
}
