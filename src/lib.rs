//! # datawedge
//!
//! A Rust client library for the DataWedge scanner configuration intent API.
//!
//! Commands are broadcast as intents carrying string and bundle payloads.
//! A command can optionally ask for a result, which arrives as a single
//! reply intent and is handed to a listener.
//!
//! ## Features
//!
//! - Async/await based API using Tokio
//! - Pluggable transport for the platform broadcast mechanism
//! - Typed builders for plugin and profile configuration
//! - Single-shot result receivers with last-writer-wins listener registration
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use datawedge::{DataWedge, DcpConfig, LastResult, LocalBroadcast, ProfileConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), datawedge::Error> {
//!     let client = DataWedge::local(LocalBroadcast::default());
//!
//!     let dcp = DcpConfig::builder().enabled(true).highest_position(40).build();
//!     let profile = ProfileConfig::new("Scanning").plugin(dcp.plugin());
//!
//!     let pending = client
//!         .set_config(
//!             &profile,
//!             Some("configure-dcp".into()),
//!             Some(Arc::new(|result: LastResult| {
//!                 println!("success: {}", result.successful);
//!             })),
//!         )
//!         .await?;
//!
//!     pending.finished().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`protocol`] - Bundles, intents, command names and result parsing
//! - [`types`] - Configuration builders and parsed results
//! - [`transport`] - Transport trait and the in-process broadcast bus
//! - [`event`] - Result listeners, the listener slot and result receivers
//! - [`client`] - High-level [`DataWedge`] client

pub mod client;
pub mod error;
pub mod event;
pub mod protocol;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{DataWedge, Payload};
pub use error::{Error, Result};
pub use event::{
    CompleteResultListener, LastResultListener, ListenerSlot, PendingResult, ReceiverState,
    ResultListener,
};
pub use protocol::{
    Bundle, CommandIdentifier, Intent, IntentFilter, IntentType, ResultType, ScannerPluginCommand,
    SoftScanTrigger, Value,
};
pub use transport::{LocalBroadcast, LocalBroadcastConfig, Subscription, Transport};
pub use types::{
    AppAssociation, ButtonAnchorPosition, CommandResult, CompleteResult, ConfigMode, DcpConfig,
    DcpConfigBuilder, LastResult, LaunchMode, PluginConfig, ProfileConfig,
};
