//! Data types for DataWedge configuration and results.
//!
//! This module contains:
//! - Plugin configurations (DCP)
//! - Profile configurations
//! - Parsed command results

pub mod dcp;
pub mod profile;
pub mod result;

pub use dcp::{ButtonAnchorPosition, DcpConfig, DcpConfigBuilder, LaunchMode};
pub use profile::{AppAssociation, ConfigMode, PluginConfig, ProfileConfig};
pub use result::{CommandResult, CompleteResult, LastResult};
