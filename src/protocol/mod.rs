//! Protocol definitions for the DataWedge intent API.
//!
//! This module contains the wire-level pieces:
//! - Bundles and intents
//! - Command and result type names
//! - Result intent parsing
//!
//! The string constants below must match the service byte for byte.

pub mod bundle;
pub mod command;
pub mod intent;
pub mod parser;

pub use bundle::{Bundle, Value, bool_str};
pub use command::{
    CommandIdentifier, IntentType, ResultType, ScannerPluginCommand, SoftScanTrigger,
};
pub use intent::{Intent, IntentFilter};
pub use parser::{format_result_info, format_result_list, parse_result};

// Outbound
/// Action of every command intent.
pub const DW_ACTION: &str = "com.symbol.datawedge.api.ACTION";
/// Prefix of the extras key holding the command payload.
pub const INTENT_TYPE_KEY_PREFIX: &str = "com.symbol.datawedge.api.";
/// Extras key of the requested [`ResultType`].
pub const SEND_RESULT_KEY: &str = "SEND_RESULT";
/// Extras key of the [`CommandIdentifier`].
pub const COMMAND_IDENTIFIER_KEY: &str = "COMMAND_IDENTIFIER";

// Inbound
/// Action of result intents.
pub const RESULT_ACTION: &str = "com.symbol.datawedge.api.RESULT_ACTION";
/// Category result receivers register for.
pub const RESULT_CATEGORY: &str = "android.intent.category.DEFAULT";
/// List of per-item result bundles.
pub const RESULT_LIST_KEY: &str = "RESULT_LIST";
/// Single result info bundle.
pub const RESULT_INFO_KEY: &str = "RESULT_INFO";
/// Flat result status.
pub const RESULT_KEY: &str = "RESULT";
/// Status value meaning success.
pub const RESULT_SUCCESS: &str = "SUCCESS";
/// Command the result belongs to.
pub const RESULT_COMMAND_KEY: &str = "COMMAND";
/// Profile the result belongs to.
pub const RESULT_PROFILE_NAME_KEY: &str = "PROFILE_NAME";

/// Returns the filter result receivers subscribe with.
#[must_use]
pub fn result_filter() -> IntentFilter {
    IntentFilter::action(RESULT_ACTION).add_category(RESULT_CATEGORY)
}
