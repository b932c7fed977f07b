//! Command types for the DataWedge intent API.
//!
//! Every outbound intent carries exactly one command, keyed by the API
//! prefix followed by the command name.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::protocol::INTENT_TYPE_KEY_PREFIX;

/// Commands understood by the DataWedge intent API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentType {
    /// Clone an existing profile.
    CloneProfile,
    /// Create an empty profile.
    CreateProfile,
    /// Delete one or more profiles.
    DeleteProfile,
    /// Enable or disable DataWedge as a whole.
    EnableDatawedge,
    /// Enumerate available scanners.
    EnumerateScanners,
    /// Enumerate available triggers.
    EnumerateTriggers,
    /// Query the active profile.
    GetActiveProfile,
    /// Query a profile configuration.
    GetConfig,
    /// Query whether DataWedge is enabled.
    GetDatawedgeStatus,
    /// Query the default profile.
    GetDefaultProfile,
    /// Query the list of profiles.
    GetProfilesList,
    /// Query the scanner status.
    GetScannerStatus,
    /// Query component versions.
    GetVersionInfo,
    /// Import a configuration file.
    ImportConfig,
    /// Play a notification on the scanner.
    Notify,
    /// Register for status notifications.
    RegisterForNotification,
    /// Rename a profile.
    RenameProfile,
    /// Reset the default profile to factory settings.
    ResetDefaultProfile,
    /// Enable, disable, suspend or resume the scanner input plugin.
    ScannerInputPlugin,
    /// Create or update a profile configuration.
    SetConfig,
    /// Set the default profile.
    SetDefaultProfile,
    /// Start, stop or toggle a software scan.
    SoftScanTrigger,
    /// Switch the active scanner.
    SwitchScanner,
    /// Switch scanner parameters for the current scan session.
    SwitchScannerParams,
    /// Switch to a named profile.
    SwitchToProfile,
    /// Unregister from status notifications.
    UnregisterForNotification,
}

impl IntentType {
    /// All known intent types.
    pub const ALL: [Self; 26] = [
        Self::CloneProfile,
        Self::CreateProfile,
        Self::DeleteProfile,
        Self::EnableDatawedge,
        Self::EnumerateScanners,
        Self::EnumerateTriggers,
        Self::GetActiveProfile,
        Self::GetConfig,
        Self::GetDatawedgeStatus,
        Self::GetDefaultProfile,
        Self::GetProfilesList,
        Self::GetScannerStatus,
        Self::GetVersionInfo,
        Self::ImportConfig,
        Self::Notify,
        Self::RegisterForNotification,
        Self::RenameProfile,
        Self::ResetDefaultProfile,
        Self::ScannerInputPlugin,
        Self::SetConfig,
        Self::SetDefaultProfile,
        Self::SoftScanTrigger,
        Self::SwitchScanner,
        Self::SwitchScannerParams,
        Self::SwitchToProfile,
        Self::UnregisterForNotification,
    ];

    /// Returns the command name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloneProfile => "CLONE_PROFILE",
            Self::CreateProfile => "CREATE_PROFILE",
            Self::DeleteProfile => "DELETE_PROFILE",
            Self::EnableDatawedge => "ENABLE_DATAWEDGE",
            Self::EnumerateScanners => "ENUMERATE_SCANNERS",
            Self::EnumerateTriggers => "ENUMERATE_TRIGGERS",
            Self::GetActiveProfile => "GET_ACTIVE_PROFILE",
            Self::GetConfig => "GET_CONFIG",
            Self::GetDatawedgeStatus => "GET_DATAWEDGE_STATUS",
            Self::GetDefaultProfile => "GET_DEFAULT_PROFILE",
            Self::GetProfilesList => "GET_PROFILES_LIST",
            Self::GetScannerStatus => "GET_SCANNER_STATUS",
            Self::GetVersionInfo => "GET_VERSION_INFO",
            Self::ImportConfig => "IMPORT_CONFIG",
            Self::Notify => "NOTIFY",
            Self::RegisterForNotification => "REGISTER_FOR_NOTIFICATION",
            Self::RenameProfile => "RENAME_PROFILE",
            Self::ResetDefaultProfile => "RESET_DEFAULT_PROFILE",
            Self::ScannerInputPlugin => "SCANNER_INPUT_PLUGIN",
            Self::SetConfig => "SET_CONFIG",
            Self::SetDefaultProfile => "SET_DEFAULT_PROFILE",
            Self::SoftScanTrigger => "SOFT_SCAN_TRIGGER",
            Self::SwitchScanner => "SWITCH_SCANNER",
            Self::SwitchScannerParams => "SWITCH_SCANNER_PARAMS",
            Self::SwitchToProfile => "SWITCH_TO_PROFILE",
            Self::UnregisterForNotification => "UNREGISTER_FOR_NOTIFICATION",
        }
    }

    /// Returns the extras key the payload is stored under.
    #[must_use]
    pub fn extra_key(self) -> String {
        format!("{INTENT_TYPE_KEY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unknown("intent type", s))
    }
}

/// How many replies a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultType {
    /// No reply.
    #[default]
    None,
    /// A single reply describing the final outcome.
    LastResult,
    /// One reply entry per processed item.
    CompleteResult,
}

impl ResultType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::LastResult => "LAST_RESULT",
            Self::CompleteResult => "COMPLETE_RESULT",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "LAST_RESULT" => Ok(Self::LastResult),
            "COMPLETE_RESULT" => Ok(Self::CompleteResult),
            _ => Err(Error::unknown("result type", s)),
        }
    }
}

/// Argument of [`IntentType::SoftScanTrigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoftScanTrigger {
    /// Start a scan.
    Start,
    /// Stop the current scan.
    Stop,
    /// Start a scan, or stop the current one.
    Toggle,
}

impl SoftScanTrigger {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START_SCANNING",
            Self::Stop => "STOP_SCANNING",
            Self::Toggle => "TOGGLE_SCANNING",
        }
    }
}

/// Argument of [`IntentType::ScannerInputPlugin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerPluginCommand {
    /// Enable the scanner plugin.
    Enable,
    /// Disable the scanner plugin.
    Disable,
    /// Suspend scanning, keeping the plugin enabled.
    Suspend,
    /// Resume a suspended plugin.
    Resume,
}

impl ScannerPluginCommand {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "ENABLE_PLUGIN",
            Self::Disable => "DISABLE_PLUGIN",
            Self::Suspend => "SUSPEND_PLUGIN",
            Self::Resume => "RESUME_PLUGIN",
        }
    }
}

/// Opaque caller token echoed back by the service for correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandIdentifier(String);

impl CommandIdentifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommandIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CommandIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CommandIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
