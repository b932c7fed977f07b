//! Results reported back by the configuration service.

use crate::protocol::Bundle;

/// Outcome of a command sent with [`ResultType::LastResult`].
///
/// [`ResultType::LastResult`]: crate::protocol::ResultType::LastResult
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastResult {
    /// True if the service reported `SUCCESS`.
    pub successful: bool,
    /// Raw result info bundle.
    pub info: Option<Bundle>,
    /// Human-readable rendering of `info`.
    pub display: String,
    /// Command the result belongs to.
    pub command: Option<String>,
    /// Profile the command was applied to.
    pub profile_name: Option<String>,
}

/// Outcome of a command sent with [`ResultType::CompleteResult`].
///
/// [`ResultType::CompleteResult`]: crate::protocol::ResultType::CompleteResult
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteResult {
    /// One entry per processed item.
    pub results: Vec<Bundle>,
    /// Human-readable rendering of all entries.
    pub display: String,
    /// Command the result belongs to.
    pub command: Option<String>,
    /// Profile the command was applied to.
    pub profile_name: Option<String>,
}

/// A parsed result intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Single final outcome.
    Last(LastResult),
    /// Per-item outcomes.
    Complete(CompleteResult),
}

impl CommandResult {
    /// Returns the command name carried by the result.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Last(r) => r.command.as_deref(),
            Self::Complete(r) => r.command.as_deref(),
        }
    }

    /// Returns the profile name carried by the result.
    #[must_use]
    pub fn profile_name(&self) -> Option<&str> {
        match self {
            Self::Last(r) => r.profile_name.as_deref(),
            Self::Complete(r) => r.profile_name.as_deref(),
        }
    }
}
