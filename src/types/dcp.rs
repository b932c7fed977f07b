//! Data capture plus (DCP) plugin configuration.
//!
//! DCP places an on-screen scan button and turns screen touches into scan
//! triggers. A [`DcpConfig`] serializes to the plugin bundle expected by
//! `SET_CONFIG`:
//!
//! ```text
//! PARAM_LIST = {
//!     dcp_input_enabled, RESET_CONFIG, dcp_dock_button_on, dcp_start_in,
//!     dcp_highest_pos, dcp_lowest_pos, dcp_drag_detect_time
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::protocol::Bundle;
use crate::types::profile::PluginConfig;

/// Plugin name used in profile configurations.
pub const DCP_PLUGIN_NAME: &str = "DCP";

/// Key of the nested parameter bundle.
pub const PARAM_LIST_KEY: &str = "PARAM_LIST";
/// Key of the reset flag.
pub const RESET_CONFIG_KEY: &str = "RESET_CONFIG";

const DCP_ENABLED_KEY: &str = "dcp_input_enabled";
const DCP_BUTTON_ANCHOR_POSITION_KEY: &str = "dcp_dock_button_on";
const DCP_LAUNCH_MODE_KEY: &str = "dcp_start_in";
const DCP_HIGHEST_POSITION_KEY: &str = "dcp_highest_pos";
const DCP_LOWEST_POSITION_KEY: &str = "dcp_lowest_pos";
const DCP_TOUCH_WAIT_TIME_KEY: &str = "dcp_drag_detect_time";

/// Upper bound of the position parameters (percent of screen height).
pub const MAX_POSITION: i32 = 100;

/// Which screen edge the scan button docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonAnchorPosition {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Both edges.
    #[default]
    Both,
}

impl ButtonAnchorPosition {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for ButtonAnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonAnchorPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            "BOTH" => Ok(Self::Both),
            _ => Err(Error::unknown("button anchor position", s)),
        }
    }
}

/// How DCP presents itself when the app starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchMode {
    /// Full screen touch area.
    Fullscreen,
    /// Docked button that expands on drag.
    #[default]
    Button,
    /// Docked button only.
    ButtonOnly,
}

impl LaunchMode {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "FULLSCREEN",
            Self::Button => "BUTTON",
            Self::ButtonOnly => "BUTTON_ONLY",
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULLSCREEN" => Ok(Self::Fullscreen),
            "BUTTON" => Ok(Self::Button),
            "BUTTON_ONLY" => Ok(Self::ButtonOnly),
            _ => Err(Error::unknown("launch mode", s)),
        }
    }
}

/// Immutable DCP plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcpConfig {
    enabled: bool,
    reset_config: bool,
    button_anchor_position: ButtonAnchorPosition,
    launch_mode: LaunchMode,
    highest_position: i32,
    lowest_position: i32,
    touch_wait_time: u32,
}

impl Default for DcpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            reset_config: true,
            button_anchor_position: ButtonAnchorPosition::Both,
            launch_mode: LaunchMode::Button,
            highest_position: MAX_POSITION,
            lowest_position: MAX_POSITION,
            touch_wait_time: 100,
        }
    }
}

impl DcpConfig {
    /// Starts a builder with default settings.
    #[must_use]
    pub fn builder() -> DcpConfigBuilder {
        DcpConfigBuilder::new()
    }

    /// Returns true if the plugin is enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if existing plugin settings are reset first.
    #[must_use]
    pub const fn reset_config(&self) -> bool {
        self.reset_config
    }

    /// Returns the button anchor position.
    #[must_use]
    pub const fn button_anchor_position(&self) -> ButtonAnchorPosition {
        self.button_anchor_position
    }

    /// Returns the launch mode.
    #[must_use]
    pub const fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    /// Returns the highest button position.
    #[must_use]
    pub const fn highest_position(&self) -> i32 {
        self.highest_position
    }

    /// Returns the lowest button position.
    #[must_use]
    pub const fn lowest_position(&self) -> i32 {
        self.lowest_position
    }

    /// Returns the touch wait time in milliseconds.
    #[must_use]
    pub const fn touch_wait_time(&self) -> u32 {
        self.touch_wait_time
    }

    /// Serializes the configuration into its plugin bundle.
    #[must_use]
    pub fn to_bundle(self) -> Bundle {
        let mut params = Bundle::new();
        params.put_bool(DCP_ENABLED_KEY, self.enabled);
        params.put_bool(RESET_CONFIG_KEY, self.reset_config);
        params.insert(
            DCP_BUTTON_ANCHOR_POSITION_KEY,
            self.button_anchor_position.as_str(),
        );
        params.insert(DCP_LAUNCH_MODE_KEY, self.launch_mode.as_str());
        params.insert(DCP_HIGHEST_POSITION_KEY, self.highest_position.to_string());
        params.insert(DCP_LOWEST_POSITION_KEY, self.lowest_position.to_string());
        params.insert(DCP_TOUCH_WAIT_TIME_KEY, self.touch_wait_time.to_string());

        Bundle::new().with(PARAM_LIST_KEY, params)
    }

    /// Returns this configuration as a named plugin entry for a profile.
    #[must_use]
    pub fn plugin(&self) -> PluginConfig {
        PluginConfig::new(DCP_PLUGIN_NAME, self.to_bundle())
    }
}

/// Fluent builder for [`DcpConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DcpConfigBuilder {
    config: DcpConfig,
}

impl DcpConfigBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether existing plugin settings are reset first.
    #[must_use]
    pub const fn reset_config(mut self, reset: bool) -> Self {
        self.config.reset_config = reset;
        self
    }

    /// Enables or disables the plugin.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Sets the button anchor position.
    #[must_use]
    pub const fn button_anchor_position(mut self, position: ButtonAnchorPosition) -> Self {
        self.config.button_anchor_position = position;
        self
    }

    /// Sets the launch mode.
    #[must_use]
    pub const fn launch_mode(mut self, mode: LaunchMode) -> Self {
        self.config.launch_mode = mode;
        self
    }

    /// Sets the highest button position, saturating at [`MAX_POSITION`].
    #[must_use]
    pub const fn highest_position(mut self, value: i32) -> Self {
        self.config.highest_position = clamp_position(value);
        self
    }

    /// Sets the lowest button position, saturating at [`MAX_POSITION`].
    #[must_use]
    pub const fn lowest_position(mut self, value: i32) -> Self {
        self.config.lowest_position = clamp_position(value);
        self
    }

    /// Sets the delay in milliseconds before a touch activates the scanner.
    #[must_use]
    pub const fn touch_wait_time(mut self, millis: u32) -> Self {
        self.config.touch_wait_time = millis;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub const fn build(self) -> DcpConfig {
        self.config
    }

    /// Finishes the configuration and serializes it.
    #[must_use]
    pub fn create(self) -> Bundle {
        self.config.to_bundle()
    }
}

// Only the upper bound is enforced.
const fn clamp_position(value: i32) -> i32 {
    if value > MAX_POSITION {
        MAX_POSITION
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(bundle: &Bundle) -> &Bundle {
        bundle.get_bundle(PARAM_LIST_KEY).unwrap()
    }

    #[test]
    fn test_default_bundle() {
        let bundle = DcpConfig::builder().create();
        let params = params(&bundle);

        assert_eq!(bundle.len(), 1);
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec![
                "dcp_input_enabled",
                "RESET_CONFIG",
                "dcp_dock_button_on",
                "dcp_start_in",
                "dcp_highest_pos",
                "dcp_lowest_pos",
                "dcp_drag_detect_time",
            ]
        );
        assert_eq!(params.get_str("dcp_input_enabled"), Some("false"));
        assert_eq!(params.get_str("RESET_CONFIG"), Some("true"));
        assert_eq!(params.get_str("dcp_dock_button_on"), Some("BOTH"));
        assert_eq!(params.get_str("dcp_start_in"), Some("BUTTON"));
        assert_eq!(params.get_str("dcp_highest_pos"), Some("100"));
        assert_eq!(params.get_str("dcp_lowest_pos"), Some("100"));
        assert_eq!(params.get_str("dcp_drag_detect_time"), Some("100"));
    }

    #[test]
    fn test_custom_bundle() {
        let bundle = DcpConfig::builder()
            .enabled(true)
            .reset_config(false)
            .button_anchor_position(ButtonAnchorPosition::Left)
            .launch_mode(LaunchMode::Fullscreen)
            .highest_position(30)
            .lowest_position(80)
            .touch_wait_time(250)
            .create();
        let params = params(&bundle);

        assert_eq!(params.get_str("dcp_input_enabled"), Some("true"));
        assert_eq!(params.get_str("RESET_CONFIG"), Some("false"));
        assert_eq!(params.get_str("dcp_dock_button_on"), Some("LEFT"));
        assert_eq!(params.get_str("dcp_start_in"), Some("FULLSCREEN"));
        assert_eq!(params.get_str("dcp_highest_pos"), Some("30"));
        assert_eq!(params.get_str("dcp_lowest_pos"), Some("80"));
        assert_eq!(params.get_str("dcp_drag_detect_time"), Some("250"));
    }

    #[test]
    fn test_position_clamp_is_upper_only() {
        for value in [101, 150, i32::MAX] {
            let config = DcpConfig::builder()
                .highest_position(value)
                .lowest_position(value)
                .build();
            assert_eq!(config.highest_position(), 100);
            assert_eq!(config.lowest_position(), 100);
        }

        for value in [100, 50, 0, -1, i32::MIN] {
            let config = DcpConfig::builder()
                .highest_position(value)
                .lowest_position(value)
                .build();
            assert_eq!(config.highest_position(), value);
            assert_eq!(config.lowest_position(), value);
        }
    }

    #[test]
    fn test_negative_position_serializes_verbatim() {
        let bundle = DcpConfig::builder().lowest_position(-5).create();
        assert_eq!(params(&bundle).get_str("dcp_lowest_pos"), Some("-5"));
    }

    #[test]
    fn test_enum_names() {
        assert_eq!("RIGHT".parse::<ButtonAnchorPosition>().unwrap(), ButtonAnchorPosition::Right);
        assert_eq!("BUTTON_ONLY".parse::<LaunchMode>().unwrap(), LaunchMode::ButtonOnly);
        assert!("TOP".parse::<ButtonAnchorPosition>().is_err());
        assert_eq!(LaunchMode::default().to_string(), "BUTTON");
    }
}
