//! Profile configuration sent with `SET_CONFIG`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::protocol::Bundle;

const PROFILE_NAME_KEY: &str = "PROFILE_NAME";
const PROFILE_ENABLED_KEY: &str = "PROFILE_ENABLED";
const CONFIG_MODE_KEY: &str = "CONFIG_MODE";
const PLUGIN_CONFIG_KEY: &str = "PLUGIN_CONFIG";
const PLUGIN_NAME_KEY: &str = "PLUGIN_NAME";
const APP_LIST_KEY: &str = "APP_LIST";
const PACKAGE_NAME_KEY: &str = "PACKAGE_NAME";
const ACTIVITY_LIST_KEY: &str = "ACTIVITY_LIST";

/// How the service treats an existing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigMode {
    /// Create the profile if missing, otherwise update it.
    #[default]
    CreateIfNotExist,
    /// Replace the whole profile.
    Overwrite,
    /// Update an existing profile only.
    Update,
}

impl ConfigMode {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateIfNotExist => "CREATE_IF_NOT_EXIST",
            Self::Overwrite => "OVERWRITE",
            Self::Update => "UPDATE",
        }
    }
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE_IF_NOT_EXIST" => Ok(Self::CreateIfNotExist),
            "OVERWRITE" => Ok(Self::Overwrite),
            "UPDATE" => Ok(Self::Update),
            _ => Err(Error::unknown("config mode", s)),
        }
    }
}

/// A named plugin section of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Plugin name (`DCP`, `BARCODE`, `INTENT`, ...).
    pub name: String,
    /// Plugin settings, usually holding a `PARAM_LIST`.
    pub settings: Bundle,
}

impl PluginConfig {
    /// Creates a plugin section.
    #[must_use]
    pub fn new(name: impl Into<String>, settings: Bundle) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    /// Serializes the section, tagged with its plugin name.
    #[must_use]
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new().with(PLUGIN_NAME_KEY, self.name.as_str());
        for (key, value) in self.settings.iter() {
            bundle.insert(key, value.clone());
        }
        bundle
    }
}

/// An application a profile is associated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppAssociation {
    /// Package name.
    pub package: String,
    /// Activities, `*` for all.
    pub activities: Vec<String>,
}

impl AppAssociation {
    /// Associates every activity of a package.
    #[must_use]
    pub fn all_activities(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            activities: vec!["*".to_owned()],
        }
    }

    fn to_bundle(&self) -> Bundle {
        Bundle::new()
            .with(PACKAGE_NAME_KEY, self.package.as_str())
            .with(ACTIVITY_LIST_KEY, self.activities.clone())
    }
}

/// A `SET_CONFIG` payload for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Profile name.
    pub name: String,
    /// Whether the profile is enabled.
    pub enabled: bool,
    /// How an existing profile is treated.
    pub mode: ConfigMode,
    /// Plugin sections.
    pub plugins: Vec<PluginConfig>,
    /// Associated applications.
    pub apps: Vec<AppAssociation>,
}

impl ProfileConfig {
    /// Creates an enabled profile configuration with no plugins.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            mode: ConfigMode::default(),
            plugins: Vec::new(),
            apps: Vec::new(),
        }
    }

    /// Sets whether the profile is enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the config mode.
    #[must_use]
    pub fn mode(mut self, mode: ConfigMode) -> Self {
        self.mode = mode;
        self
    }

    /// Adds a plugin section.
    #[must_use]
    pub fn plugin(mut self, plugin: PluginConfig) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Adds an application association.
    #[must_use]
    pub fn app(mut self, app: AppAssociation) -> Self {
        self.apps.push(app);
        self
    }

    /// Serializes the profile into a `SET_CONFIG` bundle.
    #[must_use]
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new()
            .with(PROFILE_NAME_KEY, self.name.as_str())
            .with(CONFIG_MODE_KEY, self.mode.as_str());
        bundle.put_bool(PROFILE_ENABLED_KEY, self.enabled);

        if !self.plugins.is_empty() {
            let plugins: Vec<Bundle> = self.plugins.iter().map(PluginConfig::to_bundle).collect();
            bundle.insert(PLUGIN_CONFIG_KEY, plugins);
        }
        if !self.apps.is_empty() {
            let apps: Vec<Bundle> = self.apps.iter().map(AppAssociation::to_bundle).collect();
            bundle.insert(APP_LIST_KEY, apps);
        }

        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DcpConfig;

    #[test]
    fn test_profile_bundle() {
        let profile = ProfileConfig::new("Scanning")
            .mode(ConfigMode::Update)
            .plugin(DcpConfig::builder().enabled(true).build().plugin())
            .app(AppAssociation::all_activities("com.example.app"));

        let bundle = profile.to_bundle();

        assert_eq!(bundle.get_str("PROFILE_NAME"), Some("Scanning"));
        assert_eq!(bundle.get_str("PROFILE_ENABLED"), Some("true"));
        assert_eq!(bundle.get_str("CONFIG_MODE"), Some("UPDATE"));

        let plugins = bundle.get_bundle_list("PLUGIN_CONFIG").unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].get_str("PLUGIN_NAME"), Some("DCP"));
        let params = plugins[0].get_bundle("PARAM_LIST").unwrap();
        assert_eq!(params.get_str("dcp_input_enabled"), Some("true"));

        let apps = bundle.get_bundle_list("APP_LIST").unwrap();
        assert_eq!(apps[0].get_str("PACKAGE_NAME"), Some("com.example.app"));
        assert_eq!(
            apps[0].get_string_array("ACTIVITY_LIST"),
            Some(&["*".to_owned()][..])
        );
    }

    #[test]
    fn test_empty_profile_omits_lists() {
        let bundle = ProfileConfig::new("Empty").enabled(false).to_bundle();

        assert_eq!(bundle.get_str("PROFILE_ENABLED"), Some("false"));
        assert_eq!(bundle.get_str("CONFIG_MODE"), Some("CREATE_IF_NOT_EXIST"));
        assert!(!bundle.contains_key("PLUGIN_CONFIG"));
        assert!(!bundle.contains_key("APP_LIST"));
    }

    #[test]
    fn test_config_mode_names() {
        assert_eq!("OVERWRITE".parse::<ConfigMode>().unwrap(), ConfigMode::Overwrite);
        assert!("overwrite".parse::<ConfigMode>().is_err());
    }
}
