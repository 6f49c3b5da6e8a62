//! Extension configuration for the rule compiler host.

use std::collections::HashMap;

use ft_core::XtError;

/// Names of all extensions this build ships.
const KNOWN_EXTENSIONS: &[&str] = &["quota"];

/// Configuration for which match extensions are enabled.
#[derive(Debug, Clone)]
pub struct ExtensionConfig {
    /// Map of extension name to enabled status.
    enabled: HashMap<&'static str, bool>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        let mut enabled = HashMap::new();
        enabled.insert("quota", true);
        Self { enabled }
    }
}

impl ExtensionConfig {
    /// Check if an extension is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.get(name).copied().unwrap_or(false)
    }

    /// Enable an extension.
    pub fn enable(&mut self, name: &'static str) {
        self.enabled.insert(name, true);
    }

    /// Disable an extension.
    pub fn disable(&mut self, name: &'static str) {
        self.enabled.insert(name, false);
    }

    /// Load defaults, then apply `FT_MATCH_<NAME>=0|1` overrides from the
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        for &name in KNOWN_EXTENSIONS {
            let env_key = format!("FT_MATCH_{}", name.to_uppercase().replace('-', "_"));
            if let Ok(val) = std::env::var(&env_key) {
                let enabled = val == "1" || val.to_lowercase() == "true";
                config.enabled.insert(name, enabled);
            }
        }

        config
    }

    /// Validate the configuration before wiring.
    ///
    /// A rule compiler with no match extensions cannot express any rule.
    pub fn validate(&self) -> Result<(), XtError> {
        if !self.enabled.values().any(|enabled| *enabled) {
            return Err(XtError::Config("no match extensions enabled".to_string()));
        }
        Ok(())
    }
}
