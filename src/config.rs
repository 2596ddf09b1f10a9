use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::render::CaseStyle;
use crate::tokenize::is_separator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Naming configuration - target style and decoration for converted values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Target style used when --style is not given
    #[serde(default = "default_style")]
    pub style: CaseStyle,
    /// Literal text prepended to each converted value
    #[serde(default)]
    pub prefix: String,
    /// Literal text appended to each converted value
    #[serde(default)]
    pub suffix: String,
}

fn default_style() -> CaseStyle {
    CaseStyle::Kebab
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            style: default_style(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Config::load(path)
        } else {
            Ok(Config::default_config())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // A prefix or suffix containing separator characters would
        // reintroduce the separators conversion just removed
        for (field, value) in [("prefix", &self.naming.prefix), ("suffix", &self.naming.suffix)] {
            if value.chars().any(is_separator) {
                anyhow::bail!(
                    "Invalid naming.{}: {:?} contains separator characters",
                    field,
                    value
                );
            }
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            naming: NamingConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
