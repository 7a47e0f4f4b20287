//! Sheetdown Config
//!
//! This crate handles configuration loading and management
//! for sheetdown, supporting TOML configuration files and
//! environment-variable overrides.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/sheetdown/config.toml`
//! - macOS: `~/Library/Application Support/sheetdown/config.toml`
//! - Windows: `%APPDATA%\sheetdown\config.toml`
//!
//! The `SHEETDOWN_FORMAT` environment variable overrides the configured
//! output format.
//!
//! # Example
//!
//! ```no_run
//! use sheetdown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod output;

pub use features::FeaturesConfig;
pub use output::OutputConfig;

use serde::{Deserialize, Serialize};
use sheetdown_core::{Result, SheetdownError};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the output format.
pub const FORMAT_ENV_VAR: &str = "SHEETDOWN_FORMAT";

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
FlushTrailing = true
HeadingBody   = true

[output]
Format = "html"
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for sheetdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use sheetdown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sheetdown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sheetdown")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| SheetdownError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| SheetdownError::Config(format!("Parse error: {}", e)));
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SheetdownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or inline string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Arguments
    ///
    /// * `override_config` - Optional path to override file or inline TOML
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| SheetdownError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// This is used for applying CLI overrides or secondary config files.
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.output.merge(&other.output);
    }

    /// Apply environment-variable overrides.
    ///
    /// `SHEETDOWN_FORMAT` overrides the configured output format; an
    /// unparseable value is an error rather than silently ignored.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(FORMAT_ENV_VAR) {
            self.output.format = value.parse().map_err(SheetdownError::Config)?;
        }
        Ok(())
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SheetdownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetdown_core::OutputFormat;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.flush_trailing);
        assert!(config.features.heading_body);
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert!(config.features.flush_trailing);
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        assert!(base.features.flush_trailing);

        let override_toml = r#"
            [features]
            FlushTrailing = false
            [output]
            Format = "markdown"
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.features.flush_trailing);
        assert_eq!(base.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_inline_override() {
        let config =
            Config::load_with_override(Some("[output]\nFormat = \"markdown\"")).unwrap();
        assert_eq!(config.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("sheetdown"));
        }
    }

    #[test]
    fn test_apply_env_format() {
        let mut config = Config::default();
        std::env::set_var(FORMAT_ENV_VAR, "markdown");
        config.apply_env().unwrap();
        std::env::remove_var(FORMAT_ENV_VAR);
        assert_eq!(config.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.features.flush_trailing, parsed.features.flush_trailing);
        assert_eq!(config.output.format, parsed.output.format);
    }
}
