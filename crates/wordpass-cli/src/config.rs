//! CLI configuration, parsed from a TOML file plus environment variable overrides.
//!
//! Priority: environment variables > config file > defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wordpass_core::RequestLimits;

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// General CLI settings
    #[serde(default)]
    pub cli: CliSection,

    /// Values used when the command line leaves them out
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Bounds every request is validated against
    #[serde(default)]
    pub limits: RequestLimits,
}

/// General CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Request defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Password length
    #[serde(default = "default_length")]
    pub length: usize,

    /// Special characters, one per char
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            length: default_length(),
            special_chars: default_special_chars(),
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_length() -> usize {
    12
}

fn default_special_chars() -> String {
    "$#@!".to_string()
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `WORDPASS_LOG_LEVEL`
    /// - `WORDPASS_LENGTH`
    /// - `WORDPASS_SPECIAL_CHARS`
    /// - `WORDPASS_MIN_WORD_LENGTH`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("WORDPASS_LOG_LEVEL") {
            self.cli.log_level = v;
        }
        if let Ok(v) = std::env::var("WORDPASS_LENGTH") {
            if let Ok(length) = v.parse::<usize>() {
                self.defaults.length = length;
            }
        }
        if let Ok(v) = std::env::var("WORDPASS_SPECIAL_CHARS") {
            self.defaults.special_chars = v;
        }
        if let Ok(v) = std::env::var("WORDPASS_MIN_WORD_LENGTH") {
            if let Ok(min) = v.parse::<usize>() {
                self.limits.min_word_length = min;
            }
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.limits
            .validate()
            .context("limits are inconsistent")?;

        let limits = &self.limits;
        anyhow::ensure!(
            (limits.min_password_length..=limits.max_password_length)
                .contains(&self.defaults.length),
            "defaults.length must be from {} to {}",
            limits.min_password_length,
            limits.max_password_length
        );

        // Every default special char must be selectable
        if let Some(c) = self
            .defaults
            .special_chars
            .chars()
            .find(|&c| !limits.special_palette.contains(c))
        {
            anyhow::bail!(
                "defaults.special_chars contains '{}', which is not in limits.special_palette",
                c
            );
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn full_toml() -> &'static str {
        r#"
[cli]
log_level = "debug"

[defaults]
length = 16
special_chars = "%-_"

[limits]
min_password_length = 10
max_password_length = 24
min_word_length = 6
min_special_chars = 2
max_text_chars = 4000
special_palette = "$#@!%-_"
"#
    }

    #[test]
    fn test_parse_empty_config() {
        let file = NamedTempFile::new().unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cli.log_level, "warn");
        assert_eq!(config.defaults.length, 12);
        assert_eq!(config.defaults.special_chars, "$#@!");
        assert_eq!(config.limits, RequestLimits::default());
    }

    #[test]
    fn test_parse_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", full_toml()).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cli.log_level, "debug");
        assert_eq!(config.defaults.length, 16);
        assert_eq!(config.defaults.special_chars, "%-_");
        assert_eq!(config.limits.min_password_length, 10);
        assert_eq!(config.limits.max_password_length, 24);
        assert_eq!(config.limits.min_word_length, 6);
        assert_eq!(config.limits.min_special_chars, 2);
        assert_eq!(config.limits.max_text_chars, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_limits_keep_defaults() {
        let toml = r#"
[limits]
max_password_length = 32
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.limits.max_password_length, 32);
        assert_eq!(config.limits.min_password_length, 8);
        assert_eq!(config.limits.special_palette, "$#@!%-_");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();

        std::env::set_var("WORDPASS_LENGTH", "18");
        std::env::set_var("WORDPASS_SPECIAL_CHARS", "@!%");
        std::env::set_var("WORDPASS_MIN_WORD_LENGTH", "not-a-number");

        config.apply_env_overrides();

        assert_eq!(config.defaults.length, 18);
        assert_eq!(config.defaults.special_chars, "@!%");
        // Unparseable values are ignored
        assert_eq!(config.limits.min_word_length, 5);

        std::env::remove_var("WORDPASS_LENGTH");
        std::env::remove_var("WORDPASS_SPECIAL_CHARS");
        std::env::remove_var("WORDPASS_MIN_WORD_LENGTH");
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/wordpass.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[defaults]\nlength = \"twelve\"\n").unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_validation_default_length_out_of_range() {
        let toml = r#"
[defaults]
length = 40
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_special_chars_outside_palette() {
        let toml = r#"
[defaults]
special_chars = "$#&"
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains('&'));
    }

    #[test]
    fn test_validation_inconsistent_limits() {
        let mut config = CliConfig::default();
        config.limits.min_password_length = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", full_toml()).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        let serialized = toml::to_string_pretty(&config).unwrap();

        let reparsed: CliConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.defaults.length, config.defaults.length);
        assert_eq!(reparsed.limits, config.limits);
    }
}
