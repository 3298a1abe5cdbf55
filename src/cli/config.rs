//! TOML configuration file support.
//!
//! Defaults for the transformation commands can be kept in a config file
//! instead of being repeated on the command line:
//!
//! ```toml
//! # echemtab.toml
//! [conversion]
//! ph = 13.0
//! potential_field = "E"
//! current_field = "j"
//!
//! [output]
//! suffix = "_rescaled"
//! ```
//!
//! Command line flags take precedence over values from the file.

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "echemtab.toml";

/// Basename suffix of written packages unless configured otherwise
pub const DEFAULT_SUFFIX: &str = "_rescaled";

/// Root configuration structure for echemtab.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Defaults for the transformations.
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Where and how results are written.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the transformation commands.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// pH used for RHE conversions when neither flag nor metadata provide one.
    pub ph: Option<f64>,

    /// Potential field used by `reference`.
    pub potential_field: Option<String>,

    /// Current field used by `scan-rate`.
    pub current_field: Option<String>,
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Appended to the entry identifier to form the output basename.
    pub suffix: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Explicit config file, else `echemtab.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    debug!("Using {}", default.display());
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Output basename suffix
    pub fn suffix(&self) -> &str {
        self.output.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            ph = 13.0
            potential_field = "U"
            current_field = "I"

            [output]
            suffix = "_she"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.ph, Some(13.0));
        assert_eq!(config.conversion.potential_field.as_deref(), Some("U"));
        assert_eq!(config.conversion.current_field.as_deref(), Some("I"));
        assert_eq!(config.suffix(), "_she");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [conversion]
            ph = 7
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.ph, Some(7.0));
        assert_eq!(config.conversion.potential_field, None);
        assert_eq!(config.suffix(), DEFAULT_SUFFIX);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.ph, None);
        assert_eq!(config.suffix(), "_rescaled");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[conversion]\nph = \"acidic\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("echemtab.toml");
        std::fs::write(&path, "[output]\nsuffix = \"_mv\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.suffix(), "_mv");
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
