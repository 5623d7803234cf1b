/// Configuration for devdoc
///
/// A small TOML-backed layer holding the writer's substitution values.
/// Running with no config file gives the canonical defaults.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Substitution values used when a record field is absent at write time
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Writer substitution values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Used when `function_name` is absent
    #[serde(default = "default_function_name")]
    pub function_name: String,

    /// Used when `language` is absent; also tags the code fences
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            function_name: default_function_name(),
            language: default_language(),
        }
    }
}

fn default_function_name() -> String {
    "unknown_function".to_string()
}

fn default_language() -> String {
    "python".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file.
    ///
    /// `None`, or a path that does not exist, falls back to defaults; a
    /// present file that fails to read or parse is a hard error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!("config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.defaults.function_name, "unknown_function");
        assert_eq!(config.defaults.language, "python");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/devdoc.toml"))).unwrap();
        assert_eq!(config.defaults, DefaultsConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nlanguage = \"rust\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.language, "rust");
        // Unspecified keys keep their defaults.
        assert_eq!(config.defaults.function_name, "unknown_function");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "defaults = not toml").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }
}
