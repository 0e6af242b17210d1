//! `cellmark.toml` configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cellmark_content::BASH_LANGUAGE;

use crate::error::{CliError, Result};

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "cellmark.toml";

/// Parsing options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Language given to fences without a tag
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_language() -> String {
    BASH_LANGUAGE.to_string()
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

/// Options for `cellmark convert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Extension of notebook files to convert, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Replace Markdown files that already exist
    #[serde(default)]
    pub overwrite: bool,
}

fn default_extension() -> String {
    "notebook".to_string()
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise `cellmark.toml` in `cwd` is
    /// used when present, and defaults when not.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::user(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = cwd.join(CONFIG_FILE);
                if !path.is_file() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, cwd.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::from_file(path)
    }

    fn from_file(path: PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parse.default_language, "bash");
        assert_eq!(config.convert.extension, "notebook");
        assert!(!config.convert.overwrite);
    }

    #[test]
    fn test_loads_file_from_cwd() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "[parse]\ndefault_language = \"python\"\n",
        )
        .unwrap();

        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.parse.default_language, "python");
        assert_eq!(config.convert, ConvertConfig::default());
    }

    #[test]
    fn test_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[convert]\nextension = \"foyle\"\noverwrite = true\n").unwrap();

        let config = Config::load(Some(path.as_path()), temp.path()).unwrap();
        assert_eq!(config.convert.extension, "foyle");
        assert!(config.convert.overwrite);
        assert_eq!(config.parse, ParseConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(Some(temp.path().join("nope.toml").as_path()), temp.path()).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "[parse\n").unwrap();

        let err = Config::load(None, temp.path()).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
