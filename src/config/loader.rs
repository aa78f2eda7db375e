//! Configuration structures and loading logic.

use crate::config::modes::OutputFormat;
use crate::error::{Error, Result};
use crate::fs::{DEFAULT_PREFIX_PATTERN, DEFAULT_SUFFIX_MARKER};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tidykit.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub rename: RenameConfig,
}

/// Default inputs for the `ltk` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Long-term key octets.
    #[serde(default)]
    pub ltk: Option<String>,

    /// ERand octets, as displayed (big-endian).
    #[serde(default)]
    pub erand: Option<String>,

    /// EDiv octets.
    #[serde(default)]
    pub ediv: Option<String>,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Settings for the strip commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Directory to process when none is given on the command line.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Regex removed from the start of names by `strip-prefix`.
    #[serde(default = "default_prefix_pattern")]
    pub prefix_pattern: String,

    /// Marker removed from the end of stems by `strip-suffix`.
    #[serde(default = "default_suffix_marker")]
    pub suffix_marker: String,

    /// Only report what would be renamed.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            directory: None,
            prefix_pattern: default_prefix_pattern(),
            suffix_marker: default_suffix_marker(),
            dry_run: false,
        }
    }
}

fn default_prefix_pattern() -> String {
    DEFAULT_PREFIX_PATTERN.to_string()
}

fn default_suffix_marker() -> String {
    DEFAULT_SUFFIX_MARKER.to_string()
}

/// Locate the config file used when none is given explicitly.
///
/// Prefers `tidykit.toml` in the working directory, then `config.toml` in the
/// platform config directory. Returns `None` when neither exists.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    ProjectDirs::from("", "", "tidykit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .filter(|path| path.is_file())
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Get the effective directory for the strip commands.
    pub fn rename_directory(&self) -> PathBuf {
        self.rename
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_full() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tidykit.toml");
        fs::write(
            &path,
            r#"
[keys]
ltk = "A1,B2"
erand = "01,02"
ediv = "03,04"
format = "json"

[rename]
directory = "/music"
suffix_marker = "_old"
dry_run = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.keys.ltk.as_deref(), Some("A1,B2"));
        assert_eq!(config.keys.format, OutputFormat::Json);
        assert_eq!(config.rename_directory(), PathBuf::from("/music"));
        assert_eq!(config.rename.suffix_marker, "_old");
        assert_eq!(config.rename.prefix_pattern, DEFAULT_PREFIX_PATTERN);
        assert!(config.rename.dry_run);
    }

    #[test]
    fn test_load_empty_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.keys.ltk.is_none());
        assert_eq!(config.keys.format, OutputFormat::Text);
        assert_eq!(config.rename.suffix_marker, DEFAULT_SUFFIX_MARKER);
        assert_eq!(config.rename_directory(), PathBuf::from("."));
    }

    #[test]
    fn test_load_missing() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[keys\nltk = ").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }
}
