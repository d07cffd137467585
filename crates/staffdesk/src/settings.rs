//! Configuration file loading.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line flags. The file comes from `--config` or, failing that, the
//! `STAFFDESK_CONFIG` environment variable. A missing file is only an error
//! when it was named explicitly.
//!
//! ```yaml
//! view:
//!   page_size: 15
//!   search_debounce_ms: 200
//! export_dir: ./exports
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use staffdesk_seeker::{SeekerError, ValidatedConfig, ViewConfig};
use thiserror::Error;

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "STAFFDESK_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    View(#[from] SeekerError),
}

/// Everything a settings file can set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub view: ViewConfig,
    /// Directory exports land in when `--out` isn't given.
    pub export_dir: Option<PathBuf>,
}

/// Flags that override the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub page_size: Option<usize>,
}

impl Settings {
    /// Parses settings from YAML text. `origin` is only used in errors.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self, SettingsError> {
        if text.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_yaml::from_str(text).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded settings from {}", path.display());
        Self::from_yaml(&text, path)
    }

    /// Resolves and loads the settings file, if any.
    ///
    /// An explicit `path` must exist. A path from the environment that
    /// doesn't exist is skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::warn!(
                    "{} points at {}, which does not exist; using defaults",
                    CONFIG_ENV,
                    path.display()
                );
                Ok(Settings::default())
            }
            None => Ok(Settings::default()),
        }
    }

    /// Applies flag overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(size) = overrides.page_size {
            self.view.page_size = size;
        }
        self
    }

    /// Validated view settings.
    pub fn view(&self) -> Result<ValidatedConfig, SettingsError> {
        Ok(self.view.validate()?)
    }
}
