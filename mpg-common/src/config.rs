//! Configuration loading and root folder resolution

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::schema::Genre;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "MPG_ROOT_FOLDER";

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Prompt history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub limit: usize,
    /// File name inside the root folder
    pub file_name: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            file_name: "prompt_history.json".to_string(),
        }
    }
}

/// Auto-fill defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutofillConfig {
    /// Genre ids used when none are given on the command line
    pub genres: Vec<String>,
}

impl AutofillConfig {
    /// Configured genres; unknown ids are logged and skipped
    pub fn genres(&self) -> Vec<Genre> {
        self.genres
            .iter()
            .filter_map(|id| match Genre::from_id(id.trim()) {
                Some(genre) => Some(genre),
                None => {
                    warn!("Ignoring unknown genre in autofill config: {}", id);
                    None
                }
            })
            .collect()
    }
}

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub history: HistoryConfig,
    pub autofill: AutofillConfig,
}

impl TomlConfig {
    /// Location of the history file under `root`
    pub fn history_path(&self, root: &Path) -> PathBuf {
        root.join(&self.history.file_name)
    }
}

/// Per-user config file location (`<config dir>/mpg/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mpg").join("config.toml"))
}

/// Load the TOML config
///
/// A missing file is not an error: defaults are returned and a warning is
/// logged. A file that exists but does not parse is a `Config` error.
pub fn load_toml_config(path: Option<&Path>) -> Result<TomlConfig> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => {
            warn!("Could not determine config directory; using defaults");
            return Ok(TomlConfig::default());
        }
    };

    if !path.exists() {
        warn!("Config file {} not found; using defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write the config atomically (temp file + rename)
pub fn write_toml_config(config: &TomlConfig, target: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let temp = target.with_extension("toml.tmp");
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, target)?;
    Ok(())
}

/// Root folder resolution priority:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// OS-dependent default root folder
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("mpg"))
        .unwrap_or_else(|| PathBuf::from("./mpg_data"))
}
