//! Reader settings from TOML, environment and command line.
//!
//! Sources are layered lowest first: built-in defaults, the config file,
//! `FOLIO_*` environment variables, then flags.

use crate::model::Theme;
use crate::pagination::DEFAULT_TRANSITION_COOLDOWN;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Environment variable overriding the theme.
pub const THEME_ENV_VAR: &str = "FOLIO_THEME";

/// Environment variable overriding the 1-based start page.
pub const START_PAGE_ENV_VAR: &str = "FOLIO_START_PAGE";

/// Default mouse-drag distance, in terminal columns, that counts as a swipe.
pub const DEFAULT_DRAG_THRESHOLD_COLUMNS: u16 = 6;

/// A config file that exists but is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Cannot read config {path}: {reason}")]
    ReadError {
        /// Config file.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// The file is not valid TOML, or names an unknown key or bad value.
    #[error("Bad config {path}: {reason}")]
    ParseError {
        /// Config file.
        path: PathBuf,
        /// Decoder error text.
        reason: String,
    },
}

/// Contents of `config.toml`. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme forced at startup ("dark" or "light"), overriding the stored one.
    pub theme: Option<Theme>,

    /// 1-based page to open on.
    pub start_page: Option<usize>,

    /// Horizontal mouse-drag distance, in columns, that counts as a swipe.
    pub drag_threshold_columns: Option<u16>,

    /// Transition cooldown in milliseconds.
    pub transition_cooldown_ms: Option<u64>,

    /// Reopen on the last page read when no start page is given.
    pub remember_position: Option<bool>,

    /// Path of the key/value storage file.
    pub storage_path: Option<PathBuf>,

    /// Where tracing output goes.
    pub log_file_path: Option<PathBuf>,
}

/// Settings the reader starts with, every source applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme override; `None` keeps the stored preference.
    pub theme: Option<Theme>,
    /// 1-based start page; `None` resumes or starts at the cover.
    pub start_page: Option<usize>,
    /// Swipe threshold for mouse drags, in columns.
    pub drag_threshold_columns: u16,
    /// Transition cooldown.
    pub transition_cooldown: Duration,
    /// Resume from the last page read.
    pub remember_position: bool,
    /// Key/value storage file.
    pub storage_path: PathBuf,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: None,
            start_page: None,
            drag_threshold_columns: DEFAULT_DRAG_THRESHOLD_COLUMNS,
            transition_cooldown: DEFAULT_TRANSITION_COOLDOWN,
            remember_position: true,
            storage_path: crate::storage::default_storage_path(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Zero-based start index derived from the 1-based `start_page`.
    pub fn start_index(&self) -> Option<usize> {
        self.start_page.map(|page| page.saturating_sub(1))
    }
}

/// `folio.log` under the platform state directory, or the working
/// directory when there is none.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("folio").join("folio.log"))
        .unwrap_or_else(|| PathBuf::from("folio.log"))
}

/// `folio/config.toml` under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Read and decode the config file at `path`.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file exists but cannot be read or decoded.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let text = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    toml::from_str(&text)
        .map(Some)
        .map_err(|err| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

/// Pick the config file to load and load it.
///
/// The first of these that is set wins, even if the file it names is
/// missing:
/// 1. `config_path` (the `--config` flag)
/// 2. `FOLIO_CONFIG`
/// 3. [`default_config_path`]
///
/// # Errors
///
/// Propagates [`load_config_file`] failures.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = config_path
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(default_config_path);

    match chosen {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Lay the config file over the defaults.
///
/// A `start_page` of zero is treated as absent.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(file) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: file.theme.or(defaults.theme),
        start_page: file.start_page.filter(|&p| p > 0).or(defaults.start_page),
        drag_threshold_columns: file
            .drag_threshold_columns
            .unwrap_or(defaults.drag_threshold_columns),
        transition_cooldown: file
            .transition_cooldown_ms
            .map_or(defaults.transition_cooldown, Duration::from_millis),
        remember_position: file
            .remember_position
            .unwrap_or(defaults.remember_position),
        storage_path: file.storage_path.unwrap_or(defaults.storage_path),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Lay `FOLIO_THEME` and `FOLIO_START_PAGE` over `config`.
///
/// Unrecognised theme names and non-positive pages are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(theme) = std::env::var(THEME_ENV_VAR)
        .ok()
        .and_then(|raw| raw.parse::<Theme>().ok())
    {
        config.theme = Some(theme);
    }

    if let Some(page) = std::env::var(START_PAGE_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&p| p > 0)
    {
        config.start_page = Some(page);
    }

    config
}

/// Lay the `--theme` and `--page` flags over `config`. Unset flags change
/// nothing.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<Theme>,
    start_page_override: Option<usize>,
) -> ResolvedConfig {
    config.theme = theme_override.or(config.theme);
    config.start_page = start_page_override.or(config.start_page);
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
