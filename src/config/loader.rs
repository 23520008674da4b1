//! Configuration file loading with precedence handling.

use super::{ArrangedDirection, TabBarConfig};
use crate::view_state::tab_bar::ScrollStyle;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TABSTRIP_CONFIG";

/// Environment variable overriding items per page.
pub const ITEMS_PER_PAGE_ENV_VAR: &str = "TABSTRIP_ITEMS_PER_PAGE";

/// Environment variable overriding the max item width.
pub const MAX_ITEM_WIDTH_ENV_VAR: &str = "TABSTRIP_MAX_ITEM_WIDTH";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tabstrip/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Scroll the row instead of dividing the container.
    #[serde(default)]
    pub scroll_enabled: Option<bool>,

    /// Snap scrolling to pages.
    #[serde(default)]
    pub paging_enabled: Option<bool>,

    /// Items visible per page while scrolling.
    #[serde(default)]
    pub items_per_page: Option<f64>,

    /// Upper bound on self-sized item widths.
    #[serde(default)]
    pub max_item_width: Option<f64>,

    /// Height of the whole bar.
    #[serde(default)]
    pub tab_bar_height: Option<f64>,

    /// Thickness of the selection indicator.
    #[serde(default)]
    pub line_height: Option<f64>,

    /// Thickness of the indicator track.
    #[serde(default)]
    pub line_background_height: Option<f64>,

    /// `"horizontal"` or `"vertical"` icon/label stacking.
    #[serde(default)]
    pub arranged_direction: Option<ArrangedDirection>,

    /// Tab selected when the bar is built.
    #[serde(default)]
    pub default_select_page: Option<usize>,

    /// Horizontal padding inside each item.
    #[serde(default)]
    pub item_spacing: Option<f64>,

    /// Side of the square icon slot.
    #[serde(default)]
    pub icon_side: Option<f64>,

    /// Width of one display column of label text.
    #[serde(default)]
    pub glyph_width: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Scroll mode.
    pub scroll: ScrollStyle,
    /// Bar metrics.
    pub tab_bar: TabBarConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollStyle::default(),
            tab_bar: TabBarConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags. `None` leaves the resolved value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CliOverrides {
    /// `--scroll`
    pub scroll_enabled: Option<bool>,
    /// `--paging`
    pub paging_enabled: Option<bool>,
    /// `--items-per-page`
    pub items_per_page: Option<f64>,
    /// `--max-width`
    pub max_item_width: Option<f64>,
    /// `--select`
    pub default_select_page: Option<usize>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabstrip/tabstrip.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tabstrip").join("tabstrip.log")
    } else {
        PathBuf::from("tabstrip.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tabstrip/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabstrip").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `TABSTRIP_CONFIG` environment variable
/// 3. Default path `~/.config/tabstrip/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABSTRIP_ITEMS_PER_PAGE`: items per page while scrolling
/// - `TABSTRIP_MAX_ITEM_WIDTH`: max self-sized item width
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(items_per_page) = env_f64(ITEMS_PER_PAGE_ENV_VAR) {
        config.scroll.items_in_page = items_per_page;
    }

    if let Some(max_width) = env_f64(MAX_ITEM_WIDTH_ENV_VAR) {
        config.scroll.max_width = Some(max_width);
    }

    config
}

fn env_f64(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(name, value = %raw, %err, "ignoring unparseable environment override");
            None
        }
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let scroll = ScrollStyle {
        scrollable: config.scroll_enabled.unwrap_or(defaults.scroll.scrollable),
        paging: config.paging_enabled.unwrap_or(defaults.scroll.paging),
        items_in_page: config.items_per_page.unwrap_or(defaults.scroll.items_in_page),
        max_width: config.max_item_width.or(defaults.scroll.max_width),
    };

    let bar = defaults.tab_bar;
    let mut tab_bar = TabBarConfig {
        tab_bar_height: config.tab_bar_height.unwrap_or(bar.tab_bar_height),
        line_height: config.line_height.unwrap_or(bar.line_height),
        line_background_height: config
            .line_background_height
            .unwrap_or(bar.line_background_height),
        arranged_direction: config.arranged_direction.unwrap_or(bar.arranged_direction),
        default_select_page: config
            .default_select_page
            .unwrap_or(bar.default_select_page),
        metrics: bar.metrics,
    };
    tab_bar.metrics.spacing = config.item_spacing.unwrap_or(bar.metrics.spacing);
    tab_bar.metrics.icon_side = config.icon_side.unwrap_or(bar.metrics.icon_side);
    tab_bar.metrics.glyph_width = config.glyph_width.unwrap_or(bar.metrics.glyph_width);

    ResolvedConfig {
        scroll,
        tab_bar,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(scrollable) = overrides.scroll_enabled {
        config.scroll.scrollable = scrollable;
    }

    if let Some(paging) = overrides.paging_enabled {
        config.scroll.paging = paging;
    }

    if let Some(items_per_page) = overrides.items_per_page {
        config.scroll.items_in_page = items_per_page;
    }

    if let Some(max_width) = overrides.max_item_width {
        config.scroll.max_width = Some(max_width);
    }

    if let Some(page) = overrides.default_select_page {
        config.tab_bar.default_select_page = page;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
