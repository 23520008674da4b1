//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use crate::view_state::item_sizing::ItemMetrics;
use serde::Deserialize;

/// Direction in which an item stacks its icon and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrangedDirection {
    /// Icon left of the label.
    #[default]
    Horizontal,
    /// Icon above the label.
    Vertical,
}

/// Tab bar appearance metrics.
///
/// Colors and fonts belong to the host; only the numbers that affect geometry live here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarConfig {
    /// Height of the whole bar.
    pub tab_bar_height: f64,
    /// Thickness of the selection indicator line.
    pub line_height: f64,
    /// Thickness of the track line under the indicator.
    pub line_background_height: f64,
    /// How each item stacks its icon and label.
    pub arranged_direction: ArrangedDirection,
    /// Tab selected when the bar is first built.
    pub default_select_page: usize,
    /// Content measurement parameters for self-sizing.
    pub metrics: ItemMetrics,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            tab_bar_height: 60.0,
            line_height: 2.0,
            line_background_height: 1.0,
            arranged_direction: ArrangedDirection::Horizontal,
            default_select_page: 0,
            metrics: ItemMetrics::default(),
        }
    }
}
