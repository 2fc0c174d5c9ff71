//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rd_core::{DailyGoal, InvalidGoal};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reading goal in hours, used for goal progress.
    pub daily_goal_hours: f64,

    /// Print the day's quote when a session shell opens.
    pub show_quote_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_goal_hours: 1.0,
            show_quote_on_start: true,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (RD_*)
        figment = figment.merge(Env::prefixed("RD_"));

        figment.extract()
    }

    /// The configured goal, validated.
    pub fn goal(&self) -> Result<DailyGoal, InvalidGoal> {
        DailyGoal::from_hours(self.daily_goal_hours)
    }
}

/// Returns the platform-specific config directory for rd.
///
/// On Linux: `~/.config/rd`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rd"))
}
