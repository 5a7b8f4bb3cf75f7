use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Interactive view poll cadence.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Passive widget loop cadence. Independent of the interactive cadence
    /// on purpose: status-bar hosts dictate their own refresh contract.
    #[serde(default = "default_widget_interval_ms")]
    pub widget_interval_ms: u64,

    /// Delay between issuing a playback command and the follow-up poll.
    #[serde(default = "default_command_refresh_delay_ms")]
    pub command_refresh_delay_ms: u64,

    /// Upper bound on a single osascript round-trip.
    #[serde(default = "default_automation_timeout_ms")]
    pub automation_timeout_ms: u64,

    #[serde(default = "default_true")]
    pub show_artwork: bool,
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_widget_interval_ms() -> u64 {
    5000
}

fn default_command_refresh_delay_ms() -> u64 {
    500
}

fn default_automation_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            widget_interval_ms: default_widget_interval_ms(),
            command_refresh_delay_ms: default_command_refresh_delay_ms(),
            automation_timeout_ms: default_automation_timeout_ms(),
            show_artwork: true,
        }
    }
}

impl AppConfig {
    pub fn config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunebar");
        std::fs::create_dir_all(&path).ok();
        path
    }

    pub fn get_config_path() -> PathBuf {
        let mut path = Self::config_dir();
        path.push("config.toml");
        path
    }

    pub fn load() -> Self {
        let path = Self::get_config_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}
