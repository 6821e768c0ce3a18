use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Debounce window before a change is persisted, in milliseconds
    /// (default: 500).
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
    /// Step applied per increment/decrement (default: 1).
    #[serde(default = "default_initial_step")]
    pub initial_step: i64,
    /// Snapshot file location. Defaults to the platform data dir.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_save_delay_ms() -> u64 {
    500
}

fn default_initial_step() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            save_delay_ms: default_save_delay_ms(),
            initial_step: default_initial_step(),
            snapshot_path: None,
        }
    }
}
