use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Interactive counter with step control, history, and debounced saves.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial step applied per increment/decrement.
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// Debounce window before a change is persisted, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub save_delay_ms: Option<u64>,

    /// Snapshot file location.
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,
}

impl Cli {
    /// Fold CLI overrides into a loaded config. Flags win over file values.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(step) = self.step {
            config.initial_step = step;
        }
        if let Some(delay) = self.save_delay_ms {
            config.save_delay_ms = delay;
        }
        if let Some(path) = &self.snapshot {
            config.snapshot_path = Some(path.clone());
        }
        config
    }
}
