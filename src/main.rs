use anyhow::Context;
use clap::Parser;

use tally::cli::Cli;
use tally::config::Config;
use tally::logging::init_tracing;
use tally::persist::SnapshotStore;
use tally::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    // Flags bypass the load-time validation, so re-check the merged result.
    let config = cli.apply(config);
    config.validate().context("validating config")?;

    let snapshot_path = config
        .snapshot_path
        .clone()
        .unwrap_or_else(SnapshotStore::default_path);
    let store = SnapshotStore::new(snapshot_path);

    runtime::run(&config, store).context("running counter UI")?;
    Ok(())
}
