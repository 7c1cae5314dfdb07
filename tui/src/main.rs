use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use valuation::{AppConfig, Artifacts};

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("cannot build configuration")?;
    init_logging(&config.log_path)?;

    let artifacts = Artifacts::load(&config).context("cannot load static artifacts")?;
    app::run::run(&artifacts, &config)
}

/// Sends log records to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file '{}'", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
