use anyhow::Context as _;
use clap::Parser as _;

use statepad::cli::Cli;
use statepad::config::Config;
use statepad::logging::init_tracing;
use statepad::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading configuration")?,
        None => Config::load().context("loading configuration")?,
    };

    runtime::run(config, cli.screen).context("running terminal UI")?;
    Ok(())
}
