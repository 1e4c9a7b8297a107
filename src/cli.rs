use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "statepad",
    version,
    about = "Two state-management patterns over an append-only number list"
)]
pub struct Cli {
    /// Screen to open on startup.
    #[arg(long, value_enum, default_value_t = StartScreen::Landing)]
    pub screen: StartScreen,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Landing,
    Snapshot,
    Reducer,
}
