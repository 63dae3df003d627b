//! Command-line interface for xo_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against the clock
#[derive(Parser, Debug)]
#[command(name = "xo_game")]
#[command(about = "Two-player tic-tac-toe with a shared countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seconds on the clock, overriding the config file
    #[arg(long, global = true)]
    pub time_limit: Option<u32>,

    /// Turn off every sound cue
    #[arg(long, global = true)]
    pub mute: bool,

    /// Where to write logs while the game is on screen
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a game in the terminal
    #[default]
    Play,

    /// Print the effective configuration as TOML and exit
    ShowConfig,
}
