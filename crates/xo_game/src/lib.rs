//! Terminal front end for the timed tic-tac-toe game.
//!
//! Wires an [`xo_core::GameSession`] to a ratatui screen, a tokio interval
//! clock and the terminal bell.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod audio;
mod cli;
mod config;
mod input;
pub mod logging;
mod runner;
pub mod ui;

pub use app::{App, status_message};
pub use audio::TerminalBell;
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, SoundConfig};
pub use input::{Action, Direction, action_for, move_cursor};
pub use runner::{run, run_app};
