//! xo_game - timed tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use xo_game::{Cli, Command, GameConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    config.validate()?;

    match cli.command.unwrap_or_default() {
        Command::Play => {
            logging::init(config.log_file())?;
            info!("Starting xo_game");
            xo_game::run(&config).await
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
