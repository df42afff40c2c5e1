//! Arena - plays gambit search algorithms against each other
//!
//! A one-shot process that:
//! 1. Loads config.toml (with GAMBIT_* overrides) and command-line flags
//! 2. Builds the two contenders (mcts, minimax or random)
//! 3. Plays the configured number of games of the chosen game
//! 4. Logs the win/draw tally

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod config;
mod contender;
mod series;

use crate::config::Config;
use crate::contender::Contender;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let left = Contender::build(config.left_kind()?, &config);
    let right = Contender::build(config.right_kind()?, &config);
    info!(
        game = %config.game,
        games = config.games,
        left = left.name(),
        right = right.name(),
        first_player = %config.first_player,
        "Starting series"
    );

    match series::run(
        config.game_kind()?,
        config.games,
        config.first_player_rule()?,
        left,
        right,
    ) {
        Ok(_) => {
            info!("Arena completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Arena failed: {}", e);
            Err(e)
        }
    }
}
