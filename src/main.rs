//! Dados - interactive dice game binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use dados::{Dice, GameSession, PlayerRepository, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(db_path = %cli.db_path, "Starting dados");

    let repository = PlayerRepository::new(cli.db_path)?;
    let mut session = GameSession::new(repository, Dice::new(), StdConsole::new());

    session.start()?;
    session.run()?;

    Ok(())
}
