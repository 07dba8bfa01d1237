//! Command-line interface for dados.

use clap::Parser;

/// Dados - interactive dice game with persisted player statistics
#[derive(Parser, Debug)]
#[command(name = "dados")]
#[command(about = "Interactive dice game with persisted player statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the database file (created if it doesn't exist)
    #[arg(long, default_value = "jugadores.db")]
    pub db_path: String,
}
