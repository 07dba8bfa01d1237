//! Dados - an interactive dice game with persisted player statistics.
//!
//! A player registers or resumes an identity, picks one of three difficulty
//! tiers, and tries to hit the tier's dice win condition within three
//! attempts. Outcomes accumulate in a durable per-player record of wins,
//! losses, and level history.
//!
//! # Architecture
//!
//! - **Session**: the interactive state machine (registration, menu,
//!   rounds, replay, persistence)
//! - **Db**: diesel/sqlite persistence of player records
//! - **Dice/Tier**: roll production and win-condition evaluation
//! - **Console/Score**: operator I/O and score rendering collaborators

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod db;
mod dice;
mod player;
mod score;
mod session;
mod tier;

pub use console::{Console, StdConsole};
pub use db::{DbError, PlayerRepository};
pub use dice::{Dice, Roll};
pub use player::Player;
pub use score::ScoreBoard;
pub use session::{GameSession, RoundOutcome, SessionError};
pub use tier::Tier;
