//! Database persistence layer for player records.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use repository::PlayerRepository;
