//! Durable repository for player records.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::Player;
use crate::db::models::{PlayerRow, encode_levels};
use crate::db::{DbError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Durable store of player records keyed by name.
///
/// Each operation opens its own connection; the session accesses the store
/// strictly sequentially.
#[derive(Debug, Clone)]
pub struct PlayerRepository {
    db_path: String,
}

impl PlayerRepository {
    /// Creates a repository over the database at the given path, creating
    /// the `jugadores` table if absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating PlayerRepository");
        let repository = Self { db_path };

        let mut conn = repository.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {e}")))?;

        Ok(repository)
    }

    /// Establishes a database connection.
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Looks up a player by exact name. Returns `None` when no row matches;
    /// absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs or the stored history
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub fn find_by_name(&self, name: &str) -> Result<Option<Player>, DbError> {
        debug!(name = %name, "Looking up player by name");
        let mut conn = self.connection()?;

        let row = schema::jugadores::table
            .find(name)
            .first::<PlayerRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                debug!("Player found");
                Ok(Some(row.into_player()?))
            }
            None => {
                debug!("Player not found");
                Ok(None)
            }
        }
    }

    /// Inserts the player, replacing any existing row with the same name.
    /// Idempotent for identical data.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, player), fields(name = %player.name()))]
    pub fn upsert(&self, player: &Player) -> Result<(), DbError> {
        debug!("Upserting player");
        let mut conn = self.connection()?;

        diesel::replace_into(schema::jugadores::table)
            .values(PlayerRow::from_player(player))
            .execute(&mut conn)?;

        info!(name = %player.name(), "Player stored");
        Ok(())
    }

    /// Overwrites the counters and history for the row matching the
    /// player's name, leaving the identity columns untouched.
    ///
    /// A name with no matching row means registration never happened; the
    /// miss is logged and the call is otherwise a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, player), fields(name = %player.name()))]
    pub fn update_stats(&self, player: &Player) -> Result<(), DbError> {
        debug!("Updating player statistics");
        let mut conn = self.connection()?;

        let updated = diesel::update(schema::jugadores::table.find(player.name()))
            .set((
                schema::jugadores::victorias.eq(player.wins()),
                schema::jugadores::derrotas.eq(player.losses()),
                schema::jugadores::niveles_jugados.eq(encode_levels(player.levels_played())),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            warn!(name = %player.name(), "No row matched; statistics not stored");
        } else {
            info!(
                name = %player.name(),
                wins = *player.wins(),
                losses = *player.losses(),
                "Statistics updated"
            );
        }
        Ok(())
    }
}
