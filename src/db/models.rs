//! Database row model and conversion to the domain player.

use std::str::FromStr;

use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};
use crate::{Player, Tier};

/// Raw `jugadores` row as stored.
///
/// The history column holds tier labels joined with commas; the domain
/// [`Player`] carries the decoded sequence.
#[derive(Debug, Clone, Queryable, Insertable, Identifiable, Selectable, new)]
#[diesel(table_name = schema::jugadores)]
#[diesel(primary_key(nombre))]
pub struct PlayerRow {
    nombre: String,
    iniciales: String,
    fecha_nacimiento: String,
    victorias: i32,
    derrotas: i32,
    niveles_jugados: String,
}

impl PlayerRow {
    /// Encodes a domain player for storage.
    pub fn from_player(player: &Player) -> Self {
        Self::new(
            player.name().clone(),
            player.initials().clone(),
            player.birth_date().clone(),
            *player.wins(),
            *player.losses(),
            encode_levels(player.levels_played()),
        )
    }

    /// Decodes the stored row into a domain player.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the history column holds an unknown tier label.
    pub fn into_player(self) -> Result<Player, DbError> {
        let levels = decode_levels(&self.niveles_jugados)?;
        Ok(Player::new(
            self.nombre,
            self.iniciales,
            self.fecha_nacimiento,
            self.victorias,
            self.derrotas,
            levels,
        ))
    }
}

/// Joins tier labels with commas; an empty history encodes as the empty string.
pub(crate) fn encode_levels(levels: &[Tier]) -> String {
    levels.iter().map(Tier::to_string).collect::<Vec<_>>().join(",")
}

/// Splits a comma-joined label list back into tiers.
///
/// Splitting the empty string would yield one empty element, so empty input
/// is special-cased to an empty history.
pub(crate) fn decode_levels(encoded: &str) -> Result<Vec<Tier>, DbError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    encoded
        .split(',')
        .map(|label| {
            Tier::from_str(label).map_err(|_| DbError::new(format!("Invalid tier label: '{label}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_round_trips() {
        assert_eq!(encode_levels(&[]), "");
        assert!(decode_levels("").expect("Decode failed").is_empty());
    }

    #[test]
    fn history_round_trips_in_order() {
        let levels = vec![Tier::Novato, Tier::Experto, Tier::Novato];
        let encoded = encode_levels(&levels);
        assert_eq!(encoded, "novato,experto,novato");
        assert_eq!(decode_levels(&encoded).expect("Decode failed"), levels);
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(decode_levels("novato,legendario").is_err());
    }
}
