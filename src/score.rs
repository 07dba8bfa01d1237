//! Tabular score rendering.

use std::fmt;

use derive_getters::Getters;

use crate::{Player, Tier};

/// Snapshot of one player's record, ready for display.
///
/// Per-tier counts are derived from the play history by exact label match;
/// layout is purely a presentation concern.
#[derive(Debug, Clone, Getters)]
pub struct ScoreBoard {
    name: String,
    wins: i32,
    losses: i32,
    per_tier: Vec<(Tier, usize)>,
}

impl ScoreBoard {
    /// Builds the score snapshot for a player.
    pub fn for_player(player: &Player) -> Self {
        let per_tier = Tier::ALL
            .iter()
            .map(|tier| (*tier, player.level_count(*tier)))
            .collect();

        Self {
            name: player.name().clone(),
            wins: *player.wins(),
            losses: *player.losses(),
            per_tier,
        }
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "======== Score =========")?;
        writeln!(f, "{:<16}{}", "Name", self.name)?;
        writeln!(f, "{:<16}{}", "Wins", self.wins)?;
        writeln!(f, "{:<16}{}", "Losses", self.losses)?;
        writeln!(f, "Levels played")?;
        for (tier, count) in &self.per_tier {
            writeln!(f, "  {:<14}{}", tier.to_string(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counters_and_per_tier_counts() {
        let mut player = Player::register(
            "Ana".to_string(),
            "APG".to_string(),
            "01/01/1990".to_string(),
        );
        player.record_win(Tier::Novato);
        player.record_win(Tier::Normal);
        player.record_loss(Tier::Normal);

        let board = ScoreBoard::for_player(&player);
        assert_eq!(board.name(), "Ana");
        assert_eq!(*board.wins(), 2);
        assert_eq!(*board.losses(), 1);

        let rendered = board.to_string();
        assert!(rendered.contains("Ana"));
        assert!(rendered.contains("Levels played"));
        assert!(rendered.contains("novato"));
        assert!(rendered.contains("normal"));
        assert!(rendered.contains("experto"));
    }

    #[test]
    fn fresh_player_renders_zero_counts() {
        let player = Player::register(
            "Blas".to_string(),
            "BBB".to_string(),
            "02/02/1992".to_string(),
        );
        let board = ScoreBoard::for_player(&player);
        for (_, count) in board.per_tier() {
            assert_eq!(*count, 0);
        }
    }
}
