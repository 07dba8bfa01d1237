//! In-memory player identity and cumulative statistics.

use derive_getters::Getters;
use derive_new::new;

use crate::Tier;

/// One player's identity and cumulative record.
///
/// `name` is the immutable join key with the durable store. Counters only
/// increase, and each resolved round appends exactly one history entry, so
/// `wins + losses` always equals the history length.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    name: String,
    initials: String,
    birth_date: String,
    wins: i32,
    losses: i32,
    levels_played: Vec<Tier>,
}

impl Player {
    /// Creates a fresh record with zero counters and an empty history.
    pub fn register(name: String, initials: String, birth_date: String) -> Self {
        Self::new(name, initials, birth_date, 0, 0, Vec::new())
    }

    /// Records a won round at the given tier.
    pub fn record_win(&mut self, tier: Tier) {
        self.wins += 1;
        self.levels_played.push(tier);
    }

    /// Records a lost round at the given tier.
    pub fn record_loss(&mut self, tier: Tier) {
        self.losses += 1;
        self.levels_played.push(tier);
    }

    /// Number of rounds played at the given tier.
    pub fn level_count(&self, tier: Tier) -> usize {
        self.levels_played.iter().filter(|t| **t == tier).count()
    }

    /// Total rounds resolved for this player.
    pub fn rounds_played(&self) -> usize {
        self.levels_played.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Player {
        Player::register("Ana".to_string(), "APG".to_string(), "01/01/1990".to_string())
    }

    #[test]
    fn registration_starts_from_zero() {
        let player = ana();
        assert_eq!(*player.wins(), 0);
        assert_eq!(*player.losses(), 0);
        assert!(player.levels_played().is_empty());
    }

    #[test]
    fn each_round_appends_exactly_one_history_entry() {
        let mut player = ana();
        player.record_win(Tier::Novato);
        player.record_loss(Tier::Novato);
        player.record_win(Tier::Experto);

        assert_eq!(*player.wins(), 2);
        assert_eq!(*player.losses(), 1);
        assert_eq!(player.rounds_played(), 3);
        assert_eq!(
            (*player.wins() + *player.losses()) as usize,
            player.levels_played().len()
        );
    }

    #[test]
    fn level_counts_match_history() {
        let mut player = ana();
        player.record_win(Tier::Normal);
        player.record_loss(Tier::Normal);
        player.record_win(Tier::Novato);

        assert_eq!(player.level_count(Tier::Novato), 1);
        assert_eq!(player.level_count(Tier::Normal), 2);
        assert_eq!(player.level_count(Tier::Experto), 0);
    }
}
