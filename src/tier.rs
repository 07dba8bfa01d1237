//! Difficulty tiers and their win conditions.

use strum::{Display, EnumString};

/// One of the three fixed difficulty tiers.
///
/// Tiers are an explicit ordered enumeration; the menu mapping below is the
/// single source of truth for the `1`/`2`/`3` choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    /// One die, win on a 6.
    Novato,
    /// Two dice, win on a sum of 7.
    Normal,
    /// Three dice, win on a sum of 15.
    Experto,
}

impl Tier {
    /// All tiers in menu order.
    pub const ALL: [Tier; 3] = [Tier::Novato, Tier::Normal, Tier::Experto];

    /// Maps a numeric menu choice (`"1"`..`"3"`) to a tier.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Novato),
            "2" => Some(Self::Normal),
            "3" => Some(Self::Experto),
            _ => None,
        }
    }

    /// Number of dice rolled per attempt.
    pub fn dice_count(&self) -> usize {
        match self {
            Self::Novato => 1,
            Self::Normal => 2,
            Self::Experto => 3,
        }
    }

    /// Sum the rolled values must reach to win an attempt.
    pub fn target(&self) -> u32 {
        match self {
            Self::Novato => 6,
            Self::Normal => 7,
            Self::Experto => 15,
        }
    }

    /// Whether one attempt's rolls satisfy this tier's win condition.
    pub fn is_win(&self, rolls: &[u8]) -> bool {
        rolls.len() == self.dice_count()
            && rolls.iter().map(|r| u32::from(*r)).sum::<u32>() == self.target()
    }
}
