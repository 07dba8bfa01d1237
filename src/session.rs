//! Interactive game session state machine.

use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, PlayerRepository};
use crate::{Console, Player, Roll, ScoreBoard, Tier};

/// Fixed attempt budget per round.
const ATTEMPTS_PER_ROUND: usize = 3;

/// Session-fatal error: persistence or operator I/O failure.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The durable store failed.
    #[display("{_0}")]
    Db(DbError),
    /// The operator console failed.
    #[display("Console error: {_0}")]
    Io(std::io::Error),
}

/// Result of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// An attempt satisfied the tier's win condition.
    Win,
    /// All attempts were consumed without a win.
    Loss,
}

/// Orchestrates registration, the menu loop, rounds, and persistence.
///
/// The active player is explicit session state; nothing is shared between
/// sessions beyond the durable store. Invalid operator input is always
/// handled by reprompting in a loop, never by recursion.
#[derive(Debug)]
pub struct GameSession<R, C> {
    repository: PlayerRepository,
    dice: R,
    console: C,
    active_player: Option<Player>,
}

impl<R: Roll, C: Console> GameSession<R, C> {
    /// Creates a session with no active player.
    pub fn new(repository: PlayerRepository, dice: R, console: C) -> Self {
        info!("Creating game session");
        Self {
            repository,
            dice,
            console,
            active_player: None,
        }
    }

    /// The player currently bound to the session, if any.
    pub fn active_player(&self) -> Option<&Player> {
        self.active_player.as_ref()
    }

    /// Resolves the active player: resumes a registered player by name, or
    /// runs the registration flow. A lookup miss redirects to registration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on a store or console failure.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.ask_yes_no("Already registered? (y/n):")? {
            let name = self.console.prompt("Enter your name:")?;
            match self.repository.find_by_name(&name)? {
                Some(player) => {
                    info!(name = %player.name(), "Resumed registered player");
                    self.active_player = Some(player);
                }
                None => {
                    warn!(name = %name, "Player not found, redirecting to registration");
                    self.console.say("Player not found. Please register.");
                    self.register()?;
                }
            }
        } else {
            self.register()?;
        }
        Ok(())
    }

    /// Collects the registration fields, stores the fresh player, and
    /// re-reads the stored row as the active player.
    #[instrument(skip(self))]
    fn register(&mut self) -> Result<(), SessionError> {
        let name = self.console.prompt("Enter your name:")?;
        let initials = self.console.prompt("Enter your initials:")?;
        let birth_date = self.console.prompt("Enter your birth date (dd/mm/yyyy):")?;

        let player = Player::register(name, initials, birth_date);
        self.repository.upsert(&player)?;

        self.active_player = self.repository.find_by_name(player.name())?;
        info!(name = %player.name(), "Player registered");
        Ok(())
    }

    /// Runs the top-level menu until the operator confirms exit.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on a store or console failure.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.console.say("\n=== Dice Game ===");
            self.console.say("1. Play");
            self.console.say("2. Show score");
            self.console.say("3. Exit");
            let choice = self.console.prompt("Select an option:")?;

            match choice.as_str() {
                "1" => self.play_loop()?,
                "2" => self.show_score(),
                "3" => {
                    if self.ask_yes_no("Are you sure you want to exit? (y/n):")? {
                        self.console.say("Thanks for playing!");
                        info!("Session ended");
                        return Ok(());
                    }
                }
                other => {
                    debug!(choice = %other, "Unrecognized menu option");
                    self.console.say("Invalid option. Please choose 1, 2, or 3.");
                }
            }
        }
    }

    /// Plays rounds until the operator declines a replay, or until a round
    /// never started because the level selection was invalid.
    #[instrument(skip(self))]
    fn play_loop(&mut self) -> Result<(), SessionError> {
        loop {
            match self.play()? {
                Some(_) => {
                    if !self.ask_yes_no("Play again? (y/n):")? {
                        return Ok(());
                    }
                }
                None => return Ok(()),
            }
        }
    }

    /// Runs one round: level selection, up to three attempts, resolution,
    /// and persistence. Returns `None` when the level selection was invalid
    /// or no player is active (no state change either way).
    ///
    /// The replay prompt is deliberately left to the caller, so every
    /// resolved round is followed by exactly one invitation, after the
    /// statistics write, on both the win and the loss path.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on a store or console failure.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Option<RoundOutcome>, SessionError> {
        let name = match self.active_player.as_ref() {
            Some(player) => player.name().clone(),
            None => {
                self.console.say("Please register or enter your name first.");
                return Ok(None);
            }
        };

        self.console.say("\nWelcome to the dice game!");
        let choice = self
            .console
            .prompt("Select a level (1: novato, 2: normal, 3: experto):")?;
        let Some(tier) = Tier::from_menu_choice(&choice) else {
            debug!(choice = %choice, "Invalid level selection");
            self.console.say("Invalid level selection.");
            return Ok(None);
        };

        self.console
            .say(&format!("\nWelcome {name} to the {tier} level!"));

        let outcome = self.run_round(tier)?;
        self.resolve(tier, outcome)?;
        Ok(Some(outcome))
    }

    /// Runs up to three attempts, stopping early on the first win.
    fn run_round(&mut self, tier: Tier) -> Result<RoundOutcome, SessionError> {
        for attempt in 1..=ATTEMPTS_PER_ROUND {
            debug!(attempt, tier = %tier, "Starting attempt");
            let rolls = self.roll_attempt(tier)?;
            if tier.is_win(&rolls) {
                info!(attempt, tier = %tier, ?rolls, "Winning attempt");
                self.console.say("Congratulations! You won.");
                return Ok(RoundOutcome::Win);
            }
        }
        info!(tier = %tier, "No attempt won the round");
        self.console.say("Sorry, you lost.");
        Ok(RoundOutcome::Loss)
    }

    /// Rolls the tier's dice for one attempt, one pacing prompt per die.
    fn roll_attempt(&mut self, tier: Tier) -> Result<Vec<u8>, SessionError> {
        let mut rolls = Vec::with_capacity(tier.dice_count());
        for die in 1..=tier.dice_count() {
            self.console
                .prompt(&format!("Press Enter to roll die {die}..."))?;
            rolls.push(self.dice.roll());
        }

        if let [value] = rolls.as_slice() {
            self.console.say(&format!("Roll result: {value}"));
        } else {
            let total: u32 = rolls.iter().map(|r| u32::from(*r)).sum();
            let values = rolls
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.console.say(&format!("Results: {values} (total: {total})"));
        }
        Ok(rolls)
    }

    /// Applies the outcome to the active player and persists it: exactly
    /// one counter increment and one history entry per round, on both
    /// paths, before the write.
    fn resolve(&mut self, tier: Tier, outcome: RoundOutcome) -> Result<(), SessionError> {
        // play() guarantees an active player before a round can start.
        let Some(player) = self.active_player.as_mut() else {
            return Ok(());
        };

        match outcome {
            RoundOutcome::Win => player.record_win(tier),
            RoundOutcome::Loss => player.record_loss(tier),
        }
        self.repository.update_stats(player)?;

        info!(name = %player.name(), tier = %tier, ?outcome, "Round resolved and persisted");
        Ok(())
    }

    /// Renders the active player's score, or a guidance message when no
    /// player is bound yet.
    #[instrument(skip(self))]
    fn show_score(&mut self) {
        match self.active_player.as_ref() {
            Some(player) => {
                let board = ScoreBoard::for_player(player);
                self.console.say(&board.to_string());
            }
            None => {
                self.console
                    .say("Please register or enter your name to show a score.");
            }
        }
    }

    /// Asks a yes/no question, reprompting until the answer parses.
    fn ask_yes_no(&mut self, message: &str) -> Result<bool, SessionError> {
        loop {
            let answer = self.console.prompt(message)?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => {
                    debug!(answer = %other, "Unrecognized yes/no answer");
                    self.console.say("Invalid answer. Please enter 'y' or 'n'.");
                }
            }
        }
    }
}
