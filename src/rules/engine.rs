//! Rules engine trait for trend games.
//!
//! Games implement `RulesEngine` to define:
//! - Which guesses are legal in a state
//! - How a guess changes the state
//! - When the game is over

use smallvec::SmallVec;

use crate::core::{DataPoint, Dataset, Direction, GameConfig, GameState};
use crate::error::Result;

/// Appended to the feedback of the guess that reveals the last point.
pub const END_OF_GAME_NOTICE: &str = " You've reached the end of the game!";

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Correct guesses.
    pub score: u32,
    /// Guesses made (dataset length - 1).
    pub guesses: usize,
}

impl GameResult {
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.guesses == 0 {
            0.0
        } else {
            f64::from(self.score) / self.guesses as f64
        }
    }

    /// Every guess was right.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score as usize == self.guesses
    }
}

/// What one applied guess produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GuessOutcome {
    pub guess: Direction,
    pub correct: bool,
    /// Trend label of the revealed step (ties are `Decrease`).
    pub actual: Direction,
    /// The point this guess revealed.
    pub revealed: DataPoint,
    /// Score after the guess.
    pub score: u32,
    /// Position after the guess.
    pub position: usize,
    /// The guess revealed the last point.
    pub finished: bool,
    /// Human-readable message for the player.
    pub feedback: String,
}

/// Build the player-facing message for a guess.
#[must_use]
pub fn compose_feedback(correct: bool, score: u32, actual: Direction, finished: bool) -> String {
    let mut feedback = if correct {
        format!("Correct! Your score is now {score}.")
    } else {
        format!("Wrong! The correct trend was {actual}.")
    };
    if finished {
        feedback.push_str(END_OF_GAME_NOTICE);
    }
    feedback
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_guess` must either fully apply a guess or leave the state
///   untouched and return an error
/// - `apply_guess` on a finished state returns `GameError::GameFinished`
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Apply a guess to the state.
    fn apply_guess(&self, state: &mut GameState, guess: Direction) -> Result<GuessOutcome>;

    // === Convenience Methods ===

    /// The series being revealed.
    fn dataset(&self) -> &Dataset {
        &self.config().dataset
    }

    /// Guesses the player may make. Empty once finished.
    fn legal_guesses(&self, state: &GameState) -> SmallVec<[Direction; 2]> {
        if state.is_finished() {
            SmallVec::new()
        } else {
            SmallVec::from_slice(&Direction::ALL)
        }
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_finished().then(|| GameResult {
            score: state.score(),
            guesses: state.history().len(),
        })
    }
}
