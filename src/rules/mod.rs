//! Rules engine trait for trend games.
//!
//! Games implement `RulesEngine` to define:
//! - Legal guesses for each game state
//! - How a guess modifies state
//! - When the game ends
//!
//! Drivers (CLI, Python, autoplay) call into `RulesEngine` and never
//! touch `GameState` fields directly.

pub mod engine;

pub use engine::{compose_feedback, GameResult, GuessOutcome, RulesEngine, END_OF_GAME_NOTICE};
