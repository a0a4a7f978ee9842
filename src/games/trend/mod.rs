//! Guess-the-trend game.
//!
//! - A dataset of yearly values is revealed one point at a time
//! - Each turn the player guesses whether the next value rises or falls
//! - A correct guess scores one point; exact ties are never correct
//! - The game ends when the last point is visible

mod game;

pub use game::{TrendGame, TrendGameBuilder};
