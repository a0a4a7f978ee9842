//! # trend-guess
//!
//! A guess-the-trend game: a series of yearly values is revealed one
//! point at a time and the player predicts whether the next value will
//! increase or decrease.
//!
//! ## Design Principles
//!
//! 1. **One Writer**: Only the rules engine mutates `GameState`, and each
//!    guess is applied completely or not at all.
//!
//! 2. **Literal Scoring**: `Increase` is correct iff `next > current`,
//!    `Decrease` iff `next < current`. Exact ties score for neither.
//!
//! 3. **Validated Up Front**: Datasets are checked when a game is built;
//!    nothing is re-checked mid-session.
//!
//! ## Example
//!
//! ```
//! use trend_guess::{Direction, Session};
//!
//! let mut session = Session::with_default_dataset()?;
//! assert_eq!(session.visible_points().count(), 1);
//!
//! let outcome = session.submit_guess(Direction::Increase)?;
//! assert!(outcome.correct);
//! assert_eq!(outcome.feedback, "Correct! Your score is now 1.");
//! # Ok::<(), trend_guess::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Dataset, directions, state, RNG, configuration
//! - `rules`: RulesEngine trait and guess outcomes
//! - `games`: The trend game itself
//! - `session`: Owned sessions, snapshots and the in-memory store
//! - `autoplay`: Scripted strategies and batch evaluation

pub mod autoplay;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    ChartLabels, DataPoint, Dataset, DatasetSource, Direction, GameConfig, GameRng, GameState,
    GuessRecord, Phase, RandomWalkConfig,
};

pub use crate::error::{GameError, Result};

pub use crate::rules::{GameResult, GuessOutcome, RulesEngine};

pub use crate::games::trend::{TrendGame, TrendGameBuilder};

pub use crate::session::{Session, SessionId, SessionStore};

pub use crate::autoplay::{
    evaluate, play_session, AutoplayConfig, GuessStrategy, SessionRecord, StrategyKind,
    StrategySummary,
};
