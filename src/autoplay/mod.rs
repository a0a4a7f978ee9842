//! Scripted play: strategies, a session runner and result summaries.
//!
//! ## Components
//!
//! - `GuessStrategy`: picks a direction from the visible points
//! - `play_session`: drives one session to the end through `RulesEngine`
//! - `evaluate`: plays every strategy over the same seeded datasets
//! - `StrategySummary`: totals per strategy
//!
//! Autoplay goes through the same engine calls as a human player, so it
//! doubles as an end-to-end exercise of the rules.

pub mod runner;
pub mod stats;
pub mod strategy;

pub use runner::{evaluate, play_session, AutoplayConfig, SessionRecord};
pub use stats::StrategySummary;
pub use strategy::{Constant, Contrarian, FollowTrend, GuessStrategy, RandomGuess, StrategyKind};
