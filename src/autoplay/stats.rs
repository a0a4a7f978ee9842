//! Aggregated autoplay results.

use serde::{Deserialize, Serialize};

use super::runner::SessionRecord;
use super::strategy::StrategyKind;

/// Totals for one strategy across many sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: StrategyKind,

    /// Sessions played.
    pub sessions: usize,

    /// Guesses made across all sessions.
    pub guesses: usize,

    /// Correct guesses across all sessions.
    pub correct: usize,

    /// Sessions where every guess was right.
    pub perfect_sessions: usize,

    /// Best single-session score.
    pub best_score: u32,
}

impl StrategySummary {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            sessions: 0,
            guesses: 0,
            correct: 0,
            perfect_sessions: 0,
            best_score: 0,
        }
    }

    /// Fold one session in.
    pub fn record(&mut self, session: &SessionRecord) {
        self.sessions += 1;
        self.guesses += session.guesses();
        self.correct += session.score as usize;
        if session.score as usize == session.guesses() {
            self.perfect_sessions += 1;
        }
        self.best_score = self.best_score.max(session.score);
    }

    /// Correct guesses over all guesses.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.guesses == 0 {
            0.0
        } else {
            self.correct as f64 / self.guesses as f64
        }
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.correct as f64 / self.sessions as f64
        }
    }
}
