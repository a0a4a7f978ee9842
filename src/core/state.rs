//! Session game state.
//!
//! ## GameState
//!
//! - Reveal position (index of the last visible point)
//! - Score (count of correct guesses)
//! - Guess history
//!
//! Fields are private: the only writer is the rules engine, through
//! `commit`, which updates position, score and history in one step.
//! `score <= position` holds for every reachable state.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dataset::{DataPoint, Dataset};
use super::trend::Direction;

/// Logical phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// At least one guess remains.
    Playing,
    /// Position is on the last point. Terminal.
    Finished,
}

/// One applied guess.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Position the guess was made from.
    pub position: usize,
    /// Point visible when guessing.
    pub from: DataPoint,
    /// Point revealed by the guess.
    pub to: DataPoint,
    pub guess: Direction,
    /// Trend label of `from -> to` (ties are `Decrease`).
    pub actual: Direction,
    pub correct: bool,
}

impl GuessRecord {
    /// Whether replaying this guess over `from -> to` gives the same record.
    fn replays(&self, from: Option<&DataPoint>, to: Option<&DataPoint>) -> bool {
        match (from, to) {
            (Some(from), Some(to)) => {
                self.from == *from
                    && self.to == *to
                    && self.actual == Direction::between(from.value, to.value)
                    && self.correct == self.guess.holds(from.value, to.value)
            }
            _ => false,
        }
    }
}

/// Mutable state of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    position: usize,
    score: u32,
    last_index: usize,
    history: Vector<GuessRecord>,
}

impl GameState {
    /// Fresh state for `dataset`: position 0, score 0.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            position: 0,
            score: 0,
            last_index: dataset.last_index(),
            history: Vector::new(),
        }
    }

    /// Index of the last visible point.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of correct guesses.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index of the dataset's last point.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.position >= self.last_index {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Guesses left before the session finishes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.last_index.saturating_sub(self.position)
    }

    /// Applied guesses in order.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Fraction of applied guesses that were correct; 0.0 before any guess.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            f64::from(self.score) / self.history.len() as f64
        }
    }

    /// Apply one guess: advance by one, score if correct, record it.
    ///
    /// Callers must have checked the state is `Playing`.
    pub(crate) fn commit(&mut self, record: GuessRecord) {
        debug_assert_eq!(record.position, self.position);
        debug_assert!(self.position < self.last_index);

        let mut next = self.clone();
        next.position += 1;
        if record.correct {
            next.score += 1;
        }
        next.history.push_back(record);
        *self = next;
    }

    /// Whether this state could have been produced by playing `dataset`.
    #[must_use]
    pub fn is_consistent_with(&self, dataset: &Dataset) -> bool {
        self.last_index == dataset.last_index()
            && self.position <= self.last_index
            && self.history.len() == self.position
            && self.score as usize == self.history.iter().filter(|r| r.correct).count()
            && self
                .history
                .iter()
                .enumerate()
                .all(|(i, r)| r.position == i && r.replays(dataset.get(i), dataset.get(i + 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(position: usize, correct: bool) -> GuessRecord {
        GuessRecord {
            position,
            from: DataPoint::new(2000 + position as i32, 0.0),
            to: DataPoint::new(2001 + position as i32, 1.0),
            guess: Direction::Increase,
            actual: Direction::Increase,
            correct,
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Dataset::temperature_anomalies());
        assert_eq!(state.position(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.last_index(), 9);
        assert_eq!(state.remaining(), 9);
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.history().is_empty());
        assert_eq!(state.accuracy(), 0.0);
    }

    #[test]
    fn test_commit() {
        let dataset = Dataset::from_pairs(&[(2000, 0.0), (2001, 1.0), (2002, 2.0)]).unwrap();
        let mut state = GameState::new(&dataset);

        state.commit(record(0, true));
        assert_eq!(state.position(), 1);
        assert_eq!(state.score(), 1);
        assert!(!state.is_finished());

        state.commit(record(1, false));
        assert_eq!(state.position(), 2);
        assert_eq!(state.score(), 1);
        assert!(state.is_finished());
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.accuracy(), 0.5);
    }

    #[test]
    fn test_consistency_check() {
        let dataset = Dataset::from_pairs(&[(2000, 0.0), (2001, 1.0)]).unwrap();
        let fresh = GameState::new(&dataset);
        assert!(fresh.is_consistent_with(&dataset));
        assert!(!fresh.is_consistent_with(&Dataset::temperature_anomalies()));
    }

    #[test]
    fn test_consistency_replays_history() {
        let dataset = Dataset::from_pairs(&[(2000, 0.0), (2001, 1.0), (2002, 0.5)]).unwrap();
        let points: Vec<_> = dataset.iter().copied().collect();
        let played = |guess: Direction, i: usize| GuessRecord {
            position: i,
            from: points[i],
            to: points[i + 1],
            guess,
            actual: Direction::between(points[i].value, points[i + 1].value),
            correct: guess.holds(points[i].value, points[i + 1].value),
        };

        let mut state = GameState::new(&dataset);
        state.commit(played(Direction::Increase, 0));
        state.commit(played(Direction::Increase, 1));
        assert!(state.is_consistent_with(&dataset));

        // Revealed point that is not in the dataset.
        let mut bad_to = GameState::new(&dataset);
        bad_to.commit(GuessRecord {
            to: DataPoint::new(2001, 9.0),
            ..played(Direction::Increase, 0)
        });
        assert!(!bad_to.is_consistent_with(&dataset));

        // Wrong guess marked correct, with the score to match.
        let mut inflated = GameState::new(&dataset);
        inflated.commit(GuessRecord {
            correct: true,
            ..played(Direction::Decrease, 0)
        });
        assert_eq!(inflated.score(), 1);
        assert!(!inflated.is_consistent_with(&dataset));

        // Mislabelled actual trend.
        let mut mislabelled = GameState::new(&dataset);
        mislabelled.commit(GuessRecord {
            actual: Direction::Decrease,
            ..played(Direction::Increase, 0)
        });
        assert!(!mislabelled.is_consistent_with(&dataset));
    }

    #[test]
    fn test_serde_roundtrip() {
        let state = GameState::new(&Dataset::temperature_anomalies());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
