//! Trend directions.
//!
//! A `Direction` is both what the player guesses and what the data does
//! between two consecutive points. Guesses are scored with strict
//! inequalities, not by comparing labels: an exact tie is labelled
//! `Decrease` but satisfies neither guess.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Direction of change between two consecutive values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Both directions, in button order.
    pub const ALL: [Direction; 2] = [Direction::Increase, Direction::Decrease];

    /// Label the change from `current` to `next`.
    ///
    /// `Increase` iff `next > current`; ties are labelled `Decrease`.
    #[must_use]
    pub fn between(current: f64, next: f64) -> Self {
        if next > current {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    /// Whether a guess of `self` is correct for the change `current -> next`.
    ///
    /// Ties are wrong for both directions.
    #[must_use]
    pub fn holds(self, current: f64, next: f64) -> bool {
        match self {
            Direction::Increase => next > current,
            Direction::Decrease => next < current,
        }
    }

    /// The other direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Increase => Direction::Decrease,
            Direction::Decrease => Direction::Increase,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Increase => "Increase",
            Direction::Decrease => "Decrease",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts `increase`/`up`/`i`/`+` and `decrease`/`down`/`d`/`-`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increase" | "up" | "i" | "+" => Ok(Direction::Increase),
            "decrease" | "down" | "d" | "-" => Ok(Direction::Decrease),
            _ => Err(GameError::InvalidGuess(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert_eq!(Direction::between(0.25, 0.29), Direction::Increase);
        assert_eq!(Direction::between(0.50, 0.40), Direction::Decrease);
        assert_eq!(Direction::between(1.0, 1.0), Direction::Decrease);
    }

    #[test]
    fn test_ties_never_hold() {
        assert!(!Direction::Increase.holds(1.0, 1.0));
        assert!(!Direction::Decrease.holds(1.0, 1.0));
    }

    #[test]
    fn test_holds_matches_label_off_ties() {
        for (a, b) in [(0.1, 0.2), (0.2, 0.1), (-1.0, 3.0)] {
            let label = Direction::between(a, b);
            assert!(label.holds(a, b));
            assert!(!label.opposite().holds(a, b));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("increase".parse::<Direction>().unwrap(), Direction::Increase);
        assert_eq!(" UP ".parse::<Direction>().unwrap(), Direction::Increase);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Decrease);
        assert_eq!("Decrease".parse::<Direction>().unwrap(), Direction::Decrease);

        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(matches!(err, GameError::InvalidGuess(s) if s == "sideways"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Increase.to_string(), "Increase");
        assert_eq!(Direction::Decrease.to_string(), "Decrease");
    }
}
