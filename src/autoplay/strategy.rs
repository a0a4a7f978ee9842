//! Scripted guessing strategies.
//!
//! A strategy sees exactly what a player sees (the visible prefix) and
//! returns a direction. Strategies are trait-based so new ones plug into
//! the runner without changes there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Direction, GameRng};
use crate::error::GameError;

/// Chooses a guess from the visible points.
pub trait GuessStrategy: Send {
    /// Short stable name.
    fn name(&self) -> &'static str;

    /// Pick a direction. `visible` is never empty.
    fn choose(&mut self, visible: &[DataPoint]) -> Direction;
}

/// Trend of the last visible step, if there is one.
fn last_trend(visible: &[DataPoint]) -> Option<Direction> {
    match visible {
        [.., prev, last] => Some(Direction::between(prev.value, last.value)),
        _ => None,
    }
}

/// Always guesses the same direction.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub Direction);

impl GuessStrategy for Constant {
    fn name(&self) -> &'static str {
        match self.0 {
            Direction::Increase => "always-increase",
            Direction::Decrease => "always-decrease",
        }
    }

    fn choose(&mut self, _visible: &[DataPoint]) -> Direction {
        self.0
    }
}

/// Repeats the last observed trend; guesses Increase with one point.
#[derive(Clone, Copy, Debug, Default)]
pub struct FollowTrend;

impl GuessStrategy for FollowTrend {
    fn name(&self) -> &'static str {
        "follow"
    }

    fn choose(&mut self, visible: &[DataPoint]) -> Direction {
        last_trend(visible).unwrap_or(Direction::Increase)
    }
}

/// Bets on reversal of the last observed trend; guesses Decrease with one
/// point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Contrarian;

impl GuessStrategy for Contrarian {
    fn name(&self) -> &'static str {
        "contrarian"
    }

    fn choose(&mut self, visible: &[DataPoint]) -> Direction {
        last_trend(visible).map_or(Direction::Decrease, Direction::opposite)
    }
}

/// Fair coin flip per guess.
#[derive(Clone, Debug)]
pub struct RandomGuess {
    rng: GameRng,
}

impl RandomGuess {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("guess"),
        }
    }
}

impl GuessStrategy for RandomGuess {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, _visible: &[DataPoint]) -> Direction {
        if self.rng.gen_bool(0.5) {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }
}

/// Named strategies, for configuration and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrategyKind {
    AlwaysIncrease,
    AlwaysDecrease,
    Follow,
    Contrarian,
    Random,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::AlwaysIncrease,
        StrategyKind::AlwaysDecrease,
        StrategyKind::Follow,
        StrategyKind::Contrarian,
        StrategyKind::Random,
    ];

    /// Instantiate. `seed` only matters for `Random`.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn GuessStrategy> {
        match self {
            StrategyKind::AlwaysIncrease => Box::new(Constant(Direction::Increase)),
            StrategyKind::AlwaysDecrease => Box::new(Constant(Direction::Decrease)),
            StrategyKind::Follow => Box::new(FollowTrend),
            StrategyKind::Contrarian => Box::new(Contrarian),
            StrategyKind::Random => Box::new(RandomGuess::new(seed)),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::AlwaysIncrease => "always-increase",
            StrategyKind::AlwaysDecrease => "always-decrease",
            StrategyKind::Follow => "follow",
            StrategyKind::Contrarian => "contrarian",
            StrategyKind::Random => "random",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GameError::UnknownStrategy(s.to_string()))
    }
}
