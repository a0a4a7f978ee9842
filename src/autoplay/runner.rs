//! Runs strategies through whole sessions.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DatasetSource, GameRng, GameState, GuessRecord, RandomWalkConfig};
use crate::error::Result;
use crate::games::trend::{TrendGame, TrendGameBuilder};
use crate::rules::RulesEngine;

use super::stats::StrategySummary;
use super::strategy::{GuessStrategy, StrategyKind};

/// Configuration for batch evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Datasets (sessions per strategy) to play.
    pub sessions: usize,

    /// Seed the per-session seeds are forked from.
    pub seed: u64,

    /// Shape of each generated dataset; its seed is replaced per session.
    pub walk: RandomWalkConfig,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            sessions: 100,
            seed: 0,
            walk: RandomWalkConfig::default(),
        }
    }
}

impl AutoplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(mut self, sessions: usize) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_walk(mut self, walk: RandomWalkConfig) -> Self {
        self.walk = walk;
        self
    }
}

/// A finished autoplay session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub strategy: String,
    /// Seed of the dataset played.
    pub seed: u64,
    pub score: u32,
    pub history: Vector<GuessRecord>,
}

impl SessionRecord {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            f64::from(self.score) / self.history.len() as f64
        }
    }
}

/// Play `state` to the end with `strategy`.
///
/// Each step hands the strategy the visible prefix, applies its guess and
/// extends the prefix with the revealed point.
pub fn play_session(
    game: &TrendGame,
    state: &mut GameState,
    strategy: &mut dyn GuessStrategy,
    seed: u64,
) -> Result<SessionRecord> {
    let mut visible: Vec<DataPoint> = game.visible_points(state).copied().collect();

    while game.is_terminal(state).is_none() {
        let guess = strategy.choose(&visible);
        let outcome = game.apply_guess(state, guess)?;
        visible.push(outcome.revealed);
    }

    debug!(
        "{} finished seed {}: {}/{}",
        strategy.name(),
        seed,
        state.score(),
        state.history().len()
    );

    Ok(SessionRecord {
        strategy: strategy.name().to_string(),
        seed,
        score: state.score(),
        history: state.history().clone(),
    })
}

/// Play every strategy over `config.sessions` random-walk datasets.
///
/// All strategies see the same datasets. Summaries come back in the order
/// of `kinds`, one per entry; a repeated kind gets its own summary.
pub fn evaluate(config: &AutoplayConfig, kinds: &[StrategyKind]) -> Result<Vec<StrategySummary>> {
    let mut rng = GameRng::new(config.seed);
    let mut summaries: Vec<StrategySummary> =
        kinds.iter().map(|&kind| StrategySummary::new(kind)).collect();

    for _ in 0..config.sessions {
        let seed = rng.fork().seed();
        let walk = config.walk.clone().with_seed(seed);
        let (game, initial) = TrendGameBuilder::new()
            .source(DatasetSource::RandomWalk(walk))
            .build()?;

        for (summary, &kind) in summaries.iter_mut().zip(kinds) {
            let mut state = initial.clone();
            let mut strategy = kind.build(seed);
            let record = play_session(&game, &mut state, strategy.as_mut(), seed)?;
            summary.record(&record);
        }
    }

    for summary in &summaries {
        info!(
            "{}: accuracy {:.3} over {} sessions",
            summary.strategy,
            summary.accuracy(),
            summary.sessions
        );
    }
    Ok(summaries)
}
