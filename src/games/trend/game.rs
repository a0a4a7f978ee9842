//! Trend game implementation.

use log::{debug, info, warn};

use crate::core::{
    ChartLabels, DataPoint, Dataset, DatasetSource, Direction, GameConfig, GameState, GuessRecord,
    RandomWalkConfig,
};
use crate::error::{GameError, Result};
use crate::rules::{compose_feedback, GuessOutcome, RulesEngine};

/// The guess-the-trend game over one dataset.
#[derive(Clone, Debug)]
pub struct TrendGame {
    config: GameConfig,
}

/// Builder for creating a TrendGame.
#[derive(Clone, Debug, Default)]
pub struct TrendGameBuilder {
    source: DatasetSource,
    pairs: Option<Vec<(i32, f64)>>,
    labels: Option<ChartLabels>,
}

impl TrendGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use any dataset source.
    pub fn source(mut self, source: DatasetSource) -> Self {
        self.source = source;
        self.pairs = None;
        self
    }

    /// Use explicit `(year, value)` pairs. Validated in `build`.
    pub fn pairs(mut self, pairs: &[(i32, f64)]) -> Self {
        self.pairs = Some(pairs.to_vec());
        self
    }

    /// Use a seeded random-walk dataset.
    pub fn random_walk(self, config: RandomWalkConfig) -> Self {
        self.source(DatasetSource::RandomWalk(config))
    }

    pub fn labels(mut self, labels: ChartLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Build the game and its initial state.
    ///
    /// Fails with a configuration error when the dataset is invalid.
    pub fn build(self) -> Result<(TrendGame, GameState)> {
        let source = match self.pairs {
            Some(pairs) => DatasetSource::Explicit(Dataset::from_pairs(&pairs)?),
            None => self.source,
        };
        let mut config = GameConfig::from_source(&source)?;
        if let Some(labels) = self.labels {
            config = config.with_labels(labels);
        }

        let state = GameState::new(&config.dataset);
        info!(
            "new trend game: {} points ({}-{})",
            config.dataset.len(),
            config.dataset.get(0).map_or(0, |p| p.year),
            config.dataset.get(config.dataset.last_index()).map_or(0, |p| p.year),
        );

        Ok((TrendGame { config }, state))
    }
}

impl TrendGame {
    /// Build directly from a resolved configuration.
    pub fn new(config: GameConfig) -> (Self, GameState) {
        let state = GameState::new(&config.dataset);
        (Self { config }, state)
    }

    /// Chart labels for the presentation layer.
    pub fn labels(&self) -> &ChartLabels {
        &self.config.labels
    }

    /// Points `0..=position`. Never empty; length `position + 1`.
    pub fn visible_points<'a>(&'a self, state: &GameState) -> impl Iterator<Item = &'a DataPoint> + 'a {
        self.config.dataset.prefix(state.position())
    }

    /// A fresh state for this game's dataset.
    pub fn initial_state(&self) -> GameState {
        GameState::new(&self.config.dataset)
    }
}

impl RulesEngine for TrendGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply_guess(&self, state: &mut GameState, guess: Direction) -> Result<GuessOutcome> {
        let position = state.position();
        let dataset = &self.config.dataset;

        let (from, to) = match (dataset.get(position), dataset.get(position + 1)) {
            (Some(from), Some(to)) if !state.is_finished() => (*from, *to),
            _ => {
                warn!("guess {guess} rejected: game finished at position {position}");
                return Err(GameError::GameFinished { position });
            }
        };

        let actual = Direction::between(from.value, to.value);
        let correct = guess.holds(from.value, to.value);

        state.commit(GuessRecord {
            position,
            from,
            to,
            guess,
            actual,
            correct,
        });

        let finished = state.is_finished();
        let outcome = GuessOutcome {
            guess,
            correct,
            actual,
            revealed: to,
            score: state.score(),
            position: state.position(),
            finished,
            feedback: compose_feedback(correct, state.score(), actual, finished),
        };

        debug!(
            "guess {} at {} -> {}: {} (score {})",
            guess,
            from.year,
            to.year,
            if correct { "correct" } else { "wrong" },
            outcome.score
        );
        if finished {
            info!("game finished: score {} of {}", outcome.score, state.history().len());
        }

        Ok(outcome)
    }
}
