//! Game configuration types.
//!
//! Sessions are configured at startup by providing:
//! - `DatasetSource`: where the series comes from (embedded, synthetic, explicit)
//! - `RandomWalkConfig`: parameters for the synthetic series
//! - `GameConfig`: the resolved dataset plus chart labels for presentation
//!
//! Every config validates when it is resolved, never mid-session.

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use crate::error::{GameError, Result};

/// Parameters for a seeded random-walk dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    /// RNG seed. Same seed produces the same series.
    pub seed: u64,

    /// Number of points (must be at least 2).
    pub points: usize,

    /// Year of the first point; each following point is one year later.
    pub start_year: i32,

    /// Value of the first point.
    pub start_value: f64,

    /// Constant added per step.
    pub drift: f64,

    /// Maximum magnitude of the uniform noise added per step.
    pub volatility: f64,

    /// Decimal places values are rounded to.
    /// Rounding makes exact ties possible, as in real published series.
    pub precision: u32,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            points: 10,
            start_year: 2000,
            start_value: 0.25,
            drift: 0.03,
            volatility: 0.08,
            precision: 2,
        }
    }
}

impl RandomWalkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_start(mut self, year: i32, value: f64) -> Self {
        self.start_year = year;
        self.start_value = value;
        self
    }

    #[must_use]
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check the walk parameters can be sampled.
    ///
    /// The noise range `[-volatility, volatility)` must have a finite width.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("start_value", self.start_value),
            ("drift", self.drift),
            ("volatility", self.volatility),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(GameError::InvalidWalk { field, value });
            }
        }
        if !(self.volatility * 2.0).is_finite() {
            return Err(GameError::InvalidWalk {
                field: "volatility",
                value: self.volatility,
            });
        }
        Ok(())
    }
}

/// Where a session's dataset comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DatasetSource {
    /// The embedded 2000-2009 temperature anomaly series.
    #[default]
    Embedded,
    /// A seeded synthetic series.
    RandomWalk(RandomWalkConfig),
    /// An already-validated dataset supplied by the caller.
    Explicit(Dataset),
}

impl DatasetSource {
    /// Resolve into a validated dataset.
    pub fn load(&self) -> Result<Dataset> {
        match self {
            DatasetSource::Embedded => Ok(Dataset::temperature_anomalies()),
            DatasetSource::RandomWalk(config) => Dataset::random_walk(config),
            DatasetSource::Explicit(dataset) => Ok(dataset.clone()),
        }
    }
}

/// Chart labels handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Global Temperature Anomalies".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "Temperature Anomaly (°C)".to_string(),
        }
    }
}

/// Resolved game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The series being revealed.
    pub dataset: Dataset,

    /// Labels for rendering.
    pub labels: ChartLabels,
}

impl GameConfig {
    /// Resolve a source into a configuration with default labels.
    pub fn from_source(source: &DatasetSource) -> Result<Self> {
        Ok(Self {
            dataset: source.load()?,
            labels: ChartLabels::default(),
        })
    }

    #[must_use]
    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_walk_builder() {
        let config = RandomWalkConfig::new()
            .with_seed(7)
            .with_points(30)
            .with_start(1950, -0.1)
            .with_drift(0.0)
            .with_volatility(0.2)
            .with_precision(1);

        assert_eq!(config.seed, 7);
        assert_eq!(config.points, 30);
        assert_eq!(config.start_year, 1950);
        assert_eq!(config.start_value, -0.1);
        assert_eq!(config.drift, 0.0);
        assert_eq!(config.volatility, 0.2);
        assert_eq!(config.precision, 1);
    }

    #[test]
    fn test_source_load() {
        let embedded = DatasetSource::default().load().unwrap();
        assert_eq!(embedded, Dataset::temperature_anomalies());

        let walk = DatasetSource::RandomWalk(RandomWalkConfig::default().with_points(4))
            .load()
            .unwrap();
        assert_eq!(walk.len(), 4);

        let short = DatasetSource::RandomWalk(RandomWalkConfig::default().with_points(0));
        assert!(matches!(short.load(), Err(GameError::DatasetTooShort { len: 0 })));
    }

    #[test]
    fn test_game_config_labels() {
        let config = GameConfig::from_source(&DatasetSource::Embedded).unwrap();
        assert_eq!(config.labels.title, "Global Temperature Anomalies");
        assert_eq!(config.labels.x_axis, "Year");

        let custom = ChartLabels {
            title: "Sea level".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "mm".to_string(),
        };
        let config = config.with_labels(custom.clone());
        assert_eq!(config.labels, custom);
    }

    #[test]
    fn test_serialization() {
        let source = DatasetSource::RandomWalk(RandomWalkConfig::default().with_seed(3));
        let json = serde_json::to_string(&source).unwrap();
        let back: DatasetSource = serde_json::from_str(&json).unwrap();
        assert_eq!(source, back);
    }
}
