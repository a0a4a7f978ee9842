//! The revealed series: ordered, immutable `(year, value)` points.
//!
//! A `Dataset` is validated once on construction and never changes after:
//! - at least 2 points (a guess needs a current and a next point)
//! - strictly increasing years
//! - finite values
//!
//! Points live in an `im::Vector` so sessions, snapshots and autoplay
//! copies share one allocation.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::RandomWalkConfig;
use super::rng::GameRng;
use crate::error::{GameError, Result};

/// Yearly global temperature anomalies, 2000-2009 (°C).
const TEMPERATURE_ANOMALIES: [(i32, f64); 10] = [
    (2000, 0.25),
    (2001, 0.29),
    (2002, 0.33),
    (2003, 0.38),
    (2004, 0.41),
    (2005, 0.45),
    (2006, 0.50),
    (2007, 0.55),
    (2008, 0.60),
    (2009, 0.62),
];

/// One observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(i32, f64)> for DataPoint {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}

/// Validated, immutable series of data points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct Dataset {
    points: Vector<DataPoint>,
}

impl Dataset {
    /// Build a dataset, checking every invariant.
    pub fn new(points: impl IntoIterator<Item = DataPoint>) -> Result<Self> {
        let points: Vector<DataPoint> = points.into_iter().collect();

        if points.len() < 2 {
            return Err(GameError::DatasetTooShort { len: points.len() });
        }

        let mut previous: Option<i32> = None;
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(GameError::NonFiniteValue { year: point.year });
            }
            if let Some(previous) = previous {
                if point.year <= previous {
                    return Err(GameError::YearsNotIncreasing {
                        index,
                        previous,
                        year: point.year,
                    });
                }
            }
            previous = Some(point.year);
        }

        Ok(Self { points })
    }

    /// Build from `(year, value)` pairs.
    pub fn from_pairs(pairs: &[(i32, f64)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(DataPoint::from))
    }

    /// The embedded temperature anomaly series.
    #[must_use]
    pub fn temperature_anomalies() -> Self {
        Self {
            points: TEMPERATURE_ANOMALIES.iter().copied().map(DataPoint::from).collect(),
        }
    }

    /// Seeded synthetic series: a bounded random walk rounded to
    /// `config.precision` decimals.
    ///
    /// The same config always produces the same dataset.
    pub fn random_walk(config: &RandomWalkConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed).for_context("dataset");
        let scale = 10f64.powi(config.precision as i32);
        let mut value = config.start_value;

        let points = (0..config.points).map(|i| {
            let year = config.start_year.saturating_add(i as i32);
            let point = DataPoint::new(year, (value * scale).round() / scale);
            value += config.drift + rng.gen_symmetric(config.volatility);
            point
        });

        Self::new(points)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the last point.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Iterate all points in year order.
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> + '_ {
        self.points.iter()
    }

    /// Points `0..=end`, clamped to the dataset.
    pub fn prefix(&self, end: usize) -> impl Iterator<Item = &DataPoint> + '_ {
        self.points.iter().take(end.saturating_add(1))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::temperature_anomalies()
    }
}

impl TryFrom<Vec<DataPoint>> for Dataset {
    type Error = GameError;

    fn try_from(points: Vec<DataPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Dataset> for Vec<DataPoint> {
    fn from(dataset: Dataset) -> Self {
        dataset.points.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset() {
        let data = Dataset::temperature_anomalies();
        assert_eq!(data.len(), 10);
        assert_eq!(data.get(0), Some(&DataPoint::new(2000, 0.25)));
        assert_eq!(data.get(9), Some(&DataPoint::new(2009, 0.62)));
        // Revalidating the constant must succeed.
        assert!(Dataset::from_pairs(&TEMPERATURE_ANOMALIES).is_ok());
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            Dataset::from_pairs(&[]),
            Err(GameError::DatasetTooShort { len: 0 })
        ));
        assert!(matches!(
            Dataset::from_pairs(&[(2000, 1.0)]),
            Err(GameError::DatasetTooShort { len: 1 })
        ));
    }

    #[test]
    fn test_years_must_increase() {
        let err = Dataset::from_pairs(&[(2000, 1.0), (2002, 1.1), (2002, 1.2)]).unwrap_err();
        assert!(matches!(
            err,
            GameError::YearsNotIncreasing { index: 2, previous: 2002, year: 2002 }
        ));

        assert!(Dataset::from_pairs(&[(2001, 1.0), (2000, 1.1)]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Dataset::from_pairs(&[(2000, 1.0), (2001, f64::NAN)]).unwrap_err();
        assert!(matches!(err, GameError::NonFiniteValue { year: 2001 }));
        assert!(Dataset::from_pairs(&[(2000, f64::INFINITY), (2001, 1.0)]).is_err());
    }

    #[test]
    fn test_prefix() {
        let data = Dataset::temperature_anomalies();
        assert_eq!(data.prefix(0).count(), 1);
        assert_eq!(data.prefix(4).count(), 5);
        assert_eq!(data.prefix(100).count(), 10);

        let years: Vec<_> = data.prefix(2).map(|p| p.year).collect();
        assert_eq!(years, vec![2000, 2001, 2002]);
    }

    #[test]
    fn test_random_walk_deterministic() {
        let config = RandomWalkConfig::default().with_seed(9).with_points(25);
        let a = Dataset::random_walk(&config).unwrap();
        let b = Dataset::random_walk(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        assert_eq!(a.get(0).map(|p| p.year), Some(config.start_year));

        let c = Dataset::random_walk(&config.clone().with_seed(10)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_walk_too_short() {
        let config = RandomWalkConfig::default().with_points(1);
        assert!(matches!(
            Dataset::random_walk(&config),
            Err(GameError::DatasetTooShort { len: 1 })
        ));
    }

    #[test]
    fn test_random_walk_rejects_unsampleable_noise() {
        for volatility in [f64::NAN, f64::INFINITY, f64::MAX] {
            let config = RandomWalkConfig::default().with_volatility(volatility);
            assert!(matches!(
                Dataset::random_walk(&config),
                Err(GameError::InvalidWalk { field: "volatility", .. })
            ));
        }

        let config = RandomWalkConfig::default().with_drift(f64::NAN);
        assert!(matches!(
            Dataset::random_walk(&config),
            Err(GameError::InvalidWalk { field: "drift", .. })
        ));

        let config = RandomWalkConfig::default().with_start(2000, f64::NEG_INFINITY);
        assert!(matches!(
            Dataset::random_walk(&config),
            Err(GameError::InvalidWalk { field: "start_value", .. })
        ));
    }

    #[test]
    fn test_random_walk_overflow_is_an_error() {
        let config = RandomWalkConfig::default()
            .with_start(2000, f64::MAX / 2.0)
            .with_drift(f64::MAX / 2.0)
            .with_volatility(0.0);
        assert!(matches!(
            Dataset::random_walk(&config),
            Err(GameError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_serde_revalidates() {
        let data = Dataset::temperature_anomalies();
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);

        let bad = r#"[{"year":2000,"value":1.0}]"#;
        assert!(serde_json::from_str::<Dataset>(bad).is_err());
    }
}
