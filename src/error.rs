//! Error type shared by the engine, sessions and the CLI.

use thiserror::Error;

use crate::session::SessionId;

/// Errors raised by the game.
///
/// Dataset errors are configuration errors: they surface when a game is
/// built and are never produced mid-session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid guess {0:?}: expected \"increase\" or \"decrease\"")]
    InvalidGuess(String),

    #[error("the game is already finished at position {position}")]
    GameFinished { position: usize },

    #[error("dataset needs at least 2 points, got {len}")]
    DatasetTooShort { len: usize },

    #[error("dataset years must strictly increase: index {index} has year {year} after {previous}")]
    YearsNotIncreasing { index: usize, previous: i32, year: i32 },

    #[error("dataset value for year {year} is not finite")]
    NonFiniteValue { year: i32 },

    #[error("random walk {field} must be finite and within range, got {value}")]
    InvalidWalk { field: &'static str, value: f64 },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot state does not match its dataset")]
    InconsistentSnapshot,

    #[error("no session with id {0}")]
    UnknownSession(SessionId),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}

impl GameError {
    /// Whether this error leaves the session usable.
    ///
    /// Configuration errors are fatal; everything else is reported to the
    /// player and play continues.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GameError::DatasetTooShort { .. }
                | GameError::YearsNotIncreasing { .. }
                | GameError::NonFiniteValue { .. }
                | GameError::InvalidWalk { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::DatasetTooShort { len: 1 };
        assert_eq!(err.to_string(), "dataset needs at least 2 points, got 1");

        let err = GameError::InvalidGuess("sideways".to_string());
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_recoverable() {
        assert!(GameError::GameFinished { position: 9 }.is_recoverable());
        assert!(GameError::InvalidGuess(String::new()).is_recoverable());
        assert!(!GameError::DatasetTooShort { len: 0 }.is_recoverable());
        assert!(!GameError::NonFiniteValue { year: 2000 }.is_recoverable());
        assert!(!GameError::InvalidWalk { field: "volatility", value: f64::NAN }.is_recoverable());
    }
}
