//! Player sessions.
//!
//! A `Session` owns one game and its state exclusively; every player
//! action is one synchronous call. `SessionStore` keeps any number of
//! independent sessions in memory, keyed by `SessionId`. Nothing here
//! outlives the process.

use std::fmt;

use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Direction, GameConfig, GameState};
use crate::error::{GameError, Result};
use crate::games::trend::{TrendGame, TrendGameBuilder};
use crate::rules::{GuessOutcome, RulesEngine};

/// Identifier of a session in a `SessionStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Serialized form of a session.
#[derive(Serialize, Deserialize)]
struct SessionSnapshot {
    config: GameConfig,
    state: GameState,
}

/// One play-through.
#[derive(Clone, Debug)]
pub struct Session {
    game: TrendGame,
    state: GameState,
}

impl Session {
    /// Start a session from a builder.
    pub fn start(builder: TrendGameBuilder) -> Result<Self> {
        let (game, state) = builder.build()?;
        Ok(Self { game, state })
    }

    /// Start a session on the embedded dataset.
    pub fn with_default_dataset() -> Result<Self> {
        Self::start(TrendGameBuilder::new())
    }

    pub fn game(&self) -> &TrendGame {
        &self.game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Points `0..=position`.
    pub fn visible_points(&self) -> impl Iterator<Item = &DataPoint> + '_ {
        self.game.visible_points(&self.state)
    }

    /// Apply a guess.
    ///
    /// After the last point is revealed every call fails with
    /// `GameError::GameFinished` and changes nothing.
    pub fn submit_guess(&mut self, guess: Direction) -> Result<GuessOutcome> {
        self.game.apply_guess(&mut self.state, guess)
    }

    /// Parse raw input and apply it. Unparseable input never reaches the
    /// engine.
    pub fn submit_raw(&mut self, input: &str) -> Result<GuessOutcome> {
        let guess: Direction = input.parse()?;
        self.submit_guess(guess)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Throw the state away and start over on the same dataset.
    pub fn reset(&mut self) {
        info!(
            "session reset at position {} with score {}",
            self.state.position(),
            self.state.score()
        );
        self.state = self.game.initial_state();
    }

    /// Encode the session with bincode.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = SessionSnapshot {
            config: self.game.config().clone(),
            state: self.state.clone(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Decode a session produced by `snapshot`.
    ///
    /// The dataset is revalidated and the state checked against it.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        if !snapshot.state.is_consistent_with(&snapshot.config.dataset) {
            return Err(GameError::InconsistentSnapshot);
        }
        let (game, _) = TrendGame::new(snapshot.config);
        Ok(Self {
            game,
            state: snapshot.state,
        })
    }
}

/// In-memory collection of independent sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<SessionId, Session>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a game and store a new session for it.
    pub fn create(&mut self, builder: TrendGameBuilder) -> Result<SessionId> {
        let session = Session::start(builder)?;
        Ok(self.insert(session))
    }

    /// Store an existing session under a fresh id.
    pub fn insert(&mut self, session: Session) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: SessionId) -> Result<&Session> {
        self.sessions.get(&id).ok_or(GameError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions.get_mut(&id).ok_or(GameError::UnknownSession(id))
    }

    /// Apply a guess to one session.
    pub fn submit_guess(&mut self, id: SessionId, guess: Direction) -> Result<GuessOutcome> {
        self.get_mut(id)?.submit_guess(guess)
    }

    pub fn reset(&mut self, id: SessionId) -> Result<()> {
        self.get_mut(id)?.reset();
        Ok(())
    }

    pub fn remove(&mut self, id: SessionId) -> Result<Session> {
        self.sessions.remove(&id).ok_or(GameError::UnknownSession(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Stored ids in ascending order.
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
