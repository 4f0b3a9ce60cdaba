//! The owner of the live game state.
//!
//! `GameStateStore` is the only writer of both the in-memory `GameState` and
//! its durable copy. Every mutation is write-through: the new state is
//! encoded and written to storage before it replaces the live state, so a
//! failed write leaves both copies at the previous state.
//!
//! ```
//! use bank_heist::core::{RoundId, RoundUpdate, TeamId};
//! use bank_heist::store::{GameStateStore, LoadOutcome, MemoryStorage};
//!
//! let (mut store, outcome) = GameStateStore::open(MemoryStorage::new(), "bankHeist").unwrap();
//! assert_eq!(outcome, LoadOutcome::Fresh);
//!
//! store
//!     .update_field(RoundId::new(0), RoundUpdate::SetCorrect { team: TeamId::new(1), value: true })
//!     .unwrap();
//! assert!(store.state().round(RoundId::new(0)).is_correct(TeamId::new(1)));
//! ```

use log::{debug, info, warn};

use super::storage::Storage;
use crate::core::{GameState, RoundId, RoundUpdate};
use crate::error::{CorruptState, StoreError};

/// How the state came to be when the store was opened.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// No snapshot existed; started a blank game.
    Fresh,
    /// A valid snapshot was restored.
    Restored,
    /// A snapshot existed but was unusable; started a blank game instead.
    Recovered(CorruptState),
}

/// Owns the game state and keeps storage in sync with it.
pub struct GameStateStore<S> {
    storage: S,
    key: String,
    state: GameState,
}

impl<S: Storage> GameStateStore<S> {
    /// Open the store, restoring any snapshot under `key`.
    ///
    /// If no usable snapshot exists, the blank state is written immediately
    /// so storage always mirrors the live state.
    pub fn open(storage: S, key: impl Into<String>) -> Result<(Self, LoadOutcome), StoreError> {
        let key = key.into();
        let (state, outcome) = Self::load(&storage, &key)?;

        let mut store = Self { storage, key, state };
        if outcome != LoadOutcome::Restored {
            store.persist()?;
        }

        Ok((store, outcome))
    }

    /// Read the snapshot under `key`.
    ///
    /// A missing or corrupt snapshot yields a blank state. Only storage
    /// failures are errors.
    pub fn load(storage: &S, key: &str) -> Result<(GameState, LoadOutcome), StoreError> {
        let Some(json) = storage.read(key)? else {
            info!("No saved game under {key:?}, starting fresh");
            return Ok((GameState::new(), LoadOutcome::Fresh));
        };

        match GameState::from_json(&json) {
            Ok(state) => {
                info!("Restored saved game from {key:?}");
                Ok((state, LoadOutcome::Restored))
            }
            Err(reason) => {
                warn!("Discarding saved game under {key:?}: {reason}");
                Ok((GameState::new(), LoadOutcome::Recovered(reason)))
            }
        }
    }

    /// The live game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Key of the durable slot.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the store, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the live state to storage.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        write_snapshot(&mut self.storage, &self.key, &self.state)
    }

    /// Replace one cell and persist the result.
    ///
    /// Panics if `round` or the update's team were built from an
    /// out-of-range index (see `RoundId::new`, `TeamId::new`).
    pub fn update_field(&mut self, round: RoundId, update: RoundUpdate) -> Result<&GameState, StoreError> {
        let next = self.state.with_update(round, update);
        self.replace(next)
    }

    /// Start over with a blank game and persist it.
    ///
    /// Unconditionally discards every recorded result. Callers are expected
    /// to have confirmed this with the user.
    pub fn reset(&mut self) -> Result<&GameState, StoreError> {
        info!("Resetting game under {:?}", self.key);
        self.replace(GameState::new())
    }

    fn replace(&mut self, next: GameState) -> Result<&GameState, StoreError> {
        write_snapshot(&mut self.storage, &self.key, &next)?;
        self.state = next;
        Ok(&self.state)
    }
}

fn write_snapshot<S: Storage>(storage: &mut S, key: &str, state: &GameState) -> Result<(), StoreError> {
    let json = state.to_json()?;
    storage.write(key, &json)?;
    debug!("Persisted game state to {key:?} ({} bytes)", json.len());
    Ok(())
}
