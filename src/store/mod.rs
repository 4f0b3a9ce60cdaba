//! Game state ownership and persistence.
//!
//! `GameStateStore` owns the live `GameState` and mirrors it into a single
//! durable slot of a `Storage` backend after every change.

pub mod storage;
pub mod game_store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use game_store::{GameStateStore, LoadOutcome};
