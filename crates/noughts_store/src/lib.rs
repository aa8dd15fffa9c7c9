//! Persistent keyed state: a cell that lazily initializes from a
//! key/value store, mutates in memory, and mirrors every change back to
//! the store before returning control.
//!
//! The store itself is a collaborator behind [`KeyValueStore`]. Two
//! backends ship here: an in-process map for tests and throwaway
//! sessions, and a JSON file for durable ones.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod store;

pub use cell::{PersistedCell, Seed};
pub use error::StoreError;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
