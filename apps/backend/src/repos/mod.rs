//! Storage for match snapshots.

pub mod matches;

pub use matches::{InMemoryMatchStore, MatchStore};
