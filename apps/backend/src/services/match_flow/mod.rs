//! Match flow service - bridges the pure scoring engine with match storage.
//!
//! Every command loads the stored snapshot, rebuilds the [`Match`], applies
//! the domain operation and saves the new snapshot while holding the
//! match's lock in the store.
//!
//! [`Match`]: crate::domain::Match

mod creation;
mod rolls;

use serde::Serialize;

pub use creation::parse_roster;
pub use rolls::parse_pins;

use crate::config::match_settings::MatchSettings;
use crate::domain::{Match, MatchId, PlayerId};
use crate::repos::{InMemoryMatchStore, MatchStore};

/// Match flow service - generic over the store so tests can swap it.
pub struct MatchFlowService<S = InMemoryMatchStore> {
    store: S,
    settings: MatchSettings,
}

impl Default for MatchFlowService {
    fn default() -> Self {
        Self::new(InMemoryMatchStore::new(), MatchSettings::default())
    }
}

impl<S: MatchStore> MatchFlowService<S> {
    pub fn new(store: S, settings: MatchSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }
}

/// A newly created match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedMatch {
    pub match_id: MatchId,
    /// Join order.
    pub player_ids: Vec<PlayerId>,
}

/// Success payload of a roll: who is up next, and whether the match is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollAccepted {
    /// `None` once every player has finished.
    pub current_player: Option<PlayerId>,
    pub current_player_name: Option<String>,
    pub finished: bool,
}

impl RollAccepted {
    fn from_match(game: &Match) -> Self {
        let finished = game.is_finished();
        let current = if finished {
            None
        } else {
            game.current_player().ok()
        };
        Self {
            current_player: current.map(|p| p.player_id().to_owned()),
            current_player_name: current.map(|p| p.display_name().to_owned()),
            finished,
        }
    }
}
