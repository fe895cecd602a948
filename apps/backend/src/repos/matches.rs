//! Match snapshot storage.
//!
//! A store keeps one [`MatchRecord`] per match id. Every mutation of a match
//! goes through [`MatchStore::update`], which holds that match's lock from
//! load to save so concurrent rolls against one match are applied one at a
//! time.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::snapshot::MatchRecord;
use crate::domain::MatchId;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub trait MatchStore: Send + Sync {
    /// Store a new match. Fails with a conflict when the id is taken.
    fn insert(&self, record: &MatchRecord) -> Result<(), AppError>;

    /// Read the current snapshot of a match.
    fn load(&self, match_id: &str) -> Result<MatchRecord, AppError>;

    /// Load, mutate and save a match under its lock.
    ///
    /// `apply` works on a copy; the copy is saved only when `apply` returns
    /// `Ok`. A failed save is returned as-is and not retried.
    fn update<T, F>(&self, match_id: &str, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut MatchRecord) -> Result<T, AppError>;

    fn remove(&self, match_id: &str) -> Result<(), AppError>;

    /// Ids of all stored matches, sorted.
    fn list_ids(&self) -> Result<Vec<MatchId>, AppError>;
}

pub(crate) fn match_not_found(match_id: &str) -> AppError {
    DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found")).into()
}

/// Process-local store. Snapshots are held as serialized JSON, the same
/// shape a persistent store would write.
#[derive(Default)]
pub struct InMemoryMatchStore {
    matches: DashMap<MatchId, Arc<Mutex<String>>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn slot(&self, match_id: &str) -> Result<Arc<Mutex<String>>, AppError> {
        self.matches
            .get(match_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| match_not_found(match_id))
    }

    /// Whether `slot` is still the one stored under `match_id`.
    fn is_live(&self, match_id: &str, slot: &Arc<Mutex<String>>) -> bool {
        self.matches
            .get(match_id)
            .is_some_and(|entry| Arc::ptr_eq(entry.value(), slot))
    }

    fn update_slot<T, F>(
        &self,
        match_id: &str,
        slot: &Arc<Mutex<String>>,
        apply: F,
    ) -> Result<T, AppError>
    where
        F: FnOnce(&mut MatchRecord) -> Result<T, AppError>,
    {
        let mut json = slot.lock();
        // Removed (or removed and re-created) between lookup and lock.
        if !self.is_live(match_id, slot) {
            return Err(match_not_found(match_id));
        }
        let mut record: MatchRecord = serde_json::from_str(&json)?;
        let value = apply(&mut record)?;
        *json = serde_json::to_string(&record)?;
        Ok(value)
    }
}

impl MatchStore for InMemoryMatchStore {
    fn insert(&self, record: &MatchRecord) -> Result<(), AppError> {
        let json = serde_json::to_string(record)?;
        match self.matches.entry(record.match_id.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::DuplicateMatch,
                format!("Match {} already exists", record.match_id),
            )
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(json)));
                debug!(match_id = %record.match_id, "match stored");
                Ok(())
            }
        }
    }

    fn load(&self, match_id: &str) -> Result<MatchRecord, AppError> {
        let slot = self.slot(match_id)?;
        let json = slot.lock();
        Ok(serde_json::from_str(&json)?)
    }

    fn update<T, F>(&self, match_id: &str, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut MatchRecord) -> Result<T, AppError>,
    {
        // The map shard guard is dropped before the per-match lock is taken.
        let slot = self.slot(match_id)?;
        self.update_slot(match_id, &slot, apply)
    }

    /// Waits for any in-flight update of the match to finish first.
    fn remove(&self, match_id: &str) -> Result<(), AppError> {
        let slot = self.slot(match_id)?;
        let _guard = slot.lock();
        self.matches
            .remove_if(match_id, |_, stored| Arc::ptr_eq(stored, &slot))
            .map(|_| debug!(match_id, "match removed"))
            .ok_or_else(|| match_not_found(match_id))
    }

    fn list_ids(&self) -> Result<Vec<MatchId>, AppError> {
        let mut ids: Vec<MatchId> = self.matches.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}
