//! In-memory view of the roster, kept in sync with the store.
//!
//! Every mutation validates first, delegates one row operation to the store
//! and then reloads the whole cache. Cache position `i` corresponds to data
//! row `i + 1`, and only ever at the moment a store call is made; after the
//! reload all positions (and the selection) are rederived from scratch.

use super::validate::{ManagerDraft, validate};
use crate::errors::{AppError, AppResult};
use crate::models::manager::{Manager, ManagerId};
use crate::store::RowIndex;
use crate::store::roster::{RosterStore, next_id};

pub struct RosterSession {
    store: RosterStore,
    managers: Vec<Manager>,
    selected: Option<usize>,
}

impl RosterSession {
    /// Open a session on the given store, bootstrapping the table if needed.
    pub fn open(store: RosterStore) -> AppResult<Self> {
        store.ensure_initialized()?;

        let mut session = Self {
            store,
            managers: Vec::new(),
            selected: None,
        };
        session.reload()?;
        Ok(session)
    }

    /// Replace the whole cache from the store. Drops the selection.
    pub fn reload(&mut self) -> AppResult<()> {
        self.managers = self.store.load_all()?;
        self.selected = None;
        Ok(())
    }

    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    pub fn get(&self, index: usize) -> Option<&Manager> {
        self.managers.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Option<&Manager> {
        if index < self.managers.len() {
            self.selected = Some(index);
            self.managers.get(index)
        } else {
            self.selected = None;
            None
        }
    }

    /// Select by ID cell text. Returns the cache position, if found.
    pub fn select_by_id(&mut self, id: &str) -> Option<usize> {
        let wanted = id.trim();
        let index = self
            .managers
            .iter()
            .position(|m| m.id.as_str() == wanted)?;
        self.selected = Some(index);
        Some(index)
    }

    /// Validate, assign the next free ID, append, reload.
    pub fn add(&mut self, draft: &ManagerDraft) -> AppResult<Manager> {
        let profile = validate(draft)?;

        let manager = Manager {
            id: ManagerId::from_number(next_id(&self.managers)),
            name: profile.name,
            role: profile.role,
            gender: profile.gender,
            availability: profile.availability,
        };

        self.store.upsert(None, &manager)?;
        self.reload()?;
        Ok(manager)
    }

    /// Validate, overwrite the record at `index` keeping its ID, reload.
    pub fn update(&mut self, index: usize, draft: &ManagerDraft) -> AppResult<Manager> {
        let profile = validate(draft)?;

        let existing = self
            .managers
            .get(index)
            .ok_or(AppError::RowOutOfRange(index + 1))?;

        let manager = Manager {
            id: existing.id.clone(),
            name: profile.name,
            role: profile.role,
            gender: profile.gender,
            availability: profile.availability,
        };

        self.store.upsert(Some(RowIndex(index + 1)), &manager)?;
        self.reload()?;
        Ok(manager)
    }

    /// Delete the record at `index`, reload. Returns the removed record.
    pub fn delete(&mut self, index: usize) -> AppResult<Manager> {
        let removed = self
            .managers
            .get(index)
            .cloned()
            .ok_or(AppError::RowOutOfRange(index + 1))?;

        self.store.delete(RowIndex(index + 1))?;
        self.reload()?;
        Ok(removed)
    }
}
