//! In-memory repositories owning the task and journal lists.
//!
//! Each list has exactly one owner. Components borrow entries for rendering and
//! hand changes back as actions; only the app state mutates a repository.

pub mod journal;
pub mod task;

pub use journal::JournalRepository;
pub use task::TaskRepository;

use crate::entities::Entry;
use crate::utils::datetime;
use chrono::NaiveDate;
use uuid::Uuid;

/// Errors from repository operations addressed by a stale index or id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Entry not found: {0}")]
    NotFound(Uuid),
}

/// Ordered list of entries with identity-based replacement.
#[derive(Debug, Clone)]
pub struct EntryRepository<T: Entry> {
    entries: Vec<T>,
}

impl<T: Entry> Default for EntryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entry> EntryRepository<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Replace the entry carrying the same id, or append when none does.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn upsert(&mut self, entry: T) -> bool {
        match self.entries.iter().position(|e| e.id() == entry.id()) {
            Some(index) => {
                self.entries[index] = entry;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }

    /// Remove by position in the full list.
    pub fn remove_at(&mut self, index: usize) -> Result<T, RepositoryError> {
        if index >= self.entries.len() {
            return Err(RepositoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn remove(&mut self, id: Uuid) -> Result<T, RepositoryError> {
        let index = self.position(id).ok_or(RepositoryError::NotFound(id))?;
        Ok(self.entries.remove(index))
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries dated on `day`, in list order. Recomputed on every call.
    pub fn for_day(&self, day: NaiveDate) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|e| datetime::is_on_day(&e.date(), day))
            .collect()
    }
}
