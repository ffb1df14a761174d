//! Goal list owner.

use super::{EntryRepository, RepositoryError};
use crate::entities::Task;
use uuid::Uuid;

pub type TaskRepository = EntryRepository<Task>;

impl EntryRepository<Task> {
    /// Flip the completion flag, returning the new value.
    pub fn toggle_completed(&mut self, id: Uuid) -> Result<bool, RepositoryError> {
        let task = self.get_mut(id).ok_or(RepositoryError::NotFound(id))?;
        task.is_completed = !task.is_completed;
        Ok(task.is_completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.all().iter().filter(|t| t.is_completed)
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }
}
