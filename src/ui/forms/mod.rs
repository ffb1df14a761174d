//! Entry editors.
//!
//! A form holds local copies of one bound entity's fields. Submitting builds a
//! new value carrying the bound entity's id, so the owner can match and
//! replace; cancelling drops the local copies. Forms never touch the owning
//! list themselves.

pub mod input;
pub mod journal_form;
pub mod task_form;

pub use input::TextInput;
pub use journal_form::{JournalField, JournalForm};
pub use task_form::{TaskField, TaskForm};

/// Result of feeding one key to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Still editing
    None,
    Submit,
    Cancel,
}

/// Whether the bound entity already exists in its list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}
