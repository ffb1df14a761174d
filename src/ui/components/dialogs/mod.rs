//! Dialog rendering helpers used by the dialog component

pub mod common;
pub mod entry_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
