//! Core UI functionality for the InnerBloom application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions routed between components
//! - [`component`] - Base component trait
//! - [`day_selector`] - Current-day selection over the calendar window
//! - [`drag_sheet`] - Bottom sheet drag controller
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components turn input into [`Action`]s; the app component applies them to
//! the single owner of the domain state and feeds the results back for the
//! next render.

pub mod actions;
pub mod component;
pub mod day_selector;
pub mod drag_sheet;
pub mod event_handler;

pub use actions::{Action, DialogType, EntryKind, Tab};
pub use component::Component;
pub use day_selector::DaySelector;
pub use drag_sheet::{DragSheet, SheetState};
pub use event_handler::{EventHandler, EventType};
