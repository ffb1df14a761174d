//! InnerBloom - a terminal journal and goal tracker
//!
//! This library provides a tabbed terminal interface for daily journals and
//! goals: a calendar day strip, goal and journal editors, a draggable sheet
//! of completed items, and static ponder and quote content. Everything lives
//! in memory for the length of a session.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Goal, journal and calendar value types
//! * [`repositories`] - In-memory owners of the goal and journal lists
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date helpers and color mapping

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing strings
pub mod constants;

/// Quotes, ponder questions and resources
pub mod content;

/// Goal, journal and week-day models
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Owners of the goal and journal lists
pub mod repositories;

/// Progress statistics over the lists
pub mod stats;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use entities::{Journal, Task, Tint, WeekDay};
