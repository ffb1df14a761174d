//! Utility modules for the InnerBloom application.
//!
//! - [`datetime`] - Calendar arithmetic, week ranges and date formatting
//! - [`color`] - Mapping of goal tints to terminal colors

pub mod color;
pub mod datetime;
