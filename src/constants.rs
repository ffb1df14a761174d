//! Constants used throughout the application
//!
//! This module centralizes UI text, picker options and layout values.

// Tab / section headers
pub const HEADER_GOALS: &str = "Goals";
pub const HEADER_JOURNALS: &str = "Journals";
pub const HEADER_COMPLETED_ITEMS: &str = "Completed Items";
pub const HEADER_TODAYS_PONDER: &str = "Today's Ponder";
pub const HEADER_MOTIVATIONAL: &str = "Daily Motivational Quote";
pub const HEADER_RELIGIOUS: &str = "Religious Quotes";
pub const HEADER_ADDITIONAL_STATS: &str = "Additional Stats";

// Success Messages
pub const SUCCESS_GOAL_CREATED: &str = "✅ Goal added";
pub const SUCCESS_GOAL_UPDATED: &str = "✅ Goal updated";
pub const SUCCESS_GOAL_DELETED: &str = "✅ Goal deleted";
pub const SUCCESS_JOURNAL_CREATED: &str = "✅ Journal added";
pub const SUCCESS_JOURNAL_UPDATED: &str = "✅ Journal updated";
pub const SUCCESS_JOURNAL_DELETED: &str = "✅ Journal deleted";

// Error Messages
pub const ERROR_DELETE_FAILED: &str = "❌ Failed to delete entry";
pub const ERROR_TOGGLE_FAILED: &str = "❌ Failed to update goal";
pub const ERROR_ENTRY_NOT_FOUND: &str = "❌ Entry no longer exists";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const EMPTY_GOALS: &str = "No goals yet. Press 'g' to add one.";
pub const EMPTY_JOURNALS: &str = "No journals for this day. Press 'a' to write one.";
pub const EMPTY_COMPLETED: &str = "Nothing completed yet.";
pub const MOTIVATIONAL_PLACEHOLDER: &str = "Press 'm' to get inspired!";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Journal mood picker
pub const JOURNAL_EMOJIS: [&str; 9] = ["🙂", "😀", "😎", "😍", "😊", "🤔", "🙃", "🥳", "😇"];
pub const DEFAULT_JOURNAL_EMOJI: &str = "🙂";

// UI Layout Constants
/// Height of the tab bar in rows
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of the month header + day strip block in rows
pub const CALENDAR_HEIGHT: u16 = 5;
/// Width of one day cell in the day strip
pub const DAY_CELL_WIDTH: u16 = 6;
/// Rows always left visible for the sheet's grab handle and title
pub const SHEET_MIN_VISIBLE_ROWS: u16 = 2;
