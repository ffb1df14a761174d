//! Domain entities held in memory by the application.
//!
//! Tasks (shown to the user as "goals") and journals are independent lists,
//! never joined. Week days are regenerated on every week-range request.

pub mod journal;
pub mod task;
pub mod tint;
pub mod week_day;

pub use journal::Journal;
pub use task::Task;
pub use tint::Tint;
pub use week_day::WeekDay;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Common view over the entries kept in an [`EntryRepository`](crate::repositories::EntryRepository).
pub trait Entry: Clone {
    fn id(&self) -> Uuid;
    fn title(&self) -> &str;
    fn date(&self) -> DateTime<Local>;
}
