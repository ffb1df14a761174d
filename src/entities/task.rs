use super::{Entry, Tint};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A goal the user wants to accomplish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub caption: String,
    /// Creation time unless set explicitly.
    pub date: DateTime<Local>,
    pub is_completed: bool,
    pub tint: Tint,
}

impl Task {
    /// Create a pending task dated now with a fresh identifier.
    pub fn new(title: impl Into<String>, caption: impl Into<String>, tint: Tint) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            caption: caption.into(),
            date: Local::now(),
            is_completed: false,
            tint,
        }
    }

    /// Blank task bound to the "Add Goals" form.
    pub fn blank() -> Self {
        Self::new("", "", Tint::default())
    }

    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = date;
        self
    }
}

impl Entry for Task {
    fn id(&self) -> Uuid {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> DateTime<Local> {
        self.date
    }
}
