use super::Entry;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal entry scoped to one calendar day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: Uuid,
    pub title: String,
    /// Emoji prefix and body, e.g. `"🙂 slept well"`.
    pub caption: String,
    pub date: DateTime<Local>,
}

impl Journal {
    pub fn new(title: impl Into<String>, caption: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            caption: caption.into(),
            date,
        }
    }

    /// Blank journal bound to the "Add Journal" form for `date`.
    pub fn blank(date: DateTime<Local>) -> Self {
        Self::new("", "", date)
    }
}

impl Entry for Journal {
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
