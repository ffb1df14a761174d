use chrono::NaiveDate;
use uuid::Uuid;

/// One day of a generated week range. Never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekDay {
    pub id: Uuid,
    pub date: NaiveDate,
}

impl WeekDay {
    pub fn new(date: NaiveDate) -> Self {
        Self { id: Uuid::new_v4(), date }
    }
}
