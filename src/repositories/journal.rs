//! Journal list owner.

use super::EntryRepository;
use crate::entities::Journal;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub type JournalRepository = EntryRepository<Journal>;

impl EntryRepository<Journal> {
    /// Distinct calendar days that have at least one journal.
    pub fn journaled_days(&self) -> BTreeSet<NaiveDate> {
        self.all().iter().map(|j| j.date.date_naive()).collect()
    }
}
