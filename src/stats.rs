//! Progress statistics computed from the in-memory lists.

use crate::repositories::{JournalRepository, TaskRepository};
use crate::utils::datetime;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressStats {
    /// Consecutive days ending at the reference day with at least one journal
    pub journal_streak: usize,
    pub goals_completed: usize,
    pub goals_total: usize,
    pub journals_today: usize,
    /// Journals dated inside the reference day's week
    pub journals_this_week: usize,
    pub journals_total: usize,
}

impl ProgressStats {
    pub fn compute(tasks: &TaskRepository, journals: &JournalRepository, today: NaiveDate) -> Self {
        let week = datetime::days_in_week(today);
        let journals_this_week = journals
            .all()
            .iter()
            .filter(|j| week.contains(&j.date.date_naive()))
            .count();

        Self {
            journal_streak: journal_streak(journals, today),
            goals_completed: tasks.completed_count(),
            goals_total: tasks.len(),
            journals_today: journals.for_day(today).len(),
            journals_this_week,
            journals_total: journals.len(),
        }
    }

    /// Completed share of all goals, 0 when there are none.
    pub fn completion_ratio(&self) -> f64 {
        if self.goals_total == 0 {
            0.0
        } else {
            self.goals_completed as f64 / self.goals_total as f64
        }
    }
}

/// Count consecutive journaled days walking back from `today`.
///
/// A day without a journal yet does not break a streak that ended yesterday.
pub fn journal_streak(journals: &JournalRepository, today: NaiveDate) -> usize {
    let days = journals.journaled_days();
    let mut cursor = if days.contains(&today) {
        today
    } else {
        datetime::shift_date(today, -1)
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        let previous = datetime::shift_date(cursor, -1);
        if previous == cursor {
            break;
        }
        cursor = previous;
    }
    streak
}
