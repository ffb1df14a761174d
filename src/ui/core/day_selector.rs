//! Current-day selection over a generated window of dates.

use crate::utils::datetime;
use chrono::NaiveDate;

/// Number of consecutive days shown in the day strip by default.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

#[derive(Debug, Clone)]
pub struct DaySelector {
    displayed_dates: Vec<NaiveDate>,
    current_date: NaiveDate,
    month_display_date: NaiveDate,
}

impl DaySelector {
    /// Window of `window_days` days starting at `start`, with `start` selected.
    pub fn new(start: NaiveDate, window_days: usize) -> Self {
        let displayed_dates = datetime::day_window(start, window_days.max(1));
        Self {
            displayed_dates,
            current_date: start,
            month_display_date: start,
        }
    }

    /// Window starting today.
    pub fn starting_today(window_days: usize) -> Self {
        Self::new(datetime::today(), window_days)
    }

    pub fn displayed_dates(&self) -> &[NaiveDate] {
        &self.displayed_dates
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Position of the current date in the window, if it is inside it.
    pub fn current_index(&self) -> Option<usize> {
        self.displayed_dates.iter().position(|d| *d == self.current_date)
    }

    pub fn is_current(&self, date: NaiveDate) -> bool {
        date == self.current_date
    }

    /// Select any date; the month header follows the selection.
    pub fn select(&mut self, date: NaiveDate) {
        if date != self.current_date {
            log::info!("Calendar: selected {}", datetime::format_ymd(date));
        }
        self.current_date = date;
        self.month_display_date = date;
    }

    /// Select the date at `index` in the window. Out-of-range indexes are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.displayed_dates.get(index).copied() {
            Some(date) => {
                self.select(date);
                true
            }
            None => false,
        }
    }

    /// Move one day forward, stopping at the end of the window.
    pub fn next(&mut self) {
        let next = self.current_index().map_or(0, |i| i + 1);
        if next < self.displayed_dates.len() {
            self.select_index(next);
        }
    }

    /// Move one day back, stopping at the start of the window.
    pub fn previous(&mut self) {
        if let Some(index) = self.current_index() {
            if index > 0 {
                self.select_index(index - 1);
            }
        } else {
            self.select_index(0);
        }
    }

    /// Month header for the current selection, e.g. "January 2025".
    ///
    /// Falls back to `YYYY-MM-DD` when `format` cannot render a date.
    pub fn month_label(&self, format: &str) -> String {
        datetime::format_date(self.month_display_date, format)
            .unwrap_or_else(|| datetime::format_ymd(self.month_display_date))
    }
}
