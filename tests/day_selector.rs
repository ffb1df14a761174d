use chrono::NaiveDate;
use innerbloom::content::{ponder_index_for, religions, PONDER_QUESTIONS, RELIGIOUS_QUOTES};
use innerbloom::ui::core::DaySelector;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_window_starts_at_selection() {
    let selector = DaySelector::new(date(2025, 1, 30), 30);
    assert_eq!(selector.displayed_dates().len(), 30);
    assert_eq!(selector.displayed_dates()[0], date(2025, 1, 30));
    assert_eq!(selector.current_date(), date(2025, 1, 30));
    assert_eq!(selector.current_index(), Some(0));
}

#[test]
fn test_empty_window_still_has_a_day() {
    let selector = DaySelector::new(date(2025, 1, 30), 0);
    assert_eq!(selector.displayed_dates().len(), 1);
}

#[test]
fn test_next_and_previous_clamp_to_window() {
    let mut selector = DaySelector::new(date(2025, 1, 1), 3);

    selector.previous();
    assert_eq!(selector.current_date(), date(2025, 1, 1));

    selector.next();
    selector.next();
    selector.next();
    assert_eq!(selector.current_date(), date(2025, 1, 3));
    assert_eq!(selector.current_index(), Some(2));
}

#[test]
fn test_month_label_follows_selection() {
    let mut selector = DaySelector::new(date(2025, 1, 30), 5);
    assert_eq!(selector.month_label("%B %Y"), "January 2025");

    selector.next();
    selector.next();
    assert_eq!(selector.current_date(), date(2025, 2, 1));
    assert_eq!(selector.month_label("%B %Y"), "February 2025");
}

#[test]
fn test_month_label_unrenderable_format_falls_back() {
    let selector = DaySelector::new(date(2025, 3, 4), 5);
    assert_eq!(selector.month_label("%B %Y %Z"), "2025-03-04");
    assert_eq!(selector.month_label("%H:%M"), "2025-03-04");
}

#[test]
fn test_select_index_out_of_range_ignored() {
    let mut selector = DaySelector::new(date(2025, 6, 1), 7);
    assert!(selector.select_index(6));
    assert_eq!(selector.current_date(), date(2025, 6, 7));
    assert!(!selector.select_index(7));
    assert_eq!(selector.current_date(), date(2025, 6, 7));
}

#[test]
fn test_select_outside_window_then_step_back_in() {
    let mut selector = DaySelector::new(date(2025, 6, 1), 7);
    selector.select(date(2025, 8, 1));
    assert!(selector.is_current(date(2025, 8, 1)));
    assert_eq!(selector.current_index(), None);

    selector.next();
    assert_eq!(selector.current_date(), date(2025, 6, 1));
}

#[test]
fn test_ponder_of_the_day_is_stable() {
    let day = date(2025, 3, 14);
    assert_eq!(ponder_index_for(day), ponder_index_for(day));
    assert!(ponder_index_for(day) < PONDER_QUESTIONS.len());
    assert_ne!(ponder_index_for(day), ponder_index_for(day.succ_opt().unwrap()));
}

#[test]
fn test_religions_match_quotes() {
    let names = religions();
    assert_eq!(names.len(), RELIGIOUS_QUOTES.len());
    assert!(names.iter().all(|name| RELIGIOUS_QUOTES.contains_key(name)));
}
