//! Static content shown on the Home, Ponders, Progress and Resources tabs.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub const MOTIVATIONAL_QUOTES: [&str; 4] = [
    "Believe in yourself and all that you are.",
    "The only way to do great work is to love what you do.",
    "Success is not the key to happiness. Happiness is the key to success.",
    "The best way to predict the future is to create it.",
];

pub const PONDER_QUESTIONS: [&str; 4] = [
    "What are you grateful for today?",
    "What is one thing you want to accomplish this week?",
    "How do you define success?",
    "What motivates you to keep going?",
];

/// Revealed by the "Ponder of the Day" box on the Home tab.
pub const PONDER_OF_THE_DAY: &str = "What is the most meaningful thing in your life?";

/// Labels of the Home tab's stat boxes, in grid order.
pub const STAT_BOX_NAMES: [&str; 4] = [
    "Journal Streak",
    "Available Love Sparks",
    "Exercises Completed",
    "More Stats",
];

pub const RESOURCES: [(&str, &str); 4] = [
    ("Breathing", "Box breathing: in 4, hold 4, out 4, hold 4. Repeat four times."),
    ("Gratitude", "Write three small things that went well today and why."),
    ("Movement", "A ten minute walk counts. Add it as a goal and tick it off."),
    ("Rest", "Same bedtime every night, screens off thirty minutes before."),
];

/// Quotes keyed by tradition; iteration order is the sorted key order.
pub static RELIGIOUS_QUOTES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "Christian",
            "Faith is taking the first step even when you don't see the whole staircase.",
        ),
        ("Islam", "With God, all things are possible."),
        ("Judaism", "Trust in the Lord with all your heart."),
    ])
});

/// Question shown on `date` before the user asks for another one.
pub fn ponder_index_for(date: NaiveDate) -> usize {
    date.ordinal0() as usize % PONDER_QUESTIONS.len()
}

/// Religions in display order.
pub fn religions() -> Vec<&'static str> {
    RELIGIOUS_QUOTES.keys().copied().collect()
}
