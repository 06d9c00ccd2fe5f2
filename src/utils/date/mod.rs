// Date utility functions

use chrono::NaiveDate;

/// Full header label, e.g. "Monday, February 02, 2026"
pub fn long_day_label(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

/// Compact label for list rows, e.g. "Mon Feb 02"
pub fn short_day_label(date: NaiveDate) -> String {
    date.format("%a %b %d").to_string()
}
