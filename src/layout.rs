use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// Map a resolved date to the relative directory it sorts into.
/// Four-digit year, zero-padded two-digit month and day.
pub fn date_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!(
        "{:04}/{:02}/{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}
