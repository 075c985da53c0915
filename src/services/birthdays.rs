//! Upcoming birthday lookup.
//!
//! Finds the contacts whose next birthday falls within a window of days
//! starting today.

use crate::models::AddressBook;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Default width of the upcoming-birthday window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday is coming up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The date the birthday is next observed
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%d.%m.%Y"))
    }
}

/// Contacts with a birthday between `today` and `today + window_days`,
/// both ends inclusive.
///
/// Results follow address book order, not date order. A birthday that has
/// already passed this year is looked up in the next year.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let window = i64::from(window_days);

    book.iter()
        .filter_map(|record| {
            let born = record.birthday()?.date();
            let date = next_occurrence(born, today)?;
            let days_until = (date - today).num_days();
            (0..=window).contains(&days_until).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                date,
            })
        })
        .collect()
}

/// The first anniversary of `born` on or after `today`.
///
/// `None` only when the date would fall outside chrono's calendar range.
pub fn next_occurrence(born: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(born, today.year())?;
    if this_year < today {
        anniversary(born, today.year() + 1)
    } else {
        Some(this_year)
    }
}

// 29 February is observed on 1 March in common years
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
