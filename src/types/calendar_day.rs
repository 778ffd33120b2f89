//! The filtering target of the pipeline: a month and day without a year.

use crate::types::error::InputError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

// Any leap year works here; it only has to accept February 29th.
const LEAP_YEAR: i32 = 2000;

/// A `(month, day)` pair independent of any year.
///
/// Historical observations from different years are aligned on this value.
/// February 29th is a valid calendar day, it simply only occurs in leap years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use power_climatology::CalendarDay;
///
/// let day = CalendarDay::new(7, 15).unwrap();
/// let date = NaiveDate::from_ymd_opt(2021, 7, 15).unwrap();
/// assert_eq!(CalendarDay::from(date), day);
/// assert!(day.matches(date));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct CalendarDay {
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// Creates a calendar day, rejecting combinations that exist in no year (e.g. April 31st).
    pub fn new(month: u32, day: u32) -> Result<Self, InputError> {
        NaiveDate::from_ymd_opt(LEAP_YEAR, month, day)
            .map(|_| Self { month, day })
            .ok_or(InputError::InvalidCalendarDay { month, day })
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Exact match on month and day. No leap-year shifting, no neighbouring-day tolerance.
    pub fn matches(self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for CalendarDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_impossible_days() {
        assert_eq!(
            CalendarDay::new(4, 31),
            Err(InputError::InvalidCalendarDay { month: 4, day: 31 })
        );
        assert!(CalendarDay::new(13, 1).is_err());
        assert!(CalendarDay::new(0, 1).is_err());
        assert!(CalendarDay::new(2, 29).is_ok());
    }

    #[test]
    fn test_from_date_discards_year() {
        let a = CalendarDay::from(NaiveDate::from_ymd_opt(2001, 12, 31).unwrap());
        let b = CalendarDay::from(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(a, b);
        assert_eq!(a.month(), 12);
        assert_eq!(a.day(), 31);
    }

    #[test]
    fn test_leap_day_only_matches_leap_years() {
        let leap_day = CalendarDay::new(2, 29).unwrap();
        assert!(leap_day.matches(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()));
        assert!(!leap_day.matches(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap()));
        assert!(!leap_day.matches(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(CalendarDay::new(7, 5).unwrap().to_string(), "07-05");
    }
}
