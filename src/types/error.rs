use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating caller input before it reaches the pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Latitude {0} is outside the range [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Longitude {0} is outside the range [-180, 180]")]
    InvalidLongitude(f64),

    #[error("Could not parse date '{0}', expected MM/DD/YYYY or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid calendar day {month:02}-{day:02}")]
    InvalidCalendarDay { month: u32, day: u32 },

    #[error("Requested date {date} is before the start of the record ({start})")]
    DateBeforeRecord { date: NaiveDate, start: NaiveDate },
}

/// Errors raised when a provider hands over a series that breaks the data contract.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Invalid date key '{key}' in series '{parameter}', expected YYYYMMDD")]
    InvalidDateKey { parameter: String, key: String },

    #[error("Non-finite value {value} on {date} in series '{parameter}'")]
    NonFiniteValue {
        parameter: String,
        date: NaiveDate,
        value: f64,
    },
}
