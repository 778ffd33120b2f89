use crate::types::error::InputError;
use chrono::NaiveDate;

/// Anything that can be resolved into a single calendar date.
///
/// Strings are accepted as `MM/DD/YYYY` (the format web clients send) or ISO `YYYY-MM-DD`.
pub trait AnyDate {
    fn resolve_date(self) -> Result<NaiveDate, InputError>;
}

impl AnyDate for NaiveDate {
    fn resolve_date(self) -> Result<NaiveDate, InputError> {
        Ok(self)
    }
}

impl AnyDate for &str {
    fn resolve_date(self) -> Result<NaiveDate, InputError> {
        let trimmed = self.trim();
        NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .map_err(|_| InputError::InvalidDate(self.to_string()))
    }
}

impl AnyDate for String {
    fn resolve_date(self) -> Result<NaiveDate, InputError> {
        self.as_str().resolve_date()
    }
}

impl AnyDate for &String {
    fn resolve_date(self) -> Result<NaiveDate, InputError> {
        self.as_str().resolve_date()
    }
}
