use crate::power::error::FetchError;
use crate::types::lat_lon::LatLon;
use crate::types::series::ParameterSet;
use chrono::NaiveDate;
use serde::Serialize;
use std::future::Future;

/// First day of the record requested by default.
pub const DEFAULT_HISTORY_START: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default history start"),
};

/// What to download: a point and an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FetchRequest {
    pub location: LatLon,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchRequest {
    pub fn new(location: LatLon, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            location,
            start,
            end,
        }
    }
}

/// A source of multi-year daily observations.
///
/// Implementations must return a [`ParameterSet`] whose series are keyed by observation
/// date and contain at least `T2M`, `T2MDEW` and `WS2M`. The returned value belongs to the
/// caller; nothing is shared between requests.
pub trait DailyProvider {
    /// Short label reported alongside results, e.g. `"NASA POWER"`.
    fn source_name(&self) -> &str;

    fn fetch_daily(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<ParameterSet, FetchError>> + Send;
}
