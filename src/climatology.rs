//! Main entry point: fetches the daily history around a point and reports how often
//! each weather condition shows up on the requested calendar day.

use crate::aggregation::aggregator::ClimatologyAggregator;
use crate::aggregation::filtering::CalendarDayFilterExt;
use crate::error::ClimatologyError;
use crate::power::cache::CachedProvider;
use crate::power::client::{PowerClient, PowerConfig};
use crate::power::provider::{DailyProvider, FetchRequest, DEFAULT_HISTORY_START};
use crate::types::aggregate::{AggregateResult, YearlySample};
use crate::types::any_date::AnyDate;
use crate::types::calendar_day::CalendarDay;
use crate::types::error::InputError;
use crate::types::lat_lon::LatLon;
use crate::types::series::ParameterSet;
use crate::types::thresholds::Thresholds;
use bon::bon;
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use serde::Serialize;

/// Result of a [`Climatology::likelihood`] request.
///
/// Serializes flat: the [`AggregateResult`] fields sit next to the request details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimatologyReport {
    pub source: String,
    pub location: LatLon,
    pub date: NaiveDate,
    /// First and last day of the history that was requested from the provider.
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(flatten)]
    pub result: AggregateResult,
    /// The per-year values behind the averages, ordered by year.
    pub samples: Vec<YearlySample>,
}

/// The client tying a data provider to the aggregation pipeline.
///
/// By default it talks to NASA POWER and keeps fetched histories in memory, keyed by
/// point and date range. Any other [`DailyProvider`] can be plugged in with
/// [`Climatology::with_provider`].
///
/// # Examples
///
/// ```no_run
/// # use power_climatology::{Climatology, ClimatologyError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimatologyError> {
/// let client = Climatology::new()?;
/// let report = client
///     .likelihood()
///     .location(LatLon::new(19.4326, -99.1332)?)
///     .date("07/15/2025")
///     .call()
///     .await?;
///
/// println!(
///     "{} years of July 15th, very hot: {}",
///     report.result.years_used(),
///     report.result.conditions().very_hot
/// );
/// # Ok(())
/// # }
/// ```
pub struct Climatology<P = CachedProvider<PowerClient>> {
    provider: P,
    aggregator: ClimatologyAggregator,
}

impl Climatology {
    /// Creates a client for NASA POWER with default settings and thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::Fetch`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ClimatologyError> {
        Self::with_power_config(PowerConfig::default())
    }

    pub fn with_power_config(config: PowerConfig) -> Result<Self, ClimatologyError> {
        let client = PowerClient::with_config(config)?;
        Ok(Self::with_provider(CachedProvider::new(client)))
    }
}

#[bon]
impl<P: DailyProvider + Sync> Climatology<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            aggregator: ClimatologyAggregator::default(),
        }
    }

    /// Replaces the classification thresholds used for every following request.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.aggregator = ClimatologyAggregator::new(thresholds);
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.aggregator.thresholds()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs filtering and aggregation on data the caller already holds.
    pub fn aggregate_for(&self, set: &ParameterSet, day: CalendarDay) -> AggregateResult {
        self.aggregator.aggregate_day(set, day)
    }

    /// Estimates the weather conditions for a point on a calendar day.
    ///
    /// Downloads the daily history from `since` (default 2000-01-01) up to `date`, keeps the
    /// observations made on the same month and day, and classifies their averages. Only the
    /// month and day of `date` matter for the statistics; a date in the future is allowed and
    /// the history then ends today.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The point of interest.
    /// * `.date(impl AnyDate)`: **Required.** A `NaiveDate`, or a string as `MM/DD/YYYY` or `YYYY-MM-DD`.
    /// * `.since(NaiveDate)`: Optional. First day of history to request.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::Input`] if the date cannot be parsed or falls before `since`,
    /// and [`ClimatologyError::Fetch`] if the provider fails. A history without any usable year
    /// is not an error; the report then has `years_used == 0`.
    #[builder]
    pub async fn likelihood<D: AnyDate>(
        &self,
        location: LatLon,
        date: D,
        since: Option<NaiveDate>,
    ) -> Result<ClimatologyReport, ClimatologyError> {
        let date = date.resolve_date()?;
        let (start, end) = fetch_period(
            date,
            since.unwrap_or(DEFAULT_HISTORY_START),
            Utc::now().date_naive(),
        )?;

        let set = self
            .provider
            .fetch_daily(FetchRequest::new(location, start, end))
            .await?;

        let day = CalendarDay::from(date);
        let samples = self.aggregator.samples(&set.filter_calendar_day(day));
        let result = self.aggregator.summarize(&samples);

        if result.is_empty() {
            warn!(
                "No complete year of data for {} at ({}, {})",
                day,
                location.lat(),
                location.lon()
            );
        } else {
            info!(
                "Aggregated {} years for {} at ({}, {})",
                result.years_used(),
                day,
                location.lat(),
                location.lon()
            );
        }

        Ok(ClimatologyReport {
            source: self.provider.source_name().to_string(),
            location,
            date,
            start,
            end,
            result,
            samples,
        })
    }
}

/// The history window to download: `since` up to `date`, never past `today`.
fn fetch_period(
    date: NaiveDate,
    since: NaiveDate,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), InputError> {
    let end = date.min(today);
    if end < since {
        return Err(InputError::DateBeforeRecord { date, start: since });
    }
    Ok((since, end))
}
