mod aggregation;
mod climatology;
mod error;
mod power;
mod types;

pub use climatology::*;
pub use error::ClimatologyError;

pub use aggregation::aggregator::ClimatologyAggregator;
pub use aggregation::filtering::{CalendarDayFilterExt, FilteredSet, YearlyValues};
pub use aggregation::humidity::relative_humidity;

pub use power::cache::CachedProvider;
pub use power::client::{PowerClient, PowerConfig, DEFAULT_BASE_URL};
pub use power::error::FetchError;
pub use power::provider::{DailyProvider, FetchRequest, DEFAULT_HISTORY_START};
pub use power::response::FILL_VALUE;

pub use types::aggregate::{AggregateResult, Averages, Conditions, YearlySample};
pub use types::any_date::AnyDate;
pub use types::calendar_day::CalendarDay;
pub use types::error::{InputError, SeriesError};
pub use types::lat_lon::LatLon;
pub use types::parameter::Parameter;
pub use types::series::{DailySeries, ParameterSet};
pub use types::thresholds::{Thresholds, VERY_COLD, VERY_HOT, VERY_WET, VERY_WINDY};
pub use types::year::Year;
