pub mod aggregate;
pub mod any_date;
pub mod calendar_day;
pub mod error;
pub mod lat_lon;
pub mod parameter;
pub mod series;
pub mod thresholds;
pub mod year;
