//! Cross-year averaging and threshold classification.

use crate::aggregation::filtering::{CalendarDayFilterExt, FilteredSet};
use crate::aggregation::humidity::relative_humidity;
use crate::types::aggregate::{AggregateResult, Averages, Conditions, YearlySample};
use crate::types::calendar_day::CalendarDay;
use crate::types::parameter::Parameter;
use crate::types::series::ParameterSet;
use crate::types::thresholds::Thresholds;
use log::debug;

/// Turns calendar-day filtered series into a classified [`AggregateResult`].
///
/// The aggregator is a plain value holding its [`Thresholds`]; it keeps no state between
/// calls, so the same input always produces the same result.
///
/// # Examples
///
/// ```
/// use power_climatology::{CalendarDay, ClimatologyAggregator, DailySeries, ParameterSet, Thresholds};
///
/// let mut set = ParameterSet::new();
/// set.insert("T2M", DailySeries::parse_entries("T2M", [("20200715", 36.0), ("20210715", 37.0)])?);
/// set.insert("T2MDEW", DailySeries::parse_entries("T2MDEW", [("20200715", 36.0), ("20210715", 20.0)])?);
/// set.insert("WS2M", DailySeries::parse_entries("WS2M", [("20200715", 5.0), ("20210715", 6.0)])?);
///
/// let aggregator = ClimatologyAggregator::new(Thresholds::default());
/// let result = aggregator.aggregate_day(&set, CalendarDay::new(7, 15)?);
///
/// assert_eq!(result.years_used(), 2);
/// assert_eq!(result.averages().temperature, 36.5);
/// assert!(result.conditions().very_hot);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimatologyAggregator {
    thresholds: Thresholds,
}

impl ClimatologyAggregator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Builds one sample per year that has temperature, wind speed and dew point.
    ///
    /// Years are driven by the temperature series. A year missing either of the other two
    /// values is skipped rather than treated as an error. Samples are ordered by year.
    pub fn samples(&self, filtered: &FilteredSet) -> Vec<YearlySample> {
        let Some(temperatures) = filtered.parameter(Parameter::Temperature) else {
            debug!("No {} series present, nothing to aggregate", Parameter::Temperature);
            return Vec::new();
        };
        let winds = filtered.parameter(Parameter::WindSpeed);
        let dew_points = filtered.parameter(Parameter::DewPoint);

        temperatures
            .iter()
            .filter_map(|(year, temperature)| {
                let wind_speed = winds.and_then(|w| w.get(year).copied());
                let dew_point = dew_points.and_then(|d| d.get(year).copied());
                match (wind_speed, dew_point) {
                    (Some(wind_speed), Some(dew_point)) => Some(YearlySample {
                        year: *year,
                        temperature: *temperature,
                        wind_speed,
                        dew_point,
                        relative_humidity: relative_humidity(*temperature, dew_point),
                    }),
                    _ => {
                        debug!(
                            "Excluding {}: wind speed present = {}, dew point present = {}",
                            year,
                            wind_speed.is_some(),
                            dew_point.is_some()
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Averages and classifies a set of samples.
    ///
    /// With no samples every average is `0.0` and every condition is `false`; callers tell
    /// this case apart through [`AggregateResult::years_used`].
    pub fn summarize(&self, samples: &[YearlySample]) -> AggregateResult {
        let temperature = mean(samples.iter().map(|s| s.temperature));
        let wind = mean(samples.iter().map(|s| s.wind_speed));
        let humidity = mean(samples.iter().map(|s| s.relative_humidity));

        // Classification uses the unrounded means. An empty sample raises no flag,
        // even though its 0.0 averages sit below the cold threshold.
        let conditions = if samples.is_empty() {
            Conditions::default()
        } else {
            Conditions {
                very_hot: temperature > self.thresholds.very_hot,
                very_cold: temperature < self.thresholds.very_cold,
                very_windy: wind > self.thresholds.very_windy,
                very_wet: humidity > self.thresholds.very_wet,
            }
        };

        AggregateResult::new(
            samples.len(),
            Averages {
                temperature: round2(temperature),
                wind: round2(wind),
                humidity: round2(humidity),
            },
            conditions,
            self.thresholds,
        )
    }

    pub fn aggregate(&self, filtered: &FilteredSet) -> AggregateResult {
        self.summarize(&self.samples(filtered))
    }

    /// Filters `set` on `day` and aggregates the result in one go.
    pub fn aggregate_day(&self, set: &ParameterSet, day: CalendarDay) -> AggregateResult {
        let result = self.aggregate(&set.filter_calendar_day(day));
        debug!(
            "Aggregated {} years for {}: {:?}",
            result.years_used(),
            day,
            result.conditions()
        );
        result
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounds half away from zero to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
