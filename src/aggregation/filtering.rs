use crate::types::calendar_day::CalendarDay;
use crate::types::parameter::Parameter;
use crate::types::series::{DailySeries, ParameterSet};
use crate::types::year::Year;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Values of one parameter on a single calendar day, one per year.
pub type YearlyValues = BTreeMap<Year, f64>;

/// Every parameter of a [`ParameterSet`] reduced to a single calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSet {
    day: Option<CalendarDay>,
    series: BTreeMap<String, YearlyValues>,
}

impl FilteredSet {
    /// The calendar day this set was filtered on. `None` for a hand-assembled set.
    pub fn day(&self) -> Option<CalendarDay> {
        self.day
    }

    pub fn insert(&mut self, name: impl Into<String>, values: YearlyValues) {
        self.series.insert(name.into(), values);
    }

    pub fn get(&self, name: &str) -> Option<&YearlyValues> {
        self.series.get(name)
    }

    pub fn parameter(&self, parameter: Parameter) -> Option<&YearlyValues> {
        self.get(parameter.code())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

pub trait CalendarDayFilterExt {
    type Output;

    /// Keeps only the observations made on `day`, keyed by the year they were made in.
    ///
    /// Matching is exact on month and day. A year that lacks the day (February 29th in
    /// common years) is absent from the output. The result does not depend on the
    /// order of the input.
    fn filter_calendar_day(&self, day: CalendarDay) -> Self::Output;
}

impl CalendarDayFilterExt for DailySeries {
    type Output = YearlyValues;

    fn filter_calendar_day(&self, day: CalendarDay) -> YearlyValues {
        // Dates are unique, so each year contributes at most one entry.
        self.iter()
            .filter(|(date, _)| day.matches(*date))
            .map(|(date, value)| (Year(date.year()), value))
            .collect()
    }
}

impl CalendarDayFilterExt for ParameterSet {
    type Output = FilteredSet;

    fn filter_calendar_day(&self, day: CalendarDay) -> FilteredSet {
        FilteredSet {
            day: Some(day),
            series: self
                .iter()
                .map(|(name, series)| (name.clone(), series.filter_calendar_day(day)))
                .collect(),
        }
    }
}
