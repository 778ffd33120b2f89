//! Daily time series as handed over by a data provider.

use crate::types::error::SeriesError;
use crate::types::parameter::Parameter;
use chrono::NaiveDate;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// One parameter's values keyed by the date they were observed on.
///
/// Dates are unique and iteration is chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    values: BTreeMap<NaiveDate, f64>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from provider entries keyed by `YYYYMMDD` strings.
    ///
    /// `parameter` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidDateKey`] for keys that are not an 8-digit date, and
    /// [`SeriesError::NonFiniteValue`] for `NaN` or infinite values.
    pub fn parse_entries<'a, I>(parameter: &str, entries: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut series = Self::new();
        for (key, value) in entries {
            let date = parse_date_key(parameter, key)?;
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    parameter: parameter.to_string(),
                    date,
                    value,
                });
            }
            series.insert(date, value);
        }
        Ok(series)
    }

    pub fn insert(&mut self, date: NaiveDate, value: f64) -> Option<f64> {
        self.values.insert(date, value)
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.values.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.values.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.values.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.values.iter().map(|(date, value)| (*date, *value))
    }
}

impl FromIterator<(NaiveDate, f64)> for DailySeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parses an 8-character `YYYYMMDD` provider key.
pub(crate) fn parse_date_key(parameter: &str, key: &str) -> Result<NaiveDate, SeriesError> {
    let invalid = || SeriesError::InvalidDateKey {
        parameter: parameter.to_string(),
        key: key.to_string(),
    };
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(key, "%Y%m%d").map_err(|_| invalid())
}

/// All series of one provider response, keyed by parameter name.
///
/// Names are kept as strings so parameters unknown to [`Parameter`] pass through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    series: BTreeMap<String, DailySeries>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw `name -> (YYYYMMDD -> value)` maps, failing on the first malformed entry.
    pub fn from_raw<N, K>(raw: BTreeMap<N, BTreeMap<K, f64>>) -> Result<Self, SeriesError>
    where
        N: Into<String>,
        K: AsRef<str>,
    {
        let mut set = Self::new();
        for (name, entries) in raw {
            let name = name.into();
            let series = DailySeries::parse_entries(
                &name,
                entries.iter().map(|(key, value)| (key.as_ref(), *value)),
            )?;
            set.insert(name, series);
        }
        Ok(set)
    }

    pub fn insert(&mut self, name: impl Into<String>, series: DailySeries) -> Option<DailySeries> {
        self.series.insert(name.into(), series)
    }

    pub fn get(&self, name: &str) -> Option<&DailySeries> {
        self.series.get(name)
    }

    pub fn parameter(&self, parameter: Parameter) -> Option<&DailySeries> {
        self.get(parameter.code())
    }

    /// Names of the required parameters that are absent from this set.
    pub fn missing_required(&self) -> Vec<Parameter> {
        Parameter::REQUIRED
            .into_iter()
            .filter(|p| self.parameter(*p).is_none())
            .collect()
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

    pub fn iter(&self) -> btree_map::Iter<'_, String, DailySeries> {
        self.series.iter()
    }
}

impl FromIterator<(String, DailySeries)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (String, DailySeries)>>(iter: T) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a DailySeries);
    type IntoIter = btree_map::Iter<'a, String, DailySeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
