//! Deserialization of the NASA POWER daily point JSON format.
//!
//! Only the parts the pipeline reads are modelled:
//!
//! ```json
//! {
//!   "header": { "fill_value": -999.0, ... },
//!   "properties": { "parameter": { "T2M": { "20200715": 36.0, ... }, ... } },
//!   ...
//! }
//! ```

use crate::types::error::SeriesError;
use crate::types::series::{DailySeries, ParameterSet};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Marker POWER uses for days without data.
pub const FILL_VALUE: f64 = -999.0;

#[derive(Debug, Deserialize)]
pub(crate) struct PowerResponse {
    #[serde(default)]
    header: Option<PowerHeader>,
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerHeader {
    #[serde(default)]
    fill_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: BTreeMap<String, BTreeMap<String, f64>>,
}

impl PowerResponse {
    /// Converts the raw maps into typed series, dropping fill values.
    pub(crate) fn into_parameter_set(self) -> Result<ParameterSet, SeriesError> {
        let fill_value = self
            .header
            .and_then(|h| h.fill_value)
            .unwrap_or(FILL_VALUE);

        let mut set = ParameterSet::new();
        for (name, entries) in self.properties.parameter {
            #[allow(clippy::float_cmp)]
            let present = entries
                .iter()
                .filter(|(_, value)| **value != fill_value)
                .map(|(key, value)| (key.as_str(), *value));
            let series = DailySeries::parse_entries(&name, present)?;
            let dropped = entries.len() - series.len();
            if dropped > 0 {
                debug!("Dropped {} fill values from {}", dropped, name);
            }
            set.insert(name, series);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"{
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [-99.13, 19.43, 2240.0] },
        "properties": {
            "parameter": {
                "T2M": { "20200715": 18.4, "20210715": 17.9, "20220715": -999.0 },
                "T2MDEW": { "20200715": 11.2, "20210715": 12.0, "20220715": -999.0 },
                "WS2M": { "20200715": 1.9, "20210715": 2.3, "20220715": 2.1 }
            }
        },
        "header": {
            "title": "NASA/POWER Daily Point",
            "fill_value": -999.0,
            "start": "20200715",
            "end": "20220715"
        },
        "messages": [],
        "parameters": { "T2M": { "units": "C", "longname": "Temperature at 2 Meters" } },
        "times": { "data": 1.2, "process": 0.1 }
    }"#;

    #[test]
    fn test_parse_drops_fill_values() {
        let response: PowerResponse = serde_json::from_str(SAMPLE).unwrap();
        let set = response.into_parameter_set().unwrap();

        assert_eq!(set.len(), 3);
        let t2m = set.get("T2M").unwrap();
        assert_eq!(t2m.len(), 2);
        assert_eq!(
            t2m.get(NaiveDate::from_ymd_opt(2020, 7, 15).unwrap()),
            Some(18.4)
        );
        assert_eq!(t2m.get(NaiveDate::from_ymd_opt(2022, 7, 15).unwrap()), None);
        assert_eq!(set.get("WS2M").unwrap().len(), 3);
    }

    #[test]
    fn test_missing_header_uses_default_fill_value() {
        let json = r#"{ "properties": { "parameter": { "T2M": { "20200101": -999.0, "20200102": 1.0 } } } }"#;
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        let set = response.into_parameter_set().unwrap();
        assert_eq!(set.get("T2M").unwrap().len(), 1);
    }

    #[test]
    fn test_bad_key_fails_fast() {
        let json = r#"{ "properties": { "parameter": { "WS2M": { "2020-01-01": 1.0 } } } }"#;
        let response: PowerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_parameter_set(),
            Err(SeriesError::InvalidDateKey {
                parameter: "WS2M".to_string(),
                key: "2020-01-01".to_string(),
            })
        );
    }

    #[test]
    fn test_non_numeric_value_is_a_decode_error() {
        let json = r#"{ "properties": { "parameter": { "T2M": { "20200101": "warm" } } } }"#;
        assert!(serde_json::from_str::<PowerResponse>(json).is_err());
    }
}
