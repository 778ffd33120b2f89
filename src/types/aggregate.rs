//! Output types of the aggregation pipeline.

use crate::types::thresholds::Thresholds;
use crate::types::year::Year;
use serde::{Deserialize, Serialize};

/// One year's matched values for the target calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlySample {
    pub year: Year,
    pub temperature: f64,       // T2M, °C
    pub wind_speed: f64,        // WS2M, m/s
    pub dew_point: f64,         // T2MDEW, °C
    pub relative_humidity: f64, // derived, %
}

/// Cross-year means, rounded to two decimals for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub temperature: f64,
    pub wind: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conditions {
    pub very_hot: bool,
    pub very_cold: bool,
    pub very_windy: bool,
    pub very_wet: bool,
}

impl Conditions {
    pub fn any(&self) -> bool {
        self.very_hot || self.very_cold || self.very_windy || self.very_wet
    }
}

/// The classified climatology for one location and calendar day.
///
/// `years_used == 0` means no year had a complete set of observations; the averages are
/// then all `0.0` and no condition is raised, whatever the thresholds. The thresholds
/// that produced the flags are carried along so consumers can audit the classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    years_used: usize,
    averages: Averages,
    conditions: Conditions,
    thresholds: Thresholds,
}

impl AggregateResult {
    pub(crate) fn new(
        years_used: usize,
        averages: Averages,
        conditions: Conditions,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            years_used,
            averages,
            conditions,
            thresholds,
        }
    }

    pub fn years_used(&self) -> usize {
        self.years_used
    }

    pub fn averages(&self) -> Averages {
        self.averages
    }

    pub fn conditions(&self) -> Conditions {
        self.conditions
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn is_empty(&self) -> bool {
        self.years_used == 0
    }
}
