//! NASA POWER daily parameter codes.

use std::fmt;

/// A daily parameter served by the NASA POWER point API.
///
/// The aggregation pipeline only reads [`Parameter::Temperature`], [`Parameter::DewPoint`]
/// and [`Parameter::WindSpeed`]; the others are requested by default so a single
/// download carries everything a caller may want to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// `T2M`: temperature at 2 meters, °C.
    Temperature,
    /// `T2MDEW`: dew/frost point at 2 meters, °C.
    DewPoint,
    /// `PRECTOTCORR`: bias-corrected precipitation, mm/day.
    Precipitation,
    /// `WS2M`: wind speed at 2 meters, m/s.
    WindSpeed,
    /// `CLOUD_AMT`: cloud amount, %.
    CloudAmount,
    /// `QV2M`: specific humidity at 2 meters, g/kg.
    SpecificHumidity,
    /// `ALLSKY_KT`: all-sky insolation clearness index.
    ClearnessIndex,
    /// `FROST_DAYS`: frost days.
    FrostDays,
}

impl Parameter {
    /// Every parameter, in the order they are sent to the provider.
    pub const ALL: [Parameter; 8] = [
        Parameter::Temperature,
        Parameter::DewPoint,
        Parameter::Precipitation,
        Parameter::WindSpeed,
        Parameter::CloudAmount,
        Parameter::SpecificHumidity,
        Parameter::ClearnessIndex,
        Parameter::FrostDays,
    ];

    /// The parameters the aggregator cannot work without.
    pub const REQUIRED: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::DewPoint,
        Parameter::WindSpeed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Parameter::Temperature => "T2M",
            Parameter::DewPoint => "T2MDEW",
            Parameter::Precipitation => "PRECTOTCORR",
            Parameter::WindSpeed => "WS2M",
            Parameter::CloudAmount => "CLOUD_AMT",
            Parameter::SpecificHumidity => "QV2M",
            Parameter::ClearnessIndex => "ALLSKY_KT",
            Parameter::FrostDays => "FROST_DAYS",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_reversible() {
        for parameter in Parameter::ALL {
            assert_eq!(Parameter::from_code(parameter.code()), Some(parameter));
        }
        assert_eq!(Parameter::from_code("T2M_MAX"), None);
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Parameter::DewPoint.to_string(), "T2MDEW");
        assert_eq!(format!("{}", Parameter::WindSpeed), "WS2M");
    }
}
