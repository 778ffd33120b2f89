use bon::Builder;
use serde::{Deserialize, Serialize};

pub const VERY_HOT: f64 = 35.0;
pub const VERY_COLD: f64 = 10.0;
pub const VERY_WINDY: f64 = 10.0;
pub const VERY_WET: f64 = 20.0;

/// Classification cutoffs. Temperatures in °C, wind in m/s, humidity in %.
///
/// Every comparison against these values is strict, so an average sitting exactly
/// on a threshold does not raise the flag.
///
/// # Examples
///
/// ```
/// use power_climatology::Thresholds;
///
/// let defaults = Thresholds::default();
/// assert_eq!(defaults.very_hot, 35.0);
///
/// let desert = Thresholds::builder().very_hot(40.0).build();
/// assert_eq!(desert.very_hot, 40.0);
/// assert_eq!(desert.very_cold, defaults.very_cold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
pub struct Thresholds {
    #[serde(rename = "VERY_HOT")]
    #[builder(default = VERY_HOT)]
    pub very_hot: f64,

    #[serde(rename = "VERY_COLD")]
    #[builder(default = VERY_COLD)]
    pub very_cold: f64,

    #[serde(rename = "VERY_WINDY")]
    #[builder(default = VERY_WINDY)]
    pub very_windy: f64,

    #[serde(rename = "VERY_WET")]
    #[builder(default = VERY_WET)]
    pub very_wet: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            very_hot: VERY_HOT,
            very_cold: VERY_COLD,
            very_windy: VERY_WINDY,
            very_wet: VERY_WET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(Thresholds::builder().build(), Thresholds::default());
    }

    #[test]
    fn test_serializes_with_upper_case_keys() {
        let json = serde_json::to_value(Thresholds::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "VERY_HOT": 35.0,
                "VERY_COLD": 10.0,
                "VERY_WINDY": 10.0,
                "VERY_WET": 20.0,
            })
        );
    }
}
