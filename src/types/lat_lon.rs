use crate::types::error::InputError;
use serde::Serialize;

/// A validated geographical coordinate.
///
/// Latitude is the first element, longitude the second. Construction through
/// [`LatLon::new`] guarantees latitude in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use power_climatology::LatLon;
///
/// let mexico_city = LatLon::new(19.4326, -99.1332).unwrap();
/// assert_eq!(mexico_city.lat(), 19.4326);
/// assert_eq!(mexico_city.lon(), -99.1332);
/// assert!(LatLon::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Result<Self, InputError> {
        // NaN fails both range checks.
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InputError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InputError::InvalidLongitude(lon));
        }
        Ok(Self(lat, lon))
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(LatLon::new(90.0, 180.0).is_ok());
        assert!(LatLon::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            LatLon::new(-90.5, 10.0),
            Err(InputError::InvalidLatitude(-90.5))
        );
        assert_eq!(
            LatLon::new(10.0, 180.01),
            Err(InputError::InvalidLongitude(180.01))
        );
    }

    #[test]
    fn test_non_finite() {
        assert!(LatLon::new(f64::NAN, 0.0).is_err());
        assert!(LatLon::new(0.0, f64::INFINITY).is_err());
    }
}
