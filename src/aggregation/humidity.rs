//! Relative humidity from air temperature and dew point.

const MAGNUS_A: f64 = 17.625;
const MAGNUS_B: f64 = 243.04; // °C

/// Relative humidity in percent, using the Magnus-Tetens approximation
/// `RH = 100 * exp(a*Td/(b+Td)) / exp(a*T/(b+T))` with `a = 17.625`, `b = 243.04`.
///
/// Returns exactly `100.0` when `temperature == dew_point`. A dew point above the
/// temperature yields values over 100 (supersaturation); no clamping is applied.
///
/// The formula is singular at `-243.04 °C` for either argument. That temperature is
/// physically impossible and is not guarded against.
///
/// # Examples
///
/// ```
/// use power_climatology::relative_humidity;
///
/// assert_eq!(relative_humidity(21.5, 21.5), 100.0);
/// let rh = relative_humidity(30.0, 10.0);
/// assert!(rh > 28.0 && rh < 29.0);
/// ```
#[allow(clippy::float_cmp)]
pub fn relative_humidity(temperature: f64, dew_point: f64) -> f64 {
    if temperature == dew_point {
        return 100.0;
    }
    100.0 * saturation_term(dew_point) / saturation_term(temperature)
}

fn saturation_term(celsius: f64) -> f64 {
    (MAGNUS_A * celsius / (MAGNUS_B + celsius)).exp()
}
