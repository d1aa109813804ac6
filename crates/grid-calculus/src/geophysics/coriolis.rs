//! Coriolis frequency.
//!
//! f = 2 Ω sin(φ). At 45°N on the present-day Earth f ≈ 1.03×10⁻⁴ s⁻¹;
//! it changes sign across the equator and vanishes on it.

use geo_common::constants::{EARTH_ROTATION_RATE, MAX_ABS_LATITUDE};
use geo_common::{GeoError, GeoResult};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Coriolis parameter at a single latitude (degrees), in rad/s.
pub fn coriolis_parameter(lat_deg: f64, rotation_rate: f64) -> f64 {
    2.0 * rotation_rate * lat_deg.to_radians().sin()
}

/// Coriolis frequency at every latitude in `lat`.
///
/// `rotation_rate` defaults to Earth's present rate, 7.2921×10⁻⁵ rad/s.
/// Supply another rate for a different epoch, another planet, or to get f
/// in other units of frequency.
pub fn coriolis_frequency<S, D>(lat: &ArrayBase<S, D>, rotation_rate: Option<f64>) -> GeoResult<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let omega = rotation_rate.unwrap_or(EARTH_ROTATION_RATE);
    if !omega.is_finite() {
        return Err(GeoError::invalid_parameter(
            "rotation_rate",
            format!("must be finite, got {}", omega),
        ));
    }

    let max_abs = lat
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max_abs > MAX_ABS_LATITUDE {
        return Err(GeoError::coordinate_range(format!(
            "latitude value(s) up to {} out of realistic bounds",
            max_abs
        )));
    }

    Ok(lat.mapv(|phi| coriolis_parameter(phi, omega)))
}
