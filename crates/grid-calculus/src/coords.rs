//! Plausibility checks for latitude/longitude arrays.

use geo_common::constants::{MAX_ABS_LATITUDE, MAX_LONGITUDE, MIN_LONGITUDE};
use geo_common::{GeoError, GeoResult};
use ndarray::{ArrayBase, Data, Dimension};

/// Whether `lat`, `lon` look like geographic coordinates.
///
/// Every finite latitude must satisfy |lat| <= 90 and every finite
/// longitude -180 <= lon <= 360. Non-finite entries (fill values, masked
/// cells) are skipped.
pub fn is_lat_lon<S1, D1, S2, D2>(lat: &ArrayBase<S1, D1>, lon: &ArrayBase<S2, D2>) -> bool
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    first_bad_latitude(lat).is_none() && first_bad_longitude(lon).is_none()
}

/// Like [`is_lat_lon`] but reports the first offending value.
pub fn ensure_lat_lon<S1, D1, S2, D2>(lat: &ArrayBase<S1, D1>, lon: &ArrayBase<S2, D2>) -> GeoResult<()>
where
    S1: Data<Elem = f64>,
    D1: Dimension,
    S2: Data<Elem = f64>,
    D2: Dimension,
{
    if let Some(v) = first_bad_latitude(lat) {
        return Err(GeoError::coordinate_range(format!(
            "latitude {} outside [-{}, {}]",
            v, MAX_ABS_LATITUDE, MAX_ABS_LATITUDE
        )));
    }
    if let Some(v) = first_bad_longitude(lon) {
        return Err(GeoError::coordinate_range(format!(
            "longitude {} outside [{}, {}]",
            v, MIN_LONGITUDE, MAX_LONGITUDE
        )));
    }
    Ok(())
}

fn first_bad_latitude<S: Data<Elem = f64>, D: Dimension>(lat: &ArrayBase<S, D>) -> Option<f64> {
    lat.iter()
        .copied()
        .filter(|v| v.is_finite())
        .find(|v| v.abs() > MAX_ABS_LATITUDE)
}

fn first_bad_longitude<S: Data<Elem = f64>, D: Dimension>(lon: &ArrayBase<S, D>) -> Option<f64> {
    lon.iter()
        .copied()
        .filter(|v| v.is_finite())
        .find(|v| *v > MAX_LONGITUDE || *v < MIN_LONGITUDE)
}
