//! Ellipsoidal Earth radius as a function of latitude.

use geo_common::constants::{EQUATORIAL_RADIUS_M, MEAN_EARTH_RADIUS_M, POLAR_RADIUS_M};
use geo_common::LengthUnit;
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Radius of the oblate spheroid at geodetic latitude `lat_deg`, in meters.
///
/// Any latitude is accepted; range checks belong to the caller.
pub fn ellipsoid_radius_m(lat_deg: f64) -> f64 {
    let a = EQUATORIAL_RADIUS_M;
    let b = POLAR_RADIUS_M;
    let (sin, cos) = lat_deg.to_radians().sin_cos();

    let num = (a * a * cos).powi(2) + (b * b * sin).powi(2);
    let den = (a * cos).powi(2) + (b * sin).powi(2);
    (num / den).sqrt()
}

/// Earth radius in `unit`.
///
/// Without a latitude this is the nominal mean radius (6,371 km).
pub fn earth_radius(lat_deg: Option<f64>, unit: LengthUnit) -> f64 {
    let r = match lat_deg {
        Some(lat) => ellipsoid_radius_m(lat),
        None => MEAN_EARTH_RADIUS_M,
    };
    unit.from_meters(r)
}

/// Earth radius at every latitude in `lat`, in `unit`.
pub fn earth_radius_grid<S, D>(lat: &ArrayBase<S, D>, unit: LengthUnit) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    lat.mapv(|phi| unit.from_meters(ellipsoid_radius_m(phi)))
}
