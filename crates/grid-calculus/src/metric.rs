//! Physical cell dimensions of a lat/lon mesh on the ellipsoidal Earth.
//!
//! The engine is handed two 2D coordinate arrays and nothing else. It works
//! out which array axis carries latitude and which carries longitude, then
//! converts the angular spacing into distances:
//!
//! ```text
//! dy = dlat * r(lat) * pi / 180
//! dx = dlon * r(lat) * pi / 180 * cos(lat)
//! ```
//!
//! `dx` and `dy` keep the sign of the coordinate differences, so a grid that
//! runs north to south has negative `dy`.

use crate::coords::ensure_lat_lon;
use crate::diff::{gradient_along, has_finite_change, is_uniformly_zero};
use crate::radius::earth_radius_grid;
use geo_common::{CalculusConfig, GeoError, GeoResult, LengthUnit};
use ndarray::{Array2, ArrayView2, ArrayViewD, Axis, Ix2, Zip};
use std::f64::consts::PI;
use std::fmt;

/// Which array axis of a mesh carries which coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridLayout {
    /// Latitude varies along axis 0 (rows), longitude along axis 1.
    LatRowsLonCols,
    /// Longitude varies along axis 0 (rows), latitude along axis 1.
    LonRowsLatCols,
}

impl GridLayout {
    /// Axis along which latitude changes (the south-north direction).
    pub fn lat_axis(&self) -> Axis {
        match self {
            GridLayout::LatRowsLonCols => Axis(0),
            GridLayout::LonRowsLatCols => Axis(1),
        }
    }

    /// Axis along which longitude changes (the west-east direction).
    pub fn lon_axis(&self) -> Axis {
        match self {
            GridLayout::LatRowsLonCols => Axis(1),
            GridLayout::LonRowsLatCols => Axis(0),
        }
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLayout::LatRowsLonCols => write!(f, "lat-rows/lon-cols"),
            GridLayout::LonRowsLatCols => write!(f, "lon-rows/lat-cols"),
        }
    }
}

/// Cell dimensions of a lat/lon grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMetric {
    /// East-west extent of every cell.
    pub dx: Array2<f64>,
    /// North-south extent of every cell.
    pub dy: Array2<f64>,
    pub layout: GridLayout,
    pub unit: LengthUnit,
}

impl GridMetric {
    pub fn shape(&self) -> [usize; 2] {
        [self.dx.nrows(), self.dx.ncols()]
    }

    /// Cell areas, |dx * dy|, in the square of `self.unit`.
    pub fn cell_area(&self) -> Array2<f64> {
        Zip::from(&self.dx)
            .and(&self.dy)
            .map_collect(|&dx, &dy| (dx * dy).abs())
    }
}

/// Coordinate differences of both grids along both axes.
struct CoordinateGradients {
    lat: [Array2<f64>; 2],
    lon: [Array2<f64>; 2],
}

impl CoordinateGradients {
    fn new(lat: &ArrayView2<'_, f64>, lon: &ArrayView2<'_, f64>) -> Self {
        Self {
            lat: [gradient_along(lat, Axis(0)), gradient_along(lat, Axis(1))],
            lon: [gradient_along(lon, Axis(0)), gradient_along(lon, Axis(1))],
        }
    }

    /// Check that `layout` explains the coordinates.
    ///
    /// Latitude must be constant across the longitude axis and longitude
    /// constant across the latitude axis, and each must actually change
    /// along its own axis. Differences touching a missing (non-finite)
    /// coordinate are ignored; those cells come out NaN in the metric.
    fn check(&self, layout: GridLayout, tolerance: f64) -> GeoResult<()> {
        let lat_axis = layout.lat_axis();
        let lon_axis = layout.lon_axis();

        if !is_uniformly_zero(&self.lat[lon_axis.index()], tolerance) {
            return Err(GeoError::grid_layout(
                format!("lat axis {}", lon_axis.index()),
                format!("latitude must not change along axis {} ({})", lon_axis.index(), layout),
            ));
        }
        if !is_uniformly_zero(&self.lon[lat_axis.index()], tolerance) {
            return Err(GeoError::grid_layout(
                format!("lon axis {}", lat_axis.index()),
                format!("longitude must not change along axis {} ({})", lat_axis.index(), layout),
            ));
        }
        if !has_finite_change(&self.lat[lat_axis.index()], tolerance) {
            return Err(GeoError::grid_layout(
                format!("lat axis {}", lat_axis.index()),
                "latitude is constant along both axes",
            ));
        }
        if !has_finite_change(&self.lon[lon_axis.index()], tolerance) {
            return Err(GeoError::grid_layout(
                format!("lon axis {}", lon_axis.index()),
                "longitude is constant along both axes",
            ));
        }
        Ok(())
    }

    /// Try `LatRowsLonCols`, then `LonRowsLatCols`.
    ///
    /// When both fail, the reported error comes from the hypothesis that
    /// latitude's own differences point at: if latitude is flat along
    /// axis 1 the grid was meant to be lat-rows.
    fn infer_layout(&self, tolerance: f64) -> GeoResult<GridLayout> {
        let err_a = match self.check(GridLayout::LatRowsLonCols, tolerance) {
            Ok(()) => return Ok(GridLayout::LatRowsLonCols),
            Err(e) => e,
        };
        let err_b = match self.check(GridLayout::LonRowsLatCols, tolerance) {
            Ok(()) => return Ok(GridLayout::LonRowsLatCols),
            Err(e) => e,
        };

        let lat_flat_on_axis1 = is_uniformly_zero(&self.lat[1], tolerance);
        Err(if lat_flat_on_axis1 { err_a } else { err_b })
    }
}

/// Validate a lat/lon pair for use as a mesh.
pub(crate) fn validate_mesh(lat: &ArrayView2<'_, f64>, lon: &ArrayView2<'_, f64>) -> GeoResult<()> {
    if lat.shape() != lon.shape() {
        return Err(GeoError::shape_mismatch("lat", lat.shape(), "lon", lon.shape()));
    }
    ensure_lat_lon(lat, lon)
}

/// Cell dimensions of the mesh `lat`, `lon` with default configuration.
pub fn grid_metric(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    unit: LengthUnit,
) -> GeoResult<GridMetric> {
    grid_metric_with(lat, lon, unit, &CalculusConfig::default())
}

/// Cell dimensions of the mesh `lat`, `lon`.
pub fn grid_metric_with(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    unit: LengthUnit,
    config: &CalculusConfig,
) -> GeoResult<GridMetric> {
    config.validate()?;
    validate_mesh(&lat, &lon)?;

    let gradients = CoordinateGradients::new(&lat, &lon);
    let layout = gradients
        .infer_layout(config.zero_gradient_tolerance)
        .map_err(|e| {
            tracing::debug!(category = e.category(), error = %e, "Rejected lat/lon mesh");
            e
        })?;

    tracing::debug!(
        rows = lat.nrows(),
        cols = lat.ncols(),
        layout = %layout,
        unit = %unit,
        "Inferred grid layout"
    );

    let dlat = &gradients.lat[layout.lat_axis().index()];
    let dlon = &gradients.lon[layout.lon_axis().index()];
    let r = earth_radius_grid(&lat, unit);

    let dy = Zip::from(dlat)
        .and(&r)
        .map_collect(|&dlat, &r| dlat * r * PI / 180.0);
    let dx = Zip::from(dlon)
        .and(&r)
        .and(&lat)
        .map_collect(|&dlon, &r, &phi| (dlon / 180.0) * PI * r * phi.to_radians().cos());

    Ok(GridMetric { dx, dy, layout, unit })
}

/// Runtime-rank entry point: rejects anything that is not a 2D grid.
pub fn grid_metric_dyn(
    lat: ArrayViewD<'_, f64>,
    lon: ArrayViewD<'_, f64>,
    unit: LengthUnit,
) -> GeoResult<GridMetric> {
    let lat = into_grid("lat", lat)?;
    let lon = into_grid("lon", lon)?;
    grid_metric(lat, lon, unit)
}

pub(crate) fn into_grid<'a>(name: &str, a: ArrayViewD<'a, f64>) -> GeoResult<ArrayView2<'a, f64>> {
    let ndim = a.ndim();
    a.into_dimensionality::<Ix2>()
        .map_err(|_| GeoError::dimensionality(name, 2, ndim))
}
