//! Gradient, divergence, curl and cell area on a lat/lon grid.
//!
//! Derivatives follow the mesh layout found by the metric engine: x is the
//! axis along which longitude changes, y the axis along which latitude
//! changes. Layered fields are differenced one layer at a time.

use crate::field::Field;
use crate::grid::GeoGrid;
use geo_common::{AreaUnit, GeoResult, LengthUnit};
use ndarray::{Array2, ArrayView2};

impl GeoGrid {
    /// Spatial gradient of `f` as `(FX, FY)`.
    ///
    /// FX is the west-to-east rate of change per unit distance, FY the
    /// south-to-north rate. A positive FX means `f` increases eastward.
    pub fn gradient(&self, f: &Field) -> GeoResult<(Field, Field)> {
        f.ensure_layer_shape("F", &self.shape())?;
        tracing::debug!(layers = f.num_layers(), unit = %self.unit(), "Computing gradient");
        Ok((self.d_dx(f), self.d_dy(f)))
    }

    /// Horizontal divergence dU/dx + dV/dy.
    pub fn divergence(&self, u: &Field, v: &Field) -> GeoResult<Field> {
        check_vector(self, u, v)?;
        let ux = self.d_dx(u);
        let vy = self.d_dy(v);
        ux.zip_with(&vy, |a, b| a + b)
    }

    /// Vertical component of the curl, dV/dx - dU/dy.
    pub fn curl(&self, u: &Field, v: &Field) -> GeoResult<Field> {
        check_vector(self, u, v)?;
        let vx = self.d_dx(v);
        let uy = self.d_dy(u);
        vx.zip_with(&uy, |a, b| a - b)
    }

    /// Area of every cell, in the square of the grid's length unit.
    pub fn cell_area(&self) -> Array2<f64> {
        self.metric().cell_area()
    }
}

fn check_vector(grid: &GeoGrid, u: &Field, v: &Field) -> GeoResult<()> {
    u.ensure_same_shape("U", v, "V")?;
    u.ensure_layer_shape("U", &grid.shape())
}

/// Spatial gradient `(FX, FY)` of `f`, per meter or per kilometer.
pub fn gradient(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    f: &Field,
    unit: LengthUnit,
) -> GeoResult<(Field, Field)> {
    GeoGrid::new(lat, lon, unit)?.gradient(f)
}

/// Divergence of `(U, V)`; units of U divided by meters.
pub fn divergence(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    u: &Field,
    v: &Field,
) -> GeoResult<Field> {
    GeoGrid::new(lat, lon, LengthUnit::Meters)?.divergence(u, v)
}

/// Z component of the curl of `(U, V)`; units of U divided by meters.
pub fn curl(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    u: &Field,
    v: &Field,
) -> GeoResult<Field> {
    GeoGrid::new(lat, lon, LengthUnit::Meters)?.curl(u, v)
}

/// Approximate area of every grid cell.
pub fn cell_area(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    unit: AreaUnit,
) -> GeoResult<Array2<f64>> {
    Ok(GeoGrid::new(lat, lon, unit.length_unit())?.cell_area())
}
