//! A validated lat/lon mesh together with its cell metric.

use crate::diff::gradient_along;
use crate::field::Field;
use crate::metric::{grid_metric_with, GridLayout, GridMetric};
use geo_common::{CalculusConfig, GeoResult, LengthUnit};
use ndarray::{Array2, ArrayView2, Axis};

/// A lat/lon mesh whose layout and cell dimensions are known.
///
/// Building a `GeoGrid` runs every coordinate check once; the operators
/// defined on it then only have to validate the fields they are given.
#[derive(Debug, Clone)]
pub struct GeoGrid {
    lat: Array2<f64>,
    metric: GridMetric,
    config: CalculusConfig,
}

impl GeoGrid {
    /// Build a grid with the default configuration.
    pub fn new(lat: ArrayView2<'_, f64>, lon: ArrayView2<'_, f64>, unit: LengthUnit) -> GeoResult<Self> {
        Self::with_config(lat, lon, unit, CalculusConfig::default())
    }

    pub fn with_config(
        lat: ArrayView2<'_, f64>,
        lon: ArrayView2<'_, f64>,
        unit: LengthUnit,
        config: CalculusConfig,
    ) -> GeoResult<Self> {
        let metric = grid_metric_with(lat, lon, unit, &config)?;
        Ok(Self {
            lat: lat.to_owned(),
            metric,
            config,
        })
    }

    pub fn metric(&self) -> &GridMetric {
        &self.metric
    }

    pub fn into_metric(self) -> GridMetric {
        self.metric
    }

    pub fn layout(&self) -> GridLayout {
        self.metric.layout
    }

    pub fn unit(&self) -> LengthUnit {
        self.metric.unit
    }

    pub fn lat(&self) -> ArrayView2<'_, f64> {
        self.lat.view()
    }

    pub fn shape(&self) -> [usize; 2] {
        self.metric.shape()
    }

    pub fn config(&self) -> &CalculusConfig {
        &self.config
    }

    /// West-to-east derivative of every layer, per unit distance.
    pub fn d_dx(&self, field: &Field) -> Field {
        self.derivative(field, self.layout().lon_axis(), &self.metric.dx)
    }

    /// South-to-north derivative of every layer, per unit distance.
    pub fn d_dy(&self, field: &Field) -> Field {
        self.derivative(field, self.layout().lat_axis(), &self.metric.dy)
    }

    fn derivative(&self, field: &Field, axis: Axis, spacing: &Array2<f64>) -> Field {
        field.map_layers(self.config.parallel_layers, |layer| {
            gradient_along(&layer, axis) / spacing
        })
    }
}
