//! Bulk wind stress on the sea surface from 10 m winds.
//!
//! # Physics
//!
//! τ = ρ_air · C_d · |U₁₀|², directed along the wind:
//!
//! - τ_x = τ · u₁₀ / |U₁₀|
//! - τ_y = τ · v₁₀ / |U₁₀|
//!
//! C_d defaults to 1.25×10⁻³, a global average (Kara et al., 2007), but in
//! reality varies in space and time, so both C_d and ρ_air may be given per
//! grid cell.
//!
//! Calm cells (u = v = 0) divide zero by zero and come out as NaN. That is
//! kept rather than papered over with an epsilon.

use crate::field::{Coefficient, Field};
use geo_common::constants::{DEFAULT_AIR_DENSITY, DEFAULT_DRAG_COEFFICIENT};
use geo_common::GeoResult;

/// Coefficients for the bulk stress formula.
#[derive(Debug, Clone, PartialEq)]
pub struct WindStressOptions {
    /// Drag coefficient C_d (dimensionless).
    pub drag_coefficient: Coefficient,
    /// Air density ρ_air (kg/m³).
    pub air_density: Coefficient,
}

impl Default for WindStressOptions {
    fn default() -> Self {
        Self {
            drag_coefficient: Coefficient::Uniform(DEFAULT_DRAG_COEFFICIENT),
            air_density: Coefficient::Uniform(DEFAULT_AIR_DENSITY),
        }
    }
}

impl WindStressOptions {
    pub fn with_drag_coefficient(mut self, cd: impl Into<Coefficient>) -> Self {
        self.drag_coefficient = cd.into();
        self
    }

    pub fn with_air_density(mut self, rho: impl Into<Coefficient>) -> Self {
        self.air_density = rho.into();
        self
    }
}

/// Stress components (N/m²) for a single wind vector.
pub fn wind_stress_point(u10: f64, v10: f64, drag_coefficient: f64, air_density: f64) -> (f64, f64) {
    let speed = u10.hypot(v10);
    let tau = air_density * drag_coefficient * (u10 * u10 + v10 * v10);
    (tau * u10 / speed, tau * v10 / speed)
}

/// Zonal and meridional wind stress `(τ_x, τ_y)` in N/m².
///
/// `u10` and `v10` must have the same shape, as must any per-cell
/// coefficient in `options`.
pub fn wind_stress(u10: &Field, v10: &Field, options: &WindStressOptions) -> GeoResult<(Field, Field)> {
    u10.ensure_same_shape("u10", v10, "v10")?;
    let cd = options.drag_coefficient.to_field("drag_coefficient", u10)?;
    let rho = options.air_density.to_field("air_density", u10)?;

    // ρ·C_d per cell, then |U|²·ρ·C_d
    let rho_cd = rho.zip_with(&cd, |r, c| r * c)?;
    let speed_sq = u10.zip_with(v10, |u, v| u * u + v * v)?;
    let tau = rho_cd.zip_with(&speed_sq, |k, s| k * s)?;
    let speed = u10.zip_with(v10, f64::hypot)?;

    let tau_x = tau.zip_with(u10, |t, u| t * u)?.zip_with(&speed, |t, s| t / s)?;
    let tau_y = tau.zip_with(v10, |t, v| t * v)?.zip_with(&speed, |t, s| t / s)?;

    Ok((tau_x, tau_y))
}
