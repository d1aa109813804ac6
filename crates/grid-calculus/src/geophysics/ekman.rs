//! Classical Ekman transport and Ekman pumping from surface wind.
//!
//! # Physics
//!
//! Integrated over the Ekman layer, the wind-driven transport is
//! perpendicular to the stress:
//!
//! - U_E =  τ_y / (ρ_w f)   (m²/s)
//! - V_E = −τ_x / (ρ_w f)   (m²/s)
//!
//! and its horizontal divergence sets the pumping velocity at the base of
//! the layer, w_E = ∂U_E/∂x + ∂V_E/∂y (m/s). Positive w_E is upwelling.
//!
//! Ekman theory breaks down at the equator where f = 0. The division is
//! carried out anyway, so equatorial cells come out infinite or NaN and
//! their neighbours' w_E is contaminated through the finite differences.

use crate::field::{Coefficient, Field};
use crate::geophysics::coriolis::coriolis_frequency;
use crate::geophysics::wind_stress::{wind_stress, WindStressOptions};
use crate::grid::GeoGrid;
use geo_common::constants::{DEFAULT_AIR_DENSITY, DEFAULT_DRAG_COEFFICIENT, DEFAULT_WATER_DENSITY};
use geo_common::{GeoResult, LengthUnit};
use ndarray::ArrayView2;

/// What the two input components of [`ekman`] hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EkmanInput {
    /// 10 m wind components (m/s); converted to stress first.
    #[default]
    Wind,
    /// Wind stress components (N/m²); used as given.
    Stress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EkmanOptions {
    pub input: EkmanInput,
    /// Drag coefficient for the wind-to-stress step.
    pub drag_coefficient: Coefficient,
    /// Air density for the wind-to-stress step (kg/m³).
    pub air_density: Coefficient,
    /// Sea water density ρ_w (kg/m³).
    pub water_density: Coefficient,
}

impl Default for EkmanOptions {
    fn default() -> Self {
        Self {
            input: EkmanInput::Wind,
            drag_coefficient: Coefficient::Uniform(DEFAULT_DRAG_COEFFICIENT),
            air_density: Coefficient::Uniform(DEFAULT_AIR_DENSITY),
            water_density: Coefficient::Uniform(DEFAULT_WATER_DENSITY),
        }
    }
}

impl EkmanOptions {
    /// Options for inputs that are already wind stress.
    pub fn from_stress() -> Self {
        Self {
            input: EkmanInput::Stress,
            ..Self::default()
        }
    }

    pub fn with_drag_coefficient(mut self, cd: impl Into<Coefficient>) -> Self {
        self.drag_coefficient = cd.into();
        self
    }

    pub fn with_water_density(mut self, rho: impl Into<Coefficient>) -> Self {
        self.water_density = rho.into();
        self
    }
}

/// Ekman layer transports and pumping velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct EkmanTransport {
    /// Zonal transport (m²/s).
    pub ue: Field,
    /// Meridional transport (m²/s).
    pub ve: Field,
    /// Vertical velocity (m/s), positive upward.
    pub we: Field,
}

impl GeoGrid {
    /// Ekman transport and pumping for the wind (or stress) `u`, `v`.
    ///
    /// `we` is in m/s whatever the grid's length unit.
    pub fn ekman(&self, u: &Field, v: &Field, options: &EkmanOptions) -> GeoResult<EkmanTransport> {
        u.ensure_same_shape("u", v, "v")?;
        u.ensure_layer_shape("u", &self.shape())?;

        let f = coriolis_frequency(&self.lat(), None)?;

        let (tau_x, tau_y) = match options.input {
            EkmanInput::Wind => {
                let stress_options = WindStressOptions {
                    drag_coefficient: options.drag_coefficient.clone(),
                    air_density: options.air_density.clone(),
                };
                wind_stress(u, v, &stress_options)?
            }
            EkmanInput::Stress => (u.clone(), v.clone()),
        };

        let rho_w = options.water_density.to_field("water_density", u)?;
        let rho_f = rho_w.zip_grid(&f, |rho, cor| rho * cor);

        let ue = tau_y.zip_with(&rho_f, |tau, d| tau / d)?;
        let ve = tau_x.zip_with(&rho_f, |tau, d| -tau / d)?;

        let singular = ue.count_non_finite().max(ve.count_non_finite());
        if singular > 0 {
            tracing::warn!(
                singular,
                "Ekman transport is undefined where the Coriolis frequency vanishes"
            );
        }

        // derivatives are per grid unit; pumping is reported per meter
        let per_meter = self.unit().meters_divisor();
        let we = self
            .d_dx(&ue)
            .zip_with(&self.d_dy(&ve), |a, b| (a + b) / per_meter)?;

        tracing::debug!(layers = ue.num_layers(), input = ?options.input, "Computed Ekman transport");

        Ok(EkmanTransport { ue, ve, we })
    }
}

/// Ekman transport `(UE, VE)` and pumping velocity `wE` on a lat/lon grid.
pub fn ekman(
    lat: ArrayView2<'_, f64>,
    lon: ArrayView2<'_, f64>,
    u: &Field,
    v: &Field,
    options: &EkmanOptions,
) -> GeoResult<EkmanTransport> {
    GeoGrid::new(lat, lon, LengthUnit::Meters)?.ekman(u, v, options)
}
