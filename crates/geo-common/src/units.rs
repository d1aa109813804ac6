//! Distance and area units for metric outputs.

use crate::constants::METERS_PER_KM;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length unit for cell dimensions and per-distance gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Meters,
    Kilometers,
}

impl LengthUnit {
    /// Divisor that converts a value in meters to this unit.
    pub fn meters_divisor(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => METERS_PER_KM,
        }
    }

    /// Convert a length in meters to this unit.
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.meters_divisor()
    }

    /// Map a boolean "kilometers" flag to a unit.
    pub fn from_km_flag(km: bool) -> Self {
        if km {
            LengthUnit::Kilometers
        } else {
            LengthUnit::Meters
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Area unit for cell areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    SquareMeters,
    SquareKilometers,
}

impl AreaUnit {
    /// Length unit whose square is this area unit.
    pub fn length_unit(&self) -> LengthUnit {
        match self {
            AreaUnit::SquareMeters => LengthUnit::Meters,
            AreaUnit::SquareKilometers => LengthUnit::Kilometers,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m2",
            AreaUnit::SquareKilometers => "km2",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
