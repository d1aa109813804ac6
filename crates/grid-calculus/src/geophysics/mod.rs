//! Derived oceanographic and atmospheric quantities.

pub mod coriolis;
pub mod ekman;
pub mod wind_stress;

pub use coriolis::{coriolis_frequency, coriolis_parameter};
pub use ekman::{ekman, EkmanInput, EkmanOptions, EkmanTransport};
pub use wind_stress::{wind_stress, wind_stress_point, WindStressOptions};
