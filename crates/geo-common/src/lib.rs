//! Common types shared across the geogrid workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod units;

pub use config::CalculusConfig;
pub use error::{GeoError, GeoResult};
pub use units::{AreaUnit, LengthUnit};
