//! Distance-correct calculus on geographic lat/lon grids.
//!
//! Gridded climate, ocean and atmosphere data usually live on regular
//! latitude/longitude meshes whose cells shrink toward the poles. This crate
//! works out the physical size of every cell on an ellipsoidal Earth and
//! builds finite-difference operators on top of it, so derivatives come out
//! per meter without reprojecting the data.
//!
//! # Architecture
//!
//! ```text
//! lat, lon (2D mesh)
//!      │
//!      ├─► coords::ensure_lat_lon      range check
//!      ├─► radius::earth_radius_grid   r(φ) on the ellipsoid
//!      │
//!      ▼
//! metric::grid_metric ──► GridMetric { dx, dy, layout }
//!      │
//!      ▼
//! GeoGrid ──► gradient / divergence / curl / cell_area
//!      │
//!      └─► geophysics::ekman ◄── coriolis_frequency, wind_stress
//! ```
//!
//! # Example
//!
//! ```ignore
//! use grid_calculus::{gradient, Field, LengthUnit};
//!
//! let (fx, fy) = gradient(lat.view(), lon.view(), &Field::from(sst), LengthUnit::Kilometers)?;
//! ```

pub mod coords;
pub mod diff;
pub mod field;
pub mod geophysics;
pub mod grid;
pub mod metric;
pub mod operators;
pub mod radius;

// Re-export commonly used types at crate root
pub use coords::{ensure_lat_lon, is_lat_lon};
pub use field::{Coefficient, Field};
pub use geo_common::{AreaUnit, CalculusConfig, GeoError, GeoResult, LengthUnit};
pub use geophysics::{
    coriolis_frequency, coriolis_parameter, ekman, wind_stress, wind_stress_point, EkmanInput,
    EkmanOptions, EkmanTransport, WindStressOptions,
};
pub use grid::GeoGrid;
pub use metric::{grid_metric, grid_metric_dyn, grid_metric_with, GridLayout, GridMetric};
pub use operators::{cell_area, curl, divergence, gradient};
pub use radius::{earth_radius, earth_radius_grid};
