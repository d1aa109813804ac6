//! Common test fixtures for grid calculus tests.
//!
//! Pre-defined regional meshes that represent typical analysis domains.

use crate::generators::{arange, mesh_from_axes, MeshOrder};
use ndarray::Array2;

/// A rectangular lat/lon domain sampled at a fixed resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Region {
    /// Mesh with postings every `res` degrees, starting at the south-west
    /// corner (end points exclusive).
    pub fn mesh(&self, res: f64, order: MeshOrder) -> (Array2<f64>, Array2<f64>) {
        let lats = arange(self.min_lat, self.max_lat, res);
        let lons = arange(self.min_lon, self.max_lon, res);
        mesh_from_axes(&lats, &lons, order)
    }

    /// Whether the domain straddles the equator.
    pub fn crosses_equator(&self) -> bool {
        self.min_lat < 0.0 && self.max_lat > 0.0
    }
}

/// Subtropical North Atlantic gyre.
pub const NORTH_ATLANTIC: Region = Region {
    min_lat: 15.0,
    max_lat: 45.0,
    min_lon: -70.0,
    max_lon: -20.0,
};

/// California Current upwelling system, 0-360 longitudes.
pub const CALIFORNIA_CURRENT: Region = Region {
    min_lat: 30.0,
    max_lat: 45.0,
    min_lon: 230.0,
    max_lon: 245.0,
};

/// Southern Ocean band.
pub const SOUTHERN_OCEAN: Region = Region {
    min_lat: -65.0,
    max_lat: -40.0,
    min_lon: 0.0,
    max_lon: 60.0,
};

/// Equatorial Pacific, straddling the Coriolis singularity.
pub const EQUATORIAL_PACIFIC: Region = Region {
    min_lat: -5.0,
    max_lat: 6.0,
    min_lon: 160.0,
    max_lon: 200.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_mesh_shape() {
        let (lat, lon) = NORTH_ATLANTIC.mesh(1.0, MeshOrder::LatRows);
        assert_eq!(lat.shape(), &[30, 50]);
        assert_eq!(lat[[0, 0]], 15.0);
        assert_eq!(lon[[0, 49]], -21.0);
    }

    #[test]
    fn test_equator_crossing() {
        assert!(EQUATORIAL_PACIFIC.crosses_equator());
        assert!(!SOUTHERN_OCEAN.crosses_equator());
    }
}
