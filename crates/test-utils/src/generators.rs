//! Synthetic lat/lon meshes and fields for tests and benchmarks.
//!
//! These generators create predictable, analytically tractable data so that
//! numerical results can be checked against closed-form answers.

use ndarray::{Array1, Array2, Array3, Axis};

/// Which array axis carries latitude in a generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshOrder {
    /// Latitude varies along rows (axis 0), longitude along columns.
    LatRows,
    /// Longitude varies along rows (axis 0), latitude along columns.
    LonRows,
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    Array1::linspace(start, end, n).to_vec()
}

/// Values from `start` stepping by `step` while short of `stop` (exclusive),
/// like a half-open range over floats.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Build a `(lat, lon)` mesh from 1D coordinate sequences.
///
/// # Example
///
/// ```
/// use test_utils::{mesh_from_axes, MeshOrder};
///
/// let (lat, lon) = mesh_from_axes(&[10.0, 20.0], &[0.0, 5.0, 10.0], MeshOrder::LatRows);
/// assert_eq!(lat.shape(), &[2, 3]);
/// assert_eq!(lat[[1, 0]], 20.0);
/// assert_eq!(lon[[1, 2]], 10.0);
/// ```
pub fn mesh_from_axes(lats: &[f64], lons: &[f64], order: MeshOrder) -> (Array2<f64>, Array2<f64>) {
    match order {
        MeshOrder::LatRows => {
            let shape = (lats.len(), lons.len());
            (
                Array2::from_shape_fn(shape, |(i, _)| lats[i]),
                Array2::from_shape_fn(shape, |(_, j)| lons[j]),
            )
        }
        MeshOrder::LonRows => {
            let shape = (lons.len(), lats.len());
            (
                Array2::from_shape_fn(shape, |(_, j)| lats[j]),
                Array2::from_shape_fn(shape, |(i, _)| lons[i]),
            )
        }
    }
}

/// A cell-centred global mesh.
///
/// Postings sit in the middle of cells: at 1° resolution latitudes run
/// 89.5, 88.5, ... -89.5 and longitudes -179.5 ... 179.5, shifted by
/// `center_lon`. The layout is longitude rows, latitude columns.
///
/// # Panics
///
/// If either resolution is not in (0, 90).
pub fn global_mesh(lat_res: f64, lon_res: f64, center_lon: f64) -> (Array2<f64>, Array2<f64>) {
    assert!(
        lat_res > 0.0 && lon_res > 0.0 && lat_res.max(lon_res) < 90.0,
        "resolution should be positive and below 90 degrees"
    );

    let nlat = (180.0 / lat_res).round() as usize;
    let nlon = (360.0 / lon_res).round() as usize;
    let lats: Vec<f64> = (0..nlat).map(|i| 90.0 - lat_res / 2.0 - i as f64 * lat_res).collect();
    let lons: Vec<f64> = (0..nlon)
        .map(|i| -180.0 + lon_res / 2.0 + i as f64 * lon_res + center_lon)
        .collect();

    mesh_from_axes(&lats, &lons, MeshOrder::LonRows)
}

/// Evaluate `f(lat, lon)` at every mesh point.
pub fn field_from_fn<F>(lat: &Array2<f64>, lon: &Array2<f64>, f: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = Array2::zeros(lat.raw_dim());
    ndarray::Zip::from(&mut out)
        .and(lat)
        .and(lon)
        .for_each(|o, &phi, &lambda| *o = f(phi, lambda));
    out
}

/// Stack equally shaped grids into a layered 3D array.
///
/// # Panics
///
/// If `layers` is empty or the grids differ in shape.
pub fn stack_layers(layers: &[Array2<f64>]) -> Array3<f64> {
    let views: Vec<_> = layers.iter().map(|l| l.view()).collect();
    ndarray::stack(Axis(0), &views).expect("layers must share a shape")
}

/// A zonal wind resembling trade winds and westerlies, in m/s.
///
/// Easterly (negative) within 30° of the equator, westerly poleward of it:
/// u = -8 cos(3φ).
pub fn zonal_wind(lat: &Array2<f64>, lon: &Array2<f64>) -> Array2<f64> {
    field_from_fn(lat, lon, |phi, _| -8.0 * (3.0 * phi).to_radians().cos())
}

/// A meridional wind that alternates with longitude, in m/s.
pub fn meridional_wind(lat: &Array2<f64>, lon: &Array2<f64>) -> Array2<f64> {
    field_from_fn(lat, lon, |_, lambda| 3.0 * (2.0 * lambda).to_radians().sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_mesh_one_degree() {
        let (lat, lon) = global_mesh(1.0, 1.0, 0.0);
        assert_eq!(lat.shape(), &[360, 180]);
        assert_eq!(lat[[0, 0]], 89.5);
        assert_eq!(lat[[0, 179]], -89.5);
        assert_eq!(lon[[0, 0]], -179.5);
        assert_eq!(lon[[359, 0]], 179.5);
    }

    #[test]
    fn test_global_mesh_recentered() {
        let (_, lon) = global_mesh(2.0, 2.0, 180.0);
        assert_eq!(lon[[0, 0]], 1.0);
        assert_eq!(lon[[179, 0]], 359.0);
    }

    #[test]
    #[should_panic(expected = "resolution")]
    fn test_global_mesh_rejects_coarse_resolution() {
        global_mesh(90.0, 1.0, 0.0);
    }

    #[test]
    fn test_mesh_orders_are_transposes() {
        let lats = [0.0, 1.0, 2.0];
        let lons = [5.0, 6.0];
        let (lat_a, lon_a) = mesh_from_axes(&lats, &lons, MeshOrder::LatRows);
        let (lat_b, lon_b) = mesh_from_axes(&lats, &lons, MeshOrder::LonRows);
        assert_eq!(lat_a.t(), lat_b);
        assert_eq!(lon_a.t(), lon_b);
    }

    #[test]
    fn test_arange_half_open() {
        assert_eq!(arange(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
        assert!(arange(1.0, 0.0, 0.5).is_empty());
    }

    #[test]
    fn test_stack_layers() {
        let a = Array2::from_elem((2, 3), 1.0);
        let b = Array2::from_elem((2, 3), 2.0);
        let s = stack_layers(&[a, b]);
        assert_eq!(s.shape(), &[2, 2, 3]);
        assert_eq!(s[[1, 1, 2]], 2.0);
    }

    #[test]
    fn test_zonal_wind_pattern() {
        let (lat, lon) = mesh_from_axes(&[0.0, 45.0], &[0.0], MeshOrder::LatRows);
        let u = zonal_wind(&lat, &lon);
        assert!(u[[0, 0]] < 0.0);
        assert!(u[[1, 0]] > 0.0);
    }
}
