//! Gridded fields: a single 2D grid or a stack of independent 2D layers.

use geo_common::{GeoError, GeoResult};
use ndarray::{Array2, Array3, ArrayView2, Axis, Zip};
use rayon::prelude::*;

/// A scalar field sampled on a lat/lon grid.
///
/// `Layers` stacks independent grids along axis 0 (time steps, vertical
/// levels). Operators treat every layer as its own 2D problem; the layer
/// axis is never differenced.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Grid(Array2<f64>),
    Layers(Array3<f64>),
}

impl Field {
    /// Number of array dimensions (2 or 3).
    pub fn ndim(&self) -> usize {
        match self {
            Field::Grid(_) => 2,
            Field::Layers(_) => 3,
        }
    }

    /// Full shape, including the layer axis for `Layers`.
    pub fn shape(&self) -> &[usize] {
        match self {
            Field::Grid(a) => a.shape(),
            Field::Layers(a) => a.shape(),
        }
    }

    /// Shape of a single 2D layer.
    pub fn layer_shape(&self) -> [usize; 2] {
        let shape = self.shape();
        let n = shape.len();
        [shape[n - 2], shape[n - 1]]
    }

    /// Number of layers (1 for a plain grid).
    pub fn num_layers(&self) -> usize {
        match self {
            Field::Grid(_) => 1,
            Field::Layers(a) => a.len_of(Axis(0)),
        }
    }

    /// Borrow layer `k`. A plain grid is its own layer 0.
    pub fn layer(&self, k: usize) -> Option<ArrayView2<'_, f64>> {
        match self {
            Field::Grid(a) if k == 0 => Some(a.view()),
            Field::Grid(_) => None,
            Field::Layers(a) if k < a.len_of(Axis(0)) => Some(a.index_axis(Axis(0), k)),
            Field::Layers(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<&Array2<f64>> {
        match self {
            Field::Grid(a) => Some(a),
            Field::Layers(_) => None,
        }
    }

    pub fn as_layers(&self) -> Option<&Array3<f64>> {
        match self {
            Field::Layers(a) => Some(a),
            Field::Grid(_) => None,
        }
    }

    /// Iterate over all values in logical order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &f64> + '_> {
        match self {
            Field::Grid(a) => Box::new(a.iter()),
            Field::Layers(a) => Box::new(a.iter()),
        }
    }

    /// Count of NaN or infinite values.
    pub fn count_non_finite(&self) -> usize {
        self.iter().filter(|v| !v.is_finite()).count()
    }

    /// A field of the same shape filled with `value`.
    pub fn full_like(&self, value: f64) -> Field {
        match self {
            Field::Grid(a) => Field::Grid(Array2::from_elem(a.raw_dim(), value)),
            Field::Layers(a) => Field::Layers(Array3::from_elem(a.raw_dim(), value)),
        }
    }

    /// Fail unless every layer has the shape of the coordinate grid.
    pub fn ensure_layer_shape(&self, name: &str, grid_shape: &[usize]) -> GeoResult<()> {
        if self.layer_shape()[..] != *grid_shape {
            return Err(GeoError::shape_mismatch(
                name,
                &self.layer_shape(),
                "lat/lon grid",
                grid_shape,
            ));
        }
        Ok(())
    }

    /// Fail unless `self` and `other` have identical full shapes.
    pub fn ensure_same_shape(&self, name: &str, other: &Field, other_name: &str) -> GeoResult<()> {
        if self.shape() != other.shape() {
            return Err(GeoError::shape_mismatch(
                name,
                self.shape(),
                other_name,
                other.shape(),
            ));
        }
        Ok(())
    }

    /// Apply `f` to every element.
    pub fn mapv(&self, f: impl Fn(f64) -> f64) -> Field {
        match self {
            Field::Grid(a) => Field::Grid(a.mapv(f)),
            Field::Layers(a) => Field::Layers(a.mapv(f)),
        }
    }

    /// Combine two equally shaped fields element by element.
    pub fn zip_with(&self, other: &Field, f: impl Fn(f64, f64) -> f64) -> GeoResult<Field> {
        match (self, other) {
            (Field::Grid(a), Field::Grid(b)) if a.shape() == b.shape() => {
                Ok(Field::Grid(Zip::from(a).and(b).map_collect(|&x, &y| f(x, y))))
            }
            (Field::Layers(a), Field::Layers(b)) if a.shape() == b.shape() => {
                Ok(Field::Layers(Zip::from(a).and(b).map_collect(|&x, &y| f(x, y))))
            }
            _ => Err(GeoError::shape_mismatch(
                "left field",
                self.shape(),
                "right field",
                other.shape(),
            )),
        }
    }

    /// Combine every layer with a grid-shaped array element by element.
    ///
    /// The caller guarantees `grid` matches the layer shape.
    pub fn zip_grid(&self, grid: &Array2<f64>, f: impl Fn(f64, f64) -> f64 + Sync + Send) -> Field {
        self.map_layers(false, |layer| {
            Zip::from(&layer).and(grid).map_collect(|&x, &g| f(x, g))
        })
    }

    /// Run `f` on every 2D layer and reassemble the results.
    ///
    /// `f` must preserve the layer shape. With `parallel` set, layers are
    /// distributed over the rayon pool.
    pub fn map_layers<F>(&self, parallel: bool, f: F) -> Field
    where
        F: Fn(ArrayView2<'_, f64>) -> Array2<f64> + Sync + Send,
    {
        match self {
            Field::Grid(a) => Field::Grid(f(a.view())),
            Field::Layers(a) => {
                let results: Vec<Array2<f64>> = if parallel {
                    (0..a.len_of(Axis(0)))
                        .into_par_iter()
                        .map(|k| f(a.index_axis(Axis(0), k)))
                        .collect()
                } else {
                    a.axis_iter(Axis(0)).map(&f).collect()
                };

                let mut out = Array3::zeros(a.raw_dim());
                for (mut dst, layer) in out.axis_iter_mut(Axis(0)).zip(results.iter()) {
                    dst.assign(layer);
                }
                Field::Layers(out)
            }
        }
    }
}

impl From<Array2<f64>> for Field {
    fn from(a: Array2<f64>) -> Self {
        Field::Grid(a)
    }
}

impl From<Array3<f64>> for Field {
    fn from(a: Array3<f64>) -> Self {
        Field::Layers(a)
    }
}

/// A physical coefficient that is either uniform or varies over the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Coefficient {
    Uniform(f64),
    Varying(Field),
}

impl Coefficient {
    /// Expand to a field shaped like `like`.
    ///
    /// A grid-shaped coefficient applies to every layer of a layered field.
    pub fn to_field(&self, name: &str, like: &Field) -> GeoResult<Field> {
        match self {
            Coefficient::Uniform(v) => Ok(like.full_like(*v)),
            Coefficient::Varying(Field::Grid(g)) if like.ndim() == 3 => {
                if g.shape() != &like.layer_shape()[..] {
                    return Err(GeoError::shape_mismatch(
                        name,
                        g.shape(),
                        "input field layer",
                        &like.layer_shape(),
                    ));
                }
                Ok(like.map_layers(false, |_| g.clone()))
            }
            Coefficient::Varying(f) => {
                f.ensure_same_shape(name, like, "input field")?;
                Ok(f.clone())
            }
        }
    }
}

impl From<f64> for Coefficient {
    fn from(v: f64) -> Self {
        Coefficient::Uniform(v)
    }
}

impl From<Field> for Coefficient {
    fn from(f: Field) -> Self {
        Coefficient::Varying(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn layered() -> Field {
        Field::Layers(Array3::from_shape_fn((3, 2, 4), |(k, i, j)| (k * 100 + i * 10 + j) as f64))
    }

    #[test]
    fn test_shapes() {
        let f = layered();
        assert_eq!(f.ndim(), 3);
        assert_eq!(f.layer_shape(), [2, 4]);
        assert_eq!(f.num_layers(), 3);

        let g = Field::from(array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(g.layer_shape(), [2, 2]);
        assert_eq!(g.num_layers(), 1);
        assert!(g.layer(1).is_none());
    }

    #[test]
    fn test_map_layers_parallel_matches_sequential() {
        let f = layered();
        let seq = f.map_layers(false, |l| l.mapv(|v| v * 2.0 + 1.0));
        let par = f.map_layers(true, |l| l.mapv(|v| v * 2.0 + 1.0));
        assert_eq!(seq, par);
        assert_eq!(seq.layer(2).unwrap()[[1, 3]], 427.0);
    }

    #[test]
    fn test_zip_with_shape_mismatch() {
        let a = Field::from(Array2::<f64>::zeros((2, 2)));
        let b = Field::from(Array2::<f64>::zeros((2, 3)));
        assert!(matches!(a.zip_with(&b, |x, y| x + y), Err(GeoError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_zip_grid_broadcasts_over_layers() {
        let f = layered();
        let grid = Array2::from_elem((2, 4), 0.5);
        let out = f.zip_grid(&grid, |x, g| x * g);
        assert_eq!(out.layer(1).unwrap()[[0, 2]], 51.0);
    }

    #[test]
    fn test_coefficient_expansion() {
        let like = layered();
        let c = Coefficient::from(2.0).to_field("cd", &like).unwrap();
        assert_eq!(c.shape(), like.shape());
        assert!(c.iter().all(|&v| v == 2.0));

        let wrong = Coefficient::Varying(Field::from(Array3::<f64>::zeros((2, 2, 4))));
        assert!(wrong.to_field("cd", &like).is_err());
    }

    #[test]
    fn test_grid_coefficient_spans_layers() {
        let like = layered();
        let grid = Array2::from_shape_fn((2, 4), |(i, j)| (i * 4 + j) as f64);
        let c = Coefficient::from(Field::from(grid.clone()))
            .to_field("rho", &like)
            .unwrap();
        assert_eq!(c.shape(), &[3, 2, 4]);
        for k in 0..3 {
            assert_eq!(c.layer(k).unwrap(), grid);
        }

        let wrong = Coefficient::from(Field::from(Array2::<f64>::zeros((4, 2))));
        assert!(matches!(
            wrong.to_field("rho", &like),
            Err(GeoError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_ensure_layer_shape() {
        let f = layered();
        assert!(f.ensure_layer_shape("F", &[2, 4]).is_ok());
        assert!(f.ensure_layer_shape("F", &[4, 2]).is_err());
    }

    #[test]
    fn test_count_non_finite() {
        let f = Field::from(array![[1.0, f64::NAN], [f64::INFINITY, 0.0]]);
        assert_eq!(f.count_non_finite(), 2);
    }
}
