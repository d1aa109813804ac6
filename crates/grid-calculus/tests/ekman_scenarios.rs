//! Ekman transport on regional domains.

use grid_calculus::{
    coriolis_frequency, ekman, wind_stress, CalculusConfig, EkmanOptions, Field, GeoGrid, LengthUnit,
    WindStressOptions,
};
use ndarray::{Array2, Axis};
use test_utils::{
    assert_all_close, field_from_fn, meridional_wind, stack_layers, zonal_wind, MeshOrder,
    CALIFORNIA_CURRENT, EQUATORIAL_PACIFIC, NORTH_ATLANTIC,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Northerly wind that weakens toward the coast, like the California
/// Current jet: -10 m/s offshore, about -3 m/s at the eastern edge.
fn coastal_jet(lat: &Array2<f64>, lon: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let u = Array2::zeros(lat.raw_dim());
    let v = field_from_fn(lat, lon, |_, lambda| -(10.0 - 0.5 * (lambda - 230.0)));
    (u, v)
}

#[test]
fn test_california_current_offshore_transport() {
    init_tracing();
    let (lat, lon) = CALIFORNIA_CURRENT.mesh(0.5, MeshOrder::LatRows);
    let (u, v) = coastal_jet(&lat, &lon);

    let out = ekman(
        lat.view(),
        lon.view(),
        &Field::from(u),
        &Field::from(v),
        &EkmanOptions::default(),
    )
    .unwrap();

    // equatorward wind drives offshore (westward) transport in the north
    assert!(out.ue.iter().all(|&x| x < 0.0));
    assert!(out.ve.iter().all(|&x| x == 0.0));
    // weakening toward the coast means positive stress curl: upwelling
    assert!(out.we.iter().all(|&x| x > 0.0));
    assert!(out.we.iter().all(|&x| x < 1e-4));
}

#[test]
fn test_ekman_magnitude() {
    let (lat, lon) = CALIFORNIA_CURRENT.mesh(1.0, MeshOrder::LatRows);
    let (u, v) = coastal_jet(&lat, &lon);
    let out = ekman(
        lat.view(),
        lon.view(),
        &Field::from(u),
        &Field::from(v),
        &EkmanOptions::default(),
    )
    .unwrap();

    // 10 m/s northerly at 35N: τ = 0.153 N/m², f ≈ 8.37e-5 s⁻¹
    let ue = out.ue.as_grid().unwrap();
    assert_eq!(lat[[5, 0]], 35.0);
    let f = 2.0 * 7.2921e-5 * 35.0_f64.to_radians().sin();
    let expected = -1.225 * 1.25e-3 * 100.0 / (1025.0 * f);
    assert!((ue[[5, 0]] - expected).abs() < 1e-9 * expected.abs());
    assert!(ue[[5, 0]] < -1.7 && ue[[5, 0]] > -1.9);
}

#[test]
fn test_equatorial_rows_are_singular() {
    init_tracing();
    assert!(EQUATORIAL_PACIFIC.crosses_equator());
    let (lat, lon) = EQUATORIAL_PACIFIC.mesh(1.0, MeshOrder::LatRows);
    let u = Field::from(zonal_wind(&lat, &lon));
    let v = Field::from(meridional_wind(&lat, &lon));

    let equator = lat.column(0).iter().position(|&phi| phi == 0.0).unwrap();
    assert_eq!(equator, 5);

    let out = ekman(lat.view(), lon.view(), &u, &v, &EkmanOptions::default()).unwrap();
    let ue = out.ue.as_grid().unwrap();
    let ve = out.ve.as_grid().unwrap();
    let we = out.we.as_grid().unwrap();

    for (i, (ue_row, ve_row)) in ue.axis_iter(Axis(0)).zip(ve.axis_iter(Axis(0))).enumerate() {
        if i == equator {
            assert!(ue_row.iter().chain(ve_row.iter()).all(|x| !x.is_finite()));
        } else {
            assert!(ue_row.iter().chain(ve_row.iter()).all(|x| x.is_finite()));
        }
    }

    // centred differences spread the singularity one row either side
    for (i, row) in we.axis_iter(Axis(0)).enumerate() {
        let contaminated = (equator - 1..=equator + 1).contains(&i);
        assert_eq!(row.iter().all(|x| !x.is_finite()), contaminated, "row {}", i);
        assert_eq!(row.iter().all(|x| x.is_finite()), !contaminated, "row {}", i);
    }

    // the same cells every time
    let again = ekman(lat.view(), lon.view(), &u, &v, &EkmanOptions::default()).unwrap();
    let mask = |f: &Field| f.iter().map(|x| x.is_finite()).collect::<Vec<_>>();
    assert_eq!(mask(&out.we), mask(&again.we));
}

#[test]
fn test_hemispheres_mirror() {
    let (lat, lon) = EQUATORIAL_PACIFIC.mesh(1.0, MeshOrder::LatRows);
    let u = Field::from(Array2::from_elem(lat.raw_dim(), -6.0));
    let v = Field::from(Array2::<f64>::zeros(lat.raw_dim()));
    let out = ekman(lat.view(), lon.view(), &u, &v, &EkmanOptions::default()).unwrap();
    let ve = out.ve.as_grid().unwrap();

    // easterly trades push water poleward in both hemispheres
    for (i, &phi) in lat.column(0).iter().enumerate() {
        if phi > 0.0 {
            assert!(ve[[i, 0]] > 0.0);
        } else if phi < 0.0 {
            assert!(ve[[i, 0]] < 0.0);
        }
    }
    assert_eq!(ve[[4, 0]], -ve[[6, 0]]);
}

#[test]
fn test_stress_input_bypasses_drag() {
    let (lat, lon) = NORTH_ATLANTIC.mesh(1.0, MeshOrder::LonRows);
    let u = Field::from(zonal_wind(&lat, &lon));
    let v = Field::from(meridional_wind(&lat, &lon));

    let (tx, ty) = wind_stress(&u, &v, &WindStressOptions::default()).unwrap();
    // a bogus drag coefficient must be ignored for stress input
    let opts = EkmanOptions::from_stress().with_drag_coefficient(1.0);
    let a = ekman(lat.view(), lon.view(), &tx, &ty, &opts).unwrap();
    let b = ekman(lat.view(), lon.view(), &u, &v, &EkmanOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_varying_drag_coefficient() {
    let (lat, lon) = NORTH_ATLANTIC.mesh(1.0, MeshOrder::LatRows);
    let u = Field::from(zonal_wind(&lat, &lon));
    let v = Field::from(meridional_wind(&lat, &lon));

    let doubled = Field::from(Array2::from_elem(lat.raw_dim(), 2.5e-3));
    let base = ekman(lat.view(), lon.view(), &u, &v, &EkmanOptions::default()).unwrap();
    let strong = ekman(
        lat.view(),
        lon.view(),
        &u,
        &v,
        &EkmanOptions::default().with_drag_coefficient(doubled),
    )
    .unwrap();

    let twice = base.ue.mapv(|x| 2.0 * x);
    assert_all_close!(strong.ue.as_grid().unwrap(), twice.as_grid().unwrap(), 1e-12);
}

#[test]
fn test_layered_time_series_scales_with_wind_squared() {
    let (lat, lon) = CALIFORNIA_CURRENT.mesh(1.0, MeshOrder::LatRows);
    let (u, v) = coastal_jet(&lat, &lon);
    let factors = [0.5, 1.0, 1.5, 2.0];
    let us: Vec<Array2<f64>> = factors.iter().map(|k| &u * *k).collect();
    let vs: Vec<Array2<f64>> = factors.iter().map(|k| &v * *k).collect();

    let config = CalculusConfig::default().with_parallel_layers(true);
    let grid = GeoGrid::with_config(lat.view(), lon.view(), LengthUnit::Meters, config).unwrap();
    let out = grid
        .ekman(
            &Field::from(stack_layers(&us)),
            &Field::from(stack_layers(&vs)),
            &EkmanOptions::default(),
        )
        .unwrap();
    assert_eq!(out.we.num_layers(), 4);

    let reference = out.we.layer(1).unwrap();
    for (k, factor) in factors.iter().enumerate() {
        let expected = reference.mapv(|x| x * factor * factor);
        assert_all_close!(out.we.layer(k).unwrap(), expected, 1e-10);
    }
}

#[test]
fn test_coriolis_matches_transport_denominator() {
    let (lat, lon) = NORTH_ATLANTIC.mesh(5.0, MeshOrder::LatRows);
    let f = coriolis_frequency(&lat, None).unwrap();
    let ty = Field::from(Array2::from_elem(lat.raw_dim(), 0.1));
    let tx = Field::from(Array2::<f64>::zeros(lat.raw_dim()));
    let out = ekman(lat.view(), lon.view(), &tx, &ty, &EkmanOptions::from_stress()).unwrap();

    let expected = f.mapv(|cor| 0.1 / (1025.0 * cor));
    assert_all_close!(out.ue.as_grid().unwrap(), expected, 1e-14);
}
