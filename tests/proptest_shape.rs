//! Property-based tests over random valid shapes.
//!
//! Run with: cargo test --test proptest_shape

#![allow(clippy::unwrap_used)]

use mobius::{build_shape, edge_length, mesh_coordinates, surface_area, AnalysisParams, EdgeSide};
use proptest::prelude::*;

/// Radius, width and resolution of a valid shape.
fn arb_shape_params() -> impl Strategy<Value = (f64, f64, usize)> {
    (0.1..10.0f64, 0.01..3.0f64, 2usize..40)
}

fn arb_analysis() -> impl Strategy<Value = AnalysisParams> {
    prop_oneof![
        Just(AnalysisParams::default()),
        Just(AnalysisParams::chordal()),
        Just(AnalysisParams::trapezoid()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn measurements_are_finite_and_nonnegative(
        (r, w, n) in arb_shape_params(),
        analysis in arb_analysis(),
    ) {
        let shape = build_shape(r, w, n).unwrap().with_analysis(analysis);
        let area = surface_area(&shape);
        let edge = edge_length(&shape);
        prop_assert!(area.is_finite() && area >= 0.0, "area = {}", area);
        prop_assert!(edge.is_finite() && edge > 0.0, "edge = {}", edge);
    }

    #[test]
    fn mesh_arrays_share_shape((r, w, n) in arb_shape_params()) {
        let shape = build_shape(r, w, n).unwrap();
        let (x, y, z) = mesh_coordinates(&shape);
        prop_assert_eq!(x.shape(), (n, n));
        prop_assert_eq!(y.shape(), (n, n));
        prop_assert_eq!(z.shape(), (n, n));
    }

    #[test]
    fn mesh_nodes_lie_on_the_surface((r, w, n) in arb_shape_params()) {
        let shape = build_shape(r, w, n).unwrap();
        let (x, y, z) = mesh_coordinates(&shape);
        let grid = shape.mesh().grid();
        for (i, &v) in grid.v().iter().enumerate() {
            for (j, &u) in grid.u().iter().enumerate() {
                let radial = r + v * (u / 2.0).cos();
                prop_assert!((x[(i, j)] - radial * u.cos()).abs() < 1e-9);
                prop_assert!((y[(i, j)] - radial * u.sin()).abs() < 1e-9);
                prop_assert!((z[(i, j)] - v * (u / 2.0).sin()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn sides_are_congruent(
        (r, w, n) in arb_shape_params(),
        analysis in arb_analysis(),
    ) {
        let shape = build_shape(r, w, n).unwrap().with_analysis(analysis);
        let pos = shape.edge_length_of(EdgeSide::Positive);
        let neg = shape.edge_length_of(EdgeSide::Negative);
        prop_assert!((pos - neg).abs() <= 1e-9 * pos, "{} vs {}", pos, neg);
    }

    #[test]
    fn nonpositive_radius_is_rejected(r in -10.0..=0.0f64, w in 0.01..3.0f64, n in 2usize..10) {
        prop_assert!(build_shape(r, w, n).is_err());
    }
}
