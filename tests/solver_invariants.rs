//! Invariant tests: marcher contracts that hold for every model
//!
//! These tests exercise the marcher against mock models with known
//! discrete solutions, independent of any radiator physics.

use radiator_rs::physics::ThermalModel;
use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, SimulationError, TimeMarcher};

mod common;
use common::test_helpers::relative_error;
use common::{AmbientRelaxation, ConstantHeating};

// =================================================================================================
// Shape Contract
// =================================================================================================

#[test]
fn test_field_has_one_row_per_node_plus_boundary() {
    let model = AmbientRelaxation::new(7, 0.05);
    let march = MarchConfiguration::new(1.0, 50);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();

    assert_eq!(field.shape(), (8, 51));
    assert_eq!(field.nodes(), 7);
    assert_eq!(field.steps(), 50);
}

#[test]
fn test_time_axis_starts_at_zero_and_ends_at_total_time() {
    let model = AmbientRelaxation::new(3, 0.05);
    let march = MarchConfiguration::new(0.25, 400);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();
    let times = field.time_points();

    assert!(times[0].abs() < 1e-12);
    assert!((times.last().unwrap() - 100.0).abs() < 1e-9);
}

// =================================================================================================
// Initial Condition and Boundary Invariants
// =================================================================================================

#[test]
fn test_column_zero_is_the_initial_profile() {
    let model = AmbientRelaxation::new(4, 0.05);
    let march = MarchConfiguration::new(1.0, 10);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();

    assert_eq!(field.profile_at(0), model.initial_profile());
}

#[test]
fn test_boundary_row_never_changes() {
    let model = AmbientRelaxation::new(4, 0.05);
    let march = MarchConfiguration::new(1.0, 200);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();

    for &t in &field.inlet_history() {
        assert_eq!(t, model.boundary);
    }
}

// =================================================================================================
// Numerical Accuracy
// =================================================================================================

#[test]
fn test_marcher_reproduces_discrete_relaxation_exactly() {
    let model = AmbientRelaxation::new(5, 0.1);
    let dt = 0.5;
    let steps = 400;
    let march = MarchConfiguration::new(dt, steps);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();

    // The marcher adds nothing on top of the model's recurrence, so the
    // result must match the closed form to machine precision.
    let expected = model.discrete_solution(dt, steps);
    for node in 1..=5 {
        let actual = *field.node_history(node).last().unwrap();
        assert!(
            (actual - expected).abs() < 1e-12,
            "node {}: {} vs {}",
            node,
            actual,
            expected
        );
    }
}

#[test]
fn test_constant_heating_is_exact() {
    let model = ConstantHeating::new(3, 2.0);
    let march = MarchConfiguration::new(0.5, 10);

    let field = ExplicitMarcher::new().solve(&model, &march).unwrap();

    // T(5 s) = 20 + 2·5 = 30, exact for the forward scheme
    let actual = *field.outlet_history().last().unwrap();
    assert!(relative_error(actual, 30.0) < 1e-12);
}

// =================================================================================================
// Stability Pre-flight
// =================================================================================================

#[test]
fn test_unstable_dt_is_refused_before_stepping() {
    // limit = 2/k = 10 s
    let model = AmbientRelaxation::new(5, 0.2);
    let march = MarchConfiguration::new(12.0, 100);

    let result = ExplicitMarcher::new().solve(&model, &march);

    match result {
        Err(SimulationError::Unstable { dt, limit }) => {
            assert_eq!(dt, 12.0);
            assert!((limit - 10.0).abs() < 1e-12);
        }
        other => panic!("expected Unstable, got {:?}", other),
    }
}

#[test]
fn test_dt_exactly_at_the_limit_runs() {
    let model = AmbientRelaxation::new(5, 0.2);
    let march = MarchConfiguration::new(10.0, 20);

    assert!(ExplicitMarcher::new().solve(&model, &march).is_ok());
}

// =================================================================================================
// Determinism
// =================================================================================================

#[test]
fn test_repeated_runs_are_bit_identical() {
    let model = AmbientRelaxation::new(5, 0.1);
    let march = MarchConfiguration::new(0.5, 500);
    let marcher = ExplicitMarcher::new();

    let a = marcher.solve(&model, &march).unwrap();
    let b = marcher.solve(&model, &march).unwrap();

    for step in 0..=500 {
        assert_eq!(a.profile_at(step), b.profile_at(step));
    }
}
