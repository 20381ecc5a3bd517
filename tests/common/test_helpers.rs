//! Helper functions for integration tests

use nalgebra::DVector;
use radiator_rs::models::{PanelRadiator, RadiatorConfig};

/// Assert that two temperature profiles are close (within tolerance)
pub fn assert_profiles_close(
    profile1: &DVector<f64>,
    profile2: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        profile1.len(),
        profile2.len(),
        "{}: Dimension mismatch",
        message
    );

    for (i, (&v1, &v2)) in profile1.iter().zip(profile2.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Node {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// The reference radiator, ready to march
pub fn lenhovda_model() -> PanelRadiator {
    PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
