//! Data export functionality
//!
//! Exporters serialize a finished
//! [`TemperatureField`](crate::physics::TemperatureField) to files for
//! downstream analysis. The [`Exporter`] trait abstracts over the file
//! format; [`CsvExporter`] is the provided implementation.
//!
//! # Downsampling
//!
//! A reference run is 4801 columns; exports accept an optional point
//! budget and thin the time axis to roughly that many evenly spaced
//! samples, always keeping the first and last columns so ramp start and
//! settled value survive the thinning.

mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter};

use crate::physics::TemperatureField;

// =================================================================================================
// Exporter Trait
// =================================================================================================

/// Common interface for writing simulation results to files
///
/// Implementations choose their own error type; all take the field by
/// reference and an output path.
pub trait Exporter {
    /// Format-specific error type
    type Error: std::error::Error;

    /// Export the full field: one column per node history plus time
    ///
    /// `n_points` caps the number of exported time samples; `None`
    /// exports every step.
    fn export_field(
        &self,
        field: &TemperatureField,
        path: &str,
        n_points: Option<usize>,
    ) -> Result<(), Self::Error>;

    /// Export only the outlet history against time
    fn export_outlet(
        &self,
        field: &TemperatureField,
        path: &str,
        n_points: Option<usize>,
    ) -> Result<(), Self::Error>;
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Select roughly `n_points` evenly spaced step indices out of `steps + 1`
///
/// The first and last indices are always present. With `None`, or a
/// budget at least as large as the run, every index is returned.
pub(crate) fn sample_indices(steps: usize, n_points: Option<usize>) -> Vec<usize> {
    let total = steps + 1;
    match n_points {
        Some(budget) if budget >= 2 && budget < total => {
            let mut indices: Vec<usize> = (0..budget)
                .map(|k| k * steps / (budget - 1))
                .collect();
            indices.dedup();
            indices
        }
        _ => (0..total).collect(),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_budget_keeps_everything() {
        assert_eq!(sample_indices(4, None), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_large_budget_keeps_everything() {
        assert_eq!(sample_indices(4, Some(100)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_downsampling_keeps_endpoints() {
        let indices = sample_indices(4800, Some(100));
        assert_eq!(*indices.first().unwrap(), 0);
        assert_eq!(*indices.last().unwrap(), 4800);
        assert!(indices.len() <= 100);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degenerate_budget_keeps_everything() {
        // A budget of 1 cannot hold both endpoints; export everything
        assert_eq!(sample_indices(3, Some(1)), vec![0, 1, 2, 3]);
    }
}
