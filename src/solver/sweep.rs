//! Parameter sweeps across independent runs
//!
//! One run is strictly sequential: each step depends on the previous one,
//! and at the target problem scale (thousands of steps × single-digit
//! node counts) there is nothing worth parallelizing inside it. The
//! natural parallel axis is *across* runs — studying a radiator under
//! many flow rates or supply temperatures at once — which is what this
//! module provides.
//!
//! With the `parallel` feature the batch is distributed over Rayon's
//! thread pool; without it the same function runs sequentially. Results
//! come back in input order either way, one `Result` per model, so a
//! single diverging configuration does not abort its siblings.
//!
//! # Example
//!
//! ```rust
//! use radiator_rs::models::{PanelRadiator, RadiatorConfig};
//! use radiator_rs::physics::ThermalModel;
//! use radiator_rs::solver::{solve_batch, ExplicitMarcher, MarchConfiguration};
//!
//! let models: Vec<Box<dyn ThermalModel>> = [0.005, 0.01, 0.02]
//!     .iter()
//!     .map(|&flow| {
//!         let config = RadiatorConfig::lenhovda_mp25_500().with_mass_flow(flow);
//!         Box::new(PanelRadiator::new(config).unwrap()) as Box<dyn ThermalModel>
//!     })
//!     .collect();
//!
//! let march = MarchConfiguration::new(1.0, 600);
//! let fields = solve_batch(&ExplicitMarcher::new(), &models, &march);
//!
//! assert_eq!(fields.len(), 3);
//! assert!(fields.iter().all(|f| f.is_ok()));
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::physics::{TemperatureField, ThermalModel};
use crate::solver::{MarchConfiguration, SimulationError, TimeMarcher};

/// Run one marcher over many models with a shared temporal resolution
///
/// Returns one result per model, in input order. Models are boxed trait
/// objects so a batch can mix different model types.
pub fn solve_batch<S>(
    marcher: &S,
    models: &[Box<dyn ThermalModel>],
    config: &MarchConfiguration,
) -> Vec<Result<TemperatureField, SimulationError>>
where
    S: TimeMarcher + Sync,
{
    #[cfg(feature = "parallel")]
    {
        models
            .par_iter()
            .map(|model| marcher.solve(model.as_ref(), config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        models
            .iter()
            .map(|model| marcher.solve(model.as_ref(), config))
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PanelRadiator, RadiatorConfig};
    use crate::solver::ExplicitMarcher;

    fn batch(flows: &[f64]) -> Vec<Box<dyn ThermalModel>> {
        flows
            .iter()
            .map(|&flow| {
                let config = RadiatorConfig::lenhovda_mp25_500().with_mass_flow(flow);
                Box::new(PanelRadiator::new(config).unwrap()) as Box<dyn ThermalModel>
            })
            .collect()
    }

    #[test]
    fn test_batch_preserves_order() {
        let models = batch(&[0.005, 0.01, 0.02]);
        let march = MarchConfiguration::new(1.0, 300);
        let fields = solve_batch(&ExplicitMarcher::new(), &models, &march);

        assert_eq!(fields.len(), 3);

        // Higher flow warms the outlet faster, so final outlet
        // temperatures must be strictly ordered like the input flows.
        let finals: Vec<f64> = fields
            .iter()
            .map(|f| *f.as_ref().unwrap().outlet_history().last().unwrap())
            .collect();
        assert!(finals[0] < finals[1]);
        assert!(finals[1] < finals[2]);
    }

    #[test]
    fn test_batch_matches_individual_runs() {
        let models = batch(&[0.01]);
        let march = MarchConfiguration::new(1.0, 120);

        let batched = solve_batch(&ExplicitMarcher::new(), &models, &march);
        let single = ExplicitMarcher::new()
            .solve(models[0].as_ref(), &march)
            .unwrap();

        let batched_field = batched[0].as_ref().unwrap();
        assert_eq!(batched_field.profile_at(120), single.profile_at(120));
    }

    #[test]
    fn test_one_failure_does_not_poison_the_batch() {
        // Second model carries an unstable dt for its mesh
        let mut models = batch(&[0.01]);
        let fine = RadiatorConfig::lenhovda_mp25_500().with_nodes(200);
        models.push(Box::new(PanelRadiator::new(fine).unwrap()));

        // dt = 30 s: fine inside the coarse model's bound, far outside the
        // 200-node model's bound
        let march = MarchConfiguration::new(30.0, 10);
        let fields = solve_batch(&ExplicitMarcher::new(), &models, &march);

        assert!(fields[0].is_ok());
        assert!(matches!(fields[1], Err(SimulationError::Unstable { .. })));
    }

    #[test]
    fn test_empty_batch() {
        let models: Vec<Box<dyn ThermalModel>> = Vec::new();
        let march = MarchConfiguration::new(1.0, 10);
        let fields = solve_batch(&ExplicitMarcher::new(), &models, &march);
        assert!(fields.is_empty());
    }
}
