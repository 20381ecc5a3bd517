//! Explicit time-marching solver
//!
//! # Mathematical Background
//!
//! The marcher applies the simplest explicit scheme: each new profile is
//! a function of the previous profile only,
//!
//! ```text
//! T(:, t) = advance(T(:, t-1), dt)        t = 1..=Nt
//! ```
//!
//! which for the panel radiator's per-node balance is exactly the forward
//! finite-difference recurrence of the reference formulation.
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (error ~ O(dt))
//! - **Stability**: conditional — `dt` must stay below the model's bound
//! - **Memory**: O(n·Nt), the full history is retained for downstream
//!   plotting and analysis
//!
//! # Stability
//!
//! The scheme silently diverges for too-large `dt`; the marcher therefore
//! runs a pre-flight check against [`ThermalModel::stability_limit`] and
//! refuses to start an unstable run. This is deliberately an error, not a
//! warning: the output of an unstable explicit run is garbage, not a
//! rough approximation.

use nalgebra::DMatrix;

use crate::physics::{TemperatureField, ThermalModel};
use crate::solver;
use crate::solver::{MarchConfiguration, SimulationError, TimeMarcher};

// =================================================================================================
// Explicit Marcher
// =================================================================================================

/// Forward time-marching solver for explicit recurrences
///
/// # Algorithm
///
/// 1. Validate the configuration and run the stability pre-flight
/// 2. Allocate the `(n+1) × (Nt+1)` field, write the initial profile
///    into column 0 (boundary condition already reconciled by the model)
/// 3. For each step `t = 1..=Nt`: advance column `t-1`, validate the new
///    profile for NaN/Inf, write column `t`
/// 4. Attach run metadata and hand the field off
///
/// The marcher is stateless and can be reused across runs.
///
/// # Example
///
/// ```rust
/// use radiator_rs::models::{PanelRadiator, RadiatorConfig};
/// use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, TimeMarcher};
///
/// # fn main() -> Result<(), radiator_rs::solver::SimulationError> {
/// let model = PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500())?;
/// let march = MarchConfiguration::new(1.0, 4800);
///
/// let field = ExplicitMarcher::new().solve(&model, &march)?;
/// assert_eq!(field.steps(), 4800);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ExplicitMarcher;

impl ExplicitMarcher {
    /// Create a new explicit marcher
    pub fn new() -> Self {
        Self
    }
}

impl TimeMarcher for ExplicitMarcher {
    fn solve(
        &self,
        model: &dyn ThermalModel,
        config: &MarchConfiguration,
    ) -> Result<TemperatureField, SimulationError> {
        // ====== Step 1: Validation ======

        config.validate()?;

        // Pre-flight stability check: fail fast instead of diverging
        if let Some(limit) = model.stability_limit() {
            if config.dt > limit {
                return Err(SimulationError::Unstable {
                    dt: config.dt,
                    limit,
                });
            }
        }

        // ====== Step 2: Setup ======

        let rows = model.nodes() + 1;
        let columns = config.steps + 1;

        // Allocated once; every column is written exactly once below
        let mut data = DMatrix::zeros(rows, columns);

        let mut profile = model.initial_profile();
        assert_eq!(
            profile.len(),
            rows,
            "model initial profile length {} vs {} nodes + boundary",
            profile.len(),
            model.nodes()
        );
        data.set_column(0, &profile);

        // ====== Step 3: Time Marching ======

        for step in 1..=config.steps {
            profile = model
                .advance(&profile, config.dt)
                .map_err(|err| err.at_step(step))?;

            // Catch instability the pre-flight could not predict
            solver::validate_profile(&profile, step)?;

            data.set_column(step, &profile);
        }

        // ====== Step 4: Build Result ======

        let mut field = TemperatureField::new(data, config.dt);
        field.add_metadata("marcher", self.name());
        field.add_metadata("model", model.name());
        field.add_metadata("dt", &config.dt.to_string());
        field.add_metadata("steps", &config.steps.to_string());

        Ok(field)
    }

    fn name(&self) -> &str {
        "Explicit forward difference"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
