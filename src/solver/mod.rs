//! Numerical time marching
//!
//! This module provides the traits and implementations that drive a
//! [`ThermalModel`](crate::physics::ThermalModel) through time.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! Three layers, mirroring the physics/numerics split of the crate:
//!
//! 1. **Model** — WHAT to solve: the per-step energy balance
//! 2. **[`MarchConfiguration`]** — HOW finely: `dt` and step count
//! 3. **[`TimeMarcher`]** — the stepping scheme itself
//!
//! This separation keeps the single stateful loop in one place, lets the
//! same marcher drive test mocks and the real radiator, and makes the
//! recurrence testable one step at a time.
//!
//! # Module Organization
//!
//! - **`traits`**: [`TimeMarcher`] trait and [`MarchConfiguration`]
//! - **`error`**: [`SimulationError`] taxonomy
//! - **`explicit`**: [`ExplicitMarcher`], the forward scheme of the
//!   reference formulation
//! - **`sweep`**: running many independent configurations, in parallel
//!   with the `parallel` feature
//!
//! # Error Handling
//!
//! Every failure is synchronous and total: either a fully populated
//! [`TemperatureField`](crate::physics::TemperatureField) comes back, or
//! a [`SimulationError`] and no field at all.
//!
//! ```rust
//! use radiator_rs::models::{PanelRadiator, RadiatorConfig};
//! use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, TimeMarcher};
//!
//! let model = PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500()).unwrap();
//!
//! // dt far above the stability bound: rejected before the first step
//! let march = MarchConfiguration::new(500.0, 10);
//! match ExplicitMarcher::new().solve(&model, &march) {
//!     Err(e) => eprintln!("run refused: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod error;
mod explicit;
mod sweep;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use error::SimulationError;
pub use explicit::ExplicitMarcher;
pub use sweep::solve_batch;
pub use traits::{MarchConfiguration, TimeMarcher};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a freshly computed profile for numerical issues
///
/// NaN can arise from 0/0 or Inf − Inf, infinity from overflow; both mean
/// the run has gone numerically wrong (typically a too-large `dt` the
/// pre-flight linearization could not anticipate) and must stop here
/// rather than propagate garbage into the field.
pub(crate) fn validate_profile(profile: &DVector<f64>, step: usize) -> Result<(), SimulationError> {
    for (node, value) in profile.iter().enumerate() {
        if !value.is_finite() {
            return Err(SimulationError::NonFinite { node, step });
        }
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
