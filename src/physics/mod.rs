//! Physical abstractions
//!
//! This module defines the seam between thermal models and numerical
//! time marchers:
//!
//! - **Thermal Model**: provides the per-step energy balance of a system
//! - **Temperature Field**: the full space-time temperature history of a run
//!
//! # Architecture
//!
//! Thermal models are **separate from numerical marchers**:
//! - The model provides the **state transition** (physics of one step)
//! - The marcher drives the transition over all steps and owns the field
//!
//! This separation allows:
//! - The same marcher to drive different models (real radiator, test mocks)
//! - The single stateful loop to live in exactly one place
//! - The recurrence to be unit-tested one step at a time
//!
//! # Example
//!
//! ```rust
//! use radiator_rs::models::{PanelRadiator, RadiatorConfig};
//! use radiator_rs::physics::ThermalModel;
//!
//! # fn main() -> Result<(), radiator_rs::solver::SimulationError> {
//! let model = PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500())?;
//!
//! // One application of the recurrence, no marcher involved
//! let profile = model.initial_profile();
//! let next = model.advance(&profile, 1.0)?;
//!
//! assert_eq!(next.len(), profile.len());
//! # Ok(())
//! # }
//! ```

mod field;
mod traits;

pub use field::TemperatureField;
pub use traits::ThermalModel;
