//! radiator-rs: Transient Hydronic Radiator Simulation Kernel
//!
//! A simulation kernel for studying the thermal lag of hydronic panel
//! radiators, e.g. in model-predictive control research for space heating.
//! The radiator is discretized along its flow length into lumped
//! thermal-mass nodes and marched forward in time with an explicit
//! finite-difference scheme.
//!
//! # Architecture
//!
//! radiator-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Thermal models define the per-step energy balance (what to solve)
//!    - Time marchers apply the stepping scheme (how to solve)
//!
//! 2. **Explicit state over hidden state**
//!    - All physical parameters live in an immutable configuration struct
//!    - The recurrence is a pure state-transition function, unit-testable
//!      against hand-computed values for a single step
//!
//! # Quick Start
//!
//! ```rust
//! use radiator_rs::models::{PanelRadiator, RadiatorConfig};
//! use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, TimeMarcher};
//!
//! # fn main() -> Result<(), radiator_rs::solver::SimulationError> {
//! // 1. Describe the radiator and its operating point
//! let config = RadiatorConfig::lenhovda_mp25_500();
//!
//! // 2. Build the discretized model (derives per-node coefficients)
//! let model = PanelRadiator::new(config)?;
//!
//! // 3. March 80 minutes at 1 s steps
//! let march = MarchConfiguration::new(1.0, 4800);
//! let field = ExplicitMarcher::new().solve(&model, &march)?;
//!
//! // 4. Access the full space-time temperature history
//! println!("outlet after 80 min: {:.2} °C", field.outlet_history().last().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: the model/solver seam ([`physics::ThermalModel`]) and the
//!   [`physics::TemperatureField`] result container
//! - [`models`]: the panel radiator energy balance and its configuration
//! - [`solver`]: explicit time marching, stability pre-flight, parameter sweeps
//! - [`output`]: plotting (plotters) and CSV export of finished runs

pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use radiator_rs::prelude::*;
    //! ```
    pub use crate::models::{PanelRadiator, RadiatorConfig, SubAmbientPolicy};
    pub use crate::physics::{TemperatureField, ThermalModel};
    pub use crate::solver::{ExplicitMarcher, MarchConfiguration, SimulationError, TimeMarcher};
}
