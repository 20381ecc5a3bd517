//! Thermal models for radiator simulation
//!
//! All models implement the [`ThermalModel`](crate::physics::ThermalModel)
//! trait. The marcher calls `advance` at each time step — models own the
//! physics (energy balance), the marcher owns the time loop.
//!
//! # Available Models
//!
//! ## [`PanelRadiator`] — hydronic panel radiator
//!
//! `n` lumped water+metal thermal masses along the flow length, convective
//! transport between neighbours, nonlinear (exponentiated-LMTD) heat loss
//! to the room. Configured through [`RadiatorConfig`]; behaviour below
//! ambient temperature is selected with [`SubAmbientPolicy`].

mod radiator;

pub use radiator::{PanelRadiator, RadiatorConfig, SubAmbientPolicy};
