//! Thermal model trait
//!
//! This module defines the core API for thermal models:
//! - `ThermalModel`: trait implemented by every simulated system

use nalgebra::DVector;

use crate::solver::SimulationError;

// =================================================================================================
// Thermal Model Trait
// =================================================================================================

/// Trait for thermal models advanced by a time marcher
///
/// # Responsibility
///
/// Encapsulates the energy balance of one time step as a pure
/// state-transition function: given the previous step's temperature
/// profile, return the next one. Does NOT loop over time (that is the
/// marcher's job) and does NOT own the result field.
///
/// # State layout
///
/// A profile is a vector of `nodes() + 1` temperatures in °C. Index 0 is
/// the inlet boundary condition (a Dirichlet value, never produced by the
/// recurrence); indices `1..=nodes()` are the lumped thermal masses.
///
/// # Determinism
///
/// `advance` must be deterministic: the marcher's output is bit-for-bit
/// reproducible given identical inputs and floating-point arithmetic.
pub trait ThermalModel: Send + Sync {
    /// Number of thermal-mass nodes `n`
    ///
    /// Profiles carry `n + 1` entries; the extra entry is the inlet
    /// boundary at index 0. Used by the marcher to allocate the field.
    fn nodes(&self) -> usize;

    /// Temperature profile at time zero
    ///
    /// Nodes `1..=n` hold the initial condition; node 0 holds the boundary
    /// condition. At the origin cell the boundary takes precedence, so the
    /// returned vector already reconciles the two.
    fn initial_profile(&self) -> DVector<f64>;

    /// Advance the profile by one time step of length `dt`
    ///
    /// # Arguments
    /// * `prev` - the previous step's full profile (length `n + 1`)
    /// * `dt` - time-step length in seconds, owned by the marcher
    ///
    /// # Returns
    /// The new profile. Node 0 is carried over unchanged (boundary
    /// condition); every other node reads only `prev`, never values from
    /// the step being computed (fully explicit scheme).
    ///
    /// # Errors
    ///
    /// A model may reject a physically undefined intermediate state, e.g.
    /// a sub-ambient node temperature under an abort policy.
    fn advance(&self, prev: &DVector<f64>, dt: f64) -> Result<DVector<f64>, SimulationError>;

    /// Largest stable time-step length in seconds, if one is known
    ///
    /// Explicit schemes are conditionally stable; a marcher compares its
    /// configured `dt` against this bound before the first step and fails
    /// fast instead of silently producing diverging output. Models without
    /// a known bound (e.g. test mocks) return `None`.
    fn stability_limit(&self) -> Option<f64> {
        None
    }

    /// Name of the model (used for display and result metadata)
    fn name(&self) -> &str;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}
