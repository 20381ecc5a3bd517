//! Mock thermal models for testing
//!
//! These models have known analytical solutions, making them ideal for
//! validating marcher accuracy without any radiator physics in the way.

use nalgebra::DVector;
use radiator_rs::physics::ThermalModel;
use radiator_rs::solver::SimulationError;

// =================================================================================================
// Ambient Relaxation: dT/dt = -k·(T - Ta)
// =================================================================================================

/// Newtonian cooling toward a fixed ambient: dT/dt = -k·(T - Ta)
///
/// One explicit step multiplies the offset by (1 - dt·k), so the exact
/// discrete solution after `s` steps is
///
/// ```text
/// T(s) = Ta + (T0 - Ta) · (1 - dt·k)^s
/// ```
///
/// which makes the marcher's bookkeeping checkable to machine precision.
pub struct AmbientRelaxation {
    pub nodes: usize,
    pub rate: f64,
    pub ambient: f64,
    pub initial: f64,
    pub boundary: f64,
}

impl AmbientRelaxation {
    pub fn new(nodes: usize, rate: f64) -> Self {
        Self {
            nodes,
            rate,
            ambient: 20.0,
            initial: 60.0,
            boundary: 55.0,
        }
    }

    /// Exact discrete solution for an interior node after `steps` steps
    pub fn discrete_solution(&self, dt: f64, steps: usize) -> f64 {
        let factor = (1.0 - dt * self.rate).powi(steps as i32);
        self.ambient + (self.initial - self.ambient) * factor
    }
}

impl ThermalModel for AmbientRelaxation {
    fn nodes(&self) -> usize {
        self.nodes
    }

    fn initial_profile(&self) -> DVector<f64> {
        let mut profile = DVector::from_element(self.nodes + 1, self.initial);
        profile[0] = self.boundary;
        profile
    }

    fn advance(&self, prev: &DVector<f64>, dt: f64) -> Result<DVector<f64>, SimulationError> {
        let mut next = prev.clone();
        for i in 1..=self.nodes {
            next[i] = prev[i] - dt * self.rate * (prev[i] - self.ambient);
        }
        Ok(next)
    }

    fn stability_limit(&self) -> Option<f64> {
        Some(2.0 / self.rate)
    }

    fn name(&self) -> &str {
        "Ambient relaxation"
    }
}

// =================================================================================================
// Constant Heating: dT/dt = c
// =================================================================================================

/// Constant heating model: dT/dt = c
///
/// Exact discrete solution T(s) = T0 + s·dt·c; the forward scheme is
/// exact for this problem, so any deviation is a marcher bug.
pub struct ConstantHeating {
    pub nodes: usize,
    pub rate: f64,
    pub initial: f64,
}

impl ConstantHeating {
    pub fn new(nodes: usize, rate: f64) -> Self {
        Self {
            nodes,
            rate,
            initial: 20.0,
        }
    }
}

impl ThermalModel for ConstantHeating {
    fn nodes(&self) -> usize {
        self.nodes
    }

    fn initial_profile(&self) -> DVector<f64> {
        DVector::from_element(self.nodes + 1, self.initial)
    }

    fn advance(&self, prev: &DVector<f64>, dt: f64) -> Result<DVector<f64>, SimulationError> {
        let mut next = prev.clone();
        for i in 1..=self.nodes {
            next[i] = prev[i] + dt * self.rate;
        }
        Ok(next)
    }

    fn name(&self) -> &str {
        "Constant heating"
    }
}
