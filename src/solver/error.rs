//! Simulation error taxonomy
//!
//! All failure modes of a run are synchronous and local to the single
//! solve call: a run either completes with a fully populated
//! [`TemperatureField`](crate::physics::TemperatureField) or fails with
//! one of these variants before or during iteration. There is no retry
//! (the scheme is deterministic) and no partial-result recovery.

use std::error::Error;
use std::fmt;

/// Error raised by configuration validation or the time-marching loop
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// A required parameter is missing, non-finite, or non-physical
    ///
    /// Raised at setup time, before any allocation or stepping.
    InvalidConfiguration(String),

    /// The configured `dt` exceeds the model's explicit-scheme bound
    ///
    /// Raised by the pre-flight check, before the first step. Marching
    /// with such a `dt` would not error at runtime; it would silently
    /// produce diverging output.
    Unstable {
        /// Configured time-step length in seconds
        dt: f64,
        /// Largest stable time-step length reported by the model
        limit: f64,
    },

    /// A node dropped below ambient temperature under the abort policy
    ///
    /// The heat-loss law raises a normalized temperature difference to a
    /// non-integer exponent, which is undefined in real arithmetic for a
    /// negative base.
    SubAmbient {
        /// Node index (1-based thermal mass, never the inlet boundary)
        node: usize,
        /// Time step at which the violation was detected
        step: usize,
        /// Offending temperature in °C
        temperature: f64,
    },

    /// NaN or infinity detected in a freshly computed profile
    NonFinite {
        /// Node index of the first non-finite entry
        node: usize,
        /// Time step at which it appeared
        step: usize,
    },
}

impl SimulationError {
    /// Stamp a step index onto an error raised inside a single `advance`
    ///
    /// Models see one profile at a time and do not know which step the
    /// marcher is on; the marcher fills it in when propagating.
    pub fn at_step(mut self, at: usize) -> Self {
        if let SimulationError::SubAmbient { ref mut step, .. }
        | SimulationError::NonFinite { ref mut step, .. } = self
        {
            *step = at;
        }
        self
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
            SimulationError::Unstable { dt, limit } => write!(
                f,
                "time step dt = {} s exceeds the explicit-scheme stability limit of {:.3} s; \
                 reduce dt or coarsen the mesh",
                dt, limit
            ),
            SimulationError::SubAmbient {
                node,
                step,
                temperature,
            } => write!(
                f,
                "node {} fell below ambient ({:.3} °C) at step {}; the heat-loss law is \
                 undefined there (sub-ambient policy: abort)",
                node, temperature, step
            ),
            SimulationError::NonFinite { node, step } => write!(
                f,
                "non-finite temperature at node {} step {}; this indicates numerical \
                 instability, try reducing the time step",
                node, step
            ),
        }
    }
}

impl Error for SimulationError {}

// =================================================================================================
// Tests
// =================================================================================================
