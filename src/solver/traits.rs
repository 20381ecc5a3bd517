//! Time-marcher trait and configuration
//!
//! # Design Philosophy
//!
//! The marcher is configured with *numerical* parameters only (`dt`, step
//! count); everything physical lives in the model. The same configuration
//! can drive different models and the same model can be driven with
//! different resolutions, without either side changing.

use crate::physics::{TemperatureField, ThermalModel};
use crate::solver::SimulationError;

// =================================================================================================
// March Configuration
// =================================================================================================

/// Temporal resolution of a run
///
/// # Examples
///
/// ```rust
/// use radiator_rs::solver::MarchConfiguration;
///
/// // 80 minutes of simulated time at 1 s steps
/// let march = MarchConfiguration::new(1.0, 4800);
/// assert_eq!(march.total_time(), 4800.0);
///
/// // Same run specified by total time
/// let march = MarchConfiguration::from_total_time(4800.0, 4800);
/// assert_eq!(march.dt, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchConfiguration {
    /// Time-step length in seconds
    pub dt: f64,

    /// Number of time steps `Nt` (the field gets `Nt + 1` columns)
    pub steps: usize,
}

impl MarchConfiguration {
    /// Create a configuration from a step length and step count
    pub fn new(dt: f64, steps: usize) -> Self {
        Self { dt, steps }
    }

    /// Create a configuration from a total simulated time and step count
    ///
    /// `dt = total_time / steps`
    pub fn from_total_time(total_time: f64, steps: usize) -> Self {
        Self {
            dt: total_time / steps as f64,
            steps,
        }
    }

    /// Total simulated time in seconds
    pub fn total_time(&self) -> f64 {
        self.dt * self.steps as f64
    }

    /// Validate that the parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.steps == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "step count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Time Marcher Trait
// =================================================================================================

/// Trait for numerical time marchers
///
/// A marcher owns the single stateful loop of the system: it allocates
/// the [`TemperatureField`], writes the initial profile, repeatedly asks
/// the model for the next profile, and returns the fully populated field.
///
/// # Guarantees expected of implementations
///
/// - deterministic: identical inputs give bit-identical fields
/// - all-or-nothing: a failed run returns no partially filled field
/// - pre-flight stability: when the model reports a `dt` bound, a
///   configuration exceeding it is rejected before the first step
///
/// # Implementing a new marcher
///
/// ```rust,ignore
/// use radiator_rs::solver::{TimeMarcher, MarchConfiguration, SimulationError};
/// use radiator_rs::physics::{TemperatureField, ThermalModel};
///
/// pub struct MyMarcher;
///
/// impl TimeMarcher for MyMarcher {
///     fn solve(
///         &self,
///         model: &dyn ThermalModel,
///         config: &MarchConfiguration,
///     ) -> Result<TemperatureField, SimulationError> {
///         config.validate()?;
///         // ... your stepping scheme ...
///         # unimplemented!()
///     }
///
///     fn name(&self) -> &str {
///         "My Marcher"
///     }
/// }
/// ```
pub trait TimeMarcher {
    /// Run the model over all configured time steps
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidConfiguration`] from `config.validate()`
    /// - [`SimulationError::Unstable`] from the pre-flight stability check
    /// - any error the model's `advance` raises mid-run
    /// - [`SimulationError::NonFinite`] if a computed profile contains
    ///   NaN or infinity
    fn solve(
        &self,
        model: &dyn ThermalModel,
        config: &MarchConfiguration,
    ) -> Result<TemperatureField, SimulationError>;

    /// Name of the marching scheme (stored in field metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configuration() {
        let march = MarchConfiguration::new(1.0, 4800);
        assert!(march.validate().is_ok());
        assert_eq!(march.total_time(), 4800.0);
    }

    #[test]
    fn test_from_total_time() {
        let march = MarchConfiguration::from_total_time(600.0, 1200);
        assert!((march.dt - 0.5).abs() < 1e-15);
        assert_eq!(march.steps, 1200);
    }

    #[test]
    fn test_zero_dt_rejected() {
        let march = MarchConfiguration::new(0.0, 100);
        assert!(matches!(
            march.validate(),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_negative_dt_rejected() {
        let march = MarchConfiguration::new(-1.0, 100);
        assert!(march.validate().is_err());
    }

    #[test]
    fn test_nan_dt_rejected() {
        let march = MarchConfiguration::new(f64::NAN, 100);
        assert!(march.validate().is_err());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let march = MarchConfiguration::new(1.0, 0);
        assert!(march.validate().is_err());
    }
}
