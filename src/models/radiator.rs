//! Panel radiator model: lumped-node energy balance
//!
//! The radiator is treated as `n` physically identical segments along the
//! flow direction, each a lumped water+metal thermal mass. Per step and
//! per node the balance combines:
//!
//! - **convective transport** — heat carried in by mass flow from the
//!   upstream node, `Cw · mF · (T[i-1] − T[i])`
//! - **heat loss to the room** — the radiator's rated output scaled by a
//!   normalized temperature difference raised to the empirical radiator
//!   exponent, `Qi · ((T[i] − Ta) / LMTDn)^n_r`
//!
//! Node 0 is not a thermal mass: it is a Dirichlet boundary pinned to the
//! supply temperature for the whole run.
//!
//! # Example
//!
//! ```rust
//! use radiator_rs::models::{PanelRadiator, RadiatorConfig};
//! use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, TimeMarcher};
//!
//! # fn main() -> Result<(), radiator_rs::solver::SimulationError> {
//! let config = RadiatorConfig::lenhovda_mp25_500().with_mass_flow(0.015);
//! let model = PanelRadiator::new(config)?;
//!
//! let field = ExplicitMarcher::new().solve(&model, &MarchConfiguration::new(1.0, 600))?;
//! assert_eq!(field.shape(), (6, 601));
//! # Ok(())
//! # }
//! ```

use nalgebra::DVector;

use crate::physics::ThermalModel;
use crate::solver::SimulationError;

// =================================================================================================
// Sub-Ambient Policy
// =================================================================================================

/// What to do when a node temperature drops below ambient
///
/// The heat-loss law raises `(T − Ta) / LMTDn` to a non-integer exponent.
/// For `T < Ta` the base is negative and the power is undefined in real
/// arithmetic, so the behaviour outside the normal operating envelope has
/// to be an explicit choice rather than incidental floating-point output
/// (a naive `powf` would propagate NaN through the whole field).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubAmbientPolicy {
    /// Clamp the driving difference to zero: a sub-ambient node loses no
    /// heat to the room. Temperatures then stay bounded below by ambient
    /// in the limit. This is the default.
    #[default]
    ClampToAmbient,

    /// Abort the run with [`SimulationError::SubAmbient`]
    Abort,
}

// =================================================================================================
// Radiator Configuration
// =================================================================================================

/// Physical and operational parameters of one radiator run
///
/// A plain data holder; no computation happens here beyond validation.
/// All fields are public so a configuration can be written literally in
/// tests, or derived from a baseline with the `with_*` builders.
///
/// # Units
///
/// Temperatures in °C, masses in kg, specific heats in J/(kg·K), power in
/// W, lengths in m, mass flow in kg/s.
///
/// # Example
///
/// ```rust
/// use radiator_rs::models::RadiatorConfig;
///
/// let config = RadiatorConfig::lenhovda_mp25_500()
///     .with_supply_temperature(70.0)
///     .with_nodes(10);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiatorConfig {
    /// Water mass flow rate through the radiator [kg/s]; zero is legal
    /// (stagnant water, pure heat-loss decay)
    pub mass_flow: f64,

    /// Inlet (supply) temperature [°C] — the Dirichlet boundary at node 0
    pub supply_temperature: f64,

    /// Room air temperature [°C], assumed constant
    pub ambient_temperature: f64,

    /// Water temperature of all nodes at t = 0 [°C]
    pub initial_temperature: f64,

    /// Empirical radiator exponent n_r [-]
    pub radiator_exponent: f64,

    /// Nominal heat output rate Qn [W]
    pub nominal_output: f64,

    /// Nominal log mean temperature difference LMTDn [°C]
    pub nominal_lmtd: f64,

    /// Total water mass in the radiator [kg]
    pub water_mass: f64,

    /// Total metal mass of the radiator unit [kg]
    pub metal_mass: f64,

    /// Specific heat capacity of water [J/(kg·K)]
    pub water_specific_heat: f64,

    /// Specific heat capacity of the radiator metal [J/(kg·K)]
    pub metal_specific_heat: f64,

    /// Radiator height [m] (geometry, reported only)
    pub height: f64,

    /// Radiator length [m]; also sets the grid spacing dx = length / n
    pub length: f64,

    /// Number of thermal-mass nodes n
    pub nodes: usize,

    /// Behaviour when a node drops below ambient temperature
    pub sub_ambient_policy: SubAmbientPolicy,
}

impl RadiatorConfig {
    /// Reference configuration: Lenhovda MP 25 500 panel radiator
    ///
    /// The operating point used throughout the tests and demos:
    /// 0.01 kg/s flow, 55 °C supply into a 20 °C room, radiator initially
    /// at 20.5 °C, rated 276 W at LMTD 30 °C with exponent 1.286.
    pub fn lenhovda_mp25_500() -> Self {
        Self {
            mass_flow: 0.01,
            supply_temperature: 55.0,
            ambient_temperature: 20.0,
            initial_temperature: 20.5,
            radiator_exponent: 1.286,
            nominal_output: 276.0,
            nominal_lmtd: 30.0,
            water_mass: 3.23,
            metal_mass: 10.71,
            water_specific_heat: 4180.0,
            metal_specific_heat: 897.0,
            height: 0.5,
            length: 1.0,
            nodes: 5,
            sub_ambient_policy: SubAmbientPolicy::ClampToAmbient,
        }
    }

    // ==================================== Builder methods ========================================

    /// Builder pattern: set mass flow rate [kg/s]
    pub fn with_mass_flow(mut self, mass_flow: f64) -> Self {
        self.mass_flow = mass_flow;
        self
    }

    /// Builder pattern: set supply temperature [°C]
    pub fn with_supply_temperature(mut self, supply: f64) -> Self {
        self.supply_temperature = supply;
        self
    }

    /// Builder pattern: set ambient temperature [°C]
    pub fn with_ambient_temperature(mut self, ambient: f64) -> Self {
        self.ambient_temperature = ambient;
        self
    }

    /// Builder pattern: set initial water temperature [°C]
    pub fn with_initial_temperature(mut self, initial: f64) -> Self {
        self.initial_temperature = initial;
        self
    }

    /// Builder pattern: set node count
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Builder pattern: set the sub-ambient policy
    pub fn with_sub_ambient_policy(mut self, policy: SubAmbientPolicy) -> Self {
        self.sub_ambient_policy = policy;
        self
    }

    // ====================================== Validation ===========================================

    /// Check every parameter for physical plausibility
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidConfiguration`] naming the first
    /// offending parameter. Mass flow may be zero (stagnant-water case)
    /// but not negative; masses, specific heats, the rated operating
    /// point, geometry and the exponent must be strictly positive; the
    /// node count must be nonzero because per-node quantities divide by
    /// it downstream.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let invalid = |reason: String| Err(SimulationError::InvalidConfiguration(reason));

        if !self.mass_flow.is_finite() || self.mass_flow < 0.0 {
            return invalid(format!(
                "mass flow must be finite and non-negative, got {}",
                self.mass_flow
            ));
        }

        for (name, value) in [
            ("supply temperature", self.supply_temperature),
            ("ambient temperature", self.ambient_temperature),
            ("initial temperature", self.initial_temperature),
        ] {
            if !value.is_finite() {
                return invalid(format!("{} must be finite, got {}", name, value));
            }
        }

        for (name, value) in [
            ("radiator exponent", self.radiator_exponent),
            ("nominal output", self.nominal_output),
            ("nominal LMTD", self.nominal_lmtd),
            ("water mass", self.water_mass),
            ("metal mass", self.metal_mass),
            ("water specific heat", self.water_specific_heat),
            ("metal specific heat", self.metal_specific_heat),
            ("height", self.height),
            ("length", self.length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{} must be positive, got {}", name, value));
            }
        }

        if self.nodes == 0 {
            return invalid("node count must be greater than 0".to_string());
        }

        Ok(())
    }
}

// =================================================================================================
// Panel Radiator Model
// =================================================================================================

/// Discretized panel radiator implementing [`ThermalModel`]
///
/// Construction performs the discretization setup of the run: the total
/// water+metal heat capacity and the rated output are divided evenly
/// across the `n` nodes (uniform mesh), and the transport coefficient
/// `Cw · mF` is folded out of the loop.
///
/// # The recurrence
///
/// For each node `i = 1..=n`, using previous-step values only:
///
/// ```text
/// T'[i] = T[i] + (dt / Crad) · ( Cw·mF·(T[i-1] − T[i])
///                              − Qi·((T[i] − Ta) / LMTDn)^n_r )
/// ```
///
/// where `Crad = (Mw·Cw + Mm·Cm) / n` and `Qi = Qn / n`.
#[derive(Clone, Debug)]
pub struct PanelRadiator {
    config: RadiatorConfig,

    /// Heat capacity per node, Crad [J/K]
    per_node_capacity: f64,

    /// Nominal heat output per node, Qi [W]
    per_node_output: f64,

    /// Convective transport coefficient, Cw · mF [W/K]
    transport: f64,

    /// Uniform grid spacing, dx = length / n [m]
    dx: f64,
}

impl PanelRadiator {
    /// Build the discretized model from a validated configuration
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidConfiguration`] when `config.validate()`
    /// rejects a parameter.
    pub fn new(config: RadiatorConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let n = config.nodes as f64;
        let total_capacity = config.water_mass * config.water_specific_heat
            + config.metal_mass * config.metal_specific_heat;

        Ok(Self {
            per_node_capacity: total_capacity / n,
            per_node_output: config.nominal_output / n,
            transport: config.water_specific_heat * config.mass_flow,
            dx: config.length / n,
            config,
        })
    }

    /// Heat capacity apportioned to each node, Crad [J/K]
    pub fn per_node_capacity(&self) -> f64 {
        self.per_node_capacity
    }

    /// Nominal heat output apportioned to each node, Qi [W]
    pub fn per_node_output(&self) -> f64 {
        self.per_node_output
    }

    /// Uniform grid spacing dx [m]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// The configuration this model was built from
    pub fn config(&self) -> &RadiatorConfig {
        &self.config
    }

    /// Heat loss of one node to the room [W]
    ///
    /// Returns `Err` only under [`SubAmbientPolicy::Abort`]; under the
    /// clamp policy a sub-ambient node simply loses nothing.
    #[inline]
    fn node_loss(&self, node: usize, temperature: f64) -> Result<f64, SimulationError> {
        let delta = temperature - self.config.ambient_temperature;

        if delta < 0.0 {
            return match self.config.sub_ambient_policy {
                SubAmbientPolicy::ClampToAmbient => Ok(0.0),
                SubAmbientPolicy::Abort => Err(SimulationError::SubAmbient {
                    node,
                    step: 0, // stamped by the marcher
                    temperature,
                }),
            };
        }

        let normalized = delta / self.config.nominal_lmtd;
        Ok(self.per_node_output * normalized.powf(self.config.radiator_exponent))
    }
}

impl ThermalModel for PanelRadiator {
    fn nodes(&self) -> usize {
        self.config.nodes
    }

    fn initial_profile(&self) -> DVector<f64> {
        let mut profile =
            DVector::from_element(self.config.nodes + 1, self.config.initial_temperature);
        // Boundary condition wins over the initial condition at the origin
        profile[0] = self.config.supply_temperature;
        profile
    }

    fn advance(&self, prev: &DVector<f64>, dt: f64) -> Result<DVector<f64>, SimulationError> {
        assert_eq!(
            prev.len(),
            self.config.nodes + 1,
            "profile length {} vs {} discretization nodes + boundary",
            prev.len(),
            self.config.nodes
        );

        let mut next = prev.clone(); // node 0 carried over unchanged

        for i in 1..=self.config.nodes {
            let gain = self.transport * (prev[i - 1] - prev[i]);
            let loss = self.node_loss(i, prev[i])?;
            next[i] = prev[i] + dt * (gain - loss) / self.per_node_capacity;
        }

        Ok(next)
    }

    fn stability_limit(&self) -> Option<f64> {
        // Linearize the loss term at the largest attainable temperature
        // difference; the amplification factor of the explicit update is
        // 1 - dt·(Cw·mF + Q'loss)/Crad and must stay within [-1, 1].
        let delta_max = (self
            .config
            .supply_temperature
            .max(self.config.initial_temperature)
            - self.config.ambient_temperature)
            .max(0.0);

        let loss_slope = if delta_max > 0.0 {
            self.per_node_output * self.config.radiator_exponent / self.config.nominal_lmtd
                * (delta_max / self.config.nominal_lmtd)
                    .powf(self.config.radiator_exponent - 1.0)
        } else {
            0.0
        };

        let coefficient = self.transport + loss_slope;
        if coefficient > 0.0 {
            Some(2.0 * self.per_node_capacity / coefficient)
        } else {
            // No flow and no driving difference: nothing moves, any dt is stable
            None
        }
    }

    fn name(&self) -> &str {
        "Panel radiator (exponentiated-LMTD loss)"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Lumped-node hydronic radiator with convective transport between \
             nodes and nonlinear heat loss to the room.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
