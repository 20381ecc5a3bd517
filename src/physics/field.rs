//! Temperature field: the space-time result of one run
//!
//! A [`TemperatureField`] is written exactly once, by the time marcher,
//! and handed off read-only to downstream plotting or export. It stores
//! the full history rather than only the latest step because the
//! downstream consumers need the whole trajectory.

use std::collections::HashMap;
use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Full space-time temperature history of a simulation run
///
/// # Layout
///
/// A `(n + 1) × (Nt + 1)` matrix of temperatures in °C:
/// - row index = node (0 = inlet boundary, `1..=n` = thermal masses)
/// - column index = time step (0 = initial condition)
///
/// The time-step length `dt` is carried alongside so a caller can convert
/// a column index into elapsed seconds. The field knows nothing about
/// presentation; axis scaling and formatting are the consumer's concern.
///
/// # Invariants (established by the marcher)
///
/// - row 0 equals the supply temperature in every column
/// - column 0 equals the initial profile of the model
/// - no entry is NaN or infinite
///
/// # Example
///
/// ```rust,ignore
/// let field = marcher.solve(&model, &march)?;
///
/// assert_eq!(field.shape(), (6, 4801));         // n = 5, Nt = 4800
/// let outlet = field.outlet_history();          // node n over all steps
/// let t_min = field.time_points_minutes();      // column index → minutes
/// ```
#[derive(Clone, Debug)]
pub struct TemperatureField {
    /// Temperatures indexed by (node, time step)
    data: DMatrix<f64>,

    /// Time-step length in seconds
    dt: f64,

    /// Run metadata (marcher name, step count, ...) for diagnostics
    metadata: HashMap<String, String>,
}

impl TemperatureField {
    /// Wrap a populated `(n+1) × (Nt+1)` matrix with its time-step length
    pub fn new(data: DMatrix<f64>, dt: f64) -> Self {
        Self {
            data,
            dt,
            metadata: HashMap::new(),
        }
    }

    // ========================================= Shape =============================================

    /// Number of thermal-mass nodes `n` (the matrix has `n + 1` rows)
    pub fn nodes(&self) -> usize {
        self.data.nrows() - 1
    }

    /// Number of time steps `Nt` (the matrix has `Nt + 1` columns)
    pub fn steps(&self) -> usize {
        self.data.ncols() - 1
    }

    /// Matrix shape as `(rows, columns)` = `(n + 1, Nt + 1)`
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    /// Time-step length in seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    // ======================================== Accessors ==========================================

    /// Temperature of `node` at time step `step` in °C
    pub fn temperature(&self, node: usize, step: usize) -> f64 {
        self.data[(node, step)]
    }

    /// Full spatial profile at one time step (length `n + 1`)
    pub fn profile_at(&self, step: usize) -> DVector<f64> {
        self.data.column(step).clone_owned()
    }

    /// One node's temperature over all time steps (length `Nt + 1`)
    pub fn node_history(&self, node: usize) -> Vec<f64> {
        self.data.row(node).iter().copied().collect()
    }

    /// Inlet boundary history (node 0) — constant by construction
    pub fn inlet_history(&self) -> Vec<f64> {
        self.node_history(0)
    }

    /// Outlet history (node `n`), the usual quantity of interest
    pub fn outlet_history(&self) -> Vec<f64> {
        self.node_history(self.nodes())
    }

    /// Coldest entry of the whole field
    pub fn min_temperature(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Hottest entry of the whole field
    pub fn max_temperature(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    // ========================================== Time =============================================

    /// Elapsed seconds per column: `[0, dt, 2·dt, ...]`
    ///
    /// Computed directly from the index so no floating-point error
    /// accumulates over long runs (`i * dt`, never `t += dt`).
    pub fn time_points(&self) -> Vec<f64> {
        (0..self.data.ncols()).map(|i| i as f64 * self.dt).collect()
    }

    /// Elapsed minutes per column, the axis the reference plots use
    pub fn time_points_minutes(&self) -> Vec<f64> {
        (0..self.data.ncols())
            .map(|i| i as f64 * self.dt / 60.0)
            .collect()
    }

    // ======================================== Metadata ===========================================

    /// Attach a metadata entry (marcher name, dt, ...)
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Look up a metadata entry
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

impl fmt::Display for TemperatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TemperatureField [{} nodes × {} steps, dt = {} s]",
            self.nodes(),
            self.steps(),
            self.dt
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
