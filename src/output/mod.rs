//! Output handling: export and visualization
//!
//! Everything downstream of a finished run lives here. Both halves
//! consume a [`TemperatureField`](crate::physics::TemperatureField) by
//! reference and never mutate it.
//!
//! # Module Organization
//!
//! - **`export`**: writing results to files ([`Exporter`] trait,
//!   [`CsvExporter`])
//! - **`visualization`**: plotting results
//!   ([`plot_thermogram`](visualization::plot_thermogram) and friends)
//!
//! # Example
//!
//! ```rust,ignore
//! use radiator_rs::output::export::{CsvExporter, Exporter};
//! use radiator_rs::output::visualization::plot_thermogram;
//!
//! let field = marcher.solve(&model, &march)?;
//!
//! CsvExporter::new().export_field(&field, "run.csv")?;
//! plot_thermogram(&field, "run.png", None)?;
//! ```

pub mod export;
pub mod visualization;

pub use export::{CsvConfig, CsvError, CsvExporter, Exporter};
