//! Visualization of simulation results
//!
//! Plotting is built on the `plotters` crate and reads only the finished
//! [`TemperatureField`](crate::physics::TemperatureField); nothing here
//! feeds back into the kernel.
//!
//! # Module Organization
//!
//! - **`config`**: [`PlotConfig`] with presets for thermogram and outlet
//!   plots, plus the shared color palette
//! - **`thermogram`**: the plot functions themselves

mod config;
mod thermogram;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use thermogram::{plot_outlet, plot_outlet_comparison, plot_thermogram};
