//! Thermogram plotting for finished runs
//!
//! Plots are drawn from a read-only [`TemperatureField`]; the kernel
//! itself knows nothing about presentation. The time axis is rendered in
//! minutes (the field's `dt` converts column indices), temperatures in °C.
//!
//! # Available functions
//!
//! - [`plot_thermogram`]         — every node's history: inlet labelled
//!   `Tinlet`, thermal masses labelled `N=1..n`
//! - [`plot_outlet`]             — the outlet curve alone
//! - [`plot_outlet_comparison`]  — overlay outlet curves of several runs
//!
//! # Usage
//!
//! ```rust,ignore
//! use radiator_rs::output::visualization::{plot_thermogram, plot_outlet};
//!
//! let field = marcher.solve(&model, &march)?;
//! plot_thermogram(&field, "lenhovda.png", None)?;
//! plot_outlet(&field, "outlet.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::TemperatureField;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot every node's temperature history against elapsed minutes
///
/// One curve per row of the field: the inlet boundary (`Tinlet`) plus
/// `N=1` through `N=n`. Output format is chosen by the file extension
/// (`.svg` → vector, anything else → bitmap PNG).
///
/// # Arguments
///
/// * `field`       — finished simulation run
/// * `output_path` — output file path (`.png` or `.svg`)
/// * `config`      — optional plot configuration; `None` uses the
///   thermogram preset
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_thermogram(
    field: &TemperatureField,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::thermogram(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let minutes = field.time_points_minutes();
    let curves: Vec<(String, Vec<f64>)> = (0..=field.nodes())
        .map(|node| {
            let label = if node == 0 {
                "Tinlet".to_string()
            } else {
                format!("N={}", node)
            };
            (label, field.node_history(node))
        })
        .collect();

    let (t_max, y_range) = axis_ranges(&minutes, field);

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &minutes, &curves, config, t_max, y_range, true)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &minutes, &curves, config, t_max, y_range, true)
        }
    }
}

/// Plot the outlet temperature history alone
///
/// # Arguments
///
/// * `field`       — finished simulation run
/// * `output_path` — output file path (`.png` or `.svg`)
/// * `config`      — optional plot configuration; `None` uses the
///   outlet preset
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_outlet(
    field: &TemperatureField,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::outlet(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let minutes = field.time_points_minutes();
    let curves = vec![("Outlet".to_string(), field.outlet_history())];

    let (t_max, y_range) = axis_ranges(&minutes, field);

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &minutes, &curves, config, t_max, y_range, false)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &minutes, &curves, config, t_max, y_range, false)
        }
    }
}

/// Overlay outlet curves of several runs on the same axes
///
/// Useful for comparing flow rates, supply temperatures or mesh
/// resolutions. All runs may have different lengths and time steps; each
/// curve uses its own field's time axis.
///
/// # Arguments
///
/// * `datasets`    — `(label, field)` pairs
/// * `output_path` — output file path (`.png` or `.svg`)
/// * `config`      — optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty or the backend fails.
pub fn plot_outlet_comparison(
    datasets: Vec<(&str, &TemperatureField)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::outlet(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Extract all outlet curves up-front, each with its own time axis
    let all_data: Vec<(String, Vec<f64>, Vec<f64>)> = datasets
        .iter()
        .map(|(label, field)| {
            (
                label.to_string(),
                field.time_points_minutes(),
                field.outlet_history(),
            )
        })
        .collect();

    let t_max = all_data
        .iter()
        .map(|(_, minutes, _)| minutes.last().copied().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    let y_min = datasets
        .iter()
        .map(|(_, field)| field.min_temperature())
        .fold(f64::INFINITY, f64::min);
    let y_max = datasets
        .iter()
        .map(|(_, field)| field.max_temperature())
        .fold(f64::NEG_INFINITY, f64::max);
    let y_range = padded(y_min, y_max);

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &all_data, config, t_max, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &all_data, config, t_max, y_range)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn extension(path: &str) -> &str {
    std::path::Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
}

/// Pad a temperature range so curves do not touch the frame
fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).max(1e-6);
    (min - 0.05 * span, max + 0.05 * span)
}

fn axis_ranges(minutes: &[f64], field: &TemperatureField) -> (f64, (f64, f64)) {
    let t_max = minutes.last().copied().unwrap_or(1.0);
    (
        t_max,
        padded(field.min_temperature(), field.max_temperature()),
    )
}

/// Render labelled temperature curves over a shared minute axis
///
/// `palette` selects per-curve colors from the config palette (used by
/// the thermogram); otherwise every curve uses `config.line_color`.
fn plot_curves_impl<DB: DrawingBackend>(
    backend: DB,
    minutes: &[f64],
    curves: &[(String, Vec<f64>)],
    config: &PlotConfig,
    t_max: f64,
    y_range: (f64, f64),
    palette: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, y_range.0..y_range.1)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    for (index, (label, history)) in curves.iter().enumerate() {
        let color = if palette {
            config.get_node_color(index)
        } else {
            config.line_color
        };

        chart
            .draw_series(LineSeries::new(
                minutes.iter().zip(history.iter()).map(|(t, y)| (*t, *y)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render outlet curves from several runs, each with its own time axis
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    all_data: &[(String, Vec<f64>, Vec<f64>)],
    config: &PlotConfig,
    t_max: f64,
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, y_range.0..y_range.1)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    for (index, (label, minutes, outlet)) in all_data.iter().enumerate() {
        let color = config.get_node_color(index);

        chart
            .draw_series(LineSeries::new(
                minutes.iter().zip(outlet.iter()).map(|(t, y)| (*t, *y)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
