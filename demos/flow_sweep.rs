//! Flow-rate sweep: outlet response under varying pump settings
//!
//! Runs the reference radiator at several mass flow rates and overlays
//! the outlet curves. With the `parallel` feature the sweep fans out over
//! Rayon's thread pool:
//!
//! ```bash
//! cargo run --example flow_sweep --features parallel
//! ```

use std::error::Error;

use radiator_rs::models::{PanelRadiator, RadiatorConfig};
use radiator_rs::output::visualization::{plot_outlet_comparison, PlotConfig};
use radiator_rs::physics::ThermalModel;
use radiator_rs::solver::{solve_batch, ExplicitMarcher, MarchConfiguration};

fn main() -> Result<(), Box<dyn Error>> {
    let flows = [0.002, 0.005, 0.01, 0.02];

    let models: Vec<Box<dyn ThermalModel>> = flows
        .iter()
        .map(|&flow| {
            let config = RadiatorConfig::lenhovda_mp25_500().with_mass_flow(flow);
            PanelRadiator::new(config).map(|m| Box::new(m) as Box<dyn ThermalModel>)
        })
        .collect::<Result<_, _>>()?;

    let march = MarchConfiguration::new(1.0, 4800);
    let results = solve_batch(&ExplicitMarcher::new(), &models, &march);

    let mut fields = Vec::with_capacity(results.len());
    for (flow, result) in flows.iter().zip(results) {
        let field = result?;
        println!(
            "mF = {:.3} kg/s: outlet settles at {:.2} °C",
            flow,
            field.outlet_history().last().unwrap()
        );
        fields.push(field);
    }

    let labels: Vec<String> = flows.iter().map(|f| format!("mF = {} kg/s", f)).collect();
    let datasets: Vec<(&str, _)> = labels
        .iter()
        .map(String::as_str)
        .zip(fields.iter())
        .collect();

    let plot_config = PlotConfig::outlet("Outlet temperature vs. mass flow");
    plot_outlet_comparison(datasets, "flow_sweep.png", Some(&plot_config))?;
    println!("wrote flow_sweep.png");

    Ok(())
}
