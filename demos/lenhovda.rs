//! Reference run: Lenhovda MP 25 500 step response
//!
//! Marches the reference radiator from a cold start for 80 minutes,
//! plots the full thermogram and exports the field to CSV.
//!
//! ```bash
//! cargo run --example lenhovda
//! ```

use std::error::Error;

use radiator_rs::models::{PanelRadiator, RadiatorConfig};
use radiator_rs::output::export::{CsvExporter, Exporter};
use radiator_rs::output::visualization::{plot_thermogram, PlotConfig};
use radiator_rs::solver::{ExplicitMarcher, MarchConfiguration, TimeMarcher};

fn main() -> Result<(), Box<dyn Error>> {
    // 55 °C supply into a 20 °C room, radiator initially at 20.5 °C
    let config = RadiatorConfig::lenhovda_mp25_500();
    let model = PanelRadiator::new(config)?;

    println!("Lenhovda MP 25 500, {} nodes", config.nodes);
    if let Some(limit) = radiator_rs::physics::ThermalModel::stability_limit(&model) {
        println!("explicit stability limit: {:.1} s", limit);
    }

    // 80 minutes at 1 s resolution
    let march = MarchConfiguration::new(1.0, 4800);
    let field = ExplicitMarcher::new().solve(&model, &march)?;

    let outlet = field.outlet_history();
    println!(
        "outlet: {:.2} °C -> {:.2} °C over {:.0} min",
        outlet.first().unwrap(),
        outlet.last().unwrap(),
        march.total_time() / 60.0
    );

    let plot_config = PlotConfig::thermogram("Lenhovda MP 25 500 step response");
    plot_thermogram(&field, "lenhovda_step_response.png", Some(&plot_config))?;
    println!("wrote lenhovda_step_response.png");

    // Thin to ~500 rows; enough for any downstream fit
    CsvExporter::new().export_field(&field, "lenhovda_step_response.csv", Some(500))?;
    println!("wrote lenhovda_step_response.csv");

    Ok(())
}
