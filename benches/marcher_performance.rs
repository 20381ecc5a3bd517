//! Performance benchmarks for the explicit marcher
//!
//! The marcher's cost is dominated by the per-step `advance` call and the
//! column write into the field, so total time should scale linearly in
//! both the node count and the step count.
//!
//! # What We're Measuring
//!
//! 1. **Step-count scaling**: the reference 5-node radiator marched for
//!    increasing durations — time ∝ steps
//! 2. **Node-count scaling**: a fixed duration at increasing mesh
//!    resolutions — time ∝ nodes (the profile clone and the loop both
//!    scale with n)
//! 3. **Batch throughput**: a flow sweep through `solve_batch`, the
//!    workload the `parallel` feature targets
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all marcher benchmarks
//! cargo bench --bench marcher_performance
//!
//! # Only the step-count scaling group
//! cargo bench --bench marcher_performance steps
//!
//! # Batch throughput with Rayon
//! cargo bench --bench marcher_performance --features parallel sweep
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use radiator_rs::models::{PanelRadiator, RadiatorConfig};
use radiator_rs::physics::ThermalModel;
use radiator_rs::solver::{solve_batch, ExplicitMarcher, MarchConfiguration, TimeMarcher};

// =================================================================================================
// Benchmark Fixtures
// =================================================================================================

fn reference_model() -> PanelRadiator {
    PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500()).unwrap()
}

/// Reference radiator on an `n`-node mesh, with dt scaled to stay inside
/// the stability bound at every resolution
fn refined_model(nodes: usize) -> PanelRadiator {
    PanelRadiator::new(RadiatorConfig::lenhovda_mp25_500().with_nodes(nodes)).unwrap()
}

// =================================================================================================
// Step-Count Scaling
// =================================================================================================

fn bench_step_scaling(c: &mut Criterion) {
    let model = reference_model();
    let marcher = ExplicitMarcher::new();

    let mut group = c.benchmark_group("marcher_steps");
    for steps in [600, 2400, 4800, 9600] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let march = MarchConfiguration::new(1.0, steps);
            b.iter(|| black_box(marcher.solve(&model, &march).unwrap()));
        });
    }
    group.finish();
}

// =================================================================================================
// Node-Count Scaling
// =================================================================================================

fn bench_node_scaling(c: &mut Criterion) {
    let marcher = ExplicitMarcher::new();

    let mut group = c.benchmark_group("marcher_nodes");
    for nodes in [5, 20, 80, 320] {
        let model = refined_model(nodes);

        // Stay safely inside the bound, which shrinks roughly like 1/n
        let dt = model.stability_limit().map_or(1.0, |limit| limit / 4.0);
        let march = MarchConfiguration::new(dt, 1000);

        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, _| {
            b.iter(|| black_box(marcher.solve(&model, &march).unwrap()));
        });
    }
    group.finish();
}

// =================================================================================================
// Batch Throughput
// =================================================================================================

fn bench_flow_sweep(c: &mut Criterion) {
    let marcher = ExplicitMarcher::new();

    let models: Vec<Box<dyn ThermalModel>> = (1..=16)
        .map(|k| {
            let config = RadiatorConfig::lenhovda_mp25_500().with_mass_flow(0.002 * k as f64);
            Box::new(PanelRadiator::new(config).unwrap()) as Box<dyn ThermalModel>
        })
        .collect();
    let march = MarchConfiguration::new(1.0, 1200);

    c.bench_function("marcher_sweep/16_flows", |b| {
        b.iter(|| black_box(solve_batch(&marcher, &models, &march)));
    });
}

criterion_group!(
    benches,
    bench_step_scaling,
    bench_node_scaling,
    bench_flow_sweep
);
criterion_main!(benches);
