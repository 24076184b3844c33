use std::time::Instant;

use crate::configuration::config::Config;
use crate::simulation::scenario::Scenario;
use crate::visualization::extent::Extent;
use crate::visualization::plot::{draw_plot, Unpaced};

const BENCH_CONFIG: &str = "/n Earth /m 5.972e24 /r 6.371e6 /t 86400 /ol 1 /oa 1 /mp 1";

fn bench_scenario() -> crate::Result<Scenario> {
    let cfg: Config = BENCH_CONFIG.parse()?;
    Ok(Scenario::build_scenario(cfg)?)
}

/// Time sample generation alone and the full unpaced plot pipeline
pub fn bench_trajectory() -> crate::Result<()> {
    let scenario = bench_scenario()?;

    // Simulated durations to test
    let durations = [100.0, 1000.0, 8000.0, 80000.0, 800000.0];

    // Warm up
    let _ = scenario.trajectory(100.0)?.count();

    for max_time in durations {
        let t0 = Instant::now();
        let samples = scenario.trajectory(max_time)?.count();
        let dt_gen = t0.elapsed().as_secs_f64();

        let mut extent = Extent::default();
        let t1 = Instant::now();
        draw_plot(&scenario, max_time, &mut extent, &mut Unpaced)?;
        let dt_plot = t1.elapsed().as_secs_f64();

        println!(
            "T = {:8}, samples = {:9}, generate = {:8.6} s, plot = {:8.6} s",
            max_time, samples, dt_gen, dt_plot
        );
    }

    Ok(())
}

/// Generation time per sample for growing durations
/// Paste output directly into a spreadsheet to graph
pub fn bench_trajectory_curve() -> crate::Result<()> {
    let scenario = bench_scenario()?;

    println!("max_time,samples,ns_per_sample");

    for max_time in (1000..=40000).step_by(1000) {
        let t0 = Instant::now();
        let samples = scenario.trajectory(max_time as f64)?.count();
        let ns = t0.elapsed().as_secs_f64() * 1e9 / samples.max(1) as f64;

        println!("{},{},{:.3}", max_time, samples, ns);
    }

    Ok(())
}
