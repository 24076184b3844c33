use foucault::{Config, FileSource, Scenario, Extent, DEFAULT_MAX_TIME, check_duration};
use foucault::{draw_plot, run_2d, SleepPacer, Unpaced};
use foucault::{bench_trajectory, bench_trajectory_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    /// Directive file describing the planet and the pendulum
    #[arg(short, default_value = "config.cfg")]
    file_name: PathBuf,

    /// Simulated seconds to plot (finite, > 0)
    #[arg(long, default_value_t = DEFAULT_MAX_TIME, value_parser = parse_max_time)]
    max_time: f64,

    /// Plot without opening a window and log a summary instead
    #[arg(long)]
    headless: bool,

    /// Honour the pacing delay in headless mode
    #[arg(long, requires = "headless")]
    realtime: bool,

    /// Run the trajectory benchmarks and exit
    #[arg(long)]
    bench: bool,

    /// Print the per-sample cost curve as CSV and exit
    #[arg(long)]
    bench_curve: bool,
}

fn parse_max_time(arg: &str) -> Result<f64, String> {
    let value: f64 = arg.parse().map_err(|e| format!("`{arg}` is not a number: {e}"))?;
    check_duration(value).map_err(|e| e.to_string())
}

// load here to keep main clean
fn load_scenario(path: &Path) -> foucault::Result<Scenario> {
    let cfg = Config::load(&FileSource::new(path))?;
    Ok(Scenario::build_scenario(cfg)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        return Ok(bench_trajectory()?);
    }
    if args.bench_curve {
        return Ok(bench_trajectory_curve()?);
    }

    let scenario = load_scenario(&args.file_name)
        .with_context(|| format!("failed to load scenario from {}", args.file_name.display()))?;

    for line in scenario.report() {
        println!("{line}");
    }

    if args.headless {
        let mut extent = Extent::default();
        let drawn = if args.realtime {
            draw_plot(&scenario, args.max_time, &mut extent, &mut SleepPacer)?
        } else {
            draw_plot(&scenario, args.max_time, &mut extent, &mut Unpaced)?
        };
        log::info!(
            "headless plot: {} segments, bounds {:?} to {:?}, {} endpoints off canvas",
            drawn,
            extent.min.map(|p| (p.x, p.y)),
            extent.max.map(|p| (p.x, p.y)),
            extent.clipped
        );
    } else {
        run_2d(scenario, args.max_time)?;
    }

    Ok(())
}
