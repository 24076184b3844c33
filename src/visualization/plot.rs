//! Simulation-to-canvas bridge
//!
//! Draws the coordinate axes and streams trajectory samples into any
//! `DrawingSurface`, one segment per consecutive pair of samples. Canvas
//! coordinates are 600x600 with y pointing down; the local simulation frame
//! is shifted by `PLOT_ORIGIN` before drawing.

use std::thread;
use std::time::Duration;

use crate::simulation::physics::SimulationFault;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, TrajectorySample};
use crate::simulation::trajectory::Trajectory;

/// Canvas width and height in pixels
pub const CANVAS_SIZE: f64 = 600.0;

/// Where the local frame's origin lands on the canvas
pub const PLOT_ORIGIN: [f64; 2] = [300.0, 300.0];

/// Axis rays, arrowheads and zero ticks as `[x1, y1, x2, y2]`
pub const AXIS_LINES: [[f64; 4]; 8] = [
    [30.0, 570.0, 30.0, 30.0],
    [30.0, 30.0, 25.0, 40.0],
    [30.0, 30.0, 35.0, 40.0],
    [30.0, 570.0, 570.0, 570.0],
    [570.0, 570.0, 560.0, 565.0],
    [570.0, 570.0, 560.0, 575.0],
    [300.0, 573.0, 300.0, 567.0],
    [27.0, 300.0, 33.0, 300.0],
];

pub const AXIS_LABELS: [(f64, f64, &str); 4] = [
    (297.0, 580.0, "0"),
    (5.0, 295.0, "0"),
    (560.0, 580.0, "x, m"),
    (5.0, 5.0, "y, m"),
];

/// Something that can draw lines and text in canvas coordinates
pub trait DrawingSurface {
    fn line(&mut self, from: NVec2, to: NVec2);
    fn text(&mut self, at: NVec2, label: &str);
}

/// Receives the delay requested between two samples
pub trait Pacer {
    fn pause(&mut self, millis: u64);
}

/// Runs as fast as possible
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn pause(&mut self, _millis: u64) {}
}

/// Blocks the current thread for each requested delay
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, millis: u64) {
        if millis > 0 {
            thread::sleep(Duration::from_millis(millis));
        }
    }
}

/// Local frame -> canvas
pub fn to_canvas(local: &NVec2) -> NVec2 {
    local + NVec2::from(PLOT_ORIGIN)
}

pub fn draw_axes<S: DrawingSurface + ?Sized>(surface: &mut S) {
    for [x1, y1, x2, y2] in AXIS_LINES {
        surface.line(NVec2::new(x1, y1), NVec2::new(x2, y2));
    }
    for (x, y, label) in AXIS_LABELS {
        surface.text(NVec2::new(x, y), label);
    }
}

/// Trajectory consumer that remembers only the previous position
///
/// The previous position starts at the local origin, so the first segment
/// drawn is the degenerate one from the plot origin to itself.
#[derive(Debug, Clone)]
pub struct PlotStream {
    trajectory: Trajectory,
    prev: NVec2,
    drawn: u64,
}

impl PlotStream {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            trajectory,
            prev: NVec2::zeros(),
            drawn: 0,
        }
    }

    /// Pull one sample and draw the segment leading to it.
    /// `None` once the trajectory is exhausted.
    pub fn step<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> Option<TrajectorySample> {
        let sample = self.trajectory.next()?;
        surface.line(to_canvas(&self.prev), to_canvas(&sample.position));
        self.prev = sample.position;
        self.drawn += 1;
        Some(sample)
    }

    /// Segments drawn so far
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

/// Draw axes, then the whole trajectory up to `max_time`, pausing between
/// samples. Returns the number of trajectory segments drawn. An unusable
/// `max_time` fails before anything is drawn.
pub fn draw_plot<S, P>(
    scenario: &Scenario,
    max_time: f64,
    surface: &mut S,
    pacer: &mut P,
) -> Result<u64, SimulationFault>
where
    S: DrawingSurface + ?Sized,
    P: Pacer + ?Sized,
{
    let trajectory = scenario.trajectory(max_time)?;
    let delay = scenario.settings.pacing_delay_ms();
    log::info!(
        "plotting {} for {} s of simulated time ({} ms between samples)",
        scenario.planet.name,
        max_time,
        delay
    );

    draw_axes(surface);

    let mut stream = PlotStream::new(trajectory);
    while stream.step(surface).is_some() {
        pacer.pause(delay);
    }

    log::info!("plot finished: {} segments", stream.drawn());
    Ok(stream.drawn())
}
