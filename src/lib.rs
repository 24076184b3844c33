pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use error::{Error, Result};

pub use simulation::states::{PlanetModel, OscillatorModel, TrajectorySample, NVec2};
pub use simulation::params::{SimulationSettings, TIME_STEP, DEFAULT_MAX_TIME};
pub use simulation::physics::{surface_gravity, angular_velocity, cycle_frequency, DerivedConstants, SimulationFault, G};
pub use simulation::trajectory::{check_duration, position_at, Trajectory};
pub use simulation::scenario::Scenario;

pub use configuration::config::{parse_config, Config, ConfigError, MAX_TOKEN_LEN};
pub use configuration::directives::Field;
pub use configuration::source::{ByteSource, FileSource, SourceUnavailable};

pub use visualization::plot::{draw_axes, draw_plot, DrawingSurface, Pacer, PlotStream, SleepPacer, Unpaced};
pub use visualization::extent::Extent;
pub use visualization::foucault_vis2d::run_2d;

pub use benchmark::benchmark::{bench_trajectory, bench_trajectory_curve};
