//! Build a ready-to-run scenario from configuration
//!
//! Takes a parsed `Config` and produces the runtime bundle containing:
//! - the planet and oscillator models
//! - run settings (`SimulationSettings`)
//! - the checked `DerivedConstants`
//!
//! Both the Bevy viewer and the headless plot start from a `Scenario`.

use crate::configuration::config::Config;
use crate::simulation::params::SimulationSettings;
use crate::simulation::physics::{DerivedConstants, SimulationFault};
use crate::simulation::states::{OscillatorModel, PlanetModel};
use crate::simulation::trajectory::Trajectory;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub planet: PlanetModel,
    pub oscillator: OscillatorModel,
    pub settings: SimulationSettings,
    pub constants: DerivedConstants,
}

impl Scenario {
    /// Derive the constants; a non-finite one stops the run here
    pub fn build_scenario(cfg: Config) -> Result<Self, SimulationFault> {
        let constants = DerivedConstants::derive(&cfg.planet, &cfg.oscillator)?;
        log::debug!(
            "scenario {}: g = {}, omega = {}, cycle = {}",
            cfg.planet.name,
            constants.gravity,
            constants.angular_velocity,
            constants.cycle_frequency
        );

        Ok(Self {
            planet: cfg.planet,
            oscillator: cfg.oscillator,
            settings: cfg.settings,
            constants,
        })
    }

    /// Fresh sample stream covering `[0, max_time)`
    pub fn trajectory(&self, max_time: f64) -> Result<Trajectory, SimulationFault> {
        Trajectory::new(self.oscillator.clone(), self.constants, max_time)
    }

    /// The two report lines printed before plotting
    pub fn report(&self) -> [String; 2] {
        let p = &self.planet;
        [
            format!("{}: mass {:e}, radius {:e}, day {:e}", p.name, p.mass, p.radius, p.day),
            format!(
                "gravity on {} is {}, angular velocity is {}",
                p.name, self.constants.gravity, self.constants.angular_velocity
            ),
        ]
    }
}
