//! Closed-form physics for a pendulum on a rotating planet
//!
//! Pure functions over the models plus `DerivedConstants`, the checked
//! bundle the trajectory generator runs on.

use std::f64::consts::PI;
use std::fmt;

use crate::simulation::states::{OscillatorModel, PlanetModel};

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67408e-11;

/// Surface gravity `G * m / r^2`, m/s^2
pub fn surface_gravity(planet: &PlanetModel) -> f64 {
    G * planet.mass / (planet.radius * planet.radius)
}

/// Rotation rate `2 pi / day`, rad/s
pub fn angular_velocity(planet: &PlanetModel) -> f64 {
    2.0 * PI / planet.day
}

/// Pendulum cycle frequency `sqrt(g / l)`, rad/s
pub fn cycle_frequency(planet: &PlanetModel, oscillator: &OscillatorModel) -> f64 {
    (surface_gravity(planet) / oscillator.length).sqrt()
}

/// Which derived constant went bad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Gravity,
    AngularVelocity,
    CycleFrequency,
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Constant::Gravity => "surface gravity",
            Constant::AngularVelocity => "angular velocity",
            Constant::CycleFrequency => "cycle frequency",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationFault {
    #[error("{constant} is not finite ({value}); check radius, day and oscillator length")]
    NonFinite { constant: Constant, value: f64 },
    #[error("simulated duration must be finite and positive, got {max_time}")]
    InvalidDuration { max_time: f64 },
}

/// Scalars derived once from the models
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    pub gravity: f64, // m/s^2
    pub angular_velocity: f64, // rad/s
    pub cycle_frequency: f64, // rad/s
}

impl DerivedConstants {
    /// Derive all constants, refusing anything NaN or infinite
    pub fn derive(planet: &PlanetModel, oscillator: &OscillatorModel) -> Result<Self, SimulationFault> {
        let gravity = finite(Constant::Gravity, surface_gravity(planet))?;
        let angular_velocity = finite(Constant::AngularVelocity, angular_velocity(planet))?;
        let cycle_frequency = finite(Constant::CycleFrequency, cycle_frequency(planet, oscillator))?;

        Ok(Self {
            gravity,
            angular_velocity,
            cycle_frequency,
        })
    }
}

fn finite(constant: Constant, value: f64) -> Result<f64, SimulationFault> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationFault::NonFinite { constant, value })
    }
}
