//! Model and sample types for the pendulum simulation.
//!
//! - `PlanetModel`      the rotating body the pendulum stands on
//! - `OscillatorModel`  the pendulum itself
//! - `TrajectorySample` one point of the traced path, using `NVec2`
//!
//! Models are built once by the configuration parser and only read afterwards.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetModel {
    pub name: String, // short identifier, at most 19 characters
    pub mass: f64, // kg
    pub radius: f64, // m
    pub day: f64, // rotation period, s
}

#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorModel {
    pub mass: f64, // kg, not used by the current formulas
    pub length: f64, // m
    pub amplitude: f64, // scale factor applied to the deflection
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64, // simulated seconds since start
    pub position: NVec2, // local frame, origin-centered
}
