//! Fixed-step trajectory generator
//!
//! Streams `TrajectorySample`s for a pendulum swinging on a rotating
//! planet. Time advances in `TIME_STEP` increments from 0 while it stays
//! below `max_time`; nothing but the step counter is kept between samples.

use std::iter::FusedIterator;

use super::params::{DEFLECTION_SCALE, TIME_STEP};
use super::physics::{DerivedConstants, SimulationFault};
use super::states::{NVec2, OscillatorModel, TrajectorySample};

/// Position of the pendulum bob at time `t` in the local frame
///
/// The deflection oscillates at the cycle frequency while the frame turns
/// at the planet's angular velocity. Note that `x` and `y` share the same
/// scalar deflection, so this is a rotation followed by a reflection rather
/// than a plain rotation matrix.
pub fn position_at(oscillator: &OscillatorModel, constants: &DerivedConstants, t: f64) -> NVec2 {
    let deflection = oscillator.amplitude * DEFLECTION_SCALE * (constants.cycle_frequency * t).sin();
    let turn = constants.angular_velocity * t;

    let x = turn.cos() * deflection - turn.sin() * deflection;
    let y = turn.sin() * deflection + turn.cos() * deflection;
    NVec2::new(x, y)
}

/// Accept only durations that end the stream after a finite, non-zero
/// number of samples
pub fn check_duration(max_time: f64) -> Result<f64, SimulationFault> {
    if max_time.is_finite() && max_time > 0.0 {
        Ok(max_time)
    } else {
        Err(SimulationFault::InvalidDuration { max_time })
    }
}

/// Lazy, finite sample stream; consumed once
#[derive(Debug, Clone)]
pub struct Trajectory {
    oscillator: OscillatorModel,
    constants: DerivedConstants,
    max_time: f64,
    step: u64,
    done: bool,
}

impl Trajectory {
    pub fn new(
        oscillator: OscillatorModel,
        constants: DerivedConstants,
        max_time: f64,
    ) -> Result<Self, SimulationFault> {
        let max_time = check_duration(max_time)?;
        Ok(Self {
            oscillator,
            constants,
            max_time,
            step: 0,
            done: false,
        })
    }

    /// Simulated time of the next sample
    pub fn next_time(&self) -> f64 {
        // multiply instead of accumulating so long runs don't drift
        self.step as f64 * TIME_STEP
    }
}

impl Iterator for Trajectory {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<TrajectorySample> {
        if self.done {
            return None;
        }

        let time = self.next_time();
        if time >= self.max_time {
            self.done = true;
            return None;
        }

        self.step += 1;
        Some(TrajectorySample {
            time,
            position: position_at(&self.oscillator, &self.constants, time),
        })
    }
}

impl FusedIterator for Trajectory {}
