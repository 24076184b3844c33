//! Run settings and fixed numerical parameters
//!
//! `SimulationSettings` holds what the configuration may change (the time
//! multiplier). The constants below are fixed by the model.

/// Simulated seconds between two trajectory samples
pub const TIME_STEP: f64 = 0.025;

/// Pacing delay between samples at multiplier 1, in milliseconds
pub const BASE_DELAY_MS: u64 = 25;

/// Deflection scale applied on top of the oscillator amplitude
pub const DEFLECTION_SCALE: f64 = 100.0;

/// Simulated duration of the default run, seconds
pub const DEFAULT_MAX_TIME: f64 = 8000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    pub time_multiplier: u32, // >= 1, divides the pacing delay
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { time_multiplier: 1 }
    }
}

impl SimulationSettings {
    /// Delay to request between samples. Integer division, so multipliers
    /// above 25 run unpaced.
    pub fn pacing_delay_ms(&self) -> u64 {
        BASE_DELAY_MS / u64::from(self.time_multiplier.max(1))
    }
}
