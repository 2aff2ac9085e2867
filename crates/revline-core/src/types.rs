//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking. Unlike a fixed-step clock, each tick
/// advances by the (clamped) wall-clock delta the host measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Raw held-boolean driver intents, resolved once per tick.
///
/// These are the pre-smoothing pedal states; the simulator turns
/// throttle/brake into smoothed [0,1] values and clutch into the
/// instantaneous `clutch_engaged` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverIntents {
    pub throttle: bool,
    pub brake: bool,
    pub clutch: bool,
    /// Held while the starter motor is engaged.
    pub ignition: bool,
}
