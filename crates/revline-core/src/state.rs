//! State snapshot — the read-only view of the simulation handed to
//! the presentation and sound sinks each tick.

use serde::{Deserialize, Serialize};

use crate::profile::SoundCharacter;
use crate::types::SimTime;

/// Complete simulation state after one tick. Sinks receive copies,
/// never mutable references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub time: SimTime,
    /// Engine speed (rpm). Clamped to [idle, max] while the engine runs.
    pub rpm: f64,
    /// Road speed (m/s), never negative.
    pub speed: f64,
    /// Selected gear, 1-based. Always within the profile's gear count.
    pub gear: u8,
    /// Smoothed throttle pedal position, 0..1.
    pub throttle_input: f64,
    /// Smoothed brake pedal position, 0..1.
    pub brake_input: f64,
    /// True iff the clutch pedal is not pressed.
    pub clutch_engaged: bool,
    /// When true the gear ratio contributes zero coupling.
    pub is_neutral: bool,
    /// True while a limiter fuel cut is in progress.
    pub limiter_hit: bool,
    /// True while the gearbox is grinding after a bad shift.
    pub grinding: bool,
    /// Tire slip magnitude, 0..1.
    pub wheel_slip: f64,
    /// Turbo boost (bar). Always 0 on non-turbo profiles.
    pub boost: f64,
    /// Smoothed longitudinal acceleration in g (signed).
    pub g_long: f64,
    pub engine_on: bool,
    pub cranking: bool,
    /// Derived launch-assist flag, recomputed every tick.
    pub launch_control: bool,
}

impl StateSnapshot {
    /// Road speed in km/h, for gauges.
    pub fn speed_kmh(&self) -> f64 {
        self.speed * 3.6
    }
}

/// Continuous per-tick state for the sound sink, matching the audio
/// engine's update signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundFrame {
    pub rpm: f64,
    pub throttle: f64,
    /// Effective throttle while coupled, 0 otherwise (drives exhaust load).
    pub engine_load: f64,
    pub limiter_hit: bool,
    pub cranking: bool,
    pub engine_on: bool,
    pub character: SoundCharacter,
}
