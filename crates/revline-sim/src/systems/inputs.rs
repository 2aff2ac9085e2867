//! Input smoothing and timer countdowns.

use revline_core::constants::{BRAKE_FALL, BRAKE_RAMP, THROTTLE_FALL, THROTTLE_RAMP};
use revline_core::types::DriverIntents;

use crate::simulator::{SimulationState, Timers};

/// Count down all timers and refresh the flags derived from them.
pub fn run_timers(state: &mut SimulationState, timers: &mut Timers, dt: f64) {
    timers.shift_lock = (timers.shift_lock - dt).max(0.0);
    timers.grind = (timers.grind - dt).max(0.0);
    timers.limiter = (timers.limiter - dt).max(0.0);
    state.grinding = timers.grind > 0.0;
    state.limiter_hit = timers.limiter > 0.0;
}

/// Ramp the smoothed pedal positions toward the held intents.
///
/// Throttle and brake use asymmetric linear ramps; the clutch is a
/// mechanical linkage and switches instantly.
pub fn run_smoothing(state: &mut SimulationState, intents: &DriverIntents, dt: f64) {
    if intents.throttle {
        state.throttle_input = (state.throttle_input + THROTTLE_RAMP * dt).min(1.0);
    } else {
        state.throttle_input = (state.throttle_input - THROTTLE_FALL * dt).max(0.0);
    }

    if intents.brake {
        state.brake_input = (state.brake_input + BRAKE_RAMP * dt).min(1.0);
    } else {
        state.brake_input = (state.brake_input - BRAKE_FALL * dt).max(0.0);
    }

    state.clutch_engaged = !intents.clutch;
}
