//! Ignition and starter-motor state machine.
//!
//! Off -> Cranking -> Running. Running -> Off is handled at command
//! time (the kill switch is instant). Cranking while already running
//! is a no-op.

use revline_core::constants::{BOOST_BLEED_OFF, SPINDOWN_RATE, START_CATCH_RPM, STARTER_RATE};
use revline_core::profile::EngineProfile;
use revline_core::types::DriverIntents;

use crate::simulator::SimulationState;

pub fn run(state: &mut SimulationState, intents: &DriverIntents, profile: &EngineProfile, dt: f64) {
    state.cranking = intents.ignition;

    if state.cranking && !state.engine_on {
        state.rpm += STARTER_RATE * dt;
        if state.rpm > START_CATCH_RPM {
            state.engine_on = true;
            state.rpm = profile.idle_rpm;
            tracing::info!(profile = %profile.id, "engine started");
        }
    }

    if !state.engine_on && !state.cranking {
        // Spin-down and turbo bleed.
        state.rpm = (state.rpm - SPINDOWN_RATE * dt).max(0.0);
        state.boost = (state.boost - BOOST_BLEED_OFF * dt).max(0.0);
    }
}
