//! Longitudinal speed integration and g-force readout.

use revline_core::constants::{
    BRAKE_FORCE_SCALE, DRAG_COEFF, G0, G_SMOOTHING, MASS_KG, ROLL_FORCE, ROLL_SPEED_FLOOR,
};
use revline_core::profile::EngineProfile;

use crate::simulator::SimulationState;
use crate::systems::drivetrain::DriveForces;

/// Integrate speed under the net longitudinal force and update the
/// smoothed g readout. Speed is floored at 0; there is no reverse.
pub fn run(state: &mut SimulationState, profile: &EngineProfile, forces: DriveForces, dt: f64) {
    let net = forces.drive
        - drag_force(state.speed)
        - roll_force(state.speed)
        - forces.engine_brake
        - brake_force(state, profile);
    let acceleration = net / MASS_KG;

    let prev_speed = state.speed;
    state.speed = (state.speed + acceleration * dt).max(0.0);

    if dt > 0.0 {
        let g_instant = (state.speed - prev_speed) / (dt * G0);
        state.g_long += (g_instant - state.g_long) * G_SMOOTHING;
    }
}

/// Engine-off deceleration: drag, rolling resistance, and brakes only.
pub fn run_coasting(state: &mut SimulationState, profile: &EngineProfile, dt: f64) {
    let resist = drag_force(state.speed) + roll_force(state.speed) + brake_force(state, profile);
    state.speed = (state.speed - resist / MASS_KG * dt).max(0.0);
}

fn drag_force(speed: f64) -> f64 {
    DRAG_COEFF * speed * speed
}

fn roll_force(speed: f64) -> f64 {
    if speed > ROLL_SPEED_FLOOR {
        ROLL_FORCE
    } else {
        0.0
    }
}

fn brake_force(state: &SimulationState, profile: &EngineProfile) -> f64 {
    state.brake_input * profile.brake_strength * BRAKE_FORCE_SCALE
}
