//! Drivetrain coupling, tire slip, and engine rpm dynamics.
//!
//! Runs only while the engine is on. Produces the longitudinal drive
//! and engine-braking forces for this tick and updates rpm according
//! to the clutch/gear coupling branch.

use std::f64::consts::PI;

use revline_core::constants::{
    BOOST_TORQUE_PER_BAR, CLUTCH_MATCH_RATE, ENGINE_BRAKE_FORCE_SCALE, FLYWHEEL_FEEDBACK,
    LIMITER_BLEED_RATE, MASS_KG, RPM_RESPONSE, SLIP_DECAY, SLIP_RAMP, TIRE_GRIP_MAX_ACCEL,
    WHEELSPIN_SPEED_CEILING,
};
use revline_core::profile::EngineProfile;

use crate::simulator::{SimulationState, Timers};

/// Longitudinal forces produced by the drivetrain this tick (N).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriveForces {
    pub drive: f64,
    pub engine_brake: f64,
}

/// Run the drivetrain coupling for one tick.
pub fn run(
    state: &mut SimulationState,
    profile: &EngineProfile,
    effective_throttle: f64,
    dt: f64,
) -> DriveForces {
    let ratio = if state.is_neutral {
        0.0
    } else {
        profile.gear_ratios[usize::from(state.gear) - 1] * profile.final_drive
    };

    let wheel_circ = 2.0 * PI * profile.wheel_radius_m;
    let wheel_rpm = state.speed / wheel_circ * 60.0;
    let matched_rpm = (wheel_rpm * ratio).max(profile.idle_rpm);
    let rpm_norm = profile.rpm_norm(state.rpm);

    let coupled = state.clutch_engaged && !state.is_neutral;
    if !coupled {
        // Decoupled: free-rev toward idle plus throttle, no drive force.
        state.wheel_slip = 0.0;
        let free_target =
            profile.idle_rpm + effective_throttle * (profile.max_rpm - profile.idle_rpm);
        state.rpm += (free_target - state.rpm) * (1.0 - (-RPM_RESPONSE * dt).exp());
        return DriveForces::default();
    }

    // Parabolic torque curve peaking mid-range, soft fade past redline.
    let torque_curve = 1.0 - (rpm_norm - 0.5).powi(2);
    let over_redline =
        ((state.rpm - profile.redline_rpm) / (profile.max_rpm - profile.redline_rpm)).max(0.0);
    let fade = 1.0 - over_redline.powi(2);

    let mut engine_torque = profile.torque * effective_throttle * torque_curve;
    if profile.turbo {
        engine_torque += state.boost * BOOST_TORQUE_PER_BAR;
    }

    let wheel_torque = engine_torque * ratio * fade;
    let requested_force = wheel_torque / profile.wheel_radius_m;
    let max_grip_force = MASS_KG * TIRE_GRIP_MAX_ACCEL;

    let drive;
    if requested_force > max_grip_force && state.speed < WHEELSPIN_SPEED_CEILING {
        // Wheelspin: force capped at the grip limit, excess torque spins
        // the engine up past the slipping wheels.
        drive = max_grip_force;
        state.wheel_slip = (state.wheel_slip + SLIP_RAMP * dt).min(1.0);
        let excess_torque = wheel_torque - max_grip_force * profile.wheel_radius_m;
        state.rpm += excess_torque * FLYWHEEL_FEEDBACK * dt;
    } else {
        // Grip holds: full force delivered, rpm pulled to the wheel speed.
        drive = requested_force;
        state.wheel_slip = (state.wheel_slip - SLIP_DECAY * dt).max(0.0);
        state.rpm += (matched_rpm - state.rpm) * (1.0 - (-CLUTCH_MATCH_RATE * dt).exp());
    }

    let off_throttle = (1.0 - effective_throttle * 3.0).max(0.0);
    let eb_amount = off_throttle * (0.2 + 0.8 * rpm_norm);
    let engine_brake = profile.engine_braking_strength * eb_amount * ENGINE_BRAKE_FORCE_SCALE;

    DriveForces {
        drive,
        engine_brake,
    }
}

/// Clamp rpm to its running range, then bleed it down while the
/// limiter is cutting.
pub fn clamp_rpm(state: &mut SimulationState, timers: &Timers, profile: &EngineProfile, dt: f64) {
    state.rpm = state.rpm.clamp(profile.idle_rpm, profile.max_rpm);
    if timers.limiter > 0.0 {
        state.rpm = (state.rpm - LIMITER_BLEED_RATE * dt).max(profile.idle_rpm);
    }
}
