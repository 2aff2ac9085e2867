//! Turbo boost, launch control, and the hard rev limiter.

use revline_core::constants::{
    BOOST_BLEED_RATE, BOOST_EXP, BOOST_SHAPE, BOOST_SPOOL_RATE, LAUNCH_BOOST_TARGET,
    LAUNCH_LIMIT_RPM, LAUNCH_SPEED_MAX, LAUNCH_THROTTLE_MIN, LIMITER_CUT_SECS,
    LIMITER_THROTTLE_FLOOR,
};
use revline_core::events::TriggerEvent;
use revline_core::profile::EngineProfile;

use crate::simulator::{SimulationState, Timers};

/// Launch control is a derived flag, recomputed every tick: 1st gear,
/// clutch pedal in, near-full throttle, near-standstill.
pub fn launch_control_active(state: &SimulationState) -> bool {
    state.gear == 1
        && !state.clutch_engaged
        && state.throttle_input > LAUNCH_THROTTLE_MIN
        && state.speed < LAUNCH_SPEED_MAX
}

/// Move boost toward its target. Spool-up is slower than bleed-off.
pub fn run(state: &mut SimulationState, profile: &EngineProfile, dt: f64) {
    let rpm_norm = profile.rpm_norm(state.rpm);
    let mut target = if profile.turbo {
        BOOST_SHAPE * state.throttle_input * rpm_norm.powf(BOOST_EXP)
    } else {
        0.0
    };
    if state.launch_control {
        target = LAUNCH_BOOST_TARGET;
    }

    let rate = if state.boost < target {
        BOOST_SPOOL_RATE
    } else {
        BOOST_BLEED_RATE
    };
    state.boost += (target - state.boost) * rate * dt;
}

/// Hard rev limiter. Opens a fixed-length fuel-cut window at the active
/// ceiling; retriggerable once the window expires. Returns the throttle
/// the torque path may use this tick.
pub fn run_limiter(
    state: &mut SimulationState,
    timers: &mut Timers,
    profile: &EngineProfile,
    triggers: &mut Vec<TriggerEvent>,
) -> f64 {
    let ceiling = if state.launch_control {
        LAUNCH_LIMIT_RPM
    } else {
        profile.redline_rpm
    };

    if timers.limiter <= 0.0
        && state.rpm >= ceiling
        && state.throttle_input > LIMITER_THROTTLE_FLOOR
    {
        timers.limiter = LIMITER_CUT_SECS;
        if state.launch_control {
            // Launch-control cuts pop the exhaust.
            triggers.push(TriggerEvent::Backfire);
        }
        tracing::debug!(rpm = state.rpm, ceiling, "limiter cut");
    }

    state.limiter_hit = timers.limiter > 0.0;
    if state.limiter_hit {
        0.0
    } else {
        state.throttle_input
    }
}
