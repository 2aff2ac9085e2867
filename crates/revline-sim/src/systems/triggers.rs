//! Edge-triggered audio cues from throttle lift.
//!
//! Compares this tick's smoothed throttle against the previous tick's
//! memory. Backfire and flutter are independent and may both fire.

use revline_core::constants::{
    BACKFIRE_LIFT_FROM, BACKFIRE_LIFT_TO, BACKFIRE_RPM_FRACTION, FLUTTER_BOOST_MIN,
    FLUTTER_LIFT_FROM, FLUTTER_LIFT_TO,
};
use revline_core::events::TriggerEvent;
use revline_core::profile::EngineProfile;

use crate::simulator::SimulationState;

pub fn run(
    state: &SimulationState,
    profile: &EngineProfile,
    last_throttle: &mut f64,
    triggers: &mut Vec<TriggerEvent>,
) {
    let now = state.throttle_input;

    if *last_throttle > BACKFIRE_LIFT_FROM
        && now < BACKFIRE_LIFT_TO
        && state.rpm > profile.redline_rpm * BACKFIRE_RPM_FRACTION
    {
        triggers.push(TriggerEvent::Backfire);
    }

    if *last_throttle > FLUTTER_LIFT_FROM && now < FLUTTER_LIFT_TO && state.boost > FLUTTER_BOOST_MIN
    {
        triggers.push(TriggerEvent::TurboFlutter);
    }

    *last_throttle = now;
}
