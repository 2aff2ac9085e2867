//! Shift and clutch state machine.
//!
//! Gear changes are requested as a signed step and guarded by the
//! shift-lock timer. Shifting into a different gear without the clutch
//! grinds: the gear holds, rpm drops from binding, and a longer lock
//! is imposed.

use revline_core::constants::{BAD_SHIFT_LOCK_SECS, GRIND_RPM_DROP, GRIND_SECS, SHIFT_LOCK_SECS};
use revline_core::events::TriggerEvent;
use revline_core::profile::EngineProfile;

use crate::simulator::{SimulationState, Timers};

/// Handle a signed shift request. Saturates at 1st and top gear.
pub fn request_shift(
    state: &mut SimulationState,
    timers: &mut Timers,
    profile: &EngineProfile,
    step: i8,
    triggers: &mut Vec<TriggerEvent>,
) {
    if timers.shift_lock > 0.0 {
        return;
    }

    let next_gear = i16::from(state.gear)
        .saturating_add(i16::from(step))
        .clamp(1, profile.gear_count() as i16) as u8;

    if state.is_neutral {
        // Moving the lever in neutral: no engine interaction.
        state.gear = next_gear;
        timers.shift_lock = SHIFT_LOCK_SECS;
        triggers.push(TriggerEvent::ShiftThud);
        return;
    }

    if next_gear == state.gear {
        return;
    }

    if state.clutch_engaged {
        // Bad shift: gear held, box grinds, rpm pulled down by binding.
        timers.grind = GRIND_SECS;
        timers.shift_lock = BAD_SHIFT_LOCK_SECS;
        state.rpm = (state.rpm - GRIND_RPM_DROP).max(profile.idle_rpm);
        state.grinding = true;
        tracing::debug!(gear = state.gear, "shift rejected, grinding");
    } else {
        state.gear = next_gear;
        timers.shift_lock = SHIFT_LOCK_SECS;
        triggers.push(TriggerEvent::ShiftThud);
        tracing::debug!(gear = state.gear, "gear engaged");
    }
}

/// Toggle neutral. Independent of the stored gear; always thuds.
pub fn toggle_neutral(state: &mut SimulationState, triggers: &mut Vec<TriggerEvent>) {
    state.is_neutral = !state.is_neutral;
    triggers.push(TriggerEvent::ShiftThud);
}
