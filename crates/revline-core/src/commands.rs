//! Driver commands sent from the input layer to the simulation.
//!
//! Commands are queued and resolved at the next tick boundary, so each
//! tick sees exactly one value per intent.

use serde::{Deserialize, Serialize};

use crate::profile::EngineProfile;

/// All possible driver actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverCommand {
    // --- Held pedal intents ---
    Throttle { held: bool },
    Brake { held: bool },
    /// Clutch pedal. Held = pedal pressed = drivetrain decoupled.
    Clutch { held: bool },

    /// Ignition key. Pressing while the engine runs shuts it off
    /// instantly; pressing otherwise engages the starter until release.
    Ignition { held: bool },

    // --- Edge-triggered gearbox commands ---
    /// Shift by a signed step. Saturates at 1st and top gear.
    Shift { step: i8 },
    /// Toggle neutral, independent of the stored gear.
    ToggleNeutral,

    // --- Session control ---
    /// Swap the engine profile mid-session. Preserves speed, gear and
    /// raw intents; resets rpm-dependent smoothing state.
    SelectProfile { profile: EngineProfile },
}
