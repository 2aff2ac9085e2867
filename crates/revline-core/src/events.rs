//! Trigger events emitted by the simulator for one-shot audio cues.
//!
//! These are discrete, edge-fired notifications, distinct from the
//! continuous per-tick `SoundFrame`. Each is independent; several may
//! fire in the same tick.

use serde::{Deserialize, Serialize};

/// One-shot audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TriggerEvent {
    /// Mechanical thud on any completed gear or neutral change.
    ShiftThud,
    /// Exhaust pop on sharp throttle lift at high rpm, or on a
    /// launch-control limiter cut.
    Backfire,
    /// Wastegate flutter on throttle lift while boosted.
    TurboFlutter,
}
