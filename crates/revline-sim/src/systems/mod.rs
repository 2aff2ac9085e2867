//! Physics systems run by the simulator each tick, in fixed order.
//!
//! Systems are free functions over `&mut SimulationState` (plus timers
//! and the profile). They own no state of their own — everything lives
//! on the simulator instance.

pub mod boost;
pub mod drivetrain;
pub mod gearbox;
pub mod ignition;
pub mod inputs;
pub mod longitudinal;
pub mod triggers;
