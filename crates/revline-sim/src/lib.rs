//! Simulation engine for Revline.
//!
//! Owns the vehicle state, advances it by a clamped variable timestep,
//! and produces `StateSnapshot`s plus one-shot trigger events for the
//! presentation and sound sinks. Completely headless, enabling
//! deterministic fixed-step testing without a real clock.

pub mod simulator;
pub mod systems;

pub use revline_core as core;
pub use simulator::{TickOutput, VehicleSimulator};
