//! Revline headless host.
//!
//! Wires the simulator to a dedicated loop thread driven at the host
//! refresh rate, forwards driver commands over a channel, and hands
//! snapshots to whatever sinks are attached (the bundled binary prints
//! reduced-rate telemetry and runs a scripted demo drive).

pub mod script;
pub mod sim_loop;

pub use revline_core as core;
