//! Core types and definitions for the Revline drivetrain simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! driver commands, engine profiles, state snapshots, trigger events,
//! and tuning constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod events;
pub mod profile;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
