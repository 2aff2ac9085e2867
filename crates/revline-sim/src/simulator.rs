//! Vehicle simulator — the core of the system.
//!
//! `VehicleSimulator` exclusively owns the mutable simulation state,
//! processes queued driver commands at tick boundaries, runs the physics
//! systems in a fixed order, and produces read-only snapshots. It is a
//! pure (but stateful) function of `(state, inputs, dt)`; how the host
//! schedules `advance` calls is not its concern.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use revline_core::commands::DriverCommand;
use revline_core::constants::MAX_DT;
use revline_core::events::TriggerEvent;
use revline_core::profile::{EngineProfile, ProfileError};
use revline_core::state::{SoundFrame, StateSnapshot};
use revline_core::types::{DriverIntents, SimTime};

use crate::systems;

/// The authoritative mutable simulation record. Mutated in place every
/// tick; sinks only ever see `StateSnapshot` copies.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub rpm: f64,
    pub speed: f64,
    /// 1-based gear index, valid even while in neutral.
    pub gear: u8,
    pub throttle_input: f64,
    pub brake_input: f64,
    pub clutch_engaged: bool,
    pub is_neutral: bool,
    pub limiter_hit: bool,
    pub grinding: bool,
    pub wheel_slip: f64,
    pub boost: f64,
    pub g_long: f64,
    pub engine_on: bool,
    pub cranking: bool,
    pub launch_control: bool,
}

impl SimulationState {
    /// Engine off, 1st gear, clutch released, everything at rest.
    pub fn at_rest() -> Self {
        Self {
            rpm: 0.0,
            speed: 0.0,
            gear: 1,
            throttle_input: 0.0,
            brake_input: 0.0,
            clutch_engaged: true,
            is_neutral: false,
            limiter_hit: false,
            grinding: false,
            wheel_slip: 0.0,
            boost: 0.0,
            g_long: 0.0,
            engine_on: false,
            cranking: false,
            launch_control: false,
        }
    }
}

/// Countdown timers internal to the simulator, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timers {
    /// Must reach 0 before a new shift request is accepted.
    pub shift_lock: f64,
    /// Drives the `grinding` flag after a bad shift.
    pub grind: f64,
    /// Active limiter fuel-cut window.
    pub limiter: f64,
}

/// Result of one `advance` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    pub snapshot: StateSnapshot,
    /// Zero or more one-shot audio cues fired this tick.
    pub triggers: Vec<TriggerEvent>,
    /// Continuous state for the sound sink.
    pub sound: SoundFrame,
}

/// The simulator. Advances `SimulationState` by a variable, clamped
/// timestep; owns all physics, drivetrain coupling, limiter, and
/// smoothing logic.
pub struct VehicleSimulator {
    profile: EngineProfile,
    state: SimulationState,
    timers: Timers,
    intents: DriverIntents,
    time: SimTime,
    /// Previous-tick smoothed throttle, for lift-off edge detection.
    last_throttle: f64,
    command_queue: VecDeque<DriverCommand>,
    triggers: Vec<TriggerEvent>,
}

impl VehicleSimulator {
    /// Create a simulator for the given profile. Fails on a malformed
    /// profile; this is the only fallible entry point.
    pub fn new(profile: EngineProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            profile,
            state: SimulationState::at_rest(),
            timers: Timers::default(),
            intents: DriverIntents::default(),
            time: SimTime::default(),
            last_throttle: 0.0,
            command_queue: VecDeque::new(),
            triggers: Vec::new(),
        })
    }

    /// Queue a driver command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: DriverCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DriverCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds (clamped to [0, 0.05])
    /// and return the resulting snapshot, triggers, and sound frame.
    pub fn advance(&mut self, dt: f64) -> TickOutput {
        let dt = dt.clamp(0.0, MAX_DT);
        self.process_commands();

        let s = &mut self.state;
        let p = &self.profile;

        systems::inputs::run_timers(s, &mut self.timers, dt);
        systems::ignition::run(s, &self.intents, p, dt);
        systems::inputs::run_smoothing(s, &self.intents, dt);
        systems::triggers::run(s, p, &mut self.last_throttle, &mut self.triggers);

        let mut engine_load = 0.0;
        if s.engine_on {
            s.launch_control = systems::boost::launch_control_active(s);
            systems::boost::run(s, p, dt);
            let effective_throttle =
                systems::boost::run_limiter(s, &mut self.timers, p, &mut self.triggers);
            let forces = systems::drivetrain::run(s, p, effective_throttle, dt);
            systems::drivetrain::clamp_rpm(s, &self.timers, p, dt);
            systems::longitudinal::run(s, p, forces, dt);
            if s.clutch_engaged && !s.is_neutral {
                engine_load = effective_throttle;
            }
        } else {
            // Dead engine: the car still coasts and brakes.
            s.launch_control = false;
            systems::longitudinal::run_coasting(s, p, dt);
        }

        self.time.advance(dt);

        TickOutput {
            snapshot: self.build_snapshot(),
            triggers: std::mem::take(&mut self.triggers),
            sound: self.build_sound_frame(engine_load),
        }
    }

    /// Swap the engine profile mid-session. Speed, gear, neutral flag
    /// and raw intents carry over; rpm-dependent smoothing state resets
    /// toward the new profile.
    pub fn set_profile(&mut self, profile: EngineProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        tracing::info!(from = %self.profile.id, to = %profile.id, "engine profile selected");

        let s = &mut self.state;
        s.gear = s.gear.clamp(1, profile.gear_count() as u8);
        s.rpm = if s.engine_on { profile.idle_rpm } else { 0.0 };
        s.throttle_input = 0.0;
        s.brake_input = 0.0;
        s.boost = 0.0;
        s.wheel_slip = 0.0;
        s.g_long = 0.0;
        s.limiter_hit = false;
        s.grinding = false;
        s.launch_control = false;
        self.timers = Timers::default();
        self.last_throttle = 0.0;
        self.profile = profile;
        Ok(())
    }

    /// The active engine profile.
    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the current state, outside the tick cycle.
    pub fn snapshot(&self) -> StateSnapshot {
        self.build_snapshot()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single driver command.
    fn handle_command(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::Throttle { held } => self.intents.throttle = held,
            DriverCommand::Brake { held } => self.intents.brake = held,
            DriverCommand::Clutch { held } => self.intents.clutch = held,
            DriverCommand::Ignition { held } => {
                if held && self.state.engine_on {
                    // Kill switch: instant, no spin-down ramp.
                    self.state.engine_on = false;
                    self.state.rpm = 0.0;
                    tracing::info!("ignition off");
                } else {
                    self.intents.ignition = held;
                }
            }
            DriverCommand::Shift { step } => {
                systems::gearbox::request_shift(
                    &mut self.state,
                    &mut self.timers,
                    &self.profile,
                    step,
                    &mut self.triggers,
                );
            }
            DriverCommand::ToggleNeutral => {
                systems::gearbox::toggle_neutral(&mut self.state, &mut self.triggers);
            }
            DriverCommand::SelectProfile { profile } => {
                if let Err(err) = self.set_profile(profile) {
                    tracing::warn!(%err, "rejected malformed engine profile");
                }
            }
        }
    }

    fn build_snapshot(&self) -> StateSnapshot {
        let s = &self.state;
        StateSnapshot {
            time: self.time,
            rpm: s.rpm,
            speed: s.speed,
            gear: s.gear,
            throttle_input: s.throttle_input,
            brake_input: s.brake_input,
            clutch_engaged: s.clutch_engaged,
            is_neutral: s.is_neutral,
            limiter_hit: s.limiter_hit,
            grinding: s.grinding,
            wheel_slip: s.wheel_slip,
            boost: s.boost,
            g_long: s.g_long,
            engine_on: s.engine_on,
            cranking: s.cranking,
            launch_control: s.launch_control,
        }
    }

    fn build_sound_frame(&self, engine_load: f64) -> SoundFrame {
        let s = &self.state;
        if !s.engine_on {
            // Starter noise only; the voiced engine is silent.
            return SoundFrame {
                cranking: s.cranking,
                character: self.profile.sound,
                ..Default::default()
            };
        }
        SoundFrame {
            rpm: s.rpm,
            throttle: s.throttle_input,
            engine_load,
            limiter_hit: s.limiter_hit,
            cranking: s.cranking,
            engine_on: true,
            character: self.profile.sound,
        }
    }
}
