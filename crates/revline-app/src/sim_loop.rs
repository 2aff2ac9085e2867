//! Simulation loop thread — advances the simulator at the host refresh
//! rate with wall-clock deltas and emits every tick's output.
//!
//! Commands arrive via `mpsc` channel. Outputs go to an `mpsc` sender
//! (the presentation/sound sinks) and the latest snapshot is stored in
//! shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use revline_core::commands::DriverCommand;
use revline_core::constants::TICK_RATE;
use revline_core::profile::{EngineProfile, ProfileError};
use revline_core::state::StateSnapshot;
use revline_sim::simulator::{TickOutput, VehicleSimulator};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the input layer to the sim loop thread.
#[derive(Debug)]
pub enum HostCommand {
    /// A driver command to forward to the simulator.
    Driver(DriverCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Spawns the simulation loop in a new thread.
///
/// Profile validation happens here, before the thread exists; the loop
/// itself has no failure modes. Returns the command sender.
pub fn spawn_sim_loop(
    profile: EngineProfile,
    latest_snapshot: Arc<Mutex<Option<StateSnapshot>>>,
    output_tx: mpsc::Sender<TickOutput>,
) -> Result<mpsc::Sender<HostCommand>, ProfileError> {
    let simulator = VehicleSimulator::new(profile)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();

    std::thread::Builder::new()
        .name("revline-sim-loop".into())
        .spawn(move || {
            run_sim_loop(simulator, cmd_rx, &latest_snapshot, output_tx);
        })
        .expect("failed to spawn sim loop thread");

    Ok(cmd_tx)
}

/// The loop. Runs until Shutdown, command-channel disconnect, or all
/// output receivers dropping.
fn run_sim_loop(
    mut simulator: VehicleSimulator,
    cmd_rx: mpsc::Receiver<HostCommand>,
    latest_snapshot: &Mutex<Option<StateSnapshot>>,
    output_tx: mpsc::Sender<TickOutput>,
) {
    let mut next_tick_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(HostCommand::Driver(cmd)) => simulator.queue_command(cmd),
                Ok(HostCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the measured wall-clock delta (the simulator
        //    clamps it internally).
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f64();
        last_tick = now;
        let output = simulator.advance(dt);

        // 3. Store the latest snapshot for synchronous polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(output.snapshot.clone());
        }

        // 4. Hand the full tick output to the sinks.
        if output_tx.send(output).is_err() {
            return;
        }

        // 5. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revline_core::profile::catalog;
    use std::time::Duration;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<HostCommand>();

        tx.send(HostCommand::Driver(DriverCommand::Throttle { held: true }))
            .unwrap();
        tx.send(HostCommand::Driver(DriverCommand::ToggleNeutral))
            .unwrap();
        tx.send(HostCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            HostCommand::Driver(DriverCommand::Throttle { held: true })
        ));
        assert!(matches!(
            commands[1],
            HostCommand::Driver(DriverCommand::ToggleNeutral)
        ));
        assert!(matches!(commands[2], HostCommand::Shutdown));
    }

    #[test]
    fn test_spawn_rejects_malformed_profile() {
        let mut profile = catalog().remove(0);
        profile.gear_ratios.clear();
        let latest = Arc::new(Mutex::new(None));
        let (out_tx, _out_rx) = mpsc::channel();
        assert!(spawn_sim_loop(profile, latest, out_tx).is_err());
    }

    #[test]
    fn test_loop_starts_engine_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (out_tx, out_rx) = mpsc::channel();
        let cmd_tx = spawn_sim_loop(catalog().remove(0), Arc::clone(&latest), out_tx).unwrap();

        cmd_tx
            .send(HostCommand::Driver(DriverCommand::Ignition { held: true }))
            .unwrap();

        // Cranking takes about a second of simulated time; allow plenty
        // of wall-clock slack.
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut engine_on = false;
        while Instant::now() < deadline {
            match out_rx.recv_timeout(Duration::from_secs(1)) {
                Ok(output) => {
                    if output.snapshot.engine_on {
                        engine_on = true;
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        assert!(engine_on, "engine should start under a held ignition key");

        // The polled snapshot mirrors the stream.
        let polled = latest.lock().unwrap().clone();
        assert!(polled.is_some());

        cmd_tx.send(HostCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut simulator = VehicleSimulator::new(catalog().remove(0)).unwrap();
        simulator.queue_command(DriverCommand::Ignition { held: true });
        for _ in 0..120 {
            simulator.advance(1.0 / 60.0);
        }

        let output = simulator.advance(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&output.snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "snapshot serialization took {elapsed:?}"
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / TICK_RATE as u64;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
