//! Demo binary: runs the simulator against the scripted drive and
//! prints reduced-rate telemetry lines (JSON snapshots) to stdout,
//! with trigger events logged as they fire.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use revline_app::script::{demo_script, DEMO_END_TICK};
use revline_app::sim_loop::{spawn_sim_loop, HostCommand};
use revline_core::profile::catalog;

/// Emit a telemetry line every Nth tick (the dashboard UI runs at a
/// reduced rate; gauges consume the full-rate stream).
const TELEMETRY_INTERVAL: u64 = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let profile = catalog().remove(0);
    tracing::info!(profile = %profile.name, "starting demo drive");

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (output_tx, output_rx) = mpsc::channel();
    let cmd_tx = spawn_sim_loop(profile, Arc::clone(&latest_snapshot), output_tx)
        .expect("catalog profile is valid");

    let mut script = demo_script().into_iter().peekable();

    for output in output_rx {
        let tick = output.snapshot.time.tick;

        while let Some((_, cmd)) = script.next_if(|(at, _)| *at <= tick) {
            let _ = cmd_tx.send(HostCommand::Driver(cmd));
        }

        for trigger in &output.triggers {
            tracing::info!(?trigger, tick, "trigger");
        }

        if tick % TELEMETRY_INTERVAL == 0 {
            match serde_json::to_string(&output.snapshot) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::error!(%err, "telemetry serialization failed"),
            }
        }

        if tick >= DEMO_END_TICK {
            break;
        }
    }

    let _ = cmd_tx.send(HostCommand::Shutdown);
    tracing::info!("demo complete");
}
