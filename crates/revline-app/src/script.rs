//! Scripted demo drive: a canned command sequence keyed on tick
//! numbers, standing in for a live input layer.

use revline_core::commands::DriverCommand;

/// Commands to inject at given tick numbers, sorted ascending.
///
/// The sequence: crank the engine, build boost on launch control,
/// drop the clutch, row up through three gears near redline, then
/// brake to a stop and switch off.
pub fn demo_script() -> Vec<(u64, DriverCommand)> {
    let mut script = vec![
        // Crank until the engine catches (about a second), then release.
        (0, DriverCommand::Ignition { held: true }),
        (75, DriverCommand::Ignition { held: false }),
        // Clutch in, floor it: launch control builds boost against the
        // launch limiter.
        (90, DriverCommand::Clutch { held: true }),
        (95, DriverCommand::Throttle { held: true }),
        // Drop the clutch.
        (210, DriverCommand::Clutch { held: false }),
        // Brake to a stop.
        (760, DriverCommand::Throttle { held: false }),
        (765, DriverCommand::Clutch { held: true }),
        (770, DriverCommand::Brake { held: true }),
        (1020, DriverCommand::Brake { held: false }),
        // Kill the engine.
        (1030, DriverCommand::Ignition { held: true }),
        (1035, DriverCommand::Ignition { held: false }),
    ];

    // Three upshifts near redline: clutch in, shift, clutch out.
    for base in [340u64, 480, 620] {
        script.push((base, DriverCommand::Clutch { held: true }));
        script.push((base + 4, DriverCommand::Shift { step: 1 }));
        script.push((base + 8, DriverCommand::Clutch { held: false }));
    }

    script.sort_by_key(|(tick, _)| *tick);
    script
}

/// Tick number after which the demo is over.
pub const DEMO_END_TICK: u64 = 1080;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_sorted_and_ends_before_demo_end() {
        let script = demo_script();
        assert!(!script.is_empty());
        for pair in script.windows(2) {
            assert!(pair[0].0 <= pair[1].0, "script must be sorted by tick");
        }
        assert!(script.last().unwrap().0 < DEMO_END_TICK);
    }

    #[test]
    fn test_script_releases_everything_it_holds() {
        // Every held:true intent gets a matching held:false later.
        let script = demo_script();
        let mut throttle = 0i32;
        let mut brake = 0i32;
        let mut clutch = 0i32;
        let mut ignition = 0i32;
        for (_, cmd) in &script {
            match cmd {
                DriverCommand::Throttle { held } => throttle += if *held { 1 } else { -1 },
                DriverCommand::Brake { held } => brake += if *held { 1 } else { -1 },
                DriverCommand::Clutch { held } => clutch += if *held { 1 } else { -1 },
                DriverCommand::Ignition { held } => ignition += if *held { 1 } else { -1 },
                _ => {}
            }
        }
        assert_eq!(throttle, 0);
        assert_eq!(brake, 0);
        assert_eq!(clutch, 0);
        assert_eq!(ignition, 0);
    }
}
