#[cfg(test)]
mod tests {
    use crate::commands::DriverCommand;
    use crate::events::TriggerEvent;
    use crate::profile::{catalog, EngineProfile, ProfileError, SoundCharacter, SoundKind};
    use crate::state::{SoundFrame, StateSnapshot};
    use crate::types::{DriverIntents, SimTime};

    fn test_profile() -> EngineProfile {
        catalog().remove(0)
    }

    // ---- Profile catalog ----

    #[test]
    fn test_catalog_profiles_all_validate() {
        let profiles = catalog();
        assert_eq!(profiles.len(), 4);
        for p in &profiles {
            assert!(p.validate().is_ok(), "catalog profile '{}' invalid", p.id);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let profiles = catalog();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate profile id");
            }
        }
    }

    // ---- Profile validation ----

    #[test]
    fn test_validate_rejects_empty_gear_list() {
        let mut p = test_profile();
        p.gear_ratios.clear();
        assert_eq!(p.validate(), Err(ProfileError::NoGears(p.id.clone())));
    }

    #[test]
    fn test_validate_rejects_non_positive_ratio() {
        let mut p = test_profile();
        p.gear_ratios[2] = 0.0;
        assert_eq!(p.validate(), Err(ProfileError::NonPositiveRatio(p.id.clone())));
    }

    #[test]
    fn test_validate_rejects_non_monotonic_rpm_bounds() {
        let mut p = test_profile();
        p.redline_rpm = p.max_rpm + 100.0;
        assert_eq!(p.validate(), Err(ProfileError::RpmBounds(p.id.clone())));

        let mut p = test_profile();
        p.idle_rpm = p.redline_rpm;
        assert_eq!(p.validate(), Err(ProfileError::RpmBounds(p.id.clone())));
    }

    #[test]
    fn test_validate_rejects_non_positive_params() {
        let mut p = test_profile();
        p.torque = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ProfileError::NonPositiveParam(_, "torque"))
        ));

        let mut p = test_profile();
        p.wheel_radius_m = -0.1;
        assert!(matches!(
            p.validate(),
            Err(ProfileError::NonPositiveParam(_, "wheel_radius_m"))
        ));
    }

    #[test]
    fn test_profile_error_messages_name_profile() {
        let mut p = test_profile();
        p.gear_ratios.clear();
        let msg = p.validate().unwrap_err().to_string();
        assert!(msg.contains(&p.id), "error should name the profile: {msg}");
    }

    // ---- rpm_norm ----

    #[test]
    fn test_rpm_norm_clamped() {
        let p = test_profile();
        assert_eq!(p.rpm_norm(0.0), 0.0, "below idle clamps to 0");
        assert_eq!(p.rpm_norm(p.idle_rpm), 0.0);
        assert_eq!(p.rpm_norm(p.max_rpm), 1.0);
        assert_eq!(p.rpm_norm(p.max_rpm + 5000.0), 1.0, "above max clamps to 1");

        let mid = (p.idle_rpm + p.max_rpm) / 2.0;
        assert!((p.rpm_norm(mid) - 0.5).abs() < 1e-12);
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_accumulates_variable_dt() {
        let mut t = SimTime::default();
        t.advance(0.016);
        t.advance(0.05);
        t.advance(0.0);
        assert_eq!(t.tick, 3);
        assert!((t.elapsed_secs - 0.066).abs() < 1e-12);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_trigger_event_serde() {
        let variants = vec![
            TriggerEvent::ShiftThud,
            TriggerEvent::Backfire,
            TriggerEvent::TurboFlutter,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TriggerEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_driver_command_serde() {
        let commands = vec![
            DriverCommand::Throttle { held: true },
            DriverCommand::Brake { held: false },
            DriverCommand::Clutch { held: true },
            DriverCommand::Ignition { held: true },
            DriverCommand::Shift { step: -1 },
            DriverCommand::ToggleNeutral,
            DriverCommand::SelectProfile {
                profile: test_profile(),
            },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: DriverCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = StateSnapshot {
            rpm: 3200.0,
            speed: 21.5,
            gear: 3,
            throttle_input: 0.7,
            clutch_engaged: true,
            engine_on: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_sound_frame_serde() {
        let frame = SoundFrame {
            rpm: 4500.0,
            throttle: 1.0,
            engine_load: 1.0,
            limiter_hit: false,
            cranking: false,
            engine_on: true,
            character: SoundCharacter {
                kind: SoundKind::V8,
                cylinders: 8,
                idle_lope: 0.35,
                whistle: 0.3,
            },
        };
        let json = serde_json::to_string(&frame).unwrap();
        let back: SoundFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }

    #[test]
    fn test_speed_kmh_conversion() {
        let snap = StateSnapshot {
            speed: 27.78,
            ..Default::default()
        };
        assert!((snap.speed_kmh() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_driver_intents_default_all_released() {
        let intents = DriverIntents::default();
        assert!(!intents.throttle && !intents.brake && !intents.clutch && !intents.ignition);
    }
}
