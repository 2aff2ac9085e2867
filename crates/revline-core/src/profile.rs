//! Engine profiles: static per-vehicle tuning parameters.
//!
//! Profiles are immutable once selected. Malformed profiles are a
//! configuration-time error (`ProfileError`), never a per-tick concern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sound character family, passed through to the sound sink untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    V8,
    Diesel,
    #[default]
    Sport,
    Econ,
}

/// Per-profile voicing parameters for the sound sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundCharacter {
    pub kind: SoundKind,
    pub cylinders: u8,
    /// Idle unevenness (cam lope) amount, 0..1.
    pub idle_lope: f64,
    /// Turbo/supercharger whistle prominence, 0..1.
    pub whistle: f64,
}

/// Static tuning parameters for one engine/drivetrain combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineProfile {
    pub id: String,
    pub name: String,
    pub idle_rpm: f64,
    pub redline_rpm: f64,
    pub max_rpm: f64,
    /// Peak engine torque (N·m).
    pub torque: f64,
    pub final_drive: f64,
    /// Per-gear ratios, index 0 = 1st gear. All positive.
    pub gear_ratios: Vec<f64>,
    pub wheel_radius_m: f64,
    pub engine_braking_strength: f64,
    pub brake_strength: f64,
    pub sound: SoundCharacter,
    /// Gates boost computation; non-turbo profiles hold boost at 0.
    pub turbo: bool,
}

/// Validation failures for an engine profile. Fatal at selection time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile '{0}' has an empty gear ratio list")]
    NoGears(String),
    #[error("profile '{0}' has a non-positive gear ratio")]
    NonPositiveRatio(String),
    #[error("profile '{0}' rpm bounds are not monotonic (idle < redline < max)")]
    RpmBounds(String),
    #[error("profile '{0}' has a non-positive {1}")]
    NonPositiveParam(String, &'static str),
}

impl EngineProfile {
    /// Check the configuration-time preconditions the simulator relies on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.gear_ratios.is_empty() {
            return Err(ProfileError::NoGears(self.id.clone()));
        }
        if self.gear_ratios.iter().any(|r| *r <= 0.0) {
            return Err(ProfileError::NonPositiveRatio(self.id.clone()));
        }
        if !(self.idle_rpm < self.redline_rpm && self.redline_rpm < self.max_rpm) {
            return Err(ProfileError::RpmBounds(self.id.clone()));
        }
        for (value, name) in [
            (self.idle_rpm, "idle_rpm"),
            (self.torque, "torque"),
            (self.final_drive, "final_drive"),
            (self.wheel_radius_m, "wheel_radius_m"),
            (self.engine_braking_strength, "engine_braking_strength"),
            (self.brake_strength, "brake_strength"),
        ] {
            if value <= 0.0 {
                return Err(ProfileError::NonPositiveParam(self.id.clone(), name));
            }
        }
        Ok(())
    }

    /// Number of forward gears.
    pub fn gear_count(&self) -> usize {
        self.gear_ratios.len()
    }

    /// Engine speed normalized to [0,1] between idle and max rpm.
    pub fn rpm_norm(&self, rpm: f64) -> f64 {
        ((rpm - self.idle_rpm) / (self.max_rpm - self.idle_rpm)).clamp(0.0, 1.0)
    }
}

/// Built-in profile catalog.
pub fn catalog() -> Vec<EngineProfile> {
    vec![
        EngineProfile {
            id: "v6".into(),
            name: "V6 Sport Turbo".into(),
            idle_rpm: 850.0,
            redline_rpm: 7200.0,
            max_rpm: 7800.0,
            torque: 320.0,
            final_drive: 3.55,
            gear_ratios: vec![3.25, 2.05, 1.42, 1.08, 0.86, 0.72],
            wheel_radius_m: 0.33,
            engine_braking_strength: 0.20,
            brake_strength: 1.05,
            sound: SoundCharacter {
                kind: SoundKind::Sport,
                cylinders: 6,
                idle_lope: 0.10,
                whistle: 0.4,
            },
            turbo: true,
        },
        EngineProfile {
            id: "v8".into(),
            name: "V8 Supercharged".into(),
            idle_rpm: 750.0,
            redline_rpm: 6500.0,
            max_rpm: 7000.0,
            torque: 600.0,
            final_drive: 3.31,
            gear_ratios: vec![2.97, 2.07, 1.43, 1.00, 0.84, 0.56],
            wheel_radius_m: 0.34,
            engine_braking_strength: 0.25,
            brake_strength: 1.20,
            sound: SoundCharacter {
                kind: SoundKind::V8,
                cylinders: 8,
                idle_lope: 0.35,
                whistle: 0.3,
            },
            turbo: true,
        },
        EngineProfile {
            id: "diesel".into(),
            name: "Turbo Diesel".into(),
            idle_rpm: 700.0,
            redline_rpm: 4500.0,
            max_rpm: 4800.0,
            torque: 500.0,
            final_drive: 3.90,
            gear_ratios: vec![3.90, 2.20, 1.45, 1.06, 0.79, 0.63],
            wheel_radius_m: 0.33,
            engine_braking_strength: 0.30,
            brake_strength: 1.00,
            sound: SoundCharacter {
                kind: SoundKind::Diesel,
                cylinders: 4,
                idle_lope: 0.12,
                whistle: 0.65,
            },
            turbo: true,
        },
        EngineProfile {
            id: "i4".into(),
            name: "Inline-4 N/A".into(),
            idle_rpm: 1000.0,
            redline_rpm: 8200.0,
            max_rpm: 9000.0,
            torque: 200.0,
            final_drive: 4.10,
            gear_ratios: vec![3.60, 2.12, 1.56, 1.23, 1.02, 0.88],
            wheel_radius_m: 0.31,
            engine_braking_strength: 0.15,
            brake_strength: 1.10,
            sound: SoundCharacter {
                kind: SoundKind::Econ,
                cylinders: 4,
                idle_lope: 0.20,
                whistle: 0.04,
            },
            turbo: false,
        },
    ]
}
