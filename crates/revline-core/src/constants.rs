//! Simulation constants and tuning parameters.
//!
//! Drivetrain and chassis numbers are empirically tuned for plausible
//! gauge behavior, not derived from first principles.

/// Upper bound on the integration timestep (seconds). Frame hitches
/// beyond this are clamped rather than integrated.
pub const MAX_DT: f64 = 0.05;

/// Nominal host refresh rate (Hz). The simulator itself accepts any
/// clamped dt; this only drives the host loop cadence.
pub const TICK_RATE: u32 = 60;

// --- Chassis ---

/// Vehicle mass in kilograms.
pub const MASS_KG: f64 = 1450.0;

/// Quadratic aerodynamic drag coefficient (N per (m/s)^2).
pub const DRAG_COEFF: f64 = 0.35;

/// Constant rolling resistance force (N), applied while moving.
pub const ROLL_FORCE: f64 = 18.0;

/// Speed below which rolling resistance is not applied (m/s).
pub const ROLL_SPEED_FLOOR: f64 = 0.1;

/// Brake force scale (N at full pedal and brake_strength 1.0).
pub const BRAKE_FORCE_SCALE: f64 = 12_000.0;

/// Engine braking force scale (N at full engine-braking amount
/// and engine_braking_strength 1.0).
pub const ENGINE_BRAKE_FORCE_SCALE: f64 = 2_500.0;

/// Standard gravity (m/s^2), for g-force readout.
pub const G0: f64 = 9.81;

/// Low-pass coefficient for the smoothed longitudinal g readout.
pub const G_SMOOTHING: f64 = 0.1;

// --- Input smoothing ---

/// Throttle ramp-up rate (fraction per second).
pub const THROTTLE_RAMP: f64 = 5.0;

/// Throttle release rate (fraction per second).
pub const THROTTLE_FALL: f64 = 6.0;

/// Brake ramp-up rate (fraction per second).
pub const BRAKE_RAMP: f64 = 5.0;

/// Brake release rate (fraction per second).
pub const BRAKE_FALL: f64 = 6.0;

// --- Ignition / starter ---

/// Starter motor spin-up rate (rpm per second).
pub const STARTER_RATE: f64 = 300.0;

/// RPM above which the engine catches and snaps to idle.
pub const START_CATCH_RPM: f64 = 300.0;

/// Engine spin-down rate with ignition off (rpm per second).
pub const SPINDOWN_RATE: f64 = 500.0;

/// Turbo bleed rate with engine off (bar per second).
pub const BOOST_BLEED_OFF: f64 = 2.0;

// --- Clutch / rpm dynamics ---

/// Clutch lock-up stiffness: exponential approach rate of engine rpm
/// toward the wheel-matched rpm when coupled (1/s).
pub const CLUTCH_MATCH_RATE: f64 = 12.0;

/// Free-rev response rate when decoupled (1/s).
pub const RPM_RESPONSE: f64 = 10.0;

// --- Gearbox ---

/// Shift lock after a clean gear change (seconds).
pub const SHIFT_LOCK_SECS: f64 = 0.15;

/// Shift lock after a rejected (grinding) change (seconds).
pub const BAD_SHIFT_LOCK_SECS: f64 = 0.3;

/// Grind timer duration after a bad shift (seconds).
pub const GRIND_SECS: f64 = 0.5;

/// RPM drop applied on a bad shift (binding against the dogs).
pub const GRIND_RPM_DROP: f64 = 1_500.0;

// --- Tires ---

/// Maximum tire-limited acceleration (m/s^2). Above this the driven
/// wheels break loose at low speed.
pub const TIRE_GRIP_MAX_ACCEL: f64 = 8.5;

/// Speed above which wheelspin is no longer modeled (m/s).
pub const WHEELSPIN_SPEED_CEILING: f64 = 50.0;

/// Wheel slip ramp-up rate while spinning (fraction per second).
pub const SLIP_RAMP: f64 = 8.0;

/// Wheel slip decay rate while gripping (fraction per second).
pub const SLIP_DECAY: f64 = 5.0;

/// Flywheel feedback factor: excess wheel torque (N·m) times this,
/// per second, feeds engine rpm during wheelspin.
pub const FLYWHEEL_FEEDBACK: f64 = 15.0;

// --- Turbo ---

/// Peak boost shaping: target = BOOST_SHAPE * throttle * rpm_norm^BOOST_EXP.
pub const BOOST_SHAPE: f64 = 1.5;
pub const BOOST_EXP: f64 = 0.8;

/// Boost spool-up approach rate below target (1/s).
pub const BOOST_SPOOL_RATE: f64 = 2.0;

/// Boost bleed-off approach rate above target (1/s).
pub const BOOST_BLEED_RATE: f64 = 5.0;

/// Torque added per bar of boost on turbo profiles (N·m).
pub const BOOST_TORQUE_PER_BAR: f64 = 150.0;

// --- Rev limiter ---

/// Duration of one limiter fuel cut (seconds).
pub const LIMITER_CUT_SECS: f64 = 0.11;

/// Throttle above this re-arms the limiter at the ceiling.
pub const LIMITER_THROTTLE_FLOOR: f64 = 0.1;

/// RPM bleed rate while the limiter is cutting (rpm per second).
pub const LIMITER_BLEED_RATE: f64 = 3_000.0;

// --- Launch control ---

/// Throttle threshold to arm launch control.
pub const LAUNCH_THROTTLE_MIN: f64 = 0.9;

/// Speed ceiling for launch control (m/s).
pub const LAUNCH_SPEED_MAX: f64 = 5.0;

/// RPM ceiling while launch control holds the engine.
pub const LAUNCH_LIMIT_RPM: f64 = 4_500.0;

/// Boost build target while launch control is active (bar).
pub const LAUNCH_BOOST_TARGET: f64 = 1.0;

// --- Audio trigger thresholds ---

/// Backfire: throttle lift from above this...
pub const BACKFIRE_LIFT_FROM: f64 = 0.8;

/// ...to below this...
pub const BACKFIRE_LIFT_TO: f64 = 0.5;

/// ...while rpm exceeds this fraction of redline.
pub const BACKFIRE_RPM_FRACTION: f64 = 0.6;

/// Turbo flutter: throttle lift from above this...
pub const FLUTTER_LIFT_FROM: f64 = 0.5;

/// ...to below this...
pub const FLUTTER_LIFT_TO: f64 = 0.2;

/// ...while boost exceeds this (bar).
pub const FLUTTER_BOOST_MIN: f64 = 0.5;
