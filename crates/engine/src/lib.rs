//! OpenStick Engine - Pointer-to-Gamepad Axis Synthesis Core
//!
//! This crate contains the deterministic axis-synthesis engine that turns
//! raw pointer deltas, wheel notches and hotkey states into virtual
//! controller axis outputs, one fixed-rate tick at a time.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

pub mod axis;
pub mod config;
pub mod engine;
pub mod hotkeys;
pub mod ports;

pub use axis::{AxisMode, AxisRig, AxisState, ModeToggles};
pub use config::{
    AXIS_MAX, AXIS_MIN, AbsoluteAxisConfig, CenteringConfig, ConfigError, EngineConfig,
    RelativeAxisConfig, ReservedJoystickConfig, SteeringAxisConfig, StillnessConfig,
    TICK_PERIOD_MS, ThrottleAxisConfig,
};
pub use engine::AxisEngine;
pub use hotkeys::{ResetRule, ResetTargets, SnapChannel, SnapRule, RESET_RULES, SNAP_RULES};
pub use ports::{AxisOutputs, HotkeyFlags, TickInput};
