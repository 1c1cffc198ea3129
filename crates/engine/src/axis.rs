//! Per-axis state owned by the engine.

use serde::{Deserialize, Serialize};

/// Post-processing pipeline an axis goes through, fixed per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisMode {
    /// Accumulated pointer position with smart centering and curve
    /// shaping (X, Y).
    Absolute,
    /// Accumulated pointer rate with stillness-gated hard centering
    /// only (RX, RY).
    Relative,
    /// Steering/throttle style: accumulated position, curve shaping
    /// and/or tight smart centering (steer, throttle).
    SteeringLike,
}

/// Reserved mode toggles.
///
/// Declared in the reference configuration but never read; carried as
/// forward-compatible surface so the capability is not silently
/// dropped. All three are no-ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeToggles {
    /// Reserved: map roll input onto the yaw axis.
    pub roll2yaw: bool,
    /// Reserved: map vertical input onto the pitch axis.
    pub vertical2pitch: bool,
    /// Reserved: mouse-to-joystick pass-through.
    pub mouse2joystick: bool,
}

/// State of one logical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisState {
    /// Accumulated, clamped signal value. Always within the axis range.
    pub raw: i32,
    /// Last curve-shaped output; zero for axes that skip shaping.
    pub curved: i32,
    /// Which post-processing pipeline applies.
    pub mode: AxisMode,
}

impl AxisState {
    /// A zeroed axis in the given mode.
    pub fn new(mode: AxisMode) -> Self {
        Self {
            raw: 0,
            curved: 0,
            mode,
        }
    }

    /// Zero the accumulated and shaped values.
    pub fn reset(&mut self) {
        self.raw = 0;
        self.curved = 0;
    }
}

/// The full set of persistent axis state owned by the engine.
///
/// Created zeroed at engine start and mutated exactly once per tick
/// (plus hotkey overrides). `pov_x`/`pov_y` are placeholders: never
/// emitted, but zeroed by the full reset hotkeys exactly like the
/// reference does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRig {
    /// Absolute lateral mouse axis.
    pub x: AxisState,
    /// Absolute vertical mouse axis.
    pub y: AxisState,
    /// Relative lateral mouse axis.
    pub rx: AxisState,
    /// Relative vertical mouse axis.
    pub ry: AxisState,
    /// SRV steering axis.
    pub steer: AxisState,
    /// SRV throttle axis.
    pub throttle: AxisState,
    /// POV placeholder, lateral.
    pub pov_x: i32,
    /// POV placeholder, vertical.
    pub pov_y: i32,
    /// Reserved mode toggles (no-ops).
    pub toggles: ModeToggles,
}

impl AxisRig {
    /// A zeroed rig with the fixed per-axis modes.
    pub fn new() -> Self {
        Self {
            x: AxisState::new(AxisMode::Absolute),
            y: AxisState::new(AxisMode::Absolute),
            rx: AxisState::new(AxisMode::Relative),
            ry: AxisState::new(AxisMode::Relative),
            steer: AxisState::new(AxisMode::SteeringLike),
            throttle: AxisState::new(AxisMode::SteeringLike),
            pov_x: 0,
            pov_y: 0,
            toggles: ModeToggles::default(),
        }
    }
}

impl Default for AxisRig {
    fn default() -> Self {
        Self::new()
    }
}
