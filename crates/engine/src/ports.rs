//! Tick input and output records exchanged with external collaborators.
//!
//! The input-acquisition collaborator samples pointer motion and key
//! state once per tick and hands the engine a [`TickInput`]; the engine
//! hands back an [`AxisOutputs`] for the virtual-controller collaborator.
//! Key state is polled, not event-driven, which keeps tick semantics
//! deterministic and replayable.

use serde::{Deserialize, Serialize};

/// Held/pressed state of the hotkeys sampled for one tick.
///
/// Field names follow the physical bindings, which are part of the
/// external contract and preserved bit-for-bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyFlags {
    /// Left Ctrl held: continuous soft centering of X, Y and steering.
    pub ctrl_held: bool,
    /// Left Ctrl held and Left Win pressed this tick (edge): reset of
    /// the absolute and steering axes.
    pub ctrl_win_pressed: bool,
    /// Backspace held: full reset (absolute, steering, throttle, POV).
    pub backspace_held: bool,
    /// `M` held: same reset set as Backspace.
    pub m_held: bool,
    /// NumPad4 + Right Shift held: force the X output to max.
    pub numpad4_rshift: bool,
    /// NumPad2 + Right Shift held: force the Y output to max.
    pub numpad2_rshift: bool,
    /// NumPad6 + Right Shift held: force the RX output to max.
    pub numpad6_rshift: bool,
    /// NumPad8 + Right Shift held: force the RY output to max.
    pub numpad8_rshift: bool,
}

/// One tick's worth of raw input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Lateral pointer motion since the last tick.
    pub delta_x: i32,
    /// Vertical pointer motion since the last tick.
    pub delta_y: i32,
    /// Wheel notches scrolled up since the last tick.
    pub wheel_up: i32,
    /// Wheel notches scrolled down since the last tick.
    pub wheel_down: i32,
    /// Sampled hotkey state.
    pub hotkeys: HotkeyFlags,
}

impl TickInput {
    /// A tick carrying only pointer motion.
    pub fn motion(delta_x: i32, delta_y: i32) -> Self {
        Self {
            delta_x,
            delta_y,
            ..Self::default()
        }
    }
}

/// The six-value output vector of one tick.
///
/// Every value is in `[-16384, 16384]`. Names match the virtual
/// controller channels they are bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOutputs {
    /// Absolute lateral mouse axis.
    pub x: i32,
    /// Absolute vertical mouse axis.
    pub y: i32,
    /// Relative lateral mouse axis.
    pub rx: i32,
    /// Relative vertical mouse axis.
    pub ry: i32,
    /// SRV steering (slider channel).
    pub slider: i32,
    /// SRV throttle (dial channel).
    pub dial: i32,
}
