//! Hotkey override tables.
//!
//! Discrete key state is polled every tick; the reset and snap tables
//! are evaluated in fixed order after the output vector is computed, so
//! a triggered rule overrides anything produced earlier in the same
//! tick. The bindings are part of the external contract and preserved
//! bit-for-bit.

use openstick_filters::soft_centering_filter;
use tracing::debug;

use crate::axis::AxisRig;
use crate::ports::{AxisOutputs, HotkeyFlags};

/// Axis subset affected by one reset rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetTargets {
    /// Absolute lateral mouse axis.
    pub x: bool,
    /// Absolute vertical mouse axis.
    pub y: bool,
    /// SRV steering axis.
    pub steer: bool,
    /// SRV throttle axis.
    pub throttle: bool,
    /// POV placeholders.
    pub pov: bool,
}

impl ResetTargets {
    /// Absolute mouse axes plus steering; the Ctrl+Win reset set.
    pub const ABSOLUTE_AND_STEER: Self = Self {
        x: true,
        y: true,
        steer: true,
        throttle: false,
        pov: false,
    };

    /// Everything a hard reset touches. Deliberately excludes the
    /// relative axes RX/RY, which are left to their own recovery.
    pub const FULL: Self = Self {
        x: true,
        y: true,
        steer: true,
        throttle: true,
        pov: true,
    };
}

/// One entry of the reset table.
#[derive(Clone, Copy, Debug)]
pub struct ResetRule {
    /// Binding name, for diagnostics.
    pub name: &'static str,
    /// Key-combination predicate over the tick's sampled flags.
    pub predicate: fn(&HotkeyFlags) -> bool,
    /// Axis subset to zero when the predicate holds.
    pub targets: ResetTargets,
}

fn ctrl_win(keys: &HotkeyFlags) -> bool {
    keys.ctrl_win_pressed
}

fn backspace(keys: &HotkeyFlags) -> bool {
    keys.backspace_held
}

fn key_m(keys: &HotkeyFlags) -> bool {
    keys.m_held
}

/// The reset table, evaluated top to bottom every tick.
pub const RESET_RULES: [ResetRule; 3] = [
    ResetRule {
        name: "ctrl+win",
        predicate: ctrl_win,
        targets: ResetTargets::ABSOLUTE_AND_STEER,
    },
    ResetRule {
        name: "backspace",
        predicate: backspace,
        targets: ResetTargets::FULL,
    },
    ResetRule {
        name: "m",
        predicate: key_m,
        targets: ResetTargets::FULL,
    },
];

/// Output channel a snap rule forces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapChannel {
    /// Absolute lateral mouse output.
    X,
    /// Absolute vertical mouse output.
    Y,
    /// Relative lateral mouse output.
    Rx,
    /// Relative vertical mouse output.
    Ry,
}

/// One entry of the snap-to-extreme table.
///
/// Snaps force a single output channel to the range maximum, bypassing
/// all other processing; the accumulated state is untouched. Used for
/// manual axis-assignment and calibration workflows.
#[derive(Clone, Copy, Debug)]
pub struct SnapRule {
    /// Binding name, for diagnostics.
    pub name: &'static str,
    /// Key-combination predicate over the tick's sampled flags.
    pub predicate: fn(&HotkeyFlags) -> bool,
    /// Output channel to force.
    pub channel: SnapChannel,
}

fn numpad4_rshift(keys: &HotkeyFlags) -> bool {
    keys.numpad4_rshift
}

fn numpad2_rshift(keys: &HotkeyFlags) -> bool {
    keys.numpad2_rshift
}

fn numpad6_rshift(keys: &HotkeyFlags) -> bool {
    keys.numpad6_rshift
}

fn numpad8_rshift(keys: &HotkeyFlags) -> bool {
    keys.numpad8_rshift
}

/// The snap table, evaluated top to bottom every tick, after resets.
pub const SNAP_RULES: [SnapRule; 4] = [
    SnapRule {
        name: "numpad4+rshift",
        predicate: numpad4_rshift,
        channel: SnapChannel::X,
    },
    SnapRule {
        name: "numpad2+rshift",
        predicate: numpad2_rshift,
        channel: SnapChannel::Y,
    },
    SnapRule {
        name: "numpad6+rshift",
        predicate: numpad6_rshift,
        channel: SnapChannel::Rx,
    },
    SnapRule {
        name: "numpad8+rshift",
        predicate: numpad8_rshift,
        channel: SnapChannel::Ry,
    },
];

/// Evaluate the reset table, zeroing axis state and the already-computed
/// outputs of every subset whose predicate holds.
pub fn apply_reset_rules(rig: &mut AxisRig, outputs: &mut AxisOutputs, keys: &HotkeyFlags) {
    for rule in &RESET_RULES {
        if !(rule.predicate)(keys) {
            continue;
        }
        debug!(rule = rule.name, "hotkey reset");

        if rule.targets.x {
            rig.x.reset();
            outputs.x = 0;
        }
        if rule.targets.y {
            rig.y.reset();
            outputs.y = 0;
        }
        if rule.targets.steer {
            rig.steer.reset();
            outputs.slider = 0;
        }
        if rule.targets.throttle {
            rig.throttle.reset();
            outputs.dial = 0;
        }
        if rule.targets.pov {
            rig.pov_x = 0;
            rig.pov_y = 0;
        }
    }
}

/// Continuous soft centering: while Ctrl is held, decay the raw X, Y and
/// steering values by a fixed step, independent of the smart-centering
/// radius logic. State-only; the shaped output catches up next tick.
pub fn apply_soft_centering(rig: &mut AxisRig, keys: &HotkeyFlags, step: i32) {
    if !keys.ctrl_held {
        return;
    }
    soft_centering_filter(&mut rig.x.raw, step);
    soft_centering_filter(&mut rig.y.raw, step);
    soft_centering_filter(&mut rig.steer.raw, step);
}

/// Evaluate the snap table, forcing triggered output channels to `max`.
pub fn apply_snap_rules(outputs: &mut AxisOutputs, keys: &HotkeyFlags, max: i32) {
    for rule in &SNAP_RULES {
        if !(rule.predicate)(keys) {
            continue;
        }
        debug!(rule = rule.name, "axis snapped to max");

        match rule.channel {
            SnapChannel::X => outputs.x = max,
            SnapChannel::Y => outputs.y = max,
            SnapChannel::Rx => outputs.rx = max,
            SnapChannel::Ry => outputs.ry = max,
        }
    }
}
