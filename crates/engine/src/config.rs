//! Engine configuration: the static constants of the control scheme.
//!
//! The configuration is an immutable struct constructed once at startup
//! and validated before the first tick. The defaults are the reference
//! constants of the control scheme; there is no dynamic schema.

use openstick_curves::CurveError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Positive endpoint of every axis range.
///
/// Half the signed 16-bit range, rounded: `i16::MAX * 0.5 + 0.5`.
pub const AXIS_MAX: i32 = 16384;

/// Negative endpoint of every axis range.
pub const AXIS_MIN: i32 = -16384;

/// Tick period the external scheduler is expected to run at, in
/// milliseconds. The engine itself never sleeps; this constant is the
/// contract with the timer collaborator.
pub const TICK_PERIOD_MS: u64 = 5;

/// Configuration-time validation errors.
///
/// There are no recoverable runtime errors in the tick path; everything
/// that could misbehave per tick is rejected here instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A sensitivity multiplier must be strictly positive.
    #[error("{axis} sensitivity must be > 0, got {value}")]
    InvalidSensitivity {
        /// Axis family the sensitivity belongs to.
        axis: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// A centering radius or speed of zero would never converge.
    #[error("{axis} centering must have radius > 0 and speed > 0, got radius {radius}, speed {speed}")]
    InvalidCentering {
        /// Axis family the centering tuple belongs to.
        axis: &'static str,
        /// The rejected radius (or range, for relative axes).
        radius: i32,
        /// The rejected per-tick speed.
        speed: i32,
    },

    /// Deadband thresholds are magnitudes and cannot be negative.
    #[error("{axis} deadband must be >= 0, got {value}")]
    InvalidDeadband {
        /// Axis family the deadband belongs to.
        axis: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// Stillness snapshot cadences of zero ticks never sample.
    #[error("stillness cadences must be > 0 ticks, got slow {slow}, fast {fast}")]
    InvalidStillnessCadence {
        /// The rejected slow cadence.
        slow: u32,
        /// The rejected fast cadence.
        fast: u32,
    },

    /// The soft-centering step must move the value.
    #[error("soft-centering step must be > 0, got {value}")]
    InvalidSoftCenteringStep {
        /// The rejected value.
        value: i32,
    },

    /// The wheel increment is a magnitude applied per wheel notch.
    #[error("throttle wheel increment must be >= 0, got {value}")]
    InvalidWheelIncrement {
        /// The rejected value.
        value: i32,
    },

    /// A curve family failed validation.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Radius/speed pair for a smart-centering controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenteringConfig {
    /// Magnitude below which the per-tick decay applies.
    pub radius: i32,
    /// Per-tick decay amount.
    pub speed: i32,
}

/// Configuration of the absolute mouse axes (X, Y).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteAxisConfig {
    /// Multiplier applied to each pointer delta.
    pub sensitivity: i32,
    /// Power-curve exponent (lightly exponential for smooth aim).
    pub curve_exponent: f64,
    /// Smart-centering tuple.
    pub centering: CenteringConfig,
    /// Output deadband threshold.
    pub deadband: i32,
}

/// Configuration of the relative mouse axes (RX, RY).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeAxisConfig {
    /// Multiplier applied to each pointer delta.
    pub sensitivity: i32,
    /// Magnitude the axis must exceed before hard centering steps in.
    pub range: i32,
    /// Size of one hard-centering recovery step.
    pub speed: i32,
    /// Output deadband threshold.
    pub deadband: i32,
}

/// Configuration of the SRV steering axis (slider output).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SteeringAxisConfig {
    /// Multiplier applied to each lateral pointer delta.
    pub sensitivity: i32,
    /// Power-curve exponent for smooth steering.
    pub curve_exponent: f64,
    /// Output deadband threshold.
    pub deadband: i32,
}

/// Configuration of the SRV throttle axis (dial output).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleAxisConfig {
    /// Multiplier applied to each vertical pointer delta.
    pub sensitivity: i32,
    /// Smart-centering tuple (tight radius, for an easy halt).
    pub centering: CenteringConfig,
    /// Step applied per wheel notch (wheel-up pulls back, wheel-down
    /// pushes forward).
    pub wheel_increment: i32,
    /// Output deadband threshold.
    pub deadband: i32,
}

/// Reserved configuration of the physical-joystick pass-through family.
///
/// Declared and validated but not wired to any output; the reference
/// configuration keeps this surface for a future z/rz pass-through.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservedJoystickConfig {
    /// Power-curve exponent of the reserved family.
    pub curve_exponent: f64,
    /// Output deadband threshold of the reserved family.
    pub deadband: i32,
}

/// Sampling cadences of the stillness gate, in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StillnessConfig {
    /// Slow snapshot cadence.
    pub slow_period: u32,
    /// Fast snapshot cadence.
    pub fast_period: u32,
}

/// Complete engine configuration.
///
/// Constructed once at startup, validated by [`EngineConfig::validate`]
/// (the engine constructor does this for you), then never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Absolute mouse axes (X, Y).
    pub absolute: AbsoluteAxisConfig,
    /// Relative mouse axes (RX, RY).
    pub relative: RelativeAxisConfig,
    /// SRV steering axis (slider).
    pub steering: SteeringAxisConfig,
    /// SRV throttle axis (dial).
    pub throttle: ThrottleAxisConfig,
    /// Reserved joystick pass-through family.
    pub joystick: ReservedJoystickConfig,
    /// Stillness gate cadences.
    pub stillness: StillnessConfig,
    /// Per-tick decay applied to X, Y and steering while the
    /// soft-centering modifier is held.
    pub soft_centering_step: i32,
    /// Tick period contract with the external scheduler, milliseconds.
    pub tick_period_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            absolute: AbsoluteAxisConfig {
                sensitivity: 60,
                curve_exponent: 1.35,
                centering: CenteringConfig {
                    radius: 3000,
                    speed: 25,
                },
                deadband: 20,
            },
            relative: RelativeAxisConfig {
                sensitivity: 85,
                range: 450,
                speed: 500,
                deadband: 500,
            },
            steering: SteeringAxisConfig {
                sensitivity: 70,
                curve_exponent: 1.6,
                deadband: 20,
            },
            throttle: ThrottleAxisConfig {
                sensitivity: 18,
                centering: CenteringConfig {
                    radius: 750,
                    speed: 25,
                },
                wheel_increment: 250,
                deadband: 100,
            },
            joystick: ReservedJoystickConfig {
                curve_exponent: 2.0,
                deadband: 50,
            },
            stillness: StillnessConfig {
                slow_period: 60,
                fast_period: 30,
            },
            soft_centering_step: 100,
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found. Curve exponents are
    /// checked by constructing the curves they would produce, so a bad
    /// exponent surfaces here and not per tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sensitivity("absolute", self.absolute.sensitivity)?;
        validate_sensitivity("relative", self.relative.sensitivity)?;
        validate_sensitivity("steering", self.steering.sensitivity)?;
        validate_sensitivity("throttle", self.throttle.sensitivity)?;

        validate_centering(
            "absolute",
            self.absolute.centering.radius,
            self.absolute.centering.speed,
        )?;
        validate_centering(
            "throttle",
            self.throttle.centering.radius,
            self.throttle.centering.speed,
        )?;
        validate_centering("relative", self.relative.range, self.relative.speed)?;

        validate_deadband("absolute", self.absolute.deadband)?;
        validate_deadband("relative", self.relative.deadband)?;
        validate_deadband("steering", self.steering.deadband)?;
        validate_deadband("throttle", self.throttle.deadband)?;
        validate_deadband("joystick", self.joystick.deadband)?;

        if self.stillness.slow_period == 0 || self.stillness.fast_period == 0 {
            return Err(ConfigError::InvalidStillnessCadence {
                slow: self.stillness.slow_period,
                fast: self.stillness.fast_period,
            });
        }
        if self.soft_centering_step <= 0 {
            return Err(ConfigError::InvalidSoftCenteringStep {
                value: self.soft_centering_step,
            });
        }
        if self.throttle.wheel_increment < 0 {
            return Err(ConfigError::InvalidWheelIncrement {
                value: self.throttle.wheel_increment,
            });
        }

        // Exponents are validated through the curves they build,
        // including the reserved joystick family.
        openstick_curves::ExpoCurve::new(self.absolute.curve_exponent, AXIS_MAX)?;
        openstick_curves::ExpoCurve::new(self.steering.curve_exponent, AXIS_MAX)?;
        openstick_curves::ExpoCurve::new(self.joystick.curve_exponent, AXIS_MAX)?;

        Ok(())
    }
}

fn validate_sensitivity(axis: &'static str, value: i32) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidSensitivity { axis, value });
    }
    Ok(())
}

fn validate_centering(axis: &'static str, radius: i32, speed: i32) -> Result<(), ConfigError> {
    if radius <= 0 || speed <= 0 {
        return Err(ConfigError::InvalidCentering {
            axis,
            radius,
            speed,
        });
    }
    Ok(())
}

fn validate_deadband(axis: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::InvalidDeadband { axis, value });
    }
    Ok(())
}
