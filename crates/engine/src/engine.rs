//! The axis-synthesis engine.
//!
//! One [`AxisEngine`] owns all persistent axis state and turns one
//! [`TickInput`] into one [`AxisOutputs`] per tick. Every tick is a
//! synchronous, allocation-free step over the previous tick's final
//! state; the external scheduler drives it once per 5 ms.

use openstick_curves::ExpoCurve;
use openstick_filters::prelude::*;
use tracing::{info, trace};

use crate::axis::AxisRig;
use crate::config::{AXIS_MAX, AXIS_MIN, ConfigError, EngineConfig};
use crate::hotkeys;
use crate::ports::{AxisOutputs, TickInput};

/// The per-tick axis-synthesis engine.
///
/// Construction validates the configuration and precomputes the shaping
/// curves; after that, [`AxisEngine::tick`] never fails and never
/// allocates.
///
/// # Example
///
/// ```
/// use openstick_engine::{AxisEngine, EngineConfig, TickInput};
///
/// let mut engine = AxisEngine::new(EngineConfig::default())?;
/// let outputs = engine.tick(&TickInput::motion(100, 0));
///
/// assert!(outputs.x > 0);
/// # Ok::<(), openstick_engine::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct AxisEngine {
    config: EngineConfig,
    mouse_curve: ExpoCurve,
    steer_curve: ExpoCurve,
    absolute_acc: AccumulatorState,
    relative_acc: AccumulatorState,
    steering_acc: AccumulatorState,
    throttle_acc: AccumulatorState,
    mouse_centering: CenteringState,
    throttle_centering: CenteringState,
    relative_centering: HardCenteringState,
    gate: StillnessState,
    rig: AxisRig,
}

impl AxisEngine {
    /// Build an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation;
    /// see [`EngineConfig::validate`]. No error can occur after
    /// construction.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mouse_curve = ExpoCurve::new(config.absolute.curve_exponent, AXIS_MAX)?;
        let steer_curve = ExpoCurve::new(config.steering.curve_exponent, AXIS_MAX)?;
        // The reserved joystick family is validated even though nothing
        // consumes its curve yet.
        ExpoCurve::new(config.joystick.curve_exponent, AXIS_MAX)?;

        info!(
            absolute_sens = config.absolute.sensitivity,
            relative_sens = config.relative.sensitivity,
            steering_sens = config.steering.sensitivity,
            throttle_sens = config.throttle.sensitivity,
            tick_period_ms = config.tick_period_ms,
            "axis engine initialized"
        );

        Ok(Self {
            mouse_curve,
            steer_curve,
            absolute_acc: AccumulatorState::new(config.absolute.sensitivity, AXIS_MIN, AXIS_MAX),
            relative_acc: AccumulatorState::new(config.relative.sensitivity, AXIS_MIN, AXIS_MAX),
            steering_acc: AccumulatorState::new(config.steering.sensitivity, AXIS_MIN, AXIS_MAX),
            throttle_acc: AccumulatorState::new(config.throttle.sensitivity, AXIS_MIN, AXIS_MAX),
            mouse_centering: CenteringState::new(
                config.absolute.centering.radius,
                config.absolute.centering.speed,
            ),
            throttle_centering: CenteringState::new(
                config.throttle.centering.radius,
                config.throttle.centering.speed,
            ),
            relative_centering: HardCenteringState::new(config.relative.range, config.relative.speed),
            gate: StillnessState::new(config.stillness.slow_period, config.stillness.fast_period),
            rig: AxisRig::new(),
            config,
        })
    }

    /// Run one tick over the sampled input, producing the output vector.
    pub fn tick(&mut self, input: &TickInput) -> AxisOutputs {
        // 1. Integrate raw deltas into all six axes, clamped to range.
        accumulator_filter(&mut self.rig.x.raw, input.delta_x, &self.absolute_acc);
        accumulator_filter(&mut self.rig.y.raw, input.delta_y, &self.absolute_acc);
        accumulator_filter(&mut self.rig.rx.raw, input.delta_x, &self.relative_acc);
        accumulator_filter(&mut self.rig.ry.raw, input.delta_y, &self.relative_acc);
        accumulator_filter(&mut self.rig.steer.raw, input.delta_x, &self.steering_acc);
        accumulator_filter(&mut self.rig.throttle.raw, input.delta_y, &self.throttle_acc);

        // 2. Wheel notches step the throttle directly: up pulls back,
        //    down pushes forward.
        let notches = i64::from(input.wheel_down) - i64::from(input.wheel_up);
        bounded_add(
            &mut self.rig.throttle.raw,
            notches * i64::from(self.config.throttle.wheel_increment),
            AXIS_MIN,
            AXIS_MAX,
        );

        // 3. Spring return for the absolute axes and the throttle.
        smart_centering_filter(&mut self.rig.x.raw, &self.mouse_centering);
        smart_centering_filter(&mut self.rig.y.raw, &self.mouse_centering);
        smart_centering_filter(&mut self.rig.throttle.raw, &self.throttle_centering);

        // 4. Stillness-gated recovery of the relative axes. While the
        //    pointer is moving they are pure rate axes with no decay.
        self.gate.tick(input.delta_x);
        if self.gate.is_still() {
            hard_centering_filter(&mut self.rig.rx.raw, &self.relative_centering);
            hard_centering_filter(&mut self.rig.ry.raw, &self.relative_centering);
        }

        // 5. Curve shaping sees the true accumulated values.
        self.rig.x.curved = self.mouse_curve.shape(self.rig.x.raw);
        self.rig.y.curved = self.mouse_curve.shape(self.rig.y.raw);
        self.rig.steer.curved = self.steer_curve.shape(self.rig.steer.raw);

        // 6. Deadband only at the output stage.
        let mut outputs = AxisOutputs {
            x: deadband_filter(self.rig.x.curved, self.config.absolute.deadband),
            y: deadband_filter(self.rig.y.curved, self.config.absolute.deadband),
            rx: deadband_filter(self.rig.rx.raw, self.config.relative.deadband),
            ry: deadband_filter(self.rig.ry.raw, self.config.relative.deadband),
            slider: deadband_filter(self.rig.steer.curved, self.config.steering.deadband),
            dial: deadband_filter(self.rig.throttle.raw, self.config.throttle.deadband),
        };

        // 7. Hotkey overrides win over everything computed above.
        hotkeys::apply_reset_rules(&mut self.rig, &mut outputs, &input.hotkeys);
        hotkeys::apply_soft_centering(&mut self.rig, &input.hotkeys, self.config.soft_centering_step);

        // 8. Manual axis-assignment fallbacks are applied last.
        hotkeys::apply_snap_rules(&mut outputs, &input.hotkeys, AXIS_MAX);

        trace!(
            x = outputs.x,
            y = outputs.y,
            rx = outputs.rx,
            ry = outputs.ry,
            slider = outputs.slider,
            dial = outputs.dial,
            "tick outputs"
        );

        outputs
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The persistent axis state.
    pub fn rig(&self) -> &AxisRig {
        &self.rig
    }

    /// Mutable access to the axis state, for calibration harnesses and
    /// tests that need to preset axis values.
    pub fn rig_mut(&mut self) -> &mut AxisRig {
        &mut self.rig
    }

    /// The stillness gate state.
    pub fn gate(&self) -> &StillnessState {
        &self.gate
    }

    /// The shaping curve of the absolute mouse axes.
    pub fn mouse_curve(&self) -> &ExpoCurve {
        &self.mouse_curve
    }

    /// The shaping curve of the steering axis.
    pub fn steer_curve(&self) -> &ExpoCurve {
        &self.steer_curve
    }
}
