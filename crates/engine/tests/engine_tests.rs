//! End-to-end scenarios over the full tick pipeline.
//!
//! Each test drives a default-configured engine through a short input
//! history and checks the externally visible contract: the six outputs
//! and, where the scenario is about persistence, the raw axis state.

use openstick_engine::{
    AXIS_MAX, AXIS_MIN, AxisEngine, AxisOutputs, EngineConfig, HotkeyFlags, TickInput,
};

fn engine() -> AxisEngine {
    match AxisEngine::new(EngineConfig::default()) {
        Ok(engine) => engine,
        Err(e) => panic!("engine construction failed: {}", e),
    }
}

fn quiet() -> TickInput {
    TickInput::default()
}

fn with_keys(hotkeys: HotkeyFlags) -> TickInput {
    TickInput {
        hotkeys,
        ..TickInput::default()
    }
}

#[test]
fn test_aim_then_release_springs_back_inside_radius() {
    let mut engine = engine();

    // A short flick leaves the absolute axis inside the centering
    // radius: 20 * 60 = 1200, minus one 25 decay the same tick.
    engine.tick(&TickInput::motion(20, 0));
    assert_eq!(engine.rig().x.raw, 1175);

    // Hands off: the spring pulls 25 per tick. 47 ticks later the value
    // crosses zero and starts oscillating around it.
    for _ in 0..46 {
        engine.tick(&quiet());
    }
    assert_eq!(engine.rig().x.raw, 25);

    engine.tick(&quiet());
    assert_eq!(engine.rig().x.raw, 0);

    // Exactly zero is a fixed point of the spring.
    engine.tick(&quiet());
    assert_eq!(engine.rig().x.raw, 0);
}

#[test]
fn test_large_deflection_holds_without_decay() {
    let mut engine = engine();

    engine.tick(&TickInput::motion(100, 0));
    assert_eq!(engine.rig().x.raw, 6000);

    // Outside the 3000 radius the absolute axis holds indefinitely.
    for _ in 0..500 {
        engine.tick(&quiet());
    }
    assert_eq!(engine.rig().x.raw, 6000);
}

#[test]
fn test_wheel_walks_throttle_to_full_forward() {
    let mut engine = engine();
    let mut last = AxisOutputs::default();

    for _ in 0..100 {
        last = engine.tick(&TickInput {
            wheel_down: 1,
            ..TickInput::default()
        });
    }

    assert_eq!(last.dial, AXIS_MAX);
    assert_eq!(engine.rig().throttle.raw, AXIS_MAX);
}

#[test]
fn test_full_throttle_holds_then_wheel_up_backs_off() {
    let mut engine = engine();
    for _ in 0..100 {
        engine.tick(&TickInput {
            wheel_down: 1,
            ..TickInput::default()
        });
    }

    // Outside the 750 radius nothing decays the throttle.
    for _ in 0..50 {
        engine.tick(&quiet());
    }
    assert_eq!(engine.rig().throttle.raw, AXIS_MAX);

    let outputs = engine.tick(&TickInput {
        wheel_up: 1,
        ..TickInput::default()
    });
    assert_eq!(outputs.dial, AXIS_MAX - 250);
}

#[test]
fn test_throttle_near_center_drifts_to_halt() {
    let mut engine = engine();

    // Two forward notches: 250 - 25 = 225, then 475 - 25 = 450.
    engine.tick(&TickInput {
        wheel_down: 1,
        ..TickInput::default()
    });
    engine.tick(&TickInput {
        wheel_down: 1,
        ..TickInput::default()
    });
    assert_eq!(engine.rig().throttle.raw, 450);

    // Inside the 750 radius the tight spring drains it; 18 ticks later
    // it reaches zero and the dial reads a clean stop.
    for _ in 0..18 {
        engine.tick(&quiet());
    }
    assert_eq!(engine.rig().throttle.raw, 0);
    assert_eq!(engine.tick(&quiet()).dial, 0);
}

#[test]
fn test_ctrl_win_resets_flight_axes_but_not_throttle() {
    let mut engine = engine();
    engine.tick(&TickInput::motion(100, 100));
    engine.tick(&TickInput {
        wheel_down: 4,
        ..TickInput::default()
    });
    let throttle_before = engine.rig().throttle.raw;
    assert!(throttle_before > 750);

    let outputs = engine.tick(&with_keys(HotkeyFlags {
        ctrl_win_pressed: true,
        ..HotkeyFlags::default()
    }));

    assert_eq!(outputs.x, 0);
    assert_eq!(outputs.y, 0);
    assert_eq!(outputs.slider, 0);
    assert_eq!(engine.rig().x.raw, 0);
    assert_eq!(engine.rig().y.raw, 0);
    assert_eq!(engine.rig().steer.raw, 0);

    // The throttle is untouched by the flight-axis reset.
    assert_eq!(engine.rig().throttle.raw, throttle_before);
    assert_eq!(outputs.dial, throttle_before);
}

#[test]
fn test_m_key_matches_backspace_reset() {
    let run = |hotkeys: HotkeyFlags| {
        let mut engine = engine();
        engine.tick(&TickInput::motion(150, -80));
        engine.tick(&TickInput {
            wheel_down: 4,
            ..TickInput::default()
        });
        let outputs = engine.tick(&with_keys(hotkeys));
        (outputs, *engine.rig())
    };

    let (backspace_out, backspace_rig) = run(HotkeyFlags {
        backspace_held: true,
        ..HotkeyFlags::default()
    });
    let (m_out, m_rig) = run(HotkeyFlags {
        m_held: true,
        ..HotkeyFlags::default()
    });

    assert_eq!(backspace_out, m_out);
    assert_eq!(backspace_rig, m_rig);
    assert_eq!(backspace_out.x, 0);
    assert_eq!(backspace_out.dial, 0);
}

#[test]
fn test_full_reset_leaves_relative_axes_alone() {
    let mut engine = engine();
    engine.tick(&TickInput::motion(100, 100));
    let rx_before = engine.rig().rx.raw;
    let ry_before = engine.rig().ry.raw;
    assert_ne!(rx_before, 0);

    let outputs = engine.tick(&with_keys(HotkeyFlags {
        backspace_held: true,
        ..HotkeyFlags::default()
    }));

    // The reset tick carries no motion, and the gate still reads still
    // this early, so each relative axis takes one 500 recovery step.
    assert_eq!(engine.rig().rx.raw, rx_before - 500);
    assert_eq!(engine.rig().ry.raw, ry_before - 500);
    assert_eq!(outputs.rx, rx_before - 500);
}

#[test]
fn test_soft_centering_drains_steering_to_zero() {
    let mut engine = engine();
    engine.tick(&TickInput::motion(100, 0));
    assert_eq!(engine.rig().steer.raw, 7000);

    let ctrl = with_keys(HotkeyFlags {
        ctrl_held: true,
        ..HotkeyFlags::default()
    });
    for _ in 0..70 {
        engine.tick(&ctrl);
    }

    assert_eq!(engine.rig().steer.raw, 0);
    assert_eq!(engine.tick(&quiet()).slider, 0);
}

#[test]
fn test_soft_centering_stacks_with_spring_inside_radius() {
    let mut engine = engine();
    engine.rig_mut().x.raw = 1000;

    // Inside the radius both decays apply: 25 from the spring before
    // shaping, then 100 from the held modifier after outputs.
    engine.tick(&with_keys(HotkeyFlags {
        ctrl_held: true,
        ..HotkeyFlags::default()
    }));

    assert_eq!(engine.rig().x.raw, 875);
}

#[test]
fn test_relative_axes_recover_after_motion_stops() {
    let mut engine = engine();

    // Sustained motion; by the first fast-cadence boundary the gate
    // reads moving and the relative axes saturate. 119 ticks ends the
    // motion between cadence boundaries, where the gate reads moving.
    for _ in 0..119 {
        engine.tick(&TickInput::motion(50, 0));
    }
    assert_eq!(engine.rig().rx.raw, AXIS_MAX);

    // Hands off. Within one slow period the snapshots converge, and
    // each still tick takes one 500 step until the value is inside the
    // 450 range. From 16384 that is 32 steps, landing on 384.
    for _ in 0..120 {
        engine.tick(&quiet());
    }
    assert_eq!(engine.rig().rx.raw, 384);

    // 384 is inside both the recovery range and the 500 deadband.
    assert_eq!(engine.tick(&quiet()).rx, 0);
}

#[test]
fn test_snap_keys_force_their_outputs() {
    let cases: [(HotkeyFlags, fn(&AxisOutputs) -> i32); 4] = [
        (
            HotkeyFlags {
                numpad4_rshift: true,
                ..HotkeyFlags::default()
            },
            |o: &AxisOutputs| o.x,
        ),
        (
            HotkeyFlags {
                numpad2_rshift: true,
                ..HotkeyFlags::default()
            },
            |o: &AxisOutputs| o.y,
        ),
        (
            HotkeyFlags {
                numpad6_rshift: true,
                ..HotkeyFlags::default()
            },
            |o: &AxisOutputs| o.rx,
        ),
        (
            HotkeyFlags {
                numpad8_rshift: true,
                ..HotkeyFlags::default()
            },
            |o: &AxisOutputs| o.ry,
        ),
    ];

    for (hotkeys, read) in cases {
        let mut engine = engine();
        let outputs = engine.tick(&with_keys(hotkeys));
        assert_eq!(read(&outputs), AXIS_MAX);
    }
}

#[test]
fn test_snap_overrides_a_same_tick_reset() {
    let mut engine = engine();
    engine.tick(&TickInput::motion(100, 0));

    let outputs = engine.tick(&with_keys(HotkeyFlags {
        backspace_held: true,
        numpad4_rshift: true,
        ..HotkeyFlags::default()
    }));

    // The reset zeroes the state, but the snap is applied after it and
    // wins on the output for this tick.
    assert_eq!(outputs.x, AXIS_MAX);
    assert_eq!(engine.rig().x.raw, 0);
}

#[test]
fn test_deadband_masks_residual_output_only() {
    let mut engine = engine();

    // 600 raw lands inside the 500 recovery step's overshoot zone:
    // 600 - 500 = 100, inside the range, inside the deadband.
    engine.rig_mut().rx.raw = 600;
    let outputs = engine.tick(&quiet());

    assert_eq!(outputs.rx, 0);
    // The raw state keeps the residual; the deadband never writes back.
    assert_eq!(engine.rig().rx.raw, 100);
}

#[test]
fn test_opposite_motion_cancels_symmetrically() {
    let mut engine = engine();

    engine.tick(&TickInput::motion(100, 0));
    let outputs = engine.tick(&TickInput::motion(-100, 0));

    assert_eq!(engine.rig().x.raw, 0);
    assert_eq!(outputs.x, 0);
    assert_eq!(outputs.slider, 0);
}

#[test]
fn test_sustained_extremes_clamp_every_axis() {
    let mut engine = engine();
    let mut last = AxisOutputs::default();

    for _ in 0..200 {
        last = engine.tick(&TickInput::motion(i32::MAX, i32::MIN));
    }

    assert_eq!(last.x, engine.mouse_curve().shape(AXIS_MAX));
    assert_eq!(engine.rig().x.raw, AXIS_MAX);
    assert_eq!(engine.rig().y.raw, AXIS_MIN);
    assert_eq!(engine.rig().steer.raw, AXIS_MAX);
    assert_eq!(engine.rig().throttle.raw, AXIS_MIN);
}
