// Tests for scroll velocity sampling, spring smoothing and factor mapping.

use marquee_core::*;

#[test]
fn sampler_starts_at_rest() {
    let mut sampler = VelocitySampler::new();
    assert_eq!(sampler.raw(), 0.0);
    sampler.record(500.0, 1.0);
    // the first sample only sets the baseline
    assert_eq!(sampler.raw(), 0.0);
}

#[test]
fn sampler_derives_signed_velocity() {
    let mut sampler = VelocitySampler::new();
    sampler.record(0.0, 0.0);
    sampler.record(100.0, 0.1);
    assert!((sampler.raw() - 1000.0).abs() < 1e-9);
    sampler.record(40.0, 0.2);
    assert!((sampler.raw() + 600.0).abs() < 1e-9);
}

#[test]
fn sampler_survives_same_timestamp_bursts() {
    let mut sampler = VelocitySampler::new();
    sampler.record(0.0, 0.0);
    sampler.record(100.0, 0.1);
    sampler.record(150.0, 0.1);
    assert!(sampler.raw().is_finite());
    assert!((sampler.raw() - 1000.0).abs() < 1e-9);
    // next sample measures from the latest offset
    sampler.record(250.0, 0.2);
    assert!((sampler.raw() - 1000.0).abs() < 1e-9);
}

#[test]
fn sampler_ignores_non_finite_input() {
    let mut sampler = VelocitySampler::new();
    sampler.record(0.0, 0.0);
    sampler.record(f64::NAN, 0.1);
    sampler.record(100.0, f64::INFINITY);
    assert_eq!(sampler.raw(), 0.0);
    sampler.record(100.0, 0.1);
    assert!((sampler.raw() - 1000.0).abs() < 1e-9);
}

#[test]
fn sampler_expires_after_idle_gap() {
    let mut sampler = VelocitySampler::new();
    sampler.record(0.0, 0.0);
    sampler.record(100.0, 0.1);
    sampler.expire(0.15);
    assert!(sampler.raw() > 0.0, "expired too early");
    sampler.expire(0.1 + VELOCITY_STALE_AFTER_SEC + 1e-9);
    assert_eq!(sampler.raw(), 0.0);
}

#[test]
fn sampler_rebaselines_after_idle_gap() {
    let mut sampler = VelocitySampler::new();
    sampler.record(0.0, 0.0);
    sampler.record(100.0, 0.1);
    sampler.expire(1.0);
    // resumed scrolling is not averaged over the two idle seconds
    sampler.record(300.0, 2.0);
    assert_eq!(sampler.raw(), 0.0);
    sampler.record(400.0, 2.1);
    assert!((sampler.raw() - 1000.0).abs() < 1e-9);
}

#[test]
fn engine_measures_fresh_velocity_after_idle() {
    let clock = ManualClock::new(0.0);
    let mut engine = Marquee::new(MotionConfig::new(3.0), clock.clone());
    engine.on_scroll(0.0);
    clock.advance(0.1);
    engine.on_scroll(100.0);
    clock.advance(2.0);
    engine.tick();
    assert_eq!(engine.velocity().raw, 0.0);

    engine.on_scroll(300.0);
    clock.advance(0.05);
    engine.on_scroll(400.0);
    assert!((engine.velocity().raw - 2000.0).abs() < 1e-6);
}

#[test]
fn smoother_converges_without_overshoot() {
    let mut smoother = VelocitySmoother::new();
    let target = 1000.0;
    let mut prev = smoother.value();
    for _ in 0..120 {
        let v = smoother.step(target, 1.0 / 60.0);
        assert!(v >= prev - 1e-9, "smoothed value went backwards: {prev} -> {v}");
        assert!(v <= target + 1e-9, "overshoot: {v}");
        prev = v;
    }
    assert!((prev - target).abs() < 0.5, "not converged: {prev}");
}

#[test]
fn smoother_lags_behind_a_step() {
    let mut smoother = VelocitySmoother::new();
    let first = smoother.step(1000.0, 1.0 / 60.0);
    assert!(first > 0.0 && first < 100.0, "no lag: {first}");
}

#[test]
fn smoother_is_independent_of_step_slicing() {
    let mut fine = VelocitySmoother::new();
    let mut coarse = VelocitySmoother::new();
    for _ in 0..60 {
        fine.step(800.0, 1.0 / 60.0);
    }
    for _ in 0..4 {
        coarse.step(800.0, 0.25);
    }
    assert!((fine.value() - coarse.value()).abs() < 1e-6);
}

#[test]
fn smoother_is_stable_for_huge_steps() {
    let mut smoother = VelocitySmoother::new();
    let v = smoother.step(3000.0, 30.0);
    assert!((v - 3000.0).abs() < 1e-6);
    assert!(smoother.step(0.0, 0.0).is_finite());
    assert_eq!(smoother.step(f64::NAN, 0.1), v);
}

#[test]
fn factor_maps_window_linearly() {
    assert_eq!(velocity_factor(0.0, false), 0.0);
    assert!((velocity_factor(5000.0, false) - 2.5).abs() < 1e-12);
    assert!((velocity_factor(10_000.0, true) - 5.0).abs() < 1e-12);
}

#[test]
fn factor_clamps_or_extrapolates() {
    assert_eq!(velocity_factor(20_000.0, true), 5.0);
    assert!((velocity_factor(20_000.0, false) - 10.0).abs() < 1e-12);
    assert_eq!(velocity_factor(-1000.0, true), 0.0);
    assert!((velocity_factor(-1000.0, false) + 0.5).abs() < 1e-12);
}

#[test]
fn map_range_handles_reversed_and_empty_windows() {
    assert_eq!(map_range(5.0, [0.0, 10.0], [10.0, 0.0], false), 5.0);
    assert_eq!(map_range(20.0, [0.0, 10.0], [10.0, 0.0], true), 0.0);
    assert_eq!(map_range(3.0, [1.0, 1.0], [4.0, 8.0], false), 4.0);
}

#[test]
fn frame_timer_guards_degenerate_timestamps() {
    let mut timer = FrameTimer::new();
    assert_eq!(timer.delta(10.0), 0.0);
    assert!((timer.delta(10.5) - 0.5).abs() < 1e-12);
    assert_eq!(timer.delta(9.0), 0.0);
    assert!((timer.delta(9.25) - 0.25).abs() < 1e-12);
    assert_eq!(timer.delta(f64::NAN), 0.0);
    timer.reset();
    assert_eq!(timer.delta(20.0), 0.0);
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(1.0);
    let handle = clock.clone();
    handle.advance(0.5);
    assert_eq!(clock.now(), 1.5);
    handle.set(4.0);
    assert_eq!(clock.now(), 4.0);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(a >= 0.0);
    assert!(b >= a);
}
