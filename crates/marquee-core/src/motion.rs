//! Frame-rate independent position integration and wrap-around.

use crate::config::MotionConfig;
use crate::constants::{FORWARD, POSITION_RENORMALIZE_LIMIT, SCROLL_THRESHOLD, SPEED_DAMPING, WRAP_SPAN};
use crate::gate::GateState;
use crate::velocity::{velocity_factor, VelocitySample};

/// Unbounded horizontal accumulator for one strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub position: f64,
}

impl MotionState {
    /// Translation for this position, in percent of one tile.
    #[inline]
    pub fn wrapped(&self) -> f64 {
        wrap(self.position)
    }
}

/// Fold an unbounded position into `[-100, 0]`.
#[inline]
pub fn wrap(position: f64) -> f64 {
    -position.rem_euclid(WRAP_SPAN)
}

/// Bring a large position back near zero without changing its sign or its
/// wrapped value.
#[inline]
pub fn renormalize(position: f64) -> f64 {
    if position.abs() <= POSITION_RENORMALIZE_LIMIT {
        return position;
    }
    let folded = position.rem_euclid(WRAP_SPAN);
    if position < 0.0 && folded > 0.0 {
        folded - WRAP_SPAN
    } else {
        folded
    }
}

/// Whether a frame with this velocity moves the strip at all.
#[inline]
pub fn should_advance(config: &MotionConfig, gate: GateState, velocity: VelocitySample) -> bool {
    match gate {
        GateState::Paused => false,
        GateState::Running => config.continuous || velocity.smoothed.abs() >= SCROLL_THRESHOLD,
    }
}

/// Displacement for one frame of `delta` seconds, ignoring the gate.
#[inline]
pub fn frame_displacement(config: &MotionConfig, velocity: VelocitySample, delta: f64) -> f64 {
    let adjusted = config.base_speed * SPEED_DAMPING;
    let factor = velocity_factor(velocity.smoothed, config.clamp_factor);
    // an unclamped factor below -1 would reverse the strip; hold it at rest instead
    let multiplier = (1.0 + factor).max(0.0);
    FORWARD * adjusted * multiplier * delta
}

/// The per-frame transition.
///
/// Degenerate deltas (zero, negative, non-finite) and a paused gate leave
/// the state untouched.
pub fn advance(
    state: MotionState,
    config: &MotionConfig,
    delta: f64,
    gate: GateState,
    velocity: VelocitySample,
) -> MotionState {
    if !delta.is_finite() || delta <= 0.0 || !should_advance(config, gate, velocity) {
        return state;
    }
    let move_by = frame_displacement(config, velocity, delta);
    if !move_by.is_finite() {
        return state;
    }
    let position = state.position + move_by;
    let folded = renormalize(position);
    if folded != position {
        log::debug!("renormalized marquee position {position} -> {folded}");
    }
    MotionState { position: folded }
}
