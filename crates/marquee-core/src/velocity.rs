//! Scroll velocity sampling and smoothing.

use crate::constants::{
    SPRING_STIFFNESS, VELOCITY_FACTOR_RANGE, VELOCITY_INPUT_RANGE, VELOCITY_STALE_AFTER_SEC,
};

/// Raw and smoothed scroll velocity observed at one moment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocitySample {
    pub raw: f64,
    pub smoothed: f64,
}

/// Derives an instantaneous velocity from successive scroll offsets.
#[derive(Clone, Debug, Default)]
pub struct VelocitySampler {
    last: Option<(f64, f64)>, // (offset, time)
    raw: f64,
}

impl VelocitySampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scroll offset observed at `now` (seconds).
    pub fn record(&mut self, offset: f64, now: f64) {
        if !offset.is_finite() || !now.is_finite() {
            return;
        }
        if let Some((prev_offset, prev_time)) = self.last {
            let dt = now - prev_time;
            if dt <= 0.0 {
                // same-timestamp burst: keep the last velocity, move the baseline
                self.last = Some((offset, prev_time));
                return;
            }
            self.raw = (offset - prev_offset) / dt;
        }
        self.last = Some((offset, now));
    }

    /// Drop the velocity back to zero once scrolling has gone quiet.
    ///
    /// The baseline is forgotten too, so the first event after the idle gap
    /// starts a new measurement instead of spreading its movement over the
    /// whole gap.
    pub fn expire(&mut self, now: f64) {
        if let Some((_, at)) = self.last {
            if now - at >= VELOCITY_STALE_AFTER_SEC {
                self.raw = 0.0;
                self.last = None;
            }
        }
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }
}

/// Critically damped spring chasing the raw velocity.
///
/// Uses the closed-form solution of `x'' = -k (x - target) - 2 sqrt(k) x'`
/// with the target held over the step, so any step length is stable and
/// the result does not depend on how a span of time is sliced.
#[derive(Clone, Debug, Default)]
pub struct VelocitySmoother {
    value: f64,
    rate: f64,
}

impl VelocitySmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if !target.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let omega = SPRING_STIFFNESS.sqrt();
        let e0 = self.value - target;
        let v0 = self.rate;
        let decay = (-omega * dt).exp();
        let c = v0 + omega * e0;
        self.value = target + (e0 + c * dt) * decay;
        self.rate = (v0 - omega * c * dt) * decay;
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Linear map from `input` to `output`; clamps to `output` when asked,
/// extrapolates otherwise.
#[inline]
pub fn map_range(value: f64, input: [f64; 2], output: [f64; 2], clamp: bool) -> f64 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let t = (value - input[0]) / span;
    let mapped = output[0] + t * (output[1] - output[0]);
    if clamp {
        let (lo, hi) = if output[0] <= output[1] {
            (output[0], output[1])
        } else {
            (output[1], output[0])
        };
        mapped.clamp(lo, hi)
    } else {
        mapped
    }
}

/// Speed modulation derived from the smoothed scroll velocity.
#[inline]
pub fn velocity_factor(smoothed: f64, clamp: bool) -> f64 {
    map_range(smoothed, VELOCITY_INPUT_RANGE, VELOCITY_FACTOR_RANGE, clamp)
}
