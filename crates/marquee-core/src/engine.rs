use crate::clock::{Clock, FrameTimer};
use crate::config::MotionConfig;
use crate::gate::{Gate, GateState};
use crate::motion::{advance, MotionState};
use crate::velocity::{VelocitySample, VelocitySampler, VelocitySmoother};

/// One mounted strip: config, velocity pipeline, gate and position.
pub struct Marquee<C: Clock> {
    config: MotionConfig,
    clock: C,
    sampler: VelocitySampler,
    smoother: VelocitySmoother,
    timer: FrameTimer,
    state: MotionState,
    gate: Gate,
}

impl<C: Clock> Marquee<C> {
    pub fn new(config: MotionConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            sampler: VelocitySampler::new(),
            smoother: VelocitySmoother::new(),
            timer: FrameTimer::new(),
            state: MotionState::default(),
            gate: Gate::new(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn gate(&self) -> GateState {
        self.gate.state()
    }

    pub fn velocity(&self) -> VelocitySample {
        VelocitySample {
            raw: self.sampler.raw(),
            smoothed: self.smoother.value(),
        }
    }

    /// Feed the page's vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        let now = self.clock.now();
        self.sampler.record(offset, now);
    }

    pub fn pointer_enter(&mut self) {
        if self.gate.pointer_enter() {
            log::debug!("marquee paused at {:.3}", self.state.position);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.gate.pointer_leave() {
            log::debug!("marquee resumed at {:.3}", self.state.position);
        }
    }

    /// Run one frame. Returns the wrapped translation in percent of a tile.
    pub fn tick(&mut self) -> f64 {
        let now = self.clock.now();
        let dt = self.timer.delta(now);
        self.sampler.expire(now);
        self.smoother.step(self.sampler.raw(), dt);
        self.state = advance(self.state, &self.config, dt, self.gate.state(), self.velocity());
        self.state.wrapped()
    }
}
