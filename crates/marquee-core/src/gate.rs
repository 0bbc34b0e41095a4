/// Whether the integrator advances on a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Running,
    Paused,
}

/// Pointer-driven Running/Paused state machine.
///
/// Transitions take effect on the next frame and carry no catch-up: the
/// position simply stops and resumes where it was.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gate {
    state: GateState,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GateState::Running
    }

    /// Returns true when the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.transition(GateState::Paused)
    }

    /// Returns true when the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        self.transition(GateState::Running)
    }

    fn transition(&mut self, to: GateState) -> bool {
        let changed = self.state != to;
        self.state = to;
        changed
    }
}
