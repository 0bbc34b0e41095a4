// Motion tuning constants shared by the web front-end and the simulator.

// Integrator
pub const SPEED_DAMPING: f64 = 0.2; // makes raw config units "slow"
pub const FORWARD: f64 = 1.0; // strips only ever move forward
pub const SCROLL_THRESHOLD: f64 = 5.0; // |smoothed| needed to move a non-continuous strip

// Wrapper
pub const WRAP_SPAN: f64 = 100.0; // one content tile, in percent
pub const POSITION_RENORMALIZE_LIMIT: f64 = 1.0e6; // fold |position| back below this

// Velocity factor mapping: smoothed px/s window -> factor window
pub const VELOCITY_INPUT_RANGE: [f64; 2] = [0.0, 10_000.0];
pub const VELOCITY_FACTOR_RANGE: [f64; 2] = [0.0, 5.0];

// Spring smoothing (critically damped)
pub const SPRING_STIFFNESS: f64 = 100.0; // natural frequency = sqrt(stiffness)

// Sampler
pub const VELOCITY_STALE_AFTER_SEC: f64 = 0.1; // raw velocity drops to 0 after this idle gap

// Replicator multiplicities
pub const TEXT_COPIES: usize = 5;
pub const ITEM_COPIES: usize = 3;
pub const VIEWPORT_COVERAGE: f64 = 2.0; // viewports the strip must span in fit mode
