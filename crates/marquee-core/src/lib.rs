//! Scroll-linked motion engine for infinite marquee strips.
//!
//! Platform-free: the browser front-end and the native simulator both drive
//! it through [`Marquee`] with their own [`Clock`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gate;
pub mod motion;
pub mod replicate;
pub mod velocity;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use engine::Marquee;
pub use error::ConfigError;
pub use gate::*;
pub use motion::*;
pub use replicate::*;
pub use velocity::*;
