//! Platform abstraction layer
//!
//! Native-only pieces the game loop needs from the host:
//! - Time/ticks (frame pacing)

pub mod time;

pub use time::FrameLimiter;
