//! Platform abstraction layer
//!
//! Handles the outside world the game loop talks to:
//! - Input events and held keys
//! - Frame pacing
//! - The native window (winit)

pub mod clock;
pub mod native;

pub use clock::{FrameClock, frame_budget};
pub use native::NativePlatform;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    /// Restart after game over
    R,
    /// Quit after game over
    Q,
    /// Toggle theme
    T,
}

/// Discrete event sampled during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
}

/// Source of player input
pub trait InputSource {
    /// Events since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn is_key_held(&self, key: Key) -> bool;
}

/// Frame-rate governor
pub trait Clock {
    /// Block until the current frame has used its budget
    fn tick(&mut self, target_fps: u32);
}
