//! Sleeping frame clock

use std::time::{Duration, Instant};

use super::Clock;

/// Time one frame may take at `fps`. Zero means uncapped.
pub fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / fps
    }
}

/// Caps the frame rate by sleeping away whatever is left of each frame
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) {
        let budget = frame_budget(target_fps);
        let elapsed = self.last.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.last = Instant::now();
    }
}
