//! Frame pacing
//!
//! The simulation runs exactly one tick per frame, so the loop blocks here
//! until the next tick boundary instead of accumulating real time.

use std::time::{Duration, Instant};

/// Blocks the caller until the next frame boundary
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    next: Option<Instant>,
    /// Frames that started later than their deadline
    late_frames: u64,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next: None,
            late_frames: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn late_frames(&self) -> u64 {
        self.late_frames
    }

    /// Sleep until the current frame's deadline, then schedule the next one.
    /// A loop running behind by more than a frame is re-anchored to now
    /// rather than racing to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let deadline = *self.next.get_or_insert(now + self.frame);

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next = Some(deadline + self.frame);
        } else {
            self.late_frames += 1;
            if now - deadline > self.frame {
                log::debug!("Frame limiter behind by {:?}, resyncing", now - deadline);
                self.next = Some(now + self.frame);
            } else {
                self.next = Some(deadline + self.frame);
            }
        }
    }
}
