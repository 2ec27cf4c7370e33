//! Headless frame loop.
//!
//! Feeds the composer a fixed frame time for a set number of frames. Frame
//! times are clamped the same way a windowed loop clamps a long stall, so a
//! misconfigured `frame_time` cannot make the scene jump.

use orrery_scene::{FrameOutcome, SceneComposer};
use tracing::warn;

/// Frame time used when the configured one is unusable: 60 Hz.
pub const DEFAULT_FRAME_TIME: f64 = 1.0 / 60.0;

/// Maximum frame time. Longer frames are clamped.
pub const MAX_FRAME_TIME: f64 = 0.25; // 250ms = 4 FPS minimum

/// Clamp a requested frame time into `(0, MAX_FRAME_TIME]`.
///
/// Zero, negative, and non-finite values fall back to [`DEFAULT_FRAME_TIME`].
pub fn clamp_frame_time(frame_time: f64) -> f64 {
    if !frame_time.is_finite() || frame_time <= 0.0 {
        warn!(frame_time, "invalid frame time, using 60 Hz");
        DEFAULT_FRAME_TIME
    } else if frame_time > MAX_FRAME_TIME {
        warn!(
            "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
            frame_time * 1000.0,
            MAX_FRAME_TIME * 1000.0
        );
        MAX_FRAME_TIME
    } else {
        frame_time
    }
}

/// Fixed-cadence loop state.
#[derive(Debug)]
pub struct FrameLoop {
    frame_time: f64,
    frame_count: u64,
    total_time: f64,
}

impl FrameLoop {
    /// Creates a loop stepping `frame_time` seconds per frame (clamped).
    pub fn new(frame_time: f64) -> Self {
        Self {
            frame_time: clamp_frame_time(frame_time),
            frame_count: 0,
            total_time: 0.0,
        }
    }

    /// Runs up to `frames` frames. Stops at the first frame that does not
    /// complete and returns its outcome; otherwise returns
    /// [`FrameOutcome::Completed`].
    pub fn run(&mut self, composer: &mut SceneComposer, frames: u32) -> FrameOutcome {
        for _ in 0..frames {
            match composer.frame(self.frame_time) {
                FrameOutcome::Completed => {
                    self.frame_count += 1;
                    self.total_time += self.frame_time;
                }
                outcome => {
                    warn!(completed = self.frame_count, ?outcome, "frame loop stopped");
                    return outcome;
                }
            }
        }
        FrameOutcome::Completed
    }

    /// Seconds per frame after clamping.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Returns the total number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the real time covered by completed frames, in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}
