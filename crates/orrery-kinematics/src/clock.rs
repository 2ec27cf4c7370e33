//! Simulation clock: real elapsed time scaled by a user-controlled multiplier.

/// Slowest allowed time-speed multiplier.
pub const MIN_TIME_SCALE: f64 = 0.1;
/// Fastest allowed time-speed multiplier.
pub const MAX_TIME_SCALE: f64 = 5.0;

/// Monotonic simulation clock.
///
/// Simulated time advances by `dt * time_scale` each frame and is never
/// reset, so changing the multiplier changes the rate of motion without
/// making bodies jump.
#[derive(Clone, Debug, PartialEq)]
pub struct SimClock {
    real_elapsed: f64,
    sim_elapsed: f64,
    time_scale: f64,
    frames: u64,
}

impl SimClock {
    /// A clock at time zero with the given multiplier (clamped).
    pub fn new(time_scale: f64) -> Self {
        let mut clock = Self {
            real_elapsed: 0.0,
            sim_elapsed: 0.0,
            time_scale: 1.0,
            frames: 0,
        };
        clock.set_time_scale(time_scale);
        clock
    }

    /// Advance by `dt` real seconds. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!(dt, "ignoring invalid frame delta");
            return;
        }
        self.real_elapsed += dt;
        self.sim_elapsed += dt * self.time_scale;
        self.frames += 1;
    }

    /// Set the multiplier, clamped to `[MIN_TIME_SCALE, MAX_TIME_SCALE]`.
    ///
    /// Returns the multiplier actually applied. Non-finite input leaves the
    /// current multiplier unchanged.
    pub fn set_time_scale(&mut self, time_scale: f64) -> f64 {
        if time_scale.is_finite() {
            self.time_scale = time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
        }
        self.time_scale
    }

    /// The current multiplier.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Real seconds since the clock started.
    pub fn real_elapsed(&self) -> f64 {
        self.real_elapsed
    }

    /// Simulated seconds since the clock started. Feed this to kinematics.
    pub fn sim_elapsed(&self) -> f64 {
        self.sim_elapsed
    }

    /// Number of accepted frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
