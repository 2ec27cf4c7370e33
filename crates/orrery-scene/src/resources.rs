//! Scene-wide resources.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use orrery_bodies::BodyRegistry;
use orrery_kinematics::SimClock;

/// Real seconds elapsed since the previous frame, written by the frame driver.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameTime {
    pub delta: f64,
}

/// The simulation clock every motion system samples.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimTime {
    pub clock: SimClock,
}

impl SimTime {
    /// Clock starting at zero with the given time scale.
    pub fn new(time_scale: f64) -> Self {
        Self {
            clock: SimClock::new(time_scale),
        }
    }
}

/// Read-only handle to the registry the scene was built from.
#[derive(Resource, Debug, Clone)]
pub struct SharedRegistry(pub Arc<BodyRegistry>);
