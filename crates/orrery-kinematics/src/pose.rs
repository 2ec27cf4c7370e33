//! Precomputed per-body motion parameters and the pose they produce.

use glam::DVec3;
use orrery_bodies::{CelestialBody, Moon};
use serde::Serialize;

use crate::kinematics::{
    moon_angular_speed, moon_display_radius, orbital_angular_speed, rotation_angular_speed,
    rotation_direction, scaled_radius,
};

/// Orbital angle, self-rotation angle, and offset at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BodyPose {
    /// Orbital angle in radians.
    pub orbital_angle: f64,
    /// Signed self-rotation angle in radians.
    pub rotation_angle: f64,
    /// Offset from the orbit center in scene units.
    pub offset: DVec3,
}

/// Motion parameters of a body, sampled once when its renderer is mounted.
///
/// [`BodyKinematics::pose_at`] gives the same results as the free functions
/// in this crate without re-reading the body every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyKinematics {
    /// Orbital angular speed (rad/s).
    pub orbital_speed: f64,
    /// Rotational angular speed magnitude (rad/s).
    pub rotation_speed: f64,
    /// `+1`, `-1`, or `0`.
    pub rotation_direction: f64,
    /// Orbit radius in scene units.
    pub orbit_radius: f64,
    /// Display radius in scene units.
    pub display_radius: f64,
}

impl BodyKinematics {
    /// Sample a body's parameters at the given display scale.
    pub fn from_body(body: &CelestialBody, display_scale: f64) -> Self {
        Self {
            orbital_speed: orbital_angular_speed(body),
            rotation_speed: rotation_angular_speed(body),
            rotation_direction: rotation_direction(body),
            orbit_radius: body.distance_from_sun * display_scale,
            display_radius: scaled_radius(body),
        }
    }

    /// Pose at simulated time `t`.
    pub fn pose_at(&self, t: f64) -> BodyPose {
        let orbital_angle = self.orbital_speed * t;
        BodyPose {
            orbital_angle,
            rotation_angle: self.rotation_direction * self.rotation_speed * t,
            offset: DVec3::new(
                self.orbit_radius * orbital_angle.cos(),
                0.0,
                self.orbit_radius * orbital_angle.sin(),
            ),
        }
    }
}

/// Motion parameters of a moon relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonKinematics {
    /// Orbital angular speed (rad/s).
    pub orbital_speed: f64,
    /// Distance from the parent's center in scene units.
    pub orbit_radius: f64,
    /// Display radius in scene units.
    pub display_radius: f64,
}

impl MoonKinematics {
    /// Sample a moon's parameters given its parent's display radius.
    pub fn from_moon(moon: &Moon, parent_scaled_radius: f64) -> Self {
        Self {
            orbital_speed: moon_angular_speed(moon),
            orbit_radius: moon.distance + parent_scaled_radius,
            display_radius: moon_display_radius(moon),
        }
    }

    /// Offset from the parent at simulated time `t`. Moons do not report a
    /// self-rotation angle; the renderer spins them at a fixed rate.
    pub fn pose_at(&self, t: f64) -> BodyPose {
        let orbital_angle = self.orbital_speed * t;
        BodyPose {
            orbital_angle,
            rotation_angle: 0.0,
            offset: DVec3::new(
                self.orbit_radius * orbital_angle.cos(),
                0.0,
                self.orbit_radius * orbital_angle.sin(),
            ),
        }
    }
}
