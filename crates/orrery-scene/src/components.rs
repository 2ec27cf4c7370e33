//! Per-entity scene components.
//!
//! Every body in the registry becomes one entity. Planets carry
//! [`PlanetMotion`], moons carry [`MoonMotion`], and the anchor carries
//! [`Anchor`]. Each entity owns its [`Transform`] and [`AnimationState`];
//! no system writes another entity's transform.

use bevy_ecs::prelude::*;
use glam::{DQuat, DVec3};
use orrery_kinematics::{BodyKinematics, BodyPose, MoonKinematics};

/// Display name of a body or moon.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct BodyName(pub String);

/// Position of the body in the registry's registration order.
///
/// Moons share their parent's index.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyIndex(pub usize);

/// World-space placement of a body's visual.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Center of the body in scene units.
    pub translation: DVec3,
    /// Self-rotation about the body's Y axis.
    pub rotation: DQuat,
    /// Uniform scale applied on top of the display radius.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Kinematic state sampled for the current frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Orbital angle in radians.
    pub orbital_angle: f64,
    /// Signed self-rotation angle in radians.
    pub rotation_angle: f64,
    /// Offset from the orbit center (anchor or parent) in scene units.
    pub offset: DVec3,
}

impl From<BodyPose> for AnimationState {
    fn from(pose: BodyPose) -> Self {
        Self {
            orbital_angle: pose.orbital_angle,
            rotation_angle: pose.rotation_angle,
            offset: pose.offset,
        }
    }
}

/// Orbit parameters of a planet around the anchor.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlanetMotion(pub BodyKinematics);

/// Orbit parameters of a moon around its parent entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MoonMotion {
    /// The planet this moon orbits.
    pub parent: Entity,
    /// Precomputed moon kinematics.
    pub kinematics: MoonKinematics,
}

/// Marker for the body fixed at the origin.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Anchor;

/// Marker for the currently selected body. At most one entity has it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Selected;

/// Sphere used for pointer picking.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Pickable {
    /// Radius of the hit sphere in scene units.
    pub radius: f64,
}

/// Sphere radius the body is drawn with, in scene units.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct DisplayRadius(pub f64);
