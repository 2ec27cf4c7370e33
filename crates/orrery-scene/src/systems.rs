//! Per-frame scene systems.
//!
//! Each motion system writes only the transform of the entity it is
//! iterating, so the order bodies are visited in never changes the result.

use bevy_ecs::prelude::*;
use glam::DQuat;

use crate::components::{
    Anchor, AnimationState, BodyName, MoonMotion, PlanetMotion, Selected, Transform,
};
use crate::lighting::LightingRig;
use crate::resources::{FrameTime, SimTime};
use crate::visuals::{BodyVisual, MOON_SPIN_SPEED, SUN_SPIN_SPEED, SunVisual};

/// Advance the simulation clock by the frame delta.
pub fn advance_clock(frame: Res<FrameTime>, mut time: ResMut<SimTime>) {
    time.clock.advance(frame.delta);
}

/// Place every planet on its orbit and spin it about its axis.
pub fn update_planet_motion(
    time: Res<SimTime>,
    mut planets: Query<(&PlanetMotion, &mut Transform, &mut AnimationState), Without<MoonMotion>>,
) {
    let t = time.clock.sim_elapsed();
    for (motion, mut transform, mut state) in &mut planets {
        let pose = motion.0.pose_at(t);
        transform.translation = pose.offset;
        transform.rotation = DQuat::from_rotation_y(pose.rotation_angle);
        *state = pose.into();
    }
}

/// Apply selection highlighting to planet visuals and lift the selected
/// planet by its bob offset.
pub fn update_body_visuals(
    time: Res<SimTime>,
    mut bodies: Query<(&BodyName, &mut BodyVisual, &mut Transform, Has<Selected>)>,
) {
    let t = time.clock.real_elapsed();
    for (name, mut visual, mut transform, selected) in &mut bodies {
        visual.animate(&name.0, t, selected);
        transform.translation.y = visual.bob;
    }
}

/// Place every moon relative to its parent's translation for this frame.
pub fn update_moon_motion(
    time: Res<SimTime>,
    parents: Query<&Transform, Without<MoonMotion>>,
    mut moons: Query<(&MoonMotion, &mut Transform, &mut AnimationState), With<MoonMotion>>,
) {
    let t = time.clock.sim_elapsed();
    for (motion, mut transform, mut state) in &mut moons {
        let Ok(parent) = parents.get(motion.parent) else {
            tracing::warn!(parent = ?motion.parent, "moon parent missing, skipping");
            continue;
        };
        let mut pose = motion.kinematics.pose_at(t);
        pose.rotation_angle = MOON_SPIN_SPEED * t;
        transform.translation = parent.translation + pose.offset;
        transform.rotation = DQuat::from_rotation_y(pose.rotation_angle);
        *state = pose.into();
    }
}

/// Spin the anchor and pulse its glow shells.
pub fn animate_sun(
    time: Res<SimTime>,
    mut sun: Query<(&mut SunVisual, &mut Transform, &mut AnimationState), With<Anchor>>,
) {
    let real = time.clock.real_elapsed();
    let sim = time.clock.sim_elapsed();
    for (mut visual, mut transform, mut state) in &mut sun {
        visual.animate(real, sim);
        state.rotation_angle = SUN_SPIN_SPEED * sim;
        transform.rotation = DQuat::from_rotation_y(state.rotation_angle);
    }
}

/// Flicker the sun's point light.
pub fn flicker_sun_light(time: Res<SimTime>, mut rig: ResMut<LightingRig>) {
    rig.flicker(time.clock.real_elapsed());
}
