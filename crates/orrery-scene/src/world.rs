//! World factory and core resource registration.

use bevy_ecs::prelude::*;

use crate::{FrameTime, InfoPanel, LightingRig, SimTime};

/// Registers the resources every scene system expects, with default values.
///
/// The camera, starfield, and registry depend on configuration and are
/// inserted by the composer.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(FrameTime::default());
    world.insert_resource(SimTime::default());
    world.insert_resource(LightingRig::default());
    world.insert_resource(InfoPanel::default());
}

/// Creates an empty scene world with all core resources inserted.
pub fn create_scene_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
