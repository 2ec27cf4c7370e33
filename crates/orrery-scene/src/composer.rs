//! The scene composer: builds the world from a registry, drives frames, and
//! routes pointer input to the camera and the selection.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::Vec2;
use orrery_bodies::{BodyRegistry, CelestialBody};
use orrery_config::Config;
use orrery_kinematics::{BodyKinematics, MoonKinematics, SimClock, scaled_radius};
use serde::Serialize;

use crate::boundary::{Fallback, FrameOutcome, RenderBoundary};
use crate::camera::OrbitCamera;
use crate::components::{
    Anchor, AnimationState, BodyIndex, BodyName, DisplayRadius, MoonMotion, Pickable,
    PlanetMotion, Selected, Transform,
};
use crate::error::SceneError;
use crate::info_panel::{InfoPanel, InfoPanelContent};
use crate::lighting::LightingRig;
use crate::picking::nearest_hit;
use crate::resources::{FrameTime, SharedRegistry, SimTime};
use crate::schedule::SceneSchedules;
use crate::starfield::{Starfield, StarfieldGenerator};
use crate::visuals::{BodyVisual, MoonVisual, RingSystem, SunVisual};
use crate::world::create_scene_world;

/// Mouse buttons the orbit controls distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag to orbit.
    Primary,
    /// Drag to pan.
    Secondary,
}

/// Pointer input, in normalized viewport units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Drag by `delta` (a full-width drag is 1.0 on X).
    Drag { button: PointerButton, delta: Vec2 },
    /// Scroll; positive zooms in.
    Scroll(f32),
    /// Click at normalized device coordinates.
    Click(Vec2),
}

/// What kind of renderer an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Anchor,
    Planet,
    Moon,
}

/// Entities spawned for one registry entry.
#[derive(Clone, Debug)]
struct BodyEntities {
    body: Entity,
    moons: Vec<Entity>,
}

/// Scene state of one body for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub name: String,
    pub kind: BodyKind,
    /// Name of the planet a moon orbits.
    pub parent: Option<String>,
    pub position: [f64; 3],
    pub orbital_angle: f64,
    pub rotation_angle: f64,
    pub display_radius: f64,
    pub selected: bool,
}

/// Camera pose for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub distance: f32,
}

/// Everything a front end needs to present one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub frames: u64,
    pub real_time: f64,
    pub sim_time: f64,
    pub time_scale: f64,
    pub sun_light_intensity: f32,
    pub camera: CameraSnapshot,
    pub bodies: Vec<BodySnapshot>,
    pub info_panel: Option<InfoPanelContent>,
    pub fallback: Option<Fallback>,
}

/// Owns the scene world and everything needed to advance it.
pub struct SceneComposer {
    world: World,
    schedules: SceneSchedules,
    registry: Arc<BodyRegistry>,
    entities: Vec<BodyEntities>,
    selection: Option<Entity>,
    boundary: RenderBoundary,
}

impl SceneComposer {
    /// Build the scene: one renderer entity per registry body and per moon,
    /// plus camera, lighting, and starfield resources.
    pub fn new(config: &Config, registry: Arc<BodyRegistry>) -> Result<Self, SceneError> {
        let mut world = create_scene_world();
        world.insert_resource(SimTime::new(config.simulation.time_scale));
        world.insert_resource(SharedRegistry(Arc::clone(&registry)));

        let mut camera = OrbitCamera::from_config(&config.camera, 1.0);
        camera.set_viewport(config.window.width, config.window.height);
        world.insert_resource(camera);

        let starfield = StarfieldGenerator::new(config.starfield.seed).generate(&config.starfield);
        tracing::debug!(stars = starfield.star_count(), "starfield generated");
        world.insert_resource(starfield);

        let entities = spawn_bodies(
            &mut world,
            &registry,
            config.simulation.display_scale,
            config.debug.show_orbit_trails,
        );

        let mut schedules = SceneSchedules::with_scene_systems();
        schedules.initialize_all(&mut world)?;

        tracing::info!(
            bodies = registry.len(),
            entities = world.entities().len(),
            "scene composed"
        );

        Ok(Self {
            world,
            schedules,
            registry,
            entities,
            selection: None,
            boundary: RenderBoundary::new(),
        })
    }

    /// Advance one frame by `dt` real seconds.
    pub fn frame(&mut self, dt: f64) -> FrameOutcome {
        self.frame_with(dt, |_| {})
    }

    /// Advance one frame, then hand the world to `draw`. Both run inside the
    /// render boundary; a panic in either trips it.
    pub fn frame_with<F: FnOnce(&World)>(&mut self, dt: f64, draw: F) -> FrameOutcome {
        let world = &mut self.world;
        let schedules = &mut self.schedules;
        self.boundary.run(|| {
            world.resource_mut::<FrameTime>().delta = dt;
            schedules.run(world);
            draw(&*world);
        })
    }

    /// Clear a tripped boundary so frames run again. Schedules are rebuilt
    /// since a panic can leave a schedule mid-run.
    pub fn retry(&mut self) -> Result<bool, SceneError> {
        if !self.boundary.retry() {
            return Ok(false);
        }
        let mut schedules = SceneSchedules::with_scene_systems();
        schedules.initialize_all(&mut self.world)?;
        self.schedules = schedules;
        Ok(true)
    }

    /// Fallback screen while the boundary is tripped.
    pub fn fallback(&self) -> Option<Fallback> {
        self.boundary.fallback()
    }

    pub fn boundary(&self) -> &RenderBoundary {
        &self.boundary
    }

    /// Set the time-speed multiplier. Returns the clamped value applied.
    pub fn set_time_scale(&mut self, time_scale: f64) -> f64 {
        let applied = self
            .world
            .resource_mut::<SimTime>()
            .clock
            .set_time_scale(time_scale);
        tracing::debug!(requested = time_scale, applied, "time scale changed");
        applied
    }

    /// The simulation clock.
    pub fn clock(&self) -> &SimClock {
        &self.world.resource::<SimTime>().clock
    }

    pub fn registry(&self) -> &Arc<BodyRegistry> {
        &self.registry
    }

    /// The scene world, for renderers and inspection.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &OrbitCamera {
        self.world.resource::<OrbitCamera>()
    }

    pub fn lighting(&self) -> &LightingRig {
        self.world.resource::<LightingRig>()
    }

    pub fn starfield(&self) -> &Starfield {
        self.world.resource::<Starfield>()
    }

    pub fn info_panel(&self) -> &InfoPanel {
        self.world.resource::<InfoPanel>()
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.world
            .resource_mut::<OrbitCamera>()
            .set_viewport(width, height);
    }

    /// Renderer entity of a registry body.
    pub fn entity(&self, name: &str) -> Result<Entity, SceneError> {
        let index = self.registry.index_of(name)?;
        Ok(self.entities[index].body)
    }

    /// Route one pointer event to the camera or the selection.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Drag {
                button: PointerButton::Primary,
                delta,
            } => {
                self.world.resource_mut::<OrbitCamera>().rotate(delta);
            }
            PointerEvent::Drag {
                button: PointerButton::Secondary,
                delta,
            } => {
                self.world.resource_mut::<OrbitCamera>().pan(delta);
            }
            PointerEvent::Scroll(amount) => {
                self.world.resource_mut::<OrbitCamera>().zoom(amount);
            }
            PointerEvent::Click(ndc) => {
                self.click(ndc);
            }
        }
    }

    /// Pick the nearest body under `ndc` and toggle its selection. Clicking
    /// empty space leaves the selection as it is. Returns the body hit.
    pub fn click(&mut self, ndc: Vec2) -> Option<Entity> {
        let ray = self.world.resource::<OrbitCamera>().screen_ray(ndc);
        let mut pickables = self.world.query::<(Entity, &Transform, &Pickable)>();
        let candidates = pickables
            .iter(&self.world)
            .map(|(entity, transform, pickable)| {
                (entity, transform.translation, pickable.radius)
            });
        let hit = nearest_hit(&ray, candidates)?;

        if self.selection == Some(hit) {
            self.clear_selection();
        } else {
            self.select_entity(hit);
        }
        Some(hit)
    }

    /// Select a body by name, as a click on it would. Selecting the body that
    /// is already selected keeps it selected.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), SceneError> {
        let entity = self.entity(name)?;
        if self.world.get::<Pickable>(entity).is_none() {
            return Err(SceneError::NotSelectable(name.to_string()));
        }
        if self.selection != Some(entity) {
            self.select_entity(entity);
        }
        Ok(())
    }

    /// Close the info panel and deselect the body it showed.
    pub fn close_info_panel(&mut self) {
        self.clear_selection();
    }

    /// The selected body, if any.
    pub fn selected(&self) -> Option<&CelestialBody> {
        let entity = self.selection?;
        self.body_of(entity)
    }

    /// Capture the scene state after the most recent frame.
    pub fn snapshot(&self) -> SceneSnapshot {
        let clock = self.clock();
        let camera = self.camera();

        let mut bodies = Vec::new();
        for (body, spawned) in self.registry.all_bodies().iter().zip(&self.entities) {
            let kind = if body.is_anchor() {
                BodyKind::Anchor
            } else {
                BodyKind::Planet
            };
            bodies.push(self.body_snapshot(spawned.body, kind, None));
            for &moon in &spawned.moons {
                bodies.push(self.body_snapshot(moon, BodyKind::Moon, Some(body.name.clone())));
            }
        }

        SceneSnapshot {
            frames: clock.frames(),
            real_time: clock.real_elapsed(),
            sim_time: clock.sim_elapsed(),
            time_scale: clock.time_scale(),
            sun_light_intensity: self.lighting().sun.intensity,
            camera: CameraSnapshot {
                position: camera.position().to_array(),
                target: camera.target.to_array(),
                distance: camera.distance,
            },
            bodies,
            info_panel: self.info_panel().content().cloned(),
            fallback: self.fallback(),
        }
    }

    fn body_snapshot(
        &self,
        entity: Entity,
        kind: BodyKind,
        parent: Option<String>,
    ) -> BodySnapshot {
        let name = self
            .world
            .get::<BodyName>(entity)
            .map(|n| n.0.clone())
            .unwrap_or_default();
        let transform = self.world.get::<Transform>(entity).copied().unwrap_or_default();
        let state = self
            .world
            .get::<AnimationState>(entity)
            .copied()
            .unwrap_or_default();
        let display_radius = self.world.get::<DisplayRadius>(entity).map_or(0.0, |r| r.0);
        BodySnapshot {
            name,
            kind,
            parent,
            position: transform.translation.to_array(),
            orbital_angle: state.orbital_angle,
            rotation_angle: state.rotation_angle,
            display_radius,
            selected: self.world.get::<Selected>(entity).is_some(),
        }
    }

    fn body_of(&self, entity: Entity) -> Option<&CelestialBody> {
        let index = self.world.get::<BodyIndex>(entity)?.0;
        self.registry.all_bodies().get(index)
    }

    fn select_entity(&mut self, entity: Entity) {
        if let Some(previous) = self.selection.take() {
            self.world.entity_mut(previous).remove::<Selected>();
        }
        self.world.entity_mut(entity).insert(Selected);
        self.selection = Some(entity);

        let registry = Arc::clone(&self.registry);
        if let Some(index) = self.world.get::<BodyIndex>(entity).map(|i| i.0)
            && let Some(body) = registry.all_bodies().get(index)
        {
            tracing::info!(body = %body.name, "body selected");
            self.world.resource_mut::<InfoPanel>().show(body);
        }
    }

    fn clear_selection(&mut self) {
        if let Some(previous) = self.selection.take() {
            self.world.entity_mut(previous).remove::<Selected>();
            tracing::info!("selection cleared");
        }
        self.world.resource_mut::<InfoPanel>().close();
    }
}

/// Spawn renderer entities in registry order: the anchor with its special
/// visual, planets with orbit, visual, optional rings, and their moons.
fn spawn_bodies(
    world: &mut World,
    registry: &BodyRegistry,
    display_scale: f64,
    show_orbit_trails: bool,
) -> Vec<BodyEntities> {
    let mut spawned = Vec::with_capacity(registry.len());

    for (index, body) in registry.all_bodies().iter().enumerate() {
        let display_radius = scaled_radius(body);
        let common = (
            BodyName(body.name.clone()),
            BodyIndex(index),
            Transform::default(),
            AnimationState::default(),
            DisplayRadius(display_radius),
        );

        if body.is_anchor() {
            let entity = world
                .spawn((common, Anchor, SunVisual::new(body.color, display_radius)))
                .id();
            spawned.push(BodyEntities {
                body: entity,
                moons: Vec::new(),
            });
            continue;
        }

        let kinematics = BodyKinematics::from_body(body, display_scale);
        let mut planet = world.spawn((
            common,
            PlanetMotion(kinematics),
            Pickable {
                radius: display_radius,
            },
            BodyVisual::new(
                body.color,
                display_radius,
                kinematics.orbit_radius,
                show_orbit_trails,
            ),
        ));
        if body.has_rings {
            planet.insert(RingSystem::for_radius(display_radius));
        }
        let planet = planet.id();

        let moons = body
            .moons
            .iter()
            .map(|moon| {
                let kinematics = MoonKinematics::from_moon(moon, display_radius);
                world
                    .spawn((
                        BodyName(moon.name.clone()),
                        BodyIndex(index),
                        Transform::default(),
                        AnimationState::default(),
                        DisplayRadius(kinematics.display_radius),
                        MoonMotion {
                            parent: planet,
                            kinematics,
                        },
                        MoonVisual::new(kinematics.display_radius),
                    ))
                    .id()
            })
            .collect();

        spawned.push(BodyEntities {
            body: planet,
            moons,
        });
    }

    spawned
}
