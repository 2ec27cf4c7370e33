//! Scene state for the orrery: ECS components, per-frame systems, and the
//! composer that ties the body registry to camera, lighting, starfield,
//! picking, and the info panel.
//!
//! Drawing is left to a renderer. [`SceneComposer::frame_with`] hands it the
//! world after each update, and [`SceneComposer::snapshot`] exposes the same
//! state as plain data.

mod boundary;
mod camera;
mod components;
mod composer;
mod error;
mod info_panel;
mod lighting;
mod picking;
mod resources;
mod schedule;
mod starfield;
mod systems;
mod visuals;
mod world;

pub use boundary::{Fallback, FrameOutcome, GENERIC_FAILURE, RenderBoundary};
pub use camera::{OrbitCamera, OrbitControls};
pub use components::{
    Anchor, AnimationState, BodyIndex, BodyName, DisplayRadius, MoonMotion, Pickable,
    PlanetMotion, Selected, Transform,
};
pub use composer::{
    BodyKind, BodySnapshot, CameraSnapshot, PointerButton, PointerEvent, SceneComposer,
    SceneSnapshot,
};
pub use error::SceneError;
pub use info_panel::{InfoPanel, InfoPanelContent, group_thousands};
pub use lighting::{
    AmbientLight, DirectionalLight, Fog, LightingRig, PointLight, SUN_LIGHT_BASE_INTENSITY,
    SUN_LIGHT_FLICKER, sun_intensity,
};
pub use picking::{Ray, nearest_hit};
pub use resources::{FrameTime, SharedRegistry, SimTime};
pub use schedule::{
    PostUpdateSet, SceneSchedule, SceneSchedules, UpdateSet, configure_postupdate_ordering,
    configure_update_ordering,
};
pub use starfield::{
    SPARKLE_CLOUDS, SparkleCloud, SparkleConfig, StarLayer, StarPoint, Starfield,
    StarfieldGenerator, hsl_to_rgb,
};
pub use systems::{
    advance_clock, animate_sun, flicker_sun_light, update_body_visuals, update_moon_motion,
    update_planet_motion,
};
pub use visuals::{
    BodyVisual, GlowShell, Label, MoonVisual, RingBand, RingSystem, SunVisual, bob_offset,
    emissive_intensity, glow_opacity, glow_pulse, selection_ring, trail_opacity,
};
pub use world::{create_scene_world, register_core_resources};
