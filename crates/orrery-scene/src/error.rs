//! Error types for scene composition.

use orrery_bodies::RegistryError;

/// Errors raised by [`SceneComposer`](crate::SceneComposer) operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The named body is not in the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The body exists but has no pickable renderer (the anchor, for instance).
    #[error("body '{0}' cannot be selected")]
    NotSelectable(String),
    /// A schedule failed to build.
    #[error("scene schedule is invalid: {0}")]
    Schedule(#[from] bevy_ecs::schedule::ScheduleBuildError),
}
