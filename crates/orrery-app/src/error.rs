//! Application-level errors.

use orrery_bodies::RegistryError;
use orrery_config::ConfigError;
use orrery_scene::SceneError;

use crate::platform::PlatformError;

/// Everything that can stop the orrery before it reports.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load bodies: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
