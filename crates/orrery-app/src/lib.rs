//! Headless orrery driver.
//!
//! Composes the scene from the built-in solar system (or a RON body file),
//! runs a fixed number of frames, and reports the final state.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod report;

use std::path::Path;
use std::sync::Arc;

use orrery_bodies::{BodyRegistry, solar_system};
use orrery_config::{CliArgs, Config};
use orrery_scene::{SceneComposer, SceneSnapshot};

pub use error::AppError;
pub use frame_loop::{DEFAULT_FRAME_TIME, FrameLoop, MAX_FRAME_TIME, clamp_frame_time};
pub use platform::{PlatformDirs, PlatformError};
pub use report::{TableReport, render};

/// Resolve platform directories, honoring `--config`, and create them.
pub fn resolve_dirs(args: &CliArgs) -> Result<PlatformDirs, AppError> {
    let dirs = match &args.config {
        Some(config_dir) => PlatformDirs::with_config_dir(config_dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;
    Ok(dirs)
}

/// Load `config.ron` from `dirs` (creating it on first run) and apply CLI
/// overrides.
pub fn load_config(dirs: &PlatformDirs, args: &CliArgs) -> Result<Config, AppError> {
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

/// The body table: a RON file when given, the built-in solar system otherwise.
pub fn load_registry(bodies: Option<&Path>) -> Result<BodyRegistry, AppError> {
    let registry = match bodies {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading bodies");
            BodyRegistry::load(path)?
        }
        None => solar_system()?,
    };
    Ok(registry)
}

/// Compose the scene, apply `--select`, run the configured frames, and
/// capture the final state.
///
/// A frame failure does not return an error: the snapshot carries the
/// fallback screen instead.
pub fn run(config: &Config, args: &CliArgs) -> Result<SceneSnapshot, AppError> {
    let registry = Arc::new(load_registry(args.bodies.as_deref())?);
    let mut composer = SceneComposer::new(config, registry)?;

    if let Some(name) = &args.select {
        composer.select_by_name(name)?;
    }

    let mut frame_loop = FrameLoop::new(config.simulation.frame_time);
    let outcome = frame_loop.run(&mut composer, config.simulation.frames);
    tracing::info!(
        frames = frame_loop.frame_count(),
        real_time = frame_loop.total_time(),
        sim_time = composer.clock().sim_elapsed(),
        ?outcome,
        "run finished"
    );

    Ok(composer.snapshot())
}
