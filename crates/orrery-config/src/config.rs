//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window / viewport settings.
    pub window: WindowConfig,
    /// Orbit camera settings.
    pub camera: CameraConfig,
    /// Simulation clock and display scaling.
    pub simulation: SimulationConfig,
    /// Background starfield layers.
    pub starfield: StarfieldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Request multisample anti-aliasing from the renderer.
    pub antialias: bool,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial eye position in scene units.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Allow right-drag panning.
    pub enable_pan: bool,
    /// Allow scroll zooming.
    pub enable_zoom: bool,
    /// Allow left-drag orbiting.
    pub enable_rotate: bool,
    /// Scroll zoom speed multiplier.
    pub zoom_speed: f32,
    /// Pan speed multiplier.
    pub pan_speed: f32,
    /// Orbit rotation speed multiplier.
    pub rotate_speed: f32,
    /// Closest allowed distance to the orbit target.
    pub min_distance: f32,
    /// Farthest allowed distance from the orbit target.
    pub max_distance: f32,
}

/// Simulation clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time-speed multiplier applied to elapsed time (clamped to 0.1..=5.0 at runtime).
    pub time_scale: f64,
    /// Scene units per AU-like distance unit, shared by every body.
    pub display_scale: f64,
    /// Frame time in seconds used by the headless frame driver.
    pub frame_time: f64,
    /// Number of frames the headless driver runs.
    pub frames: u32,
}

/// One layer of background stars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarLayerConfig {
    /// Inner radius of the star shell.
    pub radius: f32,
    /// Thickness of the star shell.
    pub depth: f32,
    /// Number of stars in the layer.
    pub count: u32,
    /// Size multiplier for star points.
    pub factor: f32,
    /// Color saturation in [0, 1]. 0 renders every star white.
    pub saturation: f32,
}

/// Starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Seed for deterministic star placement.
    pub seed: u64,
    /// Star layers, drawn back to front.
    pub layers: Vec<StarLayerConfig>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw faint orbit trails for every planet.
    pub show_orbit_trails: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Solar System Visualization".to_string(),
            antialias: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 20.0],
            fov_deg: 75.0,
            enable_pan: true,
            enable_zoom: true,
            enable_rotate: true,
            zoom_speed: 0.6,
            pan_speed: 0.5,
            rotate_speed: 0.4,
            min_distance: 5.0,
            max_distance: 100.0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            display_scale: 10.0,
            frame_time: 1.0 / 60.0,
            frames: 600,
        }
    }
}

impl Default for StarLayerConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            layers: vec![
                StarLayerConfig {
                    radius: 400.0,
                    depth: 80.0,
                    count: 8000,
                    factor: 6.0,
                    saturation: 0.0,
                },
                StarLayerConfig {
                    radius: 200.0,
                    depth: 40.0,
                    count: 3000,
                    factor: 3.0,
                    saturation: 0.2,
                },
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_orbit_trails: true,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
