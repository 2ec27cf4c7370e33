//! Procedural background: deterministic star shells and sparkle clouds.

use bevy_ecs::prelude::*;
use glam::Vec3;
use orrery_bodies::Rgb;
use orrery_config::{StarLayerConfig, StarfieldConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Lightness of every star color.
const STAR_LIGHTNESS: f32 = 0.9;

/// A single background star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPoint {
    /// Position in scene units.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Point size in pixels.
    pub size: f32,
}

/// A shell of stars between `radius` and `radius + depth`.
#[derive(Clone, Debug)]
pub struct StarLayer {
    /// Layer parameters the stars were generated from.
    pub config: StarLayerConfig,
    /// Generated stars.
    pub stars: Vec<StarPoint>,
}

/// Parameters for one cloud of drifting sparkles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleConfig {
    /// Number of sparkles.
    pub count: u32,
    /// Edge lengths of the box the sparkles fill, centered on the origin.
    pub scale: Vec3,
    /// Point size.
    pub size: f32,
    /// Drift speed.
    pub speed: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Sparkle color.
    pub color: Rgb,
}

/// The two tinted sparkle clouds behind the planets.
pub const SPARKLE_CLOUDS: [SparkleConfig; 2] = [
    SparkleConfig {
        count: 100,
        scale: Vec3::splat(300.0),
        size: 2.0,
        speed: 0.3,
        opacity: 0.6,
        color: Rgb::new(0x41, 0x69, 0xE1),
    },
    SparkleConfig {
        count: 50,
        scale: Vec3::splat(500.0),
        size: 3.0,
        speed: 0.2,
        opacity: 0.4,
        color: Rgb::new(0x8A, 0x2B, 0xE2),
    },
];

/// A generated sparkle cloud.
#[derive(Clone, Debug)]
pub struct SparkleCloud {
    /// Cloud parameters.
    pub config: SparkleConfig,
    /// Sparkle positions in scene units.
    pub positions: Vec<Vec3>,
}

/// Generated background, inserted as a resource at mount.
#[derive(Resource, Clone, Debug)]
pub struct Starfield {
    /// Star shells in configuration order.
    pub layers: Vec<StarLayer>,
    /// Sparkle clouds.
    pub sparkles: Vec<SparkleCloud>,
}

impl Starfield {
    /// Total number of stars across every layer.
    pub fn star_count(&self) -> usize {
        self.layers.iter().map(|l| l.stars.len()).sum()
    }
}

/// Generates a deterministic starfield from a seed.
pub struct StarfieldGenerator {
    seed: u64,
}

impl StarfieldGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate every configured layer plus the sparkle clouds.
    pub fn generate(&self, config: &StarfieldConfig) -> Starfield {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let layers = config
            .layers
            .iter()
            .map(|layer| StarLayer {
                config: layer.clone(),
                stars: generate_layer(&mut rng, layer),
            })
            .collect();
        let sparkles = SPARKLE_CLOUDS
            .iter()
            .map(|cloud| SparkleCloud {
                config: *cloud,
                positions: generate_sparkles(&mut rng, cloud),
            })
            .collect();
        Starfield { layers, sparkles }
    }
}

/// Stars walk inward from `radius + depth` in small random steps, so the
/// shell is densest near its outer edge and never dips below `radius`.
fn generate_layer(rng: &mut ChaCha8Rng, layer: &StarLayerConfig) -> Vec<StarPoint> {
    let count = layer.count as usize;
    let mut stars = Vec::with_capacity(count);
    let step = if count == 0 { 0.0 } else { layer.depth / count as f32 };
    let mut r = layer.radius + layer.depth;

    for i in 0..count {
        r -= step * rng.random::<f32>();
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
        let direction = Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos());

        let hue = i as f32 / count as f32;
        let size = (0.5 + 0.5 * rng.random::<f32>()) * layer.factor;

        stars.push(StarPoint {
            position: direction * r,
            color: hsl_to_rgb(hue, layer.saturation, STAR_LIGHTNESS),
            size,
        });
    }

    stars
}

fn generate_sparkles(rng: &mut ChaCha8Rng, cloud: &SparkleConfig) -> Vec<Vec3> {
    (0..cloud.count)
        .map(|_| {
            let unit = Vec3::new(rng.random(), rng.random(), rng.random());
            (unit - Vec3::splat(0.5)) * cloud.scale
        })
        .collect()
}

/// Convert HSL (each component in `[0, 1]`) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
