//! Scene lighting: ambient fill, the sun's point light, and two colored
//! directional lights that give the planets rim and fill shading.

use bevy_ecs::prelude::*;
use glam::Vec3;
use orrery_bodies::Rgb;

/// Base intensity of the sun's point light.
pub const SUN_LIGHT_BASE_INTENSITY: f32 = 2.5;
/// Amplitude of the sun light flicker.
pub const SUN_LIGHT_FLICKER: f32 = 0.3;

/// Uniform light applied to every surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    /// Light color.
    pub color: Rgb,
    /// Scalar intensity.
    pub intensity: f32,
}

/// Localized light with distance falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// Position in scene units.
    pub position: Vec3,
    /// Light color.
    pub color: Rgb,
    /// Scalar intensity.
    pub intensity: f32,
    /// Distance beyond which the light contributes nothing.
    pub range: f32,
    /// Falloff exponent.
    pub decay: f32,
}

impl PointLight {
    /// Attenuation factor at `distance`, in `[0, 1]`.
    ///
    /// Inverse-power falloff with exponent `decay`, windowed to reach zero at
    /// `range`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        if distance >= self.range {
            return 0.0;
        }
        let falloff = 1.0 / (distance.powf(self.decay) + 1.0);
        let ratio = distance / self.range;
        let t = (1.0 - ratio * ratio).max(0.0);
        falloff * t * t
    }
}

/// Light arriving from infinitely far away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from; it always points at the origin.
    pub position: Vec3,
    /// Light color.
    pub color: Rgb,
    /// Scalar intensity.
    pub intensity: f32,
}

impl DirectionalLight {
    /// Normalized direction the light travels (from `position` toward the origin).
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// Distance fog blending distant geometry into the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    /// Fog color.
    pub color: Rgb,
    /// Distance where fog starts.
    pub near: f32,
    /// Distance where fog is opaque.
    pub far: f32,
}

impl Fog {
    /// Fog factor in `[0, 1]` at `distance`; 0 is clear, 1 is fully fogged.
    pub fn factor(&self, distance: f32) -> f32 {
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}

/// Every light in the scene.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct LightingRig {
    /// Ambient fill.
    pub ambient: AmbientLight,
    /// Point light at the sun's center.
    pub sun: PointLight,
    /// Blue rim light from above.
    pub rim: DirectionalLight,
    /// Violet fill light from below.
    pub fill: DirectionalLight,
    /// Atmospheric fog.
    pub fog: Fog,
}

impl Default for LightingRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::new(0x1A, 0x1A, 0x2E),
                intensity: 0.2,
            },
            sun: PointLight {
                position: Vec3::ZERO,
                color: Rgb::new(0xFD, 0xB8, 0x13),
                intensity: SUN_LIGHT_BASE_INTENSITY,
                range: 200.0,
                decay: 2.0,
            },
            rim: DirectionalLight {
                position: Vec3::new(50.0, 50.0, 50.0),
                color: Rgb::new(0x41, 0x69, 0xE1),
                intensity: 0.5,
            },
            fill: DirectionalLight {
                position: Vec3::new(-50.0, -50.0, -50.0),
                color: Rgb::new(0x8A, 0x2B, 0xE2),
                intensity: 0.3,
            },
            fog: Fog {
                color: Rgb::new(0x0A, 0x0A, 0x0A),
                near: 50.0,
                far: 300.0,
            },
        }
    }
}

impl LightingRig {
    /// Set the sun flicker for real time `t`: `2.5 + sin(t) * 0.3`.
    pub fn flicker(&mut self, t: f64) {
        self.sun.intensity = sun_intensity(t);
    }
}

/// Sun point-light intensity at real time `t`.
pub fn sun_intensity(t: f64) -> f32 {
    SUN_LIGHT_BASE_INTENSITY + (t.sin() as f32) * SUN_LIGHT_FLICKER
}
