//! Visual parameters a renderer reads off body entities each frame.
//!
//! Pulses and the selection bob follow real elapsed time so they keep their
//! rhythm at any time scale. Spins follow simulated time like every other
//! motion in the scene.

use bevy_ecs::prelude::*;
use orrery_bodies::Rgb;

/// Emissive intensity of an unselected planet.
pub const EMISSIVE_IDLE: f32 = 0.1;
/// Emissive intensity of the selected planet.
pub const EMISSIVE_SELECTED: f32 = 0.3;
/// Orbit-trail opacity of an unselected planet.
pub const TRAIL_OPACITY_IDLE: f32 = 0.1;
/// Orbit-trail opacity of the selected planet.
pub const TRAIL_OPACITY_SELECTED: f32 = 0.4;
/// Half-width of the orbit trail band in scene units.
pub const TRAIL_HALF_WIDTH: f64 = 0.02;
/// Planet atmosphere glow shell scale.
pub const PLANET_GLOW_SCALE: f64 = 1.1;
/// Amplitude of the vertical bob of the selected planet.
pub const BOB_AMPLITUDE: f64 = 0.3;
/// Angular frequency of the vertical bob.
pub const BOB_FREQUENCY: f64 = 3.0;
/// Label height above the planet surface.
pub const LABEL_CLEARANCE: f64 = 2.0;
/// Label plate width per character of the name.
pub const LABEL_WIDTH_PER_CHAR: f64 = 0.5;

/// Moon self-rotation speed (rad/s of simulated time).
pub const MOON_SPIN_SPEED: f64 = 0.01;
/// Sun self-rotation speed (rad/s of simulated time).
pub const SUN_SPIN_SPEED: f64 = 0.005;
/// Corona counter-rotation speed (rad/s of simulated time).
pub const CORONA_SPIN_SPEED: f64 = -0.002;

const RING_LAYOUT: [(f64, f64, f32, Rgb); 3] = [
    (1.5, 2.5, 0.8, Rgb::new(0xD4, 0xB8, 0x96)),
    (2.6, 3.2, 0.6, Rgb::new(0xB8, 0xA0, 0x82)),
    (3.3, 3.8, 0.4, Rgb::new(0xA0, 0x90, 0x6C)),
];

const SUN_SHELLS: [(f64, f32, Rgb); 4] = [
    (1.1, 0.6, Rgb::new(0xFF, 0xD7, 0x00)),
    (1.3, 0.3, Rgb::new(0xFF, 0xA5, 0x00)),
    (1.6, 0.2, Rgb::new(0xFF, 0x6B, 0x35)),
    (2.0, 0.1, Rgb::new(0xFF, 0x45, 0x00)),
];

/// A flat annulus in the body's equatorial plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    /// Inner radius in scene units.
    pub inner: f64,
    /// Outer radius in scene units.
    pub outer: f64,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Band color.
    pub color: Rgb,
}

/// Name plate floating above the selected planet.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text shown on the plate.
    pub text: String,
    /// Height of the plate center above the planet center.
    pub height: f64,
    /// Plate width in scene units.
    pub width: f64,
}

impl Label {
    /// Label for a planet of the given display radius.
    pub fn for_body(name: &str, display_radius: f64) -> Self {
        Self {
            text: name.to_string(),
            height: display_radius + LABEL_CLEARANCE,
            width: name.chars().count() as f64 * LABEL_WIDTH_PER_CHAR,
        }
    }
}

/// Appearance of a planet, recomputed every frame.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct BodyVisual {
    /// Base and emissive color.
    pub color: Rgb,
    /// Sphere radius in scene units.
    pub display_radius: f64,
    /// Emissive intensity of the surface material.
    pub emissive_intensity: f32,
    /// Opacity of the atmosphere glow shell.
    pub glow_opacity: f32,
    /// Radius of the orbit trail around the anchor.
    pub trail_radius: f64,
    /// Opacity of the orbit trail.
    pub trail_opacity: f32,
    /// Whether the orbit trail is drawn at all.
    pub trail_visible: bool,
    /// Vertical offset applied to the planet (selection bob).
    pub bob: f64,
    /// Name label, present only while selected.
    pub label: Option<Label>,
    /// Highlight annulus, present only while selected.
    pub highlight: Option<RingBand>,
}

impl BodyVisual {
    /// Resting appearance of an unselected planet.
    pub fn new(color: Rgb, display_radius: f64, trail_radius: f64, trail_visible: bool) -> Self {
        Self {
            color,
            display_radius,
            emissive_intensity: EMISSIVE_IDLE,
            glow_opacity: glow_pulse(0.0) as f32,
            trail_radius,
            trail_opacity: TRAIL_OPACITY_IDLE,
            trail_visible,
            bob: 0.0,
            label: None,
            highlight: None,
        }
    }

    /// Update every time-varying field for real time `t`.
    pub fn animate(&mut self, name: &str, t: f64, selected: bool) {
        self.emissive_intensity = emissive_intensity(selected);
        self.glow_opacity = glow_opacity(t, selected);
        self.trail_opacity = trail_opacity(selected);
        if selected {
            self.bob = bob_offset(t);
            if self.label.is_none() {
                self.label = Some(Label::for_body(name, self.display_radius));
            }
            self.highlight = Some(selection_ring(self.display_radius));
        } else {
            self.bob = 0.0;
            self.label = None;
            self.highlight = None;
        }
    }

    /// Inner and outer radius of the orbit trail band.
    pub fn trail_band(&self) -> (f64, f64) {
        (
            self.trail_radius - TRAIL_HALF_WIDTH,
            self.trail_radius + TRAIL_HALF_WIDTH,
        )
    }
}

/// Moon appearance. Moons never change look.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MoonVisual {
    /// Sphere radius in scene units.
    pub display_radius: f64,
    /// Surface color.
    pub color: Rgb,
    /// Opacity of the faint white halo.
    pub glow_opacity: f32,
    /// Scale of the halo relative to the moon.
    pub glow_scale: f64,
}

impl MoonVisual {
    /// Moon visual for the given display radius.
    pub fn new(display_radius: f64) -> Self {
        Self {
            display_radius,
            color: Rgb::new(0xCC, 0xCC, 0xCC),
            glow_opacity: 0.1,
            glow_scale: 1.2,
        }
    }
}

/// Ring bands around a ringed planet.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RingSystem {
    /// Bands from innermost to outermost.
    pub bands: [RingBand; 3],
}

impl RingSystem {
    /// Rings sized for a planet of the given display radius.
    pub fn for_radius(display_radius: f64) -> Self {
        Self {
            bands: RING_LAYOUT.map(|(inner, outer, opacity, color)| RingBand {
                inner: inner * display_radius,
                outer: outer * display_radius,
                opacity,
                color,
            }),
        }
    }
}

/// One translucent shell around the sun.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowShell {
    /// Scale relative to the sun's display radius.
    pub scale: f64,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Shell color.
    pub color: Rgb,
}

/// Appearance of the anchor.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SunVisual {
    /// Surface color.
    pub color: Rgb,
    /// Sphere radius in scene units.
    pub display_radius: f64,
    /// Emissive intensity of the surface.
    pub emissive_intensity: f32,
    /// Inner glow, outer glow, corona, and flare shells.
    pub shells: [GlowShell; 4],
    /// Extra scale applied to the inner glow shell.
    pub glow_pulse_scale: f64,
    /// Rotation of the corona shell about Y.
    pub corona_angle: f64,
}

impl SunVisual {
    /// Sun visual with shells at their resting opacity.
    pub fn new(color: Rgb, display_radius: f64) -> Self {
        Self {
            color,
            display_radius,
            emissive_intensity: 0.8,
            shells: SUN_SHELLS.map(|(scale, opacity, color)| GlowShell {
                scale,
                opacity,
                color,
            }),
            glow_pulse_scale: 1.0,
            corona_angle: 0.0,
        }
    }

    /// Animate the inner glow and corona for real time `t` and simulated time `sim_t`.
    pub fn animate(&mut self, t: f64, sim_t: f64) {
        self.shells[0].opacity = (0.6 + (t * 2.0).sin() * 0.2) as f32;
        self.glow_pulse_scale = 1.0 + (t * 1.5).sin() * 0.05;
        self.shells[2].opacity = (0.3 + (t * 1.2).sin() * 0.1) as f32;
        self.corona_angle = CORONA_SPIN_SPEED * sim_t;
    }
}

/// Atmosphere glow before selection doubling: `0.15 + sin(2t) * 0.05`.
pub fn glow_pulse(t: f64) -> f64 {
    0.15 + (t * 2.0).sin() * 0.05
}

/// Glow shell opacity, doubled while selected.
pub fn glow_opacity(t: f64, selected: bool) -> f32 {
    let base = glow_pulse(t);
    (if selected { base * 2.0 } else { base }) as f32
}

/// Surface emissive intensity.
pub fn emissive_intensity(selected: bool) -> f32 {
    if selected {
        EMISSIVE_SELECTED
    } else {
        EMISSIVE_IDLE
    }
}

/// Orbit-trail opacity.
pub fn trail_opacity(selected: bool) -> f32 {
    if selected {
        TRAIL_OPACITY_SELECTED
    } else {
        TRAIL_OPACITY_IDLE
    }
}

/// Vertical bob of the selected planet: `sin(3t) * 0.3`.
pub fn bob_offset(t: f64) -> f64 {
    (t * BOB_FREQUENCY).sin() * BOB_AMPLITUDE
}

/// White annulus drawn around the selected planet.
pub fn selection_ring(display_radius: f64) -> RingBand {
    RingBand {
        inner: display_radius * 4.0,
        outer: display_radius * 4.5,
        opacity: 0.6,
        color: Rgb::new(0xFF, 0xFF, 0xFF),
    }
}
