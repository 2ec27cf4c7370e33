//! Celestial body definition: the immutable parameters of a sun, planet, or moon.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// A moon orbiting a [`CelestialBody`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    /// Name, unique among the parent's moons.
    pub name: String,
    /// Radius relative to Earth's moon.
    pub radius: f64,
    /// Distance from the parent's surface in scene units.
    pub distance: f64,
    /// Orbital period in days. Zero disables orbiting.
    pub orbital_period: f64,
}

/// Definition of a body in the solar system.
///
/// This is data only. Runtime animation state lives on the body's scene
/// entity, never here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Unique name (e.g., "Earth").
    pub name: String,

    /// Radius relative to Earth (Earth = 1.0). Must be positive.
    pub radius: f64,
    /// Mass relative to Earth. Must be non-negative.
    pub mass: f64,
    /// Average surface temperature in degrees Celsius.
    pub temperature: f64,

    /// Distance from the anchor in AU-like units. Exactly zero for the anchor.
    pub distance_from_sun: f64,
    /// Orbital period in Earth days. Zero disables orbiting.
    pub orbital_period: f64,
    /// Rotation period in hours. Negative values rotate retrograde.
    pub rotation_period: f64,

    /// Base color.
    pub color: Rgb,
    /// Whether the body is drawn with a ring system.
    #[serde(default)]
    pub has_rings: bool,

    /// Moons in display order.
    #[serde(default)]
    pub moons: Vec<Moon>,

    /// One-paragraph description for the info panel.
    #[serde(default)]
    pub description: String,
    /// Short facts for the info panel.
    #[serde(default)]
    pub facts: Vec<String>,
}

impl CelestialBody {
    /// Whether this body is the anchor every distance is measured from.
    pub fn is_anchor(&self) -> bool {
        self.distance_from_sun == 0.0
    }

    /// Whether the body rotates opposite to the prevailing direction.
    pub fn is_retrograde(&self) -> bool {
        self.rotation_period < 0.0
    }

    /// Length of one day in hours, regardless of rotation direction.
    pub fn day_length_hours(&self) -> f64 {
        self.rotation_period.abs()
    }

    /// Look up a moon by name.
    pub fn moon(&self, name: &str) -> Option<&Moon> {
        self.moons.iter().find(|m| m.name == name)
    }
}
