//! Body registry: validated lookup over every body in the scene.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::{CelestialBody, RegistryError};

/// Registry of all celestial bodies.
///
/// Construction validates the whole table, so a registry value always has
/// exactly one anchor, unique names, and legal numeric attributes.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    name_index: HashMap<String, usize>,
    anchor: usize,
}

impl BodyRegistry {
    /// Build a registry, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: empty or duplicate names, duplicate
    /// moon names within a parent, out-of-range numbers, or an anchor count
    /// other than one.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, RegistryError> {
        let mut name_index = HashMap::with_capacity(bodies.len());
        let mut anchor: Option<usize> = None;

        for (idx, body) in bodies.iter().enumerate() {
            if body.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(idx));
            }
            if name_index.insert(body.name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateBody(body.name.clone()));
            }
            validate_body(body)?;

            if body.is_anchor() {
                if let Some(first) = anchor {
                    return Err(RegistryError::MultipleAnchors {
                        first: bodies[first].name.clone(),
                        second: body.name.clone(),
                    });
                }
                anchor = Some(idx);
            }
        }

        let anchor = anchor.ok_or(RegistryError::MissingAnchor)?;
        tracing::debug!(
            bodies = bodies.len(),
            anchor = %bodies[anchor].name,
            "body registry validated"
        );

        Ok(Self {
            bodies,
            name_index,
            anchor,
        })
    }

    /// Parse and validate a RON list of bodies.
    pub fn from_ron_str(source: &str) -> Result<Self, RegistryError> {
        let bodies: Vec<CelestialBody> = ron::from_str(source).map_err(RegistryError::Parse)?;
        Self::new(bodies)
    }

    /// Read, parse, and validate a RON body file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path).map_err(RegistryError::Read)?;
        let registry = Self::from_ron_str(&contents)?;
        tracing::info!(path = %path.display(), bodies = registry.len(), "loaded body table");
        Ok(registry)
    }

    /// Every body, in registration order.
    pub fn all_bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Look up a body by name.
    pub fn find(&self, name: &str) -> Result<&CelestialBody, RegistryError> {
        self.index_of(name).map(|idx| &self.bodies[idx])
    }

    /// Registration index of the named body.
    pub fn index_of(&self, name: &str) -> Result<usize, RegistryError> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// The single body at distance zero.
    pub fn anchor(&self) -> &CelestialBody {
        &self.bodies[self.anchor]
    }

    /// Every body except the anchor, in registration order.
    pub fn orbiting_bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| !b.is_anchor())
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a validated registry; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all bodies.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }
}

fn check(
    body: &str,
    field: &'static str,
    value: f64,
    ok: bool,
    reason: &'static str,
) -> Result<(), RegistryError> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(RegistryError::InvalidValue {
            body: body.to_string(),
            field,
            value,
            reason: if value.is_finite() { reason } else { "not finite" },
        })
    }
}

fn validate_body(body: &CelestialBody) -> Result<(), RegistryError> {
    let name = body.name.as_str();
    check(name, "radius", body.radius, body.radius > 0.0, "must be positive")?;
    check(name, "mass", body.mass, body.mass >= 0.0, "must be non-negative")?;
    check(name, "temperature", body.temperature, true, "")?;
    check(
        name,
        "distance_from_sun",
        body.distance_from_sun,
        body.distance_from_sun >= 0.0,
        "must be non-negative",
    )?;
    check(
        name,
        "orbital_period",
        body.orbital_period,
        body.orbital_period >= 0.0,
        "must be non-negative",
    )?;
    check(name, "rotation_period", body.rotation_period, true, "")?;

    let mut moon_names = HashSet::with_capacity(body.moons.len());
    for moon in &body.moons {
        if !moon_names.insert(moon.name.as_str()) {
            return Err(RegistryError::DuplicateMoon {
                parent: body.name.clone(),
                moon: moon.name.clone(),
            });
        }
        let label = format!("{}/{}", body.name, moon.name);
        check(&label, "radius", moon.radius, moon.radius > 0.0, "must be positive")?;
        check(
            &label,
            "distance",
            moon.distance,
            moon.distance >= 0.0,
            "must be non-negative",
        )?;
        check(
            &label,
            "orbital_period",
            moon.orbital_period,
            moon.orbital_period >= 0.0,
            "must be non-negative",
        )?;
    }
    Ok(())
}
