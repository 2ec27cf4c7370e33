//! Ray casting against body display spheres.

use glam::{DVec3, Vec3};

/// A half-line from `origin` along the unit vector `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the first intersection with a sphere, if any.
    ///
    /// A ray starting inside the sphere hits its far side.
    pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Option<f64> {
        let origin = self.origin.as_dvec3();
        let direction = self.direction.as_dvec3();
        if direction == DVec3::ZERO {
            return None;
        }
        let oc = origin - center;
        let b = oc.dot(direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// The candidate whose sphere the ray hits first.
pub fn nearest_hit<T, I>(ray: &Ray, candidates: I) -> Option<T>
where
    I: IntoIterator<Item = (T, DVec3, f64)>,
{
    candidates
        .into_iter()
        .filter_map(|(item, center, radius)| {
            ray.intersect_sphere(center, radius).map(|d| (item, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}
