//! Pure kinematics functions over [`CelestialBody`] and [`Moon`].
//!
//! All angles are radians and all times are simulated seconds. Every function
//! is total over a validated registry: zero periods short-circuit to zero
//! speed before any division happens.

use glam::DVec3;
use orrery_bodies::{CelestialBody, Moon};

/// Display radius of the anchor, independent of its true radius.
pub const ANCHOR_DISPLAY_RADIUS: f64 = 2.0;
/// Radii above this (Earth radii) are compressed logarithmically.
pub const GIANT_RADIUS_THRESHOLD: f64 = 5.0;
/// Orbital angular speed of a body with a one-year period.
pub const ORBITAL_SPEED_CONSTANT: f64 = 0.01;
/// Rotational angular speed of a body with a 24-hour day.
pub const ROTATION_SPEED_CONSTANT: f64 = 0.01;
/// Orbital angular speed of a moon with a 30-day period.
pub const MOON_SPEED_CONSTANT: f64 = 0.02;
/// Moon display radius per unit of true (lunar-relative) radius.
pub const MOON_RADIUS_SCALE: f64 = 0.3;
/// Scene units per distance unit, shared by every body.
pub const DEFAULT_DISPLAY_SCALE: f64 = 10.0;

const DAYS_PER_YEAR: f64 = 365.0;
const HOURS_PER_DAY: f64 = 24.0;
const MOON_REFERENCE_PERIOD_DAYS: f64 = 30.0;

/// Display radius for a body.
///
/// The anchor gets [`ANCHOR_DISPLAY_RADIUS`]; bodies larger than
/// [`GIANT_RADIUS_THRESHOLD`] get `ln(radius) + 2`; everything else keeps its
/// radius. Each branch is monotonic non-decreasing in radius.
pub fn scaled_radius(body: &CelestialBody) -> f64 {
    if body.is_anchor() {
        ANCHOR_DISPLAY_RADIUS
    } else if body.radius > GIANT_RADIUS_THRESHOLD {
        body.radius.ln() + 2.0
    } else {
        body.radius
    }
}

/// Orbital angular speed in radians per simulated second.
///
/// `0.01 / sqrt(period / 365)`, or exactly zero for a non-orbiting body.
pub fn orbital_angular_speed(body: &CelestialBody) -> f64 {
    if body.orbital_period == 0.0 {
        return 0.0;
    }
    ORBITAL_SPEED_CONSTANT / (body.orbital_period / DAYS_PER_YEAR).sqrt()
}

/// Rotational angular speed magnitude in radians per simulated second.
///
/// `0.01 / (|period| / 24)`, or exactly zero when the period is zero. The
/// direction is reported separately by [`rotation_direction`].
pub fn rotation_angular_speed(body: &CelestialBody) -> f64 {
    if body.rotation_period == 0.0 {
        return 0.0;
    }
    ROTATION_SPEED_CONSTANT / (body.rotation_period.abs() / HOURS_PER_DAY)
}

/// `1.0` for prograde, `-1.0` for retrograde, `0.0` for a body that does not spin.
pub fn rotation_direction(body: &CelestialBody) -> f64 {
    if body.rotation_period > 0.0 {
        1.0
    } else if body.rotation_period < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Orbital angle at simulated time `t`.
pub fn orbital_angle(body: &CelestialBody, t: f64) -> f64 {
    orbital_angular_speed(body) * t
}

/// Signed self-rotation angle at simulated time `t`.
pub fn rotation_angle(body: &CelestialBody, t: f64) -> f64 {
    rotation_direction(body) * rotation_angular_speed(body) * t
}

/// Offset from the anchor at simulated time `t`, on the XZ plane.
pub fn orbital_offset(body: &CelestialBody, t: f64, display_scale: f64) -> DVec3 {
    let distance = body.distance_from_sun * display_scale;
    let angle = orbital_angle(body, t);
    DVec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
}

/// Moon orbital angular speed: `0.02 / sqrt(period / 30)`, zero for period zero.
pub fn moon_angular_speed(moon: &Moon) -> f64 {
    if moon.orbital_period == 0.0 {
        return 0.0;
    }
    MOON_SPEED_CONSTANT / (moon.orbital_period / MOON_REFERENCE_PERIOD_DAYS).sqrt()
}

/// Moon offset from its parent's center at simulated time `t`.
///
/// The parent's display radius is added to the moon's distance so moons
/// never sit inside a compressed parent.
pub fn moon_offset(moon: &Moon, parent_scaled_radius: f64, t: f64) -> DVec3 {
    let distance = moon.distance + parent_scaled_radius;
    let angle = moon_angular_speed(moon) * t;
    DVec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
}

/// Display radius for a moon.
pub fn moon_display_radius(moon: &Moon) -> f64 {
    moon.radius * MOON_RADIUS_SCALE
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use orrery_bodies::{Rgb, solar_system};

    use super::*;

    fn body(radius: f64, distance: f64, orbital: f64, rotation: f64) -> CelestialBody {
        CelestialBody {
            name: "Test".to_string(),
            radius,
            mass: 1.0,
            temperature: 0.0,
            distance_from_sun: distance,
            orbital_period: orbital,
            rotation_period: rotation,
            color: Rgb::new(255, 255, 255),
            has_rings: false,
            moons: Vec::new(),
            description: String::new(),
            facts: Vec::new(),
        }
    }

    #[test]
    fn test_zero_orbital_period_never_moves() {
        let still = body(1.0, 2.0, 0.0, 24.0);
        assert_eq!(orbital_angular_speed(&still), 0.0);
        for t in [0.0, 1.0, 1e6, 1e12] {
            assert_eq!(orbital_angle(&still, t), 0.0);
            assert_eq!(orbital_offset(&still, t, 10.0), DVec3::new(20.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_zero_rotation_period_never_spins() {
        let still = body(1.0, 2.0, 365.0, 0.0);
        assert_eq!(rotation_angular_speed(&still), 0.0);
        assert_eq!(rotation_direction(&still), 0.0);
        assert_eq!(rotation_angle(&still, 1e9), 0.0);
    }

    #[test]
    fn test_one_year_period_gives_base_speed() {
        let b = body(1.0, 1.0, 365.0, 24.0);
        assert!((orbital_angular_speed(&b) - ORBITAL_SPEED_CONSTANT).abs() < 1e-15);
        assert!((rotation_angular_speed(&b) - ROTATION_SPEED_CONSTANT).abs() < 1e-15);
    }

    #[test]
    fn test_orbital_speed_falls_with_period() {
        let registry = solar_system().unwrap();
        let speeds: Vec<f64> = registry.orbiting_bodies().map(orbital_angular_speed).collect();
        for pair in speeds.windows(2) {
            assert!(pair[0] > pair[1], "speeds not decreasing: {speeds:?}");
        }
        for s in speeds {
            assert!(s.is_finite() && s > 0.0);
        }
    }

    #[test]
    fn test_jupiter_scaled_radius() {
        let registry = solar_system().unwrap();
        let jupiter = registry.find("Jupiter").unwrap();
        let r = scaled_radius(jupiter);
        assert!((r - (11.21_f64.ln() + 2.0)).abs() < 1e-12);
        assert!((r - 4.417).abs() < 1e-3);
    }

    #[test]
    fn test_anchor_scaled_radius_is_fixed() {
        let registry = solar_system().unwrap();
        assert_eq!(scaled_radius(registry.anchor()), ANCHOR_DISPLAY_RADIUS);

        let mut huge_anchor = registry.anchor().clone();
        huge_anchor.radius = 10_000.0;
        assert_eq!(scaled_radius(&huge_anchor), 2.0);
    }

    #[test]
    fn test_small_bodies_keep_radius() {
        assert_eq!(scaled_radius(&body(0.383, 0.39, 88.0, 1407.6)), 0.383);
        assert_eq!(scaled_radius(&body(5.0, 1.0, 1.0, 1.0)), 5.0);
    }

    #[test]
    fn test_scaled_radius_continuous_within_each_branch() {
        let eps = 1e-9;
        let below = scaled_radius(&body(GIANT_RADIUS_THRESHOLD - eps, 1.0, 1.0, 1.0));
        assert!((below - GIANT_RADIUS_THRESHOLD).abs() < 1e-6);

        let above = scaled_radius(&body(GIANT_RADIUS_THRESHOLD + eps, 1.0, 1.0, 1.0));
        assert!((above - (GIANT_RADIUS_THRESHOLD.ln() + 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_scaled_radius_monotonic_within_each_branch() {
        let mut previous = 0.0;
        for i in 1..500 {
            let r = i as f64 * 0.01;
            let s = scaled_radius(&body(r, 1.0, 1.0, 1.0));
            assert!(s >= previous, "small branch decreased at r={r}");
            previous = s;
        }
        let mut previous = f64::MIN;
        for i in 1..=1000 {
            let r = GIANT_RADIUS_THRESHOLD + i as f64 * 0.1;
            let s = scaled_radius(&body(r, 1.0, 1.0, 1.0));
            assert!(s >= previous, "giant branch decreased at r={r}");
            previous = s;
        }
    }

    #[test]
    fn test_earth_half_orbit() {
        let registry = solar_system().unwrap();
        let earth = registry.find("Earth").unwrap();
        let scale = DEFAULT_DISPLAY_SCALE;

        let start = orbital_offset(earth, 0.0, scale);
        assert_eq!(start, DVec3::new(scale, 0.0, 0.0));

        let half = PI / orbital_angular_speed(earth);
        let opposite = orbital_offset(earth, half, scale);
        assert!((opposite - DVec3::new(-scale, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_orbit_radius_is_constant() {
        let b = body(1.0, 1.52, 687.0, 24.6);
        for i in 0..50 {
            let offset = orbital_offset(&b, i as f64 * 37.0, 10.0);
            assert!((offset.length() - 15.2).abs() < 1e-9);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn test_retrograde_rotation_is_opposite() {
        let retro = body(1.0, 0.72, 225.0, -5832.5);
        let pro = body(1.0, 0.72, 225.0, 5832.5);
        assert_eq!(rotation_angular_speed(&retro), rotation_angular_speed(&pro));
        let t = 1234.5;
        assert!(rotation_angle(&pro, t) > 0.0);
        assert_eq!(rotation_angle(&retro, t), -rotation_angle(&pro, t));
    }

    #[test]
    fn test_moon_offset_clears_parent_surface() {
        let luna = Moon {
            name: "Luna".to_string(),
            radius: 1.0,
            distance: 3.0,
            orbital_period: 27.3,
        };
        for i in 0..20 {
            let offset = moon_offset(&luna, 1.0, i as f64 * 11.0);
            assert!((offset.length() - 4.0).abs() < 1e-9);
        }
        assert!((moon_display_radius(&luna) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_moon_speed_reference_and_zero_guard() {
        let mut m = Moon {
            name: "M".to_string(),
            radius: 1.0,
            distance: 1.0,
            orbital_period: 30.0,
        };
        assert!((moon_angular_speed(&m) - MOON_SPEED_CONSTANT).abs() < 1e-15);
        m.orbital_period = 0.0;
        assert_eq!(moon_angular_speed(&m), 0.0);
        assert_eq!(moon_offset(&m, 2.0, 1e6), DVec3::new(3.0, 0.0, 0.0));
    }
}
