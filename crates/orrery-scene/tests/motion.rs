use std::f64::consts::PI;
use std::sync::Arc;

use orrery_bodies::{BodyRegistry, builtin_bodies, solar_system};
use orrery_config::Config;
use orrery_kinematics::orbital_angular_speed;
use orrery_scene::{BodyKind, BodySnapshot, FrameOutcome, SceneComposer, SceneSnapshot};

fn composer_with(registry: BodyRegistry, config: &Config) -> SceneComposer {
    SceneComposer::new(config, Arc::new(registry)).unwrap()
}

fn body<'a>(snapshot: &'a SceneSnapshot, name: &str) -> &'a BodySnapshot {
    snapshot.bodies.iter().find(|b| b.name == name).unwrap()
}

#[test]
fn update_order_does_not_change_transforms() {
    let config = Config::default();
    let mut forward = composer_with(solar_system().unwrap(), &config);
    let mut reversed_bodies = builtin_bodies().unwrap();
    reversed_bodies.reverse();
    let mut reversed = composer_with(BodyRegistry::new(reversed_bodies).unwrap(), &config);

    for i in 0..120 {
        let dt = 0.01 + (i % 7) as f64 * 0.005;
        assert_eq!(forward.frame(dt), FrameOutcome::Completed);
        assert_eq!(reversed.frame(dt), FrameOutcome::Completed);
    }

    let a = forward.snapshot();
    let b = reversed.snapshot();
    assert_eq!(a.bodies.len(), b.bodies.len());
    for expected in &a.bodies {
        let actual = body(&b, &expected.name);
        assert_eq!(actual.position, expected.position, "{}", expected.name);
        assert_eq!(actual.rotation_angle, expected.rotation_angle, "{}", expected.name);
    }
}

#[test]
fn earth_starts_on_positive_x_and_crosses_after_half_orbit() {
    let mut config = Config::default();
    config.simulation.time_scale = 5.0;
    let registry = solar_system().unwrap();
    let half_orbit = PI / orbital_angular_speed(registry.find("Earth").unwrap());
    let mut scene = composer_with(registry, &config);

    scene.frame(0.0);
    let start = body(&scene.snapshot(), "Earth").position;
    assert_eq!(start, [10.0, 0.0, 0.0]);

    scene.frame(half_orbit / 5.0);
    let snapshot = scene.snapshot();
    let earth = body(&snapshot, "Earth").position;
    assert!((earth[0] + 10.0).abs() < 1e-6, "x = {}", earth[0]);
    assert!(earth[1].abs() < 1e-12);
    assert!(earth[2].abs() < 1e-6, "z = {}", earth[2]);
}

#[test]
fn doubled_time_scale_doubles_displacement() {
    let mut slow_config = Config::default();
    slow_config.simulation.time_scale = 1.0;
    let mut fast_config = Config::default();
    fast_config.simulation.time_scale = 2.0;
    let mut slow = composer_with(solar_system().unwrap(), &slow_config);
    let mut fast = composer_with(solar_system().unwrap(), &fast_config);

    for dt in [0.016, 0.017, 0.5, 0.033, 1.25] {
        slow.frame(dt);
        fast.frame(dt);
    }

    let slow = slow.snapshot();
    let fast = fast.snapshot();
    assert_eq!(slow.real_time, fast.real_time);
    for name in ["Mercury", "Earth", "Jupiter", "Neptune"] {
        let s = body(&slow, name);
        let f = body(&fast, name);
        assert_eq!(f.orbital_angle, 2.0 * s.orbital_angle, "orbit of {name}");
        assert_eq!(f.rotation_angle, 2.0 * s.rotation_angle, "spin of {name}");
    }
}

#[test]
fn anchor_stays_at_origin_and_spins() {
    let mut scene = composer_with(solar_system().unwrap(), &Config::default());
    for _ in 0..10 {
        scene.frame(1.0);
    }
    let snapshot = scene.snapshot();
    let sun = body(&snapshot, "Sun");
    assert_eq!(sun.kind, BodyKind::Anchor);
    assert_eq!(sun.position, [0.0, 0.0, 0.0]);
    assert_eq!(sun.display_radius, 2.0);
    assert!(sun.rotation_angle > 0.0);
}

#[test]
fn retrograde_planet_spins_backwards() {
    let mut scene = composer_with(solar_system().unwrap(), &Config::default());
    scene.frame(10.0);
    let snapshot = scene.snapshot();
    assert!(body(&snapshot, "Venus").rotation_angle < 0.0);
    assert!(body(&snapshot, "Uranus").rotation_angle < 0.0);
    assert!(body(&snapshot, "Earth").rotation_angle > 0.0);
}

#[test]
fn every_moon_tracks_its_parent() {
    let mut scene = composer_with(solar_system().unwrap(), &Config::default());
    for _ in 0..50 {
        scene.frame(0.25);
    }
    let snapshot = scene.snapshot();
    let registry = scene.registry();
    for moon in snapshot.bodies.iter().filter(|b| b.kind == BodyKind::Moon) {
        let parent_name = moon.parent.as_deref().unwrap();
        let parent = body(&snapshot, parent_name);
        let data = registry.find(parent_name).unwrap().moon(&moon.name).unwrap();
        let dx = moon.position[0] - parent.position[0];
        let dy = moon.position[1] - parent.position[1];
        let dz = moon.position[2] - parent.position[2];
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();
        assert!(
            (distance - (data.distance + parent.display_radius)).abs() < 1e-9,
            "{} is {distance} from {}",
            moon.name,
            parent_name
        );
        assert!((moon.display_radius - data.radius * 0.3).abs() < 1e-12);
    }
}

#[test]
fn sun_light_flickers_within_range() {
    let mut scene = composer_with(solar_system().unwrap(), &Config::default());
    for _ in 0..100 {
        scene.frame(0.1);
        let intensity = scene.lighting().sun.intensity;
        assert!((2.2 - 1e-5..=2.8 + 1e-5).contains(&intensity));
    }
}

#[test]
fn snapshot_serializes_to_json() {
    let mut scene = composer_with(solar_system().unwrap(), &Config::default());
    scene.frame(1.0 / 60.0);
    let json = serde_json::to_value(scene.snapshot()).unwrap();
    assert_eq!(json["bodies"].as_array().unwrap().len(), 25);
    assert_eq!(json["bodies"][0]["kind"], "anchor");
    assert!(json["info_panel"].is_null());
}
