use std::sync::Arc;

use glam::Vec2;
use orrery_bodies::solar_system;
use orrery_config::Config;
use orrery_scene::{
    BodyVisual, FrameOutcome, GENERIC_FAILURE, PointerEvent, SceneComposer, Selected,
};

fn scene() -> SceneComposer {
    let mut scene =
        SceneComposer::new(&Config::default(), Arc::new(solar_system().unwrap())).unwrap();
    scene.frame(0.0);
    scene
}

fn ndc_of(scene: &SceneComposer, name: &str) -> Vec2 {
    let entity = scene.entity(name).unwrap();
    let position = scene
        .world()
        .get::<orrery_scene::Transform>(entity)
        .unwrap()
        .translation
        .as_vec3();
    let clip = scene.camera().view_projection_matrix().project_point3(position);
    Vec2::new(clip.x, clip.y)
}

#[test]
fn clicking_a_planet_selects_it_and_opens_the_panel() {
    let mut scene = scene();
    let earth_ndc = ndc_of(&scene, "Earth");
    let hit = scene.click(earth_ndc);
    assert_eq!(hit, Some(scene.entity("Earth").unwrap()));
    assert_eq!(scene.selected().unwrap().name, "Earth");

    let panel = scene.info_panel().content().unwrap();
    assert_eq!(panel.name, "Earth");
    assert_eq!(panel.day_length, "24.0 hours");
}

#[test]
fn clicking_the_selected_planet_again_deselects_it() {
    let mut scene = scene();
    let earth_ndc = ndc_of(&scene, "Earth");
    scene.click(earth_ndc);
    scene.click(earth_ndc);
    assert!(scene.selected().is_none());
    assert!(!scene.info_panel().is_open());
}

#[test]
fn clicking_empty_space_keeps_selection() {
    let mut scene = scene();
    scene.select_by_name("Saturn").unwrap();
    let hit = scene.click(Vec2::new(0.95, 0.95));
    assert!(hit.is_none());
    assert_eq!(scene.selected().unwrap().name, "Saturn");
}

#[test]
fn click_event_routes_through_pointer_handler() {
    let mut scene = scene();
    let mars_ndc = ndc_of(&scene, "Mars");
    scene.handle_pointer(PointerEvent::Click(mars_ndc));
    assert_eq!(scene.selected().unwrap().name, "Mars");

    let earth_ndc = ndc_of(&scene, "Earth");
    scene.handle_pointer(PointerEvent::Click(earth_ndc));
    assert_eq!(scene.selected().unwrap().name, "Earth");
    let mars = scene.entity("Mars").unwrap();
    assert!(scene.world().get::<Selected>(mars).is_none());
}

#[test]
fn selected_planet_bobs_and_brightens() {
    let mut scene = scene();
    scene.select_by_name("Earth").unwrap();
    for _ in 0..12 {
        scene.frame(0.05);
    }
    let earth = scene.entity("Earth").unwrap();
    let visual = scene.world().get::<BodyVisual>(earth).unwrap();
    assert_eq!(visual.emissive_intensity, 0.3);
    assert_eq!(visual.trail_opacity, 0.4);
    let t = scene.clock().real_elapsed();
    let expected_bob = (t * 3.0).sin() * 0.3;
    assert!((visual.bob - expected_bob).abs() < 1e-12);
    let y = scene.world().get::<orrery_scene::Transform>(earth).unwrap().translation.y;
    assert_eq!(y, visual.bob);

    let mars = scene.entity("Mars").unwrap();
    let idle = scene.world().get::<BodyVisual>(mars).unwrap();
    assert_eq!(idle.emissive_intensity, 0.1);
    assert!(idle.label.is_none());
}

#[test]
fn panicking_draw_trips_the_boundary_until_retry() {
    let mut scene = scene();
    let outcome = scene.frame_with(0.1, |_| panic!("surface lost"));
    assert_eq!(outcome, FrameOutcome::Failed("surface lost".to_string()));

    let frames = scene.clock().frames();
    assert_eq!(scene.frame(0.1), FrameOutcome::Suspended);
    assert_eq!(scene.clock().frames(), frames);

    let fallback = scene.snapshot().fallback.unwrap();
    assert_eq!(fallback.message, "surface lost");
    assert_ne!(fallback.message, GENERIC_FAILURE);

    assert!(scene.retry().unwrap());
    assert_eq!(scene.frame(0.1), FrameOutcome::Completed);
    assert_eq!(scene.clock().frames(), frames + 1);
    assert!(scene.fallback().is_none());
}

#[test]
fn camera_gestures_respect_distance_limits() {
    let mut scene = scene();
    for _ in 0..200 {
        scene.handle_pointer(PointerEvent::Scroll(-1.0));
    }
    assert!(scene.camera().distance <= 100.0);
    for _ in 0..200 {
        scene.handle_pointer(PointerEvent::Scroll(1.0));
    }
    assert!(scene.camera().distance >= 5.0);
    assert!((scene.camera().position() - scene.camera().target).length() >= 5.0 - 1e-4);
}
