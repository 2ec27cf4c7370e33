//! Orbit camera: rotate around a target, dolly zoom with clamped distance,
//! and screen-space pan.

use bevy_ecs::prelude::*;
use glam::{Mat4, Vec2, Vec3};
use orrery_config::CameraConfig;

use crate::picking::Ray;

/// Dolly factor per unit of scroll at zoom speed 1.0.
const ZOOM_BASE: f32 = 0.95;
/// Keeps the camera off the poles so the up vector stays well defined.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Camera orbiting a target point.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at and orbits around.
    pub target: Vec3,
    /// Azimuth in radians; 0 places the camera on the +Z side of the target.
    pub yaw: f32,
    /// Elevation above the target's horizon in radians.
    pub pitch: f32,
    /// Distance from the target.
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect_ratio: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Input toggles and speeds.
    pub controls: OrbitControls,
}

/// Which gestures are allowed and how strongly they act.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl From<&CameraConfig> for OrbitControls {
    fn from(config: &CameraConfig) -> Self {
        Self {
            enable_pan: config.enable_pan,
            enable_zoom: config.enable_zoom,
            enable_rotate: config.enable_rotate,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            rotate_speed: config.rotate_speed,
            min_distance: config.min_distance,
            max_distance: config.max_distance.max(config.min_distance),
        }
    }
}

impl OrbitCamera {
    /// Camera at the configured eye position, looking at the origin.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        let controls = OrbitControls::from(config);
        let eye = Vec3::from_array(config.position);
        let distance = eye.length();
        let (yaw, pitch) = if distance > f32::EPSILON {
            (eye.x.atan2(eye.z), (eye.y / distance).asin())
        } else {
            (0.0, 0.0)
        };
        Self {
            target: Vec3::ZERO,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance: distance.clamp(controls.min_distance, controls.max_distance),
            fov_y: config.fov_deg.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 2000.0,
            controls,
        }
    }

    /// Eye position in scene units.
    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or_zero()
    }

    /// Camera right vector.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    /// Camera up vector.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Orbit by a drag of `delta` in normalized viewport units (a full-width
    /// drag is 1.0). Returns `false` when rotation is disabled or `delta` is
    /// not finite.
    pub fn rotate(&mut self, delta: Vec2) -> bool {
        if !self.controls.enable_rotate || !delta.is_finite() {
            return false;
        }
        let speed = std::f32::consts::TAU * self.controls.rotate_speed;
        self.yaw -= delta.x * speed;
        self.pitch = (self.pitch + delta.y * speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        true
    }

    /// Dolly toward (positive `scroll`) or away from the target. Returns
    /// `false` when zoom is disabled or `scroll` is not finite.
    pub fn zoom(&mut self, scroll: f32) -> bool {
        if !self.controls.enable_zoom {
            return false;
        }
        if !scroll.is_finite() {
            tracing::warn!(scroll, "ignoring non-finite zoom input");
            return false;
        }
        let factor = ZOOM_BASE.powf(self.controls.zoom_speed * scroll.abs());
        let distance = if scroll > 0.0 {
            self.distance * factor
        } else {
            self.distance / factor
        };
        self.distance = distance.clamp(self.controls.min_distance, self.controls.max_distance);
        true
    }

    /// Slide the target and eye across the view plane by a drag of `delta`
    /// in normalized viewport units. Returns `false` when pan is disabled or
    /// `delta` is not finite.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if !self.controls.enable_pan {
            return false;
        }
        if !delta.is_finite() {
            tracing::warn!(?delta, "ignoring non-finite pan input");
            return false;
        }
        let visible_height = 2.0 * self.distance * (self.fov_y * 0.5).tan();
        let scale = visible_height * self.controls.pan_speed;
        let offset =
            self.right() * (-delta.x * scale * self.aspect_ratio) + self.up() * (delta.y * scale);
        self.target += offset;
        true
    }

    /// Update the aspect ratio from a viewport size in pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// View-to-clip transform.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (`[-1, 1]` on both axes, +Y up).
    pub fn screen_ray(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray::new(self.position(), far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn test_initial_position_matches_config() {
        let cam = camera();
        assert!((cam.position() - Vec3::new(0.0, 5.0, 20.0)).length() < 1e-4);
        assert!((cam.fov_y - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut cam = camera();
        for _ in 0..500 {
            cam.zoom(1.0);
        }
        assert!((cam.distance - 5.0).abs() < 1e-5);
        for _ in 0..500 {
            cam.zoom(-1.0);
        }
        assert!((cam.distance - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_finite_input_leaves_camera_usable() {
        let mut cam = camera();
        let distance = cam.distance;
        let target = cam.target;
        assert!(!cam.zoom(f32::NAN));
        assert!(!cam.zoom(f32::INFINITY));
        assert!(!cam.pan(Vec2::new(f32::NAN, 0.0)));
        assert!(!cam.rotate(Vec2::new(0.0, f32::INFINITY)));
        assert_eq!(cam.distance, distance);
        assert_eq!(cam.target, target);

        assert!(cam.zoom(1.0));
        assert!(cam.distance.is_finite() && cam.distance < distance);
    }

    #[test]
    fn test_zoom_in_moves_closer() {
        let mut cam = camera();
        let before = cam.distance;
        assert!(cam.zoom(1.0));
        assert!(cam.distance < before);
    }

    #[test]
    fn test_rotate_keeps_distance() {
        let mut cam = camera();
        let before = cam.position().length();
        cam.rotate(Vec2::new(0.25, 0.1));
        assert!((cam.position().length() - before).abs() < 1e-3);
        assert!(cam.pitch.abs() < std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_pitch_never_flips() {
        let mut cam = camera();
        cam.rotate(Vec2::new(0.0, 10.0));
        assert!(cam.pitch <= PITCH_LIMIT);
        assert!(cam.up().y > 0.0);
    }

    #[test]
    fn test_disabled_gestures_do_nothing() {
        let config = CameraConfig {
            enable_pan: false,
            enable_zoom: false,
            enable_rotate: false,
            ..CameraConfig::default()
        };
        let mut cam = OrbitCamera::from_config(&config, 1.0);
        let before = cam.clone();
        assert!(!cam.rotate(Vec2::ONE));
        assert!(!cam.zoom(3.0));
        assert!(!cam.pan(Vec2::ONE));
        assert_eq!(cam, before);
    }

    #[test]
    fn test_pan_moves_target() {
        let mut cam = camera();
        assert!(cam.pan(Vec2::new(0.1, 0.0)));
        assert!(cam.target.length() > 0.0);
        assert!(cam.target.y.abs() < 1e-5);
    }

    #[test]
    fn test_center_ray_hits_target() {
        let cam = camera();
        let ray = cam.screen_ray(Vec2::ZERO);
        assert!((ray.origin - cam.position()).length() < 1e-5);
        assert!(ray.direction.dot(cam.forward()) > 0.9999);
    }
}
