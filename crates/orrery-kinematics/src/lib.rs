//! Deterministic celestial motion: display scaling, angular speeds, and
//! circular-orbit poses as pure functions of a body and simulated time.
//!
//! These are deliberately visual approximations, not orbital mechanics: speeds
//! fall off with the square root of the period so the outer planets still move
//! visibly, and gas giants are shrunk logarithmically.

mod clock;
mod kinematics;
mod pose;

pub use clock::{MAX_TIME_SCALE, MIN_TIME_SCALE, SimClock};
pub use kinematics::{
    ANCHOR_DISPLAY_RADIUS, DEFAULT_DISPLAY_SCALE, GIANT_RADIUS_THRESHOLD, MOON_RADIUS_SCALE,
    MOON_SPEED_CONSTANT, ORBITAL_SPEED_CONSTANT, ROTATION_SPEED_CONSTANT, moon_angular_speed,
    moon_display_radius, moon_offset, orbital_angle, orbital_angular_speed, orbital_offset,
    rotation_angle, rotation_angular_speed, rotation_direction, scaled_radius,
};
pub use pose::{BodyKinematics, BodyPose, MoonKinematics};
