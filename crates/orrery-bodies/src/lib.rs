//! Celestial body definitions and the validated body registry.
//!
//! A [`BodyRegistry`] is immutable once built: every invariant (unique names,
//! exactly one anchor, non-negative periods, positive radii) is checked at
//! construction so downstream code never has to re-validate per frame.

mod body;
mod color;
mod error;
mod registry;
mod solar_system;

pub use body::{CelestialBody, Moon};
pub use color::{ColorParseError, Rgb};
pub use error::RegistryError;
pub use registry::BodyRegistry;
pub use solar_system::{builtin_bodies, solar_system};
