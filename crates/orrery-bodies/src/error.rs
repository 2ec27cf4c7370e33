//! Registry error types.

use crate::ColorParseError;

/// Errors raised while building or querying a [`BodyRegistry`](crate::BodyRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No body with this name is registered.
    #[error("no celestial body named '{0}'")]
    NotFound(String),

    /// Two bodies share a name.
    #[error("celestial body '{0}' is defined more than once")]
    DuplicateBody(String),

    /// Two moons of the same parent share a name.
    #[error("'{parent}' has more than one moon named '{moon}'")]
    DuplicateMoon {
        /// Parent body name.
        parent: String,
        /// Repeated moon name.
        moon: String,
    },

    /// No body sits at distance zero.
    #[error("registry has no anchor body (distance_from_sun = 0)")]
    MissingAnchor,

    /// More than one body sits at distance zero.
    #[error("registry has more than one anchor body: '{first}' and '{second}'")]
    MultipleAnchors {
        /// The first anchor found.
        first: String,
        /// The second anchor found.
        second: String,
    },

    /// A numeric attribute is outside its legal range.
    #[error("'{body}': {field} = {value} is invalid ({reason})")]
    InvalidValue {
        /// Body (or `parent/moon`) that carries the value.
        body: String,
        /// Attribute name.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// A body name is empty.
    #[error("celestial body at index {0} has an empty name")]
    EmptyName(usize),

    /// A color literal could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// The body file could not be read.
    #[error("failed to read body table: {0}")]
    Read(#[source] std::io::Error),

    /// The body file is not valid RON.
    #[error("failed to parse body table: {0}")]
    Parse(#[source] ron::error::SpannedError),
}
