//! The overlay describing the selected body.

use bevy_ecs::prelude::*;
use orrery_bodies::CelestialBody;
use serde::Serialize;

/// Formatted contents of the info overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InfoPanelContent {
    pub name: String,
    pub description: String,
    /// e.g. `"1.52 AU"`.
    pub distance: String,
    /// e.g. `"10,759 days"`.
    pub orbital_period: String,
    /// Absolute rotation period, e.g. `"5832.5 hours"`.
    pub day_length: String,
    /// Radius relative to Earth, e.g. `"11.21x"`.
    pub size: String,
    pub facts: Vec<String>,
}

impl InfoPanelContent {
    /// Format a body for display.
    pub fn for_body(body: &CelestialBody) -> Self {
        Self {
            name: body.name.clone(),
            description: body.description.clone(),
            distance: format!("{} AU", body.distance_from_sun),
            orbital_period: format!("{} days", group_thousands(body.orbital_period)),
            day_length: format!("{:.1} hours", body.day_length_hours()),
            size: format!("{:.2}x", body.radius),
            facts: body.facts.clone(),
        }
    }
}

/// Info overlay state. Empty while nothing is selected.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoPanel {
    content: Option<InfoPanelContent>,
}

impl InfoPanel {
    /// Show `body` in the panel, replacing whatever was shown.
    pub fn show(&mut self, body: &CelestialBody) {
        self.content = Some(InfoPanelContent::for_body(body));
    }

    /// Hide the panel.
    pub fn close(&mut self) {
        self.content = None;
    }

    /// Current contents, if the panel is open.
    pub fn content(&self) -> Option<&InfoPanelContent> {
        self.content.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }
}

/// Render a number with comma thousands separators and at most three
/// fractional digits, trailing zeros trimmed: `10759.0` -> `"10,759"`,
/// `365.25` -> `"365.25"`.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}
