//! The built-in solar system table.
//!
//! Sizes are relative to Earth. Distances beyond Mars are compressed
//! logarithmically so the outer planets stay on screen.

use crate::{BodyRegistry, CelestialBody, Moon, RegistryError};

fn moon(name: &str, radius: f64, distance: f64, orbital_period: f64) -> Moon {
    Moon {
        name: name.to_string(),
        radius,
        distance,
        orbital_period,
    }
}

fn facts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The sun, the eight planets, and their major moons.
///
/// # Errors
///
/// Only fails if a color literal in the table is malformed.
pub fn builtin_bodies() -> Result<Vec<CelestialBody>, RegistryError> {
    Ok(vec![
        CelestialBody {
            name: "Sun".to_string(),
            radius: 109.0,
            mass: 333_000.0,
            temperature: 5778.0,
            distance_from_sun: 0.0,
            orbital_period: 0.0,
            rotation_period: 609.12,
            color: "#FDB813".parse()?,
            has_rings: false,
            moons: Vec::new(),
            description: "The Sun is the star at the center of our solar system, containing \
                          99.86% of the system's mass."
                .to_string(),
            facts: facts(&[
                "Light from the Sun takes about 8 minutes 20 seconds to reach Earth.",
                "Its equator rotates once every 25.4 days, faster than its poles.",
                "About 1.3 million Earths would fit inside it.",
            ]),
        },
        CelestialBody {
            name: "Mercury".to_string(),
            radius: 0.383,
            mass: 0.055,
            temperature: 167.0,
            distance_from_sun: 0.39,
            orbital_period: 88.0,
            rotation_period: 1407.6,
            color: "#8C7853".parse()?,
            has_rings: false,
            moons: Vec::new(),
            description: "Mercury is the smallest planet and closest to the Sun, with extreme \
                          temperature variations."
                .to_string(),
            facts: facts(&[
                "A year on Mercury lasts just 88 Earth days.",
                "Surface temperatures swing from -173°C at night to 427°C by day.",
                "It has no moons and almost no atmosphere.",
            ]),
        },
        CelestialBody {
            name: "Venus".to_string(),
            radius: 0.949,
            mass: 0.815,
            temperature: 464.0,
            distance_from_sun: 0.72,
            orbital_period: 225.0,
            rotation_period: -5832.5,
            color: "#FFC649".parse()?,
            has_rings: false,
            moons: Vec::new(),
            description: "Venus is the hottest planet with a thick, toxic atmosphere and surface \
                          pressure 90 times that of Earth."
                .to_string(),
            facts: facts(&[
                "Venus rotates backwards compared to most planets.",
                "A day on Venus is longer than its year.",
                "Its clouds are made of sulfuric acid.",
            ]),
        },
        CelestialBody {
            name: "Earth".to_string(),
            radius: 1.0,
            mass: 1.0,
            temperature: 15.0,
            distance_from_sun: 1.0,
            orbital_period: 365.25,
            rotation_period: 24.0,
            color: "#6B93D6".parse()?,
            has_rings: false,
            moons: vec![moon("Luna", 1.0, 3.0, 27.3)],
            description: "Earth is the only known planet with life, featuring liquid water, a \
                          protective atmosphere, and diverse ecosystems."
                .to_string(),
            facts: facts(&[
                "About 71% of the surface is covered by water.",
                "It is the densest planet in the solar system.",
                "Its magnetic field shields the surface from the solar wind.",
            ]),
        },
        CelestialBody {
            name: "Mars".to_string(),
            radius: 0.532,
            mass: 0.107,
            temperature: -65.0,
            distance_from_sun: 1.52,
            orbital_period: 687.0,
            rotation_period: 24.6,
            color: "#CD5C5C".parse()?,
            has_rings: false,
            moons: vec![moon("Phobos", 0.06, 1.5, 0.32), moon("Deimos", 0.03, 2.5, 1.26)],
            description: "Mars, the Red Planet, has the largest volcano and canyon in the solar \
                          system and evidence of ancient water."
                .to_string(),
            facts: facts(&[
                "Olympus Mons is nearly three times the height of Mount Everest.",
                "Its red color comes from iron oxide in the soil.",
                "A Martian day is only about 40 minutes longer than Earth's.",
            ]),
        },
        CelestialBody {
            name: "Jupiter".to_string(),
            radius: 11.21,
            mass: 317.8,
            temperature: -110.0,
            distance_from_sun: 3.2,
            orbital_period: 4333.0,
            rotation_period: 9.9,
            color: "#D8CA9D".parse()?,
            has_rings: true,
            moons: vec![
                moon("Io", 1.04, 8.0, 1.77),
                moon("Europa", 0.90, 12.0, 3.55),
                moon("Ganymede", 1.51, 18.0, 7.15),
                moon("Callisto", 1.38, 28.0, 16.69),
            ],
            description: "Jupiter is the largest planet, a gas giant with a Great Red Spot storm \
                          and over 80 moons."
                .to_string(),
            facts: facts(&[
                "The Great Red Spot is a storm wider than Earth.",
                "It has the shortest day of any planet, under 10 hours.",
                "Ganymede, its largest moon, is bigger than Mercury.",
            ]),
        },
        CelestialBody {
            name: "Saturn".to_string(),
            radius: 9.45,
            mass: 95.2,
            temperature: -140.0,
            distance_from_sun: 4.8,
            orbital_period: 10_759.0,
            rotation_period: 10.7,
            color: "#FAD5A5".parse()?,
            has_rings: true,
            moons: vec![
                moon("Mimas", 0.11, 4.0, 0.94),
                moon("Titan", 1.48, 25.0, 15.95),
                moon("Enceladus", 0.14, 5.0, 1.37),
            ],
            description: "Saturn is famous for its spectacular ring system and is less dense than \
                          water."
                .to_string(),
            facts: facts(&[
                "Its rings are mostly ice with some rock and dust.",
                "Saturn would float in a bathtub large enough to hold it.",
                "Titan has a thicker atmosphere than Earth.",
            ]),
        },
        CelestialBody {
            name: "Uranus".to_string(),
            radius: 4.01,
            mass: 14.5,
            temperature: -195.0,
            distance_from_sun: 7.2,
            orbital_period: 30_687.0,
            rotation_period: -17.2,
            color: "#4FD0E7".parse()?,
            has_rings: true,
            moons: vec![
                moon("Miranda", 0.14, 3.0, 1.41),
                moon("Ariel", 0.33, 4.5, 2.52),
                moon("Umbriel", 0.34, 6.0, 4.14),
                moon("Titania", 0.45, 10.0, 8.71),
                moon("Oberon", 0.44, 13.0, 13.46),
            ],
            description: "Uranus is an ice giant that rotates on its side, likely due to an \
                          ancient collision."
                .to_string(),
            facts: facts(&[
                "Its axis is tilted about 98 degrees.",
                "Each pole gets 42 years of continuous sunlight.",
                "It was the first planet discovered with a telescope.",
            ]),
        },
        CelestialBody {
            name: "Neptune".to_string(),
            radius: 3.88,
            mass: 17.1,
            temperature: -200.0,
            distance_from_sun: 9.0,
            orbital_period: 60_190.0,
            rotation_period: 16.1,
            color: "#4B70DD".parse()?,
            has_rings: true,
            moons: vec![moon("Triton", 0.78, 8.0, 5.88)],
            description: "Neptune is the windiest planet with speeds up to 2,100 km/h and was \
                          discovered through mathematical predictions."
                .to_string(),
            facts: facts(&[
                "It takes about 165 Earth years to orbit the Sun.",
                "Triton orbits backwards and is slowly spiralling inward.",
                "Its position was predicted mathematically before it was observed.",
            ]),
        },
    ])
}

/// Build the validated built-in registry.
pub fn solar_system() -> Result<BodyRegistry, RegistryError> {
    BodyRegistry::new(builtin_bodies()?)
}
