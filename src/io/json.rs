use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::error::Error;
use crate::model::system::{Moon, Planet, Sun};

#[derive(Debug, Deserialize)]
struct SunData {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Diameter", default)]
    diameter: f64,
    #[serde(rename = "Circumference", default)]
    circumference: f64,
    #[serde(rename = "Planets", default)]
    planets: Vec<PlanetData>,
}

#[derive(Debug, Deserialize)]
struct PlanetData {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "DistanceFromSun", default)]
    distance_from_sun: f64,
    #[serde(rename = "OrbitalPeriod", default)]
    orbital_period: f64,
    #[serde(rename = "Diameter", default)]
    diameter: f64,
    #[serde(rename = "Circumference", default)]
    circumference: f64,
    #[serde(rename = "Moons", default)]
    moons: Vec<MoonData>,
}

#[derive(Debug, Deserialize)]
struct MoonData {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Diameter", default)]
    diameter: f64,
    #[serde(rename = "Circumference", default)]
    circumference: f64,
}

/// Reads a solar system description from a file and assembles the graph.
///
/// The file handle is held only for the duration of the read; a missing
/// file is reported as [`Error::FileNotFound`] with the offending path.
pub fn read_system(path: &Path) -> Result<Sun, Error> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io { source },
    })?;
    parse_system(&contents)
}

/// Parses a JSON solar system description and assembles the [`Sun`] graph,
/// running the per-planet and per-moon derivation passes in attachment
/// order. The sun's own pass is left to the caller.
///
/// Text that is not valid JSON at all is an [`Error::InvalidJson`]; a valid
/// document missing a required `Name` is an [`Error::Schema`].
pub fn parse_system(text: &str) -> Result<Sun, Error> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| Error::InvalidJson { source })?;
    let data: SunData =
        serde_json::from_value(value).map_err(|source| Error::Schema { source })?;
    Ok(build_system(data))
}

fn build_system(data: SunData) -> Sun {
    let mut sun = Sun::new(data.name, data.diameter, data.circumference);
    for planet in data.planets {
        let moons = planet
            .moons
            .into_iter()
            .map(|moon| Moon::new(moon.name, moon.diameter, moon.circumference))
            .collect();
        sun.add_planet(Planet::new(
            planet.name,
            planet.distance_from_sun,
            planet.orbital_period,
            planet.diameter,
            planet.circumference,
            moons,
        ));
    }
    sun
}
