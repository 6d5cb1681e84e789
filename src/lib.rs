//! A small library for modelling a solar system hierarchy (sun, planets,
//! moons) read from a JSON description, filling in missing physical
//! quantities from simple geometric and orbital relations, and rendering a
//! plain-text report.
//!
//! # Features
//!
//! - **Geometry derivation** — Circumference from diameter (and the reverse)
//!   via a one-time, first-known-wins pass; values read from the input are
//!   never recomputed
//! - **Orbital derivation** — Orbital period from distance (and the reverse)
//!   via Kepler's third law with unit proportionality constant (au, yr)
//! - **Report rendering** — Fixed-format text blocks per body with
//!   thousands-separated numbers, assembled into a full system report
//!
//! # Quick Start
//!
//! The main entry points are [`io::read_system`] and [`io::parse_system`],
//! which parse a JSON description and assemble a [`Sun`] with every planet
//! and moon already run through its derivation pass. The sun's own pass is
//! left to the caller:
//!
//! ```
//! use std::f64::consts::PI;
//!
//! let mut sun = orrery::io::parse_system(
//!     r#"{
//!         "Name": "Sol",
//!         "Diameter": 1392700,
//!         "Planets": [
//!             {
//!                 "Name": "Earth",
//!                 "DistanceFromSun": 1.0,
//!                 "Diameter": 12742,
//!                 "Moons": [{ "Name": "Moon", "Diameter": 3474.8 }]
//!             }
//!         ]
//!     }"#,
//! )?;
//! sun.derive_circumference();
//! sun.derive_diameter();
//!
//! // Circumference was filled in from the diameter
//! assert_eq!(sun.body.circumference, 1_392_700.0 * PI);
//!
//! // Kepler: one astronomical unit orbits in one year
//! assert_eq!(sun.planets[0].orbital_period, 1.0);
//!
//! // The moon's derivation ran at construction time
//! assert_eq!(sun.planets[0].moons[0].body.circumference, 3474.8 * PI);
//!
//! println!("{sun}");
//! # Ok::<(), orrery::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — JSON input parsing and system graph assembly
//!
//! # Data Types
//!
//! - [`Sun`] — Root of the system, owns its planets in input order
//! - [`Planet`] — Orbital parameters plus owned moons in input order
//! - [`Moon`] — A bare physical body with a text rendering
//! - [`PhysicalBody`] — Shared name/diameter/circumference geometry

mod model;
mod report;

pub mod io;

pub use model::body::PhysicalBody;
pub use model::system::{Moon, Planet, Sun};
