//! JSON input parsing and system graph assembly.
//!
//! The input document is a single JSON object describing the sun, with
//! nested `Planets` and `Moons` arrays. Every numeric field is optional and
//! defaults to 0 ("not given"); `Name` is required at every level.

pub mod error;

mod json;

pub use error::Error;
pub use json::{parse_system, read_system};
