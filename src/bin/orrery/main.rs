use std::path::Path;
use std::process::ExitCode;

mod cli;

use anyhow::Result;

use orrery::Sun;
use orrery::io::{self, Error as IoError};

fn main() -> ExitCode {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match run(&cli.input) {
        Ok(sun) => {
            println!("{sun}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Loads the system and runs the sun's own derivation pass. The planets and
/// moons have already been derived during assembly.
fn run(path: &Path) -> Result<Sun> {
    let mut sun = io::read_system(path)?;
    sun.derive_circumference();
    sun.derive_diameter();
    Ok(sun)
}

/// Maps load failures onto the fixed user-facing messages. Anything else
/// (a missing `Name`, for instance) takes the generic path.
fn print_error(err: &anyhow::Error) {
    match err.downcast_ref::<IoError>() {
        Some(IoError::FileNotFound { path }) => {
            println!("Error: Could not find file {}", path.display());
        }
        Some(IoError::InvalidJson { .. }) => {
            println!("Error: Invalid JSON format");
        }
        _ => println!("Error: {err}"),
    }
}
