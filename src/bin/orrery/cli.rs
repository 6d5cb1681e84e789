use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

const USAGE: &str = "Usage: orrery <json_file>";

#[derive(Debug, Parser)]
#[command(
    name = "orrery",
    about = "Solar system report generator",
    version
)]
pub struct Cli {
    /// Solar system description (JSON)
    #[arg(value_name = "JSON_FILE")]
    pub input: PathBuf,
}

/// How a non-running invocation ended: help/version printed (exit 0), or a
/// bad argument count answered with the usage line (exit 1).
#[derive(Debug, PartialEq, Eq)]
enum ParseFailure {
    Help,
    Usage,
}

/// Parses the real command line. Anything other than exactly one file
/// argument prints the usage line on standard output and exits with status
/// 1, before any file access. `--help` and `--version` still exit 0.
pub fn parse() -> Result<Cli, ExitCode> {
    parse_from(std::env::args_os()).map_err(|failure| match failure {
        ParseFailure::Help => ExitCode::SUCCESS,
        ParseFailure::Usage => ExitCode::FAILURE,
    })
}

fn parse_from<I, T>(args: I) -> Result<Cli, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Nothing left to do if stdout is gone while printing help.
            err.print().ok();
            Err(ParseFailure::Help)
        }
        Err(_) => {
            println!("{USAGE}");
            Err(ParseFailure::Usage)
        }
    }
}
