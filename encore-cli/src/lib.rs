//! Command-line interface for the Encore compatibility engine.
//!
//! `encore match` ranks a JSON profile catalog against a JSON query;
//! `encore nearby` lists the neighborhoods closest to a place. Both print
//! pretty JSON on stdout and log to stderr, filtered by `RUST_LOG`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod inputs;
mod logging;
mod matching;
mod nearby;

pub use error::CliError;

use matching::MatchArgs;
use nearby::NearbyArgs;

const ARG_QUERY: &str = "query";
const ARG_PROFILES: &str = "profiles";
const ARG_MIN_COMPATIBILITY: &str = "min-compatibility";
const ARG_MAX_RESULTS: &str = "max-results";
const ARG_LOCATION_TABLES: &str = "location-tables";
const ARG_PLACE: &str = "place";
const ARG_MIN_SCORE: &str = "min-score";
const ENV_MATCH_QUERY: &str = "ENCORE_CMDS_MATCH_QUERY_PATH";
const ENV_MATCH_PROFILES: &str = "ENCORE_CMDS_MATCH_PROFILES";
const ENV_NEARBY_PLACE: &str = "ENCORE_CMDS_NEARBY_PLACE";

/// Run the Encore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration or inputs are
/// invalid, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests print to stdout and exit cleanly.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    match cli.command {
        Command::Match(args) => matching::run_match(args),
        Command::Nearby(args) => nearby::run_nearby(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "encore",
    about = "Musician compatibility matching for the Encore engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a profile catalog against a query.
    Match(MatchArgs),
    /// List neighborhoods near a place.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;
