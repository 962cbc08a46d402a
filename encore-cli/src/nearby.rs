//! `nearby` command implementation for the Encore CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use encore_core::text::present;
use encore_location::DEFAULT_NEARBY_MIN_SCORE;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_file;
use crate::inputs::{load_location_graph, write_json};
use crate::{ARG_LOCATION_TABLES, ARG_MIN_SCORE, ARG_PLACE, CliError, ENV_NEARBY_PLACE};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a free-text place and list the neighborhoods \
                 closest to it, ordered by proximity score with a travel \
                 estimate for each.",
    about = "List neighborhoods near a place"
)]
#[ortho_config(prefix = "ENCORE")]
pub(crate) struct NearbyArgs {
    /// Free-text place, e.g. "Williamsburg, Brooklyn".
    #[arg(value_name = "place")]
    #[serde(default)]
    pub(crate) place: Option<String>,
    /// Minimum proximity score, 0 to 100 (default 30).
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<u8>,
    /// Replace the built-in location tables with a JSON file.
    #[arg(long = ARG_LOCATION_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) location_tables: Option<Utf8PathBuf>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NearbyConfig {
    /// Trimmed place text.
    pub(crate) place: String,
    /// Minimum proximity to report.
    pub(crate) min_score: u8,
    /// Optional replacement location tables.
    pub(crate) location_tables: Option<Utf8PathBuf>,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let place = present(args.place.as_deref())
            .map(str::to_owned)
            .ok_or(CliError::MissingArgument {
                field: ARG_PLACE,
                env: ENV_NEARBY_PLACE,
            })?;
        Ok(Self {
            place,
            min_score: args.min_score.unwrap_or(DEFAULT_NEARBY_MIN_SCORE),
            location_tables: args.location_tables,
        })
    }
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(super) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_nearby(&config, writer)
}

/// Rank neighborhoods around the configured place and write them as JSON.
pub(super) fn write_nearby(config: &NearbyConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    if let Some(tables) = &config.location_tables {
        require_file(tables, ARG_LOCATION_TABLES)?;
    }
    let graph = load_location_graph(config.location_tables.as_deref())?;
    let ranked = graph.nearby(&config.place, config.min_score);
    if ranked.is_empty() {
        log::warn!("no neighborhoods near {:?}", config.place);
    }
    write_json(writer, &ranked)
}
