//! `match` command implementation for the Encore CLI.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use encore_core::{
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_COMPATIBILITY, FeatureIndex, MatchParams, MatchResponse,
    Matcher,
};
use encore_matcher::{MatchingPipeline, NoopQueryCache};
use encore_scorer::CompatibilityScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_file;
use crate::inputs::{load_catalog, load_location_graph, load_query, write_json};
use crate::{
    ARG_LOCATION_TABLES, ARG_MAX_RESULTS, ARG_MIN_COMPATIBILITY, ARG_PROFILES, ARG_QUERY, CliError,
    ENV_MATCH_PROFILES, ENV_MATCH_QUERY,
};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON profile catalog against a JSON query and print \
                 the matches with per-factor scores and explanations. Paths \
                 and parameters can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Find compatible musicians for a query"
)]
#[ortho_config(prefix = "ENCORE")]
pub(crate) struct MatchArgs {
    /// Path to a JSON file containing the query.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) query_path: Option<Utf8PathBuf>,
    /// Path to the JSON profile catalog.
    #[arg(long = ARG_PROFILES, value_name = "path")]
    #[serde(default)]
    pub(crate) profiles: Option<Utf8PathBuf>,
    /// Minimum overall compatibility, 0.0 to 1.0 (default 0.7).
    #[arg(long = ARG_MIN_COMPATIBILITY, value_name = "score")]
    #[serde(default)]
    pub(crate) min_compatibility: Option<f32>,
    /// Maximum number of matches, 1 to 100 (default 20).
    #[arg(long = ARG_MAX_RESULTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
    /// Replace the built-in location tables with a JSON file.
    #[arg(long = ARG_LOCATION_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) location_tables: Option<Utf8PathBuf>,
}

impl MatchArgs {
    pub(crate) fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatchConfig {
    /// Path to the JSON query file.
    pub(crate) query_path: Utf8PathBuf,
    /// Path to the JSON profile catalog.
    pub(crate) profiles: Utf8PathBuf,
    /// Validated matching parameters.
    pub(crate) params: MatchParams,
    /// Optional replacement location tables.
    pub(crate) location_tables: Option<Utf8PathBuf>,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.query_path, ARG_QUERY)?;
        require_file(&self.profiles, ARG_PROFILES)?;
        if let Some(tables) = &self.location_tables {
            require_file(tables, ARG_LOCATION_TABLES)?;
        }
        Ok(())
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let query_path = args.query_path.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_MATCH_QUERY,
        })?;
        let profiles = args.profiles.ok_or(CliError::MissingArgument {
            field: ARG_PROFILES,
            env: ENV_MATCH_PROFILES,
        })?;
        let params = MatchParams::new(
            args.min_compatibility.unwrap_or(DEFAULT_MIN_COMPATIBILITY),
            args.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        )?;
        Ok(Self {
            query_path,
            profiles,
            params,
            location_tables: args.location_tables,
        })
    }
}

pub(super) fn run_match(args: MatchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_match_with(args, &mut stdout)
}

pub(super) fn run_match_with(args: MatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_match_config(args)?;
    let response = execute_match(&config)?;
    write_json(writer, &response)
}

fn resolve_match_config(args: MatchArgs) -> Result<MatchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load the inputs named by `config` and run one uncached match.
pub(super) fn execute_match(config: &MatchConfig) -> Result<MatchResponse, CliError> {
    let query = load_query(&config.query_path)?;
    let profiles = load_catalog(&config.profiles)?;
    let graph = load_location_graph(config.location_tables.as_deref())?;
    log::info!(
        "matching {} profiles from {}",
        profiles.len(),
        config.profiles
    );
    let scorer = CompatibilityScorer::new(Arc::new(graph));
    let pipeline =
        MatchingPipeline::new(FeatureIndex::build(profiles), scorer).with_cache(NoopQueryCache);
    Ok(pipeline.find_matches(&query, config.params))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<MatchConfig, CliError> {
    let merged = MatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    MatchConfig::try_from(merged)
}
