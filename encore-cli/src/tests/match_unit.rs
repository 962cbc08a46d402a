//! Focused unit tests covering match configuration and execution.

use super::helpers::{Workspace, output_json, riverside_tables, write_utf8};
use super::*;
use crate::inputs::Catalog;
use crate::matching::{
    MatchConfig, config_from_layers_for_test, execute_match, run_match_with,
};
use encore_core::test_support::sample_profiles;
use encore_core::{MatchParams, MatchParamsError, Profile, Query};
use encore_location::LocationTables;
use rstest::{fixture, rstest};

struct MatchInputs {
    workspace: Workspace,
    query: camino::Utf8PathBuf,
    profiles: camino::Utf8PathBuf,
}

#[fixture]
fn inputs() -> MatchInputs {
    let workspace = Workspace::new();
    let query = workspace.json(
        "query.json",
        &Query::new()
            .with_instruments(["vocals"])
            .with_location("brooklyn")
            .with_influences(["Amy Winehouse"]),
    );
    let profiles = workspace.json(
        "catalog.json",
        &Catalog {
            profiles: sample_profiles(),
        },
    );
    MatchInputs {
        workspace,
        query,
        profiles,
    }
}

fn args_for(inputs: &MatchInputs) -> MatchArgs {
    MatchArgs {
        query_path: Some(inputs.query.clone()),
        profiles: Some(inputs.profiles.clone()),
        min_compatibility: Some(0.5),
        ..MatchArgs::default()
    }
}

fn config_for(inputs: &MatchInputs) -> MatchConfig {
    MatchConfig::try_from(args_for(inputs)).expect("config should build")
}

#[rstest]
fn converting_match_without_query_errors() {
    let err = MatchConfig::try_from(MatchArgs::default()).expect_err("missing query");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_QUERY);
            assert_eq!(env, ENV_MATCH_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_match_without_profiles_errors() {
    let args = MatchArgs {
        query_path: Some("query.json".into()),
        ..MatchArgs::default()
    };
    let err = MatchConfig::try_from(args).expect_err("missing profiles");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PROFILES);
            assert_eq!(env, ENV_MATCH_PROFILES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn parameters_default_when_absent() {
    let args = MatchArgs {
        query_path: Some("query.json".into()),
        profiles: Some("catalog.json".into()),
        ..MatchArgs::default()
    };
    let config = MatchConfig::try_from(args).expect("config should build");
    assert_eq!(config.params, MatchParams::default());
    assert_eq!(config.location_tables, None);
}

#[rstest]
#[case(Some(1.5), None)]
#[case(Some(-0.1), None)]
#[case(None, Some(0))]
#[case(None, Some(101))]
fn out_of_range_parameters_are_rejected(
    #[case] min_compatibility: Option<f32>,
    #[case] max_results: Option<usize>,
) {
    let args = MatchArgs {
        query_path: Some("query.json".into()),
        profiles: Some("catalog.json".into()),
        min_compatibility,
        max_results,
        location_tables: None,
    };
    let err = MatchConfig::try_from(args).expect_err("parameters rejected");
    assert!(matches!(
        err,
        CliError::InvalidParameters(
            MatchParamsError::MinCompatibilityOutOfRange { .. }
                | MatchParamsError::MaxResultsOutOfRange { .. }
        )
    ));
}

#[rstest]
fn validate_sources_reports_missing_profiles(inputs: MatchInputs) {
    let config = MatchConfig {
        profiles: inputs.workspace.path("absent.json"),
        ..config_for(&inputs)
    };
    let err = config.validate_sources().expect_err("missing catalog");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PROFILES);
            assert_eq!(path, inputs.workspace.path("absent.json"));
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(inputs: MatchInputs) {
    let directory = inputs.workspace.path("query-dir");
    std::fs::create_dir(directory.as_std_path()).expect("query directory");
    let config = MatchConfig {
        query_path: directory.clone(),
        ..config_for(&inputs)
    };
    let err = config.validate_sources().expect_err("directory rejected");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_QUERY);
            assert_eq!(path, directory);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_checks_location_tables(inputs: MatchInputs) {
    let config = MatchConfig {
        location_tables: Some(inputs.workspace.path("tables.json")),
        ..config_for(&inputs)
    };
    let err = config.validate_sources().expect_err("missing tables");
    assert!(matches!(
        err,
        CliError::MissingSourceFile { field, .. } if field == ARG_LOCATION_TABLES
    ));
}

#[rstest]
fn execute_match_ranks_the_catalog(inputs: MatchInputs) {
    let response = execute_match(&config_for(&inputs)).expect("match runs");
    let first = response.matches.first().expect("at least one match");
    assert_eq!(first.profile.id.as_str(), "test_001");
    assert!(first.explanation.contains("Shared influences: Amy Winehouse"));
    assert_eq!(response.total_found, response.matches.len());
    assert!(!response.from_cache);
}

#[rstest]
fn run_match_writes_pretty_json(inputs: MatchInputs) {
    let mut buffer = Vec::new();
    run_match_with(args_for(&inputs), &mut buffer).expect("match command succeeds");
    assert!(buffer.ends_with(b"\n"));

    let output = output_json(&buffer);
    assert_eq!(output["matches"][0]["profile"]["id"], "test_001");
    assert_eq!(output["from_cache"], false);
    assert_eq!(
        output["query_summary"],
        "Instruments: vocals | Location: brooklyn | Influences: Amy Winehouse"
    );
    assert!(output["diagnostics"]["processing_time_ms"].is_u64());
}

#[rstest]
fn malformed_catalog_reports_parse_error(inputs: MatchInputs) {
    write_utf8(&inputs.profiles, b"{ \"profiles\": [ { \"name\": \"no id\" } ] }");
    let err = execute_match(&config_for(&inputs)).expect_err("catalog rejected");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_PROFILES);
            assert_eq!(path, inputs.profiles);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn null_lists_in_catalog_are_empty(inputs: MatchInputs) {
    write_utf8(
        &inputs.profiles,
        br#"{ "profiles": [ { "id": "p1", "instruments": null, "location": "Harlem" } ] }"#,
    );
    let config = MatchConfig {
        params: MatchParams::new(0.0, 20).expect("valid parameters"),
        ..config_for(&inputs)
    };
    let response = execute_match(&config).expect("match runs");
    assert_eq!(response.total_found, 0);
    assert_eq!(response.diagnostics.candidates_evaluated, 0);
}

#[rstest]
fn invalid_location_tables_are_rejected(inputs: MatchInputs) {
    let mut tables = LocationTables::builtin();
    let entry = tables
        .proximity
        .get_mut("lower_manhattan")
        .and_then(|row| row.get_mut("north_brooklyn"))
        .expect("builtin entry");
    *entry = 40;
    let path = inputs.workspace.json("tables.json", &tables);
    let config = MatchConfig {
        location_tables: Some(path),
        ..config_for(&inputs)
    };
    let err = execute_match(&config).expect_err("asymmetric tables rejected");
    assert!(matches!(err, CliError::LocationTables(_)));
}

#[rstest]
fn custom_location_tables_drive_the_location_factor(inputs: MatchInputs) {
    let query = inputs.workspace.json(
        "docks_query.json",
        &Query::new().with_instruments(["Bass"]).with_location("Old Docks"),
    );
    let profiles = inputs.workspace.json(
        "riverside_catalog.json",
        &Catalog {
            profiles: vec![Profile::new("p1")
                .with_instruments(["Bass"])
                .with_location("Maple Hill")],
        },
    );
    let tables = inputs.workspace.json("tables.json", &riverside_tables());
    let config = MatchConfig {
        query_path: query,
        profiles,
        params: MatchParams::new(0.0, 20).expect("valid parameters"),
        location_tables: Some(tables),
    };

    let response = execute_match(&config).expect("match runs");
    let first = response.matches.first().expect("one match");
    assert_eq!(first.profile.id.as_str(), "p1");
    assert_eq!(first.factors.location, 0.85);

    let builtin = execute_match(&MatchConfig {
        location_tables: None,
        ..config
    })
    .expect("match runs");
    let unknown = builtin.matches.first().expect("one match");
    assert_eq!(unknown.factors.location, 0.0);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_results": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "profiles": "from-file.json",
            "min_compatibility": 0.4,
            "max_results": 50,
        }),
        None,
    );
    composer.push_environment(json!({
        "query_path": "from-env.json",
        "max_results": 30,
    }));
    composer.push_cli(json!({ "max_results": 10 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.query_path, "from-env.json");
    assert_eq!(config.profiles, "from-file.json");
    assert_eq!(config.params, MatchParams::new(0.4, 10).expect("valid parameters"));
}
