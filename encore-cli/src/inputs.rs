//! Loading of query, catalog and location-table files.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use encore_core::{Profile, Query};
use encore_location::{LocationGraph, LocationTables};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::{ARG_LOCATION_TABLES, ARG_PROFILES, ARG_QUERY, CliError};

/// On-disk profile catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Catalog {
    /// Profiles in ranking tie-break order.
    #[serde(default)]
    pub(crate) profiles: Vec<Profile>,
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON-encoded [`Query`].
pub(crate) fn load_query(path: &Utf8Path) -> Result<Query, CliError> {
    read_json(path, ARG_QUERY)
}

/// Load the profiles of a JSON catalog.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<Profile>, CliError> {
    read_json::<Catalog>(path, ARG_PROFILES).map(|catalog| catalog.profiles)
}

/// Build a location graph from `path`, or the built-in tables when absent.
pub(crate) fn load_location_graph(path: Option<&Utf8Path>) -> Result<LocationGraph, CliError> {
    let graph = match path {
        Some(tables) => {
            LocationGraph::from_tables(read_json::<LocationTables>(tables, ARG_LOCATION_TABLES)?)?
        }
        None => LocationGraph::builtin()?,
    };
    Ok(graph)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
