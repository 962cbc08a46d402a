//! Test helpers for writing CLI inputs into a temporary workspace.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use encore_location::{BoroughRecord, CityRecord, LocationTables, NeighborhoodRecord};
use serde::Serialize;
use tempfile::TempDir;

/// Write raw bytes to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// Temporary directory with UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Serialise `value` into `name` and return its path.
    pub(super) fn json<T: Serialize>(&self, name: &str, value: &T) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise test input");
        write_utf8(&path, &payload);
        path
    }
}

/// Decode captured command output.
pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output is JSON")
}

/// A two-zone town where Maple Hill and the Old Docks score 85.
pub(super) fn riverside_tables() -> LocationTables {
    let neighborhood = |key: &str, name: &str, zone: &str, aliases: &[&str]| NeighborhoodRecord {
        key: key.to_owned(),
        name: name.to_owned(),
        borough: "riverside".to_owned(),
        zone: zone.to_owned(),
        aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
    };
    let row = |own: &str, other: &str| {
        BTreeMap::from([(own.to_owned(), 100_u8), (other.to_owned(), 85_u8)])
    };
    LocationTables {
        city: CityRecord {
            key: "springfield".to_owned(),
            name: "Springfield".to_owned(),
            terms: vec!["springfield".to_owned()],
        },
        boroughs: vec![BoroughRecord {
            key: "riverside".to_owned(),
            name: "Riverside".to_owned(),
            zones: vec!["waterfront".to_owned(), "uplands".to_owned()],
        }],
        neighborhoods: vec![
            neighborhood("old_docks", "Old Docks", "waterfront", &["old docks", "docks"]),
            neighborhood("maple_hill", "Maple Hill", "uplands", &["maple hill"]),
        ],
        proximity: BTreeMap::from([
            ("waterfront".to_owned(), row("waterfront", "uplands")),
            ("uplands".to_owned(), row("uplands", "waterfront")),
        ]),
    }
}
