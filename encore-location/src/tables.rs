//! Authored location data in its serialisable form.
//!
//! Tables are plain data: [`LocationGraph::from_tables`](crate::LocationGraph::from_tables)
//! checks them for integrity before anything is scored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The city every known place belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Stable identifier, e.g. `new_york_city`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Lowercase terms that identify the city in free text.
    pub terms: Vec<String>,
}

/// A borough and the zones it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoroughRecord {
    /// Stable identifier, e.g. `staten_island`.
    pub key: String,
    /// Display name; its lowercase form is matched in free text.
    pub name: String,
    /// Zones in the borough. The first represents the whole borough.
    pub zones: Vec<String>,
}

/// A neighborhood recognisable from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodRecord {
    /// Stable identifier, e.g. `williamsburg`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Key of the owning borough.
    pub borough: String,
    /// Zone the neighborhood belongs to.
    pub zone: String,
    /// Lowercase aliases, most canonical first.
    pub aliases: Vec<String>,
}

/// Complete authored location data.
///
/// Registration order is significant: neighborhoods earlier in
/// [`LocationTables::neighborhoods`] win partial-match ties, and their
/// aliases are tried in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTables {
    /// The city.
    pub city: CityRecord,
    /// Boroughs in registration order.
    pub boroughs: Vec<BoroughRecord>,
    /// Neighborhoods in registration order.
    pub neighborhoods: Vec<NeighborhoodRecord>,
    /// Zone-to-zone proximity scores in `0..=100`.
    pub proximity: BTreeMap<String, BTreeMap<String, u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocationGraph;
    use rstest::rstest;

    #[rstest]
    fn builtin_tables_survive_json() {
        let tables = LocationTables::builtin();
        let json = serde_json::to_string(&tables).expect("tables encode");
        let decoded: LocationTables = serde_json::from_str(&json).expect("tables decode");
        assert_eq!(decoded, tables);

        let reloaded = LocationGraph::from_tables(decoded).expect("decoded tables are valid");
        let builtin = LocationGraph::builtin().expect("built-in tables are valid");
        for (a, b) in [
            ("brooklyn", "Williamsburg, Brooklyn"),
            ("Staten Island", "Bronx"),
            ("Astoria", "Harlem"),
            ("Atlantis", "Harlem"),
        ] {
            assert_eq!(reloaded.proximity(a, b), builtin.proximity(a, b));
        }
    }

    #[rstest]
    fn oversized_proximity_is_rejected_on_decode() {
        let err = serde_json::from_str::<LocationTables>(
            r#"{"city": {"key": "x", "name": "X", "terms": []},
                "boroughs": [], "neighborhoods": [],
                "proximity": {"a": {"a": 300}}}"#,
        )
        .expect_err("proximity entries are u8");
        assert!(err.is_data());
    }
}
