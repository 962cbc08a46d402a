//! Integrity failures detected while building a location graph.

use thiserror::Error;

/// Errors raised by [`LocationGraph::from_tables`](crate::LocationGraph::from_tables).
///
/// Any of these means the authored tables are incomplete or inconsistent; the
/// graph refuses to initialise rather than score with them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationGraphError {
    /// The city has no identifying terms.
    #[error("city {city} has no terms")]
    EmptyCityTerms {
        /// City key.
        city: String,
    },
    /// Two boroughs share a key.
    #[error("borough {borough} is registered twice")]
    DuplicateBorough {
        /// Repeated key.
        borough: String,
    },
    /// A borough lists no zones.
    #[error("borough {borough} has no zones")]
    BoroughWithoutZones {
        /// Borough key.
        borough: String,
    },
    /// A zone is listed under more than one borough, or twice in one.
    #[error("zone {zone} is registered twice")]
    DuplicateZone {
        /// Repeated zone.
        zone: String,
    },
    /// Two neighborhoods share a key.
    #[error("neighborhood {neighborhood} is registered twice")]
    DuplicateNeighborhood {
        /// Repeated key.
        neighborhood: String,
    },
    /// A neighborhood references a borough that does not exist.
    #[error("neighborhood {neighborhood} references unknown borough {borough}")]
    UnknownBorough {
        /// Neighborhood key.
        neighborhood: String,
        /// Missing borough key.
        borough: String,
    },
    /// A neighborhood references a zone that no borough lists.
    #[error("neighborhood {neighborhood} references unknown zone {zone}")]
    UnknownZone {
        /// Neighborhood key.
        neighborhood: String,
        /// Missing zone.
        zone: String,
    },
    /// A neighborhood's zone belongs to a different borough.
    #[error("neighborhood {neighborhood} places zone {zone} outside borough {borough}")]
    ZoneOutsideBorough {
        /// Neighborhood key.
        neighborhood: String,
        /// Zone named by the neighborhood.
        zone: String,
        /// Borough named by the neighborhood.
        borough: String,
    },
    /// A neighborhood alias is blank.
    #[error("neighborhood {neighborhood} has a blank alias")]
    BlankAlias {
        /// Neighborhood key.
        neighborhood: String,
    },
    /// An alias is claimed by two neighborhoods.
    #[error("alias {alias:?} is claimed by both {first} and {second}")]
    DuplicateAlias {
        /// Normalised alias.
        alias: String,
        /// Neighborhood registered first.
        first: String,
        /// Neighborhood registered later.
        second: String,
    },
    /// The proximity matrix has a row for a zone no borough lists.
    #[error("proximity matrix has a row for unknown zone {zone}")]
    UnknownProximityZone {
        /// Unregistered zone.
        zone: String,
    },
    /// The proximity matrix has no row for a registered zone.
    #[error("proximity matrix is missing the row for zone {zone}")]
    MissingProximityRow {
        /// Zone without a row.
        zone: String,
    },
    /// A matrix row lacks an entry for a registered zone.
    #[error("proximity matrix is missing {from} -> {to}")]
    MissingProximityEntry {
        /// Row zone.
        from: String,
        /// Column zone.
        to: String,
    },
    /// A zone's proximity to itself is not 100.
    #[error("zone {zone} has self-proximity {score}, expected 100")]
    SelfProximity {
        /// Zone.
        zone: String,
        /// Authored score.
        score: u8,
    },
    /// A score lies above 100.
    #[error("proximity {from} -> {to} is {score}, above 100")]
    ProximityOutOfRange {
        /// Row zone.
        from: String,
        /// Column zone.
        to: String,
        /// Authored score.
        score: u8,
    },
    /// The matrix disagrees with itself for a zone pair.
    #[error("proximity {from} -> {to} is {forward} but {to} -> {from} is {backward}")]
    AsymmetricProximity {
        /// Row zone.
        from: String,
        /// Column zone.
        to: String,
        /// Score from `from` to `to`.
        forward: u8,
        /// Score from `to` to `from`.
        backward: u8,
    },
}
