//! Neighborhood resolution and zone proximity for the Encore engine.
//!
//! The location model is a discrete graph, not coordinates:
//! - **Neighborhoods** are named places recognised through textual aliases.
//!   Each belongs to one borough and one zone.
//! - **Zones** are coarse buckets of neighborhoods. A complete, symmetric
//!   [`LocationTables::proximity`] matrix scores every zone pair in `0..=100`.
//! - **Boroughs** list their zones; the first one represents the borough when
//!   a place only resolves to borough granularity.
//!
//! [`LocationGraph`] validates authored [`LocationTables`] once and then
//! answers [`resolve`](LocationGraph::resolve),
//! [`proximity`](LocationGraph::proximity) and
//! [`nearby`](LocationGraph::nearby) queries without allocation-heavy work.
//! Unresolvable text is never an error: it resolves to `None` and scores a
//! proximity of zero.
//!
//! # Examples
//!
//! ```
//! use encore_location::{Granularity, LocationGraph};
//!
//! let graph = LocationGraph::builtin()?;
//! let place = graph.resolve("Williamsburg, Brooklyn").expect("known place");
//! assert_eq!(place.granularity(), Granularity::Neighborhood);
//! assert_eq!(place.zone(), Some("north_brooklyn"));
//! assert_eq!(graph.proximity("brooklyn", "Williamsburg, Brooklyn"), 100);
//! assert_eq!(graph.proximity("Staten Island", "Bronx"), 10);
//! assert_eq!(graph.proximity("Atlantis", "Bronx"), 0);
//! # Ok::<(), encore_location::LocationGraphError>(())
//! ```

#![forbid(unsafe_code)]

mod builtin;
mod error;
mod graph;
mod nearby;
mod resolution;
mod tables;

pub use error::LocationGraphError;
pub use graph::{LocationGraph, Neighborhood, UNZONED_PROXIMITY};
pub use nearby::{DEFAULT_NEARBY_MIN_SCORE, LocationStats, NearbyNeighborhood, TravelBand};
pub use resolution::{Confidence, Granularity, Resolution};
pub use tables::{BoroughRecord, CityRecord, LocationTables, NeighborhoodRecord};
