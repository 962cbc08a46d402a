//! Facade crate for the Encore musician compatibility engine.
//!
//! This crate re-exports the domain types, the location graph, the
//! compatibility scorer and the matching pipeline so applications can depend
//! on a single crate.
//!
//! # Examples
//!
//! ```
//! use encore_engine::{
//!     CompatibilityScorer, FeatureIndex, MatchParams, Matcher, MatchingPipeline, Profile, Query,
//! };
//!
//! let index = FeatureIndex::build([Profile::new("maya")
//!     .with_instruments(["Vocals"])
//!     .with_location("Williamsburg, Brooklyn")
//!     .with_influences(["Amy Winehouse"])]);
//! let pipeline = MatchingPipeline::new(index, CompatibilityScorer::builtin()?);
//! let query = Query::new()
//!     .with_instruments(["vocals"])
//!     .with_location("brooklyn")
//!     .with_influences(["Amy Winehouse"]);
//! let response = pipeline.find_matches(&query, MatchParams::new(0.5, 10)?);
//! assert_eq!(response.total_found, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use encore_core::{
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_COMPATIBILITY, DerivedFeatures, Diagnostics, Factor,
    FactorScores, FeatureIndex, IndexedProfile, InstrumentGroup, MAX_RESULTS_LIMIT, MatchParams,
    MatchParamsError, MatchResponse, MatchResult, Matcher, Profile, ProfileId, Query,
    ScoreBreakdown, Scorer,
};
pub use encore_location::{
    Confidence, Granularity, LocationGraph, LocationGraphError, LocationTables,
    NearbyNeighborhood, Resolution, TravelBand,
};
pub use encore_matcher::{
    BoundedQueryCache, Fingerprint, MatchingPipeline, NoopQueryCache, QueryCache,
};
pub use encore_scorer::{CompatibilityScorer, FactorWeights, GenreGraph, ScorerError};
