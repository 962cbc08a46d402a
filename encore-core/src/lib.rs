//! Core domain types for the Encore compatibility engine.
//!
//! The crate defines the data exchanged between the engine's layers: the
//! searcher's [`Query`], catalog [`Profile`]s, the [`FeatureIndex`] that
//! precomputes per-profile lookup keys, the [`Scorer`] seam used by the
//! matching pipeline, and the [`MatchResponse`] returned to callers.
//!
//! Everything here is plain data plus pure derivation. Scoring rules live in
//! `encore-scorer`, place resolution in `encore-location`, and orchestration
//! in `encore-matcher`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod index;
pub mod instrument;
pub mod matcher;
pub mod profile;
pub mod query;
pub mod scorer;
#[cfg(feature = "serde")]
mod serde_support;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod text;

pub use index::{DerivedFeatures, FeatureIndex, IndexedProfile};
pub use instrument::{InstrumentGroup, groups_for};
pub use matcher::{
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_COMPATIBILITY, Diagnostics, MAX_RESULTS_LIMIT, MatchParams,
    MatchParamsError, MatchResponse, MatchResult, Matcher,
};
pub use profile::{Profile, ProfileId};
pub use query::Query;
pub use scorer::{Factor, FactorScores, ScoreBreakdown, Scorer};
