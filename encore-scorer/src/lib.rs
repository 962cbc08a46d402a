//! Multi-factor compatibility scoring for the Encore engine.
//!
//! [`CompatibilityScorer`] implements [`encore_core::Scorer`] by combining six
//! factor scores with static [`FactorWeights`]:
//!
//! | factor | default weight |
//! |---|---|
//! | instruments | 0.30 |
//! | genres (the query's influences double as genres) | 0.20 |
//! | location | 0.15 |
//! | availability | 0.15 |
//! | influences | 0.15 |
//! | collaboration intent | 0.05 |
//!
//! Instrument scoring uses the shared [`encore_core::InstrumentGroup`] table
//! and [`COMPLEMENTARY_GROUPS`]; genre scoring uses a directed
//! [`GenreGraph`]; location scoring delegates to
//! [`encore_location::LocationGraph::proximity`]. The same instrument
//! relation backs [`Scorer::admits`](encore_core::Scorer::admits), so the
//! matching pipeline's pre-filter can never drop a candidate the scorer would
//! credit.

#![forbid(unsafe_code)]

mod compatibility;
mod error;
mod factors;
mod tables;
mod weights;

pub use compatibility::CompatibilityScorer;
pub use error::ScorerError;
pub use factors::InstrumentRelation;
pub use tables::{COMPLEMENTARY_GROUPS, GenreGraph, are_complementary};
pub use weights::FactorWeights;
