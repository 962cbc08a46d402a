//! Matching pipeline for the Encore compatibility engine.
//!
//! [`MatchingPipeline`] implements [`Matcher`](encore_core::Matcher) over a
//! [`FeatureIndex`](encore_core::FeatureIndex) and any
//! [`Scorer`](encore_core::Scorer). Each call runs the same steps:
//!
//! 1. fingerprint the query and parameters, returning a cached result set on
//!    a hit;
//! 2. drop candidates the scorer does not admit;
//! 3. score the rest and keep those at or above the threshold;
//! 4. sort by descending score, keeping catalog order for ties;
//! 5. truncate to the result cap;
//! 6. explain each match and store the list in the cache.
//!
//! The cache is injected through the [`QueryCache`] trait. Use
//! [`BoundedQueryCache`] for a first-in, first-out bound or
//! [`NoopQueryCache`] to disable caching.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod explain;
mod fingerprint;
mod pipeline;

pub use cache::{BoundedQueryCache, DEFAULT_CACHE_CAPACITY, NoopQueryCache, QueryCache};
pub use explain::{FALLBACK_EXPLANATION, GENERAL_SEARCH, MAX_CLAUSES, explain, summarise};
pub use fingerprint::Fingerprint;
pub use pipeline::MatchingPipeline;
