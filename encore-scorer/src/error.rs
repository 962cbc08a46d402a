//! Errors raised while configuring the compatibility scorer.

use encore_location::LocationGraphError;
use thiserror::Error;

/// Errors raised when building or configuring a
/// [`CompatibilityScorer`](crate::CompatibilityScorer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// Factor weights were unusable.
    #[error("factor weights must be finite, non-negative and sum to 1.0 (got {total})")]
    InvalidWeights {
        /// Sum of the supplied weights.
        total: f64,
    },
    /// A genre similarity edge lies outside `0.0..=1.0`.
    #[error("genre similarity {from} -> {to} is {value}, expected 0.0..=1.0")]
    SimilarityOutOfRange {
        /// Canonical genre the edge starts from.
        from: String,
        /// Related genre.
        to: String,
        /// Supplied similarity.
        value: f32,
    },
    /// A genre similarity edge names a blank genre.
    #[error("genre similarity edges must name non-blank genres")]
    BlankGenre,
    /// The location tables failed validation.
    #[error("location tables are invalid")]
    Location(#[from] LocationGraphError),
}
