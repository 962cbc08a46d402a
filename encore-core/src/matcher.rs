//! Matching parameters, results and the [`Matcher`] seam.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{FactorScores, Profile, Query};

/// Default minimum overall score a match must reach.
pub const DEFAULT_MIN_COMPATIBILITY: f32 = 0.7;
/// Default cap on returned matches.
pub const DEFAULT_MAX_RESULTS: usize = 20;
/// Largest accepted result cap.
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Validated per-invocation parameters.
///
/// Out-of-range values are rejected at construction rather than clamped, so a
/// caller bug surfaces as an explicit error.
///
/// # Examples
/// ```
/// use encore_core::{MatchParams, MatchParamsError};
///
/// let params = MatchParams::new(0.5, 10)?;
/// assert_eq!(params.max_results(), 10);
/// assert_eq!(MatchParams::default().min_compatibility(), 0.7);
/// assert!(MatchParams::new(1.5, 10).is_err());
/// assert!(MatchParams::new(0.5, 0).is_err());
/// # Ok::<(), MatchParamsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatchParams")
)]
pub struct MatchParams {
    min_compatibility: f32,
    max_results: usize,
}

impl MatchParams {
    /// Validate and construct parameters.
    ///
    /// # Errors
    /// Returns [`MatchParamsError::MinCompatibilityOutOfRange`] when the
    /// threshold is not a finite value within `0.0..=1.0`, and
    /// [`MatchParamsError::MaxResultsOutOfRange`] when the cap is outside
    /// `1..=100`.
    pub fn new(min_compatibility: f32, max_results: usize) -> Result<Self, MatchParamsError> {
        if !min_compatibility.is_finite() || !(0.0..=1.0).contains(&min_compatibility) {
            return Err(MatchParamsError::MinCompatibilityOutOfRange {
                value: min_compatibility,
            });
        }
        if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
            return Err(MatchParamsError::MaxResultsOutOfRange { value: max_results });
        }
        Ok(Self {
            min_compatibility,
            max_results,
        })
    }

    /// Minimum overall score a match must reach (inclusive).
    #[must_use]
    pub const fn min_compatibility(&self) -> f32 {
        self.min_compatibility
    }

    /// Maximum number of matches returned.
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.max_results
    }
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            min_compatibility: DEFAULT_MIN_COMPATIBILITY,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatchParams {
    #[serde(default = "default_min_compatibility")]
    min_compatibility: f32,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

#[cfg(feature = "serde")]
const fn default_min_compatibility() -> f32 {
    DEFAULT_MIN_COMPATIBILITY
}

#[cfg(feature = "serde")]
const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatchParams> for MatchParams {
    type Error = MatchParamsError;

    fn try_from(raw: RawMatchParams) -> Result<Self, Self::Error> {
        Self::new(raw.min_compatibility, raw.max_results)
    }
}

/// Errors returned by [`MatchParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MatchParamsError {
    /// The threshold is outside `0.0..=1.0` or not finite.
    #[error("min compatibility {value} must be a finite value within 0.0..=1.0")]
    MinCompatibilityOutOfRange {
        /// Rejected value.
        value: f32,
    },
    /// The result cap is outside `1..=100`.
    #[error("max results {value} must be within 1..=100")]
    MaxResultsOutOfRange {
        /// Rejected value.
        value: usize,
    },
}

/// One ranked match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    /// The matched catalog profile, shared with the index.
    pub profile: Arc<Profile>,
    /// Overall compatibility in `0.0..=1.0`.
    pub score: f32,
    /// Per-factor breakdown.
    pub factors: FactorScores,
    /// Short human-readable reasons for the match.
    pub explanation: String,
}

/// Execution metrics for a matching call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Wall-clock time spent answering the call.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "processing_time_ms",
            serialize_with = "crate::serde_support::duration_as_millis"
        )
    )]
    pub processing_time: Duration,
    /// Number of candidates scored after the pre-filter; zero on a cache hit.
    pub candidates_evaluated: usize,
}

/// Ranked matches plus aggregate metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResponse {
    /// Matches in descending score order.
    pub matches: Vec<MatchResult>,
    /// Number of matches returned.
    pub total_found: usize,
    /// Summary of the non-empty query fields.
    pub query_summary: String,
    /// When the response was produced.
    pub searched_at: DateTime<Utc>,
    /// Whether the matches were served from the query cache.
    pub from_cache: bool,
    /// Execution metrics.
    pub diagnostics: Diagnostics,
}

/// Rank catalog profiles against a query.
///
/// Matchers must be `Send + Sync` so a single instance can serve concurrent
/// requests.
pub trait Matcher: Send + Sync {
    /// Find, rank and explain the profiles compatible with `query`.
    fn find_matches(&self, query: &Query, params: MatchParams) -> MatchResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 1)]
    #[case(1.0, 100)]
    #[case(0.7, 20)]
    fn accepts_boundaries(#[case] min: f32, #[case] max: usize) {
        let params = MatchParams::new(min, max).expect("valid parameters");
        assert_eq!(params.min_compatibility(), min);
        assert_eq!(params.max_results(), max);
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.01)]
    #[case(f32::NAN)]
    fn rejects_threshold(#[case] min: f32) {
        let err = MatchParams::new(min, 20).expect_err("threshold rejected");
        assert!(matches!(
            err,
            MatchParamsError::MinCompatibilityOutOfRange { .. }
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    fn rejects_cap(#[case] max: usize) {
        let err = MatchParams::new(0.5, max).expect_err("cap rejected");
        assert_eq!(err, MatchParamsError::MaxResultsOutOfRange { value: max });
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_validates() {
        let params: MatchParams =
            serde_json::from_str(r#"{"max_results": 5}"#).expect("params decode");
        assert_eq!(params.max_results(), 5);
        assert_eq!(params.min_compatibility(), DEFAULT_MIN_COMPATIBILITY);

        let err = serde_json::from_str::<MatchParams>(r#"{"min_compatibility": 2.0}"#)
            .expect_err("out of range threshold");
        assert!(err.to_string().contains("min compatibility"));
    }
}
