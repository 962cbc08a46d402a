//! Score a candidate profile against a query.
//!
//! The [`Scorer`] trait maps a ([`Query`], [`IndexedProfile`]) pair to an
//! overall score with a per-factor breakdown.

use crate::{IndexedProfile, Query};

/// The dimensions a compatibility score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Factor {
    /// Instrument overlap and instrument-group relations.
    Instruments,
    /// Genre similarity, using the query's influences as the genre signal.
    Genres,
    /// Geographic proximity.
    Location,
    /// Schedule overlap.
    Availability,
    /// Shared musical influences.
    Influences,
    /// Collaboration goals.
    CollaborationIntent,
}

impl Factor {
    /// Every factor in explanation priority order.
    pub const ALL: [Self; 6] = [
        Self::Instruments,
        Self::Genres,
        Self::Location,
        Self::Availability,
        Self::Influences,
        Self::CollaborationIntent,
    ];

    /// Return the factor as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instruments => "instruments",
            Self::Genres => "genres",
            Self::Location => "location",
            Self::Availability => "availability",
            Self::Influences => "influences",
            Self::CollaborationIntent => "collaboration_intent",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor scores, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorScores {
    /// Instrument compatibility.
    pub instruments: f32,
    /// Genre compatibility.
    pub genres: f32,
    /// Location proximity.
    pub location: f32,
    /// Availability overlap.
    pub availability: f32,
    /// Influence overlap.
    pub influences: f32,
    /// Collaboration intent alignment.
    pub collaboration_intent: f32,
}

impl FactorScores {
    /// Return the score recorded for `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f32 {
        match factor {
            Factor::Instruments => self.instruments,
            Factor::Genres => self.genres,
            Factor::Location => self.location,
            Factor::Availability => self.availability,
            Factor::Influences => self.influences,
            Factor::CollaborationIntent => self.collaboration_intent,
        }
    }

    /// Iterate `(factor, score)` pairs in [`Factor::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f32)> + '_ {
        Factor::ALL
            .into_iter()
            .map(move |factor| (factor, self.get(factor)))
    }
}

/// Overall compatibility plus the breakdown it was combined from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Weighted combination of the factor scores, in `0.0..=1.0`.
    pub overall: f32,
    /// Individual factor scores.
    pub factors: FactorScores,
}

/// Calculate how well a profile fits a query.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent queries. Scoring is infallible and pure: missing fields
/// score with the factor's neutral default, and neither argument is mutated.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use encore_core::{IndexedProfile, Profile, Query, ScoreBreakdown, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _query: &Query, _candidate: &IndexedProfile) -> ScoreBreakdown {
///         ScoreBreakdown {
///             overall: 1.0,
///             ..ScoreBreakdown::default()
///         }
///     }
/// }
///
/// let candidate = IndexedProfile::new(Profile::new("p1"));
/// let scorer = UnitScorer;
/// assert_eq!(scorer.score(&Query::new(), &candidate).overall, 1.0);
/// assert!(scorer.admits(&Query::new(), &candidate));
/// ```
pub trait Scorer: Send + Sync {
    /// Score `candidate` against `query`.
    fn score(&self, query: &Query, candidate: &IndexedProfile) -> ScoreBreakdown;

    /// Whether `candidate` is worth scoring at all.
    ///
    /// The matching pipeline skips candidates rejected here. Implementations
    /// must only reject candidates they would score low on the rejected
    /// dimension. The default admits everything.
    fn admits(&self, query: &Query, candidate: &IndexedProfile) -> bool {
        let _ = (query, candidate);
        true
    }

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
