//! The weighted multi-factor compatibility scorer.

use std::sync::Arc;

use encore_core::text::present;
use encore_core::{DerivedFeatures, FactorScores, IndexedProfile, Query, ScoreBreakdown, Scorer};
use encore_location::LocationGraph;

use crate::factors::{self, InstrumentRelation};
use crate::{FactorWeights, GenreGraph, ScorerError};

/// Scores a query against a profile as a weighted sum of six factors.
///
/// The location graph and genre table are shared immutably, so a single
/// scorer can serve any number of threads.
///
/// # Examples
/// ```
/// use encore_core::{IndexedProfile, Profile, Query, Scorer};
/// use encore_scorer::CompatibilityScorer;
///
/// let scorer = CompatibilityScorer::builtin()?;
/// let query = Query::new()
///     .with_instruments(["vocals"])
///     .with_location("brooklyn")
///     .with_influences(["Amy Winehouse"]);
/// let singer = IndexedProfile::new(
///     Profile::new("maya")
///         .with_instruments(["Vocals"])
///         .with_location("Williamsburg, Brooklyn")
///         .with_influences(["Amy Winehouse"]),
/// );
/// let breakdown = scorer.score(&query, &singer);
/// assert_eq!(breakdown.factors.instruments, 1.0);
/// assert_eq!(breakdown.factors.location, 1.0);
/// assert!(breakdown.factors.influences >= 0.9);
/// # Ok::<(), encore_scorer::ScorerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    location: Arc<LocationGraph>,
    genres: Arc<GenreGraph>,
    weights: FactorWeights,
}

impl CompatibilityScorer {
    /// Create a scorer over `location` with the default weights and genre
    /// table.
    #[must_use]
    pub fn new(location: Arc<LocationGraph>) -> Self {
        Self {
            location,
            genres: Arc::new(GenreGraph::builtin()),
            weights: FactorWeights::default(),
        }
    }

    /// Create a scorer over the built-in New York City location tables.
    ///
    /// # Errors
    /// Returns [`ScorerError::Location`] if the built-in tables fail
    /// validation.
    pub fn builtin() -> Result<Self, ScorerError> {
        Ok(Self::new(Arc::new(LocationGraph::builtin()?)))
    }

    /// Replace the factor weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when the weights fail
    /// [`FactorWeights::validate`].
    pub fn with_weights(mut self, weights: FactorWeights) -> Result<Self, ScorerError> {
        self.weights = weights.validate()?;
        log::debug!("compatibility weights set to {:?}", self.weights);
        Ok(self)
    }

    /// Replace the genre similarity table.
    #[must_use]
    pub fn with_genres(mut self, genres: GenreGraph) -> Self {
        self.genres = Arc::new(genres);
        self
    }

    /// Borrow the location graph.
    #[must_use]
    pub fn location_graph(&self) -> &LocationGraph {
        &self.location
    }

    /// Borrow the active weights.
    #[must_use]
    pub const fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Score every factor without combining them.
    #[must_use]
    pub fn factor_scores(&self, query: &Query, candidate: &IndexedProfile) -> FactorScores {
        let wanted = DerivedFeatures::of_query(query);
        let offered = candidate.features();
        let profile = candidate.profile();
        FactorScores {
            instruments: factors::instruments(&wanted, offered),
            genres: factors::genres(&wanted, offered, &self.genres),
            location: factors::location(&self.location, &wanted, offered),
            availability: factors::availability(
                present(query.availability.as_deref()),
                present(profile.availability.as_deref()),
            ),
            influences: factors::influences(&wanted, offered),
            collaboration_intent: factors::collaboration_intent(
                present(query.collaboration_intent.as_deref()),
                present(profile.collaboration_intent.as_deref()),
            ),
        }
    }
}

impl Scorer for CompatibilityScorer {
    fn score(&self, query: &Query, candidate: &IndexedProfile) -> ScoreBreakdown {
        let raw = self.factor_scores(query, candidate);
        let sanitised = FactorScores {
            instruments: Self::sanitise(raw.instruments),
            genres: Self::sanitise(raw.genres),
            location: Self::sanitise(raw.location),
            availability: Self::sanitise(raw.availability),
            influences: Self::sanitise(raw.influences),
            collaboration_intent: Self::sanitise(raw.collaboration_intent),
        };
        ScoreBreakdown {
            overall: Self::sanitise(self.weights.combine(&sanitised)),
            factors: sanitised,
        }
    }

    /// Admit candidates the instrument factor would credit.
    ///
    /// Queries without instruments admit every candidate. Otherwise a
    /// candidate is admitted exactly when [`InstrumentRelation::between`]
    /// finds a relation, which is also when the instrument factor is
    /// non-zero.
    fn admits(&self, query: &Query, candidate: &IndexedProfile) -> bool {
        let wanted = DerivedFeatures::of_query(query);
        wanted.instruments().is_empty()
            || InstrumentRelation::between(&wanted, candidate.features()).is_some()
    }
}
