//! The matching pipeline: filter, score, threshold, rank, truncate, explain.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use encore_core::{
    Diagnostics, FeatureIndex, IndexedProfile, MatchParams, MatchResponse, MatchResult, Matcher,
    Query, ScoreBreakdown, Scorer,
};

use crate::{BoundedQueryCache, Fingerprint, QueryCache, explain, summarise};

/// Ranks an indexed catalog against queries using a [`Scorer`].
///
/// The index and scorer are read-only; the injected cache is the only
/// mutable state, so one pipeline can answer concurrent calls.
///
/// # Examples
/// ```
/// use encore_core::test_support::{FixedScorer, sample_profiles};
/// use encore_core::{FeatureIndex, MatchParams, Matcher, Query};
/// use encore_matcher::MatchingPipeline;
///
/// let pipeline = MatchingPipeline::new(FeatureIndex::build(sample_profiles()), FixedScorer::new(0.9));
/// let response = pipeline.find_matches(&Query::new(), MatchParams::new(0.5, 3)?);
/// assert_eq!(response.total_found, 3);
/// assert!(!response.from_cache);
/// assert!(pipeline.find_matches(&Query::new(), MatchParams::new(0.5, 3)?).from_cache);
/// # Ok::<(), encore_core::MatchParamsError>(())
/// ```
#[derive(Debug)]
pub struct MatchingPipeline<S, C = BoundedQueryCache> {
    index: Arc<FeatureIndex>,
    scorer: S,
    cache: C,
}

impl<S> MatchingPipeline<S> {
    /// Create a pipeline with a default-capacity [`BoundedQueryCache`].
    #[must_use]
    pub fn new(index: impl Into<Arc<FeatureIndex>>, scorer: S) -> Self {
        Self {
            index: index.into(),
            scorer,
            cache: BoundedQueryCache::new(),
        }
    }
}

impl<S, C> MatchingPipeline<S, C> {
    /// Replace the query cache.
    #[must_use]
    pub fn with_cache<D>(self, cache: D) -> MatchingPipeline<S, D> {
        MatchingPipeline {
            index: self.index,
            scorer: self.scorer,
            cache,
        }
    }

    /// Borrow the catalog.
    #[must_use]
    pub fn index(&self) -> &FeatureIndex {
        &self.index
    }

    /// Borrow the scorer.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Borrow the query cache.
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}

impl<S, C> MatchingPipeline<S, C>
where
    S: Scorer,
    C: QueryCache,
{
    /// Drop every cached result set.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Score the admitted candidates and keep the best above the threshold.
    ///
    /// Returns the ranked survivors and the number of candidates scored.
    fn rank(&self, query: &Query, params: MatchParams) -> (Vec<MatchResult>, usize) {
        let mut scored: Vec<(&IndexedProfile, ScoreBreakdown)> = self
            .index
            .iter()
            .filter(|candidate| self.scorer.admits(query, candidate))
            .map(|candidate| (candidate, self.scorer.score(query, candidate)))
            .collect();
        let candidates_evaluated = scored.len();

        scored.retain(|(_, breakdown)| breakdown.overall >= params.min_compatibility());
        // Stable: equal scores keep catalog order.
        scored.sort_by(|(_, left), (_, right)| {
            right
                .overall
                .partial_cmp(&left.overall)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(params.max_results());

        let matches = scored
            .into_iter()
            .map(|(candidate, breakdown)| MatchResult {
                profile: candidate.shared(),
                score: breakdown.overall,
                explanation: explain(query, candidate, &breakdown.factors),
                factors: breakdown.factors,
            })
            .collect();
        (matches, candidates_evaluated)
    }
}

impl<S, C> Matcher for MatchingPipeline<S, C>
where
    S: Scorer,
    C: QueryCache,
{
    fn find_matches(&self, query: &Query, params: MatchParams) -> MatchResponse {
        let started_at = Instant::now();
        let fingerprint = Fingerprint::of(query, params);
        let query_summary = summarise(query);

        if let Some(cached) = self.cache.get(&fingerprint) {
            log::debug!("query cache hit for {fingerprint}");
            return MatchResponse {
                total_found: cached.len(),
                matches: cached.to_vec(),
                query_summary,
                searched_at: Utc::now(),
                from_cache: true,
                diagnostics: Diagnostics {
                    processing_time: started_at.elapsed(),
                    candidates_evaluated: 0,
                },
            };
        }
        log::debug!("query cache miss for {fingerprint}");

        let (matches, candidates_evaluated) = self.rank(query, params);
        log::debug!(
            "scored {candidates_evaluated} of {} profiles, returning {} matches",
            self.index.len(),
            matches.len()
        );
        self.cache.insert(fingerprint, Arc::from(matches.clone()));

        MatchResponse {
            total_found: matches.len(),
            matches,
            query_summary,
            searched_at: Utc::now(),
            from_cache: false,
            diagnostics: Diagnostics {
                processing_time: started_at.elapsed(),
                candidates_evaluated,
            },
        }
    }
}
