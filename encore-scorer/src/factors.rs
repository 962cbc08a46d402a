//! Per-factor scoring rules.
//!
//! Each rule returns a score in `0.0..=1.0` and defines an explicit neutral
//! value for missing information, so an absent field never fails scoring.

use encore_core::DerivedFeatures;
use encore_core::text::normalise;
use encore_location::LocationGraph;

use crate::tables::{GenreGraph, are_complementary};

/// How a query's instruments relate to a profile's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstrumentRelation {
    /// At least one instrument appears on both sides.
    Exact,
    /// A query group and a profile group form a complementary pair.
    Complementary,
    /// Both sides share an instrument group.
    SameGroup,
}

impl InstrumentRelation {
    /// Find the strongest relation between two feature sets.
    ///
    /// Returns `None` when either side has no instruments or no relation
    /// holds.
    #[must_use]
    pub fn between(query: &DerivedFeatures, profile: &DerivedFeatures) -> Option<Self> {
        if query
            .instruments()
            .intersection(profile.instruments())
            .next()
            .is_some()
        {
            return Some(Self::Exact);
        }
        let pairs = || {
            query.instrument_groups().iter().flat_map(|&left| {
                profile
                    .instrument_groups()
                    .iter()
                    .map(move |&right| (left, right))
            })
        };
        if pairs().any(|(left, right)| are_complementary(left, right)) {
            Some(Self::Complementary)
        } else if pairs().any(|(left, right)| left == right) {
            Some(Self::SameGroup)
        } else {
            None
        }
    }

    /// Instrument factor awarded for the relation.
    #[must_use]
    pub const fn score(self) -> f32 {
        match self {
            Self::Exact => 1.0,
            Self::Complementary => 0.8,
            Self::SameGroup => 0.7,
        }
    }
}

pub(crate) fn instruments(query: &DerivedFeatures, profile: &DerivedFeatures) -> f32 {
    if query.instruments().is_empty() {
        return 0.5;
    }
    InstrumentRelation::between(query, profile).map_or(0.0, InstrumentRelation::score)
}

pub(crate) fn genres(query: &DerivedFeatures, profile: &DerivedFeatures, graph: &GenreGraph) -> f32 {
    if query.genres().is_empty() {
        return 0.5;
    }
    if profile.genres().is_empty() {
        return 0.3;
    }
    if query.genres().intersection(profile.genres()).next().is_some() {
        return 1.0;
    }
    query
        .genres()
        .iter()
        .flat_map(|from| {
            profile
                .genres()
                .iter()
                .map(move |to| graph.similarity(from, to))
        })
        .fold(0.0, f32::max)
}

#[expect(
    clippy::float_arithmetic,
    reason = "proximity is rescaled from 0..=100 to 0..=1"
)]
pub(crate) fn location(
    graph: &LocationGraph,
    query: &DerivedFeatures,
    profile: &DerivedFeatures,
) -> f32 {
    let Some(wanted) = query.location() else {
        return 0.5;
    };
    let Some(offered) = profile.location() else {
        return 0.4;
    };
    f32::from(graph.proximity(wanted, offered)) / 100.0
}

pub(crate) fn availability(query: Option<&str>, profile: Option<&str>) -> f32 {
    let (Some(wanted), Some(offered)) = (query.map(normalise), profile.map(normalise)) else {
        return 0.5;
    };
    let both = |needle: &str| wanted.contains(needle) && offered.contains(needle);
    if wanted == offered {
        1.0
    } else if wanted.contains("flexible") || offered.contains("flexible") {
        0.75
    } else if both("evening") || both("weekend") || both("twice") || both("once") {
        0.9
    } else {
        0.45
    }
}

pub(crate) fn influences(query: &DerivedFeatures, profile: &DerivedFeatures) -> f32 {
    if query.influences().is_empty() {
        return 0.5;
    }
    if profile.influences().is_empty() {
        return 0.4;
    }
    match query.influences().intersection(profile.influences()).count() {
        0 => 0.35,
        1 => 0.9,
        _ => 1.0,
    }
}

pub(crate) fn collaboration_intent(query: Option<&str>, profile: Option<&str>) -> f32 {
    let (Some(wanted), Some(offered)) = (query.map(normalise), profile.map(normalise)) else {
        return 0.7;
    };
    if wanted == offered {
        1.0
    } else if wanted.contains("band") && offered.contains("band") {
        0.9
    } else {
        0.6
    }
}
