//! The outcome of resolving free text to a known place.

use serde::Serialize;

/// How specific a resolved place is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// A single neighborhood.
    Neighborhood,
    /// A whole borough, represented by its first zone.
    Borough,
    /// The whole city; it has no representative zone.
    City,
}

/// Which resolution rule produced a match.
///
/// Rules are tried from most to least specific; the first that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The text equals a neighborhood alias.
    Exact,
    /// The text contains, or is contained in, a neighborhood alias.
    Partial,
    /// The text mentions a borough.
    Borough,
    /// The text mentions the city.
    City,
}

impl Confidence {
    /// Confidence on a `0..=100` scale.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Exact => 100,
            Self::Partial => 80,
            Self::Borough => 60,
            Self::City => 40,
        }
    }
}

/// A place recognised by [`LocationGraph::resolve`](crate::LocationGraph::resolve).
///
/// Borrowed from the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'g> {
    pub(crate) granularity: Granularity,
    pub(crate) key: &'g str,
    pub(crate) name: &'g str,
    pub(crate) borough: Option<&'g str>,
    pub(crate) zone: Option<&'g str>,
    pub(crate) zone_index: Option<usize>,
    pub(crate) confidence: Confidence,
}

impl<'g> Resolution<'g> {
    /// Specificity of the match.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Key of the neighborhood, borough or city.
    #[must_use]
    pub const fn key(&self) -> &'g str {
        self.key
    }

    /// Display name of the place.
    #[must_use]
    pub const fn name(&self) -> &'g str {
        self.name
    }

    /// Owning borough key; `None` for the city.
    #[must_use]
    pub const fn borough(&self) -> Option<&'g str> {
        self.borough
    }

    /// Representative zone; `None` for the city.
    #[must_use]
    pub const fn zone(&self) -> Option<&'g str> {
        self.zone
    }

    /// Rule that produced the match.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Whether both resolutions name the same place at the same granularity.
    #[must_use]
    pub fn is_same_place(&self, other: &Self) -> bool {
        self.granularity == other.granularity && self.key == other.key
    }
}
