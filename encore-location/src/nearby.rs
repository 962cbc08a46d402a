//! Neighborhood ranking around a place, plus graph statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::graph::LocationGraph;
use crate::resolution::Confidence;

/// Minimum proximity `nearby` callers use when they have no preference.
pub const DEFAULT_NEARBY_MIN_SCORE: u8 = 30;

/// Human-readable travel estimate for a proximity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelBand {
    /// Score of at least 90.
    SameArea,
    /// Score of at least 80.
    VeryClose,
    /// Score of at least 70.
    Close,
    /// Score of at least 50.
    Moderate,
    /// Score of at least 30.
    Distant,
    /// Anything lower.
    VeryDistant,
}

impl TravelBand {
    /// Classify a proximity score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::SameArea,
            80..=89 => Self::VeryClose,
            70..=79 => Self::Close,
            50..=69 => Self::Moderate,
            30..=49 => Self::Distant,
            _ => Self::VeryDistant,
        }
    }

    /// Describe the band for display.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SameArea => "Same area - walking distance",
            Self::VeryClose => "Very close - short subway ride",
            Self::Close => "Close - same borough or adjacent",
            Self::Moderate => "Moderate - cross-borough commute",
            Self::Distant => "Distant - longer commute required",
            Self::VeryDistant => "Very distant - significant travel time",
        }
    }
}

impl fmt::Display for TravelBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One entry of a [`LocationGraph::nearby`] ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearbyNeighborhood<'g> {
    /// Neighborhood key.
    pub key: &'g str,
    /// Display name.
    pub name: &'g str,
    /// Owning borough key.
    pub borough: &'g str,
    /// Zone of the neighborhood.
    pub zone: &'g str,
    /// Proximity to the query place, `0..=100`.
    pub score: u8,
    /// Travel estimate derived from `score`.
    pub travel: TravelBand,
}

/// Counts describing a [`LocationGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStats<'g> {
    /// Registered neighborhoods.
    pub neighborhoods: usize,
    /// Distinct aliases across all neighborhoods.
    pub aliases: usize,
    /// Neighborhood count per zone; every zone is present.
    pub zones: BTreeMap<&'g str, usize>,
    /// Neighborhood count per borough key; every borough is present.
    pub boroughs: BTreeMap<&'g str, usize>,
    /// Registered zones in registration order.
    pub coverage: Vec<&'g str>,
}

impl LocationGraph {
    /// Rank every neighborhood by proximity to `text`.
    ///
    /// `text` is resolved once; each neighborhood is compared through its own
    /// exact resolution. Entries below `min_score` are dropped and ties keep
    /// registration order. Unresolvable text yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use encore_location::{LocationGraph, TravelBand};
    ///
    /// let graph = LocationGraph::builtin()?;
    /// let ranked = graph.nearby("Astoria", 80);
    /// assert_eq!(ranked.first().map(|n| n.key), Some("astoria"));
    /// assert!(ranked.iter().all(|n| n.travel <= TravelBand::VeryClose));
    /// # Ok::<(), encore_location::LocationGraphError>(())
    /// ```
    #[must_use]
    pub fn nearby(&self, text: &str, min_score: u8) -> Vec<NearbyNeighborhood<'_>> {
        let Some(origin) = self.resolve(text) else {
            return Vec::new();
        };
        let mut ranked: Vec<_> = self
            .neighborhoods()
            .iter()
            .filter_map(|neighborhood| {
                let target = neighborhood.resolution(Confidence::Exact);
                let score = self.proximity_between(&origin, &target);
                (score >= min_score).then(|| NearbyNeighborhood {
                    key: neighborhood.key(),
                    name: neighborhood.name(),
                    borough: neighborhood.borough(),
                    zone: neighborhood.zone(),
                    score,
                    travel: TravelBand::from_score(score),
                })
            })
            .collect();
        ranked.sort_by(|left, right| right.score.cmp(&left.score));
        ranked
    }

    /// Summarise the graph contents.
    #[must_use]
    pub fn stats(&self) -> LocationStats<'_> {
        let mut zones: BTreeMap<&str, usize> =
            self.zones.iter().map(|zone| (zone.as_str(), 0)).collect();
        let mut boroughs: BTreeMap<&str, usize> = self
            .boroughs
            .iter()
            .map(|borough| (borough.key(), 0))
            .collect();
        let mut aliases = 0;
        for neighborhood in &self.neighborhoods {
            aliases += neighborhood.aliases().len();
            if let Some(count) = zones.get_mut(neighborhood.zone()) {
                *count += 1;
            }
            if let Some(count) = boroughs.get_mut(neighborhood.borough()) {
                *count += 1;
            }
        }
        LocationStats {
            neighborhoods: self.neighborhoods.len(),
            aliases,
            zones,
            boroughs,
            coverage: self.zones.iter().map(String::as_str).collect(),
        }
    }
}
