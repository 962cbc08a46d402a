//! Static relation tables consulted by the factor rules.

use std::collections::BTreeMap;

use encore_core::InstrumentGroup;
use encore_core::text::normalise;

use crate::ScorerError;

/// Instrument-group pairs that complement each other, matched in either
/// order.
pub const COMPLEMENTARY_GROUPS: [(InstrumentGroup, InstrumentGroup); 5] = [
    (InstrumentGroup::RhythmSection, InstrumentGroup::Harmony),
    (InstrumentGroup::RhythmSection, InstrumentGroup::Melody),
    (InstrumentGroup::Harmony, InstrumentGroup::Melody),
    (InstrumentGroup::Strings, InstrumentGroup::Percussion),
    (InstrumentGroup::Winds, InstrumentGroup::RhythmSection),
];

/// Whether two groups form a complementary pair.
///
/// # Examples
/// ```
/// use encore_core::InstrumentGroup;
/// use encore_scorer::are_complementary;
///
/// assert!(are_complementary(InstrumentGroup::Melody, InstrumentGroup::Harmony));
/// assert!(!are_complementary(InstrumentGroup::Folk, InstrumentGroup::World));
/// ```
#[must_use]
pub fn are_complementary(a: InstrumentGroup, b: InstrumentGroup) -> bool {
    COMPLEMENTARY_GROUPS
        .iter()
        .any(|&(left, right)| (left, right) == (a, b) || (left, right) == (b, a))
}

type Edges = &'static [(&'static str, f32)];

const BUILTIN_GENRES: &[(&str, Edges)] = &[
    (
        "jazz",
        &[
            ("jazz", 1.0),
            ("blues", 0.8),
            ("soul", 0.7),
            ("fusion", 0.9),
            ("bebop", 0.9),
            ("hard bop", 0.9),
            ("contemporary jazz", 0.8),
            ("latin jazz", 0.7),
            ("neo-soul", 0.6),
        ],
    ),
    (
        "rock",
        &[
            ("rock", 1.0),
            ("indie rock", 0.9),
            ("alternative", 0.8),
            ("blues", 0.7),
            ("funk", 0.6),
            ("pop", 0.5),
            ("indie", 0.8),
            ("post-rock", 0.7),
        ],
    ),
    (
        "blues",
        &[
            ("blues", 1.0),
            ("jazz", 0.8),
            ("rock", 0.7),
            ("soul", 0.8),
            ("r&b", 0.7),
            ("gospel", 0.6),
            ("country", 0.5),
            ("americana", 0.6),
        ],
    ),
    (
        "soul",
        &[
            ("soul", 1.0),
            ("r&b", 0.9),
            ("neo-soul", 0.9),
            ("gospel", 0.8),
            ("jazz", 0.7),
            ("blues", 0.8),
            ("funk", 0.7),
        ],
    ),
    (
        "folk",
        &[
            ("folk", 1.0),
            ("indie folk", 0.9),
            ("americana", 0.8),
            ("country", 0.7),
            ("singer-songwriter", 0.8),
            ("bluegrass", 0.6),
            ("celtic", 0.5),
        ],
    ),
    (
        "classical",
        &[
            ("classical", 1.0),
            ("chamber", 0.9),
            ("contemporary classical", 0.8),
            ("opera", 0.7),
            ("baroque", 0.8),
            ("romantic", 0.8),
        ],
    ),
    (
        "world music",
        &[
            ("world music", 1.0),
            ("world fusion", 0.8),
            ("traditional", 0.7),
            ("ethnic", 0.8),
            ("cultural", 0.7),
        ],
    ),
    (
        "electronic",
        &[
            ("electronic", 1.0),
            ("ambient", 0.7),
            ("experimental", 0.6),
            ("fusion", 0.5),
            ("contemporary", 0.6),
        ],
    ),
    (
        "latin",
        &[
            ("latin", 1.0),
            ("salsa", 0.9),
            ("bossa nova", 0.8),
            ("tango", 0.7),
            ("latin jazz", 0.8),
            ("brazilian", 0.8),
            ("flamenco", 0.6),
        ],
    ),
    (
        "indie",
        &[
            ("indie", 1.0),
            ("indie rock", 0.9),
            ("indie folk", 0.8),
            ("alternative", 0.8),
            ("experimental", 0.6),
            ("post-rock", 0.7),
        ],
    ),
];

/// Directed genre similarity graph.
///
/// Edges run from a canonical genre to related genres with a weight in
/// `0.0..=1.0`. Lookups are directed: `jazz -> blues` does not imply
/// `blues -> jazz`. Missing edges score `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenreGraph {
    edges: BTreeMap<String, BTreeMap<String, f32>>,
}

impl GenreGraph {
    /// Return the built-in similarity table.
    #[must_use]
    pub fn builtin() -> Self {
        let edges = BUILTIN_GENRES
            .iter()
            .map(|(root, related)| {
                let targets = related
                    .iter()
                    .map(|(genre, weight)| ((*genre).to_owned(), *weight))
                    .collect();
                ((*root).to_owned(), targets)
            })
            .collect();
        Self { edges }
    }

    /// Build a graph from `(from, to, similarity)` edges.
    ///
    /// Genre names are normalised; a repeated edge keeps the last weight.
    ///
    /// # Errors
    /// Returns [`ScorerError::SimilarityOutOfRange`] for weights outside
    /// `0.0..=1.0` (including non-finite values) and
    /// [`ScorerError::BlankGenre`] for blank genre names.
    pub fn from_edges<I, S>(edges: I) -> Result<Self, ScorerError>
    where
        I: IntoIterator<Item = (S, S, f32)>,
        S: AsRef<str>,
    {
        let mut graph = Self::default();
        for (from, to, value) in edges {
            let source = normalise(from.as_ref());
            let target = normalise(to.as_ref());
            if source.is_empty() || target.is_empty() {
                return Err(ScorerError::BlankGenre);
            }
            if !(0.0_f32..=1.0_f32).contains(&value) {
                return Err(ScorerError::SimilarityOutOfRange {
                    from: source,
                    to: target,
                    value,
                });
            }
            graph.edges.entry(source).or_default().insert(target, value);
        }
        Ok(graph)
    }

    /// Similarity from normalised genre `from` to normalised genre `to`.
    #[must_use]
    pub fn similarity(&self, from: &str, to: &str) -> f32 {
        self.edges
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .unwrap_or(0.0_f32)
    }

    /// Number of canonical genres with outgoing edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InstrumentGroup::RhythmSection, InstrumentGroup::Harmony, true)]
    #[case(InstrumentGroup::Harmony, InstrumentGroup::RhythmSection, true)]
    #[case(InstrumentGroup::Percussion, InstrumentGroup::Strings, true)]
    #[case(InstrumentGroup::RhythmSection, InstrumentGroup::Winds, true)]
    #[case(InstrumentGroup::Winds, InstrumentGroup::Melody, false)]
    #[case(InstrumentGroup::Harmony, InstrumentGroup::Harmony, false)]
    fn complementary_pairs_match_either_order(
        #[case] a: InstrumentGroup,
        #[case] b: InstrumentGroup,
        #[case] expected: bool,
    ) {
        assert_eq!(are_complementary(a, b), expected);
    }

    #[rstest]
    fn builtin_table_is_directed() {
        let graph = GenreGraph::builtin();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.similarity("jazz", "fusion"), 0.9);
        assert_eq!(graph.similarity("fusion", "jazz"), 0.0);
        assert_eq!(graph.similarity("latin", "salsa"), 0.9);
        assert_eq!(graph.similarity("unknown", "jazz"), 0.0);
    }

    #[rstest]
    fn graph_without_edges_is_empty() {
        let empty = GenreGraph::from_edges(std::iter::empty::<(&str, &str, f32)>())
            .expect("no edges is valid");
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!GenreGraph::builtin().is_empty());
    }

    #[rstest]
    fn builtin_table_passes_validation() {
        let edges = BUILTIN_GENRES.iter().flat_map(|(root, related)| {
            related
                .iter()
                .map(move |(genre, weight)| (*root, *genre, *weight))
        });
        let rebuilt = GenreGraph::from_edges(edges).expect("built-in edges are valid");
        assert_eq!(rebuilt, GenreGraph::builtin());
    }

    #[rstest]
    #[case(1.5)]
    #[case(-0.1)]
    #[case(f32::NAN)]
    fn rejects_out_of_range_similarity(#[case] value: f32) {
        let err = GenreGraph::from_edges([("Jazz", "Blues", value)])
            .expect_err("similarity should be rejected");
        assert!(matches!(
            err,
            ScorerError::SimilarityOutOfRange { ref from, ref to, .. }
                if from == "jazz" && to == "blues"
        ));
    }

    #[rstest]
    fn rejects_blank_genres() {
        let err = GenreGraph::from_edges([(" ", "blues", 0.5)]).expect_err("blank genre");
        assert_eq!(err, ScorerError::BlankGenre);
    }
}
