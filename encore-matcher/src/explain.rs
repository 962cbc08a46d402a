//! Human-readable match explanations and query summaries.

use std::collections::BTreeSet;

use encore_core::text::{distinct_present, normalise, present};
use encore_core::{Factor, FactorScores, IndexedProfile, Query};

/// Most clauses an explanation carries.
pub const MAX_CLAUSES: usize = 3;

/// Explanation used when no factor clears its threshold.
pub const FALLBACK_EXPLANATION: &str = "Good overall compatibility across multiple factors";

/// Summary used for a query without usable fields.
pub const GENERAL_SEARCH: &str = "General search";

const SUMMARY_INFLUENCES: usize = 3;

/// Factors in explanation priority order with the score each must reach.
const CLAUSE_THRESHOLDS: [(Factor, f32); 6] = [
    (Factor::Instruments, 0.8),
    (Factor::Genres, 0.7),
    (Factor::Location, 0.8),
    (Factor::Availability, 0.8),
    (Factor::Influences, 0.7),
    (Factor::CollaborationIntent, 0.8),
];

/// Explain why `candidate` matched `query`.
///
/// Each factor at or above its threshold contributes one clause, in
/// priority order, and the first [`MAX_CLAUSES`] are joined with `"; "`.
/// Shared instruments and influences are named with the query's spelling.
///
/// # Examples
/// ```
/// use encore_core::{FactorScores, IndexedProfile, Profile, Query};
/// use encore_matcher::explain;
///
/// let query = Query::new().with_influences(["Amy Winehouse"]);
/// let candidate = IndexedProfile::new(
///     Profile::new("maya").with_influences(["amy winehouse"]),
/// );
/// let factors = FactorScores { influences: 0.9, ..FactorScores::default() };
/// assert_eq!(
///     explain(&query, &candidate, &factors),
///     "Shared influences: Amy Winehouse",
/// );
/// ```
#[must_use]
pub fn explain(query: &Query, candidate: &IndexedProfile, factors: &FactorScores) -> String {
    let clauses: Vec<String> = CLAUSE_THRESHOLDS
        .iter()
        .filter(|(factor, threshold)| factors.get(*factor) >= *threshold)
        .map(|(factor, _)| clause(*factor, query, candidate))
        .take(MAX_CLAUSES)
        .collect();
    if clauses.is_empty() {
        FALLBACK_EXPLANATION.to_owned()
    } else {
        clauses.join("; ")
    }
}

fn clause(factor: Factor, query: &Query, candidate: &IndexedProfile) -> String {
    let features = candidate.features();
    match factor {
        Factor::Instruments => {
            let shared = shared(&query.instruments, features.instruments());
            if shared.is_empty() {
                "Instruments complement each other well".to_owned()
            } else {
                format!("Plays same instruments: {}", shared.join(", "))
            }
        }
        Factor::Genres => "Strong musical genre compatibility".to_owned(),
        Factor::Location => {
            let wanted = present(query.location.as_deref()).map(normalise);
            match present(candidate.profile().location.as_deref()) {
                Some(place) if wanted.as_deref() == features.location() => {
                    format!("Same location: {place}")
                }
                _ => "Close geographic proximity".to_owned(),
            }
        }
        Factor::Availability => "Compatible schedules and availability".to_owned(),
        Factor::Influences => {
            let shared = shared(&query.musical_influences, features.influences());
            if shared.is_empty() {
                "Similar musical taste and influences".to_owned()
            } else {
                format!("Shared influences: {}", shared.join(", "))
            }
        }
        Factor::CollaborationIntent => "Aligned collaboration goals".to_owned(),
    }
}

fn shared<'q>(wanted: &'q [String], offered: &BTreeSet<String>) -> Vec<&'q str> {
    distinct_present(wanted)
        .into_iter()
        .filter(|item| offered.contains(&normalise(item)))
        .collect()
}

/// Summarise the non-empty fields of `query`.
///
/// Parts appear in the order instruments, location, availability, the first
/// three influences and intent, joined with `" | "`.
///
/// # Examples
/// ```
/// use encore_core::Query;
/// use encore_matcher::summarise;
///
/// let query = Query::new().with_instruments(["vocals"]).with_location("brooklyn");
/// assert_eq!(summarise(&query), "Instruments: vocals | Location: brooklyn");
/// assert_eq!(summarise(&Query::new()), "General search");
/// ```
#[must_use]
pub fn summarise(query: &Query) -> String {
    let mut parts = Vec::new();
    let instruments = distinct_present(&query.instruments);
    if !instruments.is_empty() {
        parts.push(format!("Instruments: {}", instruments.join(", ")));
    }
    if let Some(location) = present(query.location.as_deref()) {
        parts.push(format!("Location: {location}"));
    }
    if let Some(availability) = present(query.availability.as_deref()) {
        parts.push(format!("Availability: {availability}"));
    }
    let influences: Vec<&str> = distinct_present(&query.musical_influences)
        .into_iter()
        .take(SUMMARY_INFLUENCES)
        .collect();
    if !influences.is_empty() {
        parts.push(format!("Influences: {}", influences.join(", ")));
    }
    if let Some(intent) = present(query.collaboration_intent.as_deref()) {
        parts.push(format!("Intent: {intent}"));
    }
    if parts.is_empty() {
        GENERAL_SEARCH.to_owned()
    } else {
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::Profile;
    use rstest::rstest;

    fn all(score: f32) -> FactorScores {
        FactorScores {
            instruments: score,
            genres: score,
            location: score,
            availability: score,
            influences: score,
            collaboration_intent: score,
        }
    }

    fn singer() -> IndexedProfile {
        IndexedProfile::new(
            Profile::new("maya")
                .with_instruments(["Vocals", "Piano"])
                .with_location("Williamsburg, Brooklyn")
                .with_influences(["Amy Winehouse", "Erykah Badu"]),
        )
    }

    #[rstest]
    fn keeps_first_three_clauses_in_priority_order() {
        let query = Query::new()
            .with_instruments(["vocals"])
            .with_location("williamsburg, brooklyn ");
        assert_eq!(
            explain(&query, &singer(), &all(1.0)),
            "Plays same instruments: vocals; Strong musical genre compatibility; \
             Same location: Williamsburg, Brooklyn"
        );
    }

    #[rstest]
    fn thresholds_are_inclusive() {
        let factors = FactorScores {
            genres: 0.7,
            availability: 0.79,
            collaboration_intent: 0.8,
            ..FactorScores::default()
        };
        assert_eq!(
            explain(&Query::new(), &singer(), &factors),
            "Strong musical genre compatibility; Aligned collaboration goals"
        );
    }

    #[rstest]
    fn generic_clauses_without_concrete_overlap() {
        let query = Query::new()
            .with_instruments(["Bass"])
            .with_location("brooklyn")
            .with_influences(["Jazz"]);
        let factors = FactorScores {
            instruments: 0.8,
            location: 0.9,
            influences: 0.9,
            ..FactorScores::default()
        };
        assert_eq!(
            explain(&query, &singer(), &factors),
            "Instruments complement each other well; Close geographic proximity; \
             Similar musical taste and influences"
        );
    }

    #[rstest]
    fn shared_influences_use_query_spelling_and_order() {
        let query = Query::new().with_influences(["erykah badu", "AMY WINEHOUSE", "Erykah Badu"]);
        let factors = FactorScores {
            influences: 1.0,
            ..FactorScores::default()
        };
        assert_eq!(
            explain(&query, &singer(), &factors),
            "Shared influences: erykah badu, AMY WINEHOUSE"
        );
    }

    #[rstest]
    fn falls_back_when_nothing_clears() {
        assert_eq!(
            explain(&Query::new(), &singer(), &all(0.5)),
            FALLBACK_EXPLANATION
        );
    }

    #[rstest]
    #[case(&Query::new(), "General search")]
    #[case(&Query::new().with_location("   "), "General search")]
    #[case(
        &Query::new().with_instruments(["Bass", " bass", "Drums"]).with_availability("Weekends"),
        "Instruments: Bass, Drums | Availability: Weekends"
    )]
    #[case(
        &Query::new()
            .with_influences(["A", "B", "C", "D"])
            .with_collaboration_intent("band formation"),
        "Influences: A, B, C | Intent: band formation"
    )]
    fn summaries(#[case] query: &Query, #[case] expected: &str) {
        assert_eq!(summarise(query), expected);
    }
}
