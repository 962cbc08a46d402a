//! Test-only fixtures shared by unit, behaviour and property tests across the
//! workspace.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{FactorScores, IndexedProfile, Profile, Query, ScoreBreakdown, Scorer};

/// Small catalog spanning every borough and most instrument groups.
///
/// Order matters: ranking ties resolve to this order.
#[must_use]
pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile::new("test_001")
            .with_name("Maya")
            .with_instruments(["Vocals"])
            .with_location("Williamsburg, Brooklyn")
            .with_genres(["Soul", "R&B"])
            .with_influences(["Amy Winehouse", "Erykah Badu"])
            .with_availability("Weekends")
            .with_collaboration_intent("band formation"),
        Profile::new("test_002")
            .with_name("Dev")
            .with_instruments(["Drums", "Percussion"])
            .with_location("Astoria, Queens")
            .with_genres(["Jazz", "Fusion"])
            .with_influences(["Art Blakey"])
            .with_availability("Weekday evenings")
            .with_collaboration_intent("jam sessions"),
        Profile::new("test_003")
            .with_name("Ines")
            .with_instruments(["Piano"])
            .with_location("Upper West Side")
            .with_genres(["Classical", "Jazz"])
            .with_influences(["Bill Evans"])
            .with_availability("Flexible")
            .with_collaboration_intent("recording projects"),
        Profile::new("test_004")
            .with_name("Sol")
            .with_instruments(["Bass"])
            .with_location("Belmont, Bronx")
            .with_genres(["Latin", "Salsa"])
            .with_influences(["Cachao"])
            .with_availability("Weekends")
            .with_collaboration_intent("band formation"),
        Profile::new("test_005")
            .with_name("Kofi")
            .with_instruments(["Kora"])
            .with_location("St. George, Staten Island")
            .with_genres(["World Music"])
            .with_influences(["Toumani Diabate"])
            .with_collaboration_intent("collaboration"),
    ]
}

/// `Scorer` returning the same score for every candidate and counting calls.
#[derive(Debug, Default)]
pub struct FixedScorer {
    overall: f32,
    calls: AtomicUsize,
}

impl FixedScorer {
    /// Score every candidate with `overall`.
    #[must_use]
    pub const fn new(overall: f32) -> Self {
        Self {
            overall,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `score` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _query: &Query, _candidate: &IndexedProfile) -> ScoreBreakdown {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let overall = Self::sanitise(self.overall);
        ScoreBreakdown {
            overall,
            factors: FactorScores {
                instruments: overall,
                genres: overall,
                location: overall,
                availability: overall,
                influences: overall,
                collaboration_intent: overall,
            },
        }
    }
}
