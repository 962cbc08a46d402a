#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for the matching pipeline.

use std::cell::RefCell;

use encore_core::test_support::sample_profiles;
use encore_core::{FeatureIndex, MatchParams, MatchResponse, Matcher, Profile, Query};
use encore_matcher::MatchingPipeline;
use encore_scorer::CompatibilityScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state for matching scenarios.
#[derive(Debug, Default)]
struct MatchingWorld {
    catalog: RefCell<FeatureIndex>,
    query: RefCell<Query>,
    responses: RefCell<Vec<MatchResponse>>,
}

#[fixture]
fn world() -> MatchingWorld {
    MatchingWorld::default()
}

impl MatchingWorld {
    fn search(&self, params: MatchParams, times: usize) {
        let scorer = CompatibilityScorer::builtin().expect("built-in tables are valid");
        let pipeline = MatchingPipeline::new(self.catalog.borrow().clone(), scorer);
        let query = self.query.borrow();
        let responses = (0..times)
            .map(|_| pipeline.find_matches(&query, params))
            .collect();
        self.responses.replace(responses);
    }

    fn last(&self) -> MatchResponse {
        self.responses
            .borrow()
            .last()
            .cloned()
            .expect("a search should have run")
    }
}

fn threshold(min: f32) -> MatchParams {
    MatchParams::new(min, 20).expect("valid parameters")
}

#[given("the sample catalog")]
fn sample_catalog(world: &MatchingWorld) {
    world.catalog.replace(FeatureIndex::build(sample_profiles()));
}

#[given("an empty catalog")]
fn empty_catalog(world: &MatchingWorld) {
    world.catalog.replace(FeatureIndex::default());
}

#[given("a catalog holding one pianist in Harlem")]
fn pianist_catalog(world: &MatchingWorld) {
    world.catalog.replace(FeatureIndex::build([Profile::new("pianist")
        .with_instruments(["Piano"])
        .with_location("Harlem")
        .with_availability("Weekends")
        .with_genres(["Jazz"])
        .with_influences(["Jazz", "Bill Evans"])
        .with_collaboration_intent("band formation")]));
}

#[given("a query mirroring that pianist")]
fn pianist_query(world: &MatchingWorld) {
    world.query.replace(
        Query::new()
            .with_instruments(["Piano"])
            .with_location("Harlem")
            .with_availability("Weekends")
            .with_influences(["Jazz", "Bill Evans"])
            .with_collaboration_intent("band formation"),
    );
}

#[given("a query for a vocalist in brooklyn influenced by Amy Winehouse")]
fn vocalist_query(world: &MatchingWorld) {
    world.query.replace(
        Query::new()
            .with_instruments(["vocals"])
            .with_location("brooklyn")
            .with_influences(["Amy Winehouse"]),
    );
}

#[given("a query for a bass player")]
fn bass_query(world: &MatchingWorld) {
    world.query.replace(Query::new().with_instruments(["Bass"]));
}

#[given("a query for a theremin player")]
fn theremin_query(world: &MatchingWorld) {
    world.query.replace(Query::new().with_instruments(["Theremin"]));
}

#[when("I search with a threshold of 0.5")]
fn search_half(world: &MatchingWorld) {
    world.search(threshold(0.5), 1);
}

#[when("I search with a threshold of 0.0")]
fn search_all(world: &MatchingWorld) {
    world.search(threshold(0.0), 1);
}

#[when("I search with a threshold of 1.0")]
fn search_perfect(world: &MatchingWorld) {
    world.search(threshold(1.0), 1);
}

#[when("I search with the default parameters")]
fn search_default(world: &MatchingWorld) {
    world.search(MatchParams::default(), 1);
}

#[when("I search twice with a threshold of 0.3")]
fn search_twice(world: &MatchingWorld) {
    world.search(threshold(0.3), 2);
}

#[then("the first match is test_001")]
fn first_is_maya(world: &MatchingWorld) {
    let response = world.last();
    let first = response.matches.first().expect("at least one match");
    assert_eq!(first.profile.id.as_str(), "test_001");
    assert_eq!(first.factors.instruments, 1.0);
}

#[then("the first explanation names Amy Winehouse as a shared influence")]
fn explanation_names_influence(world: &MatchingWorld) {
    let response = world.last();
    let first = response.matches.first().expect("at least one match");
    assert!(
        first.explanation.contains("Shared influences: Amy Winehouse"),
        "explanation was {:?}",
        first.explanation
    );
}

#[then("the first match scores exactly 1.0")]
fn perfect_score(world: &MatchingWorld) {
    let response = world.last();
    assert_eq!(response.total_found, 1);
    let first = response.matches.first().expect("one match");
    assert_eq!(first.profile.id.as_str(), "pianist");
    assert_eq!(first.score, 1.0);
}

#[then("no matches are found")]
fn nothing_found(world: &MatchingWorld) {
    let response = world.last();
    assert!(response.matches.is_empty());
    assert_eq!(response.total_found, 0);
}

#[then("no candidates were evaluated")]
fn nothing_evaluated(world: &MatchingWorld) {
    assert_eq!(world.last().diagnostics.candidates_evaluated, 0);
}

#[then("the second response is served from the cache")]
fn second_cached(world: &MatchingWorld) {
    let responses = world.responses.borrow();
    let flags: Vec<bool> = responses.iter().map(|response| response.from_cache).collect();
    assert_eq!(flags, [false, true]);
}

#[then("both responses hold the same matches")]
fn same_matches(world: &MatchingWorld) {
    let responses = world.responses.borrow();
    let [fresh, cached] = responses.as_slice() else {
        panic!("expected two responses");
    };
    assert!(!fresh.matches.is_empty());
    assert_eq!(fresh.matches, cached.matches);
    assert_eq!(fresh.total_found, cached.total_found);
}

#[scenario(path = "tests/features/matching.feature", index = 0)]
fn singer_query(world: MatchingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/matching.feature", index = 1)]
fn empty_catalog_scenario(world: MatchingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/matching.feature", index = 2)]
fn cached_repeat(world: MatchingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/matching.feature", index = 3)]
fn prefilter(world: MatchingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/matching.feature", index = 4)]
fn perfect_match(world: MatchingWorld) {
    let _ = world;
}
