#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for load-time feature derivation.

use std::cell::RefCell;
use std::collections::BTreeSet;

use encore_core::{FeatureIndex, IndexedProfile, InstrumentGroup, Profile, ProfileId};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state for feature index scenarios.
#[derive(Debug, Default)]
struct IndexWorld {
    catalog: RefCell<Vec<Profile>>,
    index: RefCell<Option<FeatureIndex>>,
}

#[fixture]
fn world() -> IndexWorld {
    IndexWorld::default()
}

fn with_entry<T>(world: &IndexWorld, id: &str, check: impl FnOnce(&IndexedProfile) -> T) -> T {
    let index = world.index.borrow();
    let entry = index
        .as_ref()
        .expect("index should be built")
        .get(&ProfileId::from(id))
        .expect("profile should be indexed");
    check(entry)
}

#[given("a catalog with a bass player")]
fn bass_player(world: &IndexWorld) {
    world
        .catalog
        .borrow_mut()
        .push(Profile::new("bass").with_instruments(["Bass"]));
}

#[given("a catalog with a soul singer listing genres in mixed case")]
fn soul_singer(world: &IndexWorld) {
    world.catalog.borrow_mut().push(
        Profile::new("soul")
            .with_instruments(["Vocals"])
            .with_genres(["Neo-Soul", "R&B", " GOSPEL "]),
    );
}

#[given("a catalog with a profile that has only an identifier")]
fn bare_profile(world: &IndexWorld) {
    world.catalog.borrow_mut().push(Profile::new("bare"));
}

#[when("I build the feature index")]
fn build_index(world: &IndexWorld) {
    let catalog = world.catalog.borrow().clone();
    world.index.replace(Some(FeatureIndex::build(catalog)));
}

#[then("the bass player belongs to the rhythm section and strings groups")]
fn bass_groups(world: &IndexWorld) {
    let groups = with_entry(world, "bass", |entry| {
        entry.features().instrument_groups().clone()
    });
    let expected = BTreeSet::from([InstrumentGroup::RhythmSection, InstrumentGroup::Strings]);
    assert_eq!(groups, expected);
}

#[then("the soul singer has lowercase genre keys")]
fn soul_keys(world: &IndexWorld) {
    let genres = with_entry(world, "soul", |entry| entry.features().genres().clone());
    let expected: BTreeSet<String> = ["neo-soul", "r&b", "gospel"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(genres, expected);
}

#[then("the bare profile has no derived features")]
fn bare_features(world: &IndexWorld) {
    with_entry(world, "bare", |entry| {
        let features = entry.features();
        assert!(features.instruments().is_empty());
        assert!(features.instrument_groups().is_empty());
        assert!(features.genres().is_empty());
        assert!(features.influences().is_empty());
        assert_eq!(features.location(), None);
    });
}

#[scenario(path = "tests/features/feature_index.feature", index = 0)]
fn instruments_map_to_groups(world: IndexWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/feature_index.feature", index = 1)]
fn genres_become_keys(world: IndexWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/feature_index.feature", index = 2)]
fn absent_fields_are_empty(world: IndexWorld) {
    let _ = world;
}
