//! Per-profile derived features computed once at load time.
//!
//! The [`FeatureIndex`] owns the catalog for the lifetime of a process. Each
//! entry pairs a shared [`Profile`] with its [`DerivedFeatures`]: lowercase
//! instrument, genre and influence keys, instrument-group membership and the
//! normalised location. Scorers read the derived keys instead of normalising
//! the same strings on every query.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::instrument::{InstrumentGroup, groups_for};
use crate::text::{key_set, normalise, present};
use crate::{Profile, ProfileId, Query};

/// Normalised lookup keys for one side of a comparison.
///
/// Built from a [`Profile`] at load time, or from a [`Query`] once per
/// scoring call. For a query, the genre keys are its influences, which double
/// as the genre signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFeatures {
    instruments: BTreeSet<String>,
    instrument_groups: BTreeSet<InstrumentGroup>,
    genres: BTreeSet<String>,
    influences: BTreeSet<String>,
    location: Option<String>,
}

impl DerivedFeatures {
    /// Derive the features of a catalog profile.
    #[must_use]
    pub fn of_profile(profile: &Profile) -> Self {
        Self::derive(
            &profile.instruments,
            &profile.genres,
            &profile.musical_influences,
            profile.location.as_deref(),
        )
    }

    /// Derive the features of a query.
    #[must_use]
    pub fn of_query(query: &Query) -> Self {
        Self::derive(
            &query.instruments,
            &query.musical_influences,
            &query.musical_influences,
            query.location.as_deref(),
        )
    }

    fn derive(
        instruments: &[String],
        genres: &[String],
        influences: &[String],
        location: Option<&str>,
    ) -> Self {
        let instrument_groups = instruments
            .iter()
            .flat_map(|instrument| groups_for(instrument))
            .collect();
        Self {
            instruments: key_set(instruments),
            instrument_groups,
            genres: key_set(genres),
            influences: key_set(influences),
            location: present(location).map(normalise),
        }
    }

    /// Lowercase instrument keys.
    #[must_use]
    pub const fn instruments(&self) -> &BTreeSet<String> {
        &self.instruments
    }

    /// Groups any of the instruments belong to.
    #[must_use]
    pub const fn instrument_groups(&self) -> &BTreeSet<InstrumentGroup> {
        &self.instrument_groups
    }

    /// Lowercase genre keys.
    #[must_use]
    pub const fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    /// Lowercase influence keys.
    #[must_use]
    pub const fn influences(&self) -> &BTreeSet<String> {
        &self.influences
    }

    /// Trimmed, lowercase location text.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// A catalog profile paired with its derived features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedProfile {
    profile: Arc<Profile>,
    features: DerivedFeatures,
}

impl IndexedProfile {
    /// Index a profile.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self::from_shared(Arc::new(profile))
    }

    /// Index a profile that is already shared.
    #[must_use]
    pub fn from_shared(profile: Arc<Profile>) -> Self {
        let features = DerivedFeatures::of_profile(&profile);
        Self { profile, features }
    }

    /// Borrow the source profile.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Return another handle to the shared profile.
    #[must_use]
    pub fn shared(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    /// Borrow the derived features.
    #[must_use]
    pub const fn features(&self) -> &DerivedFeatures {
        &self.features
    }
}

/// Read-only catalog of indexed profiles.
///
/// Iteration follows load order, which is also the ranking tie-break order.
/// Duplicate identifiers are kept; [`FeatureIndex::get`] returns the first.
///
/// # Examples
/// ```
/// use encore_core::{FeatureIndex, InstrumentGroup, Profile, ProfileId};
///
/// let index = FeatureIndex::build([
///     Profile::new("a").with_instruments(["Drums"]),
///     Profile::new("b").with_genres(["Jazz", "Soul"]),
/// ]);
/// assert_eq!(index.len(), 2);
/// let drummer = index.get(&ProfileId::from("a")).expect("indexed");
/// assert!(drummer
///     .features()
///     .instrument_groups()
///     .contains(&InstrumentGroup::Percussion));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    entries: Vec<IndexedProfile>,
}

impl FeatureIndex {
    /// Index every profile once.
    #[must_use]
    pub fn build<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = Profile>,
    {
        Self {
            entries: profiles.into_iter().map(IndexedProfile::new).collect(),
        }
    }

    /// Number of indexed profiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no profiles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexedProfile> {
        self.entries.iter()
    }

    /// Find the first entry with `id`.
    #[must_use]
    pub fn get(&self, id: &ProfileId) -> Option<&IndexedProfile> {
        self.entries.iter().find(|entry| entry.profile.id == *id)
    }
}

impl FromIterator<Profile> for FeatureIndex {
    fn from_iter<I: IntoIterator<Item = Profile>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'a> IntoIterator for &'a FeatureIndex {
    type Item = &'a IndexedProfile;
    type IntoIter = std::slice::Iter<'a, IndexedProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
