//! Instrument groups used to score non-exact instrument compatibility.
//!
//! An instrument may belong to several groups (a bass is both rhythm section
//! and strings). Membership is matched on the normalised instrument name.
//!
//! # Examples
//! ```
//! use encore_core::{InstrumentGroup, groups_for};
//!
//! let groups = groups_for("Bass");
//! assert!(groups.contains(&InstrumentGroup::RhythmSection));
//! assert!(groups.contains(&InstrumentGroup::Strings));
//! assert_eq!(InstrumentGroup::Winds.to_string(), "winds");
//! ```

use std::collections::BTreeSet;

use crate::text::normalise;

/// A named cluster of instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum InstrumentGroup {
    /// Bass and drums.
    RhythmSection,
    /// Chordal instruments.
    Harmony,
    /// Lead lines and voice.
    Melody,
    /// Traditional instruments from outside the Western canon.
    World,
    /// Acoustic folk instruments.
    Folk,
    /// Drums and hand percussion.
    Percussion,
    /// Plucked and bowed strings.
    Strings,
    /// Woodwinds and brass.
    Winds,
    /// Keyboard instruments.
    Keyboards,
}

impl InstrumentGroup {
    /// Every group in registration order.
    pub const ALL: [Self; 9] = [
        Self::RhythmSection,
        Self::Harmony,
        Self::Melody,
        Self::World,
        Self::Folk,
        Self::Percussion,
        Self::Strings,
        Self::Winds,
        Self::Keyboards,
    ];

    /// Return the group as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RhythmSection => "rhythm_section",
            Self::Harmony => "harmony",
            Self::Melody => "melody",
            Self::World => "world",
            Self::Folk => "folk",
            Self::Percussion => "percussion",
            Self::Strings => "strings",
            Self::Winds => "winds",
            Self::Keyboards => "keyboards",
        }
    }

    /// Normalised instrument names belonging to the group.
    #[must_use]
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            Self::RhythmSection => &["bass", "drums"],
            Self::Harmony => &["piano", "guitar", "organ", "synthesizer", "accordion"],
            Self::Melody => &["vocals", "violin", "saxophone", "trumpet", "flute", "cello"],
            Self::World => &["oud", "sitar", "kora", "erhu", "shamisen", "tabla", "djembe"],
            Self::Folk => &["fiddle", "mandolin", "banjo", "ukulele", "harmonica"],
            Self::Percussion => &["drums", "percussion", "djembe", "tabla", "talking drum"],
            Self::Strings => &[
                "guitar", "bass", "violin", "cello", "mandolin", "sitar", "kora",
            ],
            Self::Winds => &["saxophone", "trumpet", "flute", "clarinet", "oboe"],
            Self::Keyboards => &["piano", "organ", "synthesizer", "accordion"],
        }
    }

    /// Whether `instrument` belongs to this group, ignoring case.
    #[must_use]
    pub fn contains(self, instrument: &str) -> bool {
        let key = normalise(instrument);
        self.members().contains(&key.as_str())
    }
}

impl std::fmt::Display for InstrumentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InstrumentGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalise(s).replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == key)
            .ok_or_else(|| format!("unknown instrument group '{s}'"))
    }
}

/// Return every group `instrument` belongs to.
///
/// Unknown instruments belong to no group.
#[must_use]
pub fn groups_for(instrument: &str) -> BTreeSet<InstrumentGroup> {
    let key = normalise(instrument);
    InstrumentGroup::ALL
        .into_iter()
        .filter(|group| group.members().contains(&key.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("drums", &[InstrumentGroup::RhythmSection, InstrumentGroup::Percussion])]
    #[case("Piano", &[InstrumentGroup::Harmony, InstrumentGroup::Keyboards])]
    #[case(" Talking Drum ", &[InstrumentGroup::Percussion])]
    #[case("theremin", &[])]
    fn groups_for_matches_membership(#[case] instrument: &str, #[case] expected: &[InstrumentGroup]) {
        let groups = groups_for(instrument);
        let wanted: BTreeSet<_> = expected.iter().copied().collect();
        assert_eq!(groups, wanted);
    }

    #[rstest]
    fn members_are_normalised() {
        for group in InstrumentGroup::ALL {
            for member in group.members() {
                assert_eq!(normalise(member), *member, "{group} member {member}");
            }
        }
    }

    #[rstest]
    #[case("rhythm-section", InstrumentGroup::RhythmSection)]
    #[case("Rhythm Section", InstrumentGroup::RhythmSection)]
    #[case("keyboards", InstrumentGroup::Keyboards)]
    fn parsing_accepts_common_spellings(#[case] input: &str, #[case] expected: InstrumentGroup) {
        assert_eq!(InstrumentGroup::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = InstrumentGroup::from_str("brass band").unwrap_err();
        assert!(err.contains("unknown instrument group"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(InstrumentGroup::Folk.to_string(), InstrumentGroup::Folk.as_str());
    }
}
