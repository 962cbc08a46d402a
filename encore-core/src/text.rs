//! Text normalisation shared by feature derivation, scoring and explanations.
//!
//! Every case-insensitive comparison in the engine goes through
//! [`normalise`], so a profile key derived at load time always compares equal
//! to the same word typed in a query.

use std::collections::BTreeSet;

/// Return the trimmed text, or `None` when it is absent or blank.
///
/// # Examples
/// ```
/// use encore_core::text::present;
///
/// assert_eq!(present(Some("  Brooklyn ")), Some("Brooklyn"));
/// assert_eq!(present(Some("   ")), None);
/// assert_eq!(present(None), None);
/// ```
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// Trim and lowercase `value` for case-insensitive comparison.
///
/// # Examples
/// ```
/// use encore_core::text::normalise;
///
/// assert_eq!(normalise("  Amy Winehouse "), "amy winehouse");
/// ```
#[must_use]
pub fn normalise(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalise every non-blank entry of `values` into a key set.
#[must_use]
pub fn key_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| normalise(value.as_ref()))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Return the non-blank entries of `values`, trimmed, without repeating a
/// case-insensitive key.
///
/// Order follows the first occurrence of each key.
#[must_use]
pub fn distinct_present<S>(values: &[S]) -> Vec<&str>
where
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    values
        .iter()
        .filter_map(|value| present(Some(value.as_ref())))
        .filter(|text| seen.insert(normalise(text)))
        .collect()
}
