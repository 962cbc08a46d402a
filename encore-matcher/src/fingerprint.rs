//! Deterministic cache keys for matching calls.

use std::fmt;

use encore_core::{MatchParams, Query};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a query and its matching parameters.
///
/// Every query field takes part verbatim: list order and letter case are
/// preserved, so `["Bass", "Piano"]` and `["piano", "bass"]` are distinct
/// keys. Each field is tagged and length-prefixed, which keeps
/// `["ab"]` and `["a", "b"]` apart. The threshold contributes its exact bit
/// pattern.
///
/// # Examples
/// ```
/// use encore_core::{MatchParams, Query};
/// use encore_matcher::Fingerprint;
///
/// let query = Query::new().with_instruments(["Bass"]);
/// let params = MatchParams::default();
/// assert_eq!(Fingerprint::of(&query, params), Fingerprint::of(&query.clone(), params));
/// assert_ne!(
///     Fingerprint::of(&query, params),
///     Fingerprint::of(&query, MatchParams::new(0.5, 20)?),
/// );
/// assert_eq!(Fingerprint::of(&query, params).as_str().len(), 64);
/// # Ok::<(), encore_core::MatchParamsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint `query` under `params`.
    #[must_use]
    pub fn of(query: &Query, params: MatchParams) -> Self {
        let mut digest = FieldHasher::default();
        digest.list(b"instruments", &query.instruments);
        digest.optional(b"location", query.location.as_deref());
        digest.optional(b"availability", query.availability.as_deref());
        digest.list(b"musical_influences", &query.musical_influences);
        digest.optional(b"collaboration_intent", query.collaboration_intent.as_deref());
        digest.field(
            b"min_compatibility",
            &format!("{:08x}", params.min_compatibility().to_bits()),
        );
        digest.field(b"max_results", &params.max_results().to_string());
        Self(hex::encode(digest.inner.finalize()))
    }

    /// Borrow the hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default)]
struct FieldHasher {
    inner: Sha256,
}

impl FieldHasher {
    fn field(&mut self, tag: &[u8], value: &str) {
        self.inner.update(tag);
        self.inner.update(format!(":{}:", value.len()).as_bytes());
        self.inner.update(value.as_bytes());
    }

    fn optional(&mut self, tag: &[u8], value: Option<&str>) {
        match value {
            Some(text) => self.field(tag, text),
            None => {
                self.inner.update(tag);
                self.inner.update(b":none");
            }
        }
    }

    fn list(&mut self, tag: &[u8], values: &[String]) {
        self.inner.update(tag);
        self.inner.update(format!("[{}]", values.len()).as_bytes());
        for value in values {
            self.field(b"item", value);
        }
    }
}
