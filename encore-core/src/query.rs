//! The structured search intent consumed by the engine.

use crate::text::present;

/// What a searcher is looking for.
///
/// Every field is optional. Empty lists and blank strings carry no
/// information and score with each factor's neutral default. The engine never
/// mutates a query.
///
/// Upstream parsers may emit `null` for list fields; they deserialise as
/// empty lists.
///
/// # Examples
/// ```
/// use encore_core::Query;
///
/// let query = Query::new()
///     .with_instruments(["vocals"])
///     .with_location("brooklyn")
///     .with_influences(["Amy Winehouse"]);
/// assert_eq!(query.instruments, vec!["vocals".to_owned()]);
/// assert!(!query.is_empty());
/// assert!(Query::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// Instruments the searcher wants, free text.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_support::null_as_empty")
    )]
    pub instruments: Vec<String>,
    /// Free-text place description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    /// Free-text schedule description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub availability: Option<String>,
    /// Artists or genres; doubles as the genre signal.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_support::null_as_empty")
    )]
    pub musical_influences: Vec<String>,
    /// Free-text collaboration label such as "band formation".
    #[cfg_attr(feature = "serde", serde(default))]
    pub collaboration_intent: Option<String>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the requested instruments.
    #[must_use]
    pub fn with_instruments<I, S>(mut self, instruments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instruments = instruments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the place description.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the schedule description.
    #[must_use]
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Replace the musical influences.
    #[must_use]
    pub fn with_influences<I, S>(mut self, influences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.musical_influences = influences.into_iter().map(Into::into).collect();
        self
    }

    /// Set the collaboration intent.
    #[must_use]
    pub fn with_collaboration_intent(mut self, intent: impl Into<String>) -> Self {
        self.collaboration_intent = Some(intent.into());
        self
    }

    /// Whether the query carries no usable information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let no_text = |items: &[String]| {
            items
                .iter()
                .all(|item| present(Some(item.as_str())).is_none())
        };
        no_text(&self.instruments)
            && no_text(&self.musical_influences)
            && present(self.location.as_deref()).is_none()
            && present(self.availability.as_deref()).is_none()
            && present(self.collaboration_intent.as_deref()).is_none()
    }
}
