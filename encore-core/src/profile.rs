//! Catalog profiles the engine ranks against a query.

/// Opaque identifier assigned by the external catalog.
///
/// # Examples
/// ```
/// use encore_core::ProfileId;
///
/// let id = ProfileId::from("test_001");
/// assert_eq!(id.as_str(), "test_001");
/// assert_eq!(id.to_string(), "test_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProfileId(String);

impl ProfileId {
    /// Wrap a catalog identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A musician in the catalog.
///
/// Profiles are authoritative source data owned by the catalog. The engine
/// shares them read-only and treats absent fields as "no information".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Catalog identifier.
    pub id: ProfileId,
    /// Display name, when the catalog supplies one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Instruments played.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_support::null_as_empty")
    )]
    pub instruments: Vec<String>,
    /// Free-text home location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    /// Free-text schedule description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub availability: Option<String>,
    /// Genres the musician plays.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_support::null_as_empty")
    )]
    pub genres: Vec<String>,
    /// Artists the musician cites.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::serde_support::null_as_empty")
    )]
    pub musical_influences: Vec<String>,
    /// Free-text collaboration label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collaboration_intent: Option<String>,
}

impl Profile {
    /// Create a profile carrying only its identifier.
    ///
    /// # Examples
    /// ```
    /// use encore_core::Profile;
    ///
    /// let profile = Profile::new("test_001")
    ///     .with_instruments(["Vocals"])
    ///     .with_location("Williamsburg, Brooklyn");
    /// assert_eq!(profile.id.as_str(), "test_001");
    /// assert!(profile.genres.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            instruments: Vec::new(),
            location: None,
            availability: None,
            genres: Vec::new(),
            musical_influences: Vec::new(),
            collaboration_intent: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the instruments.
    #[must_use]
    pub fn with_instruments<I, S>(mut self, instruments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instruments = instruments.into_iter().map(Into::into).collect();
        self
    }

    /// Set the home location.
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

    /// Replace the genres.
    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
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
}
