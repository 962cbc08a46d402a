//! Validated location graph: resolution and proximity scoring.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::LocationGraphError;
use crate::resolution::{Confidence, Granularity, Resolution};
use crate::tables::{BoroughRecord, LocationTables, NeighborhoodRecord};

/// Proximity returned when either side has no representative zone.
pub const UNZONED_PROXIMITY: u8 = 20;
const SAME_PLACE: u8 = 100;
const MAX_PROXIMITY: u8 = 100;

/// A neighborhood registered in a [`LocationGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    key: String,
    name: String,
    borough: String,
    zone: String,
    zone_index: usize,
    aliases: Vec<String>,
}

impl Neighborhood {
    /// Stable identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning borough key.
    #[must_use]
    pub fn borough(&self) -> &str {
        &self.borough
    }

    /// Zone the neighborhood belongs to.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Normalised aliases in authored order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub(crate) fn resolution(&self, confidence: Confidence) -> Resolution<'_> {
        Resolution {
            granularity: Granularity::Neighborhood,
            key: &self.key,
            name: &self.name,
            borough: Some(&self.borough),
            zone: Some(&self.zone),
            zone_index: Some(self.zone_index),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Borough {
    key: String,
    name: String,
    first_zone: usize,
    terms: Vec<String>,
}

impl Borough {
    pub(crate) fn key(&self) -> &str {
        &self.key
    }
}

/// Neighborhood database, alias resolver and zone proximity matrix.
///
/// Built once from [`LocationTables`] and immutable afterwards, so one graph
/// can be shared across threads behind an `Arc`.
///
/// Resolution tries four rules in order and the first match wins:
///
/// 1. **Exact**: the normalised text equals a neighborhood alias.
/// 2. **Partial**: the text contains an alias or an alias contains the text.
///    Neighborhoods are tried in registration order, aliases in authored
///    order, so `"brooklyn"` resolves to the first neighborhood with an alias
///    mentioning Brooklyn.
/// 3. **Borough**: the text contains a borough name, boroughs in registration
///    order.
/// 4. **City**: the text contains one of the city terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGraph {
    city_key: String,
    city_name: String,
    city_terms: Vec<String>,
    pub(crate) boroughs: Vec<Borough>,
    pub(crate) zones: Vec<String>,
    matrix: Vec<Vec<u8>>,
    pub(crate) neighborhoods: Vec<Neighborhood>,
    exact: HashMap<String, usize>,
}

impl LocationGraph {
    /// Build the graph for the built-in New York City tables.
    ///
    /// # Errors
    /// Returns [`LocationGraphError`] if the built-in tables fail validation.
    pub fn builtin() -> Result<Self, LocationGraphError> {
        Self::from_tables(LocationTables::builtin())
    }

    /// Validate `tables` and build the graph.
    ///
    /// # Errors
    /// Returns [`LocationGraphError`] when keys repeat, references dangle, an
    /// alias is blank or claimed twice, or the proximity matrix is not total,
    /// bounded by 100, 100 on the diagonal and symmetric.
    pub fn from_tables(tables: LocationTables) -> Result<Self, LocationGraphError> {
        let LocationTables {
            city,
            boroughs: borough_records,
            neighborhoods: neighborhood_records,
            proximity,
        } = tables;

        let city_terms = normalised_terms(&city.terms);
        if city_terms.is_empty() {
            return Err(LocationGraphError::EmptyCityTerms { city: city.key });
        }

        let (boroughs, zones, zone_owners) = register_boroughs(borough_records)?;
        let (neighborhoods, exact) =
            register_neighborhoods(neighborhood_records, &boroughs, &zones, &zone_owners)?;
        let matrix = build_matrix(&zones, &proximity)?;

        let graph = Self {
            city_key: city.key,
            city_name: city.name,
            city_terms,
            boroughs,
            zones,
            matrix,
            neighborhoods,
            exact,
        };
        log::info!(
            "location graph ready: {} neighborhoods, {} zones, {} aliases",
            graph.neighborhoods.len(),
            graph.zones.len(),
            graph.exact.len()
        );
        Ok(graph)
    }

    /// Registered neighborhoods in registration order.
    #[must_use]
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Registered zones in registration order.
    #[must_use]
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Display name of the city.
    #[must_use]
    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// Look up the matrix entry for two zones by name.
    ///
    /// Returns `None` when either zone is not registered.
    #[must_use]
    pub fn zone_proximity(&self, from: &str, to: &str) -> Option<u8> {
        let row = self.zone_index(from)?;
        let column = self.zone_index(to)?;
        self.matrix_entry(row, column)
    }

    /// Resolve free text to a known place.
    ///
    /// Text is trimmed and lowercased first. Blank or unrecognised text
    /// returns `None`.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<Resolution<'_>> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.exact_alias(&needle)
            .or_else(|| self.partial_alias(&needle))
            .or_else(|| self.borough_mention(&needle))
            .or_else(|| self.city_mention(&needle))
    }

    /// Score how close two free-text places are, in `0..=100`.
    ///
    /// Either side failing to resolve scores `0`.
    #[must_use]
    pub fn proximity(&self, a: &str, b: &str) -> u8 {
        match (self.resolve(a), self.resolve(b)) {
            (Some(left), Some(right)) => self.proximity_between(&left, &right),
            _ => 0,
        }
    }

    /// Score two resolutions, in `0..=100`.
    ///
    /// The same place scores 100. Otherwise each side maps to its
    /// representative zone and the matrix decides; a side without a zone
    /// scores [`UNZONED_PROXIMITY`].
    #[must_use]
    pub fn proximity_between(&self, a: &Resolution<'_>, b: &Resolution<'_>) -> u8 {
        if a.is_same_place(b) {
            return SAME_PLACE;
        }
        match (a.zone_index, b.zone_index) {
            (Some(from), Some(to)) => self
                .matrix_entry(from, to)
                .unwrap_or(UNZONED_PROXIMITY),
            _ => UNZONED_PROXIMITY,
        }
    }

    fn exact_alias(&self, needle: &str) -> Option<Resolution<'_>> {
        let index = *self.exact.get(needle)?;
        let neighborhood = self.neighborhoods.get(index)?;
        Some(neighborhood.resolution(Confidence::Exact))
    }

    fn partial_alias(&self, needle: &str) -> Option<Resolution<'_>> {
        self.neighborhoods
            .iter()
            .find(|neighborhood| {
                neighborhood
                    .aliases
                    .iter()
                    .any(|alias| alias.contains(needle) || needle.contains(alias.as_str()))
            })
            .map(|neighborhood| neighborhood.resolution(Confidence::Partial))
    }

    fn borough_mention(&self, needle: &str) -> Option<Resolution<'_>> {
        let borough = self
            .boroughs
            .iter()
            .find(|borough| borough.terms.iter().any(|term| needle.contains(term.as_str())))?;
        Some(Resolution {
            granularity: Granularity::Borough,
            key: &borough.key,
            name: &borough.name,
            borough: Some(&borough.key),
            zone: self.zones.get(borough.first_zone).map(String::as_str),
            zone_index: Some(borough.first_zone),
            confidence: Confidence::Borough,
        })
    }

    fn city_mention(&self, needle: &str) -> Option<Resolution<'_>> {
        self.city_terms
            .iter()
            .any(|term| needle.contains(term.as_str()))
            .then(|| Resolution {
                granularity: Granularity::City,
                key: &self.city_key,
                name: &self.city_name,
                borough: None,
                zone: None,
                zone_index: None,
                confidence: Confidence::City,
            })
    }

    fn zone_index(&self, zone: &str) -> Option<usize> {
        self.zones.iter().position(|candidate| candidate == zone)
    }

    fn matrix_entry(&self, from: usize, to: usize) -> Option<u8> {
        self.matrix.get(from)?.get(to).copied()
    }
}

fn normalised_terms(terms: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty() && seen.insert(term.clone()))
        .collect()
}

type BoroughRegistry = (Vec<Borough>, Vec<String>, Vec<usize>);

/// Register boroughs and their zones; zone owners are borough indices.
fn register_boroughs(records: Vec<BoroughRecord>) -> Result<BoroughRegistry, LocationGraphError> {
    let mut boroughs: Vec<Borough> = Vec::with_capacity(records.len());
    let mut zones: Vec<String> = Vec::new();
    let mut zone_owners = Vec::new();

    for record in records {
        if boroughs.iter().any(|borough| borough.key == record.key) {
            return Err(LocationGraphError::DuplicateBorough {
                borough: record.key,
            });
        }
        if record.zones.is_empty() {
            return Err(LocationGraphError::BoroughWithoutZones {
                borough: record.key,
            });
        }
        let first_zone = zones.len();
        for zone in record.zones {
            if zones.contains(&zone) {
                return Err(LocationGraphError::DuplicateZone { zone });
            }
            zones.push(zone);
            zone_owners.push(boroughs.len());
        }
        let terms = normalised_terms(&[record.name.clone(), record.key.replace('_', " ")]);
        boroughs.push(Borough {
            key: record.key,
            name: record.name,
            first_zone,
            terms,
        });
    }
    Ok((boroughs, zones, zone_owners))
}

fn register_neighborhoods(
    records: Vec<NeighborhoodRecord>,
    boroughs: &[Borough],
    zones: &[String],
    zone_owners: &[usize],
) -> Result<(Vec<Neighborhood>, HashMap<String, usize>), LocationGraphError> {
    let mut neighborhoods: Vec<Neighborhood> = Vec::with_capacity(records.len());
    let mut exact: HashMap<String, usize> = HashMap::new();

    for record in records {
        if neighborhoods.iter().any(|known| known.key == record.key) {
            return Err(LocationGraphError::DuplicateNeighborhood {
                neighborhood: record.key,
            });
        }
        let Some(borough_index) = boroughs.iter().position(|borough| borough.key == record.borough)
        else {
            return Err(LocationGraphError::UnknownBorough {
                neighborhood: record.key,
                borough: record.borough,
            });
        };
        let Some(zone_index) = zones.iter().position(|zone| *zone == record.zone) else {
            return Err(LocationGraphError::UnknownZone {
                neighborhood: record.key,
                zone: record.zone,
            });
        };
        if zone_owners.get(zone_index) != Some(&borough_index) {
            return Err(LocationGraphError::ZoneOutsideBorough {
                neighborhood: record.key,
                zone: record.zone,
                borough: record.borough,
            });
        }

        let index = neighborhoods.len();
        let mut aliases = Vec::with_capacity(record.aliases.len());
        for raw in &record.aliases {
            let alias = raw.trim().to_lowercase();
            if alias.is_empty() {
                return Err(LocationGraphError::BlankAlias {
                    neighborhood: record.key,
                });
            }
            match exact.get(&alias).copied() {
                Some(owner) if owner != index => {
                    let first = neighborhoods
                        .get(owner)
                        .map(|known| known.key.clone())
                        .unwrap_or_default();
                    return Err(LocationGraphError::DuplicateAlias {
                        alias,
                        first,
                        second: record.key,
                    });
                }
                Some(_) => {}
                None => {
                    exact.insert(alias.clone(), index);
                    aliases.push(alias);
                }
            }
        }

        neighborhoods.push(Neighborhood {
            key: record.key,
            name: record.name,
            borough: record.borough,
            zone: record.zone,
            zone_index,
            aliases,
        });
    }
    Ok((neighborhoods, exact))
}

fn build_matrix(
    zones: &[String],
    proximity: &BTreeMap<String, BTreeMap<String, u8>>,
) -> Result<Vec<Vec<u8>>, LocationGraphError> {
    for (row_zone, row) in proximity {
        let unknown = std::iter::once(row_zone)
            .chain(row.keys())
            .find(|zone| !zones.contains(zone));
        if let Some(zone) = unknown {
            return Err(LocationGraphError::UnknownProximityZone { zone: zone.clone() });
        }
    }

    let mut matrix = Vec::with_capacity(zones.len());
    for from in zones {
        let row = proximity
            .get(from)
            .ok_or_else(|| LocationGraphError::MissingProximityRow { zone: from.clone() })?;
        let mut scores = Vec::with_capacity(zones.len());
        for to in zones {
            let score = *row
                .get(to)
                .ok_or_else(|| LocationGraphError::MissingProximityEntry {
                    from: from.clone(),
                    to: to.clone(),
                })?;
            if score > MAX_PROXIMITY {
                return Err(LocationGraphError::ProximityOutOfRange {
                    from: from.clone(),
                    to: to.clone(),
                    score,
                });
            }
            if from == to && score != SAME_PLACE {
                return Err(LocationGraphError::SelfProximity {
                    zone: from.clone(),
                    score,
                });
            }
            scores.push(score);
        }
        matrix.push(scores);
    }

    check_symmetry(zones, &matrix)?;
    Ok(matrix)
}

fn check_symmetry(zones: &[String], matrix: &[Vec<u8>]) -> Result<(), LocationGraphError> {
    for (i, (from, row)) in zones.iter().zip(matrix).enumerate() {
        for (j, (to, forward)) in zones.iter().zip(row).enumerate().skip(i + 1) {
            let backward = matrix.get(j).and_then(|other| other.get(i)).copied();
            if backward != Some(*forward) {
                return Err(LocationGraphError::AsymmetricProximity {
                    from: from.clone(),
                    to: to.clone(),
                    forward: *forward,
                    backward: backward.unwrap_or_default(),
                });
            }
        }
    }
    Ok(())
}
