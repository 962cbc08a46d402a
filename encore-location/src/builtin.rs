//! Built-in New York City tables.

use std::collections::BTreeMap;

use crate::tables::{BoroughRecord, CityRecord, LocationTables, NeighborhoodRecord};

struct NeighborhoodSeed {
    key: &'static str,
    name: &'static str,
    borough: &'static str,
    zone: &'static str,
    aliases: &'static [&'static str],
}

const CITY_KEY: &str = "new_york_city";
const CITY_NAME: &str = "New York City";
const CITY_TERMS: &[&str] = &["new york", "nyc", "ny"];

const BOROUGHS: &[(&str, &str, &[&str])] = &[
    (
        "manhattan",
        "Manhattan",
        &["lower_manhattan", "midtown_manhattan", "upper_manhattan"],
    ),
    (
        "brooklyn",
        "Brooklyn",
        &["north_brooklyn", "central_brooklyn", "south_brooklyn"],
    ),
    (
        "queens",
        "Queens",
        &["west_queens", "central_queens", "east_queens"],
    ),
    (
        "bronx",
        "Bronx",
        &["south_bronx", "central_bronx", "north_bronx"],
    ),
    ("staten_island", "Staten Island", &["staten_island"]),
];

const ZONES: [&str; 13] = [
    "lower_manhattan",
    "midtown_manhattan",
    "upper_manhattan",
    "north_brooklyn",
    "central_brooklyn",
    "south_brooklyn",
    "west_queens",
    "central_queens",
    "east_queens",
    "south_bronx",
    "central_bronx",
    "north_bronx",
    "staten_island",
];

// Rows and columns follow `ZONES`.
#[rustfmt::skip]
const PROXIMITY: [[u8; 13]; 13] = [
    [100,  80,  60,  85,  65,  45,  70,  50,  35,  55,  40,  25,  20], // lower_manhattan
    [ 80, 100,  80,  75,  60,  40,  75,  55,  40,  65,  50,  35,  25], // midtown_manhattan
    [ 60,  80, 100,  55,  45,  30,  60,  45,  30,  75,  65,  50,  20], // upper_manhattan
    [ 85,  75,  55, 100,  80,  60,  70,  50,  35,  45,  35,  25,  25], // north_brooklyn
    [ 65,  60,  45,  80, 100,  75,  55,  45,  35,  35,  30,  20,  30], // central_brooklyn
    [ 45,  40,  30,  60,  75, 100,  40,  35,  30,  25,  20,  15,  35], // south_brooklyn
    [ 70,  75,  60,  70,  55,  40, 100,  80,  65,  50,  40,  30,  20], // west_queens
    [ 50,  55,  45,  50,  45,  35,  80, 100,  80,  40,  35,  25,  15], // central_queens
    [ 35,  40,  30,  35,  35,  30,  65,  80, 100,  30,  25,  20,  10], // east_queens
    [ 55,  65,  75,  45,  35,  25,  50,  40,  30, 100,  80,  65,  15], // south_bronx
    [ 40,  50,  65,  35,  30,  20,  40,  35,  25,  80, 100,  80,  10], // central_bronx
    [ 25,  35,  50,  25,  20,  15,  30,  25,  20,  65,  80, 100,   5], // north_bronx
    [ 20,  25,  20,  25,  30,  35,  20,  15,  10,  15,  10,   5, 100], // staten_island
];

const NEIGHBORHOODS: &[NeighborhoodSeed] = &[
    NeighborhoodSeed {
        key: "lower_east_side",
        name: "Lower East Side",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["les", "lower east side", "loisaida"],
    },
    NeighborhoodSeed {
        key: "east_village",
        name: "East Village",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["east village", "ev", "alphabet city"],
    },
    NeighborhoodSeed {
        key: "west_village",
        name: "West Village",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["west village", "greenwich village", "the village"],
    },
    NeighborhoodSeed {
        key: "soho",
        name: "SoHo",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["soho", "south of houston"],
    },
    NeighborhoodSeed {
        key: "tribeca",
        name: "TriBeCa",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["tribeca", "triangle below canal"],
    },
    NeighborhoodSeed {
        key: "nolita",
        name: "NoLita",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["nolita", "north of little italy"],
    },
    NeighborhoodSeed {
        key: "chinatown",
        name: "Chinatown",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["chinatown"],
    },
    NeighborhoodSeed {
        key: "little_italy",
        name: "Little Italy",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["little italy"],
    },
    NeighborhoodSeed {
        key: "financial_district",
        name: "Financial District",
        borough: "manhattan",
        zone: "lower_manhattan",
        aliases: &["financial district", "fidi", "wall street"],
    },
    NeighborhoodSeed {
        key: "midtown",
        name: "Midtown",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["midtown", "midtown manhattan", "times square area"],
    },
    NeighborhoodSeed {
        key: "times_square",
        name: "Times Square",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["times square", "theater district", "broadway"],
    },
    NeighborhoodSeed {
        key: "hells_kitchen",
        name: "Hell's Kitchen",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["hells kitchen", "hell's kitchen", "clinton"],
    },
    NeighborhoodSeed {
        key: "murray_hill",
        name: "Murray Hill",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["murray hill"],
    },
    NeighborhoodSeed {
        key: "gramercy",
        name: "Gramercy",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["gramercy", "gramercy park"],
    },
    NeighborhoodSeed {
        key: "flatiron",
        name: "Flatiron",
        borough: "manhattan",
        zone: "midtown_manhattan",
        aliases: &["flatiron", "flatiron district"],
    },
    NeighborhoodSeed {
        key: "upper_east_side",
        name: "Upper East Side",
        borough: "manhattan",
        zone: "upper_manhattan",
        aliases: &["upper east side", "ues", "carnegie hill"],
    },
    NeighborhoodSeed {
        key: "upper_west_side",
        name: "Upper West Side",
        borough: "manhattan",
        zone: "upper_manhattan",
        aliases: &["upper west side", "uws", "lincoln square"],
    },
    NeighborhoodSeed {
        key: "harlem",
        name: "Harlem",
        borough: "manhattan",
        zone: "upper_manhattan",
        aliases: &["harlem", "central harlem", "east harlem"],
    },
    NeighborhoodSeed {
        key: "washington_heights",
        name: "Washington Heights",
        borough: "manhattan",
        zone: "upper_manhattan",
        aliases: &["washington heights", "wa heights"],
    },
    NeighborhoodSeed {
        key: "inwood",
        name: "Inwood",
        borough: "manhattan",
        zone: "upper_manhattan",
        aliases: &["inwood"],
    },
    NeighborhoodSeed {
        key: "williamsburg",
        name: "Williamsburg",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["williamsburg", "wburg", "billyburg"],
    },
    NeighborhoodSeed {
        key: "greenpoint",
        name: "Greenpoint",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["greenpoint", "green point"],
    },
    NeighborhoodSeed {
        key: "dumbo",
        name: "DUMBO",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["dumbo", "down under manhattan bridge"],
    },
    NeighborhoodSeed {
        key: "brooklyn_heights",
        name: "Brooklyn Heights",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["brooklyn heights", "bk heights"],
    },
    NeighborhoodSeed {
        key: "park_slope",
        name: "Park Slope",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["park slope"],
    },
    NeighborhoodSeed {
        key: "fort_greene",
        name: "Fort Greene",
        borough: "brooklyn",
        zone: "north_brooklyn",
        aliases: &["fort greene"],
    },
    NeighborhoodSeed {
        key: "prospect_heights",
        name: "Prospect Heights",
        borough: "brooklyn",
        zone: "central_brooklyn",
        aliases: &["prospect heights"],
    },
    NeighborhoodSeed {
        key: "crown_heights",
        name: "Crown Heights",
        borough: "brooklyn",
        zone: "central_brooklyn",
        aliases: &["crown heights"],
    },
    NeighborhoodSeed {
        key: "bed_stuy",
        name: "Bedford-Stuyvesant",
        borough: "brooklyn",
        zone: "central_brooklyn",
        aliases: &["bed stuy", "bedstuy", "bedford stuyvesant", "bedford-stuyvesant"],
    },
    NeighborhoodSeed {
        key: "clinton_hill",
        name: "Clinton Hill",
        borough: "brooklyn",
        zone: "central_brooklyn",
        aliases: &["clinton hill"],
    },
    NeighborhoodSeed {
        key: "carroll_gardens",
        name: "Carroll Gardens",
        borough: "brooklyn",
        zone: "central_brooklyn",
        aliases: &["carroll gardens"],
    },
    NeighborhoodSeed {
        key: "red_hook",
        name: "Red Hook",
        borough: "brooklyn",
        zone: "south_brooklyn",
        aliases: &["red hook"],
    },
    NeighborhoodSeed {
        key: "sunset_park",
        name: "Sunset Park",
        borough: "brooklyn",
        zone: "south_brooklyn",
        aliases: &["sunset park"],
    },
    NeighborhoodSeed {
        key: "bay_ridge",
        name: "Bay Ridge",
        borough: "brooklyn",
        zone: "south_brooklyn",
        aliases: &["bay ridge"],
    },
    NeighborhoodSeed {
        key: "bensonhurst",
        name: "Bensonhurst",
        borough: "brooklyn",
        zone: "south_brooklyn",
        aliases: &["bensonhurst"],
    },
    NeighborhoodSeed {
        key: "coney_island",
        name: "Coney Island",
        borough: "brooklyn",
        zone: "south_brooklyn",
        aliases: &["coney island"],
    },
    NeighborhoodSeed {
        key: "astoria",
        name: "Astoria",
        borough: "queens",
        zone: "west_queens",
        aliases: &["astoria"],
    },
    NeighborhoodSeed {
        key: "long_island_city",
        name: "Long Island City",
        borough: "queens",
        zone: "west_queens",
        aliases: &["long island city", "lic", "hunters point"],
    },
    NeighborhoodSeed {
        key: "sunnyside",
        name: "Sunnyside",
        borough: "queens",
        zone: "west_queens",
        aliases: &["sunnyside"],
    },
    NeighborhoodSeed {
        key: "woodside",
        name: "Woodside",
        borough: "queens",
        zone: "west_queens",
        aliases: &["woodside"],
    },
    NeighborhoodSeed {
        key: "elmhurst",
        name: "Elmhurst",
        borough: "queens",
        zone: "central_queens",
        aliases: &["elmhurst"],
    },
    NeighborhoodSeed {
        key: "jackson_heights",
        name: "Jackson Heights",
        borough: "queens",
        zone: "central_queens",
        aliases: &["jackson heights"],
    },
    NeighborhoodSeed {
        key: "corona",
        name: "Corona",
        borough: "queens",
        zone: "central_queens",
        aliases: &["corona"],
    },
    NeighborhoodSeed {
        key: "flushing",
        name: "Flushing",
        borough: "queens",
        zone: "central_queens",
        aliases: &["flushing"],
    },
    NeighborhoodSeed {
        key: "forest_hills",
        name: "Forest Hills",
        borough: "queens",
        zone: "east_queens",
        aliases: &["forest hills"],
    },
    NeighborhoodSeed {
        key: "kew_gardens",
        name: "Kew Gardens",
        borough: "queens",
        zone: "east_queens",
        aliases: &["kew gardens"],
    },
    NeighborhoodSeed {
        key: "jamaica",
        name: "Jamaica",
        borough: "queens",
        zone: "east_queens",
        aliases: &["jamaica", "jamaica queens"],
    },
    NeighborhoodSeed {
        key: "queens_village",
        name: "Queens Village",
        borough: "queens",
        zone: "east_queens",
        aliases: &["queens village"],
    },
    NeighborhoodSeed {
        key: "mott_haven",
        name: "Mott Haven",
        borough: "bronx",
        zone: "south_bronx",
        aliases: &["mott haven"],
    },
    NeighborhoodSeed {
        key: "melrose",
        name: "Melrose",
        borough: "bronx",
        zone: "south_bronx",
        aliases: &["melrose"],
    },
    NeighborhoodSeed {
        key: "morrisania",
        name: "Morrisania",
        borough: "bronx",
        zone: "south_bronx",
        aliases: &["morrisania"],
    },
    NeighborhoodSeed {
        key: "concourse",
        name: "Concourse",
        borough: "bronx",
        zone: "south_bronx",
        aliases: &["concourse", "grand concourse"],
    },
    NeighborhoodSeed {
        key: "fordham",
        name: "Fordham",
        borough: "bronx",
        zone: "central_bronx",
        aliases: &["fordham"],
    },
    NeighborhoodSeed {
        key: "tremont",
        name: "Tremont",
        borough: "bronx",
        zone: "central_bronx",
        aliases: &["tremont"],
    },
    NeighborhoodSeed {
        key: "belmont",
        name: "Belmont",
        borough: "bronx",
        zone: "central_bronx",
        aliases: &["belmont", "little italy bronx"],
    },
    NeighborhoodSeed {
        key: "morris_heights",
        name: "Morris Heights",
        borough: "bronx",
        zone: "central_bronx",
        aliases: &["morris heights"],
    },
    NeighborhoodSeed {
        key: "riverdale",
        name: "Riverdale",
        borough: "bronx",
        zone: "north_bronx",
        aliases: &["riverdale"],
    },
    NeighborhoodSeed {
        key: "kingsbridge",
        name: "Kingsbridge",
        borough: "bronx",
        zone: "north_bronx",
        aliases: &["kingsbridge"],
    },
    NeighborhoodSeed {
        key: "woodlawn",
        name: "Woodlawn",
        borough: "bronx",
        zone: "north_bronx",
        aliases: &["woodlawn"],
    },
    NeighborhoodSeed {
        key: "wakefield",
        name: "Wakefield",
        borough: "bronx",
        zone: "north_bronx",
        aliases: &["wakefield"],
    },
    NeighborhoodSeed {
        key: "st_george",
        name: "St. George",
        borough: "staten_island",
        zone: "staten_island",
        aliases: &["st george", "st. george", "saint george"],
    },
    NeighborhoodSeed {
        key: "stapleton",
        name: "Stapleton",
        borough: "staten_island",
        zone: "staten_island",
        aliases: &["stapleton"],
    },
    NeighborhoodSeed {
        key: "new_brighton",
        name: "New Brighton",
        borough: "staten_island",
        zone: "staten_island",
        aliases: &["new brighton"],
    },
    NeighborhoodSeed {
        key: "great_kills",
        name: "Great Kills",
        borough: "staten_island",
        zone: "staten_island",
        aliases: &["great kills"],
    },
    NeighborhoodSeed {
        key: "tottenville",
        name: "Tottenville",
        borough: "staten_island",
        zone: "staten_island",
        aliases: &["tottenville"],
    },
];

impl LocationTables {
    /// Return the built-in New York City tables.
    ///
    /// Five boroughs, thirteen zones and sixty-five neighborhoods.
    #[must_use]
    pub fn builtin() -> Self {
        let city = CityRecord {
            key: CITY_KEY.to_owned(),
            name: CITY_NAME.to_owned(),
            terms: owned(CITY_TERMS),
        };
        let boroughs = BOROUGHS
            .iter()
            .map(|(key, name, zones)| BoroughRecord {
                key: (*key).to_owned(),
                name: (*name).to_owned(),
                zones: owned(zones),
            })
            .collect();
        let neighborhoods = NEIGHBORHOODS
            .iter()
            .map(|seed| NeighborhoodRecord {
                key: seed.key.to_owned(),
                name: seed.name.to_owned(),
                borough: seed.borough.to_owned(),
                zone: seed.zone.to_owned(),
                aliases: owned(seed.aliases),
            })
            .collect();
        Self {
            city,
            boroughs,
            neighborhoods,
            proximity: proximity_rows(),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn proximity_rows() -> BTreeMap<String, BTreeMap<String, u8>> {
    ZONES
        .iter()
        .zip(PROXIMITY.iter())
        .map(|(zone, row)| {
            let entries = ZONES
                .iter()
                .zip(row.iter())
                .map(|(other, score)| ((*other).to_owned(), *score))
                .collect();
            ((*zone).to_owned(), entries)
        })
        .collect()
}
