//! Static geography lookups used for region/continent attribution.
//!
//! # Responsibility
//! - Map a country name to its continent and region.
//! - Provide reverse lookups for leg/sub-leg generation.
//!
//! # Invariants
//! - Matching is case-insensitive and exact. Country names must be
//!   normalized upstream; nothing here guesses.
//! - The static mapping is authoritative over stored region strings.

mod table;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use table::{ALIASES, COUNTRIES};

static COUNTRY_INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(COUNTRIES.len() + ALIASES.len());
    for (position, (name, _, _)) in COUNTRIES.iter().enumerate() {
        index.insert(fold(name), position);
    }
    for (alias, canonical) in ALIASES {
        if let Some(position) = COUNTRIES.iter().position(|(name, _, _)| name == canonical) {
            index.entry(fold(alias)).or_insert(position);
        }
    }
    index
});

/// Resolved geography for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeoRegion {
    /// Canonical country name from the static table.
    pub country: &'static str,
    pub continent: &'static str,
    pub region: &'static str,
}

/// Looks up continent and region for one country name.
pub fn lookup(country: &str) -> Option<GeoRegion> {
    let position = COUNTRY_INDEX.get(&fold(country))?;
    let (name, continent, region) = COUNTRIES[*position];
    Some(GeoRegion {
        country: name,
        continent,
        region,
    })
}

/// Returns the table spelling of a country, if known.
pub fn canonical_name(country: &str) -> Option<&'static str> {
    lookup(country).map(|geo| geo.country)
}

/// Lists canonical countries of one region in table order.
pub fn countries_in_region(region: &str) -> Vec<&'static str> {
    let wanted = fold(region);
    COUNTRIES
        .iter()
        .filter(|(_, _, row_region)| fold(row_region) == wanted)
        .map(|(name, _, _)| *name)
        .collect()
}

/// Lists regions of one continent in table order.
pub fn regions_in_continent(continent: &str) -> Vec<&'static str> {
    let wanted = fold(continent);
    let mut regions = Vec::new();
    for (_, row_continent, region) in COUNTRIES {
        if fold(row_continent) == wanted && !regions.contains(region) {
            regions.push(*region);
        }
    }
    regions
}

/// Lists every region in table order, without duplicates.
pub fn all_regions() -> Vec<&'static str> {
    let mut regions = Vec::new();
    for (_, _, region) in COUNTRIES {
        if !regions.contains(region) {
            regions.push(*region);
        }
    }
    regions
}

/// Lists every continent in table order, without duplicates.
pub fn all_continents() -> Vec<&'static str> {
    let mut continents = Vec::new();
    for (_, continent, _) in COUNTRIES {
        if !continents.contains(continent) {
            continents.push(*continent);
        }
    }
    continents
}

/// Number of canonical countries in the table.
pub fn country_count() -> usize {
    COUNTRIES.len()
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{
        all_continents, all_regions, canonical_name, countries_in_region, country_count, lookup,
        regions_in_continent,
    };

    #[test]
    fn lookup_is_case_insensitive_and_exact() {
        let japan = lookup("  jApAn ").expect("japan should resolve");
        assert_eq!(japan.country, "Japan");
        assert_eq!(japan.continent, "Asia");
        assert_eq!(japan.region, "East Asia");

        assert!(lookup("Japa").is_none());
        assert!(lookup("Japan, Tokyo").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn aliases_resolve_to_canonical_rows() {
        assert_eq!(canonical_name("usa"), Some("United States"));
        assert_eq!(canonical_name("Czechia"), Some("Czech Republic"));
        assert_eq!(lookup("Türkiye").map(|geo| geo.region), Some("Middle East"));
    }

    #[test]
    fn table_covers_roughly_every_country() {
        assert!(country_count() >= 230, "table too small: {}", country_count());
    }

    #[test]
    fn reverse_lookups_are_consistent() {
        let southeast = countries_in_region("southeast asia");
        assert!(southeast.contains(&"Thailand"));
        assert!(southeast.contains(&"Vietnam"));
        assert!(!southeast.contains(&"Japan"));

        let continents = all_continents();
        assert_eq!(continents.len(), 7);
        assert!(continents.contains(&"Oceania"));

        for region in all_regions() {
            assert!(
                !countries_in_region(region).is_empty(),
                "region {region} has no countries"
            );
        }

        let europe = regions_in_continent("Europe");
        assert_eq!(
            europe,
            vec![
                "Northern Europe",
                "Western Europe",
                "Southern Europe",
                "Eastern Europe"
            ]
        );
    }
}
