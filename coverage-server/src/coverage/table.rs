//! Static coverage table: which postcode sectors the school serves.

use std::collections::{HashMap, HashSet};

use crate::domain::{AreaPrefix, Sector};

/// The set of covered postcode sectors, grouped by area prefix.
///
/// Built once at startup and never mutated afterwards; every coverage check
/// reads the same table. Sectors are scoped under their prefix, so `E14 5`
/// under `E` is distinct from any sector stored under `IG` or `RM`.
#[derive(Debug, Clone, Default)]
pub struct CoverageTable {
    sectors: HashMap<AreaPrefix, HashSet<Sector>>,
}

impl CoverageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a covered sector under an area prefix.
    pub fn add(&mut self, prefix: AreaPrefix, sector: Sector) {
        self.sectors.entry(prefix).or_default().insert(sector);
    }

    /// Whether the given prefix has any entry in the table.
    pub fn knows_prefix(&self, prefix: &AreaPrefix) -> bool {
        self.sectors.contains_key(prefix)
    }

    /// Whether the given sector is covered under the given prefix.
    pub fn covers(&self, prefix: &AreaPrefix, sector: &Sector) -> bool {
        self.sectors
            .get(prefix)
            .is_some_and(|set| set.contains(sector))
    }

    /// Iterate over all (prefix, sector) pairs in the table.
    pub fn iter(&self) -> impl Iterator<Item = (&AreaPrefix, &Sector)> {
        self.sectors
            .iter()
            .flat_map(|(prefix, set)| set.iter().map(move |s| (prefix, s)))
    }

    /// Returns the number of covered sectors across all prefixes.
    pub fn len(&self) -> usize {
        self.sectors.values().map(HashSet::len).sum()
    }

    /// Returns true if no sectors are covered.
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

/// Builder for creating a coverage table from sector strings.
///
/// Entries that fail to parse are skipped rather than aborting the build.
#[derive(Debug, Default)]
pub struct CoverageTableBuilder {
    inner: CoverageTable,
}

impl CoverageTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the given sectors under an area prefix.
    pub fn area(mut self, prefix: &str, sectors: &[&str]) -> Self {
        let Ok(prefix) = AreaPrefix::parse(prefix) else {
            return self;
        };
        for sector in sectors {
            if let Ok(sector) = Sector::parse(sector) {
                self.inner.add(prefix.clone(), sector);
            }
        }
        self
    }

    /// Build the coverage table.
    pub fn build(self) -> CoverageTable {
        self.inner
    }
}

/// The school's hand-curated coverage area: East London, Ilford & Redbridge,
/// and Romford & Havering sectors.
pub fn east_london_coverage() -> CoverageTable {
    CoverageTableBuilder::new()
        .area(
            "E",
            &[
                "E10 5", "E10 6", "E10 7", // Leyton
                "E11 1", "E11 2", "E11 3", "E11 4", // Wanstead / Leytonstone
                "E12 5", "E12 6", // Manor Park
                "E14 0", "E14 3", "E14 5", "E14 6", "E14 7", "E14 9", // Poplar / Docklands
                "E15 1", "E15 2", "E15 3", "E15 4", // Stratford
                "E17 3", "E17 4", "E17 5", "E17 6", // Walthamstow
                "E18 1", "E18 2", // South Woodford
            ],
        )
        .area(
            "IG",
            &[
                "IG1 1", "IG1 2", "IG1 3", "IG1 4", // Ilford
                "IG2 6", "IG2 7", // Gants Hill / Newbury Park
                "IG3 8", "IG3 9", // Seven Kings
                "IG4 5", // Redbridge
                "IG5 0", // Clayhall
                "IG6 1", "IG6 2", "IG6 3", // Barkingside / Hainault
                "IG8 0", "IG8 7", "IG8 8", "IG8 9", // Woodford Green
                "IG11 0", "IG11 7", "IG11 8", "IG11 9", // Barking
            ],
        )
        .area(
            "RM",
            &[
                "RM1 1", "RM1 2", "RM1 3", "RM1 4", // Romford
                "RM2 5", "RM2 6", // Gidea Park
                "RM3 0", "RM3 7", "RM3 8", "RM3 9", // Harold Wood
                "RM5 2", "RM5 3", // Collier Row
                "RM6 4", "RM6 5", "RM6 6", // Chadwell Heath
                "RM7 0", "RM7 7", "RM7 8", "RM7 9", // Rush Green
                "RM11 1", "RM11 2", "RM11 3", // Hornchurch
                "RM12 4", "RM12 5", "RM12 6", // Elm Park
                "RM14 1", "RM14 2", "RM14 3", // Upminster
            ],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> AreaPrefix {
        AreaPrefix::parse(s).unwrap()
    }

    fn sector(s: &str) -> Sector {
        Sector::parse(s).unwrap()
    }

    #[test]
    fn empty_table() {
        let table = CoverageTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!table.knows_prefix(&prefix("E")));
        assert!(!table.covers(&prefix("E"), &sector("E14 5")));
    }

    #[test]
    fn add_and_lookup() {
        let mut table = CoverageTable::new();
        table.add(prefix("E"), sector("E14 5"));

        assert!(!table.is_empty());
        assert_eq!(table.len(), 1);
        assert!(table.knows_prefix(&prefix("E")));
        assert!(table.covers(&prefix("E"), &sector("E14 5")));
        assert!(!table.covers(&prefix("E"), &sector("E14 6")));
    }

    #[test]
    fn sectors_are_scoped_by_prefix() {
        let mut table = CoverageTable::new();
        table.add(prefix("E"), sector("E14 5"));

        // The same sector string under a different prefix is not covered
        assert!(!table.covers(&prefix("IG"), &sector("E14 5")));
        assert!(!table.covers(&prefix("RM"), &sector("E14 5")));
    }

    #[test]
    fn builder() {
        let table = CoverageTableBuilder::new()
            .area("E", &["E10 5", "E14 5"])
            .area("IG", &["IG1 1"])
            .build();

        assert_eq!(table.len(), 3);
        assert!(table.covers(&prefix("E"), &sector("E10 5")));
        assert!(table.covers(&prefix("IG"), &sector("IG1 1")));
    }

    #[test]
    fn builder_ignores_invalid_entries() {
        let table = CoverageTableBuilder::new()
            .area("123", &["E10 5"]) // Invalid prefix
            .area("E", &["not a sector", "E14 5"]) // One invalid sector
            .build();

        assert_eq!(table.len(), 1);
        assert!(table.covers(&prefix("E"), &sector("E14 5")));
    }

    #[test]
    fn east_london_coverage_exists() {
        let table = east_london_coverage();

        assert!(!table.is_empty());
        assert!(table.covers(&prefix("E"), &sector("E10 5")));
        assert!(table.covers(&prefix("E"), &sector("E14 5")));
        assert!(table.covers(&prefix("IG"), &sector("IG1 1")));
        assert!(table.covers(&prefix("IG"), &sector("IG11 0")));
        assert!(table.covers(&prefix("RM"), &sector("RM7 0")));

        // Structurally valid London sectors outside the patch
        assert!(!table.knows_prefix(&prefix("SW")));
        assert!(!table.covers(&prefix("E"), &sector("E2 7")));
    }

    #[test]
    fn every_entry_sits_under_its_own_prefix() {
        for (prefix, sector) in east_london_coverage().iter() {
            let area = sector.area_code().expect("table sector has an area code");
            assert_eq!(&area.prefix(), prefix, "misfiled sector {}", sector);
        }
    }
}
