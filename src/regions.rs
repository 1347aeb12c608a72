// 🗺️ Regions - Coarse location facet over free-form address text
//
// Problem solved:
// - Entries carry text like "Kallio, Helsinki" while the sidebar offers
//   coarse regions like "Helsinki"
// - A declared table maps each region to the district names it covers,
//   because the raw location text cannot be enumerated into a clean
//   vocabulary the way the closed facets can
// - One sentinel row matches every entry unconditionally

use serde::{Deserialize, Serialize};

/// One coarse region and the district names that resolve to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Label offered in the sidebar, e.g. "Helsinki"
    pub label: String,

    /// District substrings whose presence in the location text counts
    /// as a hit for this region, e.g. ["Kallio", "Töölö"]
    pub areas: Vec<String>,
}

impl Region {
    pub fn new(label: &str, areas: &[&str]) -> Self {
        Region {
            label: label.to_string(),
            areas: areas.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Declared region table behind the location facet.
///
/// Fixed data, not derived from the catalog. Consulted only by the
/// location match predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTable {
    /// Label that matches every entry regardless of its location text
    sentinel: String,
    regions: Vec<Region>,
}

impl RegionTable {
    /// Empty table with only the sentinel row
    pub fn new(sentinel: &str) -> Self {
        RegionTable {
            sentinel: sentinel.to_string(),
            regions: Vec::new(),
        }
    }

    /// Table covering the Helsinki metropolitan area
    pub fn with_defaults() -> Self {
        let mut table = RegionTable::new("Koko pääkaupunkiseutu");

        table.register(Region::new(
            "Helsinki",
            &["Kallio", "Töölö", "Kamppi", "Punavuori", "Pasila"],
        ));
        table.register(Region::new(
            "Espoo",
            &["Tapiola", "Leppävaara", "Otaniemi"],
        ));
        table.register(Region::new(
            "Vantaa",
            &["Tikkurila", "Myyrmäki", "Aviapolis"],
        ));

        table
    }

    /// Add a region row
    pub fn register(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Sidebar labels: sentinel first, then regions in declared order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = vec![self.sentinel.as_str()];
        labels.extend(self.regions.iter().map(|r| r.label.as_str()));
        labels
    }

    /// The match-everything label
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// True if the label is the match-everything sentinel
    pub fn is_sentinel(&self, label: &str) -> bool {
        self.sentinel.to_lowercase() == label.trim().to_lowercase()
    }

    /// Resolve a selected region label against an entry's location text.
    ///
    /// A region hits when it is the sentinel, when the location text
    /// contains the region's own name, or when it contains any district
    /// the table lists for that region. Case-insensitive throughout.
    /// Labels the table never declared still get the name-substring
    /// check, so a stale selection degrades instead of erroring.
    pub fn matches(&self, region_label: &str, location: &str) -> bool {
        if self.is_sentinel(region_label) {
            return true;
        }

        let location = location.to_lowercase();

        let name = region_label.trim().to_lowercase();
        if !name.is_empty() && location.contains(&name) {
            return true;
        }

        if let Some(region) = self.find(region_label) {
            for area in &region.areas {
                let area = area.trim().to_lowercase();
                if !area.is_empty() && location.contains(&area) {
                    return true;
                }
            }
        }

        false
    }

    fn find(&self, label: &str) -> Option<&Region> {
        let needle = label.trim().to_lowercase();
        self.regions
            .iter()
            .find(|r| r.label.to_lowercase() == needle)
    }

    /// Number of declared regions, sentinel excluded
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn metro_table() -> RegionTable {
        let mut table = RegionTable::new("Koko pääkaupunkiseutu");
        table.register(Region::new("Helsinki", &["kallio", "töölö"]));
        table.register(Region::new("Espoo", &["Tapiola"]));
        table
    }

    #[test]
    fn test_sentinel_matches_everything() {
        let table = metro_table();

        assert!(table.matches("Koko pääkaupunkiseutu", "Kallio, Helsinki"));
        assert!(table.matches("Koko pääkaupunkiseutu", "Rovaniemi"));
        assert!(table.matches("koko pääkaupunkiseutu", ""));
    }

    #[test]
    fn test_region_name_substring_match() {
        let table = metro_table();

        assert!(table.matches("Helsinki", "Kallio, Helsinki"));
        assert!(table.matches("Espoo", "Espoo"));
        assert!(!table.matches("Espoo", "Kallio, Helsinki"));
    }

    #[test]
    fn test_district_alias_match() {
        let table = metro_table();

        // Location never names the city, only the district
        assert!(table.matches("Helsinki", "Kallio"));
        assert!(table.matches("Helsinki", "Töölön tori"));
        assert!(table.matches("Espoo", "Tapiola"));
        assert!(!table.matches("Helsinki", "Tikkurila"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let table = metro_table();

        assert!(table.matches("HELSINKI", "kallio, helsinki"));
        assert!(table.matches("helsinki", "KALLIO"));
    }

    #[test]
    fn test_undeclared_region_falls_back_to_name_match() {
        let table = metro_table();

        // "Turku" has no row, so only the literal name can hit
        assert!(table.matches("Turku", "Keskusta, Turku"));
        assert!(!table.matches("Turku", "Kallio, Helsinki"));
    }

    #[test]
    fn test_labels_sentinel_first() {
        let table = metro_table();

        assert_eq!(
            table.labels(),
            vec!["Koko pääkaupunkiseutu", "Helsinki", "Espoo"]
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_default_table_covers_metro_area() {
        let table = RegionTable::with_defaults();

        assert!(table.is_sentinel("Koko pääkaupunkiseutu"));
        assert!(table.matches("Helsinki", "Punavuori"));
        assert!(table.matches("Espoo", "Leppävaara, Espoo"));
        assert!(table.matches("Vantaa", "Aviapolis"));
    }
}
