// 📋 Facet Vocabulary - Sidebar options derived from the catalog
//
// Each closed facet offers exactly the distinct values the loaded entries
// carry, in first-seen order. No hardcoded option lists to drift out of
// sync with the data. Location is the exception: its options come from
// the declared region table, not from here.

use crate::catalog::Entry;
use crate::selection::FacetCategory;
use serde::{Deserialize, Serialize};

/// Distinct values per vocabulary-backed facet, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetVocabulary {
    pub chains: Vec<String>,
    pub availability: Vec<String>,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
}

impl FacetVocabulary {
    /// Option list for one facet.
    ///
    /// Location is not vocabulary-backed, so it yields an empty list here.
    pub fn values(&self, facet: FacetCategory) -> &[String] {
        match facet {
            FacetCategory::Chain => &self.chains,
            FacetCategory::Availability => &self.availability,
            FacetCategory::Specialty => &self.specialties,
            FacetCategory::Language => &self.languages,
            FacetCategory::Location => &[],
        }
    }

    /// True if the facet offers this exact value
    pub fn contains(&self, facet: FacetCategory, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }

    /// Total number of distinct values across all facets
    pub fn len(&self) -> usize {
        self.chains.len() + self.availability.len() + self.specialties.len() + self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collect the distinct facet values the entries actually carry.
///
/// First occurrence wins the position, duplicates are dropped. Blank
/// values never become options; the quality checks flag them instead.
/// An empty slice yields empty vocabularies, which is a normal state.
pub fn build_vocabulary(entries: &[Entry]) -> FacetVocabulary {
    let mut vocab = FacetVocabulary::default();

    for entry in entries {
        push_unique(&mut vocab.chains, &entry.chain);
        push_unique(&mut vocab.availability, &entry.availability);
        push_unique(&mut vocab.specialties, &entry.specialty);
        for language in &entry.languages {
            push_unique(&mut vocab.languages, language);
        }
    }

    vocab
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(
                1,
                "Anna Virtanen",
                "Yleislääkäri",
                "Mehiläinen",
                "Kallio, Helsinki",
                "Tänään vapaana",
                &["fi", "en"],
            ),
            Entry::new(
                2,
                "Pekka Salonen",
                "Ortopedi",
                "Terveystalo",
                "Tapiola, Espoo",
                "Huomenna",
                &["fi"],
            ),
            Entry::new(
                3,
                "Liisa Kivelä",
                "Yleislääkäri",
                "Aava",
                "Tikkurila, Vantaa",
                "Tällä viikolla",
                &["fi", "sv"],
            ),
        ]
    }

    #[test]
    fn test_first_seen_order_with_duplicates_dropped() {
        let vocab = build_vocabulary(&entries());

        assert_eq!(vocab.chains, vec!["Mehiläinen", "Terveystalo", "Aava"]);
        assert_eq!(
            vocab.availability,
            vec!["Tänään vapaana", "Huomenna", "Tällä viikolla"]
        );
        // "Yleislääkäri" appears twice in the catalog, once in the vocabulary
        assert_eq!(vocab.specialties, vec!["Yleislääkäri", "Ortopedi"]);
    }

    #[test]
    fn test_languages_are_the_union_in_first_seen_order() {
        let vocab = build_vocabulary(&entries());
        assert_eq!(vocab.languages, vec!["fi", "en", "sv"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_vocabulary() {
        let vocab = build_vocabulary(&[]);

        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        for facet in FacetCategory::ALL {
            assert!(vocab.values(facet).is_empty());
        }
    }

    #[test]
    fn test_blank_values_never_become_options() {
        let incomplete = vec![
            Entry::new(1, "Nimetön", "", "  ", "Kallio", "", &["fi", " "]),
            Entry::new(2, "Toinen", "Ortopedi", "Aava", "Espoo", "Huomenna", &[]),
        ];

        let vocab = build_vocabulary(&incomplete);

        assert_eq!(vocab.specialties, vec!["Ortopedi"]);
        assert_eq!(vocab.chains, vec!["Aava"]);
        assert_eq!(vocab.availability, vec!["Huomenna"]);
        assert_eq!(vocab.languages, vec!["fi"]);
    }

    #[test]
    fn test_location_has_no_vocabulary() {
        let vocab = build_vocabulary(&entries());
        assert!(vocab.values(FacetCategory::Location).is_empty());
        assert!(!vocab.contains(FacetCategory::Location, "Helsinki"));
    }

    #[test]
    fn test_contains_is_exact() {
        let vocab = build_vocabulary(&entries());

        assert!(vocab.contains(FacetCategory::Chain, "Aava"));
        assert!(!vocab.contains(FacetCategory::Chain, "aava"));
        assert!(!vocab.contains(FacetCategory::Chain, "Pihlajalinna"));
    }
}
