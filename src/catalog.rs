// 🩺 Catalog - Immutable doctor directory
//
// Problem solved:
// - One flat record per doctor carrying every field the filters read
// - Stable integer id so the booking flow can reference a result row
// - Source order is preserved end to end; the engine filters, never sorts

use serde::{Deserialize, Serialize};

// ============================================================================
// ENTRY
// ============================================================================

/// One doctor listing.
///
/// `id` is the stable identity; every other field is a display value.
/// Fields other than `id` default to empty when the source omits them,
/// so one incomplete record degrades that record instead of the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity, unique within one catalog
    pub id: u64,

    /// Doctor name, e.g. "Anna Virtanen"
    #[serde(default)]
    pub name: String,

    /// Specialty label, e.g. "Yleislääkäri"
    #[serde(default)]
    pub specialty: String,

    /// Provider chain label, e.g. "Mehiläinen"
    #[serde(default)]
    pub chain: String,

    /// Free-form location text, e.g. "Kallio, Helsinki"
    #[serde(default)]
    pub location: String,

    /// Availability label, e.g. "Tänään vapaana"
    #[serde(default)]
    pub availability: String,

    /// Spoken language codes in display order, e.g. ["fi", "en"]
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Entry {
    /// Create an entry with all fields set
    pub fn new(
        id: u64,
        name: &str,
        specialty: &str,
        chain: &str,
        location: &str,
        availability: &str,
        languages: &[&str],
    ) -> Self {
        Entry {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            chain: chain.to_string(),
            location: location.to_string(),
            availability: availability.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Language codes joined for display, e.g. "fi, en"
    pub fn languages_joined(&self) -> String {
        self.languages.join(", ")
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// In-memory snapshot of all loaded entries.
///
/// Loaded whole at startup and never mutated afterwards; replacing the
/// catalog means loading a new one. Filtering reads it, nothing writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            entries: Vec::new(),
        }
    }

    /// Create a catalog from already-loaded entries, keeping their order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Catalog { entries }
    }

    /// All entries in source order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up one entry by its stable id (booking flow entry point)
    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new(
            7,
            "Anna Virtanen",
            "Yleislääkäri",
            "Mehiläinen",
            "Kallio, Helsinki",
            "Tänään vapaana",
            &["fi", "en"],
        );

        assert_eq!(entry.id, 7);
        assert_eq!(entry.name, "Anna Virtanen");
        assert_eq!(entry.specialty, "Yleislääkäri");
        assert_eq!(entry.chain, "Mehiläinen");
        assert_eq!(entry.location, "Kallio, Helsinki");
        assert_eq!(entry.availability, "Tänään vapaana");
        assert_eq!(entry.languages, vec!["fi", "en"]);
    }

    #[test]
    fn test_languages_joined() {
        let entry = Entry::new(1, "A", "B", "C", "D", "E", &["fi", "sv", "en"]);
        assert_eq!(entry.languages_joined(), "fi, sv, en");

        let silent = Entry::new(2, "A", "B", "C", "D", "E", &[]);
        assert_eq!(silent.languages_joined(), "");
    }

    #[test]
    fn test_catalog_preserves_source_order() {
        let catalog = Catalog::from_entries(vec![
            Entry::new(3, "Kolmas", "", "", "", "", &[]),
            Entry::new(1, "Ensimmäinen", "", "", "", "", &[]),
            Entry::new(2, "Toinen", "", "", "", "", &[]),
        ]);

        let ids: Vec<u64> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = Catalog::from_entries(vec![
            Entry::new(1, "Anna", "", "", "", "", &[]),
            Entry::new(2, "Pekka", "", "", "", "", &[]),
        ]);

        assert_eq!(catalog.get(2).map(|e| e.name.as_str()), Some("Pekka"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.entries().is_empty());
        assert!(catalog.get(1).is_none());
    }
}
