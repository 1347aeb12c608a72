// 🔎 Filter Engine - One pass, every dimension must agree
//
// Matching semantics:
// - Text query: case-insensitive substring over name, specialty and
//   location text. Chain, availability and languages are NOT searched.
// - Facets: AND across dimensions, OR within a dimension. An empty
//   selection set leaves its dimension unrestricted.
// - The location facet resolves through the region table, languages
//   match on any overlap, the closed facets compare whole values.
//
// This is a filter, not a ranker: catalog order survives untouched and
// no entry is invented or duplicated.

use crate::catalog::{Catalog, Entry};
use crate::regions::RegionTable;
use crate::selection::{FacetCategory, FacetKind, FacetSelection, FilterState};
use std::collections::BTreeSet;

// ============================================================================
// FILTER ENGINE
// ============================================================================

/// Stateless filter over a catalog snapshot.
///
/// Holds only the declared region table. Query and selections are passed
/// into every call, so one engine can serve any number of snapshots.
/// Nothing here can fail: the worst outcome of any call is an empty
/// result list, which the UI shows as a normal "no results" state.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    regions: RegionTable,
}

impl FilterEngine {
    /// Engine with an explicit region table
    pub fn new(regions: RegionTable) -> Self {
        FilterEngine { regions }
    }

    /// Engine with the default metro-area region table
    pub fn with_defaults() -> Self {
        FilterEngine::new(RegionTable::with_defaults())
    }

    /// The region table behind the location facet
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// All entries that survive the query and every facet dimension.
    ///
    /// Matching entries are cloned out in catalog order. An empty query
    /// with empty selections returns the whole catalog unchanged.
    pub fn filter(&self, entries: &[Entry], query: &str, selection: &FacetSelection) -> Vec<Entry> {
        let needle = query.trim().to_lowercase();

        entries
            .iter()
            .filter(|entry| self.entry_matches(entry, &needle, selection))
            .cloned()
            .collect()
    }

    /// Convenience over [`FilterEngine::filter`] for a full state snapshot
    pub fn run(&self, catalog: &Catalog, state: &FilterState) -> Vec<Entry> {
        self.filter(catalog.entries(), &state.query, &state.selected)
    }

    fn entry_matches(&self, entry: &Entry, needle: &str, selection: &FacetSelection) -> bool {
        if !text_matches(entry, needle) {
            return false;
        }

        FacetCategory::ALL
            .iter()
            .all(|facet| self.facet_matches(entry, *facet, selection.values(*facet)))
    }

    fn facet_matches(
        &self,
        entry: &Entry,
        facet: FacetCategory,
        selected: &BTreeSet<String>,
    ) -> bool {
        // Empty set = no restriction on this dimension
        if selected.is_empty() {
            return true;
        }

        match facet.kind() {
            FacetKind::Single => match single_value(entry, facet) {
                Some(value) => selected.iter().any(|s| norm_eq(s, value)),
                // Entry is missing this field, so this dimension can
                // never match; the other dimensions are unaffected
                None => false,
            },
            FacetKind::Multi => multi_values(entry, facet)
                .iter()
                .any(|value| selected.iter().any(|s| norm_eq(s, value))),
            FacetKind::Hierarchical => selected
                .iter()
                .any(|region| self.regions.matches(region, &entry.location)),
        }
    }
}

// ============================================================================
// MATCH PREDICATES
// ============================================================================

/// Case-insensitive substring match over the three searchable fields.
/// `needle` must already be trimmed and lowercased; empty matches all.
fn text_matches(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    entry.name.to_lowercase().contains(needle)
        || entry.specialty.to_lowercase().contains(needle)
        || entry.location.to_lowercase().contains(needle)
}

/// The one display value an entry carries for a closed facet.
/// Blank counts as missing.
fn single_value(entry: &Entry, facet: FacetCategory) -> Option<&str> {
    let value = match facet {
        FacetCategory::Chain => entry.chain.as_str(),
        FacetCategory::Availability => entry.availability.as_str(),
        FacetCategory::Specialty => entry.specialty.as_str(),
        FacetCategory::Language | FacetCategory::Location => return None,
    };

    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The value list an entry carries for a multi-valued facet
fn multi_values(entry: &Entry, facet: FacetCategory) -> &[String] {
    match facet {
        FacetCategory::Language => &entry.languages,
        _ => &[],
    }
}

/// Whole-value equality after trim + lowercase, the same normalization
/// the text query uses
fn norm_eq(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

// ============================================================================
// TESTS
// ============================================================================
