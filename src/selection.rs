// 🎚️ Facet Selection - Checkbox state as immutable snapshots
//
// Problem solved:
// - Five fixed facet dimensions, each with its own matching shape
// - Toggling a value returns a NEW selection; the old snapshot stays valid,
//   so results computed from it remain consistent with it
// - Alias labels ("Ensi viikolla") collapse onto their canonical value
//   before they ever reach a selection set

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ============================================================================
// FACET CATEGORY
// ============================================================================

/// The facet dimensions the engine knows about.
///
/// Fixed at compile time. Externally-supplied category names (saved UI
/// state, query strings) go through [`FacetCategory::parse_key`], which
/// returns `None` for anything unknown so callers can drop it quietly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetCategory {
    /// Provider chain, e.g. "Mehiläinen"
    Chain,

    /// Availability label, e.g. "Tänään vapaana"
    Availability,

    /// Medical specialty, e.g. "Yleislääkäri"
    Specialty,

    /// Spoken language code, e.g. "sv"
    Language,

    /// Coarse region resolved against the free-form location text
    Location,
}

/// How values of a facet are matched against an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// Entry carries exactly one value (chain, availability, specialty)
    Single,

    /// Entry carries a value list; any overlap matches (languages)
    Multi,

    /// Selected value is a region resolved through the region table (location)
    Hierarchical,
}

impl FacetCategory {
    /// Every facet, in sidebar display order
    pub const ALL: [FacetCategory; 5] = [
        FacetCategory::Chain,
        FacetCategory::Availability,
        FacetCategory::Specialty,
        FacetCategory::Language,
        FacetCategory::Location,
    ];

    /// Matching shape of this facet
    pub fn kind(&self) -> FacetKind {
        match self {
            FacetCategory::Chain | FacetCategory::Availability | FacetCategory::Specialty => {
                FacetKind::Single
            }
            FacetCategory::Language => FacetKind::Multi,
            FacetCategory::Location => FacetKind::Hierarchical,
        }
    }

    /// Stable machine name, used in saved state and diagnostics
    pub fn key(&self) -> &'static str {
        match self {
            FacetCategory::Chain => "chain",
            FacetCategory::Availability => "availability",
            FacetCategory::Specialty => "specialty",
            FacetCategory::Language => "language",
            FacetCategory::Location => "location",
        }
    }

    /// Sidebar section title
    pub fn title(&self) -> &'static str {
        match self {
            FacetCategory::Chain => "Palveluntarjoaja",
            FacetCategory::Availability => "Saatavuus",
            FacetCategory::Specialty => "Erikoisala",
            FacetCategory::Language => "Kielet",
            FacetCategory::Location => "Sijainti",
        }
    }

    /// Parse an externally-supplied category name.
    ///
    /// Accepts singular and plural spellings, case-insensitive. Unknown
    /// names yield `None`; the caller treats that as a no-op.
    pub fn parse_key(key: &str) -> Option<FacetCategory> {
        match key.trim().to_lowercase().as_str() {
            "chain" | "chains" => Some(FacetCategory::Chain),
            "availability" => Some(FacetCategory::Availability),
            "specialty" | "specialties" => Some(FacetCategory::Specialty),
            "language" | "languages" => Some(FacetCategory::Language),
            "location" | "locations" => Some(FacetCategory::Location),
            _ => None,
        }
    }
}

// ============================================================================
// FACET SELECTION
// ============================================================================

/// Active values per facet.
///
/// The invariant the whole engine leans on: an empty set means "this
/// dimension does not restrict anything", never "nothing matches".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub chains: BTreeSet<String>,
    pub availability: BTreeSet<String>,
    pub specialties: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl FacetSelection {
    /// Selection with nothing active
    pub fn new() -> Self {
        Self::default()
    }

    /// Active values for one facet
    pub fn values(&self, facet: FacetCategory) -> &BTreeSet<String> {
        match facet {
            FacetCategory::Chain => &self.chains,
            FacetCategory::Availability => &self.availability,
            FacetCategory::Specialty => &self.specialties,
            FacetCategory::Language => &self.languages,
            FacetCategory::Location => &self.locations,
        }
    }

    fn values_mut(&mut self, facet: FacetCategory) -> &mut BTreeSet<String> {
        match facet {
            FacetCategory::Chain => &mut self.chains,
            FacetCategory::Availability => &mut self.availability,
            FacetCategory::Specialty => &mut self.specialties,
            FacetCategory::Language => &mut self.languages,
            FacetCategory::Location => &mut self.locations,
        }
    }

    /// True if this exact value is active in the facet
    pub fn contains(&self, facet: FacetCategory, value: &str) -> bool {
        self.values(facet).contains(value)
    }

    /// True when no facet restricts anything
    pub fn is_empty(&self) -> bool {
        FacetCategory::ALL.iter().all(|f| self.values(*f).is_empty())
    }

    /// Total number of active values across all facets
    pub fn active_count(&self) -> usize {
        FacetCategory::ALL.iter().map(|f| self.values(*f).len()).sum()
    }

    /// Return a new selection with the value added if absent, removed if
    /// present. The receiver is never touched.
    pub fn toggle(&self, facet: FacetCategory, value: &str) -> FacetSelection {
        let mut next = self.clone();
        let set = next.values_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        next
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// Full search state: free-text query plus facet selections.
///
/// Immutable snapshot; every update method returns a new state and the
/// caller swaps it in wholesale. That is what makes re-filtering after
/// each change deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub selected: FacetSelection,
}

impl FilterState {
    /// Empty query, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// New state with the query replaced, selections carried over
    pub fn with_query(&self, query: &str) -> FilterState {
        FilterState {
            query: query.to_string(),
            selected: self.selected.clone(),
        }
    }

    /// New state with one facet value toggled
    pub fn toggle(&self, facet: FacetCategory, value: &str) -> FilterState {
        FilterState {
            query: self.query.clone(),
            selected: self.selected.toggle(facet, value),
        }
    }

    /// Toggle a raw display label: canonicalize through the alias table
    /// first, so the selection only ever holds canonical values
    pub fn toggle_label(
        &self,
        aliases: &LabelAliases,
        facet: FacetCategory,
        label: &str,
    ) -> FilterState {
        self.toggle(facet, aliases.canonicalize(facet, label))
    }

    /// Toggle with an externally-supplied category name.
    /// Unknown names are a no-op: the same state comes back unchanged.
    pub fn toggle_key(&self, key: &str, value: &str) -> FilterState {
        match FacetCategory::parse_key(key) {
            Some(facet) => self.toggle(facet, value),
            None => self.clone(),
        }
    }

    /// Reset the query and every facet in one step.
    /// This is the "no results, start over" affordance.
    pub fn clear_all(&self) -> FilterState {
        FilterState::default()
    }

    /// True when nothing restricts the result set
    pub fn is_neutral(&self) -> bool {
        self.query.trim().is_empty() && self.selected.is_empty()
    }
}

// ============================================================================
// LABEL ALIASES
// ============================================================================

/// Declared alias table: raw display label to canonical vocabulary value.
///
/// Canonicalization happens BEFORE a toggle, one lookup in one place,
/// so the engine never has to know aliases exist.
#[derive(Debug, Clone, Default)]
pub struct LabelAliases {
    aliases: HashMap<FacetCategory, Vec<(String, String)>>,
}

impl LabelAliases {
    /// Empty table: every label is already canonical
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the aliases the bundled catalog uses
    pub fn with_defaults() -> Self {
        let mut table = LabelAliases::new();
        table.register(FacetCategory::Availability, "Ensi viikolla", "Tällä viikolla");
        table
    }

    /// Declare that `alias` means `canonical` within one facet
    pub fn register(&mut self, facet: FacetCategory, alias: &str, canonical: &str) {
        self.aliases
            .entry(facet)
            .or_default()
            .push((alias.to_string(), canonical.to_string()));
    }

    /// Resolve a label to its canonical form (case-insensitive lookup).
    /// Labels without an alias come back unchanged.
    pub fn canonicalize<'a>(&'a self, facet: FacetCategory, label: &'a str) -> &'a str {
        if let Some(pairs) = self.aliases.get(&facet) {
            let needle = label.trim().to_lowercase();
            for (alias, canonical) in pairs {
                if alias.to_lowercase() == needle {
                    return canonical;
                }
            }
        }
        label
    }

    /// All declared aliases, for diagnostics
    pub fn entries(&self) -> impl Iterator<Item = (FacetCategory, &str, &str)> {
        self.aliases.iter().flat_map(|(facet, pairs)| {
            pairs
                .iter()
                .map(move |(alias, canonical)| (*facet, alias.as_str(), canonical.as_str()))
        })
    }

    /// Number of declared aliases
    pub fn len(&self) -> usize {
        self.aliases.values().map(|pairs| pairs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(FacetCategory::parse_key("chain"), Some(FacetCategory::Chain));
        assert_eq!(FacetCategory::parse_key("Chains"), Some(FacetCategory::Chain));
        assert_eq!(
            FacetCategory::parse_key("  LANGUAGES  "),
            Some(FacetCategory::Language)
        );
        assert_eq!(
            FacetCategory::parse_key("specialty"),
            Some(FacetCategory::Specialty)
        );

        // Unknown names are nobody's error, they just parse to nothing
        assert_eq!(FacetCategory::parse_key("rating"), None);
        assert_eq!(FacetCategory::parse_key(""), None);
    }

    #[test]
    fn test_key_and_parse_round_trip() {
        for facet in FacetCategory::ALL {
            assert_eq!(FacetCategory::parse_key(facet.key()), Some(facet));
        }
    }

    #[test]
    fn test_kind_per_facet() {
        assert_eq!(FacetCategory::Chain.kind(), FacetKind::Single);
        assert_eq!(FacetCategory::Availability.kind(), FacetKind::Single);
        assert_eq!(FacetCategory::Specialty.kind(), FacetKind::Single);
        assert_eq!(FacetCategory::Language.kind(), FacetKind::Multi);
        assert_eq!(FacetCategory::Location.kind(), FacetKind::Hierarchical);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = FacetSelection::new();

        let one = empty.toggle(FacetCategory::Specialty, "Yleislääkäri");
        assert!(one.contains(FacetCategory::Specialty, "Yleislääkäri"));
        assert_eq!(one.active_count(), 1);

        // Toggling the same value again returns to the original set
        let back = one.toggle(FacetCategory::Specialty, "Yleislääkäri");
        assert_eq!(back, empty);
    }

    #[test]
    fn test_toggle_leaves_snapshot_untouched() {
        let first = FacetSelection::new().toggle(FacetCategory::Chain, "Aava");
        let second = first.toggle(FacetCategory::Chain, "Mehiläinen");

        // The earlier snapshot still has exactly one value
        assert_eq!(first.active_count(), 1);
        assert_eq!(second.active_count(), 2);
        assert!(!first.contains(FacetCategory::Chain, "Mehiläinen"));
    }

    #[test]
    fn test_toggle_never_clears_other_facets() {
        let selection = FacetSelection::new()
            .toggle(FacetCategory::Chain, "Aava")
            .toggle(FacetCategory::Language, "sv")
            .toggle(FacetCategory::Chain, "Aava");

        assert!(selection.values(FacetCategory::Chain).is_empty());
        assert!(selection.contains(FacetCategory::Language, "sv"));
    }

    #[test]
    fn test_toggle_key_unknown_category_is_noop() {
        let state = FilterState::new().toggle(FacetCategory::Language, "fi");

        let same = state.toggle_key("rating", "5");
        assert_eq!(same, state);

        let changed = state.toggle_key("languages", "sv");
        assert!(changed.selected.contains(FacetCategory::Language, "sv"));
    }

    #[test]
    fn test_clear_all_resets_query_and_selections() {
        let state = FilterState::new()
            .with_query("kallio")
            .toggle(FacetCategory::Specialty, "Yleislääkäri")
            .toggle(FacetCategory::Location, "Helsinki");

        let cleared = state.clear_all();

        assert_eq!(cleared.query, "");
        assert!(cleared.selected.is_empty());
        assert!(cleared.is_neutral());
        // The old snapshot is still what it was
        assert_eq!(state.selected.active_count(), 2);
    }

    #[test]
    fn test_with_query_keeps_selections() {
        let state = FilterState::new().toggle(FacetCategory::Chain, "Terveystalo");
        let queried = state.with_query("anna");

        assert_eq!(queried.query, "anna");
        assert!(queried.selected.contains(FacetCategory::Chain, "Terveystalo"));
    }

    #[test]
    fn test_alias_canonicalized_before_toggle() {
        let aliases = LabelAliases::with_defaults();
        let state = FilterState::new();

        let toggled = state.toggle_label(&aliases, FacetCategory::Availability, "Ensi viikolla");

        // Only the canonical label lands in the set
        assert!(toggled.selected.contains(FacetCategory::Availability, "Tällä viikolla"));
        assert!(!toggled.selected.contains(FacetCategory::Availability, "Ensi viikolla"));

        // Toggling the alias again removes the canonical value
        let back = toggled.toggle_label(&aliases, FacetCategory::Availability, "Ensi viikolla");
        assert!(back.selected.is_empty());
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive_and_scoped_to_facet() {
        let mut aliases = LabelAliases::new();
        aliases.register(FacetCategory::Availability, "Ensi viikolla", "Tällä viikolla");

        assert_eq!(
            aliases.canonicalize(FacetCategory::Availability, "ensi VIIKOLLA"),
            "Tällä viikolla"
        );
        // Same label in a different facet passes through untouched
        assert_eq!(
            aliases.canonicalize(FacetCategory::Specialty, "Ensi viikolla"),
            "Ensi viikolla"
        );
        // Unaliased labels pass through
        assert_eq!(
            aliases.canonicalize(FacetCategory::Availability, "Huomenna"),
            "Huomenna"
        );
    }

    #[test]
    fn test_alias_table_diagnostics() {
        let table = LabelAliases::with_defaults();

        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());

        let all: Vec<_> = table.entries().collect();
        assert_eq!(
            all,
            vec![(FacetCategory::Availability, "Ensi viikolla", "Tällä viikolla")]
        );
    }
}
