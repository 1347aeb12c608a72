// ✅ Catalog Quality - Load-time validation of the doctor directory
//
// Nothing here is fatal by design: a blank field only weakens the entry
// that carries it (that facet can no longer match), so the checks report
// instead of reject. Critical is reserved for catalog-level breakage
// like duplicate ids, which the booking flow cannot tolerate.

use crate::catalog::{Catalog, Entry};
use crate::regions::RegionTable;
use crate::selection::{FacetCategory, LabelAliases};
use crate::vocabulary::build_vocabulary;
use serde::{Deserialize, Serialize};

// ============================================================================
// ISSUES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Severity {
    Critical, // Catalog-level breakage, results cannot be trusted
    Warning,  // Entry is degraded, one or more facets cannot match it
    Info,     // Worth knowing, nothing misbehaves
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// One finding from the quality pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub severity: Severity,
    /// Entry the issue belongs to, `None` for catalog-level findings
    pub entry_id: Option<u64>,
    pub field: String,
    pub message: String,
}

impl QualityIssue {
    fn entry(severity: Severity, id: u64, field: &str, message: &str) -> Self {
        QualityIssue {
            severity,
            entry_id: Some(id),
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    fn catalog(severity: Severity, field: &str, message: &str) -> Self {
        QualityIssue {
            severity,
            entry_id: None,
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

// ============================================================================
// QUALITY REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub entries_checked: usize,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_critical_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} entries checked, {} issues ({} critical, {} warnings, {} info)",
            self.entries_checked,
            self.issues.len(),
            self.count(Severity::Critical),
            self.count(Severity::Warning),
            self.count(Severity::Info),
        )
    }
}

// ============================================================================
// QUALITY ENGINE
// ============================================================================

/// Validates a loaded catalog against the declared reference data
pub struct QualityEngine {
    regions: RegionTable,
    aliases: LabelAliases,
}

impl QualityEngine {
    pub fn new(regions: RegionTable, aliases: LabelAliases) -> Self {
        QualityEngine { regions, aliases }
    }

    pub fn with_defaults() -> Self {
        QualityEngine::new(RegionTable::with_defaults(), LabelAliases::with_defaults())
    }

    /// Check one entry's own fields
    pub fn validate_entry(&self, entry: &Entry) -> Vec<QualityIssue> {
        let mut issues = Vec::new();

        let single_fields = [
            ("name", &entry.name),
            ("specialty", &entry.specialty),
            ("chain", &entry.chain),
            ("location", &entry.location),
            ("availability", &entry.availability),
        ];
        for (field, value) in single_fields {
            if value.trim().is_empty() {
                issues.push(QualityIssue::entry(
                    Severity::Warning,
                    entry.id,
                    field,
                    &format!("Field '{}' is blank, that facet cannot match", field),
                ));
            }
        }

        if entry.languages.is_empty() {
            issues.push(QualityIssue::entry(
                Severity::Info,
                entry.id,
                "languages",
                "No language codes listed",
            ));
        }
        for code in &entry.languages {
            if code.trim().is_empty() {
                issues.push(QualityIssue::entry(
                    Severity::Warning,
                    entry.id,
                    "languages",
                    "Blank language code",
                ));
            }
        }

        // Only entries the region table can place are reachable through
        // the location facet (the sentinel aside)
        if !self.regions.is_empty() && !entry.location.trim().is_empty() {
            let placed = self
                .regions
                .labels()
                .iter()
                .skip(1)
                .any(|region| self.regions.matches(region, &entry.location));
            if !placed {
                issues.push(QualityIssue::entry(
                    Severity::Info,
                    entry.id,
                    "location",
                    &format!("Location matches no declared region: {}", entry.location),
                ));
            }
        }

        issues
    }

    /// Check the whole catalog: every entry plus the cross-entry rules
    pub fn validate_catalog(&self, catalog: &Catalog) -> QualityReport {
        let mut issues = Vec::new();

        if catalog.is_empty() {
            issues.push(QualityIssue::catalog(
                Severity::Info,
                "catalog",
                "Catalog is empty, every search will return no results",
            ));
            return QualityReport {
                entries_checked: 0,
                issues,
            };
        }

        // Duplicate ids break the booking flow's identity contract
        let entries = catalog.entries();
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|earlier| earlier.id == entry.id) {
                issues.push(QualityIssue::entry(
                    Severity::Critical,
                    entry.id,
                    "id",
                    &format!("Duplicate id {}", entry.id),
                ));
            }
        }

        for entry in entries {
            issues.extend(self.validate_entry(entry));
        }

        // An alias whose canonical target no entry carries toggles a
        // value that can never match anything
        let vocab = build_vocabulary(entries);
        for (facet, alias, canonical) in self.aliases.entries() {
            if facet != FacetCategory::Location && !vocab.contains(facet, canonical) {
                issues.push(QualityIssue::catalog(
                    Severity::Warning,
                    facet.key(),
                    &format!(
                        "Alias '{}' resolves to '{}', which no entry carries",
                        alias, canonical
                    ),
                ));
            }
        }

        QualityReport {
            entries_checked: entries.len(),
            issues,
        }
    }
}

impl Default for QualityEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================
