// Lääkärihaku - Core Library
// Exposes all modules for use in the CLI, the TUI, and tests

pub mod catalog;
pub mod engine;
pub mod quality;
pub mod regions;
pub mod selection;
pub mod source;
pub mod vocabulary;

// Re-export commonly used types
pub use catalog::{Catalog, Entry};
pub use engine::FilterEngine;
pub use quality::{QualityEngine, QualityIssue, QualityReport, Severity};
pub use regions::{Region, RegionTable};
pub use selection::{FacetCategory, FacetKind, FacetSelection, FilterState, LabelAliases};
pub use source::{
    detect_format, load_catalog, load_csv, load_json, sample_catalog, CatalogFormat,
};
pub use vocabulary::{build_vocabulary, FacetVocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
