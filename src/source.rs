// 📂 Catalog Source - Static data loading
//
// The engine consumes the catalog whole at startup; this module is the
// collaborator that produces it. JSON mirrors the app's own data file,
// CSV covers tabular exports where languages arrive as one joined cell.
// When no file is given, a bundled sample catalog stands in.

use crate::catalog::{Catalog, Entry};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

// ============================================================================
// FORMAT DETECTION
// ============================================================================

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    /// Human-readable format name
    pub fn name(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "JSON",
            CatalogFormat::Csv => "CSV",
        }
    }
}

/// Detect the catalog format from the file extension
pub fn detect_format(path: &Path) -> Result<CatalogFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => Ok(CatalogFormat::Json),
        "csv" => Ok(CatalogFormat::Csv),
        _ => bail!("Unsupported catalog format: {}", path.display()),
    }
}

// ============================================================================
// LOADERS
// ============================================================================

/// Load a catalog file, picking the loader by extension
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    match detect_format(path)? {
        CatalogFormat::Json => load_json(path),
        CatalogFormat::Csv => load_csv(path),
    }
}

/// Load the JSON shape: a top-level array of entries.
/// Unknown keys in a record (e.g. portrait URLs) are ignored.
pub fn load_json(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    parse_json(&content)
}

fn parse_json(content: &str) -> Result<Catalog> {
    let entries: Vec<Entry> =
        serde_json::from_str(content).context("Failed to parse catalog JSON")?;

    Ok(Catalog::from_entries(entries))
}

/// Load the CSV shape, one entry per row
pub fn load_csv(path: &Path) -> Result<Catalog> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;

    parse_csv(file)
}

fn parse_csv<R: io::Read>(input: R) -> Result<Catalog> {
    let mut rdr = csv::Reader::from_reader(input);

    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let row: CsvRow = row.context("Failed to deserialize catalog row")?;
        entries.push(row.into_entry());
    }

    Ok(Catalog::from_entries(entries))
}

/// One CSV row. Languages arrive as a single `;`-separated cell.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    specialty: String,
    #[serde(default)]
    chain: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    availability: String,
    #[serde(default)]
    languages: String,
}

impl CsvRow {
    fn into_entry(self) -> Entry {
        let languages = self
            .languages
            .split(';')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        Entry {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            chain: self.chain,
            location: self.location,
            availability: self.availability,
            languages,
        }
    }
}

// ============================================================================
// BUNDLED SAMPLE CATALOG
// ============================================================================

/// Demo catalog used when no data file is given on the command line.
/// Twelve doctors across the metro area; every facet has values to offer.
pub fn sample_catalog() -> Catalog {
    Catalog::from_entries(vec![
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
        Entry::new(
            4,
            "Johan Lindqvist",
            "Kardiologi",
            "Mehiläinen",
            "Töölö, Helsinki",
            "Tällä viikolla",
            &["fi", "sv", "en"],
        ),
        Entry::new(
            5,
            "Maria Korhonen",
            "Ihotautilääkäri",
            "Pihlajalinna",
            "Kamppi, Helsinki",
            "Tänään vapaana",
            &["fi", "en"],
        ),
        Entry::new(
            6,
            "Antti Mäkinen",
            "Ortopedi",
            "Mehiläinen",
            "Leppävaara, Espoo",
            "Tällä viikolla",
            &["fi"],
        ),
        Entry::new(
            7,
            "Elena Smirnova",
            "Gynekologi",
            "Terveystalo",
            "Pasila, Helsinki",
            "Huomenna",
            &["fi", "ru", "en"],
        ),
        Entry::new(
            8,
            "Sari Niemi",
            "Lastenlääkäri",
            "Aava",
            "Myyrmäki, Vantaa",
            "Tänään vapaana",
            &["fi"],
        ),
        Entry::new(
            9,
            "Mikael Holm",
            "Psykiatri",
            "Pihlajalinna",
            "Punavuori, Helsinki",
            "Tällä viikolla",
            &["fi", "sv"],
        ),
        Entry::new(
            10,
            "Katri Aalto",
            "Silmälääkäri",
            "Terveystalo",
            "Otaniemi, Espoo",
            "Huomenna",
            &["fi", "en"],
        ),
        Entry::new(
            11,
            "Tuomas Rantala",
            "Yleislääkäri",
            "Pihlajalinna",
            "Aviapolis, Vantaa",
            "Tällä viikolla",
            &["fi"],
        ),
        Entry::new(
            12,
            "Hanna Laine",
            "Hammaslääkäri",
            "Mehiläinen",
            "Kallio, Helsinki",
            "Huomenna",
            &["fi", "en"],
        ),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
