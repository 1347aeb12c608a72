// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::Path;

use laakarihaku::{
    build_vocabulary, load_catalog, sample_catalog, Catalog, FacetCategory, FilterEngine,
    FilterState, QualityEngine,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("check") => run_check(args.get(2).map(Path::new))?,
        Some("search") => match args.get(2) {
            Some(query) => run_search(query, args.get(3).map(Path::new))?,
            None => {
                eprintln!("Usage: laakarihaku search <QUERY> [FILE]");
                std::process::exit(1);
            }
        },
        Some(path) => run_ui_mode(Some(Path::new(path)))?,
        None => run_ui_mode(None)?,
    }

    Ok(())
}

/// Load the catalog from the given file, or fall back to the bundled
/// sample so every mode works out of the box
fn load_or_sample(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            println!("📂 Loading catalog: {}", path.display());
            let catalog = load_catalog(path)?;
            println!("✓ Loaded {} doctors\n", catalog.len());
            Ok(catalog)
        }
        None => {
            let catalog = sample_catalog();
            println!("📂 No file given, using the bundled sample catalog ({} doctors)\n", catalog.len());
            Ok(catalog)
        }
    }
}

fn run_check(path: Option<&Path>) -> Result<()> {
    println!("✅ Catalog Quality Check");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let catalog = load_or_sample(path)?;

    let vocabulary = build_vocabulary(catalog.entries());
    println!("📋 Facet vocabulary:");
    for facet in [
        FacetCategory::Chain,
        FacetCategory::Availability,
        FacetCategory::Specialty,
        FacetCategory::Language,
    ] {
        println!(
            "   {:<16} {} values",
            facet.title(),
            vocabulary.values(facet).len()
        );
    }
    println!();

    let engine = QualityEngine::with_defaults();
    let report = engine.validate_catalog(&catalog);

    for issue in &report.issues {
        let owner = match issue.entry_id {
            Some(id) => format!("#{}", id),
            None => "catalog".to_string(),
        };
        println!(
            "  [{}] {} ({}): {}",
            issue.severity.label(),
            owner,
            issue.field,
            issue.message
        );
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📋 {}", report.summary());

    if report.has_critical_issues() {
        eprintln!("❌ Catalog has critical issues");
        std::process::exit(1);
    }

    println!("🎉 Catalog is usable");
    Ok(())
}

fn run_search(query: &str, path: Option<&Path>) -> Result<()> {
    let catalog = load_or_sample(path)?;

    let engine = FilterEngine::with_defaults();
    let state = FilterState::new().with_query(query);
    let results = engine.run(&catalog, &state);

    println!(
        "🔍 \"{}\" matches {} of {} doctors",
        query,
        results.len(),
        catalog.len()
    );

    if results.is_empty() {
        println!("   (no matches)");
        return Ok(());
    }

    for entry in &results {
        println!(
            "  {:<24} {:<18} {:<14} {:<22} {}",
            entry.name, entry.specialty, entry.chain, entry.location, entry.availability
        );
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(path: Option<&Path>) -> Result<()> {
    println!("🖥️  Loading Lääkärihaku UI...\n");

    let catalog = load_or_sample(path)?;

    println!("Starting UI... (Press 'q' to quit)\n");

    // Create and run app
    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_path: Option<&Path>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: laakarihaku search <QUERY>");
    std::process::exit(1);
}
