//! `hqdm-rules`: resolves the bundled HQDM rule table and writes it as JSON.
//!
//! **Outputs:**
//! - `<out>/hqdm.rules.json`: every entity type with its resolved rules
//!
//! **Usage:**
//! ```text
//! hqdm-rules [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hqdm_model::serializer::json;
use hqdm_model::{EntityType, Predicate, RuleTable};
use tracing::info;

/// Export the HQDM cardinality rule table.
#[derive(Parser)]
#[command(name = "hqdm-rules", about = "Export the resolved HQDM rule table")]
struct Args {
    /// Output directory for the rule table.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    hqdm_clients::init_tracing();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let table = RuleTable::hqdm().context("Bundled rule table does not resolve")?;
    let mandatory: usize = table.types().map(|rules| rules.mandatory().count()).sum();
    println!(
        "HQDM rule table: {} entity types, {} predicates, {} mandatory rules",
        EntityType::ALL.len(),
        Predicate::ALL.len(),
        mandatory
    );

    let path = out.join("hqdm.rules.json");
    let text = serde_json::to_string_pretty(&json::to_json(table))
        .context("Failed to serialize rule table")?;
    fs::write(&path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "rule table written");
    println!("  Written: {}", path.display());

    Ok(())
}
