//! `hqdm-check`: builds every entity in a JSON entity document and reports
//! which ones the rule table rejects.
//!
//! **Usage:**
//! ```text
//! hqdm-check [--strict] [--keep-duplicates] <document.json>
//! ```
//!
//! Flags override the document's own `config`. Exits non-zero if any entity
//! fails to build without expecting to, or any stated expectation is not
//! met.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hqdm_conformance::EntityDocument;
use hqdm_model::{Duplicates, UpperBounds};

/// Validate an HQDM entity document.
#[derive(Parser)]
#[command(name = "hqdm-check", about = "Build and validate HQDM entities")]
struct Args {
    /// Enforce upper bounds, applicability and value kinds.
    #[arg(long)]
    strict: bool,

    /// Keep repeated values instead of collapsing them.
    #[arg(long)]
    keep_duplicates: bool,

    /// Path to the entity document.
    document: PathBuf,
}

fn main() -> Result<()> {
    hqdm_clients::init_tracing();
    let args = Args::parse();

    let document = EntityDocument::load(&args.document)?;
    let mut config = document.config;
    if args.strict {
        config.upper_bounds = UpperBounds::Strict;
    }
    if args.keep_duplicates {
        config.duplicates = Duplicates::Keep;
    }

    let mut built = 0usize;
    let mut rejected = 0usize;
    let mut failed = 0usize;

    for outcome in document.build_all(Some(config)) {
        let record = outcome.record;
        let verdict = match &outcome.result {
            Ok(_) => {
                built += 1;
                "ok".to_string()
            }
            Err(err) => {
                rejected += 1;
                err.to_string()
            }
        };
        let status = match outcome.as_expected() {
            Some(true) => "PASS",
            Some(false) => {
                failed += 1;
                "FAIL"
            }
            None if outcome.result.is_ok() => "OK",
            None => {
                failed += 1;
                "ERR"
            }
        };
        println!(
            "[{}] {} ({}): {}",
            status, record.id, record.entity_type, verdict
        );
        if let (Some(false), Some(expect)) = (outcome.as_expected(), &record.expect) {
            println!("       expected {}", expect);
        }
    }

    println!();
    println!(
        "Summary: {} built, {} rejected, {} unexpected",
        built, rejected, failed
    );

    if failed > 0 {
        eprintln!("Check FAILED: {} entities did not behave as expected.", failed);
        process::exit(1);
    }
    Ok(())
}
