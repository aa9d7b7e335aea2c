//! `hqdm-conformance`: runs the HQDM model conformance suite.
//!
//! Covers the rule-table inventory, the type hierarchy, rule narrowing, the
//! typed builder setters and the embedded instance fixtures.
//!
//! **Usage:**
//! ```text
//! hqdm-conformance
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use hqdm_conformance::{run_all, Severity};

/// Run the HQDM model conformance suite.
#[derive(Parser)]
#[command(
    name = "hqdm-conformance",
    about = "Validate the HQDM rule table, builders and fixtures"
)]
struct Args {}

fn main() -> Result<()> {
    hqdm_clients::init_tracing();
    let _args = Args::parse();

    let report = run_all()?;

    println!("HQDM Model Conformance Report");
    println!("=============================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {}: {}",
            result.severity.as_str(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
