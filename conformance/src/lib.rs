//! HQDM model conformance suite.
//!
//! Checks that the bundled rule table is well formed, that the typed
//! builders match it, and that the builder accepts and rejects the embedded
//! instance fixtures exactly as they expect.
//!
//! # Conformance Scope
//!
//! | Component | Check |
//! |-----------|-------|
//! | Rule table | 29 types, 17 predicates, resolves without error |
//! | Hierarchy | single `thing` root, no self-supertypes |
//! | Narrowing | every rule narrows every ancestor's rule |
//! | Typed builders | setters equal applicable predicates |
//! | Instances | fixture outcomes match their expectations |
//!
//! # Entry Point
//!
//! ```
//! let report = hqdm_conformance::run_all()?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod document;
pub mod fixtures;
pub mod report;
pub mod validators;

pub use document::{EntityDocument, EntityRecord, Expectation, Outcome};
pub use report::{ConformanceReport, Severity, TestResult};

use anyhow::Context;
use hqdm_model::RuleTable;
use tracing::info;

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Rule-table inventory
/// 2. Type hierarchy
/// 3. Rule narrowing
/// 4. Typed builder surfaces
/// 5. Instance fixtures
///
/// # Errors
///
/// Returns an error if the bundled rule table does not resolve.
pub fn run_all() -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::inventory::validate());

    let table = RuleTable::hqdm().context("Bundled rule table does not resolve")?;
    report.extend(validators::hierarchy::validate(table));
    report.extend(validators::narrowing::validate(table));
    report.extend(validators::builders::validate(table));

    report.extend(validators::instances::validate());

    info!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    #[test]
    fn suite_passes() {
        let report = run_all().unwrap();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "Conformance failures: {failures:#?}");
    }

    #[test]
    fn every_validator_reports() {
        let report = run_all().unwrap();
        for prefix in [
            "table/inventory",
            "table/hierarchy",
            "table/narrowing",
            "builders/surface",
            "instances/",
        ] {
            assert!(
                report.results.iter().any(|r| r.validator.starts_with(prefix)),
                "no results from {prefix}"
            );
        }
    }
}
