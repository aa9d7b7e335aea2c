//! Instance validator.
//!
//! Builds every record of every embedded fixture and compares the outcome
//! with the record's expectation. A record without an expectation only has
//! to build without an unknown-type or rule-table error.

use hqdm_model::BuildError;

use crate::document::EntityDocument;
use crate::fixtures;
use crate::report::{ConformanceReport, TestResult};

/// Runs all instance fixtures.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for &(name, src) in fixtures::ALL {
        run_fixture(name, src, &mut report);
    }
    report
}

/// Runs a single fixture document.
fn run_fixture(name: &str, src: &str, report: &mut ConformanceReport) {
    let validator = format!("instances/{name}");

    let document = match EntityDocument::from_json(src) {
        Ok(document) => document,
        Err(err) => {
            report.push(TestResult::fail(validator, format!("{err:#}")));
            return;
        }
    };
    if document.entities.is_empty() {
        report.push(TestResult::fail(validator, "Fixture has no entities"));
        return;
    }

    let mut violations = Vec::new();
    for outcome in document.build_all(None) {
        let id = &outcome.record.id;
        match (&outcome.record.expect, &outcome.result) {
            (Some(expect), result) if !expect.matches(result) => {
                let got = match result {
                    Ok(_) => "ok".to_string(),
                    Err(err) => err.to_string(),
                };
                violations.push(format!("{id}: expected {expect}, got {got}"));
            }
            (None, Err(err @ (BuildError::UnknownType(_) | BuildError::RuleTable(_)))) => {
                violations.push(format!("{id}: {err}"));
            }
            _ => {}
        }
    }

    report.push(TestResult::from_violations(
        validator,
        format!(
            "Fixture {name}: {} entities behave as expected",
            document.entities.len()
        ),
        format!("Fixture {name}: unexpected build outcomes"),
        violations,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_pass() {
        let report = validate();
        for failure in report.failures() {
            eprintln!("{}: {} {:?}", failure.validator, failure.message, failure.details);
        }
        assert!(report.all_passed());
        assert_eq!(report.results.len(), fixtures::ALL.len());
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let mut report = ConformanceReport::new();
        run_fixture(
            "bad",
            r#"{"entities":[{"id":"urn:a","type":"activity","expect":"ok"}]}"#,
            &mut report,
        );
        assert_eq!(report.failure_count(), 1);
        assert!(report.results[0].details[0].contains("part_of_possible_world"));
    }

    #[test]
    fn unparsable_fixture_fails() {
        let mut report = ConformanceReport::new();
        run_fixture("broken", "{", &mut report);
        assert_eq!(report.failure_count(), 1);
    }
}
