//! Rule-table inventory validator.
//!
//! Verifies that the bundled table resolves and covers the vocabulary:
//! - 29 entity types, each with a resolved row
//! - 17 predicates, each applicable to at least one type

use hqdm_model::{EntityType, Predicate, RuleTable};

use crate::report::{ConformanceReport, TestResult};

const EXPECTED_TYPES: usize = 29;
const EXPECTED_PREDICATES: usize = 17;

/// Validates the inventory of the bundled rule table.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_count(
        &mut report,
        "entity type",
        EntityType::ALL.len(),
        EXPECTED_TYPES,
    );
    check_count(
        &mut report,
        "predicate",
        Predicate::ALL.len(),
        EXPECTED_PREDICATES,
    );

    let table = match RuleTable::hqdm() {
        Ok(table) => table,
        Err(err) => {
            report.push(TestResult::fail(
                "table/inventory",
                format!("Bundled rule table does not resolve: {err}"),
            ));
            return report;
        }
    };
    report.push(TestResult::pass(
        "table/inventory",
        "Bundled rule table resolves",
    ));

    let missing: Vec<String> = EntityType::ALL
        .iter()
        .filter(|&&t| table.rules_for(t).is_none())
        .map(|t| format!("No row for {t}"))
        .collect();
    report.push(TestResult::from_violations(
        "table/inventory",
        format!("All {} entity types have resolved rules", table.len()),
        "Entity types without rules",
        missing,
    ));

    let unused: Vec<String> = Predicate::ALL
        .iter()
        .filter(|&&p| !table.types().any(|rules| rules.is_applicable(p)))
        .map(|p| format!("{p} applies to no type"))
        .collect();
    report.push(TestResult::from_violations(
        "table/inventory",
        "Every predicate applies to at least one type",
        "Unused predicates",
        unused,
    ));

    report
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            "table/inventory",
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            "table/inventory",
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_inventory_passes() {
        let report = validate();
        assert!(report.all_passed(), "{:?}", report.failures().collect::<Vec<_>>());
    }
}
