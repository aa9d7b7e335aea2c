//! Type hierarchy validator.
//!
//! Checks that `thing` is the only root and that every other type reaches it
//! through its supertypes without naming itself.

use hqdm_model::{EntityType, RuleTable};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/hierarchy";

/// Validates the supertype graph of `table`.
pub fn validate(table: &RuleTable) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let roots: Vec<EntityType> = table
        .types()
        .filter(|rules| rules.supertypes().is_empty())
        .map(|rules| rules.entity_type())
        .collect();
    if roots == [EntityType::Thing] {
        report.push(TestResult::pass(VALIDATOR, "thing is the only root type"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Expected thing as the only root type",
            roots.iter().map(|t| format!("Root: {t}")).collect(),
        ));
    }

    let mut violations = Vec::new();
    for rules in table.types() {
        let entity_type = rules.entity_type();
        if rules.supertypes().contains(&entity_type) {
            violations.push(format!("{entity_type} lists itself as a supertype"));
        }
        if !table.is_subtype_of(entity_type, EntityType::Thing) {
            violations.push(format!("{entity_type} does not descend from thing"));
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("All {} types descend from thing", table.len()),
        "Hierarchy violations",
        violations,
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqdm_model::TypeRow;

    #[test]
    fn bundled_hierarchy_passes() {
        let report = validate(RuleTable::hqdm().unwrap());
        assert!(report.all_passed());
    }

    #[test]
    fn second_root_fails() {
        let table = RuleTable::from_rows(vec![
            TypeRow {
                entity_type: EntityType::Thing,
                supertypes: &[],
                rules: &[],
            },
            TypeRow {
                entity_type: EntityType::Class,
                supertypes: &[],
                rules: &[],
            },
        ])
        .unwrap();
        let report = validate(&table);
        assert_eq!(report.failure_count(), 2);
    }
}
