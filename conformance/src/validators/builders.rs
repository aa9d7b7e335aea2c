//! Typed builder validator.
//!
//! Each generated builder must expose a setter for exactly the predicates
//! its type's rules make applicable, in declaration order.

use hqdm_model::{EntityType, RuleTable, SURFACES};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "builders/surface";

/// Validates the typed builder setters against `table`.
pub fn validate(table: &RuleTable) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut violations = Vec::new();

    for entity_type in EntityType::ALL {
        let Some(&(_, setters)) = SURFACES.iter().find(|(t, _)| *t == entity_type) else {
            violations.push(format!("No typed builder for {entity_type}"));
            continue;
        };
        let Some(rules) = table.rules_for(entity_type) else {
            violations.push(format!("{entity_type} has no rules"));
            continue;
        };
        let applicable: Vec<_> = rules.applicable().collect();
        if applicable != setters {
            violations.push(format!(
                "{entity_type}: setters {setters:?} differ from applicable {applicable:?}"
            ));
        }
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("{} typed builders match their rules", SURFACES.len()),
        "Typed builder mismatches",
        violations,
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_builders_match() {
        assert!(validate(RuleTable::hqdm().unwrap()).all_passed());
    }
}
