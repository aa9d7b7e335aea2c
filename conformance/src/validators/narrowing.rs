//! Narrowing validator.
//!
//! A subtype may tighten what it inherits but never loosen it. Assembly
//! already rejects a widening declaration; this re-checks the resolved
//! table against every ancestor, not just direct supertypes, and reports
//! how many rules the hierarchy narrows.

use hqdm_model::RuleTable;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "table/narrowing";

/// Validates that every resolved rule narrows the rules of all ancestors.
pub fn validate(table: &RuleTable) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut violations = Vec::new();
    let mut narrowed = 0usize;

    for rules in table.types() {
        let entity_type = rules.entity_type();
        for ancestor in rules.ancestors() {
            let Some(inherited) = table.rules_for(ancestor) else {
                violations.push(format!("{entity_type}: ancestor {ancestor} has no rules"));
                continue;
            };
            for (predicate, multiplicity) in inherited.iter() {
                match rules.rule(predicate) {
                    None => violations.push(format!(
                        "{entity_type} drops {predicate} inherited from {ancestor}"
                    )),
                    Some(own) if !own.narrows(multiplicity) => violations.push(format!(
                        "{entity_type}.{predicate} is {own}, wider than {ancestor}'s {multiplicity}"
                    )),
                    Some(_) => {}
                }
            }
        }
        for &supertype in rules.supertypes() {
            if let Some(inherited) = table.rules_for(supertype) {
                narrowed += inherited
                    .iter()
                    .filter(|&(p, m)| rules.rule(p).is_some_and(|own| own != m))
                    .count();
            }
        }
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("Every rule narrows its inherited rules ({narrowed} narrowed)"),
        "Widened or dropped rules",
        violations,
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_only_narrows() {
        let report = validate(RuleTable::hqdm().unwrap());
        assert!(report.all_passed());
        assert!(report.results[0].message.contains("narrowed"));
    }
}
