//! JSON serializer for a resolved [`RuleTable`].
//!
//! The document lists every type with its supertypes and its resolved
//! rules in declaration order, so a consumer can validate entities without
//! re-walking the hierarchy.

use serde_json::{json, Value};

use crate::iri::iris;
use crate::rules::{RuleTable, TypeRules};

/// Serializes `table` to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(table: &RuleTable) -> Value {
    let types: Vec<Value> = table.types().map(type_to_json).collect();
    json!({
        "namespace": iris::HQDM,
        "types": types
    })
}

fn type_to_json(rules: &TypeRules) -> Value {
    let entity_type = rules.entity_type();
    let supertypes: Vec<&str> = rules.supertypes().iter().map(|t| t.label()).collect();
    let rule_nodes: Vec<Value> = rules
        .iter()
        .map(|(predicate, multiplicity)| {
            let mut node = json!({
                "predicate": predicate.label(),
                "iri": predicate.iri().as_str(),
                "kind": predicate.kind().as_str(),
                "multiplicity": multiplicity.as_str(),
                "min": multiplicity.min(),
                "max": multiplicity.max()
            });
            if let Some(datatype) = predicate.datatype() {
                node["datatype"] = json!(datatype);
            }
            node
        })
        .collect();
    json!({
        "type": entity_type.label(),
        "iri": entity_type.iri().as_str(),
        "supertypes": supertypes,
        "rules": rule_nodes
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::EntityType;

    #[test]
    fn one_node_per_type() {
        let table = RuleTable::hqdm().unwrap();
        let doc = to_json(table);
        assert_eq!(doc["types"].as_array().map(Vec::len), Some(EntityType::ALL.len()));
    }

    #[test]
    fn narrowed_rule_is_exported() {
        let doc = to_json(RuleTable::hqdm().unwrap());
        let acceptance = doc["types"]
            .as_array()
            .and_then(|types| types.iter().find(|t| t["type"] == "acceptance_of_offer"))
            .cloned()
            .unwrap();
        let part_of = acceptance["rules"]
            .as_array()
            .and_then(|rules| rules.iter().find(|r| r["predicate"] == "part_of"))
            .cloned()
            .unwrap();
        assert_eq!(part_of["multiplicity"], "mandatory_single");
        assert_eq!(part_of["min"], 1);
        assert_eq!(part_of["max"], 1);
        assert!(part_of.get("datatype").is_none());
    }
}
