//! Property tests for the builder across every bundled entity type.

use std::collections::BTreeSet;

use hqdm_model::{BuildError, Builder, EntityType, Iri, Predicate, RuleTable, Value};
use proptest::prelude::*;

fn entity_type() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::ALL.to_vec())
}

fn value_for(predicate: Predicate, n: u32) -> Value {
    match predicate.kind() {
        hqdm_model::PredicateKind::Object => Value::Ref(Iri::new(format!("urn:target:{n}"))),
        hqdm_model::PredicateKind::Datatype => Value::String(format!("literal {n}")),
    }
}

/// A builder with every mandatory predicate of `entity_type` set except `skip`.
fn satisfied(entity_type: EntityType, skip: Option<Predicate>) -> Builder {
    let table = RuleTable::hqdm().expect("bundled table resolves");
    let rules = table.rules_for(entity_type).expect("every type has rules");
    rules
        .mandatory()
        .filter(|&p| Some(p) != skip)
        .fold(Builder::new(entity_type, "urn:subject"), |b, p| {
            b.add(p, value_for(p, 0))
        })
}

proptest! {
    #[test]
    fn all_mandatory_set_builds(entity_type in entity_type()) {
        prop_assert!(satisfied(entity_type, None).build().is_ok());
    }

    #[test]
    fn each_missing_mandatory_is_named(entity_type in entity_type(), pick in any::<prop::sample::Index>()) {
        let table = RuleTable::hqdm().expect("bundled table resolves");
        let mandatory: Vec<_> = table.rules_for(entity_type).expect("rules").mandatory().collect();
        prop_assume!(!mandatory.is_empty());
        let missing = mandatory[pick.index(mandatory.len())];
        let err = satisfied(entity_type, Some(missing)).build().unwrap_err();
        prop_assert_eq!(err, BuildError::MissingMandatoryProperty(missing));
    }

    #[test]
    fn present_but_empty_always_fails(
        entity_type in entity_type(),
        pick in any::<prop::sample::Index>(),
        others in prop::collection::vec(any::<bool>(), Predicate::ALL.len()),
    ) {
        let table = RuleTable::hqdm().expect("bundled table resolves");
        let applicable: Vec<_> = table.rules_for(entity_type).expect("rules").applicable().collect();
        let target = applicable[pick.index(applicable.len())];

        // Every other applicable predicate is randomly set or left untouched.
        let mut builder = Builder::new(entity_type, "urn:subject");
        for (i, &p) in applicable.iter().enumerate() {
            if p != target && others[i] {
                builder = builder.add(p, value_for(p, i as u32));
            }
        }
        let builder = builder.add(target, value_for(target, 99)).clear(target);

        prop_assert_eq!(builder.build().unwrap_err(), BuildError::EmptyPropertyValue(target));
    }

    #[test]
    fn setters_accumulate_and_round_trip(
        entity_type in entity_type(),
        pick in any::<prop::sample::Index>(),
        ns in prop::collection::btree_set(0u32..1000, 1..6),
    ) {
        let table = RuleTable::hqdm().expect("bundled table resolves");
        let applicable: Vec<_> = table.rules_for(entity_type).expect("rules").applicable().collect();
        let predicate = applicable[pick.index(applicable.len())];

        let builder = ns
            .iter()
            .fold(satisfied(entity_type, Some(predicate)), |b, &n| b.add(predicate, value_for(predicate, n)));
        let entity = builder.build().expect("lenient build succeeds");

        let expected: BTreeSet<Value> = ns.iter().map(|&n| value_for(predicate, n)).collect();
        let actual: BTreeSet<Value> = entity.values(predicate).iter().cloned().collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(entity.values(predicate).len(), ns.len());
    }

    #[test]
    fn repeated_values_collapse(entity_type in entity_type(), n in 0u32..1000, repeats in 2usize..5) {
        let builder = (0..repeats).fold(Builder::new(entity_type, "urn:subject"), |b, _| {
            b.add(Predicate::MemberOf, value_for(Predicate::MemberOf, n))
        });
        prop_assert_eq!(builder.draft().values(Predicate::MemberOf).len(), 1);
    }
}
