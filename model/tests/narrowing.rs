//! Subtype narrowing against the bundled table, through the named-setter
//! builders.

use hqdm_model::{
    AcceptanceOfOfferBuilder, AcceptanceOfOfferForGoodsBuilder, ActivityBuilder,
    AgreementExecutionBuilder, BuildError, BuilderConfig, EntityType, Iri, Multiplicity,
    Predicate, RuleTable, ThingBuilder,
};

fn iri(s: &str) -> Iri {
    Iri::from(s)
}

fn activity() -> ActivityBuilder {
    ActivityBuilder::new("urn:activity")
        .member_of_kind(iri("urn:kind"))
        .part_of_possible_world(iri("urn:world"))
        .causes(iri("urn:event"))
}

fn acceptance() -> AcceptanceOfOfferBuilder {
    AcceptanceOfOfferBuilder::new("urn:acceptance")
        .member_of_kind(iri("urn:kind"))
        .part_of_possible_world(iri("urn:world"))
        .causes(iri("urn:agreed"))
        .references(iri("urn:offer"))
}

#[test]
fn minimal_thing_builds() {
    let thing = ThingBuilder::new("urn:id1").build().unwrap();
    assert_eq!(thing.id(), &iri("urn:id1"));
    assert_eq!(thing.entity_type(), EntityType::Thing);
}

#[test]
fn minimal_activity_fails_on_a_mandatory_predicate() {
    let err = ActivityBuilder::new("urn:id2").build().unwrap_err();
    let named = err.predicate().unwrap();
    assert!(matches!(err, BuildError::MissingMandatoryProperty(_)));
    assert!([
        Predicate::MemberOfKind,
        Predicate::PartOfPossibleWorld,
        Predicate::Causes
    ]
    .contains(&named));
}

#[test]
fn activity_does_not_need_part_of() {
    assert!(activity().build().is_ok());
}

#[test]
fn acceptance_of_offer_needs_part_of() {
    assert_eq!(
        acceptance().build().unwrap_err(),
        BuildError::MissingMandatoryProperty(Predicate::PartOf)
    );
    assert!(acceptance().part_of(iri("urn:agree-contract")).build().is_ok());
}

#[test]
fn narrowing_is_inherited_by_sub_subtypes() {
    let table = RuleTable::hqdm().unwrap();
    assert_eq!(
        table.multiplicity(EntityType::AcceptanceOfOfferForGoods, Predicate::PartOf),
        Some(Multiplicity::MandatorySingle)
    );
    let err = AcceptanceOfOfferForGoodsBuilder::new("urn:goods")
        .member_of_kind(iri("urn:kind"))
        .part_of_possible_world(iri("urn:world"))
        .causes(iri("urn:agreed"))
        .references(iri("urn:offer"))
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::MissingMandatoryProperty(Predicate::PartOf));
}

#[test]
fn strict_single_is_enforced_only_where_narrowed() {
    let strict = BuilderConfig::strict();

    let general = activity()
        .with_config(strict)
        .part_of(iri("urn:whole-1"))
        .part_of(iri("urn:whole-2"))
        .build()
        .unwrap();
    assert_eq!(general.values(Predicate::PartOf).len(), 2);

    let err = AgreementExecutionBuilder::new("urn:execution")
        .with_config(strict)
        .member_of_kind(iri("urn:kind"))
        .part_of_possible_world(iri("urn:world"))
        .causes(iri("urn:event"))
        .part_of(iri("urn:process-1"))
        .part_of(iri("urn:process-2"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::TooManyValues {
            predicate: Predicate::PartOf,
            count: 2,
        }
    );
}

#[test]
fn lenient_mode_keeps_the_source_behaviour() {
    let entity = acceptance()
        .part_of(iri("urn:agree-contract-1"))
        .part_of(iri("urn:agree-contract-2"))
        .build()
        .unwrap();
    assert_eq!(entity.values(Predicate::PartOf).len(), 2);
}

#[test]
fn built_entity_is_independent_of_the_builder() {
    let builder = activity();
    let first = builder.build().unwrap();
    let builder = builder.determines(iri("urn:outcome"));
    let second = builder.build().unwrap();
    assert!(!first.has_value(Predicate::Determines));
    assert!(second.has_value(Predicate::Determines));
}
