//! Agreements, offers and their acceptance.
//!
//! The sub-activities of an agreement process are each part of exactly one
//! whole, where a general activity may be part of any number.

use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::{Multiplicity::*, TypeRow};

/// Returns the rows for the agreement branch.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    vec![
        TypeRow {
            entity_type: EntityType::AgreementProcess,
            supertypes: &[EntityType::SociallyConstructedActivity],
            rules: &[(Predicate::ConsistsOf, MandatoryMulti)],
        },
        TypeRow {
            entity_type: EntityType::ReachingAgreement,
            supertypes: &[EntityType::SociallyConstructedActivity],
            rules: &[(Predicate::PartOf, MandatorySingle)],
        },
        TypeRow {
            entity_type: EntityType::AgreeContract,
            supertypes: &[EntityType::ReachingAgreement],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::AgreementExecution,
            supertypes: &[EntityType::SociallyConstructedActivity],
            rules: &[(Predicate::PartOf, MandatorySingle)],
        },
        TypeRow {
            entity_type: EntityType::ContractExecution,
            supertypes: &[EntityType::AgreementExecution],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Offer,
            supertypes: &[EntityType::SociallyConstructedActivity],
            rules: &[(Predicate::PartOf, OptionalSingle)],
        },
        TypeRow {
            entity_type: EntityType::AcceptanceOfOffer,
            supertypes: &[EntityType::SociallyConstructedActivity],
            rules: &[
                (Predicate::PartOf, MandatorySingle),
                (Predicate::Causes, MandatorySingle),
                (Predicate::References, MandatorySingle),
            ],
        },
        TypeRow {
            entity_type: EntityType::AcceptanceOfOfferForGoods,
            supertypes: &[EntityType::AcceptanceOfOffer],
            rules: &[],
        },
    ]
}
