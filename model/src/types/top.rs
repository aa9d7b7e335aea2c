//! `thing` and the abstract branch: classes and kinds.
//!
//! Thing declares no mandatory predicates, so an entity of any type can
//! always be named and classified without further commitment.

use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::{Multiplicity::*, TypeRow};

/// Returns the rows for the top of the hierarchy.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    vec![
        TypeRow {
            entity_type: EntityType::Thing,
            supertypes: &[],
            rules: &[
                (Predicate::MemberOf, OptionalMulti),
                (Predicate::EntityName, OptionalMulti),
            ],
        },
        TypeRow {
            entity_type: EntityType::AbstractObject,
            supertypes: &[EntityType::Thing],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Class,
            supertypes: &[EntityType::AbstractObject],
            rules: &[(Predicate::HasSuperclass, OptionalMulti)],
        },
        TypeRow {
            entity_type: EntityType::KindOfActivity,
            supertypes: &[EntityType::Class],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::KindOfAssociation,
            supertypes: &[EntityType::Class],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Role,
            supertypes: &[EntityType::Class],
            rules: &[],
        },
    ]
}
