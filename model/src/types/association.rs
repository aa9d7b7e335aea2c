//! Associations.

use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::{Multiplicity::*, TypeRow};

/// Returns the rows for associations.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    vec![
        TypeRow {
            entity_type: EntityType::Association,
            supertypes: &[EntityType::Individual],
            rules: &[
                (Predicate::MemberOfKind, MandatoryMulti),
                (Predicate::ConsistsOfParticipant, MandatoryMulti),
            ],
        },
        TypeRow {
            entity_type: EntityType::Ownership,
            supertypes: &[EntityType::Association],
            rules: &[],
        },
    ]
}
