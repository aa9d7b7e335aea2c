//! Activities.

use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::{Multiplicity::*, TypeRow};

/// Returns the rows for activities.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    vec![
        TypeRow {
            entity_type: EntityType::Activity,
            supertypes: &[EntityType::Individual],
            rules: &[
                (Predicate::MemberOfKind, MandatoryMulti),
                (Predicate::PartOfPossibleWorld, MandatorySingle),
                (Predicate::Causes, MandatoryMulti),
                (Predicate::Determines, OptionalMulti),
                (Predicate::References, OptionalMulti),
                (Predicate::ConsistsOfParticipant, OptionalMulti),
            ],
        },
        TypeRow {
            entity_type: EntityType::SociallyConstructedActivity,
            supertypes: &[EntityType::Activity],
            rules: &[],
        },
    ]
}
