//! Spatio-temporal extents: events, states, individuals, and the things
//! that participate in activities.
//!
//! Every extent belongs to at least one possible world; events belong to
//! exactly one.

use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::{Multiplicity::*, TypeRow};

/// Returns the rows for the spatio-temporal branch.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    vec![
        TypeRow {
            entity_type: EntityType::SpatioTemporalExtent,
            supertypes: &[EntityType::Thing],
            rules: &[
                (Predicate::PartOf, OptionalMulti),
                (Predicate::ConsistsOf, OptionalMulti),
                (Predicate::PartOfPossibleWorld, MandatoryMulti),
                (Predicate::TemporalPartOf, OptionalMulti),
                (Predicate::AggregatedInto, OptionalMulti),
                (Predicate::Beginning, OptionalSingle),
                (Predicate::Ending, OptionalSingle),
            ],
        },
        TypeRow {
            entity_type: EntityType::Event,
            supertypes: &[EntityType::SpatioTemporalExtent],
            rules: &[(Predicate::PartOfPossibleWorld, MandatorySingle)],
        },
        TypeRow {
            entity_type: EntityType::PointInTime,
            supertypes: &[EntityType::Event],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::State,
            supertypes: &[EntityType::SpatioTemporalExtent],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Individual,
            supertypes: &[EntityType::State],
            rules: &[(Predicate::MemberOfKind, OptionalMulti)],
        },
        TypeRow {
            entity_type: EntityType::PossibleWorld,
            supertypes: &[EntityType::Individual],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Participant,
            supertypes: &[EntityType::State],
            rules: &[
                (Predicate::MemberOfKind, MandatoryMulti),
                (Predicate::ParticipantIn, OptionalMulti),
            ],
        },
        TypeRow {
            entity_type: EntityType::Party,
            supertypes: &[EntityType::State],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::PhysicalObject,
            supertypes: &[EntityType::Individual],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Person,
            supertypes: &[EntityType::PhysicalObject, EntityType::Party],
            rules: &[],
        },
        TypeRow {
            entity_type: EntityType::Sign,
            supertypes: &[EntityType::Individual],
            rules: &[(Predicate::Value, MandatorySingle)],
        },
    ]
}
