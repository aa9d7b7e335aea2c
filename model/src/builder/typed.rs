//! Named-setter builders, one per entity type.
//!
//! Each wrapper exposes a setter for exactly the predicates its type
//! carries, named after the relationship. All validation happens in the
//! shared [`Builder`].
//!
//! ```
//! use hqdm_model::{AcceptanceOfOfferBuilder, BuildError, Iri, Predicate};
//!
//! let acceptance = AcceptanceOfOfferBuilder::new("urn:ex:accept")
//!     .member_of_kind(Iri::from("urn:ex:kind-of-acceptance"))
//!     .part_of_possible_world(Iri::from("urn:ex:world"))
//!     .causes(Iri::from("urn:ex:agreed"))
//!     .references(Iri::from("urn:ex:offer"));
//!
//! assert_eq!(
//!     acceptance.build().unwrap_err(),
//!     BuildError::MissingMandatoryProperty(Predicate::PartOf)
//! );
//! ```

use crate::builder::{Builder, BuilderConfig};
use crate::entity::Entity;
use crate::error::BuildError;
use crate::iri::Iri;
use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::value::Value;

macro_rules! typed_builders {
    ($(
        $(#[$meta:meta])*
        $name:ident => $entity_type:ident {
            $($setter:ident => $predicate:ident,)*
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone)]
            pub struct $name(Builder);

            impl $name {
                /// The entity type this builder produces.
                pub const ENTITY_TYPE: EntityType = EntityType::$entity_type;

                /// Predicates with a setter here, in declaration order.
                pub const PREDICATES: &'static [Predicate] = &[$(Predicate::$predicate),*];

                /// Starts an empty entity bound to `id`.
                #[must_use]
                pub fn new(id: impl Into<Iri>) -> Self {
                    Self(Builder::new(EntityType::$entity_type, id))
                }

                /// Replaces the configuration.
                #[must_use]
                pub fn with_config(self, config: BuilderConfig) -> Self {
                    Self(self.0.with_config(config))
                }

                $(
                    #[doc = concat!("Adds a `", stringify!($setter), "` value.")]
                    #[must_use]
                    pub fn $setter(self, value: impl Into<Value>) -> Self {
                        Self(self.0.add(Predicate::$predicate, value))
                    }
                )*

                /// Records `predicate` as present with no values.
                #[must_use]
                pub fn declare(self, predicate: Predicate) -> Self {
                    Self(self.0.declare(predicate))
                }

                /// Drops the values under `predicate`, keeping it present.
                #[must_use]
                pub fn clear(self, predicate: Predicate) -> Self {
                    Self(self.0.clear(predicate))
                }

                /// The underlying generic builder.
                #[must_use]
                pub fn builder(&self) -> &Builder {
                    &self.0
                }

                /// Validates and returns the sealed entity.
                ///
                /// # Errors
                ///
                /// Returns the first [`BuildError`] found.
                pub fn build(&self) -> Result<Entity, BuildError> {
                    self.0.build()
                }
            }

            impl From<$name> for Builder {
                fn from(builder: $name) -> Builder {
                    builder.0
                }
            }
        )*

        /// Every typed builder's entity type and setter predicates.
        pub const SURFACES: &[(EntityType, &[Predicate])] = &[
            $((EntityType::$entity_type, $name::PREDICATES),)*
        ];
    };
}

typed_builders! {
    /// Builds a thing.
    ThingBuilder => Thing {
        member_of => MemberOf,
        entity_name => EntityName,
    }
    /// Builds an abstract object.
    AbstractObjectBuilder => AbstractObject {
        member_of => MemberOf,
        entity_name => EntityName,
    }
    /// Builds a class.
    ClassBuilder => Class {
        member_of => MemberOf,
        entity_name => EntityName,
        has_superclass => HasSuperclass,
    }
    /// Builds a kind of activity.
    KindOfActivityBuilder => KindOfActivity {
        member_of => MemberOf,
        entity_name => EntityName,
        has_superclass => HasSuperclass,
    }
    /// Builds a kind of association.
    KindOfAssociationBuilder => KindOfAssociation {
        member_of => MemberOf,
        entity_name => EntityName,
        has_superclass => HasSuperclass,
    }
    /// Builds a role.
    RoleBuilder => Role {
        member_of => MemberOf,
        entity_name => EntityName,
        has_superclass => HasSuperclass,
    }
    /// Builds a spatio temporal extent.
    SpatioTemporalExtentBuilder => SpatioTemporalExtent {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
    }
    /// Builds an event.
    EventBuilder => Event {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
    }
    /// Builds a point in time.
    PointInTimeBuilder => PointInTime {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
    }
    /// Builds a state.
    StateBuilder => State {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
    }
    /// Builds an individual.
    IndividualBuilder => Individual {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
    }
    /// Builds a possible world.
    PossibleWorldBuilder => PossibleWorld {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
    }
    /// Builds a participant.
    ParticipantBuilder => Participant {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        participant_in => ParticipantIn,
    }
    /// Builds a party.
    PartyBuilder => Party {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
    }
    /// Builds a physical object.
    PhysicalObjectBuilder => PhysicalObject {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
    }
    /// Builds a person.
    PersonBuilder => Person {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
    }
    /// Builds a sign.
    SignBuilder => Sign {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        value_ => Value,
    }
    /// Builds an activity.
    ActivityBuilder => Activity {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds a socially constructed activity.
    SociallyConstructedActivityBuilder => SociallyConstructedActivity {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an agreement process.
    AgreementProcessBuilder => AgreementProcess {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds a reaching agreement.
    ReachingAgreementBuilder => ReachingAgreement {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an agree contract.
    AgreeContractBuilder => AgreeContract {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an agreement execution.
    AgreementExecutionBuilder => AgreementExecution {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds a contract execution.
    ContractExecutionBuilder => ContractExecution {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an offer.
    OfferBuilder => Offer {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an acceptance of offer.
    AcceptanceOfOfferBuilder => AcceptanceOfOffer {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an acceptance of offer for goods.
    AcceptanceOfOfferForGoodsBuilder => AcceptanceOfOfferForGoods {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        causes => Causes,
        determines => Determines,
        references => References,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an association.
    AssociationBuilder => Association {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        consists_of_participant => ConsistsOfParticipant,
    }
    /// Builds an ownership.
    OwnershipBuilder => Ownership {
        member_of => MemberOf,
        entity_name => EntityName,
        part_of => PartOf,
        consists_of => ConsistsOf,
        part_of_possible_world => PartOfPossibleWorld,
        temporal_part_of => TemporalPartOf,
        aggregated_into => AggregatedInto,
        beginning => Beginning,
        ending => Ending,
        member_of_kind => MemberOfKind,
        consists_of_participant => ConsistsOfParticipant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_builder_per_type() {
        assert_eq!(SURFACES.len(), EntityType::ALL.len());
        for (surface, entity_type) in SURFACES.iter().zip(EntityType::ALL) {
            assert_eq!(surface.0, entity_type);
        }
    }

    #[test]
    fn setters_accumulate() {
        let entity = ThingBuilder::new("urn:t")
            .entity_name("first")
            .entity_name("second")
            .build()
            .unwrap();
        assert_eq!(
            entity.values(Predicate::EntityName),
            [Value::from("first"), Value::from("second")]
        );
    }

    #[test]
    fn entity_references_are_accepted() {
        let world = PossibleWorldBuilder::new("urn:w")
            .part_of_possible_world(Iri::from("urn:w"))
            .build()
            .unwrap();
        let event = EventBuilder::new("urn:e")
            .part_of_possible_world(&world)
            .build()
            .unwrap();
        assert_eq!(
            event.value(Predicate::PartOfPossibleWorld),
            Some(&Value::Ref(Iri::from("urn:w")))
        );
    }
}
