//! Entity types.
//!
//! [`EntityType`] is the type tag carried by every entity. What a type
//! requires lives in the rule table (see [`crate::rules`]), not here.

use std::fmt;

use crate::entity::EntityDraft;
use crate::iri::Iri;

/// The type tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityType {
    /// Anything that exists. Root of the hierarchy.
    Thing,
    /// A thing that does not exist in space or time.
    AbstractObject,
    /// An abstract object with members.
    Class,
    /// A class whose members are activities of one kind.
    KindOfActivity,
    /// A class whose members are associations of one kind.
    KindOfAssociation,
    /// A class whose members are participants playing one part.
    Role,
    /// A thing that exists in space and time.
    SpatioTemporalExtent,
    /// A spatio-temporal extent with zero duration.
    Event,
    /// An event that is the whole of space at an instant.
    PointInTime,
    /// A spatio-temporal extent that is a temporal part of something.
    State,
    /// A state that is the whole life of something.
    Individual,
    /// An individual that is a complete spatio-temporal history.
    PossibleWorld,
    /// A state of something taking part in an activity or association.
    Participant,
    /// A state of a person or organization able to enter agreements.
    Party,
    /// An individual made of matter.
    PhysicalObject,
    /// A physical object that is a human being and a party.
    Person,
    /// An individual that stands for something by its lexical value.
    Sign,
    /// An individual consisting of participants that causes events.
    Activity,
    /// An activity that is only what it is by agreement.
    SociallyConstructedActivity,
    /// An activity consisting of reaching and executing an agreement.
    AgreementProcess,
    /// The part of an agreement process where the agreement is made.
    ReachingAgreement,
    /// Reaching an agreement that is a contract.
    AgreeContract,
    /// The part of an agreement process where the agreement is carried out.
    AgreementExecution,
    /// Executing an agreement that is a contract.
    ContractExecution,
    /// An activity proposing an exchange.
    Offer,
    /// Accepting an offer, within the reaching of one agreement.
    AcceptanceOfOffer,
    /// Accepting an offer of goods.
    AcceptanceOfOfferForGoods,
    /// An individual consisting of participants in a relationship.
    Association,
    /// An association between an owner and what is owned.
    Ownership,
}

impl EntityType {
    /// Every bundled entity type, roots first.
    pub const ALL: [EntityType; 29] = [
        EntityType::Thing,
        EntityType::AbstractObject,
        EntityType::Class,
        EntityType::KindOfActivity,
        EntityType::KindOfAssociation,
        EntityType::Role,
        EntityType::SpatioTemporalExtent,
        EntityType::Event,
        EntityType::PointInTime,
        EntityType::State,
        EntityType::Individual,
        EntityType::PossibleWorld,
        EntityType::Participant,
        EntityType::Party,
        EntityType::PhysicalObject,
        EntityType::Person,
        EntityType::Sign,
        EntityType::Activity,
        EntityType::SociallyConstructedActivity,
        EntityType::AgreementProcess,
        EntityType::ReachingAgreement,
        EntityType::AgreeContract,
        EntityType::AgreementExecution,
        EntityType::ContractExecution,
        EntityType::Offer,
        EntityType::AcceptanceOfOffer,
        EntityType::AcceptanceOfOfferForGoods,
        EntityType::Association,
        EntityType::Ownership,
    ];

    /// The ontology's name for this type.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntityType::Thing => "thing",
            EntityType::AbstractObject => "abstract_object",
            EntityType::Class => "class",
            EntityType::KindOfActivity => "kind_of_activity",
            EntityType::KindOfAssociation => "kind_of_association",
            EntityType::Role => "role",
            EntityType::SpatioTemporalExtent => "spatio_temporal_extent",
            EntityType::Event => "event",
            EntityType::PointInTime => "point_in_time",
            EntityType::State => "state",
            EntityType::Individual => "individual",
            EntityType::PossibleWorld => "possible_world",
            EntityType::Participant => "participant",
            EntityType::Party => "party",
            EntityType::PhysicalObject => "physical_object",
            EntityType::Person => "person",
            EntityType::Sign => "sign",
            EntityType::Activity => "activity",
            EntityType::SociallyConstructedActivity => "socially_constructed_activity",
            EntityType::AgreementProcess => "agreement_process",
            EntityType::ReachingAgreement => "reaching_agreement",
            EntityType::AgreeContract => "agree_contract",
            EntityType::AgreementExecution => "agreement_execution",
            EntityType::ContractExecution => "contract_execution",
            EntityType::Offer => "offer",
            EntityType::AcceptanceOfOffer => "acceptance_of_offer",
            EntityType::AcceptanceOfOfferForGoods => "acceptance_of_offer_for_goods",
            EntityType::Association => "association",
            EntityType::Ownership => "ownership",
        }
    }

    /// Full IRI in the HQDM namespace.
    #[must_use]
    pub fn iri(self) -> Iri {
        Iri::hqdm(self.label())
    }

    /// Looks up a type by label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<EntityType> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    /// Creates an empty entity of this type bound to `id`.
    #[must_use]
    pub fn create(self, id: impl Into<Iri>) -> EntityDraft {
        EntityDraft::new(self, id)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for t in EntityType::ALL {
            assert_eq!(EntityType::from_label(t.label()), Some(t));
        }
    }

    #[test]
    fn create_tags_the_draft() {
        let draft = EntityType::Offer.create("urn:offer:1");
        assert_eq!(draft.entity_type(), EntityType::Offer);
        assert_eq!(draft.id().as_str(), "urn:offer:1");
        assert_eq!(draft.predicates().count(), 0);
    }

    #[test]
    fn multi_word_labels_are_snake_case() {
        assert_eq!(
            EntityType::AcceptanceOfOfferForGoods.label(),
            "acceptance_of_offer_for_goods"
        );
        assert_eq!(EntityType::SpatioTemporalExtent.label(), "spatio_temporal_extent");
    }
}
