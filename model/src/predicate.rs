//! The shared predicate vocabulary.
//!
//! Every entity type draws its attribute slots from this one list. A
//! predicate that a type's rule table does not mention is not applicable to
//! that type.

use std::fmt;

use crate::iri::{iris, Iri};

/// Whether a predicate relates an entity to another entity or to a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PredicateKind {
    /// Values are identifiers of other entities.
    Object,
    /// Values are literals.
    Datatype,
}

impl PredicateKind {
    /// Returns `"object"` or `"datatype"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PredicateKind::Object => "object",
            PredicateKind::Datatype => "datatype",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named relationship slot.
///
/// The derived ordering is vocabulary order, which is also the order in
/// which an entity lists its predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Predicate {
    /// Membership of a class.
    MemberOf,
    /// Membership of a kind.
    MemberOfKind,
    /// Subclass to superclass.
    HasSuperclass,
    /// Whole-part, from the part.
    PartOf,
    /// Whole-part, from the whole.
    ConsistsOf,
    /// The possible world an extent belongs to.
    PartOfPossibleWorld,
    /// A state that is a temporal part of a larger extent.
    TemporalPartOf,
    /// Aggregation without a whole-part commitment.
    AggregatedInto,
    /// The event at which an extent begins.
    Beginning,
    /// The event at which an extent ends.
    Ending,
    /// Events brought about by an activity.
    Causes,
    /// Things an activity determines.
    Determines,
    /// Things an activity refers to.
    References,
    /// Participants in an activity or association.
    ConsistsOfParticipant,
    /// The activity or association a participant takes part in.
    ParticipantIn,
    /// A human-readable name.
    EntityName,
    /// The lexical value of a sign.
    #[cfg_attr(feature = "serde", serde(rename = "value_"))]
    Value,
}

impl Predicate {
    /// Every predicate in vocabulary order.
    pub const ALL: [Predicate; 17] = [
        Predicate::MemberOf,
        Predicate::MemberOfKind,
        Predicate::HasSuperclass,
        Predicate::PartOf,
        Predicate::ConsistsOf,
        Predicate::PartOfPossibleWorld,
        Predicate::TemporalPartOf,
        Predicate::AggregatedInto,
        Predicate::Beginning,
        Predicate::Ending,
        Predicate::Causes,
        Predicate::Determines,
        Predicate::References,
        Predicate::ConsistsOfParticipant,
        Predicate::ParticipantIn,
        Predicate::EntityName,
        Predicate::Value,
    ];

    /// The ontology's name for this relationship.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Predicate::MemberOf => "member_of",
            Predicate::MemberOfKind => "member_of_kind",
            Predicate::HasSuperclass => "has_superclass",
            Predicate::PartOf => "part_of",
            Predicate::ConsistsOf => "consists_of",
            Predicate::PartOfPossibleWorld => "part_of_possible_world",
            Predicate::TemporalPartOf => "temporal_part_of",
            Predicate::AggregatedInto => "aggregated_into",
            Predicate::Beginning => "beginning",
            Predicate::Ending => "ending",
            Predicate::Causes => "causes",
            Predicate::Determines => "determines",
            Predicate::References => "references",
            Predicate::ConsistsOfParticipant => "consists_of_participant",
            Predicate::ParticipantIn => "participant_in",
            Predicate::EntityName => "entity_name",
            Predicate::Value => "value_",
        }
    }

    /// Object or datatype.
    #[must_use]
    pub fn kind(self) -> PredicateKind {
        match self {
            Predicate::EntityName | Predicate::Value => PredicateKind::Datatype,
            _ => PredicateKind::Object,
        }
    }

    /// Full IRI in the HQDM namespace.
    #[must_use]
    pub fn iri(self) -> Iri {
        Iri::hqdm(self.label())
    }

    /// XSD range of a datatype predicate, `None` for object predicates.
    #[must_use]
    pub fn datatype(self) -> Option<&'static str> {
        match self.kind() {
            PredicateKind::Datatype => Some(iris::XSD_STRING),
            PredicateKind::Object => None,
        }
    }

    /// Looks up a predicate by label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Predicate> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for p in Predicate::ALL {
            assert_eq!(Predicate::from_label(p.label()), Some(p));
        }
        assert_eq!(Predicate::from_label("no_such_predicate"), None);
    }

    #[test]
    fn all_is_sorted_and_unique() {
        assert!(Predicate::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_names_and_values_are_literal() {
        let literal: Vec<_> = Predicate::ALL
            .iter()
            .filter(|p| p.kind() == PredicateKind::Datatype)
            .map(|p| p.label())
            .collect();
        assert_eq!(literal, ["entity_name", "value_"]);
    }
}
