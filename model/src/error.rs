//! Error types.

use thiserror::Error;

use crate::kind::EntityType;
use crate::predicate::{Predicate, PredicateKind};
use crate::rules::Multiplicity;

/// Why [`Builder::build`](crate::Builder::build) rejected an entity.
///
/// Exactly one violation is reported per build: the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A mandatory predicate was never set.
    #[error("mandatory property not set: {0}")]
    MissingMandatoryProperty(Predicate),
    /// A predicate is recorded as present but holds no values.
    #[error("property present with no values: {0}")]
    EmptyPropertyValue(Predicate),
    /// More values than a single-valued rule allows. Strict mode only.
    #[error("property {predicate} allows one value, found {count}")]
    TooManyValues {
        /// The over-filled predicate.
        predicate: Predicate,
        /// How many values it holds.
        count: usize,
    },
    /// A predicate the type does not carry. Strict mode only.
    #[error("property {predicate} does not apply to {entity_type}")]
    InapplicableProperty {
        /// The stray predicate.
        predicate: Predicate,
        /// The entity's type.
        entity_type: EntityType,
    },
    /// A literal under an object predicate or a reference under a datatype
    /// predicate. Strict mode only.
    #[error("property {predicate} expects {expected} values")]
    WrongValueKind {
        /// The offending predicate.
        predicate: Predicate,
        /// The kind the predicate requires.
        expected: PredicateKind,
    },
    /// The rule table has no row for the entity's type.
    #[error("no cardinality rules for entity type {0}")]
    UnknownType(EntityType),
    /// The rule table could not be assembled.
    #[error(transparent)]
    RuleTable(#[from] RuleTableError),
}

impl BuildError {
    /// The predicate the violation is about, if any.
    #[must_use]
    pub fn predicate(&self) -> Option<Predicate> {
        match self {
            BuildError::MissingMandatoryProperty(p) | BuildError::EmptyPropertyValue(p) => Some(*p),
            BuildError::TooManyValues { predicate, .. }
            | BuildError::InapplicableProperty { predicate, .. }
            | BuildError::WrongValueKind { predicate, .. } => Some(*predicate),
            BuildError::UnknownType(_) | BuildError::RuleTable(_) => None,
        }
    }
}

/// Why a set of [`TypeRow`](crate::rules::TypeRow)s could not be assembled
/// into a [`RuleTable`](crate::RuleTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    /// Two rows for one type.
    #[error("duplicate row for {0}")]
    DuplicateRow(EntityType),
    /// One row declares a predicate twice.
    #[error("{entity_type} declares {predicate} more than once")]
    DuplicateRule {
        /// The row's type.
        entity_type: EntityType,
        /// The repeated predicate.
        predicate: Predicate,
    },
    /// A supertype with no row of its own.
    #[error("{entity_type} names supertype {supertype}, which has no row")]
    UnknownSupertype {
        /// The row's type.
        entity_type: EntityType,
        /// The missing supertype.
        supertype: EntityType,
    },
    /// The supertype graph loops back through this type.
    #[error("supertype cycle through {0}")]
    Cycle(EntityType),
    /// A subtype loosens what an ancestor requires.
    #[error("{entity_type} widens {predicate} from {inherited} to {declared}")]
    Widening {
        /// The row's type.
        entity_type: EntityType,
        /// The widened predicate.
        predicate: Predicate,
        /// The combined ancestor rule.
        inherited: Multiplicity,
        /// The row's looser rule.
        declared: Multiplicity,
    },
}
