//! HQDM entities as predicate-keyed nodes with data-driven cardinality
//! rules.
//!
//! The `hqdm-model` crate provides the generic entity representation used
//! by every HQDM type (29 entity types over a shared vocabulary of 17
//! predicates), one validating [`Builder`] driven by a resolved
//! [`RuleTable`], and named-setter builders for each type.
//!
//! # Entry Point
//!
//! ```
//! use hqdm_model::{ActivityBuilder, BuildError, Iri, Predicate};
//!
//! let draft = ActivityBuilder::new("urn:ex:activity")
//!     .member_of_kind(Iri::from("urn:ex:kind"))
//!     .part_of_possible_world(Iri::from("urn:ex:world"));
//! assert_eq!(
//!     draft.build().unwrap_err(),
//!     BuildError::MissingMandatoryProperty(Predicate::Causes)
//! );
//!
//! let activity = draft.causes(Iri::from("urn:ex:event")).build()?;
//! assert!(activity.has_value(Predicate::Causes));
//! # Ok::<(), BuildError>(())
//! ```
//!
//! # Rule Table
//!
//! ```
//! use hqdm_model::{EntityType, Multiplicity, Predicate, RuleTable};
//!
//! let table = RuleTable::hqdm()?;
//! assert_eq!(
//!     table.multiplicity(EntityType::Activity, Predicate::PartOf),
//!     Some(Multiplicity::OptionalMulti)
//! );
//! assert_eq!(
//!     table.multiplicity(EntityType::AcceptanceOfOffer, Predicate::PartOf),
//!     Some(Multiplicity::MandatorySingle)
//! );
//! # Ok::<(), hqdm_model::RuleTableError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod builder;
pub mod entity;
pub mod error;
pub mod iri;
pub mod kind;
pub mod predicate;
pub mod rules;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod types;
pub mod value;

pub use builder::typed::*;
pub use builder::{Builder, BuilderConfig, UpperBounds};
pub use entity::{Duplicates, Entity, EntityDraft};
pub use error::{BuildError, RuleTableError};
pub use iri::Iri;
pub use kind::EntityType;
pub use predicate::{Predicate, PredicateKind};
pub use rules::{Multiplicity, RuleTable, TypeRow, TypeRules};
pub use value::Value;

impl RuleTable {
    /// Returns the bundled HQDM rule table, resolved once on first use.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleTableError`] found while resolving the bundled rows.
    /// The conformance suite checks that this never happens.
    pub fn hqdm() -> Result<&'static RuleTable, RuleTableError> {
        static TABLE: std::sync::OnceLock<Result<RuleTable, RuleTableError>> =
            std::sync::OnceLock::new();
        TABLE
            .get_or_init(|| RuleTable::from_rows(types::rows()))
            .as_ref()
            .map_err(Clone::clone)
    }
}
