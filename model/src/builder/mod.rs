//! The builder and its validation routine.
//!
//! One [`Builder`] serves every entity type: the type's resolved rules in
//! the [`RuleTable`] decide what `build` checks. The per-type builders in
//! [`typed`] are thin named-setter wrappers around it.
//!
//! `build` runs these passes in order and stops at the first violation:
//!
//! 1. every applicable predicate that is present must hold a value;
//! 2. every mandatory predicate must be present;
//! 3. under [`UpperBounds::Strict`] only: no inapplicable predicates, no
//!    more than one value for a single-valued rule, and values of the
//!    predicate's kind.
//!
//! Within a pass, predicates are visited in declaration order.

pub mod typed;

use tracing::debug;

use crate::entity::{Duplicates, Entity, EntityDraft};
use crate::error::BuildError;
use crate::iri::Iri;
use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::rules::RuleTable;
use crate::value::Value;

/// Whether single-valued rules are enforced as an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpperBounds {
    /// Only lower bounds are checked. A "single" predicate may hold several
    /// values.
    #[default]
    Lenient,
    /// Upper bounds, applicability and value kinds are checked as well.
    Strict,
}

/// Builder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Upper-bound policy.
    pub upper_bounds: UpperBounds,
    /// Duplicate-value policy.
    pub duplicates: Duplicates,
}

impl BuilderConfig {
    /// Strict bounds, set semantics.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            upper_bounds: UpperBounds::Strict,
            duplicates: Duplicates::Collapse,
        }
    }
}

/// Accumulates attributes for one entity and validates them on
/// [`build`](Builder::build).
#[derive(Debug, Clone)]
pub struct Builder {
    draft: EntityDraft,
    config: BuilderConfig,
}

impl Builder {
    /// A builder for a fresh, empty entity of `entity_type`.
    #[must_use]
    pub fn new(entity_type: EntityType, id: impl Into<Iri>) -> Self {
        Self::from_draft(EntityDraft::new(entity_type, id), BuilderConfig::default())
    }

    /// Resumes building from an existing draft.
    #[must_use]
    pub fn from_draft(draft: EntityDraft, config: BuilderConfig) -> Self {
        Self {
            draft: draft.with_duplicates(config.duplicates),
            config,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(self, config: BuilderConfig) -> Self {
        Self::from_draft(self.draft, config)
    }

    /// Adds one value under `predicate`.
    #[must_use]
    pub fn add(mut self, predicate: Predicate, value: impl Into<Value>) -> Self {
        self.draft.add_value(predicate, value);
        self
    }

    /// Records `predicate` as present with no values.
    #[must_use]
    pub fn declare(mut self, predicate: Predicate) -> Self {
        self.draft.declare(predicate);
        self
    }

    /// Drops the values under `predicate`, keeping it present.
    #[must_use]
    pub fn clear(mut self, predicate: Predicate) -> Self {
        self.draft.clear_values(predicate);
        self
    }

    /// The draft so far.
    #[must_use]
    pub fn draft(&self) -> &EntityDraft {
        &self.draft
    }

    /// The configuration in force.
    #[must_use]
    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    /// Validates against the bundled table and returns the sealed entity.
    ///
    /// The builder is left untouched, so a rejected build can be fixed up
    /// and retried.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found.
    pub fn build(&self) -> Result<Entity, BuildError> {
        self.build_against(RuleTable::hqdm()?)
    }

    /// Validates against `table` and returns the sealed entity.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found.
    pub fn build_against(&self, table: &RuleTable) -> Result<Entity, BuildError> {
        match validate(&self.draft, table, self.config) {
            Ok(()) => {
                debug!(
                    id = %self.draft.id(),
                    entity_type = %self.draft.entity_type(),
                    "entity built"
                );
                Ok(self.draft.seal())
            }
            Err(err) => {
                debug!(
                    id = %self.draft.id(),
                    entity_type = %self.draft.entity_type(),
                    error = %err,
                    "entity rejected"
                );
                Err(err)
            }
        }
    }
}

/// Checks `draft` against its type's rules in `table`.
///
/// # Errors
///
/// Returns the first violation found; see the module docs for the order.
pub fn validate(
    draft: &EntityDraft,
    table: &RuleTable,
    config: BuilderConfig,
) -> Result<(), BuildError> {
    let entity_type = draft.entity_type();
    let rules = table
        .rules_for(entity_type)
        .ok_or(BuildError::UnknownType(entity_type))?;

    for predicate in rules.applicable() {
        if draft.has_value(predicate) && draft.values(predicate).is_empty() {
            return Err(BuildError::EmptyPropertyValue(predicate));
        }
    }

    for predicate in rules.mandatory() {
        if !draft.has_value(predicate) {
            return Err(BuildError::MissingMandatoryProperty(predicate));
        }
    }

    if config.upper_bounds == UpperBounds::Strict {
        if let Some(predicate) = draft.predicates().find(|&p| !rules.is_applicable(p)) {
            return Err(BuildError::InapplicableProperty {
                predicate,
                entity_type,
            });
        }
        for (predicate, multiplicity) in rules.iter() {
            let values = draft.values(predicate);
            if let Some(max) = multiplicity.max() {
                if values.len() > max {
                    return Err(BuildError::TooManyValues {
                        predicate,
                        count: values.len(),
                    });
                }
            }
            if values.iter().any(|v| v.kind() != predicate.kind()) {
                return Err(BuildError::WrongValueKind {
                    predicate,
                    expected: predicate.kind(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::from(s)
    }

    fn complete_activity() -> Builder {
        Builder::new(EntityType::Activity, "urn:act")
            .add(Predicate::MemberOfKind, iri("urn:kind"))
            .add(Predicate::PartOfPossibleWorld, iri("urn:world"))
            .add(Predicate::Causes, iri("urn:event"))
    }

    #[test]
    fn thing_needs_nothing() {
        let entity = Builder::new(EntityType::Thing, "urn:t").build().unwrap();
        assert_eq!(entity.entity_type(), EntityType::Thing);
        assert_eq!(entity.predicates().count(), 0);
    }

    #[test]
    fn bare_activity_reports_first_mandatory() {
        let err = Builder::new(EntityType::Activity, "urn:act").build().unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingMandatoryProperty(Predicate::PartOfPossibleWorld)
        );
    }

    #[test]
    fn complete_activity_builds() {
        let entity = complete_activity().build().unwrap();
        assert_eq!(entity.values(Predicate::Causes), [Value::Ref(iri("urn:event"))]);
    }

    #[test]
    fn empty_wins_over_missing() {
        let err = Builder::new(EntityType::Activity, "urn:act")
            .declare(Predicate::Determines)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::EmptyPropertyValue(Predicate::Determines));
    }

    #[test]
    fn rejected_build_can_be_retried() {
        let builder = Builder::new(EntityType::Activity, "urn:act")
            .add(Predicate::MemberOfKind, iri("urn:kind"))
            .add(Predicate::PartOfPossibleWorld, iri("urn:world"));
        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::MissingMandatoryProperty(Predicate::Causes)
        );
        let builder = builder.add(Predicate::Causes, iri("urn:event"));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn lenient_ignores_upper_bounds() {
        let entity = complete_activity()
            .add(Predicate::PartOfPossibleWorld, iri("urn:other-world"))
            .add(Predicate::Value, "not for activities")
            .build()
            .unwrap();
        assert_eq!(entity.values(Predicate::PartOfPossibleWorld).len(), 2);
    }

    #[test]
    fn strict_checks_upper_bounds() {
        let err = complete_activity()
            .with_config(BuilderConfig::strict())
            .add(Predicate::PartOfPossibleWorld, iri("urn:other-world"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::TooManyValues {
                predicate: Predicate::PartOfPossibleWorld,
                count: 2,
            }
        );
    }

    #[test]
    fn strict_checks_applicability_and_kind() {
        let strict = complete_activity().with_config(BuilderConfig::strict());
        assert_eq!(
            strict.clone().add(Predicate::Value, "x").build().unwrap_err(),
            BuildError::InapplicableProperty {
                predicate: Predicate::Value,
                entity_type: EntityType::Activity,
            }
        );
        assert_eq!(
            strict.add(Predicate::Causes, "a literal").build().unwrap_err(),
            BuildError::WrongValueKind {
                predicate: Predicate::Causes,
                expected: crate::predicate::PredicateKind::Object,
            }
        );
    }

    #[test]
    fn unknown_type_is_reported() {
        let table = RuleTable::from_rows(Vec::new()).unwrap();
        let err = Builder::new(EntityType::Thing, "urn:t")
            .build_against(&table)
            .unwrap_err();
        assert_eq!(err, BuildError::UnknownType(EntityType::Thing));
    }
}
