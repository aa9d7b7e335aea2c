//! Entities and their attribute store.
//!
//! An [`EntityDraft`] is the mutable accumulator a builder writes into. A
//! successful build seals it into an [`Entity`], which has no mutating
//! methods. To change a finished entity, turn it back into a draft with
//! [`Entity::into_draft`] and build again.
//!
//! Both keep the distinction between a predicate that was never touched
//! (key absent) and one that is present with no values; validation treats
//! the second as an error for every applicable predicate.

use std::collections::BTreeMap;

use crate::iri::Iri;
use crate::kind::EntityType;
use crate::predicate::Predicate;
use crate::value::Value;

/// What [`EntityDraft::add_value`] does with a value already held under the
/// same predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Duplicates {
    /// Set semantics: a repeated value is dropped.
    #[default]
    Collapse,
    /// Multiset semantics: every added value is kept.
    Keep,
}

/// A typed node under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDraft {
    id: Iri,
    entity_type: EntityType,
    values: BTreeMap<Predicate, Vec<Value>>,
    duplicates: Duplicates,
}

impl EntityDraft {
    /// An empty draft of `entity_type` bound to `id`.
    #[must_use]
    pub fn new(entity_type: EntityType, id: impl Into<Iri>) -> Self {
        Self {
            id: id.into(),
            entity_type,
            values: BTreeMap::new(),
            duplicates: Duplicates::default(),
        }
    }

    /// Sets the duplicate-value policy for later additions.
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// The entity's identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// The entity's type tag.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// The duplicate-value policy in force.
    #[must_use]
    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Appends `value` under `predicate`, creating the collection if absent.
    pub fn add_value(&mut self, predicate: Predicate, value: impl Into<Value>) {
        let value = value.into();
        let slot = self.values.entry(predicate).or_default();
        if self.duplicates == Duplicates::Collapse && slot.contains(&value) {
            return;
        }
        slot.push(value);
    }

    /// Records `predicate` as present without adding a value.
    pub fn declare(&mut self, predicate: Predicate) {
        self.values.entry(predicate).or_default();
    }

    /// Drops every value under `predicate` but keeps it present.
    ///
    /// Does nothing when the predicate was never set.
    pub fn clear_values(&mut self, predicate: Predicate) {
        if let Some(slot) = self.values.get_mut(&predicate) {
            slot.clear();
        }
    }

    /// True when `predicate` is present, even with no values.
    #[must_use]
    pub fn has_value(&self, predicate: Predicate) -> bool {
        self.values.contains_key(&predicate)
    }

    /// Values under `predicate`; empty when absent or cleared.
    #[must_use]
    pub fn values(&self, predicate: Predicate) -> &[Value] {
        match self.values.get(&predicate) {
            Some(values) => values,
            None => &[],
        }
    }

    /// The first value under `predicate`.
    #[must_use]
    pub fn value(&self, predicate: Predicate) -> Option<&Value> {
        self.values(predicate).first()
    }

    /// Present predicates in vocabulary order.
    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.values.keys().copied()
    }

    pub(crate) fn seal(&self) -> Entity {
        Entity {
            id: self.id.clone(),
            entity_type: self.entity_type,
            values: self
                .values
                .iter()
                .map(|(&p, values)| (p, values.clone().into_boxed_slice()))
                .collect(),
        }
    }
}

/// A finished, validated entity.
///
/// Only [`Builder::build`](crate::Builder::build) creates one. Its
/// attributes cannot change afterwards, so it can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    id: Iri,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    entity_type: EntityType,
    values: BTreeMap<Predicate, Box<[Value]>>,
}

impl Entity {
    /// The entity's identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// The entity's type tag.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// True when `predicate` is present.
    #[must_use]
    pub fn has_value(&self, predicate: Predicate) -> bool {
        self.values.contains_key(&predicate)
    }

    /// Values under `predicate`; empty when absent.
    #[must_use]
    pub fn values(&self, predicate: Predicate) -> &[Value] {
        match self.values.get(&predicate) {
            Some(values) => values,
            None => &[],
        }
    }

    /// The first value under `predicate`.
    #[must_use]
    pub fn value(&self, predicate: Predicate) -> Option<&Value> {
        self.values(predicate).first()
    }

    /// Present predicates in vocabulary order.
    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.values.keys().copied()
    }

    /// Every identifier this entity points at, with the predicate it is held
    /// under. Existence of the targets is not checked here.
    pub fn references(&self) -> impl Iterator<Item = (Predicate, &Iri)> + '_ {
        self.values
            .iter()
            .flat_map(|(&p, values)| values.iter().filter_map(move |v| v.as_iri().map(|iri| (p, iri))))
    }

    /// A new draft holding the same attributes.
    #[must_use]
    pub fn into_draft(self) -> EntityDraft {
        EntityDraft {
            id: self.id,
            entity_type: self.entity_type,
            values: self
                .values
                .into_iter()
                .map(|(p, values)| (p, values.into_vec()))
                .collect(),
            duplicates: Duplicates::default(),
        }
    }
}

impl From<&Entity> for Value {
    fn from(entity: &Entity) -> Self {
        Value::Ref(entity.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_distinct() {
        let mut draft = EntityDraft::new(EntityType::Activity, "urn:a");
        assert!(!draft.has_value(Predicate::Causes));

        draft.declare(Predicate::Causes);
        assert!(draft.has_value(Predicate::Causes));
        assert!(draft.values(Predicate::Causes).is_empty());
    }

    #[test]
    fn clear_keeps_the_key() {
        let mut draft = EntityDraft::new(EntityType::Activity, "urn:a");
        draft.add_value(Predicate::Causes, Iri::from("urn:e"));
        draft.clear_values(Predicate::Causes);
        assert!(draft.has_value(Predicate::Causes));
        assert_eq!(draft.value(Predicate::Causes), None);

        draft.clear_values(Predicate::Determines);
        assert!(!draft.has_value(Predicate::Determines));
    }

    #[test]
    fn duplicates_collapse_by_default() {
        let mut draft = EntityDraft::new(EntityType::Thing, "urn:t");
        draft.add_value(Predicate::EntityName, "x");
        draft.add_value(Predicate::EntityName, "x");
        assert_eq!(draft.values(Predicate::EntityName).len(), 1);

        let mut draft = draft.with_duplicates(Duplicates::Keep);
        draft.add_value(Predicate::EntityName, "x");
        assert_eq!(draft.values(Predicate::EntityName).len(), 2);
    }

    #[test]
    fn references_skip_literals() {
        let mut draft = EntityDraft::new(EntityType::Sign, "urn:s");
        draft.add_value(Predicate::Value, "hello");
        draft.add_value(Predicate::MemberOfKind, Iri::from("urn:k"));
        let entity = draft.seal();
        let refs: Vec<_> = entity.references().collect();
        assert_eq!(refs, [(Predicate::MemberOfKind, &Iri::from("urn:k"))]);
    }

    #[test]
    fn into_draft_preserves_attributes() {
        let mut draft = EntityDraft::new(EntityType::Thing, "urn:t");
        draft.add_value(Predicate::MemberOf, Iri::from("urn:c"));
        let entity = draft.seal();
        let again = entity.clone().into_draft();
        assert_eq!(again, draft);
        assert_eq!(again.seal(), entity);
    }
}
