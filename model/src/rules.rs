//! Cardinality rule tables.
//!
//! Each entity type is described by one [`TypeRow`]: its direct supertypes
//! and the rules it declares itself. [`RuleTable::from_rows`] walks the
//! supertype graph and produces, per type, the complete ordered list of
//! rules to enforce ([`TypeRules`]). A subtype may narrow what it inherits
//! but never widen it.
//!
//! The bundled table is [`RuleTable::hqdm()`](crate::RuleTable::hqdm); the
//! rows themselves live in [`crate::types`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::trace;

use crate::error::RuleTableError;
use crate::kind::EntityType;
use crate::predicate::Predicate;

/// How many values a predicate may or must carry.
///
/// A predicate missing from a type's resolved rules is not applicable to
/// that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Multiplicity {
    /// Exactly one.
    MandatorySingle,
    /// One or more.
    MandatoryMulti,
    /// Zero or one.
    OptionalSingle,
    /// Zero or more.
    OptionalMulti,
}

impl Multiplicity {
    /// True for the two mandatory classes.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(
            self,
            Multiplicity::MandatorySingle | Multiplicity::MandatoryMulti
        )
    }

    /// True for the two single-valued classes.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(
            self,
            Multiplicity::MandatorySingle | Multiplicity::OptionalSingle
        )
    }

    /// Lower bound on the value count.
    #[must_use]
    pub const fn min(self) -> usize {
        if self.is_mandatory() {
            1
        } else {
            0
        }
    }

    /// Upper bound on the value count, `None` when unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        if self.is_single() {
            Some(1)
        } else {
            None
        }
    }

    /// True when every count `self` allows is also allowed by `other`.
    #[must_use]
    pub const fn narrows(self, other: Multiplicity) -> bool {
        (self.is_mandatory() || !other.is_mandatory()) && (self.is_single() || !other.is_single())
    }

    /// The loosest rule that narrows both `self` and `other`.
    #[must_use]
    pub const fn meet(self, other: Multiplicity) -> Multiplicity {
        Self::from_flags(
            self.is_mandatory() || other.is_mandatory(),
            self.is_single() || other.is_single(),
        )
    }

    const fn from_flags(mandatory: bool, single: bool) -> Multiplicity {
        match (mandatory, single) {
            (true, true) => Multiplicity::MandatorySingle,
            (true, false) => Multiplicity::MandatoryMulti,
            (false, true) => Multiplicity::OptionalSingle,
            (false, false) => Multiplicity::OptionalMulti,
        }
    }

    /// Returns the snake_case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Multiplicity::MandatorySingle => "mandatory_single",
            Multiplicity::MandatoryMulti => "mandatory_multi",
            Multiplicity::OptionalSingle => "optional_single",
            Multiplicity::OptionalMulti => "optional_multi",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity type's own declaration: direct supertypes plus the rules it
/// introduces or narrows.
#[derive(Debug, Clone)]
pub struct TypeRow {
    /// The type described by this row.
    pub entity_type: EntityType,
    /// Direct supertypes, in resolution order.
    pub supertypes: &'static [EntityType],
    /// Rules declared here, in declaration order.
    pub rules: &'static [(Predicate, Multiplicity)],
}

/// The resolved rules for one type, inherited rules included.
#[derive(Debug, Clone)]
pub struct TypeRules {
    entity_type: EntityType,
    supertypes: &'static [EntityType],
    ancestors: BTreeSet<EntityType>,
    rules: Vec<(Predicate, Multiplicity)>,
}

impl TypeRules {
    /// The type these rules belong to.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// Direct supertypes.
    #[must_use]
    pub fn supertypes(&self) -> &[EntityType] {
        self.supertypes
    }

    /// Every transitive supertype.
    pub fn ancestors(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.ancestors.iter().copied()
    }

    /// The rule for `predicate`, or `None` when it is not applicable.
    #[must_use]
    pub fn rule(&self, predicate: Predicate) -> Option<Multiplicity> {
        self.rules
            .iter()
            .find(|(p, _)| *p == predicate)
            .map(|&(_, m)| m)
    }

    /// True when the type carries `predicate`.
    #[must_use]
    pub fn is_applicable(&self, predicate: Predicate) -> bool {
        self.rule(predicate).is_some()
    }

    /// All rules in declaration order: ancestors' first, then this type's
    /// new predicates. A narrowed rule keeps its ancestor's position.
    pub fn iter(&self) -> impl Iterator<Item = (Predicate, Multiplicity)> + '_ {
        self.rules.iter().copied()
    }

    /// Mandatory predicates in declaration order.
    pub fn mandatory(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.iter()
            .filter(|(_, m)| m.is_mandatory())
            .map(|(p, _)| p)
    }

    /// Applicable predicates in declaration order.
    pub fn applicable(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.iter().map(|(p, _)| p)
    }

    /// Number of applicable predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no predicate applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Resolved cardinality rules for a set of entity types.
#[derive(Debug, Clone)]
pub struct RuleTable {
    types: BTreeMap<EntityType, TypeRules>,
}

impl RuleTable {
    /// Assembles a table from per-type rows.
    ///
    /// Supertypes are resolved depth-first in the order each row lists them.
    /// Rules inherited from several supertypes combine by
    /// [`Multiplicity::meet`]; a row's own rule for an inherited predicate
    /// replaces it in place.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTableError`] for duplicate rows or rules, a supertype
    /// without a row, a supertype cycle, or a rule that widens what the type
    /// inherits.
    pub fn from_rows(rows: Vec<TypeRow>) -> Result<Self, RuleTableError> {
        let mut declared: BTreeMap<EntityType, TypeRow> = BTreeMap::new();
        for row in rows {
            let entity_type = row.entity_type;
            for (i, &(predicate, _)) in row.rules.iter().enumerate() {
                if row.rules[..i].iter().any(|&(p, _)| p == predicate) {
                    return Err(RuleTableError::DuplicateRule {
                        entity_type,
                        predicate,
                    });
                }
            }
            if declared.insert(entity_type, row).is_some() {
                return Err(RuleTableError::DuplicateRow(entity_type));
            }
        }

        for row in declared.values() {
            if let Some(&supertype) = row
                .supertypes
                .iter()
                .find(|s| !declared.contains_key(s))
            {
                return Err(RuleTableError::UnknownSupertype {
                    entity_type: row.entity_type,
                    supertype,
                });
            }
        }

        let mut types = BTreeMap::new();
        let mut stack = Vec::new();
        for &entity_type in declared.keys() {
            resolve(entity_type, &declared, &mut types, &mut stack)?;
        }
        Ok(Self { types })
    }

    /// The resolved rules for `entity_type`.
    #[must_use]
    pub fn rules_for(&self, entity_type: EntityType) -> Option<&TypeRules> {
        self.types.get(&entity_type)
    }

    /// The rule for one (type, predicate) pair. `None` means not applicable
    /// or unknown type.
    #[must_use]
    pub fn multiplicity(&self, entity_type: EntityType, predicate: Predicate) -> Option<Multiplicity> {
        self.rules_for(entity_type)?.rule(predicate)
    }

    /// True when `sub` is `sup` or descends from it.
    #[must_use]
    pub fn is_subtype_of(&self, sub: EntityType, sup: EntityType) -> bool {
        sub == sup
            || self
                .rules_for(sub)
                .is_some_and(|rules| rules.ancestors.contains(&sup))
    }

    /// Direct supertypes of `entity_type`; empty for roots and unknown types.
    #[must_use]
    pub fn supertypes_of(&self, entity_type: EntityType) -> &[EntityType] {
        match self.rules_for(entity_type) {
            Some(rules) => rules.supertypes(),
            None => &[],
        }
    }

    /// Every type's rules, ordered by type.
    pub fn types(&self) -> impl Iterator<Item = &TypeRules> {
        self.types.values()
    }

    /// Number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when the table has no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn resolve(
    entity_type: EntityType,
    declared: &BTreeMap<EntityType, TypeRow>,
    resolved: &mut BTreeMap<EntityType, TypeRules>,
    stack: &mut Vec<EntityType>,
) -> Result<(), RuleTableError> {
    if resolved.contains_key(&entity_type) {
        return Ok(());
    }
    if stack.contains(&entity_type) {
        return Err(RuleTableError::Cycle(entity_type));
    }
    // Checked by the caller, but keep the walk total.
    let Some(row) = declared.get(&entity_type) else {
        return Err(RuleTableError::UnknownSupertype {
            entity_type: stack.last().copied().unwrap_or(entity_type),
            supertype: entity_type,
        });
    };

    stack.push(entity_type);
    let mut rules: Vec<(Predicate, Multiplicity)> = Vec::new();
    let mut ancestors = BTreeSet::new();
    for &supertype in row.supertypes {
        resolve(supertype, declared, resolved, stack)?;
        let Some(parent) = resolved.get(&supertype) else {
            return Err(RuleTableError::Cycle(supertype));
        };
        ancestors.insert(supertype);
        ancestors.extend(parent.ancestors.iter().copied());
        for &(predicate, inherited) in &parent.rules {
            match rules.iter_mut().find(|(p, _)| *p == predicate) {
                Some((_, current)) => *current = current.meet(inherited),
                None => rules.push((predicate, inherited)),
            }
        }
    }
    stack.pop();

    for &(predicate, declared_rule) in row.rules {
        match rules.iter_mut().find(|(p, _)| *p == predicate) {
            Some((_, inherited)) => {
                if !declared_rule.narrows(*inherited) {
                    return Err(RuleTableError::Widening {
                        entity_type,
                        predicate,
                        inherited: *inherited,
                        declared: declared_rule,
                    });
                }
                *inherited = declared_rule;
            }
            None => rules.push((predicate, declared_rule)),
        }
    }

    trace!(
        entity_type = %entity_type,
        rules = rules.len(),
        ancestors = ancestors.len(),
        "resolved rule row"
    );
    resolved.insert(
        entity_type,
        TypeRules {
            entity_type,
            supertypes: row.supertypes,
            ancestors,
            rules,
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Multiplicity::*;

    fn row(
        entity_type: EntityType,
        supertypes: &'static [EntityType],
        rules: &'static [(Predicate, Multiplicity)],
    ) -> TypeRow {
        TypeRow {
            entity_type,
            supertypes,
            rules,
        }
    }

    #[test]
    fn narrowing_lattice() {
        assert!(MandatorySingle.narrows(OptionalMulti));
        assert!(MandatoryMulti.narrows(OptionalMulti));
        assert!(OptionalSingle.narrows(OptionalMulti));
        assert!(!OptionalMulti.narrows(MandatoryMulti));
        assert!(!MandatoryMulti.narrows(OptionalSingle));
        assert_eq!(OptionalSingle.meet(MandatoryMulti), MandatorySingle);
        assert_eq!(OptionalMulti.meet(OptionalMulti), OptionalMulti);
    }

    #[test]
    fn bounds() {
        assert_eq!(MandatorySingle.min(), 1);
        assert_eq!(MandatorySingle.max(), Some(1));
        assert_eq!(OptionalMulti.min(), 0);
        assert_eq!(OptionalMulti.max(), None);
    }

    #[test]
    fn subtype_narrowing_replaces_in_place() {
        let table = RuleTable::from_rows(vec![
            row(
                EntityType::Thing,
                &[],
                &[(Predicate::PartOf, OptionalMulti), (Predicate::Causes, OptionalMulti)],
            ),
            row(
                EntityType::Activity,
                &[EntityType::Thing],
                &[(Predicate::Determines, OptionalMulti), (Predicate::PartOf, MandatorySingle)],
            ),
        ])
        .unwrap();
        let rules = table.rules_for(EntityType::Activity).unwrap();
        let order: Vec<_> = rules.iter().collect();
        assert_eq!(
            order,
            [
                (Predicate::PartOf, MandatorySingle),
                (Predicate::Causes, OptionalMulti),
                (Predicate::Determines, OptionalMulti),
            ]
        );
        assert_eq!(
            table.multiplicity(EntityType::Thing, Predicate::PartOf),
            Some(OptionalMulti)
        );
    }

    #[test]
    fn widening_is_rejected() {
        let err = RuleTable::from_rows(vec![
            row(EntityType::Thing, &[], &[(Predicate::PartOf, MandatoryMulti)]),
            row(
                EntityType::Activity,
                &[EntityType::Thing],
                &[(Predicate::PartOf, OptionalSingle)],
            ),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RuleTableError::Widening {
                entity_type: EntityType::Activity,
                predicate: Predicate::PartOf,
                inherited: MandatoryMulti,
                declared: OptionalSingle,
            }
        );
    }

    #[test]
    fn multiple_supertypes_combine_by_meet() {
        let table = RuleTable::from_rows(vec![
            row(EntityType::Thing, &[], &[]),
            row(EntityType::State, &[EntityType::Thing], &[(Predicate::PartOf, OptionalSingle)]),
            row(EntityType::Party, &[EntityType::Thing], &[(Predicate::PartOf, MandatoryMulti)]),
            row(EntityType::Person, &[EntityType::State, EntityType::Party], &[]),
        ])
        .unwrap();
        assert_eq!(
            table.multiplicity(EntityType::Person, Predicate::PartOf),
            Some(MandatorySingle)
        );
        assert!(table.is_subtype_of(EntityType::Person, EntityType::Thing));
        assert!(!table.is_subtype_of(EntityType::State, EntityType::Party));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(
            RuleTable::from_rows(vec![row(EntityType::Thing, &[], &[]), row(EntityType::Thing, &[], &[])])
                .unwrap_err(),
            RuleTableError::DuplicateRow(EntityType::Thing)
        );
        assert_eq!(
            RuleTable::from_rows(vec![row(
                EntityType::Thing,
                &[],
                &[(Predicate::PartOf, OptionalMulti), (Predicate::PartOf, OptionalSingle)],
            )])
            .unwrap_err(),
            RuleTableError::DuplicateRule {
                entity_type: EntityType::Thing,
                predicate: Predicate::PartOf,
            }
        );
        assert_eq!(
            RuleTable::from_rows(vec![row(EntityType::Event, &[EntityType::Thing], &[])]).unwrap_err(),
            RuleTableError::UnknownSupertype {
                entity_type: EntityType::Event,
                supertype: EntityType::Thing,
            }
        );
        assert!(matches!(
            RuleTable::from_rows(vec![
                row(EntityType::Event, &[EntityType::State], &[]),
                row(EntityType::State, &[EntityType::Event], &[]),
            ])
            .unwrap_err(),
            RuleTableError::Cycle(_)
        ));
    }
}
