//! JSON entity documents.
//!
//! A document lists entities to build, optionally with the outcome each
//! one is expected to have. `hqdm-check` reads them from disk; the instance
//! fixtures are embedded ones.
//!
//! ```json
//! {
//!   "config": { "upper_bounds": "strict" },
//!   "entities": [
//!     {
//!       "id": "urn:ex:activity",
//!       "type": "activity",
//!       "values": { "causes": [{ "ref": "urn:ex:event" }] },
//!       "expect": { "missing_mandatory_property": "part_of_possible_world" }
//!     }
//!   ]
//! }
//! ```
//!
//! An empty value list records the predicate as present with no values.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use hqdm_model::{
    BuildError, Builder, BuilderConfig, Entity, EntityDraft, EntityType, Iri, Predicate, Value,
};
use serde::Deserialize;

/// A set of entities to build under one configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDocument {
    /// Builder configuration applied to every entity.
    #[serde(default)]
    pub config: BuilderConfig,
    /// The entities, in build order.
    pub entities: Vec<EntityRecord>,
}

/// One entity as written in a document.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    /// Identifier.
    pub id: Iri,
    /// Type tag.
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Values per predicate.
    #[serde(default)]
    pub values: BTreeMap<Predicate, Vec<Value>>,
    /// Expected outcome, if the document asserts one.
    #[serde(default)]
    pub expect: Option<Expectation>,
}

/// The outcome a record expects from `build`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// The build succeeds.
    Ok,
    /// Fails with [`BuildError::MissingMandatoryProperty`].
    MissingMandatoryProperty(Predicate),
    /// Fails with [`BuildError::EmptyPropertyValue`].
    EmptyPropertyValue(Predicate),
    /// Fails with [`BuildError::TooManyValues`].
    TooManyValues(Predicate),
    /// Fails with [`BuildError::InapplicableProperty`].
    InapplicableProperty(Predicate),
    /// Fails with [`BuildError::WrongValueKind`].
    WrongValueKind(Predicate),
}

impl Expectation {
    /// True when `outcome` is the one expected.
    pub fn matches(&self, outcome: &Result<Entity, BuildError>) -> bool {
        match (self, outcome) {
            (Expectation::Ok, Ok(_)) => true,
            (Expectation::MissingMandatoryProperty(p), Err(BuildError::MissingMandatoryProperty(q)))
            | (Expectation::EmptyPropertyValue(p), Err(BuildError::EmptyPropertyValue(q)))
            | (Expectation::TooManyValues(p), Err(BuildError::TooManyValues { predicate: q, .. }))
            | (
                Expectation::InapplicableProperty(p),
                Err(BuildError::InapplicableProperty { predicate: q, .. }),
            )
            | (Expectation::WrongValueKind(p), Err(BuildError::WrongValueKind { predicate: q, .. })) => {
                p == q
            }
            _ => false,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Ok => f.write_str("ok"),
            Expectation::MissingMandatoryProperty(p) => write!(f, "missing_mandatory_property({p})"),
            Expectation::EmptyPropertyValue(p) => write!(f, "empty_property_value({p})"),
            Expectation::TooManyValues(p) => write!(f, "too_many_values({p})"),
            Expectation::InapplicableProperty(p) => write!(f, "inapplicable_property({p})"),
            Expectation::WrongValueKind(p) => write!(f, "wrong_value_kind({p})"),
        }
    }
}

impl EntityRecord {
    /// A builder holding this record's values under `config`.
    pub fn builder(&self, config: BuilderConfig) -> Builder {
        let mut draft =
            EntityDraft::new(self.entity_type, self.id.clone()).with_duplicates(config.duplicates);
        for (&predicate, values) in &self.values {
            if values.is_empty() {
                draft.declare(predicate);
            }
            for value in values {
                draft.add_value(predicate, value.clone());
            }
        }
        Builder::from_draft(draft, config)
    }
}

/// The result of building one record.
#[derive(Debug)]
pub struct Outcome<'a> {
    /// The record that was built.
    pub record: &'a EntityRecord,
    /// What `build` returned.
    pub result: Result<Entity, BuildError>,
}

impl Outcome<'_> {
    /// `Some(true)` or `Some(false)` when the record states an expectation.
    pub fn as_expected(&self) -> Option<bool> {
        self.record
            .expect
            .as_ref()
            .map(|expect| expect.matches(&self.result))
    }
}

impl EntityDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document.
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("Failed to parse entity document")
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&src).with_context(|| format!("Invalid document {}", path.display()))
    }

    /// Builds every record with the document's configuration, or with
    /// `config` when given.
    pub fn build_all(&self, config: Option<BuilderConfig>) -> Vec<Outcome<'_>> {
        let config = config.unwrap_or(self.config);
        self.entities
            .iter()
            .map(|record| Outcome {
                record,
                result: record.builder(config).build(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "entities": [
            { "id": "urn:t", "type": "thing", "expect": "ok" },
            {
                "id": "urn:a",
                "type": "activity",
                "values": { "determines": [] },
                "expect": { "empty_property_value": "determines" }
            },
            {
                "id": "urn:s",
                "type": "sign",
                "values": { "value_": [{ "string": "x" }, { "string": "x" }] }
            }
        ]
    }"#;

    #[test]
    fn parses_and_builds() {
        let doc = EntityDocument::from_json(DOC).unwrap();
        assert_eq!(doc.config, BuilderConfig::default());
        let outcomes = doc.build_all(None);
        assert_eq!(outcomes[0].as_expected(), Some(true));
        assert_eq!(outcomes[1].as_expected(), Some(true));
        assert_eq!(outcomes[2].as_expected(), None);
    }

    #[test]
    fn empty_list_means_present() {
        let doc = EntityDocument::from_json(DOC).unwrap();
        let builder = doc.entities[1].builder(BuilderConfig::default());
        assert!(builder.draft().has_value(Predicate::Determines));
        assert!(builder.draft().values(Predicate::Determines).is_empty());
    }

    #[test]
    fn duplicate_literals_collapse() {
        let doc = EntityDocument::from_json(DOC).unwrap();
        let builder = doc.entities[2].builder(BuilderConfig::default());
        assert_eq!(builder.draft().values(Predicate::Value).len(), 1);
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let err = EntityDocument::from_json(r#"{"entities":[{"id":"x","type":"unicorn"}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn mismatched_predicate_does_not_match() {
        let expect = Expectation::MissingMandatoryProperty(Predicate::Causes);
        let outcome = Err(BuildError::MissingMandatoryProperty(Predicate::MemberOfKind));
        assert!(!expect.matches(&outcome));
        assert!(!Expectation::Ok.matches(&outcome));
    }
}
