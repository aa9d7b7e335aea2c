//! Attribute values.

use std::fmt;

use crate::iri::Iri;
use crate::predicate::PredicateKind;

/// One value held under a predicate: a reference to another entity or a
/// literal.
///
/// References are bare identifiers. Nothing here checks that the target
/// exists or has a compatible type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Value {
    /// Reference to another entity.
    Ref(Iri),
    /// `xsd:string` literal.
    String(String),
    /// `xsd:integer` literal.
    Integer(i64),
    /// `xsd:boolean` literal.
    Boolean(bool),
}

impl Value {
    /// Returns the referenced identifier, or `None` for literals.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Value::Ref(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns true for every variant except [`Value::Ref`].
    #[must_use]
    pub fn is_literal(&self) -> bool {
        !matches!(self, Value::Ref(_))
    }

    /// The predicate kind this value is suitable for.
    #[must_use]
    pub fn kind(&self) -> PredicateKind {
        match self {
            Value::Ref(_) => PredicateKind::Object,
            _ => PredicateKind::Datatype,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ref(iri) => write!(f, "<{iri}>"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<Iri> for Value {
    fn from(iri: Iri) -> Self {
        Value::Ref(iri)
    }
}

impl From<&Iri> for Value {
    fn from(iri: &Iri) -> Self {
        Value::Ref(iri.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
