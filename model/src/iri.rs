//! Entity identifiers.
//!
//! An [`Iri`] names an entity and doubles as the value of every
//! relationship attribute that points at another entity. Parsing and
//! resolution happen elsewhere; this layer only needs stable equality and
//! a total order.

use std::fmt;

/// An opaque, stable identifier naming an entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Iri(String);

impl Iri {
    /// Wraps an identifier string as-is.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Joins `local` onto the HQDM namespace.
    #[must_use]
    pub fn hqdm(local: &str) -> Self {
        Self(format!("{}{local}", iris::HQDM))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_owned())
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// Standard IRI constants.
pub mod iris {
    /// HQDM namespace.
    pub const HQDM: &str = "http://www.semanticweb.org/magma-core/ontologies/hqdm#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hqdm_joins_namespace() {
        let iri = Iri::hqdm("part_of");
        assert_eq!(
            iri.as_str(),
            "http://www.semanticweb.org/magma-core/ontologies/hqdm#part_of"
        );
    }

    #[test]
    fn equality_is_textual() {
        assert_eq!(Iri::from("urn:a"), Iri::new(String::from("urn:a")));
        assert!(Iri::from("urn:a") < Iri::from("urn:b"));
    }
}
