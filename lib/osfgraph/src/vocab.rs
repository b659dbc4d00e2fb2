//! OWL vocabulary and the identifiers tags use to reference ontology terms.

use std::fmt;

/// [OWL](https://www.w3.org/TR/owl2-rdf-based-semantics/) vocabulary.
pub mod owl {
    use oxrdf::NamedNodeRef;

    /// The class of OWL classes.
    pub const CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    /// The class of OWL object properties.
    pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    /// The class of OWL datatype properties.
    pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    /// The class of OWL ontologies.
    pub const ONTOLOGY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
}

/// Kind of an ontology term, as declared by the ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// `owl:Class`
    Class,
    /// `owl:DatatypeProperty`
    DatatypeProperty,
    /// `owl:ObjectProperty`
    ObjectProperty,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "a class",
            Self::DatatypeProperty => "a datatype property",
            Self::ObjectProperty => "an object property",
        })
    }
}

/// Whether a property links to literals or to other individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Values are literals.
    Datatype,
    /// Values are individuals or resources.
    Object,
}

impl From<PropertyKind> for TermKind {
    #[inline]
    fn from(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Datatype => Self::DatatypeProperty,
            PropertyKind::Object => Self::ObjectProperty,
        }
    }
}

/// Fully qualified IRI of an OWL class referenced by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(&'static str);

impl ClassId {
    #[inline]
    pub const fn new(iri: &'static str) -> Self {
        Self(iri)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Fully qualified IRI of an OWL property referenced by a tag, with the kind the tag expects.
///
/// The kind is checked against the ontology document when the property is first written,
/// so a tag declaring an object property the ontology defines as a datatype property fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId {
    iri: &'static str,
    kind: PropertyKind,
}

impl PropertyId {
    /// A datatype property.
    #[inline]
    pub const fn datatype(iri: &'static str) -> Self {
        Self {
            iri,
            kind: PropertyKind::Datatype,
        }
    }

    /// An object property.
    #[inline]
    pub const fn object(iri: &'static str) -> Self {
        Self {
            iri,
            kind: PropertyKind::Object,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.iri
    }

    #[inline]
    pub const fn kind(self) -> PropertyKind {
        self.kind
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri)
    }
}

/// Splits an IRI into its namespace (up to and including the last `#` or `/`) and its local name.
pub fn split_iri(iri: &str) -> (&str, &str) {
    match iri.rfind(['#', '/']) {
        Some(position) => iri.split_at(position + 1),
        None => ("", iri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hash_namespace() {
        assert_eq!(
            split_iri("http://example.org/onto#Thing"),
            ("http://example.org/onto#", "Thing")
        );
    }

    #[test]
    fn split_slash_namespace() {
        assert_eq!(
            split_iri("http://example.org/onto/Thing"),
            ("http://example.org/onto/", "Thing")
        );
        assert_eq!(split_iri("Thing"), ("", "Thing"));
    }

    #[test]
    fn property_kind_maps_to_term_kind() {
        assert_eq!(
            TermKind::from(PropertyId::object("http://example.org/p").kind()),
            TermKind::ObjectProperty
        );
        assert_eq!(TermKind::DatatypeProperty.to_string(), "a datatype property");
    }
}
