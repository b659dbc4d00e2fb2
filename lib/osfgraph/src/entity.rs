//! Ontology terms and individuals handed out by the [`OntologyFacade`](crate::OntologyFacade).

use oxrdf::{BlankNode, NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Term};
use std::fmt;

macro_rules! ontology_term {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(NamedNode);

        impl $name {
            #[inline]
            pub(crate) fn new(iri: NamedNode) -> Self {
                Self(iri)
            }

            /// Returns the IRI of this term.
            #[inline]
            pub fn iri(&self) -> &NamedNode {
                &self.0
            }

            #[inline]
            pub fn as_ref(&self) -> NamedNodeRef<'_> {
                self.0.as_ref()
            }

            /// Converts this term into its underlying named node.
            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$name> for NamedNode {
            #[inline]
            fn from(term: $name) -> Self {
                term.0
            }
        }
    };
}

ontology_term!(
    /// A class declared as `owl:Class` in the ontology.
    OwlClass
);
ontology_term!(
    /// A property declared as `owl:DatatypeProperty` in the ontology.
    ///
    /// Its values are literals.
    DataProperty
);
ontology_term!(
    /// A property declared as `owl:ObjectProperty` in the ontology.
    ///
    /// Its values are individuals or resources.
    ObjectProperty
);

/// An individual of the instance model.
///
/// Named individuals have a stable IRI: they can be looked up again and extended
/// by later calls. Anonymous individuals are blank nodes: nothing can find them
/// again, so the handle must be kept to add statements about them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual (identified by an IRI).
    Named(NamedNode),
    /// An anonymous individual (blank node).
    Anonymous(BlankNode),
}

impl Individual {
    /// Returns `true` if this is a named individual.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns `true` if this is an anonymous individual.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    /// Returns the IRI if this is a named individual.
    #[inline]
    pub fn uri(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    /// Returns this individual as the subject of a statement.
    #[inline]
    pub fn as_subject(&self) -> NamedOrBlankNodeRef<'_> {
        match self {
            Self::Named(n) => n.as_ref().into(),
            Self::Anonymous(b) => b.as_ref().into(),
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => n.fmt(f),
            Self::Anonymous(b) => b.fmt(f),
        }
    }
}

impl From<NamedNode> for Individual {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for NamedOrBlankNode {
    #[inline]
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

impl From<Individual> for Term {
    #[inline]
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}
