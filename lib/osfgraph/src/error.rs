//! Errors raised while loading an ontology and mapping objects onto it.

use crate::vocab::TermKind;
use oxiri::IriParseError;
use oxrdfio::RdfParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised while mapping an object graph to RDF.
///
/// Configuration errors mean the tags, the transforms or the ontology document
/// disagree with each other and retrying will not help. Data errors are raised
/// for a single object; statements written before the failure are kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// The ontology, the tags or the transforms are inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An object being mapped carries unusable values.
    #[error(transparent)]
    Data(#[from] DataError),
}

impl MappingError {
    /// Returns `true` if the error is a configuration error.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// A fatal inconsistency between the ontology document, the declared tags and the registered transforms.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The ontology document could not be read.
    #[error("Unable to read the ontology document {}: {source}", .path.display())]
    OntologyNotFound {
        /// Location of the document.
        path: PathBuf,
        /// The I/O error.
        #[source]
        source: io::Error,
    },
    /// The ontology document is not valid RDF.
    #[error("Unable to parse the ontology document: {0}")]
    OntologyParse(#[from] RdfParseError),
    /// The ontology format could not be guessed from the document location.
    #[error("Unable to guess the RDF format of the ontology document {location}")]
    UnknownFormat {
        /// Location of the document.
        location: String,
    },
    /// A namespace or an IRI used by the configuration is not valid.
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// A term is declared in the ontology with two different kinds.
    #[error("{iri} is declared both as {first} and as {second}")]
    ConflictingTermKind {
        /// The declared IRI.
        iri: String,
        /// One of the kinds.
        first: TermKind,
        /// The other kind.
        second: TermKind,
    },
    /// A class or property is not declared in the ontology.
    #[error("{iri} is not defined in the ontology")]
    UndefinedTerm {
        /// The requested IRI.
        iri: String,
    },
    /// A term is declared in the ontology with another kind than the requested one.
    #[error("{iri} is declared as {found} but is used as {expected}")]
    WrongTermKind {
        /// The requested IRI.
        iri: String,
        /// The kind the caller asked for.
        expected: TermKind,
        /// The kind declared in the ontology.
        found: TermKind,
    },
    /// An individual type has no member tagged as identity.
    #[error("Missing identity tag on {type_name}, is this really declared as an individual?")]
    MissingIdentity {
        /// The type missing the identity member.
        type_name: &'static str,
    },
    /// An individual type has several members tagged as identity.
    #[error("Ambiguous identity on {type_name}: {candidates} candidate members are tagged as identity")]
    AmbiguousIdentity {
        /// The offending type.
        type_name: &'static str,
        /// Number of identity members found.
        candidates: usize,
    },
    /// The type is not tagged as an individual.
    #[error("{type_name} is not tagged as an individual")]
    MissingIndividualTag {
        /// The offending type.
        type_name: &'static str,
    },
    /// The individual tag of the type has an empty class.
    #[error("The individual tag of {type_name} does not name any class")]
    MissingClass {
        /// The offending type.
        type_name: &'static str,
    },
    /// A property tag names a transform found in no transform cache.
    #[error("Transform {transform} used by {owner}.{member} has not been registered, was the object processed first?")]
    TransformNotRegistered {
        /// The transform identity.
        transform: &'static str,
        /// The type declaring the member.
        owner: &'static str,
        /// The member name.
        member: &'static str,
    },
    /// An object does not answer a member declared by its descriptor.
    #[error("{type_name} does not describe the value of its member {owner}.{member}")]
    UndescribedMember {
        /// The type of the object.
        type_name: &'static str,
        /// The type declaring the member.
        owner: &'static str,
        /// The member name.
        member: &'static str,
    },
    /// Tags of a member were requested before the member was discovered.
    #[error("Tags of {owner}.{member} have not been discovered, was the object processed first?")]
    UndiscoveredMember {
        /// The type declaring the member.
        owner: &'static str,
        /// The member name.
        member: &'static str,
    },
}

/// An error caused by the values carried by one object.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The identity member of an individual holds no value.
    #[error("The identity member {owner}.{member} is null")]
    NullIdentity {
        /// The type declaring the identity member.
        owner: &'static str,
        /// The identity member name.
        member: &'static str,
    },
    /// The identity member holds a value that cannot be rendered as an identifier.
    #[error("The identity member {owner}.{member} holds {found} which has no lexical form")]
    UnsupportedIdentity {
        /// The type declaring the identity member.
        owner: &'static str,
        /// The identity member name.
        member: &'static str,
        /// What the member holds.
        found: &'static str,
    },
    /// No named individual exists with this IRI.
    #[error("No individual named {iri} exists")]
    UnknownIndividual {
        /// The requested IRI.
        iri: String,
    },
    /// A named individual was given where an anonymous one is expected.
    #[error("Individual {iri} is named but was supplied as an anonymous individual")]
    NotAnonymous {
        /// The IRI of the supplied individual.
        iri: String,
    },
    /// An identifier cannot be turned into an IRI.
    #[error("Identifier '{value}' does not make a valid IRI: {error}")]
    InvalidIdentifier {
        /// The identifier.
        value: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// An identifier resolves to a class or a property of the ontology.
    #[error("Identifier '{value}' resolves to {iri} which is {kind} of the ontology")]
    SchemaTermIdentifier {
        /// The identifier.
        value: String,
        /// The IRI it resolves to.
        iri: String,
        /// The kind of the ontology term.
        kind: TermKind,
    },
    /// A value cannot be written with the property it is tagged with.
    #[error("Unable to write the value of {owner}.{member} with {property}: {reason}")]
    UnsupportedValue {
        /// The type declaring the member.
        owner: &'static str,
        /// The member name.
        member: &'static str,
        /// The property IRI.
        property: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
    /// A transform rejected its input.
    #[error("Transform {transform} failed: {message}")]
    Transform {
        /// The transform identity.
        transform: &'static str,
        /// Description of the failure.
        message: String,
    },
}

impl DataError {
    /// Builds a transform failure.
    #[inline]
    pub fn transform(transform: &'static str, message: impl Into<String>) -> Self {
        Self::Transform {
            transform,
            message: message.into(),
        }
    }
}
