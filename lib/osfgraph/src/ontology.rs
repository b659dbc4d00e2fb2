//! The ontology schema and the instance model built on top of it.

use crate::config::{OntologyConfig, OntologySource};
use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use crate::error::{ConfigError, DataError, MappingError};
use crate::vocab::{TermKind, owl};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{
    BlankNode, Graph, Literal, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, Quad, TermRef,
    Triple, TripleRef,
};
use oxrdfio::{RdfParseError, RdfParser};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::BufReader;

/// An ontology loaded once from a fixed document, and the instance statements added on top of it.
///
/// The facade keeps two graphs: an immutable snapshot of the ontology document and a mutable
/// model that starts as a copy of it. Every write goes through a lookup of the class or
/// property in the ontology, so the model never contains terms the ontology does not define.
///
/// ```
/// use osfgraph::{OntologyConfig, OntologyFacade};
///
/// let mut ontology = OntologyFacade::load(&OntologyConfig::osf())?;
/// let user = ontology.named_individual(
///     "https://osf.io/abc12",
///     OntologyConfig::OSF_NAMESPACE,
///     "User",
/// )?;
/// assert!(ontology.has_individual("https://osf.io/abc12"));
/// assert_eq!(ontology.individual("https://osf.io/abc12")?, user);
/// assert_eq!(ontology.instances_only().len(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct OntologyFacade {
    iri: Option<NamedNode>,
    namespace: String,
    instance_base: String,
    base: Graph,
    model: Graph,
    terms: FxHashMap<String, TermKind>,
}

impl OntologyFacade {
    /// Loads the ontology document described by the configuration.
    pub fn load(config: &OntologyConfig) -> Result<Self, ConfigError> {
        let location = match config.source() {
            OntologySource::Embedded(_) => "<embedded>".to_owned(),
            OntologySource::File(path) => path.display().to_string(),
        };
        let format = config
            .format()
            .ok_or(ConfigError::UnknownFormat { location })?;
        let parser = RdfParser::from_format(format)
            .with_base_iri(config.namespace())
            .map_err(|error| ConfigError::InvalidIri {
                iri: config.namespace().to_owned(),
                error,
            })?;
        let graph = match config.source() {
            OntologySource::Embedded(document) => {
                read_graph(parser.for_reader(document.as_bytes()))?
            }
            OntologySource::File(path) => {
                let file = File::open(path).map_err(|source| ConfigError::OntologyNotFound {
                    path: path.clone(),
                    source,
                })?;
                read_graph(parser.for_reader(BufReader::new(file)))?
            }
        };
        Ok(Self::from_graph(graph, config.namespace())?.with_instance_base(config.instance_base()))
    }

    /// Builds the facade from an already parsed ontology graph.
    ///
    /// Fails if a term is declared with two different kinds.
    pub fn from_graph(graph: Graph, namespace: impl Into<String>) -> Result<Self, ConfigError> {
        let namespace = namespace.into();
        let terms = index_terms(&graph)?;
        let iri = graph
            .subjects_for_predicate_object(rdf::TYPE, owl::ONTOLOGY)
            .find_map(|subject| match subject {
                NamedOrBlankNodeRef::NamedNode(iri) => Some(iri.into_owned()),
                NamedOrBlankNodeRef::BlankNode(_) => None,
            });
        tracing::info!(
            ontology = iri.as_ref().map(NamedNode::as_str),
            namespace = %namespace,
            triples = graph.len(),
            classes = terms.values().filter(|kind| **kind == TermKind::Class).count(),
            properties = terms.values().filter(|kind| **kind != TermKind::Class).count(),
            "ontology loaded"
        );
        Ok(Self {
            iri,
            instance_base: namespace.clone(),
            namespace,
            model: graph.clone(),
            base: graph,
            terms,
        })
    }

    /// Sets the IRI relative identifiers are resolved against in [`individual_uri`](Self::individual_uri).
    #[must_use]
    pub fn with_instance_base(mut self, instance_base: impl Into<String>) -> Self {
        self.instance_base = instance_base.into();
        self
    }

    /// The IRI of the `owl:Ontology` declared by the document, if any.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn instance_base(&self) -> &str {
        &self.instance_base
    }

    /// The ontology document as loaded, never modified.
    #[inline]
    pub fn base(&self) -> &Graph {
        &self.base
    }

    /// The ontology plus everything added since it was loaded.
    #[inline]
    pub fn model(&self) -> &Graph {
        &self.model
    }

    /// How the ontology declares the given IRI, if it does.
    #[inline]
    pub fn term_kind(&self, iri: &str) -> Option<TermKind> {
        self.terms.get(iri).copied()
    }

    /// All declared classes.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.terms_of_kind(TermKind::Class)
    }

    /// All declared datatype properties.
    pub fn data_properties(&self) -> impl Iterator<Item = &str> {
        self.terms_of_kind(TermKind::DatatypeProperty)
    }

    /// All declared object properties.
    pub fn object_properties(&self) -> impl Iterator<Item = &str> {
        self.terms_of_kind(TermKind::ObjectProperty)
    }

    fn terms_of_kind(&self, kind: TermKind) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(iri, _)| iri.as_str())
    }

    /// Looks up a class by its fully qualified IRI.
    pub fn owl_class(&self, iri: &str) -> Result<OwlClass, ConfigError> {
        self.lookup(iri, TermKind::Class).map(OwlClass::new)
    }

    /// Looks up a class by namespace and local name.
    pub fn owl_class_in(&self, namespace: &str, local_name: &str) -> Result<OwlClass, ConfigError> {
        self.owl_class(&format!("{namespace}{local_name}"))
    }

    /// Looks up a datatype property by its fully qualified IRI.
    ///
    /// Fails if the IRI is declared as an object property.
    pub fn datatype_property(&self, iri: &str) -> Result<DataProperty, ConfigError> {
        self.lookup(iri, TermKind::DatatypeProperty)
            .map(DataProperty::new)
    }

    /// Looks up an object property by its fully qualified IRI.
    ///
    /// Fails if the IRI is declared as a datatype property.
    pub fn object_property(&self, iri: &str) -> Result<ObjectProperty, ConfigError> {
        self.lookup(iri, TermKind::ObjectProperty)
            .map(ObjectProperty::new)
    }

    fn lookup(&self, iri: &str, expected: TermKind) -> Result<NamedNode, ConfigError> {
        match self.terms.get(iri) {
            None => Err(ConfigError::UndefinedTerm {
                iri: iri.to_owned(),
            }),
            Some(found) if *found != expected => Err(ConfigError::WrongTermKind {
                iri: iri.to_owned(),
                expected,
                found: *found,
            }),
            // Keys come from parsed named nodes
            Some(_) => Ok(NamedNode::new_unchecked(iri)),
        }
    }

    /// Returns `true` if a named individual with this IRI exists in the model.
    pub fn has_individual(&self, uri: &str) -> bool {
        NamedNodeRef::new(uri).is_ok_and(|node| self.is_individual(node.into()))
    }

    fn is_individual(&self, subject: NamedOrBlankNodeRef<'_>) -> bool {
        self.model
            .objects_for_subject_predicate(subject, rdf::TYPE)
            .any(|class| match class {
                TermRef::NamedNode(class) => {
                    self.terms.get(class.as_str()) == Some(&TermKind::Class)
                }
                _ => false,
            })
    }

    /// Returns a previously created named individual.
    ///
    /// This never creates anything.
    pub fn individual(&self, uri: &str) -> Result<Individual, DataError> {
        match NamedNode::new(uri) {
            Ok(node) if self.is_individual(node.as_ref().into()) => Ok(Individual::Named(node)),
            _ => Err(DataError::UnknownIndividual {
                iri: uri.to_owned(),
            }),
        }
    }

    /// Creates a new anonymous individual of the class `namespace` + `local_class`.
    ///
    /// Each call returns a distinct individual.
    pub fn anonymous_individual(
        &mut self,
        namespace: &str,
        local_class: &str,
    ) -> Result<Individual, ConfigError> {
        let class = self.owl_class_in(namespace, local_class)?;
        let individual = Individual::Anonymous(BlankNode::default());
        self.assert_type(&individual, &class);
        Ok(individual)
    }

    /// Creates, or returns if it already exists, the named individual `uri` of the class `namespace` + `local_class`.
    ///
    /// Calling it again with the same arguments does not add anything to the model.
    pub fn named_individual(
        &mut self,
        uri: &str,
        namespace: &str,
        local_class: &str,
    ) -> Result<Individual, MappingError> {
        let class = self.owl_class_in(namespace, local_class)?;
        let node = NamedNode::new(uri).map_err(|error| DataError::InvalidIdentifier {
            value: uri.to_owned(),
            error,
        })?;
        let node = self.outside_schema(uri, node)?;
        let individual = Individual::Named(node);
        if self.assert_type(&individual, &class) {
            tracing::debug!(%individual, %class, "created individual");
        }
        Ok(individual)
    }

    /// Resolves an identifier against the instance base, unless it already is an absolute IRI.
    ///
    /// Fails if the identifier resolves to a class or a property of the ontology.
    pub fn individual_uri(&self, identifier: &str) -> Result<NamedNode, DataError> {
        let node = match NamedNode::new(identifier) {
            Ok(node) => node,
            Err(_) => NamedNode::new(format!("{}{identifier}", self.instance_base)).map_err(
                |error| DataError::InvalidIdentifier {
                    value: identifier.to_owned(),
                    error,
                },
            )?,
        };
        self.outside_schema(identifier, node)
    }

    fn outside_schema(&self, identifier: &str, node: NamedNode) -> Result<NamedNode, DataError> {
        match self.terms.get(node.as_str()) {
            Some(kind) => Err(DataError::SchemaTermIdentifier {
                value: identifier.to_owned(),
                iri: node.into_string(),
                kind: *kind,
            }),
            None => Ok(node),
        }
    }

    fn assert_type(&mut self, individual: &Individual, class: &OwlClass) -> bool {
        self.model.insert(TripleRef::new(
            individual.as_subject(),
            rdf::TYPE,
            class.as_ref(),
        ))
    }

    /// Adds the statement `subject property value`.
    ///
    /// Returns `false` if the statement was already present.
    pub fn add_literal(
        &mut self,
        subject: &Individual,
        property: &DataProperty,
        value: &Literal,
    ) -> bool {
        tracing::trace!(%subject, %property, %value, "literal");
        self.model
            .insert(TripleRef::new(subject.as_subject(), property.as_ref(), value.as_ref()))
    }

    /// Adds the statement `subject property object` between two individuals.
    pub fn add_object(
        &mut self,
        subject: &Individual,
        property: &ObjectProperty,
        object: &Individual,
    ) -> bool {
        tracing::trace!(%subject, %property, %object, "link");
        let object: TermRef<'_> = match object {
            Individual::Named(n) => n.as_ref().into(),
            Individual::Anonymous(b) => b.as_ref().into(),
        };
        self.model
            .insert(TripleRef::new(subject.as_subject(), property.as_ref(), object))
    }

    /// Adds the statement `subject property resource` without asserting anything about `resource`.
    pub fn add_resource(
        &mut self,
        subject: &Individual,
        property: &ObjectProperty,
        resource: NamedNodeRef<'_>,
    ) -> bool {
        tracing::trace!(%subject, %property, %resource, "resource");
        self.model
            .insert(TripleRef::new(subject.as_subject(), property.as_ref(), resource))
    }

    /// Everything added to the model since the ontology was loaded.
    pub fn instances_only(&self) -> Graph {
        let mut instances = Graph::new();
        for triple in self.model.iter() {
            if !self.base.contains(triple) {
                instances.insert(triple);
            }
        }
        instances
    }
}

fn read_graph(
    quads: impl Iterator<Item = Result<Quad, RdfParseError>>,
) -> Result<Graph, ConfigError> {
    let mut graph = Graph::new();
    for quad in quads {
        let quad = quad?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    Ok(graph)
}

fn index_terms(graph: &Graph) -> Result<FxHashMap<String, TermKind>, ConfigError> {
    let mut terms = FxHashMap::default();
    for triple in graph.triples_for_predicate(rdf::TYPE) {
        let (NamedOrBlankNodeRef::NamedNode(subject), TermRef::NamedNode(declared)) =
            (triple.subject, triple.object)
        else {
            continue;
        };
        let kind = if declared == owl::CLASS || declared == rdfs::CLASS {
            TermKind::Class
        } else if declared == owl::DATATYPE_PROPERTY {
            TermKind::DatatypeProperty
        } else if declared == owl::OBJECT_PROPERTY {
            TermKind::ObjectProperty
        } else {
            continue;
        };
        match terms.get(subject.as_str()) {
            Some(declared) if *declared != kind => {
                return Err(ConfigError::ConflictingTermKind {
                    iri: subject.as_str().to_owned(),
                    first: *declared,
                    second: kind,
                });
            }
            Some(_) => (),
            None => {
                terms.insert(subject.as_str().to_owned(), kind);
            }
        }
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://example.org/onto#";
    const DOCUMENT: &str = r#"
        @prefix ex: <http://example.org/onto#> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        ex:Person a owl:Class .
        ex:name a owl:DatatypeProperty .
        ex:knows a owl:ObjectProperty .
    "#;

    fn facade() -> OntologyFacade {
        OntologyFacade::load(&OntologyConfig::embedded(DOCUMENT, NS)).unwrap()
    }

    #[test]
    fn lookups_check_term_kind() {
        let ontology = facade();
        ontology.owl_class("http://example.org/onto#Person").unwrap();
        ontology.datatype_property("http://example.org/onto#name").unwrap();
        ontology.object_property("http://example.org/onto#knows").unwrap();
        assert!(matches!(
            ontology.datatype_property("http://example.org/onto#knows"),
            Err(ConfigError::WrongTermKind {
                expected: TermKind::DatatypeProperty,
                found: TermKind::ObjectProperty,
                ..
            })
        ));
        assert!(matches!(
            ontology.object_property("http://example.org/onto#name"),
            Err(ConfigError::WrongTermKind {
                expected: TermKind::ObjectProperty,
                found: TermKind::DatatypeProperty,
                ..
            })
        ));
        assert!(matches!(
            ontology.owl_class("http://example.org/onto#Robot"),
            Err(ConfigError::UndefinedTerm { .. })
        ));
    }

    #[test]
    fn named_individuals_are_idempotent() {
        let mut ontology = facade();
        let first = ontology
            .named_individual("http://example.org/data/alice", NS, "Person")
            .unwrap();
        let second = ontology
            .named_individual("http://example.org/data/alice", NS, "Person")
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(ontology.instances_only().len(), 1);
    }

    #[test]
    fn anonymous_individuals_are_always_new() {
        let mut ontology = facade();
        let first = ontology.anonymous_individual(NS, "Person").unwrap();
        let second = ontology.anonymous_individual(NS, "Person").unwrap();
        assert_ne!(first, second);
        assert!(first.is_anonymous());
        assert_eq!(ontology.instances_only().len(), 2);
    }

    #[test]
    fn individual_lookup_never_creates() {
        let ontology = facade();
        assert!(matches!(
            ontology.individual("http://example.org/data/bob"),
            Err(DataError::UnknownIndividual { .. })
        ));
        assert!(!ontology.has_individual("http://example.org/data/bob"));
        assert!(!ontology.has_individual("not an iri"));
        assert!(ontology.instances_only().is_empty());
    }

    #[test]
    fn instances_exclude_the_schema() {
        let mut ontology = facade();
        let alice = ontology
            .named_individual("http://example.org/data/alice", NS, "Person")
            .unwrap();
        let name = ontology.datatype_property("http://example.org/onto#name").unwrap();
        ontology.add_literal(&alice, &name, &Literal::new_simple_literal("Alice"));
        let instances = ontology.instances_only();
        assert_eq!(instances.len(), 2);
        assert_eq!(ontology.model().len(), ontology.base().len() + 2);
        for triple in instances.iter() {
            assert!(!ontology.base().contains(triple));
        }
    }

    #[test]
    fn relative_identifiers_use_the_instance_base() {
        let ontology = facade().with_instance_base("http://example.org/data/");
        assert_eq!(
            ontology.individual_uri("reg1").unwrap().as_str(),
            "http://example.org/data/reg1"
        );
        assert_eq!(
            ontology.individual_uri("http://other.example/x").unwrap().as_str(),
            "http://other.example/x"
        );
    }

    #[test]
    fn unknown_format_is_reported() {
        let config = OntologyConfig::from_file("/nonexistent/onto", NS);
        assert!(matches!(
            OntologyFacade::load(&config),
            Err(ConfigError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let config = OntologyConfig::embedded("@prefix broken", NS);
        assert!(matches!(
            OntologyFacade::load(&config),
            Err(ConfigError::OntologyParse(_))
        ));
    }

    #[test]
    fn identifiers_cannot_name_schema_terms() {
        let mut ontology = facade();
        assert!(matches!(
            ontology.individual_uri("name"),
            Err(DataError::SchemaTermIdentifier {
                kind: TermKind::DatatypeProperty,
                ..
            })
        ));
        assert!(matches!(
            ontology.named_individual("http://example.org/onto#knows", NS, "Person"),
            Err(MappingError::Data(DataError::SchemaTermIdentifier { .. }))
        ));
        assert!(!ontology.has_individual("http://example.org/onto#knows"));
        assert!(ontology.instances_only().is_empty());
        assert_eq!(
            ontology.individual_uri("alice").unwrap().as_str(),
            "http://example.org/onto#alice"
        );
    }

    #[test]
    fn conflicting_declarations_are_rejected() {
        let config = OntologyConfig::embedded(
            r"
            @prefix ex: <http://example.org/onto#> .
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            ex:size a owl:DatatypeProperty , owl:ObjectProperty .
            ",
            NS,
        );
        assert!(matches!(
            OntologyFacade::load(&config),
            Err(ConfigError::ConflictingTermKind { .. })
        ));
        let repeated = OntologyConfig::embedded(
            r"
            @prefix ex: <http://example.org/onto#> .
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            ex:Person a owl:Class , rdfs:Class .
            ",
            NS,
        );
        assert_eq!(
            OntologyFacade::load(&repeated).unwrap().term_kind("http://example.org/onto#Person"),
            Some(TermKind::Class)
        );
    }

    #[test]
    fn ontology_header() {
        assert!(facade().iri().is_none());
        let config = OntologyConfig::embedded(
            r"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            <http://example.org/onto> a owl:Ontology .
            ",
            NS,
        );
        let ontology = OntologyFacade::load(&config).unwrap();
        assert_eq!(
            ontology.iri().map(NamedNode::as_str),
            Some("http://example.org/onto")
        );
        assert_eq!(ontology.classes().count(), 0);
    }
}
