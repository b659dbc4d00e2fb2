use osfgraph::osf::{Node, OsfPackageGraph};
use osfgraph::{ConfigError, OntologyConfig, OntologyFacade, TermKind, TransformRegistry};
use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, NamedNodeRef, TripleRef};
use oxrdfio::RdfFormat;
use std::io::Write;
use std::sync::Arc;

const NS: &str = "http://example.org/onto#";

fn write_document(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn shipped_ontology() {
    let ontology = OntologyFacade::load(&OntologyConfig::osf()).unwrap();
    assert_eq!(ontology.classes().count(), 6);
    assert_eq!(ontology.data_properties().count(), 18);
    assert_eq!(ontology.object_properties().count(), 7);
    assert_eq!(ontology.namespace(), OntologyConfig::OSF_NAMESPACE);
    assert_eq!(
        ontology.iri().map(NamedNode::as_str),
        Some("http://dataconservancy.org/osf-business-object-model")
    );
    assert_eq!(ontology.instance_base(), OntologyConfig::OSF_INSTANCE_BASE);
    assert_eq!(ontology.base(), ontology.model());
    assert!(ontology.instances_only().is_empty());
}

#[test]
fn load_turtle_file() {
    let file = write_document(
        ".ttl",
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
         <#Dataset> a owl:Class .\n\
         <#title> a owl:DatatypeProperty .\n\
         <#part> a owl:ObjectProperty .\n",
    );
    let ontology = OntologyFacade::load(&OntologyConfig::from_file(file.path(), NS)).unwrap();
    // relative IRIs are resolved against the namespace
    assert_eq!(
        ontology.term_kind("http://example.org/onto#Dataset"),
        Some(TermKind::Class)
    );
    assert!(ontology.datatype_property("http://example.org/onto#title").is_ok());
    assert!(matches!(
        ontology.object_property("http://example.org/onto#title"),
        Err(ConfigError::WrongTermKind {
            expected: TermKind::ObjectProperty,
            found: TermKind::DatatypeProperty,
            ..
        })
    ));
}

#[test]
fn load_n_triples_file() {
    let file = write_document(
        ".data",
        "<http://example.org/onto#Dataset> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .\n",
    );
    let config = OntologyConfig::from_file(file.path(), NS);
    assert!(matches!(
        OntologyFacade::load(&config),
        Err(ConfigError::UnknownFormat { .. })
    ));

    let mut ontology =
        OntologyFacade::load(&config.with_format(RdfFormat::NTriples)).unwrap();
    let individual = ontology
        .named_individual("http://example.org/data/d1", NS, "Dataset")
        .unwrap();
    assert!(individual.is_named());
    assert!(ontology.model().contains(TripleRef::new(
        &NamedNode::new("http://example.org/data/d1").unwrap(),
        rdf::TYPE,
        NamedNodeRef::new("http://example.org/onto#Dataset").unwrap()
    )));
}

#[test]
fn missing_file() {
    let config = OntologyConfig::from_file("/nonexistent/ontology.ttl", NS);
    assert!(matches!(
        OntologyFacade::load(&config),
        Err(ConfigError::OntologyNotFound { .. })
    ));
}

#[test]
fn invalid_document() {
    let file = write_document(".ttl", "this is not turtle");
    assert!(matches!(
        OntologyFacade::load(&OntologyConfig::from_file(file.path(), NS)),
        Err(ConfigError::OntologyParse(_))
    ));
}

#[test]
fn osf_graph_with_custom_instance_base() {
    let config = OntologyConfig::osf().with_instance_base("https://staging.osf.io/");
    let mut graph = OsfPackageGraph::with_config(&config, Arc::new(TransformRegistry::new())).unwrap();
    let individuals = graph.add_node(&Node::new("abc12")).unwrap();
    assert!(individuals.contains_key(&NamedNode::new("https://staging.osf.io/abc12").unwrap()));
}
