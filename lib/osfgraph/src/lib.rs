//! Ontology-validated mapping of tagged object graphs to RDF.
//!
//! Types describe how they correspond to the classes and properties of an OWL ontology
//! with static tables of tags (see [`Describable`]). A [`GraphBuilder`] walks object graphs
//! made of such types and writes individuals and statements on top of the ontology,
//! checking every class and property against the ontology document:
//! - types tagged with an [`IndividualTag`] become named individuals of its class,
//!   identified by the member carrying the [`IdentityTag`],
//! - members tagged with a [`PropertyTag`] become statements, after an optional [`Transform`],
//! - cycles and repeated sub-objects are walked once.
//!
//! The [`osf`] module applies it to the Open Science Framework business object model.
//!
//! # Example
//! ```
//! use osfgraph::osf::{Node, OsfPackageGraph};
//!
//! let mut node = Node::new("abc12");
//! node.title = Some("Replication study".into());
//! node.tags = vec!["psychology".into()];
//!
//! let mut graph = OsfPackageGraph::new()?;
//! graph.add_node(&node)?;
//! let instances = graph.instance_graph();
//! assert_eq!(instances.len(), 4); // type, title, tag and visibility
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod builder;
mod config;
mod describe;
mod entity;
mod error;
mod ontology;
pub mod osf;
mod processor;
mod registry;
mod selector;
mod tag;
mod transform;
pub mod vocab;

pub use builder::{GraphBuilder, SubjectRef};
pub use config::{OntologyConfig, OntologySource};
pub use describe::{
    Describable, EnumValue, FOUNDATION_NAMESPACES, MemberDescriptor, MemberShape,
    StructuralElement, TypeDescriptor, TypeKind, Value,
};
pub use entity::{DataProperty, Individual, ObjectProperty, OwlClass};
pub use error::{ConfigError, DataError, MappingError};
pub use ontology::OntologyFacade;
pub use processor::{DiscoveryStats, IdentityValue, TagProcessor};
pub use registry::MetadataRegistry;
pub use selector::Selector;
pub use tag::{ElementTagKey, IdentityTag, IndividualTag, PropertyTag, Tag, TagKind, TransformMode};
pub use transform::{
    IdentityTransform, IdentityTransformRef, Transform, TransformRef, TransformRegistry,
};
pub use vocab::{ClassId, PropertyId, PropertyKind, TermKind};
