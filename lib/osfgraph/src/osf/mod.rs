//! The [Open Science Framework](https://osf.io) business object model.
//!
//! ```
//! use osfgraph::osf::{OsfPackageGraph, Registration, User, Wiki};
//!
//! let mut wiki = Wiki::new("wiki1");
//! wiki.author = Some(User::new("user1"));
//! let mut registration = Registration::new("reg1");
//! registration.node.wikis.push(wiki);
//!
//! let mut graph = OsfPackageGraph::new()?;
//! let individuals = graph.add_registration(&registration)?;
//! assert_eq!(individuals.len(), 3);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

pub mod model;
pub mod transforms;
pub mod vocab;

pub use model::{Category, Contributor, Node, Permission, Registration, User, Wiki};

use crate::builder::GraphBuilder;
use crate::config::OntologyConfig;
use crate::describe::Describable;
use crate::entity::Individual;
use crate::error::{ConfigError, MappingError};
use crate::ontology::OntologyFacade;
use crate::transform::TransformRegistry;
use oxrdf::{Graph, NamedNode};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// The instance graph of OSF objects, ready to be packaged.
#[derive(Debug)]
pub struct OsfPackageGraph {
    builder: GraphBuilder,
}

impl OsfPackageGraph {
    /// Builds a graph on top of the OSF ontology shipped with the crate.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_transforms(Arc::default())
    }

    /// Builds a graph sharing a transform registry with other graphs.
    pub fn with_transforms(transforms: Arc<TransformRegistry>) -> Result<Self, ConfigError> {
        Self::with_config(&OntologyConfig::osf(), transforms)
    }

    /// Builds a graph on top of another copy of the OSF ontology, or with another instance base.
    pub fn with_config(
        config: &OntologyConfig,
        transforms: Arc<TransformRegistry>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            builder: GraphBuilder::with_transforms(OntologyFacade::load(config)?, transforms),
        })
    }

    /// Adds a registration, the node it embeds and everything reachable from them.
    pub fn add_registration(
        &mut self,
        registration: &Registration,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.builder.add(registration)
    }

    pub fn add_node(
        &mut self,
        node: &Node,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.builder.add(node)
    }

    pub fn add_user(
        &mut self,
        user: &User,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.builder.add(user)
    }

    pub fn add_wiki(
        &mut self,
        wiki: &Wiki,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.builder.add(wiki)
    }

    /// Adds any tagged object.
    pub fn add(
        &mut self,
        object: &dyn Describable,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.builder.add(object)
    }

    /// Attaches a checksum to an existing individual.
    ///
    /// The checksum is an anonymous `osf:Hash`: keep the returned handle to add more statements about it.
    pub fn add_checksum(
        &mut self,
        subject: &NamedNode,
        algorithm: &str,
        value: &str,
    ) -> Result<Individual, MappingError> {
        self.builder.ontology().individual(subject.as_str())?;
        let hash = self.builder.new_individual(vocab::HASH)?;
        self.builder
            .add_literal(&hash, vocab::HASH_ALGORITHM, algorithm)?;
        self.builder.add_literal(&hash, vocab::HASH_VALUE, value)?;
        self.builder
            .add_anon_individual(subject, vocab::HAS_HASH, &hash)?;
        Ok(hash)
    }

    /// The statements about OSF individuals.
    pub fn instance_graph(&self) -> Graph {
        self.builder.instance_graph()
    }

    #[inline]
    pub fn builder(&self) -> &GraphBuilder {
        &self.builder
    }

    #[inline]
    pub fn builder_mut(&mut self) -> &mut GraphBuilder {
        &mut self.builder
    }
}
