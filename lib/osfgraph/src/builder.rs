//! Materialization of processed object graphs as individuals and statements.

use crate::describe::{Describable, MemberDescriptor, TypeDescriptor, Value};
use crate::entity::Individual;
use crate::error::{DataError, MappingError};
use crate::ontology::OntologyFacade;
use crate::processor::TagProcessor;
use crate::selector::Selector;
use crate::tag::PropertyTag;
use crate::transform::TransformRegistry;
use crate::vocab::{ClassId, PropertyId, PropertyKind, TermKind, split_iri};
use oxrdf::{Graph, Literal, NamedNode, NamedNodeRef};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// The subject of a statement: an existing named individual looked up by IRI, or an individual handle.
#[derive(Debug, Clone, Copy)]
pub enum SubjectRef<'a> {
    Uri(&'a str),
    Individual(&'a Individual),
}

impl<'a> From<&'a str> for SubjectRef<'a> {
    #[inline]
    fn from(uri: &'a str) -> Self {
        Self::Uri(uri)
    }
}

impl<'a> From<&'a NamedNode> for SubjectRef<'a> {
    #[inline]
    fn from(uri: &'a NamedNode) -> Self {
        Self::Uri(uri.as_str())
    }
}

impl<'a> From<&'a Individual> for SubjectRef<'a> {
    #[inline]
    fn from(individual: &'a Individual) -> Self {
        Self::Individual(individual)
    }
}

/// Builds the instance graph of tagged objects on top of an ontology.
///
/// ```
/// use osfgraph::{GraphBuilder, OntologyConfig, OntologyFacade, osf};
///
/// let mut builder = GraphBuilder::new(OntologyFacade::load(&OntologyConfig::osf())?);
/// let user = builder.new_named_individual(osf::vocab::USER, "abc12")?;
/// builder.add_literal(&user, osf::vocab::HAS_GIVEN_NAME, "Ada")?;
/// assert_eq!(user.as_str(), "https://osf.io/abc12");
/// assert_eq!(builder.instance_graph().len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    ontology: OntologyFacade,
    processor: TagProcessor,
}

impl GraphBuilder {
    /// Builds a builder with its own transform registry.
    pub fn new(ontology: OntologyFacade) -> Self {
        Self::with_transforms(ontology, Arc::default())
    }

    /// Builds a builder sharing a transform registry, e.g. with builders of other threads.
    pub fn with_transforms(ontology: OntologyFacade, transforms: Arc<TransformRegistry>) -> Self {
        Self {
            ontology,
            processor: TagProcessor::new(transforms),
        }
    }

    #[inline]
    pub fn ontology(&self) -> &OntologyFacade {
        &self.ontology
    }

    #[inline]
    pub fn processor(&self) -> &TagProcessor {
        &self.processor
    }

    #[inline]
    pub fn into_ontology(self) -> OntologyFacade {
        self.ontology
    }

    /// Adds the object and everything reachable from it.
    ///
    /// Returns the named individuals the object graph maps to, keyed by IRI.
    /// Adding an object graph again, or one overlapping with a previous one, extends
    /// the existing individuals without duplicating statements.
    /// On error, the statements written before the failure are kept.
    pub fn add(
        &mut self,
        object: &dyn Describable,
    ) -> Result<FxHashMap<NamedNode, Individual>, MappingError> {
        self.processor.process(object)?;
        let mut emitted = FxHashMap::default();
        self.emit(None, object, &mut emitted)?;
        Ok(emitted)
    }

    fn emit(
        &mut self,
        outer: Option<&dyn Describable>,
        object: &dyn Describable,
        emitted: &mut FxHashMap<NamedNode, Individual>,
    ) -> Result<Individual, MappingError> {
        let descriptor = object.descriptor();
        let class = TagProcessor::resolve_owl_class(descriptor)?;
        let identifier = self.processor.get_individual_id(outer, object)?;
        let uri = self.ontology.individual_uri(&identifier)?;
        if let Some(individual) = emitted.get(&uri) {
            return Ok(individual.clone());
        }
        let (namespace, local_class) = split_iri(class.as_str());
        let individual = self
            .ontology
            .named_individual(uri.as_str(), namespace, local_class)?;
        emitted.insert(uri, individual.clone());
        for (owner, member) in descriptor.all_members() {
            let Some(tag) = member.property_tag() else {
                continue;
            };
            let raw = TagProcessor::member_value(object, owner, member)?;
            let value = self.processor.transform(object, owner, member, raw)?;
            let target = Target {
                subject: &individual,
                enclosing: object,
                owner,
                member,
                tag,
            };
            self.write(&target, value, emitted)?;
        }
        Ok(individual)
    }

    fn write(
        &mut self,
        target: &Target<'_>,
        value: Value<'_>,
        emitted: &mut FxHashMap<NamedNode, Individual>,
    ) -> Result<(), MappingError> {
        let property = target.tag.property();
        match (property.kind(), value) {
            (_, Value::Null) => (),
            (_, Value::Seq(items)) => {
                for item in items {
                    self.write(target, item, emitted)?;
                }
            }
            (PropertyKind::Datatype, Value::Literal(literal)) => {
                let property = self.ontology.datatype_property(property.as_str())?;
                self.ontology
                    .add_literal(target.subject, &property, &literal);
            }
            (PropertyKind::Datatype, Value::Enum(value)) => {
                let property = self.ontology.datatype_property(property.as_str())?;
                self.ontology.add_literal(
                    target.subject,
                    &property,
                    &Literal::new_simple_literal(value.variant()),
                );
            }
            (PropertyKind::Object, Value::Iri(iri)) => {
                let property = self.ontology.object_property(property.as_str())?;
                self.ontology
                    .add_resource(target.subject, &property, iri.as_ref());
            }
            (PropertyKind::Object, Value::Literal(identifier)) => {
                let property = self.ontology.object_property(property.as_str())?;
                let iri = self.ontology.individual_uri(identifier.value())?;
                self.ontology
                    .add_resource(target.subject, &property, iri.as_ref());
            }
            (PropertyKind::Object, Value::Object(nested)) => {
                let property = self.ontology.object_property(property.as_str())?;
                if !TagProcessor::is_individual(nested.descriptor()) {
                    return Err(target.unsupported(format!(
                        "{} is not tagged as an individual",
                        nested.descriptor().name()
                    )));
                }
                self.processor.process(nested)?;
                let object = self.emit(Some(target.enclosing), nested, emitted)?;
                self.ontology
                    .add_object(target.subject, &property, &object);
            }
            (PropertyKind::Datatype, value @ (Value::Iri(_) | Value::Object(_)))
            | (PropertyKind::Object, value @ Value::Enum(_)) => {
                return Err(target.unsupported(format!(
                    "{} cannot be the value of {}",
                    value.kind_name(),
                    TermKind::from(property.kind())
                )));
            }
        }
        Ok(())
    }

    /// Creates a new anonymous individual of the class.
    pub fn new_individual(&mut self, class: ClassId) -> Result<Individual, MappingError> {
        let (namespace, local_class) = split_iri(class.as_str());
        Ok(self.ontology.anonymous_individual(namespace, local_class)?)
    }

    /// Creates, or returns if it already exists, the named individual of the class with the given identifier.
    ///
    /// The identifier is rendered with [`Display`](fmt::Display) and resolved against the instance base.
    pub fn new_named_individual(
        &mut self,
        class: ClassId,
        id: impl fmt::Display,
    ) -> Result<NamedNode, MappingError> {
        let uri = self.ontology.individual_uri(&id.to_string())?;
        let (namespace, local_class) = split_iri(class.as_str());
        self.ontology
            .named_individual(uri.as_str(), namespace, local_class)?;
        Ok(uri)
    }

    /// Links two existing named individuals with an object property.
    pub fn add_individual(
        &mut self,
        subject_uri: &str,
        property: PropertyId,
        object_uri: &str,
    ) -> Result<bool, MappingError> {
        let subject = self.ontology.individual(subject_uri)?;
        let object = self.ontology.individual(object_uri)?;
        let property = self.ontology.object_property(property.as_str())?;
        Ok(self.ontology.add_object(&subject, &property, &object))
    }

    /// Links a subject to an anonymous individual created with [`new_individual`](Self::new_individual).
    pub fn add_anon_individual<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        property: PropertyId,
        anonymous: &Individual,
    ) -> Result<bool, MappingError> {
        if let Individual::Named(iri) = anonymous {
            return Err(DataError::NotAnonymous {
                iri: iri.as_str().to_owned(),
            }
            .into());
        }
        let subject = self.subject(subject.into())?;
        let property = self.ontology.object_property(property.as_str())?;
        Ok(self.ontology.add_object(&subject, &property, anonymous))
    }

    /// Writes a literal with a datatype property.
    pub fn add_literal<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        property: PropertyId,
        value: impl Into<Literal>,
    ) -> Result<bool, MappingError> {
        let subject = self.subject(subject.into())?;
        let property = self.ontology.datatype_property(property.as_str())?;
        Ok(self.ontology.add_literal(&subject, &property, &value.into()))
    }

    /// Writes a reference to a resource with an object property.
    pub fn add_resource<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        property: PropertyId,
        resource: NamedNodeRef<'_>,
    ) -> Result<bool, MappingError> {
        let subject = self.subject(subject.into())?;
        let property = self.ontology.object_property(property.as_str())?;
        Ok(self.ontology.add_resource(&subject, &property, resource))
    }

    fn subject(&self, subject: SubjectRef<'_>) -> Result<Individual, DataError> {
        match subject {
            SubjectRef::Uri(uri) => self.ontology.individual(uri),
            SubjectRef::Individual(individual) => Ok(individual.clone()),
        }
    }

    /// The selector keeping statements about individuals of the ontology namespace.
    pub fn selector(&self) -> Selector {
        Selector::new(self.ontology.namespace())
    }

    /// The statements added since the ontology was loaded, filtered by the [`selector`](Self::selector).
    pub fn instance_graph(&self) -> Graph {
        self.selector()
            .select(self.ontology.model(), &self.ontology.instances_only())
    }
}

/// Where a member value is written.
struct Target<'a> {
    subject: &'a Individual,
    enclosing: &'a dyn Describable,
    owner: &'static TypeDescriptor,
    member: &'static MemberDescriptor,
    tag: PropertyTag,
}

impl Target<'_> {
    fn unsupported(&self, reason: String) -> MappingError {
        DataError::UnsupportedValue {
            owner: self.owner.name(),
            member: self.member.name(),
            property: self.tag.property().as_str(),
            reason,
        }
        .into()
    }
}
