//! Discovery of the tags carried by an object graph, and their application to member values.

use crate::describe::{
    Describable, MemberDescriptor, MemberShape, StructuralElement, TypeDescriptor, TypeKind, Value,
};
use crate::error::{ConfigError, DataError, MappingError};
use crate::registry::MetadataRegistry;
use crate::tag::{ElementTagKey, IdentityTag, PropertyTag, Tag, TagKind, TransformMode};
use crate::transform::TransformRegistry;
use crate::vocab::ClassId;
use std::borrow::Cow;
use std::sync::Arc;

/// Counters of the work done by discovery.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Types whose tags have been extracted.
    pub types: usize,
    /// Members whose tags have been extracted.
    pub members: usize,
    /// Nested objects and enumeration values recursed into.
    pub recursions: usize,
}

/// The identity member of an individual and the value it currently holds.
#[derive(Debug, Clone)]
pub struct IdentityValue<'a> {
    pub owner: &'static TypeDescriptor,
    pub member: &'static MemberDescriptor,
    pub value: Value<'a>,
}

/// Walks object graphs to discover their tags, and applies the transforms the tags reference.
///
/// Discovery is keyed on types and members, not on instances: the tags of a type are
/// extracted once, and a member is recursed into the first time it holds a value.
/// Every operation reading tags requires the object to have been [processed](Self::process) first.
#[derive(Debug)]
pub struct TagProcessor {
    registry: MetadataRegistry,
    transforms: Arc<TransformRegistry>,
    stats: DiscoveryStats,
}

impl Default for TagProcessor {
    fn default() -> Self {
        Self::new(Arc::default())
    }
}

impl TagProcessor {
    /// Builds a processor instantiating its transforms in the given registry.
    pub fn new(transforms: Arc<TransformRegistry>) -> Self {
        Self {
            registry: MetadataRegistry::new(),
            transforms,
            stats: DiscoveryStats::default(),
        }
    }

    #[inline]
    pub fn registry(&self) -> &MetadataRegistry {
        &self.registry
    }

    #[inline]
    pub fn transforms(&self) -> &Arc<TransformRegistry> {
        &self.transforms
    }

    #[inline]
    pub fn stats(&self) -> DiscoveryStats {
        self.stats
    }

    /// Discovers the tags of the object, of its members and of everything reachable from them.
    ///
    /// Only the first non-null element of a collection is looked at: tags live on types,
    /// so all elements share them.
    pub fn process(&mut self, object: &dyn Describable) -> Result<(), ConfigError> {
        let descriptor = object.descriptor();
        if descriptor.is_foundation() {
            return Ok(());
        }
        self.discover_type(descriptor)?;
        if descriptor.kind() == TypeKind::Enum {
            return Ok(());
        }
        for (owner, member) in descriptor.all_members() {
            self.discover_member(owner, member);
            let element = StructuralElement::of_member(owner, member);
            if self.registry.has_visited(element) {
                continue;
            }
            let value = Self::member_value(object, owner, member)?;
            let target = match (member.shape(), &value) {
                (_, Value::Null) => None,
                (MemberShape::Collection, _) | (_, Value::Seq(_)) => value.representative(),
                (MemberShape::Single, single) => Some(single),
            };
            let Some(target) = target else {
                continue;
            };
            self.registry.record_visited(element);
            match target {
                Value::Object(nested) => {
                    self.stats.recursions += 1;
                    self.process(*nested)?;
                }
                Value::Enum(value) => {
                    self.stats.recursions += 1;
                    self.discover_type(value.descriptor())?;
                }
                Value::Null | Value::Literal(_) | Value::Iri(_) | Value::Seq(_) => (),
            }
        }
        Ok(())
    }

    fn discover_type(&mut self, descriptor: &'static TypeDescriptor) -> Result<(), ConfigError> {
        let element = StructuralElement::of_type(descriptor);
        if self.registry.has_visited(element) {
            return Ok(());
        }
        if let Some(tag) = descriptor.individual() {
            Self::identity_member(descriptor)?;
            self.registry.put(
                ElementTagKey::new(element, TagKind::Individual),
                Tag::Individual(tag),
            );
        }
        self.registry.record_visited(element);
        self.stats.types += 1;
        tracing::debug!(
            type_name = descriptor.name(),
            individual = descriptor.individual().is_some(),
            "discovered type"
        );
        Ok(())
    }

    fn discover_member(
        &mut self,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
    ) {
        let element = StructuralElement::of_member(owner, member);
        let mut discovered = false;
        if let Some(tag) = member.property_tag() {
            let key = ElementTagKey::new(element, TagKind::Property);
            if self.registry.get(key).is_none() {
                if let Some(transform) = tag.transform() {
                    self.transforms.register(transform, tag.mode());
                }
                self.registry.put(key, Tag::Property(tag));
                discovered = true;
            }
        }
        if let Some(tag) = member.identity_tag() {
            let key = ElementTagKey::new(element, TagKind::Identity);
            if self.registry.get(key).is_none() {
                if let Some(transform) = tag.transform() {
                    self.transforms.register_identity(transform);
                }
                self.registry.put(key, Tag::Identity(tag));
                discovered = true;
            }
        }
        if discovered {
            self.stats.members += 1;
            tracing::trace!(member = %element, "discovered member tags");
        }
    }

    /// Returns `true` if the type is tagged as an individual.
    #[inline]
    pub fn is_individual(descriptor: &TypeDescriptor) -> bool {
        descriptor.individual().is_some()
    }

    /// The class of the individuals of this type.
    pub fn resolve_owl_class(descriptor: &TypeDescriptor) -> Result<ClassId, ConfigError> {
        let tag = descriptor
            .individual()
            .ok_or(ConfigError::MissingIndividualTag {
                type_name: descriptor.name(),
            })?;
        if tag.class().as_str().is_empty() {
            return Err(ConfigError::MissingClass {
                type_name: descriptor.name(),
            });
        }
        Ok(tag.class())
    }

    /// The single member of the type, superclasses included, tagged as identity.
    pub fn identity_member(
        descriptor: &'static TypeDescriptor,
    ) -> Result<(&'static TypeDescriptor, &'static MemberDescriptor), ConfigError> {
        let mut candidates = descriptor
            .all_members()
            .filter(|(_, member)| member.identity_tag().is_some());
        match (candidates.next(), candidates.count()) {
            (None, _) => Err(ConfigError::MissingIdentity {
                type_name: descriptor.name(),
            }),
            (Some(found), 0) => Ok(found),
            (Some(_), others) => Err(ConfigError::AmbiguousIdentity {
                type_name: descriptor.name(),
                candidates: others + 1,
            }),
        }
    }

    /// The discovered property tag of a member.
    pub fn property_tag(
        &self,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
    ) -> Result<PropertyTag, ConfigError> {
        let key = ElementTagKey::new(StructuralElement::of_member(owner, member), TagKind::Property);
        match self.registry.get(key) {
            Some(Tag::Property(tag)) => Ok(tag),
            _ => Err(ConfigError::UndiscoveredMember {
                owner: owner.name(),
                member: member.name(),
            }),
        }
    }

    fn identity_tag(
        &self,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
    ) -> Result<IdentityTag, ConfigError> {
        let key = ElementTagKey::new(StructuralElement::of_member(owner, member), TagKind::Identity);
        match self.registry.get(key) {
            Some(Tag::Identity(tag)) => Ok(tag),
            _ => Err(ConfigError::UndiscoveredMember {
                owner: owner.name(),
                member: member.name(),
            }),
        }
    }

    /// Converts the value of a property member into what is written to the graph.
    ///
    /// A field transform is applied to `raw`, element-wise for collections, and is skipped for
    /// null values. A class transform is applied to `enclosing`. Without a transform `raw` is
    /// returned as is.
    pub fn transform<'a>(
        &self,
        enclosing: &'a dyn Describable,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
        raw: Value<'a>,
    ) -> Result<Value<'a>, MappingError> {
        let tag = self.property_tag(owner, member)?;
        let Some(reference) = tag.transform() else {
            return Ok(raw);
        };
        let not_registered = || ConfigError::TransformNotRegistered {
            transform: reference.name(),
            owner: owner.name(),
            member: member.name(),
        };
        match tag.mode() {
            TransformMode::Field => {
                let transform = self
                    .transforms
                    .field(reference.name())
                    .ok_or_else(not_registered)?;
                Ok(match raw {
                    Value::Null => Value::Null,
                    Value::Seq(items) => Value::Seq(
                        items
                            .into_iter()
                            .filter(|item| !item.is_null())
                            .map(|item| transform.apply(item))
                            .collect::<Result<_, _>>()?,
                    ),
                    single => transform.apply(single)?,
                })
            }
            TransformMode::Class => {
                let transform = self
                    .transforms
                    .class(reference.name())
                    .ok_or_else(not_registered)?;
                Ok(transform.apply(Value::Object(enclosing))?)
            }
        }
    }

    /// Computes the identifier of `inner` from its identity member.
    ///
    /// `outer` is the object `inner` was reached from, if any.
    pub fn transform_identity(
        &self,
        outer: Option<&dyn Describable>,
        inner: &dyn Describable,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
    ) -> Result<String, MappingError> {
        let tag = self.identity_tag(owner, member)?;
        let raw = Self::member_value(inner, owner, member)?;
        if raw.is_null() {
            return Err(DataError::NullIdentity {
                owner: owner.name(),
                member: member.name(),
            }
            .into());
        }
        if let Some(reference) = tag.transform() {
            let transform = self.transforms.identity(reference.name()).ok_or(
                ConfigError::TransformNotRegistered {
                    transform: reference.name(),
                    owner: owner.name(),
                    member: member.name(),
                },
            )?;
            return Ok(transform.apply(outer, &raw)?);
        }
        let identifier = raw.lexical().map(Cow::into_owned);
        identifier.ok_or_else(|| {
            DataError::UnsupportedIdentity {
                owner: owner.name(),
                member: member.name(),
                found: raw.kind_name(),
            }
            .into()
        })
    }

    /// Reads the value of a member declared by the descriptor of `object` or of its superclasses.
    ///
    /// An object not answering a declared member disagrees with its own descriptor.
    pub fn member_value<'a>(
        object: &'a dyn Describable,
        owner: &'static TypeDescriptor,
        member: &'static MemberDescriptor,
    ) -> Result<Value<'a>, ConfigError> {
        object
            .member(member.name())
            .ok_or_else(|| ConfigError::UndescribedMember {
                type_name: object.descriptor().name(),
                owner: owner.name(),
                member: member.name(),
            })
    }

    /// Finds the identity member of `individual` and reads its value.
    pub fn get_identity_value<'a>(
        individual: &'a dyn Describable,
    ) -> Result<IdentityValue<'a>, ConfigError> {
        let (owner, member) = Self::identity_member(individual.descriptor())?;
        Ok(IdentityValue {
            owner,
            member,
            value: Self::member_value(individual, owner, member)?,
        })
    }

    /// The identifier of `individual`, reached from `outer`.
    pub fn get_individual_id(
        &self,
        outer: Option<&dyn Describable>,
        individual: &dyn Describable,
    ) -> Result<String, MappingError> {
        let identity = Self::get_identity_value(individual)?;
        self.transform_identity(outer, individual, identity.owner, identity.member)
    }
}
