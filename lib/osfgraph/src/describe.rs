//! Static description of tagged types and the values of their members.
//!
//! Each domain type implements [`Describable`]: it points to a `'static`
//! [`TypeDescriptor`] listing its tags and members, and answers the current value
//! of a member by name. The walk relies on nothing else, so no runtime
//! introspection is needed.

use crate::tag::{IdentityTag, IndividualTag, PropertyTag};
use oxrdf::{Literal, NamedNode};
use std::borrow::Cow;
use std::{fmt, iter};

/// Type name prefixes the walk never descends into.
pub const FOUNDATION_NAMESPACES: &[&str] =
    &["std::", "core::", "alloc::", "oxrdf::", "oxsdatatypes::"];

/// An object whose type carries tags.
pub trait Describable {
    /// The description of the object's type.
    fn descriptor(&self) -> &'static TypeDescriptor;

    /// The current value of the member `name`, including members declared by superclasses.
    ///
    /// Returns `None` if the type has no such member.
    fn member(&self, name: &str) -> Option<Value<'_>>;
}

/// Whether a type is a plain structure or an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    /// Enumerations are never unwrapped nor recursed into member-wise.
    Enum,
}

/// The tags and members of a type.
///
/// Descriptors are built in `static` items:
/// ```
/// use osfgraph::{ClassId, IdentityTag, IndividualTag, MemberDescriptor, TypeDescriptor};
///
/// const THING_MEMBERS: &[MemberDescriptor] =
///     &[MemberDescriptor::single("id").with_identity(IdentityTag::new())];
///
/// static THING: TypeDescriptor = TypeDescriptor::new("my_crate::Thing")
///     .with_individual(IndividualTag::new(ClassId::new("http://example.org/onto#Thing")))
///     .with_members(THING_MEMBERS);
///
/// assert!(THING.individual().is_some());
/// assert_eq!(THING.all_members().count(), 1);
/// ```
#[derive(Debug)]
pub struct TypeDescriptor {
    name: &'static str,
    kind: TypeKind,
    superclass: Option<&'static TypeDescriptor>,
    individual: Option<IndividualTag>,
    members: &'static [MemberDescriptor],
}

impl TypeDescriptor {
    /// A structure type without tags nor members.
    ///
    /// `name` must be unique among described types: it keys the tag cache.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            kind: TypeKind::Struct,
            superclass: None,
            individual: None,
            members: &[],
        }
    }

    /// An enumeration type.
    #[inline]
    pub const fn enumeration(name: &'static str) -> Self {
        let mut descriptor = Self::new(name);
        descriptor.kind = TypeKind::Enum;
        descriptor
    }

    #[inline]
    #[must_use]
    pub const fn with_superclass(mut self, superclass: &'static TypeDescriptor) -> Self {
        self.superclass = Some(superclass);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_individual(mut self, tag: IndividualTag) -> Self {
        self.individual = Some(tag);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_members(mut self, members: &'static [MemberDescriptor]) -> Self {
        self.members = members;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub const fn superclass(&self) -> Option<&'static TypeDescriptor> {
        self.superclass
    }

    #[inline]
    pub const fn individual(&self) -> Option<IndividualTag> {
        self.individual
    }

    /// Members declared by this type only.
    #[inline]
    pub const fn members(&self) -> &'static [MemberDescriptor] {
        self.members
    }

    /// Members of this type then of its superclasses, with the type declaring each of them.
    pub fn all_members(
        &'static self,
    ) -> impl Iterator<Item = (&'static TypeDescriptor, &'static MemberDescriptor)> {
        iter::successors(Some(self), |descriptor| descriptor.superclass).flat_map(|owner| {
            owner.members.iter().map(move |member| (owner, member))
        })
    }

    /// Returns `true` if the type belongs to a namespace the walk ignores.
    pub fn is_foundation(&self) -> bool {
        FOUNDATION_NAMESPACES
            .iter()
            .any(|namespace| self.name.starts_with(namespace))
    }
}

/// Whether a member holds one value or a sequence of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberShape {
    Single,
    Collection,
}

/// A member of a type and its tags.
#[derive(Debug, Clone, Copy)]
pub struct MemberDescriptor {
    name: &'static str,
    shape: MemberShape,
    property: Option<PropertyTag>,
    identity: Option<IdentityTag>,
}

impl MemberDescriptor {
    #[inline]
    pub const fn single(name: &'static str) -> Self {
        Self {
            name,
            shape: MemberShape::Single,
            property: None,
            identity: None,
        }
    }

    /// A member holding a list, a set or an array.
    #[inline]
    pub const fn collection(name: &'static str) -> Self {
        let mut member = Self::single(name);
        member.shape = MemberShape::Collection;
        member
    }

    #[inline]
    #[must_use]
    pub const fn with_property(mut self, tag: PropertyTag) -> Self {
        self.property = Some(tag);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_identity(mut self, tag: IdentityTag) -> Self {
        self.identity = Some(tag);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn shape(&self) -> MemberShape {
        self.shape
    }

    #[inline]
    pub const fn property_tag(&self) -> Option<PropertyTag> {
        self.property
    }

    #[inline]
    pub const fn identity_tag(&self) -> Option<IdentityTag> {
        self.identity
    }
}

/// A type or a member of a type, used as a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralElement {
    Type(&'static str),
    Member {
        owner: &'static str,
        name: &'static str,
    },
}

impl StructuralElement {
    #[inline]
    pub const fn of_type(descriptor: &TypeDescriptor) -> Self {
        Self::Type(descriptor.name)
    }

    #[inline]
    pub const fn of_member(owner: &TypeDescriptor, member: &MemberDescriptor) -> Self {
        Self::Member {
            owner: owner.name,
            name: member.name,
        }
    }
}

impl fmt::Display for StructuralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Member { owner, name } => write!(f, "{owner}.{name}"),
        }
    }
}

/// A variant of a described enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    descriptor: &'static TypeDescriptor,
    variant: &'static str,
}

impl EnumValue {
    #[inline]
    pub const fn new(descriptor: &'static TypeDescriptor, variant: &'static str) -> Self {
        Self {
            descriptor,
            variant,
        }
    }

    #[inline]
    pub const fn descriptor(&self) -> &'static TypeDescriptor {
        self.descriptor
    }

    #[inline]
    pub const fn variant(&self) -> &'static str {
        self.variant
    }
}

impl PartialEq for TypeDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

impl std::hash::Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// The value of a member, or the input and output of a transform.
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Literal(Literal),
    /// A reference to a resource.
    Iri(NamedNode),
    Enum(EnumValue),
    Object(&'a dyn Describable),
    /// The content of a collection member. Sparse collections contain [`Value::Null`].
    Seq(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A nested object.
    #[inline]
    pub fn object<T: Describable>(object: &'a T) -> Self {
        Self::Object(object)
    }

    /// A nested object if there is one.
    #[inline]
    pub fn optional<T: Describable>(object: Option<&'a T>) -> Self {
        object.map_or(Self::Null, |object| Self::Object(object))
    }

    /// A collection.
    pub fn seq<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// A collection of nested objects.
    pub fn objects<T: Describable>(items: &'a [T]) -> Self {
        Self::Seq(items.iter().map(|item| Self::Object(item)).collect())
    }

    /// A short description of the kind of value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Literal(_) => "a literal",
            Self::Iri(_) => "an IRI",
            Self::Enum(_) => "an enumeration value",
            Self::Object(_) => "an object",
            Self::Seq(_) => "a collection",
        }
    }

    /// The lexical form of a literal, a resource IRI or an enumeration variant.
    pub fn lexical(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Literal(literal) => Some(Cow::Borrowed(literal.value())),
            Self::Iri(iri) => Some(Cow::Borrowed(iri.as_str())),
            Self::Enum(value) => Some(Cow::Borrowed(value.variant)),
            Self::Null | Self::Object(_) | Self::Seq(_) => None,
        }
    }

    /// The first non-null element of a collection, that is its representative.
    ///
    /// Returns `None` for empty or all-null collections, and for values that are not collections.
    pub fn representative(&self) -> Option<&Self> {
        match self {
            Self::Seq(items) => items.iter().find(|item| !item.is_null()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Iri(iri) => f.debug_tuple("Iri").field(iri).finish(),
            Self::Enum(value) => write!(f, "Enum({}::{})", value.descriptor.name, value.variant),
            Self::Object(object) => write!(f, "Object({})", object.descriptor().name),
            Self::Seq(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl From<Literal> for Value<'_> {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<NamedNode> for Value<'_> {
    #[inline]
    fn from(iri: NamedNode) -> Self {
        Self::Iri(iri)
    }
}

impl From<EnumValue> for Value<'_> {
    #[inline]
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<&str> for Value<'_> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Literal(Literal::new_simple_literal(value))
    }
}

impl From<&String> for Value<'_> {
    #[inline]
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}

impl From<bool> for Value<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Value<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl<'a, T: Into<Self>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
