//! Declarative tags attached to types and members.

use crate::describe::StructuralElement;
use crate::transform::{IdentityTransformRef, TransformRef};
use crate::vocab::{ClassId, PropertyId};

/// Marks a type as corresponding to an OWL class.
///
/// A type carrying this tag must have exactly one member carrying an [`IdentityTag`].
#[derive(Debug, Clone, Copy)]
pub struct IndividualTag {
    class: ClassId,
}

impl IndividualTag {
    #[inline]
    pub const fn new(class: ClassId) -> Self {
        Self { class }
    }

    #[inline]
    pub const fn class(&self) -> ClassId {
        self.class
    }
}

/// What a property transform receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformMode {
    /// The value of the tagged member.
    Field,
    /// The object declaring the tagged member.
    Class,
}

/// Marks a member as corresponding to an OWL datatype or object property.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTag {
    property: PropertyId,
    transform: Option<TransformRef>,
    mode: TransformMode,
}

impl PropertyTag {
    /// A property whose member value is written as is.
    #[inline]
    pub const fn new(property: PropertyId) -> Self {
        Self {
            property,
            transform: None,
            mode: TransformMode::Field,
        }
    }

    /// Converts the member value with `transform` before writing it.
    #[inline]
    #[must_use]
    pub const fn with_transform(mut self, transform: TransformRef) -> Self {
        self.transform = Some(transform);
        self.mode = TransformMode::Field;
        self
    }

    /// Computes the written value from the whole enclosing object with `transform`.
    #[inline]
    #[must_use]
    pub const fn with_class_transform(mut self, transform: TransformRef) -> Self {
        self.transform = Some(transform);
        self.mode = TransformMode::Class;
        self
    }

    #[inline]
    pub const fn property(&self) -> PropertyId {
        self.property
    }

    #[inline]
    pub const fn transform(&self) -> Option<TransformRef> {
        self.transform
    }

    #[inline]
    pub const fn mode(&self) -> TransformMode {
        self.mode
    }
}

/// Marks the member supplying the identifier of an individual.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTag {
    transform: Option<IdentityTransformRef>,
}

impl IdentityTag {
    /// The lexical form of the member value is the identifier.
    #[inline]
    pub const fn new() -> Self {
        Self { transform: None }
    }

    /// The identifier is computed by `transform` from the enclosing object and the member value.
    #[inline]
    #[must_use]
    pub const fn with_transform(mut self, transform: IdentityTransformRef) -> Self {
        self.transform = Some(transform);
        self
    }

    #[inline]
    pub const fn transform(&self) -> Option<IdentityTransformRef> {
        self.transform
    }
}

/// Any of the tags.
#[derive(Debug, Clone, Copy)]
pub enum Tag {
    Individual(IndividualTag),
    Property(PropertyTag),
    Identity(IdentityTag),
}

impl Tag {
    #[inline]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Individual(_) => TagKind::Individual,
            Self::Property(_) => TagKind::Property,
            Self::Identity(_) => TagKind::Identity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Individual,
    Property,
    Identity,
}

/// Key of the tag store: a structural element and the kind of tag looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementTagKey {
    pub element: StructuralElement,
    pub kind: TagKind,
}

impl ElementTagKey {
    #[inline]
    pub const fn new(element: StructuralElement, kind: TagKind) -> Self {
        Self { element, kind }
    }
}
