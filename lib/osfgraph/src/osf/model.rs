//! OSF business objects, as produced by the OSF API client.
//!
//! Relationships the client resolved are nested objects. Relationships left unresolved
//! keep the identifier of the target and are written as references to it.

use crate::describe::{Describable, EnumValue, MemberDescriptor, TypeDescriptor, Value};
use crate::osf::transforms::{CONTRIBUTOR_ID, DATE_TIME, ENUM_LABEL, FULL_NAME};
use crate::osf::vocab;
use crate::tag::{IdentityTag, IndividualTag, PropertyTag};

const NODE_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("title").with_property(PropertyTag::new(vocab::HAS_TITLE)),
    MemberDescriptor::single("description")
        .with_property(PropertyTag::new(vocab::HAS_DESCRIPTION)),
    MemberDescriptor::single("category")
        .with_property(PropertyTag::new(vocab::HAS_CATEGORY).with_transform(ENUM_LABEL)),
    MemberDescriptor::collection("tags").with_property(PropertyTag::new(vocab::HAS_TAG)),
    MemberDescriptor::single("public").with_property(PropertyTag::new(vocab::IS_PUBLIC)),
    MemberDescriptor::single("date_created")
        .with_property(PropertyTag::new(vocab::DATE_CREATED).with_transform(DATE_TIME)),
    MemberDescriptor::single("date_modified")
        .with_property(PropertyTag::new(vocab::DATE_MODIFIED).with_transform(DATE_TIME)),
    MemberDescriptor::single("parent").with_property(PropertyTag::new(vocab::HAS_PARENT)),
    MemberDescriptor::collection("wikis").with_property(PropertyTag::new(vocab::HAS_WIKI)),
    MemberDescriptor::collection("contributors")
        .with_property(PropertyTag::new(vocab::HAS_CONTRIBUTOR)),
];

pub static NODE: TypeDescriptor = TypeDescriptor::new("osfgraph::osf::Node")
    .with_individual(IndividualTag::new(vocab::NODE))
    .with_members(NODE_MEMBERS);

const REGISTRATION_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("date_registered")
        .with_property(PropertyTag::new(vocab::DATE_REGISTERED).with_transform(DATE_TIME)),
    MemberDescriptor::single("registered_from")
        .with_property(PropertyTag::new(vocab::REGISTERED_FROM)),
    MemberDescriptor::single("registration_supplement")
        .with_property(PropertyTag::new(vocab::HAS_REGISTRATION_SUPPLEMENT)),
];

pub static REGISTRATION: TypeDescriptor = TypeDescriptor::new("osfgraph::osf::Registration")
    .with_superclass(&NODE)
    .with_individual(IndividualTag::new(vocab::REGISTRATION))
    .with_members(REGISTRATION_MEMBERS);

const WIKI_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("name").with_property(PropertyTag::new(vocab::HAS_NAME)),
    MemberDescriptor::single("content").with_property(PropertyTag::new(vocab::HAS_CONTENT)),
    MemberDescriptor::single("date_modified")
        .with_property(PropertyTag::new(vocab::DATE_MODIFIED).with_transform(DATE_TIME)),
    MemberDescriptor::single("author").with_property(PropertyTag::new(vocab::AUTHORED_BY)),
];

pub static WIKI: TypeDescriptor = TypeDescriptor::new("osfgraph::osf::Wiki")
    .with_individual(IndividualTag::new(vocab::WIKI))
    .with_members(WIKI_MEMBERS);

const USER_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("given_name")
        .with_property(PropertyTag::new(vocab::HAS_GIVEN_NAME)),
    MemberDescriptor::single("family_name")
        .with_property(PropertyTag::new(vocab::HAS_FAMILY_NAME)),
    MemberDescriptor::single("full_name")
        .with_property(PropertyTag::new(vocab::HAS_FULL_NAME).with_class_transform(FULL_NAME)),
];

pub static USER: TypeDescriptor = TypeDescriptor::new("osfgraph::osf::User")
    .with_individual(IndividualTag::new(vocab::USER))
    .with_members(USER_MEMBERS);

const CONTRIBUTOR_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("user_id")
        .with_identity(IdentityTag::new().with_transform(CONTRIBUTOR_ID)),
    MemberDescriptor::single("user").with_property(PropertyTag::new(vocab::HAS_USER)),
    MemberDescriptor::single("bibliographic")
        .with_property(PropertyTag::new(vocab::IS_BIBLIOGRAPHIC)),
    MemberDescriptor::single("permission")
        .with_property(PropertyTag::new(vocab::HAS_PERMISSION).with_transform(ENUM_LABEL)),
];

pub static CONTRIBUTOR: TypeDescriptor = TypeDescriptor::new("osfgraph::osf::Contributor")
    .with_individual(IndividualTag::new(vocab::CONTRIBUTOR))
    .with_members(CONTRIBUTOR_MEMBERS);

pub static CATEGORY: TypeDescriptor = TypeDescriptor::enumeration("osfgraph::osf::Category");
pub static PERMISSION: TypeDescriptor = TypeDescriptor::enumeration("osfgraph::osf::Permission");

/// Category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Analysis,
    Communication,
    Data,
    Hypothesis,
    Instrumentation,
    MethodsAndMeasures,
    Procedure,
    Project,
    Software,
    Other,
    Uncategorized,
}

impl Category {
    /// The name used by the OSF API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Communication => "communication",
            Self::Data => "data",
            Self::Hypothesis => "hypothesis",
            Self::Instrumentation => "instrumentation",
            Self::MethodsAndMeasures => "methods and measures",
            Self::Procedure => "procedure",
            Self::Project => "project",
            Self::Software => "software",
            Self::Other => "other",
            Self::Uncategorized => "uncategorized",
        }
    }
}

impl From<Category> for Value<'_> {
    #[inline]
    fn from(category: Category) -> Self {
        Self::Enum(EnumValue::new(&CATEGORY, category.as_str()))
    }
}

/// Permission of a contributor on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
    Admin,
}

impl Permission {
    /// The name used by the OSF API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
        }
    }
}

impl From<Permission> for Value<'_> {
    #[inline]
    fn from(permission: Permission) -> Self {
        Self::Enum(EnumValue::new(&PERMISSION, permission.as_str()))
    }
}

/// A project or a component of a project.
///
/// Timestamps are kept as sent by the API and converted to `xsd:dateTime` when written.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub public: bool,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    /// Identifier of the parent node.
    pub parent: Option<String>,
    pub wikis: Vec<Wiki>,
    pub contributors: Vec<Contributor>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Describable for Node {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &NODE
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "id" => self.id.as_str().into(),
            "title" => self.title.as_deref().into(),
            "description" => self.description.as_deref().into(),
            "category" => self.category.into(),
            "tags" => Value::seq(&self.tags),
            "public" => self.public.into(),
            "date_created" => self.date_created.as_deref().into(),
            "date_modified" => self.date_modified.as_deref().into(),
            "parent" => self.parent.as_deref().into(),
            "wikis" => Value::objects(&self.wikis),
            "contributors" => Value::objects(&self.contributors),
            _ => return None,
        })
    }
}

/// A frozen copy of a node.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub node: Node,
    pub date_registered: Option<String>,
    /// Identifier of the node the registration was made from.
    pub registered_from: Option<String>,
    pub registration_supplement: Option<String>,
}

impl Registration {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            node: Node::new(id),
            ..Self::default()
        }
    }
}

impl Describable for Registration {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &REGISTRATION
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "date_registered" => self.date_registered.as_deref().into(),
            "registered_from" => self.registered_from.as_deref().into(),
            "registration_supplement" => self.registration_supplement.as_deref().into(),
            _ => return self.node.member(name),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Wiki {
    pub id: String,
    pub name: Option<String>,
    pub content: Option<String>,
    pub date_modified: Option<String>,
    pub author: Option<User>,
}

impl Wiki {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Describable for Wiki {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &WIKI
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_deref().into(),
            "content" => self.content.as_deref().into(),
            "date_modified" => self.date_modified.as_deref().into(),
            "author" => Value::optional(self.author.as_ref()),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct User {
    pub id: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Describable for User {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &USER
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "id" => self.id.as_str().into(),
            "given_name" => self.given_name.as_deref().into(),
            "family_name" => self.family_name.as_deref().into(),
            // computed from the whole user
            "full_name" => Value::Null,
            _ => return None,
        })
    }
}

/// The participation of a user in a node.
///
/// Its identifier is only unique within the node: it is reached from a node or not at all.
#[derive(Debug, Clone)]
pub struct Contributor {
    pub user_id: String,
    pub user: Option<User>,
    pub bibliographic: bool,
    pub permission: Permission,
}

impl Contributor {
    pub fn new(user_id: impl Into<String>, permission: Permission) -> Self {
        Self {
            user_id: user_id.into(),
            user: None,
            bibliographic: true,
            permission,
        }
    }
}

impl Describable for Contributor {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &CONTRIBUTOR
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "user_id" => self.user_id.as_str().into(),
            "user" => Value::optional(self.user.as_ref()),
            "bibliographic" => self.bibliographic.into(),
            "permission" => self.permission.into(),
            _ => return None,
        })
    }
}
