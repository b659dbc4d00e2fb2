//! Terms of the [OSF business object model](http://dataconservancy.org/osf-business-object-model).

use crate::vocab::{ClassId, PropertyId};

/// A project or component.
pub const NODE: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#Node");
/// A frozen, timestamped copy of a node.
pub const REGISTRATION: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#Registration");
pub const WIKI: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#Wiki");
pub const USER: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#User");
/// The participation of a user in a node.
pub const CONTRIBUTOR: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#Contributor");
/// A checksum, only reachable through the resource it describes.
pub const HASH: ClassId =
    ClassId::new("http://dataconservancy.org/osf-business-object-model#Hash");

pub const HAS_WIKI: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#hasWiki");
pub const AUTHORED_BY: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#authoredBy");
pub const HAS_CONTRIBUTOR: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#hasContributor");
pub const HAS_USER: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#hasUser");
pub const HAS_PARENT: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#hasParent");
/// Links a registration to the node it was registered from.
pub const REGISTERED_FROM: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#registeredFrom");
pub const HAS_HASH: PropertyId =
    PropertyId::object("http://dataconservancy.org/osf-business-object-model#hasHash");

pub const HAS_TITLE: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasTitle");
pub const HAS_DESCRIPTION: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasDescription");
pub const HAS_CATEGORY: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasCategory");
pub const HAS_TAG: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasTag");
pub const IS_PUBLIC: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#isPublic");
pub const DATE_CREATED: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#dateCreated");
pub const DATE_MODIFIED: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#dateModified");
pub const DATE_REGISTERED: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#dateRegistered");
pub const HAS_REGISTRATION_SUPPLEMENT: PropertyId = PropertyId::datatype(
    "http://dataconservancy.org/osf-business-object-model#hasRegistrationSupplement",
);
pub const HAS_NAME: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasName");
pub const HAS_CONTENT: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasContent");
pub const HAS_GIVEN_NAME: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasGivenName");
pub const HAS_FAMILY_NAME: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasFamilyName");
/// Computed from the given and family names.
pub const HAS_FULL_NAME: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasFullName");
pub const IS_BIBLIOGRAPHIC: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#isBibliographic");
pub const HAS_PERMISSION: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hasPermission");
pub const HASH_ALGORITHM: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hashAlgorithm");
pub const HASH_VALUE: PropertyId =
    PropertyId::datatype("http://dataconservancy.org/osf-business-object-model#hashValue");
