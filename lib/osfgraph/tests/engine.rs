use osfgraph::{
    ClassId, ConfigError, DataError, Describable, GraphBuilder, IdentityTag, IndividualTag,
    MappingError, MemberDescriptor, OntologyConfig, OntologyFacade, PropertyId, PropertyTag,
    TypeDescriptor, Value,
};
use oxrdf::{Literal, NamedNode, NamedNodeRef, TripleRef};
use std::cell::Cell;

const ONTOLOGY: &str = r"
@prefix ex: <http://example.org/onto#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

ex:Person a owl:Class .
ex:Badge a owl:Class .
ex:name a owl:DatatypeProperty .
ex:knows a owl:ObjectProperty .
ex:homepage a owl:ObjectProperty .
ex:wears a owl:ObjectProperty .
";

const NS: &str = "http://example.org/onto#";

const PERSON_CLASS: ClassId = ClassId::new("http://example.org/onto#Person");
const NAME: PropertyId = PropertyId::datatype("http://example.org/onto#name");
const KNOWS: PropertyId = PropertyId::object("http://example.org/onto#knows");
const HOMEPAGE: PropertyId = PropertyId::object("http://example.org/onto#homepage");
const WEARS: PropertyId = PropertyId::object("http://example.org/onto#wears");

const PERSON_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("name").with_property(PropertyTag::new(NAME)),
    MemberDescriptor::single("knows").with_property(PropertyTag::new(KNOWS)),
    MemberDescriptor::single("homepage").with_property(PropertyTag::new(HOMEPAGE)),
    MemberDescriptor::single("badge").with_property(PropertyTag::new(WEARS)),
];

static PERSON: TypeDescriptor = TypeDescriptor::new("tests::Person")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(PERSON_MEMBERS);

// Badges are plain values, not individuals
static BADGE: TypeDescriptor = TypeDescriptor::new("tests::Badge");

struct Person<'a> {
    id: Option<&'static str>,
    name: &'static str,
    knows: Cell<Option<&'a Person<'a>>>,
    homepage: Option<NamedNode>,
    badge: Option<Badge>,
}

impl Person<'_> {
    fn new(name: &'static str) -> Self {
        Self {
            id: Some(name),
            name,
            knows: Cell::new(None),
            homepage: None,
            badge: None,
        }
    }
}

impl Describable for Person<'_> {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &PERSON
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "id" => self.id.into(),
            "name" => self.name.into(),
            "knows" => Value::optional(self.knows.get()),
            "homepage" => self.homepage.clone().into(),
            "badge" => Value::optional(self.badge.as_ref()),
            _ => return None,
        })
    }
}

struct Badge;

impl Describable for Badge {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &BADGE
    }

    fn member(&self, _: &str) -> Option<Value<'_>> {
        None
    }
}

/// A single-valued record for types whose tags disagree with the ontology.
struct Record {
    descriptor: &'static TypeDescriptor,
    label: &'static str,
}

impl Describable for Record {
    fn descriptor(&self) -> &'static TypeDescriptor {
        self.descriptor
    }

    fn member(&self, name: &str) -> Option<Value<'_>> {
        Some(match name {
            "id" => "record".into(),
            "label" => self.label.into(),
            _ => return None,
        })
    }
}

const MISLABELLED_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("label").with_property(PropertyTag::new(PropertyId::datatype(
        "http://example.org/onto#knows",
    ))),
];

static MISLABELLED: TypeDescriptor = TypeDescriptor::new("tests::Mislabelled")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(MISLABELLED_MEMBERS);

const NICKNAMED_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("label").with_property(PropertyTag::new(PropertyId::datatype(
        "http://example.org/onto#nickname",
    ))),
];

static NICKNAMED: TypeDescriptor = TypeDescriptor::new("tests::Nicknamed")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(NICKNAMED_MEMBERS);

const LABEL_MEMBERS: &[MemberDescriptor] =
    &[MemberDescriptor::single("label").with_property(PropertyTag::new(NAME))];

static ANONYMOUS_PERSON: TypeDescriptor = TypeDescriptor::new("tests::AnonymousPerson")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(LABEL_MEMBERS);

const ROBOT_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("label").with_property(PropertyTag::new(NAME)),
];

static ROBOT: TypeDescriptor = TypeDescriptor::new("tests::Robot")
    .with_individual(IndividualTag::new(ClassId::new("http://example.org/onto#Robot")))
    .with_members(ROBOT_MEMBERS);

const UNDESCRIBED_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("id").with_identity(IdentityTag::new()),
    MemberDescriptor::single("name").with_property(PropertyTag::new(NAME)),
];

// `Record` answers `label`, not `name`
static UNDESCRIBED: TypeDescriptor = TypeDescriptor::new("tests::Undescribed")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(UNDESCRIBED_MEMBERS);

const UNDESCRIBED_IDENTITY_MEMBERS: &[MemberDescriptor] = &[
    MemberDescriptor::single("key").with_identity(IdentityTag::new()),
    MemberDescriptor::single("label").with_property(PropertyTag::new(NAME)),
];

static UNDESCRIBED_IDENTITY: TypeDescriptor = TypeDescriptor::new("tests::UndescribedIdentity")
    .with_individual(IndividualTag::new(PERSON_CLASS))
    .with_members(UNDESCRIBED_IDENTITY_MEMBERS);

fn builder() -> GraphBuilder {
    GraphBuilder::new(OntologyFacade::load(&OntologyConfig::embedded(ONTOLOGY, NS)).unwrap())
}

fn iri(local: &str) -> NamedNode {
    NamedNode::new(format!("{NS}{local}")).unwrap()
}

fn property(property: PropertyId) -> NamedNodeRef<'static> {
    NamedNodeRef::new_unchecked(property.as_str())
}

#[test]
fn cycles_are_walked_once() {
    let alice = Person::new("alice");
    let bob = Person::new("bob");
    alice.knows.set(Some(&bob));
    bob.knows.set(Some(&alice));

    let mut builder = builder();
    let individuals = builder.add(&alice).unwrap();
    assert_eq!(individuals.len(), 2);

    let model = builder.ontology().model();
    assert!(model.contains(TripleRef::new(&iri("alice"), property(KNOWS), &iri("bob"))));
    assert!(model.contains(TripleRef::new(&iri("bob"), property(KNOWS), &iri("alice"))));
    // every instance is written, not only the first one of its type
    assert!(model.contains(TripleRef::new(
        &iri("bob"),
        property(NAME),
        &Literal::new_simple_literal("bob")
    )));
    assert_eq!(builder.processor().stats().types, 1);

    let instances = builder.instance_graph();
    builder.add(&bob).unwrap();
    assert_eq!(builder.instance_graph(), instances);
}

#[test]
fn absolute_identifiers_are_kept() {
    let mut carol = Person::new("carol");
    carol.id = Some("https://people.example.com/carol");
    carol.homepage = Some(NamedNode::new("https://carol.example.com/").unwrap());

    let mut builder = builder();
    let individuals = builder.add(&carol).unwrap();
    let carol_iri = NamedNode::new("https://people.example.com/carol").unwrap();
    assert!(individuals.contains_key(&carol_iri));
    assert!(builder.instance_graph().contains(TripleRef::new(
        &carol_iri,
        property(HOMEPAGE),
        NamedNodeRef::new("https://carol.example.com/").unwrap()
    )));
    assert!(!builder.ontology().has_individual("https://carol.example.com/"));
}

#[test]
fn property_kinds_are_checked_against_the_ontology() {
    let mut builder = builder();
    let error = builder
        .add(&Record {
            descriptor: &MISLABELLED,
            label: "Alice",
        })
        .unwrap_err();
    assert!(error.is_configuration());
    assert!(matches!(
        error,
        MappingError::Config(ConfigError::WrongTermKind { .. })
    ));
}

#[test]
fn undeclared_terms_are_rejected() {
    let mut builder = builder();
    assert!(matches!(
        builder.add(&Record {
            descriptor: &NICKNAMED,
            label: "Al",
        }),
        Err(MappingError::Config(ConfigError::UndefinedTerm { .. }))
    ));
    assert!(matches!(
        builder.add(&Record {
            descriptor: &ROBOT,
            label: "R2",
        }),
        Err(MappingError::Config(ConfigError::UndefinedTerm { .. }))
    ));
}

#[test]
fn individuals_need_an_identity() {
    let mut builder = builder();
    assert!(matches!(
        builder.add(&Record {
            descriptor: &ANONYMOUS_PERSON,
            label: "Nobody",
        }),
        Err(MappingError::Config(ConfigError::MissingIdentity { .. }))
    ));

    let mut nobody = Person::new("nobody");
    nobody.id = None;
    assert!(matches!(
        builder.add(&nobody),
        Err(MappingError::Data(DataError::NullIdentity { .. }))
    ));
    assert!(builder.ontology().instances_only().is_empty());
}

#[test]
fn nested_values_must_be_individuals() {
    let mut dave = Person::new("dave");
    dave.badge = Some(Badge);
    let mut builder = builder();
    assert!(matches!(
        builder.add(&dave),
        Err(MappingError::Data(DataError::UnsupportedValue { .. }))
    ));
    assert!(matches!(
        builder.add(&Badge),
        Err(MappingError::Config(ConfigError::MissingIndividualTag { .. }))
    ));
}

#[test]
fn declared_members_must_be_described() {
    let mut builder = builder();
    let error = builder
        .add(&Record {
            descriptor: &UNDESCRIBED,
            label: "Alice",
        })
        .unwrap_err();
    assert!(error.is_configuration());
    assert!(matches!(
        error,
        MappingError::Config(ConfigError::UndescribedMember {
            type_name: "tests::Undescribed",
            member: "name",
            ..
        })
    ));
    assert!(matches!(
        builder.add(&Record {
            descriptor: &UNDESCRIBED_IDENTITY,
            label: "Alice",
        }),
        Err(MappingError::Config(ConfigError::UndescribedMember { member: "key", .. }))
    ));
    assert!(builder.ontology().instances_only().is_empty());
}

#[test]
fn identifiers_do_not_resolve_to_schema_terms() {
    let mut builder = builder();
    let person = Person::new("name");
    assert!(matches!(
        builder.add(&person),
        Err(MappingError::Data(DataError::SchemaTermIdentifier { .. }))
    ));
    assert!(!builder.ontology().has_individual(iri("name").as_str()));
    assert!(builder.ontology().instances_only().is_empty());

    let mut builder = GraphBuilder::new(
        OntologyFacade::load(
            &OntologyConfig::embedded(ONTOLOGY, NS).with_instance_base("http://example.org/people/"),
        )
        .unwrap(),
    );
    let individuals = builder.add(&person).unwrap();
    assert!(individuals.contains_key(&NamedNode::new("http://example.org/people/name").unwrap()));
}
