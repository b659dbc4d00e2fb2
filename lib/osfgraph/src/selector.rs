//! Selection of the statements about individuals of a namespace.

use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedOrBlankNodeRef, TermRef, TripleRef};

/// Filter extracting the statements about individuals of a target namespace.
///
/// A statement is kept if its subject has an `rdf:type` in the namespace. Type assertions
/// involving an anonymous individual are dropped: such an individual only shows up as the
/// object of the statements using it.
#[derive(Debug, Clone)]
pub struct Selector {
    namespace: String,
}

impl Selector {
    #[inline]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Tests a statement, `model` being the graph the types of its subject are looked up in.
    pub fn test(&self, model: &Graph, statement: TripleRef<'_>) -> bool {
        if statement.predicate == rdf::TYPE
            && (matches!(statement.object, TermRef::BlankNode(_))
                || matches!(statement.subject, NamedOrBlankNodeRef::BlankNode(_)))
        {
            return false;
        }
        model
            .objects_for_subject_predicate(statement.subject, rdf::TYPE)
            .any(|class| match class {
                TermRef::NamedNode(class) => class.as_str().starts_with(&self.namespace),
                _ => false,
            })
    }

    /// The statements of `statements` passing the filter.
    pub fn select(&self, model: &Graph, statements: &Graph) -> Graph {
        let mut selected = Graph::new();
        for statement in statements {
            if self.test(model, statement) {
                selected.insert(statement);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal, NamedNodeRef};

    const NS: &str = "http://example.org/onto#";
    const THING: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/onto#Thing");
    const HAS_X: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/onto#hasX");
    const S: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/data/s");
    const OTHER: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/data/other");

    #[test]
    fn anonymous_type_objects_are_excluded() {
        let anon = BlankNode::default();
        let mut model = Graph::new();
        model.insert(TripleRef::new(S, rdf::TYPE, THING));
        model.insert(TripleRef::new(S, HAS_X, &anon));
        model.insert(TripleRef::new(S, rdf::TYPE, &anon));
        model.insert(TripleRef::new(&anon, rdf::TYPE, THING));
        let selector = Selector::new(NS);

        assert!(!selector.test(&model, TripleRef::new(S, rdf::TYPE, &anon)));
        assert!(selector.test(&model, TripleRef::new(S, HAS_X, &anon)));
        assert!(selector.test(&model, TripleRef::new(S, rdf::TYPE, THING)));
        assert!(!selector.test(&model, TripleRef::new(&anon, rdf::TYPE, THING)));
        assert_eq!(selector.select(&model, &model).len(), 2);
    }

    #[test]
    fn subjects_outside_the_namespace_are_excluded() {
        let mut model = Graph::new();
        let foreign = NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Person");
        let name = NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
        model.insert(TripleRef::new(OTHER, rdf::TYPE, foreign));
        model.insert(TripleRef::new(OTHER, name, &Literal::new_simple_literal("x")));
        let selector = Selector::new(NS);
        assert!(selector.select(&model, &model).is_empty());
        assert_eq!(selector.namespace(), NS);
    }
}
