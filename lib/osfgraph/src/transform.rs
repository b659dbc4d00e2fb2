//! Transforms converting member values into what is written to the graph.

use crate::describe::{Describable, Value};
use crate::error::DataError;
use crate::tag::TransformMode;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// Converts a value before it is written with a property.
///
/// In [`TransformMode::Field`] the input is the member value, in [`TransformMode::Class`]
/// it is [`Value::Object`] holding the object declaring the member.
pub trait Transform: Send + Sync {
    fn apply<'a>(&self, input: Value<'a>) -> Result<Value<'a>, DataError>;
}

/// Computes the identifier of an individual.
pub trait IdentityTransform: Send + Sync {
    /// `outer` is the object the individual was reached from, `None` for the root of the walk.
    fn apply(
        &self,
        outer: Option<&dyn Describable>,
        identifier: &Value<'_>,
    ) -> Result<String, DataError>;
}

/// Reference from a tag to a [`Transform`] implementation.
///
/// The name is the identity of the transform: two references with the same name share one instance.
#[derive(Debug, Clone, Copy)]
pub struct TransformRef {
    name: &'static str,
    factory: fn() -> Arc<dyn Transform>,
}

impl TransformRef {
    #[inline]
    pub const fn new(name: &'static str, factory: fn() -> Arc<dyn Transform>) -> Self {
        Self { name, factory }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Reference from an identity tag to an [`IdentityTransform`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct IdentityTransformRef {
    name: &'static str,
    factory: fn() -> Arc<dyn IdentityTransform>,
}

impl IdentityTransformRef {
    #[inline]
    pub const fn new(name: &'static str, factory: fn() -> Arc<dyn IdentityTransform>) -> Self {
        Self { name, factory }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Lazily instantiated transforms, shared by every processor using the registry.
///
/// Each transform is instantiated at most once, even when several threads discover it at the same time.
#[derive(Default)]
pub struct TransformRegistry {
    field: DashMap<&'static str, Arc<dyn Transform>>,
    class: DashMap<&'static str, Arc<dyn Transform>>,
    identity: DashMap<&'static str, Arc<dyn IdentityTransform>>,
}

impl TransformRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instance of `transform` for `mode`, instantiating it if it is the first request.
    pub fn register(&self, transform: TransformRef, mode: TransformMode) -> Arc<dyn Transform> {
        let cache = match mode {
            TransformMode::Field => &self.field,
            TransformMode::Class => &self.class,
        };
        let entry = cache.entry(transform.name).or_insert_with(|| {
            tracing::debug!(transform = transform.name, ?mode, "instantiating transform");
            (transform.factory)()
        });
        Arc::clone(entry.value())
    }

    /// Returns the instance of the identity `transform`, instantiating it if it is the first request.
    pub fn register_identity(&self, transform: IdentityTransformRef) -> Arc<dyn IdentityTransform> {
        let entry = self.identity.entry(transform.name).or_insert_with(|| {
            tracing::debug!(transform = transform.name, "instantiating identity transform");
            (transform.factory)()
        });
        Arc::clone(entry.value())
    }

    /// The field-mode transform registered under `name`.
    pub fn field(&self, name: &str) -> Option<Arc<dyn Transform>> {
        self.field.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// The class-mode transform registered under `name`.
    pub fn class(&self, name: &str) -> Option<Arc<dyn Transform>> {
        self.class.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// The identity transform registered under `name`.
    pub fn identity(&self, name: &str) -> Option<Arc<dyn IdentityTransform>> {
        self.identity.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of instantiated transforms.
    pub fn len(&self) -> usize {
        self.field.len() + self.class.len() + self.identity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("field", &self.field.iter().map(|e| *e.key()).collect::<Vec<_>>())
            .field("class", &self.class.iter().map(|e| *e.key()).collect::<Vec<_>>())
            .field(
                "identity",
                &self.identity.iter().map(|e| *e.key()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
