//! Cache of the tags discovered on types and members.

use crate::describe::StructuralElement;
use crate::tag::{ElementTagKey, Tag, TagKind};
use rustc_hash::{FxHashMap, FxHashSet};

/// Discovered tags and the structural elements already walked through.
///
/// Entries are never removed: the registry lives as long as the processor owning it.
#[derive(Debug, Default, Clone)]
pub struct MetadataRegistry {
    visited: FxHashSet<StructuralElement>,
    tags: FxHashMap<ElementTagKey, Tag>,
}

impl MetadataRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the element as visited.
    ///
    /// Returns `true` if it was already visited.
    pub fn record_visited(&mut self, element: StructuralElement) -> bool {
        !self.visited.insert(element)
    }

    #[inline]
    pub fn has_visited(&self, element: StructuralElement) -> bool {
        self.visited.contains(&element)
    }

    /// Stores a tag, replacing the one previously stored for the same key.
    pub fn put(&mut self, key: ElementTagKey, tag: Tag) {
        self.tags.insert(key, tag);
    }

    #[inline]
    pub fn get(&self, key: ElementTagKey) -> Option<Tag> {
        self.tags.get(&key).copied()
    }

    /// All tags stored for the element, whatever their kind.
    pub fn tags_for(&self, element: StructuralElement) -> impl Iterator<Item = Tag> + '_ {
        [TagKind::Individual, TagKind::Property, TagKind::Identity]
            .into_iter()
            .filter_map(move |kind| self.get(ElementTagKey::new(element, kind)))
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
