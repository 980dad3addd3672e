//! Content registry entity
//!
//! Maps each lesson slug to where its source lives and what it hashes to.
//! The front-end compares these hashes against its cache to decide whether
//! a lesson body must be refetched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Lesson;
use crate::domain::value_objects::{ContentHash, Slug};

/// One registry row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistryEntry {
    /// Source document, relative to the content directory
    pub path: String,
    pub hash: ContentHash,
    pub version: String,
    pub size: u64,
    pub premium: bool,
}

impl From<&Lesson> for ContentRegistryEntry {
    fn from(lesson: &Lesson) -> Self {
        Self {
            path: lesson.registry_path(),
            hash: lesson.hash().clone(),
            version: lesson.version(),
            size: lesson.size(),
            premium: lesson.is_premium(),
        }
    }
}

/// Registry keyed by slug, iterated in slug order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRegistry {
    entries: BTreeMap<Slug, ContentRegistryEntry>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; returns the previous one if the slug was taken
    pub fn insert(
        &mut self,
        slug: Slug,
        entry: ContentRegistryEntry,
    ) -> Option<ContentRegistryEntry> {
        self.entries.insert(slug, entry)
    }

    pub fn get(&self, slug: &str) -> Option<&ContentRegistryEntry> {
        self.entries.get(&Slug::new(slug))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Slug, &ContentRegistryEntry)> {
        self.entries.iter()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &Slug> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Slug, ContentRegistryEntry)> for ContentRegistry {
    fn from_iter<I: IntoIterator<Item = (Slug, ContentRegistryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
