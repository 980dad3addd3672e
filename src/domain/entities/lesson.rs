//! Lesson document entity
//!
//! A scanned lesson: where it lives, what its bytes hash to, and what its
//! front matter says. Field defaults are applied here so the registry and
//! the metadata records agree on them.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, Slug};
use crate::parser::FrontMatter;

/// Difficulty used when the front matter does not name one
pub const DEFAULT_DIFFICULTY: &str = "beginner";

/// Estimated minutes used when the front matter has no usable value
pub const DEFAULT_ESTIMATED_TIME: i64 = 10;

/// Version marker used when the front matter has none
pub const DEFAULT_VERSION: &str = "1";

/// A parsed lesson document
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    slug: Slug,
    /// Path relative to the content directory
    path: PathBuf,
    hash: ContentHash,
    size: u64,
    front_matter: FrontMatter,
}

impl Lesson {
    pub fn new(
        slug: Slug,
        path: impl Into<PathBuf>,
        hash: ContentHash,
        size: u64,
        front_matter: FrontMatter,
    ) -> Self {
        Self {
            slug,
            path: path.into(),
            hash,
            size,
            front_matter,
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Relative path with forward slashes, as stored in the registry
    pub fn registry_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    pub fn title(&self) -> String {
        self.front_matter
            .text("title")
            .unwrap_or(self.slug.as_str())
            .to_string()
    }

    pub fn description(&self) -> String {
        self.front_matter
            .text("description")
            .unwrap_or_default()
            .to_string()
    }

    pub fn code(&self) -> String {
        self.front_matter
            .text("code")
            .unwrap_or(self.slug.as_str())
            .to_string()
    }

    pub fn version(&self) -> String {
        self.front_matter
            .text("version")
            .unwrap_or(DEFAULT_VERSION)
            .to_string()
    }

    /// `is_premium` wins over `premium` when both are present
    pub fn is_premium(&self) -> bool {
        self.front_matter
            .flag("is_premium")
            .or_else(|| self.front_matter.flag("premium"))
            .unwrap_or(false)
    }

    pub fn tags(&self) -> Vec<String> {
        self.front_matter
            .list("tags")
            .map(|tags| tags.to_vec())
            .unwrap_or_default()
    }

    pub fn difficulty(&self) -> String {
        self.front_matter
            .text("difficulty")
            .unwrap_or(DEFAULT_DIFFICULTY)
            .to_string()
    }

    pub fn estimated_time(&self) -> i64 {
        self.front_matter
            .integer("estimatedTime")
            .unwrap_or(DEFAULT_ESTIMATED_TIME)
    }
}
