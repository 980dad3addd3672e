//! DocumentRepository port - where lesson documents come from
//!
//! Lets the generator and the integrity check enumerate and read lesson
//! sources without knowing they live on a local disk.

use std::path::{Path, PathBuf};

use crate::error::LessonResult;

/// Source of lesson documents
pub trait DocumentRepository {
    /// List lesson documents under `content_dir`
    ///
    /// Paths are relative to `content_dir` and sorted by slug, then path.
    /// Fails if `content_dir` does not exist.
    fn scan(&self, content_dir: &Path) -> LessonResult<Vec<PathBuf>>;

    /// Read the raw bytes of one document
    fn read(&self, content_dir: &Path, relative: &Path) -> LessonResult<Vec<u8>>;

    /// Check that a document still exists
    fn exists(&self, content_dir: &Path, relative: &Path) -> bool;
}
