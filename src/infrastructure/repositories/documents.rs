//! File System Document Repository
//!
//! Walks the content directory for lesson documents. Hidden directories
//! are skipped and `.lessonignore` patterns are honored.

use std::path::{Path, PathBuf};

use crate::domain::ports::DocumentRepository;
use crate::domain::value_objects::{IgnorePatterns, Slug};
use crate::error::{LessonError, LessonResult};
use crate::infrastructure::fs::LocalFs;

/// Document repository backed by a local directory tree
#[derive(Debug, Clone)]
pub struct FsDocumentRepository {
    extension: String,
    fs: LocalFs,
}

impl FsDocumentRepository {
    /// Repository matching files with `extension` (with or without the dot)
    pub fn new(extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            fs: LocalFs::new(),
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }

    fn walk(
        &self,
        root: &Path,
        current: &Path,
        ignore: &IgnorePatterns,
        found: &mut Vec<PathBuf>,
    ) -> LessonResult<()> {
        for entry in std::fs::read_dir(current)? {
            let entry = entry?;
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            let is_dir = entry.file_type()?.is_dir();

            if is_dir {
                if is_hidden(&path) || ignore.is_ignored(&relative, true) {
                    continue;
                }
                self.walk(root, &path, ignore, found)?;
            } else if self.matches_extension(&path) && !ignore.is_ignored(&relative, false) {
                found.push(relative);
            }
        }
        Ok(())
    }
}

impl Default for FsDocumentRepository {
    fn default() -> Self {
        Self::new("md")
    }
}

impl DocumentRepository for FsDocumentRepository {
    fn scan(&self, content_dir: &Path) -> LessonResult<Vec<PathBuf>> {
        if !content_dir.is_dir() {
            return Err(LessonError::DirectoryNotFound {
                path: content_dir.to_path_buf(),
            });
        }

        let ignore = IgnorePatterns::load(content_dir)?;
        let mut found = Vec::new();
        self.walk(content_dir, content_dir, &ignore, &mut found)?;

        // Sort by slug, then path, so duplicate reports are deterministic
        found.sort_by(|a, b| Slug::from_path(a).cmp(&Slug::from_path(b)).then_with(|| a.cmp(b)));
        Ok(found)
    }

    fn read(&self, content_dir: &Path, relative: &Path) -> LessonResult<Vec<u8>> {
        self.fs.read(&content_dir.join(relative))
    }

    fn exists(&self, content_dir: &Path, relative: &Path) -> bool {
        self.fs.exists(&content_dir.join(relative))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
