//! Ignore rules for the content directory
//!
//! A `.lessonignore` file at the content root excludes drafts and scratch
//! documents from a generation run, using gitignore semantics.

use std::fs;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{LessonError, LessonResult};

/// File name looked up at the content root
pub const IGNORE_FILE_NAME: &str = ".lessonignore";

/// Refuse anything bigger than this; it is almost certainly not a pattern list
const MAX_FILE_SIZE: u64 = 64 * 1024;

/// Patterns loaded from `.lessonignore`
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Option<Gitignore>,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// A pattern set that matches nothing
    pub fn empty() -> Self {
        Self {
            matcher: None,
            pattern_count: 0,
        }
    }

    /// Load `.lessonignore` from the content root
    ///
    /// A missing file is not an error.
    pub fn load(content_dir: &Path) -> LessonResult<Self> {
        let ignore_path = content_dir.join(IGNORE_FILE_NAME);
        if !ignore_path.is_file() {
            return Ok(Self::empty());
        }

        let size = fs::metadata(&ignore_path)?.len();
        if size > MAX_FILE_SIZE {
            return Err(LessonError::IgnoreFile {
                path: ignore_path,
                message: format!("file is {} bytes, limit is {}", size, MAX_FILE_SIZE),
            });
        }

        let content = fs::read_to_string(&ignore_path)?;
        Self::from_content(content_dir, &ignore_path, &content)
    }

    /// Build from pattern text; `root` anchors patterns with a leading `/`
    pub fn from_content(root: &Path, source_path: &Path, content: &str) -> LessonResult<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            builder
                .add_line(Some(source_path.to_path_buf()), line)
                .map_err(|e| LessonError::IgnoreFile {
                    path: source_path.to_path_buf(),
                    message: format!("line {}: '{}': {}", index + 1, line, e),
                })?;
            pattern_count += 1;
        }

        if pattern_count == 0 {
            return Ok(Self::empty());
        }

        let matcher = builder.build().map_err(|e| LessonError::IgnoreFile {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher: Some(matcher),
            pattern_count,
        })
    }

    /// Check a path relative to the content root
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        match &self.matcher {
            Some(matcher) => matcher
                .matched_path_or_any_parents(rel_path, is_dir)
                .is_ignore(),
            None => false,
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}
