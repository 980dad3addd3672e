//! Local File System Implementation
//!
//! Atomic writes via tempfile + rename. A batch stages every file next to
//! its destination before renaming any of them, so a failed render or a
//! full disk leaves the previous outputs untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::LessonResult;

/// Local file system access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> LessonResult<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Write several files; nothing is renamed until all are staged
    pub fn write_batch(&self, files: &[(PathBuf, Vec<u8>)]) -> LessonResult<()> {
        let mut staged = Vec::with_capacity(files.len());
        for (path, content) in files {
            staged.push((path, stage(path, content)?));
        }
        for (path, file) in staged {
            file.persist(path).map_err(|e| e.error)?;
        }
        Ok(())
    }
}

fn stage(path: &Path, content: &[u8]) -> LessonResult<NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}
