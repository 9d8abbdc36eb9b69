use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Rendered project ready for materialization.
///
/// This is the output of the emitters. It contains no business logic, only
/// data: a root directory and the files to write into it, relative to that
/// root.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidModel("project structure is empty".into()));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() {
                return Err(DomainError::InvalidModel(format!(
                    "absolute paths not allowed: {}",
                    file.path.display()
                )));
            }
            if !seen.insert(&file.path) {
                return Err(DomainError::InvalidModel(format!(
                    "duplicate path: {}",
                    file.path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Content of the file at `path` (relative to the root).
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_structure_is_invalid() {
        assert!(ProjectStructure::new("out").validate().is_err());
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let s = ProjectStructure::new("out")
            .with_file("a.prj", "x".into())
            .with_file("a.prj", "y".into());
        assert!(s.validate().is_err());
    }

    #[test]
    fn content_lookup_by_relative_path() {
        let s = ProjectStructure::new("out").with_file("a.g01", "geom".into());
        assert_eq!(s.content_of("a.g01"), Some("geom"));
        assert_eq!(s.content_of("b.g01"), None);
        assert_eq!(s.file_count(), 1);
    }
}
