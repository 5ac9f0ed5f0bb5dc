//! In-memory model of a scanned directory tree.
//!
//! A [`DirectoryNode`] owns its files and subdirectories outright; the model
//! is append-only while a scan builds it and is not mutated afterwards. Both
//! node types are snapshots: they describe what the filesystem looked like
//! at scan time and are not kept in sync with later changes on disk.

use std::path::{Path, PathBuf};

use crate::error::{FsError, Result};

/// Read-only metadata about a single non-directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    path: PathBuf,
    base_name: String,
    extension: Option<String>,
}

impl FileRef {
    /// Capture a snapshot of the entry at `path`. The base name and
    /// extension are derived from the path itself, not from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path.extension().map(|e| e.to_string_lossy().into_owned());
        FileRef {
            path,
            base_name,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The extension without its leading dot, if the file has one.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// A directory and everything found directly inside it.
///
/// Children keep their discovery order (the OS directory-iteration order,
/// which is not guaranteed sorted).
#[derive(Debug)]
pub struct DirectoryNode {
    path: PathBuf,
    files: Vec<FileRef>,
    subdirectories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Create an empty node for `path`.
    ///
    /// Fails with [`FsError::InvalidArgument`] unless `path` exists and is a
    /// directory at construction time.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(FsError::InvalidArgument(format!(
                "invalid directory path `{}`",
                path.display()
            )));
        }
        Ok(DirectoryNode {
            path,
            files: Vec::new(),
            subdirectories: Vec::new(),
        })
    }

    /// Register a file of this directory.
    ///
    /// Registering a directory as a file is a contract violation and fails
    /// with [`FsError::InvalidArgument`] before the reference is stored.
    pub fn add_file(&mut self, file: FileRef) -> Result<()> {
        if file.path().is_dir() {
            return Err(FsError::InvalidArgument(format!(
                "cannot register directory `{}` as a file",
                file.path().display()
            )));
        }
        self.files.push(file);
        Ok(())
    }

    /// Register a subdirectory of this directory.
    pub fn add_directory(&mut self, directory: DirectoryNode) {
        self.subdirectories.push(directory);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory's own name (last path component).
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    pub fn subdirectories(&self) -> &[DirectoryNode] {
        &self.subdirectories
    }
}
