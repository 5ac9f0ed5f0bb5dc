//! Recursive directory scanning into the [`DirectoryNode`] model.
//!
//! Entry classification follows symbolic links (`fs::metadata`), so a
//! symlinked directory is traversed like any other directory. No cycle
//! detection is performed; a link loop will recurse until the OS refuses to
//! resolve it. A dangling symlink has no target to classify and is recorded
//! as a file snapshot.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FsError, Result};
use crate::tree::{DirectoryNode, FileRef};

/// Recursively scan `path` and build its tree snapshot.
///
/// Children are appended in directory-iteration order; `.` and `..` are
/// never listed. Any listing or stat failure mid-walk aborts the whole scan
/// with [`FsError::Io`] — there is no partial-result mode.
pub fn scan_directory(path: impl AsRef<Path>) -> Result<DirectoryNode> {
    let path = path.as_ref();
    let mut node = DirectoryNode::new(path)?;

    let entries =
        fs::read_dir(path).map_err(|e| FsError::io("failed to list directory", path, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| FsError::io("failed to list directory", path, e))?;
        let child = entry.path();

        match fs::metadata(&child) {
            Ok(meta) if meta.is_dir() => node.add_directory(scan_directory(&child)?),
            Ok(_) => node.add_file(FileRef::new(child))?,
            // A dangling symlink: the link entry exists but its target does
            // not, so snapshot the link itself as a file.
            Err(e) if e.kind() == io::ErrorKind::NotFound => node.add_file(FileRef::new(child))?,
            Err(e) => return Err(FsError::io("failed to stat directory entry", child, e)),
        }
    }

    Ok(node)
}
