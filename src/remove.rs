//! Recursive removal of files and directories.
//!
//! Targets are classified with `symlink_metadata`, so symbolic links are
//! never followed here: the link itself is unlinked (even when it points at
//! a directory, even when it dangles) and its target is left untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FsError, Result};

/// Remove the given paths, last-registered first.
///
/// The input is materialized into a list and processed in reverse order, so
/// a directory registered before its own descendants in the same call is
/// removed after them. Per path:
///
/// - a missing target is skipped silently (removal is idempotent),
/// - a directory has its contents removed recursively (with
///   `cascade_empty_parents` forwarded unchanged) before the now-empty
///   directory itself is removed,
/// - a file is unlinked; on success, up to `cascade_empty_parents` ancestor
///   directories found empty are removed bottom-up, stopping at the first
///   non-empty one. The cascade runs only after file deletions, never after
///   recursive directory removals.
///
/// The first unrecoverable error aborts the call. Paths already removed in
/// the same batch stay removed; later paths are left untouched.
pub fn remove<I, P>(paths: I, cascade_empty_parents: usize) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut targets: Vec<PathBuf> = paths
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();
    targets.reverse();

    for target in targets {
        let meta = match fs::symlink_metadata(&target) {
            Ok(meta) => meta,
            // Removing a path that no longer exists is a no-op.
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(FsError::io("failed to stat path", &target, e)),
        };

        if meta.is_dir() {
            remove_contents(&target, cascade_empty_parents)?;
            remove_directory(&target)?;
        } else {
            tracing::debug!("removing file {}", target.display());
            fs::remove_file(&target)
                .map_err(|e| FsError::io("failed to remove file", &target, e))?;
            prune_empty_parents(&target, cascade_empty_parents)?;
        }
    }

    Ok(())
}

/// Single-path convenience wrapper around [`remove`].
pub fn remove_path(path: impl AsRef<Path>, cascade_empty_parents: usize) -> Result<()> {
    remove([path.as_ref()], cascade_empty_parents)
}

fn remove_contents(dir: &Path, cascade_empty_parents: usize) -> Result<()> {
    let entries =
        fs::read_dir(dir).map_err(|e| FsError::io("failed to list directory", dir, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsError::io("failed to list directory", dir, e))?;
        children.push(entry.path());
    }

    remove(children, cascade_empty_parents)
}

fn remove_directory(dir: &Path) -> Result<()> {
    tracing::debug!("removing directory {}", dir.display());
    fs::remove_dir(dir).map_err(|e| FsError::io("failed to remove directory", dir, e))
}

/// Walk upward from the removed file, deleting each ancestor found empty,
/// at most `levels` deep. Stops at the first non-empty ancestor, or at the
/// top of a relative path (`Path::parent` yields `Some("")` there, which is
/// not a listable directory and never a valid removal target).
fn prune_empty_parents(removed_file: &Path, levels: usize) -> Result<()> {
    let mut dir = removed_file.parent();

    for _ in 0..levels {
        let Some(parent) = dir else { break };
        if parent.as_os_str().is_empty() {
            break;
        }
        let mut entries = fs::read_dir(parent)
            .map_err(|e| FsError::io("failed to list directory", parent, e))?;
        if entries.next().is_some() {
            break;
        }
        remove_directory(parent)?;
        dir = parent.parent();
    }

    Ok(())
}
