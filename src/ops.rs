//! Single-shot file and directory primitives.
//!
//! Each helper wraps one underlying OS call and maps its failure into
//! [`FsError::Io`] with the target path attached. None of them keep state
//! between calls.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

use crate::error::{FsError, Reason, Result};

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;

/// Windows `MAX_PATH`; reads on longer paths get a clearer diagnosis there.
#[cfg(windows)]
const PLATFORM_PATH_LIMIT: usize = 260;

/// Write `contents` into the file at `path`, truncating existing contents.
///
/// Missing parent directories are created first (default permissive mode);
/// the file itself is created if absent.
pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    write_with(path.as_ref(), contents.as_ref(), false)
}

/// Append `contents` to the file at `path`, creating it (and missing parent
/// directories) if needed.
pub fn append(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    write_with(path.as_ref(), contents.as_ref(), true)
}

fn write_with(path: &Path, contents: &[u8], append: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true);
    if append {
        options.append(true);
    } else {
        options.truncate(true);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(contents))
        .map_err(|e| FsError::io("failed to write file", path, e))
}

/// Read the file at `path` into a string.
///
/// On failure the reason is diagnosed best-effort: a nonexistent path, a
/// path that is not a regular file, and (on Windows) an over-long path each
/// get a dedicated [`Reason`]; anything else carries the native OS error.
pub fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| read_failure(path, e))
}

/// Read the file at `path` and split it into lines, with line terminators
/// stripped. Fails exactly like [`read`].
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read(path)?.lines().map(str::to_owned).collect())
}

// The checks run only after the raw read already failed, so a racing
// filesystem can still produce a plain `Os` reason.
fn read_failure(path: &Path, err: io::Error) -> FsError {
    let reason = if !path.exists() {
        Reason::NotFound
    } else if !path.is_file() {
        Reason::NotAFile
    } else if exceeds_platform_path_limit(path) {
        Reason::PathTooLong
    } else {
        Reason::Os(err)
    };
    FsError::diagnosed("failed to read file", path, reason)
}

#[cfg(windows)]
fn exceeds_platform_path_limit(path: &Path) -> bool {
    path.as_os_str().len() > PLATFORM_PATH_LIMIT
}

#[cfg(not(windows))]
fn exceeds_platform_path_limit(_path: &Path) -> bool {
    false
}

/// Rename (move) `origin` to `target` with a single OS rename call.
///
/// Fails when the OS call does, e.g. for a cross-device move or a missing
/// target directory; the error carries the origin path.
pub fn rename(origin: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let origin = origin.as_ref();
    fs::rename(origin, target.as_ref()).map_err(|e| FsError::io("failed to rename", origin, e))
}

/// Create `path` and all missing ancestors with the default permissive mode.
/// Succeeds without touching anything when the directory already exists.
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    create_directory_with_mode(path, 0o777)
}

/// Like [`create_directory`] with an explicit Unix permission mode (applied
/// before the process umask). The mode is ignored on non-Unix platforms.
pub fn create_directory_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .map_err(|e| FsError::io("failed to create directory", path, e))
}
