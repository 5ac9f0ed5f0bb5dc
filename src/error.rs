use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FsError>;

/// Explanation for a failed filesystem operation.
///
/// Either the native OS error (with its `ErrorKind` intact, so callers can
/// branch on it) or a best-effort diagnosis made after the raw call failed.
#[derive(Debug, Error)]
pub enum Reason {
    /// The underlying OS error.
    #[error("{0}")]
    Os(#[from] io::Error),

    /// The target path does not exist.
    #[error("file does not exist")]
    NotFound,

    /// The target path exists but is not a regular file.
    #[error("path is not a file path")]
    NotAFile,

    /// The path exceeds the platform's path length limit.
    #[error("file path too long")]
    PathTooLong,
}

impl Reason {
    /// The `io::ErrorKind` of the OS error, when the reason came straight
    /// from the OS.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Reason::Os(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Errors produced by the scan, remove and I/O helpers in this crate.
#[derive(Debug, Error)]
pub enum FsError {
    /// An OS-level call failed. Carries the path the operation targeted and
    /// a reason derived from the OS error or diagnosed at the call site.
    #[error("{message} `{}`: {reason}", path.display())]
    Io {
        message: String,
        path: PathBuf,
        reason: Reason,
    },

    /// Structurally invalid caller input, detected before any OS call.
    #[error("{0}")]
    InvalidArgument(String),
}

impl FsError {
    pub(crate) fn io(message: impl Into<String>, path: impl Into<PathBuf>, err: io::Error) -> Self {
        FsError::Io {
            message: message.into(),
            path: path.into(),
            reason: Reason::Os(err),
        }
    }

    pub(crate) fn diagnosed(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: Reason,
    ) -> Self {
        FsError::Io {
            message: message.into(),
            path: path.into(),
            reason,
        }
    }

    /// The filesystem path the failing operation targeted.
    ///
    /// Always present for I/O failures; absent for argument errors, which
    /// are raised before any path is touched.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FsError::Io { path, .. } => Some(path),
            FsError::InvalidArgument(_) => None,
        }
    }

    /// The reason attached to an I/O failure, if this is one.
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            FsError::Io { reason, .. } => Some(reason),
            FsError::InvalidArgument(_) => None,
        }
    }
}
