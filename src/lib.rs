//! Synchronous filesystem helpers.
//!
//! Three concerns live here:
//!
//! - scanning a directory tree into an owned in-memory snapshot
//!   ([`scan_directory`] producing [`DirectoryNode`]),
//! - recursive removal of files and directories with optional pruning of
//!   now-empty parent directories ([`remove`]),
//! - single-shot read/write/append/rename/create-directory primitives
//!   ([`ops`]).
//!
//! Every operation is blocking and single-threaded; recursion runs on the
//! calling thread. Failures carry the target path and a structured reason
//! ([`FsError`]); nothing in this crate retries, suppresses a nested
//! failure, or rolls back earlier work in a batch.

pub mod error;
pub mod ops;
pub mod remove;
pub mod scan;
pub mod tree;

pub use crate::error::{FsError, Reason, Result};
pub use crate::ops::{
    append, create_directory, create_directory_with_mode, read, read_lines, rename, write,
};
pub use crate::remove::{remove, remove_path};
pub use crate::scan::scan_directory;
pub use crate::tree::{DirectoryNode, FileRef};
