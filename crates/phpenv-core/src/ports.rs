//! Driven (output) port - implemented by infrastructure.
//!
//! The `phpenv-adapters` crate provides the implementations:
//! - `LocalFilesystem` (production, std::fs)
//! - `MemoryFilesystem` (testing)

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// The merge engine and the scaffold service only ever talk to the
/// filesystem through this trait, so the whole core can be exercised
/// against an in-memory tree.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate child names of a directory, in directory order.
    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<String>>;

    /// Size of a file in bytes.
    fn file_size(&self, path: &Path) -> ScaffoldResult<u64>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Copy a file's content and permission metadata.
    fn copy_file(&self, src: &Path, dest: &Path) -> ScaffoldResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ScaffoldResult<()>;

    /// Remove a directory that is already empty.
    fn remove_empty_dir(&self, path: &Path) -> ScaffoldResult<()>;
}
