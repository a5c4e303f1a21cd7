//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use phpenv_core::{ScaffoldResult, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "mkdir -p");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn file_size(&self, path: &Path) -> ScaffoldResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| map_io_error(path, e, "read metadata"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> ScaffoldResult<()> {
        trace!(src = %src.display(), dest = %dest.display(), "copy");
        // std::fs::copy carries the permission bits along with the content
        // (the copy2 of the standard library). Symlinks are followed, so a
        // link is materialised as a regular file at the destination.
        std::fs::copy(src, dest)
            .map(|_| ())
            .map_err(|e| map_io_error(src, e, "copy file"))
    }

    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_empty_dir(&self, path: &Path) -> ScaffoldResult<()> {
        // remove_dir refuses non-empty directories, which is exactly the
        // deletion-safety guarantee the merge relies on.
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> phpenv_core::ScaffoldError {
    phpenv_core::ScaffoldError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}
