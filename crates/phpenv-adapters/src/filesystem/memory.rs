//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use phpenv_core::{ScaffoldError, ScaffoldResult, ports::Filesystem};

/// In-memory filesystem for testing the merge and scaffold services.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// Seed a directory, including parents (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all file paths (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| ScaffoldError::AdapterLock)?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| ScaffoldError::AdapterLock)?;
        if !inner.directories.contains(path) {
            return Err(ScaffoldError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to list directory: not a directory".into(),
            });
        }
        let mut names: Vec<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn file_size(&self, path: &Path) -> ScaffoldResult<u64> {
        let inner = self.inner.read().map_err(|_| ScaffoldError::AdapterLock)?;
        inner
            .files
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| ScaffoldError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to read metadata: no such file".into(),
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| ScaffoldError::AdapterLock)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ScaffoldError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Failed to write file: parent directory does not exist".into(),
                });
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| ScaffoldError::AdapterLock)?;
        let content = inner
            .files
            .get(src)
            .cloned()
            .ok_or_else(|| ScaffoldError::Filesystem {
                path: src.to_path_buf(),
                reason: "Failed to copy file: no such file".into(),
            })?;
        inner.files.insert(dest.to_path_buf(), content);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| ScaffoldError::AdapterLock)?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| ScaffoldError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to remove file: no such file".into(),
            })
    }

    fn remove_empty_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().map_err(|_| ScaffoldError::AdapterLock)?;
        let occupied = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p.parent() == Some(path));
        if occupied {
            return Err(ScaffoldError::Filesystem {
                path: path.to_path_buf(),
                reason: "Failed to remove directory: directory not empty".into(),
            });
        }
        inner.directories.remove(path);
        Ok(())
    }
}
