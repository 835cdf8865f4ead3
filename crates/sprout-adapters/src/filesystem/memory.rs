//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprout_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::ExistingEntry,
    error::{SproutError, SproutResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and its ancestors (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dir_all(path.as_ref());
        }
        self
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), contents.into());
        }
        self
    }

    /// Refuse new entries inside `path` (testing helper).
    pub fn read_only(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    fn write(&self) -> SproutResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| SproutError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn is_writable(&self, dir: &Path) -> bool {
        self.directories.contains(dir) && !self.read_only.contains(dir)
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_writable(&self, dir: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.is_writable(dir))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(path) {
            let blocked = path
                .ancestors()
                .skip(1)
                .find(|ancestor| inner.directories.contains(*ancestor))
                .is_some_and(|ancestor| inner.read_only.contains(ancestor));
            if blocked {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into());
            }
        }

        inner.insert_dir_all(path);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> SproutResult<Vec<ExistingEntry>> {
        let inner = self.inner.read().map_err(|_| SproutError::Internal {
            message: "memory filesystem lock poisoned".into(),
        })?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        let child_name = |p: &PathBuf| {
            (p.parent() == Some(path))
                .then(|| p.file_name())
                .flatten()
                .map(|n| n.to_string_lossy().into_owned())
        };

        let dirs = inner
            .directories
            .iter()
            .filter_map(child_name)
            .map(ExistingEntry::dir);
        let files = inner
            .files
            .keys()
            .filter_map(child_name)
            .map(ExistingEntry::file);

        Ok(dirs.chain(files).collect())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> SproutResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
