//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sprout_core::{
    application::ports::Filesystem,
    domain::ExistingEntry,
    error::{SproutError, SproutResult},
};
use tracing::trace;

/// Name prefix of the throwaway file used to probe writability.
const PROBE_PREFIX: &str = ".sprout-write-probe";

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
    fn is_writable(&self, dir: &Path) -> bool {
        // The probe file is removed when dropped.
        let probe = tempfile::Builder::new()
            .prefix(PROBE_PREFIX)
            .tempfile_in(dir);
        trace!(dir = %dir.display(), writable = probe.is_ok(), "Probed directory");
        probe.is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn list_dir(&self, path: &Path) -> SproutResult<Vec<ExistingEntry>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        entries
            .map(|entry| {
                let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
                let is_dir = entry
                    .file_type()
                    .map_err(|e| map_io_error(&entry.path(), e, "read file type"))?
                    .is_dir();
                Ok(ExistingEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir,
                })
            })
            .collect()
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> SproutResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SproutError {
    use sprout_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_leaves_no_trace() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.is_writable(dir.path()));
        assert!(fs.list_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LocalFilesystem::new().is_writable(&dir.path().join("missing")));
    }

    #[test]
    fn list_dir_marks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("LICENSE"), "MIT").unwrap();

        let mut entries = LocalFilesystem::new().list_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![ExistingEntry::file("LICENSE"), ExistingEntry::dir("docs")]
        );
    }

    #[test]
    fn write_into_missing_parent_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("a/b.txt"), b"x")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
