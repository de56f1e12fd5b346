//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use initiator_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, UNLISTED_DIRS},
    },
    error::{InitiatorError, InitiatorResult},
};

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
    fn create_dir_all(&self, path: &Path) -> InitiatorResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> InitiatorResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> InitiatorResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> InitiatorResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> InitiatorResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn list_files(&self, root: &Path) -> InitiatorResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_unlisted(e));
        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: format!("Failed to walk directory: {}", e),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_unlisted(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| UNLISTED_DIRS.contains(&name))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> InitiatorError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_is_recursive_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("src/nested")).unwrap();
        fs.write_file(&dir.path().join("a.txt"), "a").unwrap();
        fs.write_file(&dir.path().join("src/nested/b.txt"), "b")
            .unwrap();

        let files = fs.list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn list_files_skips_dependencies_and_git() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        for sub in ["src", "node_modules/express/lib", ".git/objects"] {
            fs.create_dir_all(&dir.path().join(sub)).unwrap();
        }
        fs.write_file(&dir.path().join("src/index.ts"), "").unwrap();
        fs.write_file(&dir.path().join("node_modules/express/lib/express.js"), "")
            .unwrap();
        fs.write_file(&dir.path().join(".git/HEAD"), "").unwrap();
        fs.write_file(&dir.path().join(".gitignore"), "").unwrap();

        let files = fs.list_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join(".gitignore"), dir.path().join("src/index.ts")]
        );
    }

    #[test]
    fn read_missing_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("nope"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        let fs = LocalFilesystem::new();
        fs.write_file(&file, "").unwrap();

        assert!(fs.is_dir(dir.path()));
        assert!(!fs.is_dir(&file));
        assert!(fs.exists(&file));
    }
}
