//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use initiator_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, UNLISTED_DIRS},
    },
    error::InitiatorResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// Refuse writes anywhere below `path`.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Every file path, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> InitiatorResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write(&self) -> InitiatorResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl MemoryFilesystemInner {
    fn ensure_writable(&self, path: &Path) -> InitiatorResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied (read-only)".into(),
            }
            .into());
        }
        Ok(())
    }

    fn not_found(path: &Path) -> ApplicationError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "No such file or directory".into(),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> InitiatorResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Not a directory".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> InitiatorResult<()> {
        let mut inner = self.write()?;
        inner.ensure_writable(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> InitiatorResult<String> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| MemoryFilesystemInner::not_found(path).into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> InitiatorResult<()> {
        let mut inner = self.write()?;
        inner.ensure_writable(path)?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| MemoryFilesystemInner::not_found(path).into())
    }

    fn remove_dir_all(&self, path: &Path) -> InitiatorResult<()> {
        let mut inner = self.write()?;
        inner.ensure_writable(path)?;

        if !inner.directories.contains(path) {
            return Err(MemoryFilesystemInner::not_found(path).into());
        }
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn list_files(&self, root: &Path) -> InitiatorResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter_map(|p| {
                let rel = p.strip_prefix(root).ok()?;
                let hidden = rel.parent().is_some_and(|dirs| {
                    dirs.iter()
                        .any(|c| c.to_str().is_some_and(|c| UNLISTED_DIRS.contains(&c)))
                });
                (!hidden).then(|| p.clone())
            })
            .collect())
    }
}
