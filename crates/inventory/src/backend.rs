//! Storage backends the inventory store reads from and rewrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Whole-content byte storage.
///
/// Backends never patch: every write replaces the previous content.
pub trait Backend {
    /// Read the entire stored content.
    fn read_all(&self) -> io::Result<Vec<u8>>;

    /// Replace the stored content with `bytes`.
    fn write_all(&self, bytes: &[u8]) -> io::Result<()>;

    /// Human-readable location, used in diagnostics.
    fn location(&self) -> String;
}

impl<B> Backend for Arc<B>
where
    B: Backend + ?Sized,
{
    fn read_all(&self) -> io::Result<Vec<u8>> {
        (**self).read_all()
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// A single file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        fs::write(&self.path, bytes)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory backend for tests/dev.
///
/// Starts out "missing" unless created with content. Writes can be made to
/// fail to exercise the store's write-failure path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    content: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    /// A backend with nothing stored; reads fail with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content: RwLock::new(Some(bytes.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Snapshot of the stored bytes, if any.
    ///
    /// A poisoned lock still holds the last completed write, so it is read through.
    pub fn content(&self) -> Option<Vec<u8>> {
        self.content
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl Backend for MemoryBackend {
    fn read_all(&self) -> io::Result<Vec<u8>> {
        let content = self
            .content
            .read()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        content
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no content stored"))
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            ));
        }
        let mut content = self
            .content
            .write()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        *content = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
