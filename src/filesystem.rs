//! File I/O used by the pipeline stages
//!
//! Stages never touch `std::fs` directly; they go through a [`FileStore`].
//! [`DiskFS`] is the real thing. [`MemoryFS`] keeps files in memory and can be
//! told to fail reads or writes for specific paths, which is how the failure
//! branches of the pipeline are exercised in tests.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-file text reads and writes.
pub trait FileStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFS;

impl FileStore for DiskFS {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// In-memory filesystem for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryFS {
    /// Files stored as path -> content mapping
    files: HashMap<PathBuf, String>,
    failing_reads: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.to_string());
    }

    /// Get a file's content by path
    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// Make every read of `path` fail with `PermissionDenied`.
    pub fn fail_reads_for<P: AsRef<Path>>(&mut self, path: P) {
        self.failing_reads.insert(path.as_ref().to_path_buf());
    }

    /// Make every write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_for<P: AsRef<Path>>(&mut self, path: P) {
        self.failing_writes.insert(path.as_ref().to_path_buf());
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if filesystem is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileStore for MemoryFS {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.failing_reads.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("reading {} is not permitted", path.display()),
            ));
        }

        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if self.failing_writes.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("writing {} is not permitted", path.display()),
            ));
        }

        self.add_file_string(path, contents);
        Ok(())
    }
}
