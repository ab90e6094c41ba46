//! Directory listing seam used by the archive scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One directory entry as seen by the archive scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// File name without any path prefix.
    pub name: String,
    /// Whether the entry is a regular file.
    pub is_file: bool,
}

impl ScanEntry {
    pub fn file<S: Into<String>>(name: S) -> Self {
        ScanEntry {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn dir<S: Into<String>>(name: S) -> Self {
        ScanEntry {
            name: name.into(),
            is_file: false,
        }
    }
}

/// Non-recursive directory listing capability.
///
/// The classpath builder treats any listing failure as an empty directory,
/// so errors surface only at this seam.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ScanEntry>>;
}

/// Lister backed by the real filesystem, in whatever order the platform
/// reports entries.
#[derive(Debug, Default)]
pub struct OsDirectoryLister;

impl DirectoryLister for OsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ScanEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            // Non-UTF-8 names can never carry the archive suffix.
            if let Ok(name) = entry.file_name().into_string() {
                entries.push(ScanEntry {
                    name,
                    is_file: file_type.is_file(),
                });
            }
        }
        Ok(entries)
    }
}

/// Deterministic lister with scripted listings, used for testing and as a
/// placeholder where no real filesystem should be touched. Directories that
/// were never scripted behave as missing.
#[derive(Debug, Default)]
pub struct FixedDirectoryLister {
    listings: Vec<(PathBuf, Vec<ScanEntry>)>,
}

impl FixedDirectoryLister {
    pub fn new() -> Self {
        FixedDirectoryLister::default()
    }

    /// Scripts the listing returned for `dir`.
    pub fn with_listing<P: Into<PathBuf>>(mut self, dir: P, entries: Vec<ScanEntry>) -> Self {
        self.listings.push((dir.into(), entries));
        self
    }
}

impl DirectoryLister for FixedDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ScanEntry>> {
        self.listings
            .iter()
            .find(|(scripted, _)| scripted == dir)
            .map(|(_, entries)| entries.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "directory not scripted"))
    }
}
