//! Read-only access to the project tree under inspection.
//!
//! Every query takes a path relative to the project root. Absence is never an
//! error: lookups report it as `false` or `None`, and only a file that exists
//! but cannot be read or decoded produces an [`Error`].

use crate::core::error::{Error, Result};
use crate::core::jsonc;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The root directory that all checks resolve their targets against.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    /// Opens a project root, verifying that it is an existing directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(Error::RootNotDirectory { path });
        }
        Ok(Self { path })
    }

    /// Opens the current working directory as the project root.
    pub fn current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io("get current dir", e))?;
        Self::open(cwd)
    }

    /// Returns the root directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves a relative path against the root.
    #[must_use]
    pub fn resolve(&self, relative_path: &str) -> PathBuf {
        self.path.join(relative_path)
    }

    /// Checks if a regular file exists.
    #[must_use]
    pub fn is_file(&self, relative_path: &str) -> bool {
        self.resolve(relative_path).is_file()
    }

    /// Checks if a directory exists.
    #[must_use]
    pub fn is_dir(&self, relative_path: &str) -> bool {
        self.resolve(relative_path).is_dir()
    }

    /// Reads a UTF-8 text file, or `None` if it does not exist.
    pub fn read_text(&self, relative_path: &str) -> Result<Option<String>> {
        let path = self.resolve(relative_path);
        if !path.is_file() {
            return Ok(None);
        }

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::unreadable(path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| Error::InvalidEncoding { path })
    }

    /// Reads and parses a JSON (or JSON-with-comments) file, or `None` if it
    /// does not exist.
    pub fn read_json(&self, relative_path: &str) -> Result<Option<serde_json::Value>> {
        let Some(text) = self.read_text(relative_path)? else {
            return Ok(None);
        };

        jsonc::parse(&text)
            .map(Some)
            .map_err(|source| Error::MalformedJson {
                path: self.resolve(relative_path),
                source,
            })
    }

    /// Counts the direct entries of a directory, or `None` if it is not a
    /// directory.
    pub fn entry_count(&self, relative_path: &str) -> Result<Option<usize>> {
        self.count_entries(relative_path, |_| true)
    }

    /// Counts the regular files directly inside a directory whose names match
    /// `pattern`, or `None` if it is not a directory.
    pub fn matching_files(
        &self,
        relative_path: &str,
        pattern: &glob::Pattern,
    ) -> Result<Option<usize>> {
        self.count_entries(relative_path, |entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| pattern.matches(name))
        })
    }

    fn count_entries<F>(&self, relative_path: &str, keep: F) -> Result<Option<usize>>
    where
        F: Fn(&walkdir::DirEntry) -> bool,
    {
        let dir = self.resolve(relative_path);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut count = 0;
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::unreadable(&dir, std::io::Error::from(e)))?;
            if keep(&entry) {
                count += 1;
            }
        }

        Ok(Some(count))
    }
}
