// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Filesystem adapters backing the Sill shell session.
// Author: Lukas Bower

//! Filesystem adapters backing the shell session.
//!
//! The session only ever sees the [`Filesystem`] trait: [`HostFs`] forwards
//! to `std::fs`, while [`MemFs`] serves a deterministic in-memory tree so
//! sessions can be driven in tests without touching the host.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by filesystem adapters.
///
/// `NotFound` and `NotADirectory` are recognized by the session and mapped
/// to their dedicated messages; anything else passes its message through
/// verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    /// Path does not exist.
    #[error("{0}: no such file or directory")]
    NotFound(String),
    /// Path exists but is not a directory.
    #[error("{0}: not a directory")]
    NotADirectory(String),
    /// Any other adapter failure.
    #[error("{path}: {message}")]
    Io {
        /// Path the operation was attempted on.
        path: String,
        /// Underlying failure text, passed through verbatim.
        message: String,
    },
}

impl FsError {
    fn from_io(err: &io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// True for the missing-path variant.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for the wrong-kind variant.
    #[must_use]
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory(_))
    }
}

/// Filesystem operations required by the shell session.
pub trait Filesystem {
    /// Entry names of `dir`, in no particular order.
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, FsError>;

    /// Canonical absolute form of `dir`, verified to be a directory.
    fn resolve_dir(&self, dir: &Path) -> Result<PathBuf, FsError>;

    /// Create `path` as an empty file, truncating an existing one.
    fn create_file(&mut self, path: &Path) -> Result<(), FsError>;

    /// Full contents of `path` as text.
    fn read_file(&self, path: &Path) -> Result<String, FsError>;
}

/// Adapter over the host filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostFs;

impl Filesystem for HostFs {
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let entries = std::fs::read_dir(dir).map_err(|err| FsError::from_io(&err, dir))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| FsError::from_io(&err, dir))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn resolve_dir(&self, dir: &Path) -> Result<PathBuf, FsError> {
        let resolved = std::fs::canonicalize(dir).map_err(|err| FsError::from_io(&err, dir))?;
        if resolved.is_dir() {
            Ok(resolved)
        } else {
            Err(FsError::NotADirectory(dir.display().to_string()))
        }
    }

    fn create_file(&mut self, path: &Path) -> Result<(), FsError> {
        // The handle drops immediately; create-then-close is the whole job.
        std::fs::File::create(path)
            .map(|_| ())
            .map_err(|err| FsError::from_io(&err, path))
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|err| FsError::from_io(&err, path))
    }
}

/// Normalize a path lexically: `.` dropped, `..` popped (pinned at the
/// root), relative input resolved from the root.
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                resolved = PathBuf::from("/");
            }
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => resolved.push(name),
        }
    }
    resolved
}

/// In-memory filesystem with a deterministic tree, primarily for tests.
///
/// Paths are normalized lexically, so `/a/./b/..` and `/a` name the same
/// node. The root directory always exists.
#[derive(Clone, Debug)]
pub struct MemFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl Default for MemFs {
    fn default() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::from("/"));
        Self {
            dirs,
            files: BTreeMap::new(),
        }
    }
}

impl MemFs {
    /// Create a tree holding only the root directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating missing ancestors.
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_dir(&normalize(path.as_ref()));
        self
    }

    /// Add a text file, creating missing ancestor directories.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: &str) -> Self {
        let resolved = normalize(path.as_ref());
        if let Some(parent) = resolved.parent() {
            self.insert_dir(parent);
        }
        self.files.insert(resolved, contents.to_owned());
        self
    }

    fn insert_dir(&mut self, resolved: &Path) {
        let mut current = PathBuf::from("/");
        self.dirs.insert(current.clone());
        for component in resolved.components() {
            if let Component::Normal(name) = component {
                current.push(name);
                self.dirs.insert(current.clone());
            }
        }
    }
}

impl Filesystem for MemFs {
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let dir = self.resolve_dir(dir)?;
        let names = self
            .dirs
            .iter()
            .chain(self.files.keys())
            .filter(|path| path.parent() == Some(dir.as_path()))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn resolve_dir(&self, dir: &Path) -> Result<PathBuf, FsError> {
        let resolved = normalize(dir);
        if self.dirs.contains(&resolved) {
            Ok(resolved)
        } else if self.files.contains_key(&resolved) {
            Err(FsError::NotADirectory(dir.display().to_string()))
        } else {
            Err(FsError::NotFound(dir.display().to_string()))
        }
    }

    fn create_file(&mut self, path: &Path) -> Result<(), FsError> {
        let resolved = normalize(path);
        if self.dirs.contains(&resolved) {
            return Err(FsError::Io {
                path: path.display().to_string(),
                message: "is a directory".to_owned(),
            });
        }
        match resolved.parent() {
            Some(parent) if self.dirs.contains(parent) => {
                self.files.insert(resolved, String::new());
                Ok(())
            }
            _ => Err(FsError::NotFound(path.display().to_string())),
        }
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        let resolved = normalize(path);
        if let Some(contents) = self.files.get(&resolved) {
            Ok(contents.clone())
        } else if self.dirs.contains(&resolved) {
            Err(FsError::Io {
                path: path.display().to_string(),
                message: "is a directory".to_owned(),
            })
        } else {
            Err(FsError::NotFound(path.display().to_string()))
        }
    }
}
