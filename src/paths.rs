//! Project root detection and the data/output directory layout.
//!
//! Notebooks run either from the repository root or from its `notebooks/`
//! directory. Both cases resolve to the same project root, and every derived
//! location hangs off that root:
//!
//! ```text
//! <root>/data/raw          read-only input, never created here
//! <root>/data/processed    created on demand
//! <root>/outputs           created on demand
//! ```

use std::io;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::util;

/// Name of the subdirectory notebooks are conventionally launched from.
pub const NOTEBOOKS_DIR: &str = "notebooks";

const DATA_DIR: &str = "data";
const RAW_DIR: &str = "raw";
const PROCESSED_DIR: &str = "processed";
const OUTPUTS_DIR: &str = "outputs";

#[derive(Error, Debug)]
pub enum PathError {
    /// The filesystem refused to create one of the writable directories.
    #[error("creating directory {path}")]
    DirectoryCreation {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("determining current directory")]
    WorkingDirectory(#[source] io::Error),

    #[error("current directory is not valid UTF-8: {}", .0.display())]
    NonUtf8(PathBuf),
}

/// The four project locations, in `(root, raw, processed, outputs)` order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathSet {
    pub root: Utf8PathBuf,
    pub raw: Utf8PathBuf,
    pub processed: Utf8PathBuf,
    pub outputs: Utf8PathBuf,
}

impl PathSet {
    /// Derive the layout below `root` without touching the filesystem.
    pub fn from_root(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        let data = root.join(DATA_DIR);
        Self {
            raw: data.join(RAW_DIR),
            processed: data.join(PROCESSED_DIR),
            outputs: root.join(OUTPUTS_DIR),
            root,
        }
    }

    /// Create `processed` and `outputs` (with parents) if they are missing.
    ///
    /// `root` and `raw` are left alone.
    pub fn ensure(&self) -> Result<(), PathError> {
        for dir in [&self.processed, &self.outputs] {
            debug!(path = %dir, "ensuring directory");
            util::fs::ensure_dir(dir.as_std_path()).map_err(|source| {
                PathError::DirectoryCreation {
                    path: dir.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }

    pub fn into_tuple(self) -> (Utf8PathBuf, Utf8PathBuf, Utf8PathBuf, Utf8PathBuf) {
        (self.root, self.raw, self.processed, self.outputs)
    }

    /// Entries paired with their names, in tuple order.
    pub fn entries(&self) -> [(&'static str, &Utf8Path); 4] {
        [
            ("root", &self.root),
            ("raw", &self.raw),
            ("processed", &self.processed),
            ("outputs", &self.outputs),
        ]
    }
}

/// Resolves project locations relative to an explicit working directory.
#[derive(Clone, Debug)]
pub struct PathResolver {
    working_dir: Utf8PathBuf,
}

impl PathResolver {
    pub fn new(working_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Build a resolver from the process working directory.
    pub fn from_current_dir() -> Result<Self, PathError> {
        current_working_dir().map(Self::new)
    }

    pub fn working_dir(&self) -> &Utf8Path {
        &self.working_dir
    }

    /// The project root: the parent of a `notebooks` working directory,
    /// otherwise the working directory itself.
    pub fn resolve_root(&self) -> Utf8PathBuf {
        if self.working_dir.file_name() != Some(NOTEBOOKS_DIR) {
            return self.working_dir.clone();
        }

        let root = match self.working_dir.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
            _ => Utf8PathBuf::from("."),
        };
        debug!(
            working_dir = %self.working_dir,
            root = %root,
            "stepping out of notebooks directory"
        );
        root
    }

    /// Compute the layout without creating anything.
    pub fn plan(&self) -> PathSet {
        PathSet::from_root(self.resolve_root())
    }

    /// Compute the layout and make sure the writable directories exist.
    pub fn resolve_paths(&self) -> Result<PathSet, PathError> {
        let paths = self.plan();
        paths.ensure()?;
        Ok(paths)
    }
}

/// Project root for the process working directory.
pub fn resolve_root() -> Result<Utf8PathBuf, PathError> {
    Ok(PathResolver::from_current_dir()?.resolve_root())
}

/// Project layout for the process working directory, creating the writable
/// directories as needed.
pub fn resolve_paths() -> Result<PathSet, PathError> {
    PathResolver::from_current_dir()?.resolve_paths()
}

pub fn current_working_dir() -> Result<Utf8PathBuf, PathError> {
    let cwd = std::env::current_dir().map_err(PathError::WorkingDirectory)?;
    Utf8PathBuf::from_path_buf(cwd).map_err(PathError::NonUtf8)
}
