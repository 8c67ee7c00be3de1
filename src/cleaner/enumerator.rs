//! Listing of the directories to clean.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

/// List the absolute path of every direct child of `root`.
///
/// Regular files are returned as well as directories; the cleanup command
/// simply fails to start in them. Order is whatever the OS listing yields.
pub fn list_children(root: &Path) -> Result<Vec<PathBuf>> {
    let root = root.canonicalize().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SweepError::PathNotFound(root.to_path_buf()),
        _ => SweepError::Io {
            path: root.to_path_buf(),
            source: e,
        },
    })?;

    if !root.is_dir() {
        return Err(SweepError::NotADirectory(root));
    }

    let entries = fs::read_dir(&root).map_err(|e| SweepError::Io {
        path: root.clone(),
        source: e,
    })?;

    let mut children = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => children.push(entry.path()),
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "Skipping unreadable entry");
            }
        }
    }

    tracing::info!(root = %root.display(), count = children.len(), "Listed children");
    Ok(children)
}
