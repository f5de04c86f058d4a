// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! File-level changes between two revisions

use crate::error::GitError;
use serde::{Deserialize, Serialize};

/// How a single path changed between two revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The path exists only in the newer revision
    Added,
    /// The path exists in both revisions with different content
    Modified,
    /// The path exists only in the older revision
    Removed,
}

impl ChangeKind {
    /// Map a git2 delta status onto a change kind
    ///
    /// Type changes (e.g. file to symlink) count as modifications. Renames and
    /// copies are never produced because rename detection is not enabled on
    /// the diffs this crate computes.
    ///
    /// # Errors
    ///
    /// Returns `GitError::UnsupportedDelta` for any other status.
    pub fn from_delta(status: git2::Delta, path: &str) -> Result<Self, GitError> {
        match status {
            git2::Delta::Added => Ok(Self::Added),
            git2::Delta::Modified | git2::Delta::Typechange => Ok(Self::Modified),
            git2::Delta::Deleted => Ok(Self::Removed),
            other => Err(GitError::UnsupportedDelta {
                path: path.to_string(),
                status: format!("{other:?}"),
            }),
        }
    }
}

/// One changed path, as reported by a tree-to-tree diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// Repository-relative, slash-separated path on the newer side
    /// (or the older side for removals)
    pub path: String,
    /// How the path changed
    pub kind: ChangeKind,
}

impl DiffEntry {
    /// Create a diff entry
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for an added path
    #[must_use]
    pub fn added(path: impl Into<String>) -> Self {
        Self::new(path, ChangeKind::Added)
    }

    /// Shorthand for a modified path
    #[must_use]
    pub fn modified(path: impl Into<String>) -> Self {
        Self::new(path, ChangeKind::Modified)
    }

    /// Shorthand for a removed path
    #[must_use]
    pub fn removed(path: impl Into<String>) -> Self {
        Self::new(path, ChangeKind::Removed)
    }
}
