// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Error types for collab-git

use thiserror::Error;

/// Errors that can occur while reading revisions from the backing store
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The revision is a root commit, so there is nothing to diff against
    #[error("Commit {sha} has no predecessor")]
    MissingPredecessor {
        /// SHA of the root commit
        sha: String,
    },

    /// A path does not name a file in the revision's tree
    #[error("File {path} not found in commit {sha}")]
    FileNotFound {
        /// Repository-relative path that was requested
        path: String,
        /// SHA of the commit whose tree was searched
        sha: String,
    },

    /// The diff reported a change kind that has no counterpart in [`ChangeKind`]
    ///
    /// [`ChangeKind`]: crate::diff::ChangeKind
    #[error("Unsupported change {status} for {path}")]
    UnsupportedDelta {
        /// Path reported by the diff
        path: String,
        /// git2 delta status, as debug text
        status: String,
    },
}
