// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! The version-control operations the change explorer depends on

use crate::commit::Commit;
use crate::diff::DiffEntry;
use crate::error::GitError;

/// Read-only access to the revisions of an asset repository
///
/// Implementations must never mutate a working directory: every query is
/// answered from the object store, so several revisions can be inspected
/// from the same clone without interfering with each other.
pub trait RevisionSource {
    /// Resolve a revision identifier (SHA, branch, tag, `HEAD~n`, ...)
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if the identifier does not name a commit.
    fn resolve(&self, reference: &str) -> Result<Commit, GitError>;

    /// List changed paths between two revisions, older side first
    ///
    /// # Errors
    ///
    /// Returns `GitError` if either tree cannot be read or a change kind is unsupported.
    fn diff(&self, old: &Commit, new: &Commit) -> Result<Vec<DiffEntry>, GitError>;

    /// Read a file's raw bytes as of the given revision
    ///
    /// # Errors
    ///
    /// Returns `GitError::FileNotFound` if the path is not a file in that revision.
    fn read_file(&self, commit: &Commit, path: &str) -> Result<Vec<u8>, GitError>;

    /// Enumerate ancestry from `tip` in reverse-chronological order
    ///
    /// The walk includes `tip` itself and stops after yielding `stop`. When
    /// `stop` is never reached every ancestor is returned.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the history cannot be walked.
    fn ancestry(&self, tip: &Commit, stop: Option<&Commit>) -> Result<Vec<Commit>, GitError>;

    /// The revision immediately before `commit` on the primary line of history
    ///
    /// # Errors
    ///
    /// Returns `GitError::MissingPredecessor` for a root commit.
    fn predecessor(&self, commit: &Commit) -> Result<Commit, GitError> {
        let parent = commit
            .first_parent()
            .ok_or_else(|| GitError::MissingPredecessor {
                sha: commit.sha.clone(),
            })?;
        self.resolve(parent)
    }
}
