// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! git2-backed revision access
//!
//! This module implements [`RevisionSource`] on top of a `git2::Repository`.
//! Diffs are computed tree-to-tree, so the working directory and index of the
//! clone are never touched.

use crate::commit::Commit;
use crate::diff::{ChangeKind, DiffEntry};
use crate::error::GitError;
use crate::source::RevisionSource;
use git2::{ErrorCode, Oid, Repository, Sort};
use std::path::Path;
use tracing::debug;

/// A git repository wrapper for reading revisions
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Get the repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    fn find_commit(&self, commit: &Commit) -> Result<git2::Commit<'_>, GitError> {
        let oid = Oid::from_str(&commit.sha).map_err(|_| GitError::InvalidReference {
            reference: commit.sha.clone(),
        })?;
        Ok(self.repo.find_commit(oid)?)
    }
}

impl RevisionSource for GitRepo {
    fn resolve(&self, reference: &str) -> Result<Commit, GitError> {
        let invalid = || GitError::InvalidReference {
            reference: reference.to_string(),
        };
        let git_commit = self
            .repo
            .revparse_single(reference)
            .map_err(|_| invalid())?
            .peel_to_commit()
            .map_err(|_| invalid())?;
        Ok(Commit::from_git2(&git_commit))
    }

    fn diff(&self, old: &Commit, new: &Commit) -> Result<Vec<DiffEntry>, GitError> {
        let old_tree = self.find_commit(old)?.tree()?;
        let new_tree = self.find_commit(new)?.tree()?;

        let diff = self.repo.diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)?;

        let mut entries = Vec::with_capacity(diff.deltas().len());
        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path_bytes()
                .or_else(|| delta.old_file().path_bytes())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default();
            let kind = ChangeKind::from_delta(delta.status(), &path)?;
            entries.push(DiffEntry { path, kind });
        }

        debug!(
            old = old.short_sha(),
            new = new.short_sha(),
            changed = entries.len(),
            "Computed tree diff"
        );
        Ok(entries)
    }

    fn read_file(&self, commit: &Commit, path: &str) -> Result<Vec<u8>, GitError> {
        let not_found = || GitError::FileNotFound {
            path: path.to_string(),
            sha: commit.sha.clone(),
        };

        let tree = self.find_commit(commit)?.tree()?;
        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        let blob = entry
            .to_object(&self.repo)?
            .into_blob()
            .map_err(|_| not_found())?;
        Ok(blob.content().to_vec())
    }

    fn ancestry(&self, tip: &Commit, stop: Option<&Commit>) -> Result<Vec<Commit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push(self.find_commit(tip)?.id())?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let git_commit = self.repo.find_commit(oid_result?)?;
            let commit = Commit::from_git2(&git_commit);
            let reached_stop = stop.is_some_and(|s| s.sha == commit.sha);
            commits.push(commit);
            if reached_stop {
                break;
            }
        }

        Ok(commits)
    }
}
