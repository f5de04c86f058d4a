//! Revision metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved revision of the asset repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Commit message
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit SHAs, first parent first
    pub parents: Vec<String>,
}

impl Commit {
    /// Build a `Commit` from a git2 commit object
    #[must_use]
    pub fn from_git2(git_commit: &git2::Commit<'_>) -> Self {
        let timestamp =
            DateTime::from_timestamp(git_commit.time().seconds(), 0).unwrap_or_else(Utc::now);

        Self {
            sha: git_commit.id().to_string(),
            message: git_commit.message().unwrap_or("").to_string(),
            author: git_commit.author().name().unwrap_or("Unknown").to_string(),
            author_email: git_commit.author().email().unwrap_or("").to_string(),
            timestamp,
            parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
        }
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// The parent on the primary line of history, if any
    #[must_use]
    pub fn first_parent(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
