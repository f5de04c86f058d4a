// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Test fixtures for collab-changes integration tests
//!
//! Provides an in-memory [`RevisionSource`] with linear history, plus the
//! tracker and roster documents most tests start from.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use collab_git::{ChangeKind, Commit, DiffEntry, GitError, RevisionSource};
use std::collections::BTreeMap;

// ============================================================================
// Sample documents
// ============================================================================

pub const TRACKER: &str = r#"{
    "0001": {
        "name": "Bulbasaur",
        "portrait_credit": "100",
        "sprite_credit": "200",
        "subgroups": {}
    },
    "0025": {
        "name": "Pikachu",
        "portrait_credit": "100",
        "sprite_credit": "",
        "subgroups": {
            "0001": {
                "name": "Cosplay",
                "portrait_credit": "200",
                "sprite_credit": "300",
                "subgroups": {}
            }
        }
    }
}"#;

pub const ROSTER: &str = "Name\tDiscord\tContact\n\
                          Bob\t100\thttps://bob.example\n\
                          \t200\t\n\
                          Carol\t300\t\n";

/// Baseline files present in every fixture repository
pub fn base_files() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("tracker.json", TRACKER.as_bytes().to_vec()),
        ("credit_names.txt", ROSTER.as_bytes().to_vec()),
    ]
}

// ============================================================================
// In-memory revision source
// ============================================================================

struct Snapshot {
    commit: Commit,
    files: BTreeMap<String, Vec<u8>>,
}

/// Linear history held in memory
#[derive(Default)]
pub struct MemorySource {
    snapshots: Vec<Snapshot>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit on top of the previous snapshot: write `files`, delete `removed`
    pub fn commit<P: Into<String>>(
        &mut self,
        message: &str,
        files: Vec<(P, Vec<u8>)>,
        removed: &[&str],
    ) -> String {
        let mut tree = self
            .snapshots
            .last()
            .map(|s| s.files.clone())
            .unwrap_or_default();
        for (path, contents) in files {
            tree.insert(path.into(), contents);
        }
        for path in removed {
            tree.remove(*path);
        }

        let sha = format!("{:040x}", self.snapshots.len() + 1);
        let parents = self
            .snapshots
            .last()
            .map(|s| vec![s.commit.sha.clone()])
            .unwrap_or_default();
        let timestamp = Utc
            .timestamp_opt(1_650_000_000 + self.snapshots.len() as i64 * 60, 0)
            .unwrap();

        self.snapshots.push(Snapshot {
            commit: Commit {
                sha: sha.clone(),
                message: message.to_string(),
                author: "Test Author".to_string(),
                author_email: "test@example.com".to_string(),
                timestamp,
                parents,
            },
            files: tree,
        });
        sha
    }

    fn snapshot(&self, sha: &str) -> Result<&Snapshot, GitError> {
        self.snapshots
            .iter()
            .find(|s| s.commit.sha == sha)
            .ok_or_else(|| GitError::InvalidReference {
                reference: sha.to_string(),
            })
    }
}

impl RevisionSource for MemorySource {
    fn resolve(&self, reference: &str) -> Result<Commit, GitError> {
        if reference == "HEAD" {
            return self
                .snapshots
                .last()
                .map(|s| s.commit.clone())
                .ok_or_else(|| GitError::InvalidReference {
                    reference: reference.to_string(),
                });
        }
        self.snapshot(reference).map(|s| s.commit.clone())
    }

    fn diff(&self, old: &Commit, new: &Commit) -> Result<Vec<DiffEntry>, GitError> {
        let old = &self.snapshot(&old.sha)?.files;
        let new = &self.snapshot(&new.sha)?.files;

        let mut entries = Vec::new();
        for (path, contents) in new {
            match old.get(path) {
                None => entries.push(DiffEntry::new(path.clone(), ChangeKind::Added)),
                Some(previous) if previous != contents => {
                    entries.push(DiffEntry::new(path.clone(), ChangeKind::Modified));
                }
                Some(_) => {}
            }
        }
        for path in old.keys().filter(|p| !new.contains_key(*p)) {
            entries.push(DiffEntry::new(path.clone(), ChangeKind::Removed));
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read_file(&self, commit: &Commit, path: &str) -> Result<Vec<u8>, GitError> {
        self.snapshot(&commit.sha)?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| GitError::FileNotFound {
                path: path.to_string(),
                sha: commit.sha.clone(),
            })
    }

    fn ancestry(&self, tip: &Commit, stop: Option<&Commit>) -> Result<Vec<Commit>, GitError> {
        let position = self
            .snapshots
            .iter()
            .position(|s| s.commit.sha == tip.sha)
            .ok_or_else(|| GitError::InvalidReference {
                reference: tip.sha.clone(),
            })?;

        let mut commits = Vec::new();
        for snapshot in self.snapshots[..=position].iter().rev() {
            commits.push(snapshot.commit.clone());
            if stop.is_some_and(|s| s.sha == snapshot.commit.sha) {
                break;
            }
        }
        Ok(commits)
    }
}
