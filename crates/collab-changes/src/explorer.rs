// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Driving the pipeline for one revision or a range of revisions
//!
//! For each revision: diff against the first parent, fold the diff into a
//! [`ChangeSet`], load the tracker and roster *as of that revision*, join
//! every entity, and hand the result to the renderer. Nothing is cached
//! between revisions.

use crate::aggregate::{Aggregator, ChangeSet, EntityChangeRecord, SpriteRouting};
use crate::credit::CreditRoster;
use crate::error::ChangesError;
use crate::join::{JoinedEntity, join};
use crate::layout::RepoLayout;
use crate::render::{ReportOptions, render_revision};
use crate::tracker::NameTree;
use collab_git::{Commit, RevisionSource};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One entity's changes, joined with its name and credits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChanges {
    /// Name and credits
    #[serde(flatten)]
    pub entity: JoinedEntity,
    /// Portrait and sprite leaf changes
    #[serde(flatten)]
    pub record: EntityChangeRecord,
}

/// The joined summary of one revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionChanges {
    /// The revision that was inspected
    pub commit: Commit,
    /// Changed entities, in first-seen order
    pub entities: Vec<EntityChanges>,
}

/// What a range report does when a revision fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing revision
    #[default]
    Abort,
    /// Log the failure and continue with the next revision
    Skip,
}

/// Summarises revisions read from a [`RevisionSource`]
pub struct ChangeExplorer<S> {
    source: S,
    aggregator: Aggregator,
}

impl<S: RevisionSource> ChangeExplorer<S> {
    /// Create an explorer with the default layout and corrected sprite routing
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            aggregator: Aggregator::default(),
        }
    }

    /// Use a custom layout and sprite routing
    #[must_use]
    pub fn with_aggregator(mut self, layout: RepoLayout, routing: SpriteRouting) -> Self {
        self.aggregator = Aggregator::new(layout, routing);
        self
    }

    fn layout(&self) -> &RepoLayout {
        self.aggregator.layout()
    }

    fn load_tracker(&self, commit: &Commit) -> Result<NameTree, ChangesError> {
        let path = &self.layout().tracker_file;
        let bytes = self.source.read_file(commit, path)?;
        NameTree::from_slice(&bytes).map_err(|source| ChangesError::Tracker {
            path: path.clone(),
            source,
        })
    }

    fn load_roster(&self, commit: &Commit) -> Result<CreditRoster, ChangesError> {
        let path = &self.layout().credit_file;
        let bytes = self.source.read_file(commit, path)?;
        CreditRoster::from_bytes(path, bytes)
    }

    /// Aggregate the changes of a resolved revision against its predecessor
    ///
    /// # Errors
    ///
    /// Returns `GitError::MissingPredecessor` (wrapped) for a root commit, or
    /// the first classification failure.
    pub fn change_set(&self, commit: &Commit) -> Result<ChangeSet, ChangesError> {
        let parent = self.source.predecessor(commit)?;
        let entries = self.source.diff(&parent, commit)?;
        self.aggregator.aggregate(&entries)
    }

    /// Build the joined summary of a resolved revision
    ///
    /// # Errors
    ///
    /// Any diff, classification, load or join failure aborts the revision.
    pub fn changes_for(&self, commit: &Commit) -> Result<RevisionChanges, ChangesError> {
        let changes = self.change_set(commit)?;
        let tree = self.load_tracker(commit)?;
        let roster = self.load_roster(commit)?;

        let entities = changes
            .into_iter()
            .map(|(id, record)| -> Result<EntityChanges, ChangesError> {
                Ok(EntityChanges {
                    entity: join(&id, &tree, &roster)?,
                    record,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            revision = commit.short_sha(),
            subject = commit.subject(),
            entities = entities.len(),
            "Summarised revision"
        );
        Ok(RevisionChanges {
            commit: commit.clone(),
            entities,
        })
    }

    /// Resolve a revision identifier and build its joined summary
    ///
    /// # Errors
    ///
    /// See [`ChangeExplorer::changes_for`]; also fails if the identifier
    /// does not resolve.
    pub fn get_change(&self, revision: &str) -> Result<RevisionChanges, ChangesError> {
        let commit = self.source.resolve(revision)?;
        self.changes_for(&commit)
    }

    /// Render the markdown lines of one revision
    ///
    /// # Errors
    ///
    /// See [`ChangeExplorer::get_change`] and [`render_revision`].
    pub fn report(&self, revision: &str, options: &ReportOptions) -> Result<String, ChangesError> {
        render_revision(&self.get_change(revision)?, options)
    }

    /// Revisions from `end` back to `start` inclusive, newest first
    ///
    /// Without a `start`, or when `start` is not an ancestor of `end`, every
    /// ancestor of `end` is returned.
    ///
    /// # Errors
    ///
    /// Fails if either identifier does not resolve or history cannot be walked.
    pub fn revisions(&self, start: Option<&str>, end: &str) -> Result<Vec<Commit>, ChangesError> {
        let tip = self.source.resolve(end)?;
        let stop = start.map(|s| self.source.resolve(s)).transpose()?;
        Ok(self.source.ancestry(&tip, stop.as_ref())?)
    }

    /// Summarise every revision of a range, newest first
    ///
    /// # Errors
    ///
    /// Fails if the range cannot be resolved, or with the first failing
    /// revision's error under [`FailurePolicy::Abort`].
    pub fn changes_in_range(
        &self,
        start: Option<&str>,
        end: &str,
        policy: FailurePolicy,
    ) -> Result<Vec<RevisionChanges>, ChangesError> {
        let mut summaries = Vec::new();
        for commit in self.revisions(start, end)? {
            match self.changes_for(&commit) {
                Ok(changes) => summaries.push(changes),
                Err(e) if policy == FailurePolicy::Skip => {
                    warn!(revision = commit.short_sha(), error = %e, "Skipping revision");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(summaries)
    }

    /// Render every revision of a range, newest first
    ///
    /// # Errors
    ///
    /// See [`ChangeExplorer::changes_in_range`].
    pub fn report_range(
        &self,
        start: Option<&str>,
        end: &str,
        options: &ReportOptions,
        policy: FailurePolicy,
    ) -> Result<String, ChangesError> {
        let mut out = String::new();
        for commit in self.revisions(start, end)? {
            match self
                .changes_for(&commit)
                .and_then(|changes| render_revision(&changes, options))
            {
                Ok(text) => out.push_str(&text),
                Err(e) if policy == FailurePolicy::Skip => {
                    warn!(revision = commit.short_sha(), error = %e, "Skipping revision");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}
