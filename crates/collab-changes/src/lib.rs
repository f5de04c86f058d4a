// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! collab-changes: what changed in a sprite collaboration commit, and who did it
//!
//! Given a revision of an asset repository holding per-creature portraits and
//! sprites, a `tracker.json` name tree and a `credit_names.txt` roster, this
//! crate classifies every changed path, folds the changes into per-entity
//! records, joins them against the tracker and roster of that revision, and
//! renders markdown attribution lines.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use collab_changes::{ChangeExplorer, ReportOptions};
//! use collab_git::GitRepo;
//!
//! let repo = GitRepo::open("SpriteCollab").expect("open repo");
//! let explorer = ChangeExplorer::new(repo);
//! let text = explorer
//!     .report("HEAD", &ReportOptions::default())
//!     .expect("render HEAD");
//! print!("{text}");
//! ```

pub mod aggregate;
pub mod classify;
pub mod credit;
pub mod error;
pub mod explorer;
pub mod join;
pub mod layout;
pub mod render;
pub mod tracker;

pub use aggregate::{Aggregator, ChangeSet, EntityChangeRecord, LeafSets, SpriteRouting};
pub use classify::{AssetPath, Category, ClassifiedPath, EntityId, classify};
pub use credit::{Credit, CreditRoster};
pub use error::ChangesError;
pub use explorer::{ChangeExplorer, EntityChanges, FailurePolicy, RevisionChanges};
pub use join::{JoinedEntity, join};
pub use layout::RepoLayout;
pub use render::{ReportOptions, format_list_human, render_revision};
pub use tracker::{NameTree, TrackerNode};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregate::{ChangeSet, SpriteRouting};
    pub use crate::error::ChangesError;
    pub use crate::explorer::{ChangeExplorer, FailurePolicy, RevisionChanges};
    pub use crate::layout::RepoLayout;
    pub use crate::render::ReportOptions;
    pub use collab_git::{ChangeKind, Commit, DiffEntry, RevisionSource};
}
