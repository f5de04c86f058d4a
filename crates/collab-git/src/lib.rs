// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! collab-git: revision access for collab-changelog
//!
//! This library crate wraps a git repository behind the [`RevisionSource`]
//! trait: resolving revisions, finding a revision's predecessor, diffing two
//! trees without touching the working directory, and reading files as they
//! exist in a given revision.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use collab_git::{GitRepo, RevisionSource};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let commit = repo.resolve("HEAD").expect("resolve HEAD");
//! let parent = repo.predecessor(&commit).expect("find parent");
//!
//! for entry in repo.diff(&parent, &commit).expect("diff") {
//!     println!("{:?} {}", entry.kind, entry.path);
//! }
//! ```

pub mod commit;
pub mod diff;
pub mod error;
pub mod repo;
pub mod source;

pub use commit::Commit;
pub use diff::{ChangeKind, DiffEntry};
pub use error::GitError;
pub use repo::GitRepo;
pub use source::RevisionSource;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::diff::{ChangeKind, DiffEntry};
    pub use crate::error::GitError;
    pub use crate::repo::GitRepo;
    pub use crate::source::RevisionSource;
}
