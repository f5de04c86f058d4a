// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Error types for collab-changes
//!
//! Every variant is fatal for the revision being processed: there is no
//! partial report. Callers iterating a range decide whether to skip.

use crate::classify::Category;
use collab_git::GitError;
use thiserror::Error;

/// Errors that can occur while summarising a revision
#[derive(Debug, Error)]
pub enum ChangesError {
    /// Error from the revision source
    #[error(transparent)]
    Git(#[from] GitError),

    /// The first path segment is not one of the known layout names
    #[error("Unknown category {segment:?} for path {path}")]
    UnknownCategory {
        /// Full path from the diff
        path: String,
        /// The unrecognised top-level segment
        segment: String,
    },

    /// An image sits directly under a category directory with no entity folder
    #[error("Image path {path} has no entity directory")]
    MissingEntity {
        /// Full path from the diff
        path: String,
    },

    /// The tracker file is not valid JSON or misses a required field
    #[error("Invalid tracker file {path}: {source}")]
    Tracker {
        /// Path of the tracker file in the revision
        path: String,
        /// Underlying parse error, naming the offending key
        #[source]
        source: serde_json::Error,
    },

    /// The credit roster is not UTF-8 text
    #[error("Credit roster {path} is not valid UTF-8: {source}")]
    RosterEncoding {
        /// Path of the roster file in the revision
        path: String,
        /// Underlying decode error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A roster line could not be parsed
    #[error("Invalid credit roster line {line}: {message}")]
    Roster {
        /// 1-based line number in the roster file
        line: usize,
        /// What is wrong with the line
        message: String,
    },

    /// The root entity id is absent from the tracker
    #[error("Entity {entity} not found in tracker")]
    UnknownEntity {
        /// Entity id being joined
        entity: String,
    },

    /// A subgroup along the entity id is absent from the tracker
    #[error("Subgroup {subgroup} of entity {entity} not found in tracker")]
    UnknownSubgroup {
        /// Entity id being joined
        entity: String,
        /// The missing subgroup id
        subgroup: String,
    },

    /// The tracker references a credit id absent from the roster
    #[error("Credit {credit} referenced by entity {entity} not found in roster")]
    UnknownCredit {
        /// Entity id being joined
        entity: String,
        /// The dangling credit id
        credit: String,
    },

    /// A category has changes but the entity carries no credit for it
    #[error("Entity {entity} has {category} changes but no {category} credit")]
    MissingCredit {
        /// Entity id being rendered
        entity: String,
        /// Category with changes
        category: Category,
    },
}
