// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! The tracker name tree
//!
//! `tracker.json` maps each root entity id to a node with a display-name
//! fragment, two credit references and a recursive `subgroups` mapping.
//! Nodes carry many more keys in practice; only the ones below are read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the tracker tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerNode {
    /// Display-name fragment, possibly empty for subgroups
    pub name: String,
    /// Child nodes keyed by subgroup id
    pub subgroups: BTreeMap<String, TrackerNode>,
    /// Credit roster id for this node's portraits, empty when unset
    pub portrait_credit: String,
    /// Credit roster id for this node's sprites, empty when unset
    pub sprite_credit: String,
}

impl TrackerNode {
    /// Look up a direct child
    #[must_use]
    pub fn subgroup(&self, id: &str) -> Option<&TrackerNode> {
        self.subgroups.get(id)
    }
}

/// The whole tracker, keyed by root entity id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTree {
    roots: BTreeMap<String, TrackerNode>,
}

impl NameTree {
    /// Parse a tracker document
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error, which names any missing required key
    /// and its position.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Look up a root entity
    #[must_use]
    pub fn root(&self, id: &str) -> Option<&TrackerNode> {
        self.roots.get(id)
    }

    /// Number of root entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the tracker has no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl FromIterator<(String, TrackerNode)> for NameTree {
    fn from_iter<I: IntoIterator<Item = (String, TrackerNode)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}
