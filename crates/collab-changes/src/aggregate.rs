// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Folding diff entries into per-entity change records
//!
//! Aggregation is an explicit fold over [`DiffEntry`] values, so it can be
//! exercised without any repository:
//!
//! ```
//! use collab_changes::{Aggregator, EntityId};
//! use collab_git::DiffEntry;
//!
//! let entries = [
//!     DiffEntry::added("portrait/0025/Normal.png"),
//!     DiffEntry::modified("portrait/0025/Normal.png"),
//! ];
//! let changes = Aggregator::default().aggregate(&entries).unwrap();
//! let record = changes.get(&EntityId::new("0025")).unwrap();
//! assert_eq!(record.portrait.added, vec!["normal"]);
//! assert!(record.portrait.modified.is_empty());
//! ```

use crate::classify::{Category, EntityId, classify};
use crate::error::ChangesError;
use crate::layout::RepoLayout;
use collab_git::{ChangeKind, DiffEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Added, modified and removed leaf names for one entity and category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafSets {
    /// Leaves that are new in this revision
    pub added: Vec<String>,
    /// Leaves whose content changed
    pub modified: Vec<String>,
    /// Leaves that were deleted
    pub removed: Vec<String>,
}

impl LeafSets {
    /// Whether no leaf changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// Leave every leaf in at most one of the three sequences
    ///
    /// A leaf both added and removed (a rename that only changes case) is
    /// modified. A leaf both modified and removed stays modified, and a leaf
    /// both added and modified stays added.
    pub fn dedup(&mut self) {
        let renamed: Vec<String> = self
            .added
            .iter()
            .filter(|leaf| self.removed.contains(leaf))
            .cloned()
            .collect();
        for leaf in &renamed {
            push_unique(&mut self.modified, leaf);
        }
        self.added.retain(|leaf| !renamed.contains(leaf));

        let modified = &self.modified;
        self.removed.retain(|leaf| !modified.contains(leaf));
        let added = &self.added;
        self.modified.retain(|leaf| !added.contains(leaf));
    }

    fn sequence_mut(&mut self, kind: ChangeKind) -> &mut Vec<String> {
        match kind {
            ChangeKind::Added => &mut self.added,
            ChangeKind::Modified => &mut self.modified,
            ChangeKind::Removed => &mut self.removed,
        }
    }
}

fn push_unique(sequence: &mut Vec<String>, leaf: &str) {
    if !sequence.iter().any(|existing| existing == leaf) {
        sequence.push(leaf.to_string());
    }
}

/// Everything that changed for one entity in one revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChangeRecord {
    /// Portrait changes
    pub portrait: LeafSets,
    /// Sprite changes
    pub sprite: LeafSets,
}

impl EntityChangeRecord {
    /// Whether neither category has changes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portrait.is_empty() && self.sprite.is_empty()
    }

    fn sets_mut(&mut self, slot: AssetSlot) -> &mut LeafSets {
        match slot {
            AssetSlot::Portrait => &mut self.portrait,
            AssetSlot::Sprite => &mut self.sprite,
        }
    }

    fn dedup(&mut self) {
        self.portrait.dedup();
        self.sprite.dedup();
    }
}

/// The leaf sets of a record a change can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetSlot {
    Portrait,
    Sprite,
}

impl AssetSlot {
    fn of(category: Category) -> Option<Self> {
        match category {
            Category::Portrait => Some(Self::Portrait),
            Category::Sprite => Some(Self::Sprite),
            Category::Tracker | Category::Credit => None,
        }
    }
}

/// How sprite modifications and removals are filed
///
/// The historical changelog generator filed modified sprites as added and
/// removed sprites under portraits. `Legacy` reproduces that output;
/// `Corrected` files them under the sprite's own modified/removed sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpriteRouting {
    /// Sprite changes go to the sprite sets matching their change kind
    #[default]
    Corrected,
    /// Files sprite changes the way the historical changelog did
    Legacy,
}

impl SpriteRouting {
    /// The (slot, kind) a classified change is filed under
    fn route(self, slot: AssetSlot, kind: ChangeKind) -> (AssetSlot, ChangeKind) {
        match (self, slot, kind) {
            (Self::Legacy, AssetSlot::Sprite, ChangeKind::Modified) => {
                (AssetSlot::Sprite, ChangeKind::Added)
            }
            (Self::Legacy, AssetSlot::Sprite, ChangeKind::Removed) => {
                (AssetSlot::Portrait, ChangeKind::Removed)
            }
            _ => (slot, kind),
        }
    }
}

/// Per-entity change records for one revision, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    records: Vec<(EntityId, EntityChangeRecord)>,
    index: HashMap<EntityId, usize>,
}

impl ChangeSet {
    /// Create an empty change set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities with a record
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no entity has a record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for an entity
    #[must_use]
    pub fn get(&self, entity: &EntityId) -> Option<&EntityChangeRecord> {
        self.index.get(entity).map(|&i| &self.records[i].1)
    }

    /// Records in the order their entity was first seen
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityChangeRecord)> {
        self.records.iter().map(|(id, record)| (id, record))
    }

    /// The record for an entity, created empty on first reference
    pub fn record_mut(&mut self, entity: &EntityId) -> &mut EntityChangeRecord {
        let i = match self.index.get(entity) {
            Some(&i) => i,
            None => {
                self.records.push((entity.clone(), EntityChangeRecord::default()));
                self.index.insert(entity.clone(), self.records.len() - 1);
                self.records.len() - 1
            }
        };
        &mut self.records[i].1
    }

    /// Apply the added-versus-modified de-duplication to every record
    ///
    /// Running this more than once has no further effect.
    pub fn dedup(&mut self) {
        for (_, record) in &mut self.records {
            record.dedup();
        }
    }
}

impl IntoIterator for ChangeSet {
    type Item = (EntityId, EntityChangeRecord);
    type IntoIter = std::vec::IntoIter<(EntityId, EntityChangeRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Classifies diff entries and folds them into a [`ChangeSet`]
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    layout: RepoLayout,
    routing: SpriteRouting,
}

impl Aggregator {
    /// Create an aggregator for the given layout and sprite routing
    #[must_use]
    pub fn new(layout: RepoLayout, routing: SpriteRouting) -> Self {
        Self { layout, routing }
    }

    /// The layout paths are classified against
    #[must_use]
    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    /// Fold one diff entry into the change set
    ///
    /// # Errors
    ///
    /// Returns the classifier's error for an unrecognised path.
    pub fn step(
        &self,
        mut state: ChangeSet,
        entry: &DiffEntry,
    ) -> Result<ChangeSet, ChangesError> {
        let classified = classify(&entry.path, &self.layout)?;
        let (Some(asset), Some(slot)) = (classified.asset, AssetSlot::of(classified.category))
        else {
            debug!(
                path = %entry.path,
                category = %classified.category,
                "Skipping path without asset data"
            );
            return Ok(state);
        };

        let (slot, kind) = self.routing.route(slot, entry.kind);
        let sets = state.record_mut(&asset.entity).sets_mut(slot);
        push_unique(sets.sequence_mut(kind), &asset.leaf);

        debug!(
            path = %entry.path,
            entity = %asset.entity,
            leaf = %asset.leaf,
            ?kind,
            ?slot,
            "Classified change"
        );
        Ok(state)
    }

    /// Fold every entry, then de-duplicate each record's leaves
    ///
    /// # Errors
    ///
    /// The first classification failure aborts the whole aggregation.
    pub fn aggregate<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a DiffEntry>,
    ) -> Result<ChangeSet, ChangesError> {
        let mut changes = entries
            .into_iter()
            .try_fold(ChangeSet::new(), |state, entry| self.step(state, entry))?;
        changes.dedup();
        Ok(changes)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn entry_strategy() -> impl Strategy<Value = DiffEntry> {
        (
            prop_oneof![Just("portrait"), Just("sprite")],
            prop_oneof![Just("0001"), Just("0002"), Just("0002/0001")],
            prop_oneof![
                Just("Normal"),
                Just("normal"),
                Just("Happy"),
                Just("Idle-Anim")
            ],
            prop_oneof![
                Just(ChangeKind::Added),
                Just(ChangeKind::Modified),
                Just(ChangeKind::Removed)
            ],
        )
            .prop_map(|(top, entity, leaf, kind)| {
                DiffEntry::new(format!("{top}/{entity}/{leaf}.png"), kind)
            })
    }

    proptest! {
        /// Property: each leaf lands in at most one of added, modified and
        /// removed after aggregation, under either routing
        #[test]
        fn prop_leaf_sets_are_disjoint(
            entries in proptest::collection::vec(entry_strategy(), 0..40),
            legacy in any::<bool>(),
        ) {
            let routing = if legacy { SpriteRouting::Legacy } else { SpriteRouting::Corrected };
            let aggregator = Aggregator::new(RepoLayout::default(), routing);
            let changes = aggregator.aggregate(&entries).unwrap();
            for (_, record) in changes.iter() {
                for sets in [&record.portrait, &record.sprite] {
                    let total = sets.added.len() + sets.modified.len() + sets.removed.len();
                    let mut distinct: Vec<&String> = sets
                        .added
                        .iter()
                        .chain(&sets.modified)
                        .chain(&sets.removed)
                        .collect();
                    distinct.sort();
                    distinct.dedup();
                    prop_assert_eq!(distinct.len(), total);
                }
            }
        }

        /// Property: de-duplication is idempotent
        #[test]
        fn prop_dedup_is_idempotent(
            entries in proptest::collection::vec(entry_strategy(), 0..40)
        ) {
            let once = Aggregator::default().aggregate(&entries).unwrap();
            let mut twice = once.clone();
            twice.dedup();
            prop_assert_eq!(once, twice);
        }
    }
}
