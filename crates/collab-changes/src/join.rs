// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Resolving entity ids to display names and credits

use crate::classify::EntityId;
use crate::credit::{Credit, CreditRoster};
use crate::error::ChangesError;
use crate::tracker::NameTree;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An entity with its display name and attributions resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedEntity {
    /// The entity id the name was resolved from
    pub id: EntityId,
    /// Root name followed by every non-empty subgroup name
    pub name: String,
    /// Credit for portraits of the most specific node
    pub portrait_credit: Option<Credit>,
    /// Credit for sprites of the most specific node
    pub sprite_credit: Option<Credit>,
}

/// Join an entity id against the tracker tree and credit roster
///
/// The name is built from the root and every descended subgroup; the
/// credits come only from the final node, never from its ancestors.
///
/// # Errors
///
/// Any dangling reference is fatal: `UnknownEntity` for the root,
/// `UnknownSubgroup` for a subgroup along the way, and `UnknownCredit` for a
/// non-empty credit id missing from the roster.
pub fn join(
    id: &EntityId,
    tree: &NameTree,
    roster: &CreditRoster,
) -> Result<JoinedEntity, ChangesError> {
    let mut node = tree
        .root(id.root())
        .ok_or_else(|| ChangesError::UnknownEntity {
            entity: id.to_string(),
        })?;
    let mut name = node.name.clone();

    for subgroup in id.subgroups() {
        node = node
            .subgroup(subgroup)
            .ok_or_else(|| ChangesError::UnknownSubgroup {
                entity: id.to_string(),
                subgroup: subgroup.to_string(),
            })?;
        if !node.name.is_empty() {
            name.push(' ');
            name.push_str(&node.name);
        }
    }

    let resolve = |credit_id: &str| -> Result<Option<Credit>, ChangesError> {
        if credit_id.is_empty() {
            return Ok(None);
        }
        roster
            .get(credit_id)
            .cloned()
            .map(Some)
            .ok_or_else(|| ChangesError::UnknownCredit {
                entity: id.to_string(),
                credit: credit_id.to_string(),
            })
    };

    let joined = JoinedEntity {
        id: id.clone(),
        name,
        portrait_credit: resolve(&node.portrait_credit)?,
        sprite_credit: resolve(&node.sprite_credit)?,
    };
    debug!(entity = %id, name = %joined.name, "Joined entity metadata");
    Ok(joined)
}
