// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Path classification
//!
//! Maps a changed path onto its [`Category`] and, for images under the
//! portrait or sprite directories, onto the owning [`EntityId`] and the leaf
//! name of the asset.

use crate::error::ChangesError;
use crate::layout::RepoLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the asset repository a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Per-entity portrait images
    Portrait,
    /// Per-entity sprite images
    Sprite,
    /// The tracker metadata file
    Tracker,
    /// The credit roster file
    Credit,
}

impl Category {
    /// Whether paths of this category carry per-entity image data
    #[must_use]
    pub fn is_asset(self) -> bool {
        matches!(self, Self::Portrait | Self::Sprite)
    }

    /// Lowercase name used in messages and rendered text
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Sprite => "sprite",
            Self::Tracker => "tracker",
            Self::Credit => "credit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slash-delimited entity identifier, e.g. `0025` or `0025/0001`
///
/// The first segment is the root entity; the remaining segments descend
/// through the tracker's subgroup tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a slash-delimited identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as written in paths
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The root entity segment
    #[must_use]
    pub fn root(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }

    /// Subgroup segments below the root, in descent order
    pub fn subgroups(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').skip(1)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The entity and asset a portrait or sprite image path refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    /// Owning entity
    pub entity: EntityId,
    /// Lowercased file name without extension
    pub leaf: String,
}

/// Result of classifying one changed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath {
    /// Category from the top-level segment
    pub category: Category,
    /// Set only for images under the portrait or sprite directories
    pub asset: Option<AssetPath>,
}

impl ClassifiedPath {
    /// The owning entity, if any
    #[must_use]
    pub fn entity(&self) -> Option<&EntityId> {
        self.asset.as_ref().map(|a| &a.entity)
    }

    /// The leaf name, if any
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.leaf.as_str())
    }
}

/// Classify a repository-relative, slash-separated path
///
/// Tracker and credit paths are recognised but never carry entity data; they
/// only mean the auxiliary file changed. Non-image files under the portrait
/// and sprite directories are recognised and ignored.
///
/// # Errors
///
/// Returns `ChangesError::UnknownCategory` when the first segment matches no
/// layout name, and `ChangesError::MissingEntity` for an image sitting
/// directly under a category directory.
pub fn classify(path: &str, layout: &RepoLayout) -> Result<ClassifiedPath, ChangesError> {
    let mut segments = path.split('/');
    let top = segments.next().unwrap_or("");
    let category = layout
        .category_of(top)
        .ok_or_else(|| ChangesError::UnknownCategory {
            path: path.to_string(),
            segment: top.to_string(),
        })?;

    let rest: Vec<&str> = segments.collect();
    let ignored = ClassifiedPath {
        category,
        asset: None,
    };

    if !category.is_asset() {
        return Ok(ignored);
    }
    let Some((file_name, directories)) = rest.split_last() else {
        return Ok(ignored);
    };
    if !layout.is_image(file_name) {
        return Ok(ignored);
    }
    if directories.is_empty() {
        return Err(ChangesError::MissingEntity {
            path: path.to_string(),
        });
    }

    let stem = file_name.split('.').next().unwrap_or(file_name);
    Ok(ClassifiedPath {
        category,
        asset: Some(AssetPath {
            entity: EntityId::new(directories.join("/")),
            leaf: stem.to_lowercase(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn layout() -> RepoLayout {
        RepoLayout::default()
    }

    #[test]
    fn test_portrait_image() {
        let classified = classify("portrait/0025/Normal.png", &layout()).unwrap();
        assert_eq!(classified.category, Category::Portrait);
        assert_eq!(classified.entity(), Some(&EntityId::new("0025")));
        assert_eq!(classified.leaf(), Some("normal"));
    }

    #[test]
    fn test_nested_sprite_image() {
        let classified = classify("sprite/0025/0001/Idle-Anim.png", &layout()).unwrap();
        assert_eq!(classified.category, Category::Sprite);
        assert_eq!(classified.entity(), Some(&EntityId::new("0025/0001")));
        assert_eq!(classified.leaf(), Some("idle-anim"));
    }

    #[test]
    fn test_leaf_strips_everything_after_first_dot() {
        let classified = classify("portrait/0001/Happy.old.png", &layout()).unwrap();
        assert_eq!(classified.leaf(), Some("happy"));
    }

    #[test]
    fn test_non_image_under_asset_dir_is_ignored() {
        let classified = classify("sprite/0025/AnimData.xml", &layout()).unwrap();
        assert_eq!(classified.category, Category::Sprite);
        assert_eq!(classified.asset, None);
    }

    #[test]
    fn test_auxiliary_files() {
        let tracker = classify("tracker.json", &layout()).unwrap();
        assert_eq!(tracker.category, Category::Tracker);
        assert_eq!(tracker.asset, None);

        let credit = classify("credit_names.txt", &layout()).unwrap();
        assert_eq!(credit.category, Category::Credit);
        assert_eq!(credit.asset, None);
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        match classify("README.md", &layout()) {
            Err(ChangesError::UnknownCategory { path, segment }) => {
                assert_eq!(path, "README.md");
                assert_eq!(segment, "README.md");
            }
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }

        assert!(matches!(
            classify("icons/0001/Normal.png", &layout()),
            Err(ChangesError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_image_without_entity_is_fatal() {
        assert!(matches!(
            classify("portrait/Normal.png", &layout()),
            Err(ChangesError::MissingEntity { .. })
        ));
    }

    #[test]
    fn test_entity_id_segments() {
        let id = EntityId::new("0025/0001/0002");
        assert_eq!(id.root(), "0025");
        assert_eq!(id.subgroups().collect::<Vec<_>>(), vec!["0001", "0002"]);

        let root_only = EntityId::new("0025");
        assert_eq!(root_only.subgroups().count(), 0);
        assert_eq!(root_only.to_string(), "0025");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Portrait.to_string(), "portrait");
        assert_eq!(Category::Credit.to_string(), "credit");
        assert!(Category::Sprite.is_asset());
        assert!(!Category::Tracker.is_asset());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: entity id is the path minus category and file name,
        /// and the leaf is the lowercased file stem
        #[test]
        fn prop_image_paths_split_into_entity_and_leaf(
            top in prop_oneof![Just("portrait"), Just("sprite")],
            dirs in proptest::collection::vec("[0-9]{4}", 1..4),
            stem in "[A-Za-z][A-Za-z_-]{0,15}",
        ) {
            let path = format!("{top}/{}/{stem}.png", dirs.join("/"));
            let classified = classify(&path, &RepoLayout::default()).unwrap();
            let expected_entity = dirs.join("/");

            let expected_leaf = stem.to_lowercase();

            prop_assert_eq!(
                classified.entity().map(EntityId::as_str),
                Some(expected_entity.as_str())
            );
            prop_assert_eq!(classified.leaf(), Some(expected_leaf.as_str()));
        }

        /// Property: unknown top-level segments always fail
        #[test]
        fn prop_unknown_top_segment_fails(top in "[a-z]{1,10}", rest in "[a-z/]{0,20}") {
            prop_assume!(RepoLayout::default().category_of(&top).is_none());
            let path = format!("{top}/{rest}");
            let is_unknown_category = matches!(
                classify(&path, &RepoLayout::default()),
                Err(ChangesError::UnknownCategory { .. })
            );
            prop_assert!(is_unknown_category);
        }
    }
}
