// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Names of the top-level entries of an asset repository

use crate::classify::Category;

/// The directory and file names that make up an asset repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Directory holding per-entity portrait images
    pub portrait_dir: String,
    /// Directory holding per-entity sprite images
    pub sprite_dir: String,
    /// Hierarchical name/credit metadata file
    pub tracker_file: String,
    /// Tab-separated credit roster file
    pub credit_file: String,
    /// Image file extension, without the leading dot
    pub image_extension: String,
}

impl Default for RepoLayout {
    fn default() -> Self {
        Self {
            portrait_dir: "portrait".to_string(),
            sprite_dir: "sprite".to_string(),
            tracker_file: "tracker.json".to_string(),
            credit_file: "credit_names.txt".to_string(),
            image_extension: "png".to_string(),
        }
    }
}

impl RepoLayout {
    /// Map a top-level path segment onto its category
    #[must_use]
    pub fn category_of(&self, segment: &str) -> Option<Category> {
        if segment == self.portrait_dir {
            Some(Category::Portrait)
        } else if segment == self.sprite_dir {
            Some(Category::Sprite)
        } else if segment == self.tracker_file {
            Some(Category::Tracker)
        } else if segment == self.credit_file {
            Some(Category::Credit)
        } else {
            None
        }
    }

    /// Whether a file name carries the image extension
    #[must_use]
    pub fn is_image(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.image_extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}
