// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Markdown attribution lines
//!
//! Rendering is a pure function of a [`RevisionChanges`]: one line per
//! entity and category with changes, in the order entities were first seen.

use crate::aggregate::LeafSets;
use crate::classify::Category;
use crate::credit::Credit;
use crate::error::ChangesError;
use crate::explorer::{EntityChanges, RevisionChanges};

/// Above this many leaves an action is summarised by count
const MAX_LISTED_LEAVES: usize = 6;

/// Default commit link prefix
pub const DEFAULT_COMMIT_URL: &str = "https://github.com/PMDCollab/SpriteCollab/commit";

/// Formatting choices for rendered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Prefix written before every line, e.g. a list bullet
    pub tabulation: String,
    /// Base URL; the revision id is appended after a `/`
    pub commit_url: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tabulation: "-".to_string(),
            commit_url: DEFAULT_COMMIT_URL.to_string(),
        }
    }
}

impl ReportOptions {
    /// Link to the given revision
    #[must_use]
    pub fn commit_link(&self, sha: &str) -> String {
        format!("{}/{sha}", self.commit_url.trim_end_matches('/'))
    }
}

/// Join items as `a, b and c`
#[must_use]
pub fn format_list_human<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

fn format_action(leaves: &[String], verb: &str, category: Category) -> Option<String> {
    match leaves.len() {
        0 => None,
        n if n > MAX_LISTED_LEAVES => Some(format!("{verb} {n} {category}s")),
        1 => Some(format!("{verb} the {} {category}", leaves[0])),
        _ => Some(format!(
            "{verb} the {} {category}s",
            format_list_human(leaves)
        )),
    }
}

/// Action phrases for one category, in added, removed, modified order
#[must_use]
pub fn category_actions(sets: &LeafSets, category: Category) -> Vec<String> {
    [
        (&sets.added, "added"),
        (&sets.removed, "deleted"),
        (&sets.modified, "changed"),
    ]
    .into_iter()
    .filter_map(|(leaves, verb)| format_action(leaves, verb, category))
    .collect()
}

/// Who to thank, as markdown
#[must_use]
pub fn attribution(credit: &Credit) -> String {
    let text = match &credit.name {
        Some(name) => name.clone(),
        None => format!("the user with the discord id {}", credit.id),
    };
    match &credit.url {
        Some(url) => format!("[{text}]({url})"),
        None => text,
    }
}

fn render_category(
    changes: &EntityChanges,
    category: Category,
    sha: &str,
    options: &ReportOptions,
) -> Result<Option<String>, ChangesError> {
    let (sets, credit) = match category {
        Category::Portrait => (&changes.record.portrait, &changes.entity.portrait_credit),
        Category::Sprite => (&changes.record.sprite, &changes.entity.sprite_credit),
        Category::Tracker | Category::Credit => return Ok(None),
    };

    let actions = category_actions(sets, category);
    if actions.is_empty() {
        return Ok(None);
    }
    let credit = credit.as_ref().ok_or_else(|| ChangesError::MissingCredit {
        entity: changes.entity.id.to_string(),
        category,
    })?;

    Ok(Some(format!(
        "{} {} [{} for {}]({}).",
        options.tabulation,
        attribution(credit),
        format_list_human(&actions),
        changes.entity.name,
        options.commit_link(sha),
    )))
}

/// Render every line for one revision, each terminated by a newline
///
/// # Errors
///
/// Returns `ChangesError::MissingCredit` when a category has changes but the
/// entity has no credit for it.
pub fn render_revision(
    changes: &RevisionChanges,
    options: &ReportOptions,
) -> Result<String, ChangesError> {
    let mut out = String::new();
    for entity in &changes.entities {
        for category in [Category::Portrait, Category::Sprite] {
            let line = render_category(entity, category, &changes.commit.sha, options)?;
            if let Some(line) = line {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    Ok(out)
}
