// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! collab-changelog library
//!
//! This module exports the command-line configuration and the top-level
//! `run` entry point for use in integration tests.

pub mod config;

use anyhow::{Context, Result};
use collab_changes::{ChangeExplorer, RepoLayout};
use collab_git::GitRepo;
use tracing::debug;

use config::{Config, OutputFormat};

/// Summarise the configured revision or range and return the output text
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or, unless
/// `--keep-going` is set, if any revision cannot be summarised.
pub fn run(config: &Config) -> Result<String> {
    let repo = GitRepo::discover(&config.repo)
        .with_context(|| format!("Failed to open repository at {}", config.repo.display()))?;
    debug!(git_dir = %repo.path().display(), "Opened repository");
    let explorer =
        ChangeExplorer::new(repo).with_aggregator(RepoLayout::default(), config.routing());
    let options = config.report_options();
    let policy = config.failure_policy();

    let output = match (config.format, config.since.as_deref()) {
        (OutputFormat::Markdown, None) => explorer
            .report(&config.revision, &options)
            .with_context(|| format!("Failed to summarise revision {}", config.revision))?,
        (OutputFormat::Markdown, Some(since)) => explorer
            .report_range(Some(since), &config.revision, &options, policy)
            .with_context(|| format!("Failed to summarise {since}..{}", config.revision))?,
        (OutputFormat::Json, since) => {
            let summaries = match since {
                None => vec![
                    explorer
                        .get_change(&config.revision)
                        .with_context(|| {
                            format!("Failed to summarise revision {}", config.revision)
                        })?,
                ],
                Some(since) => explorer
                    .changes_in_range(Some(since), &config.revision, policy)
                    .with_context(|| format!("Failed to summarise {since}..{}", config.revision))?,
            };
            let mut json = serde_json::to_string_pretty(&summaries)?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}
