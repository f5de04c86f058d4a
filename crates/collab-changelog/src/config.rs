// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! Configuration for collab-changelog
//!
//! Command-line flags, with environment fallbacks for the repository path
//! and the commit link prefix.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use collab_changes::render::DEFAULT_COMMIT_URL;
use collab_changes::{FailurePolicy, ReportOptions, SpriteRouting};

/// Collab Changelog - credit contributors for sprite collaboration commits
#[derive(Parser, Debug, Clone)]
#[command(name = "collab-changelog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Revision to summarise (SHA, branch, tag, HEAD~n)
    ///
    /// With --since, the newest revision of the range.
    #[arg(default_value = "HEAD")]
    pub revision: String,

    /// Path to the asset repository (or any directory inside it)
    #[arg(short, long, env = "COLLAB_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Oldest revision of a range; summarises SINCE..=REVISION, newest first
    #[arg(short, long)]
    pub since: Option<String>,

    /// Prefix written before every line, e.g. a markdown bullet
    #[arg(short, long, default_value = "-", allow_hyphen_values = true)]
    pub tabulation: String,

    /// Base URL of commit links; the revision id is appended after a `/`
    #[arg(long, env = "COLLAB_COMMIT_URL", default_value = DEFAULT_COMMIT_URL)]
    pub commit_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// File modified sprites as added and removed sprites as portraits,
    /// matching the historical changelog output
    #[arg(long, default_value = "false")]
    pub legacy_sprite_routing: bool,

    /// Skip revisions that cannot be summarised instead of aborting
    ///
    /// Only meaningful with --since.
    #[arg(short, long, default_value = "false")]
    pub keep_going: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every classified path and joined entity to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How summaries are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One attribution line per changed entity and category
    #[default]
    Markdown,
    /// The joined change summaries as a JSON array
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            revision: "HEAD".to_string(),
            repo: PathBuf::from("."),
            since: None,
            tabulation: "-".to_string(),
            commit_url: DEFAULT_COMMIT_URL.to_string(),
            format: OutputFormat::Markdown,
            legacy_sprite_routing: false,
            keep_going: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Rendering options from the tabulation and commit URL flags
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            tabulation: self.tabulation.clone(),
            commit_url: self.commit_url.clone(),
        }
    }

    /// Sprite routing selected by --legacy-sprite-routing
    #[must_use]
    pub fn routing(&self) -> SpriteRouting {
        if self.legacy_sprite_routing {
            SpriteRouting::Legacy
        } else {
            SpriteRouting::Corrected
        }
    }

    /// Range failure policy selected by --keep-going
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path doesn't exist or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repo.exists() {
            return Err(ConfigError::RepoNotFound(self.repo.clone()));
        }
        if !self.repo.is_dir() {
            return Err(ConfigError::RepoNotDirectory(self.repo.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),
}
