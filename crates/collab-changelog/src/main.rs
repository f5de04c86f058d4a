// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! collab-changelog: attribution lines for sprite collaboration commits
//!
//! Reads one revision (or a range) of an asset repository and prints a
//! markdown line per changed creature crediting the contributor.

use anyhow::Result;
use clap::Parser;
use collab_changelog::config::Config;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;
    info!(
        revision = %config.revision,
        repo = %config.repo.display(),
        "Starting collab-changelog"
    );

    let output = collab_changelog::run(&config)?;
    print!("{output}");
    Ok(())
}
