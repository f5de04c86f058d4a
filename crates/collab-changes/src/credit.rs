// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! The credit roster
//!
//! `credit_names.txt` is a tab-separated table: a header line, then one
//! `name<TAB>identifier<TAB>url` row per contributor. Empty name or url
//! fields mean the value is absent.

use crate::error::ChangesError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribution details for one contributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Display name
    pub name: Option<String>,
    /// Roster identifier (a Discord id for most contributors)
    pub id: String,
    /// Link to the contributor's page
    pub url: Option<String>,
}

/// All credits of one revision, keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditRoster {
    credits: HashMap<String, Credit>,
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.filter(|f| !f.is_empty()).map(str::to_string)
}

impl CreditRoster {
    /// Parse roster text, skipping the header line and blank lines
    ///
    /// A later row with the same identifier replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ChangesError::Roster` with the 1-based line number for a row
    /// without an identifier.
    pub fn parse(text: &str) -> Result<Self, ChangesError> {
        let mut credits = HashMap::new();

        for (i, raw) in text.split('\n').enumerate().skip(1) {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let name = non_empty(fields.next());
            let id = non_empty(fields.next()).ok_or_else(|| ChangesError::Roster {
                line: i + 1,
                message: "missing identifier".to_string(),
            })?;
            let url = non_empty(fields.next());

            credits.insert(id.clone(), Credit { name, id, url });
        }

        Ok(Self { credits })
    }

    /// Decode and parse raw roster bytes
    ///
    /// # Errors
    ///
    /// Returns `ChangesError::RosterEncoding` for non-UTF-8 content, or any
    /// error from [`CreditRoster::parse`].
    pub fn from_bytes(path: &str, bytes: Vec<u8>) -> Result<Self, ChangesError> {
        let text = String::from_utf8(bytes).map_err(|source| ChangesError::RosterEncoding {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Look up a credit by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Credit> {
        self.credits.get(id)
    }

    /// Number of credits
    #[must_use]
    pub fn len(&self) -> usize {
        self.credits.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.credits.is_empty()
    }
}

impl FromIterator<Credit> for CreditRoster {
    fn from_iter<I: IntoIterator<Item = Credit>>(iter: I) -> Self {
        Self {
            credits: iter.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}
