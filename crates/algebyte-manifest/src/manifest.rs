// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The manifest: an ordered list of publishable plugins.

use std::path::Path;

use algebyte_core::{PluginMetadata, StoreError};
use serde::{Deserialize, Serialize};

/// Ordered list of manifest entries, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<PluginMetadata>,
}

impl Manifest {
    pub fn new(entries: Vec<PluginMetadata>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PluginMetadata] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name, author, or description contains `query`
    /// (case-insensitive). An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&PluginMetadata> {
        let query = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|m| {
                query.is_empty()
                    || m.name.to_lowercase().contains(&query)
                    || m.author.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Parse a previously written manifest file.
pub fn read_manifest(path: &Path) -> Result<Manifest, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
