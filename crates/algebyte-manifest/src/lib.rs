// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin metadata extraction and manifest generation.
//!
//! Plugins declare themselves with four `__plugin_<field>__` string
//! assignments. This crate scans a plugin directory for them, synthesizes the
//! icon and download URLs each entry is published under, and writes the
//! resulting `plugins.json` consumed by the application's auto-updater.

pub mod extract;
pub mod generate;
pub mod layout;
pub mod manifest;
pub mod source;
pub mod writer;

pub use extract::{extract_metadata, ExtractedMetadata, PluginFields};
pub use generate::{generate_manifest, run, GenerationReport};
pub use layout::RepositoryLayout;
pub use manifest::{read_manifest, Manifest};
pub use source::{discover_sources, PluginSource};
pub use writer::{render_manifest, write_manifest, JsonStyle};
