// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Algebyte plugin store.
//!
//! Provides the error type and the plugin metadata records shared by the
//! configuration, manifest, and binary crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::StoreError;
pub use types::{MetadataField, PluginMetadata};
