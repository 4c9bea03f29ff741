// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the plugin store tooling.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a mistyped key is
//! reported at startup instead of silently falling back to a default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Every section is optional; the defaults reproduce the published
/// `algebytestore` layout (`plugins/`, `icons/`, `plugins.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AlgebyteConfig {
    /// Remote repository the manifest URLs point into.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Local input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Plugin discovery and metadata extraction settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Manifest serialization settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Remote repository layout used for URL synthesis.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Raw-content base URL of the repository.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory inside the repository holding plugin sources.
    #[serde(default = "default_plugin_path")]
    pub plugin_path: String,

    /// Directory inside the repository holding plugin icons.
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            plugin_path: default_plugin_path(),
            icon_path: default_icon_path(),
        }
    }
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/AidenZaire/algebytestore/main".to_string()
}

fn default_plugin_path() -> String {
    "plugins".to_string()
}

fn default_icon_path() -> String {
    "icons".to_string()
}

/// Local filesystem locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory scanned for plugin source files.
    #[serde(default = "default_plugin_dir")]
    pub plugin_dir: PathBuf,

    /// Directory expected to hold one icon per plugin. Never required.
    #[serde(default = "default_icon_dir")]
    pub icon_dir: PathBuf,

    /// Manifest file, overwritten on every run.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            plugin_dir: default_plugin_dir(),
            icon_dir: default_icon_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_plugin_dir() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_icon_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("plugins.json")
}

/// Where a `__plugin_<field>__` assignment may appear in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchScope {
    /// Anywhere in the text, including comments and string literals.
    #[default]
    Anywhere,
    /// Only assignments starting in the first column of a line.
    TopLevel,
}

/// Plugin discovery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Extension (without the dot) of plugin source files.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension (without the dot) of plugin icon files.
    #[serde(default = "default_icon_extension")]
    pub icon_extension: String,

    /// Where metadata assignments are recognized.
    #[serde(default)]
    pub match_scope: MatchScope,

    /// Sort manifest entries by source file name instead of directory order.
    #[serde(default)]
    pub sort_entries: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            icon_extension: default_icon_extension(),
            match_scope: MatchScope::default(),
            sort_entries: false,
        }
    }
}

fn default_source_extension() -> String {
    "py".to_string()
}

fn default_icon_extension() -> String {
    "png".to_string()
}

/// Manifest serialization settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Write non-ASCII characters as `\uXXXX` escapes.
    #[serde(default = "default_escape_non_ascii")]
    pub escape_non_ascii: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            escape_non_ascii: default_escape_non_ascii(),
        }
    }
}

fn default_escape_non_ascii() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
