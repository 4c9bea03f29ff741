// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote URL synthesis for manifest entries.

use algebyte_config::AlgebyteConfig;

use crate::source::PluginSource;

/// Where plugins and icons live in the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLayout {
    base_url: String,
    plugin_path: String,
    icon_path: String,
    icon_extension: String,
}

impl RepositoryLayout {
    /// Build a layout, normalizing slashes so each part is joined by exactly one `/`.
    pub fn new(base_url: &str, plugin_path: &str, icon_path: &str, icon_extension: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            plugin_path: plugin_path.trim().trim_matches('/').to_string(),
            icon_path: icon_path.trim().trim_matches('/').to_string(),
            icon_extension: icon_extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn from_config(config: &AlgebyteConfig) -> Self {
        Self::new(
            &config.repository.base_url,
            &config.repository.plugin_path,
            &config.repository.icon_path,
            &config.scan.icon_extension,
        )
    }

    /// `<base>/<icon_path>/<stem>.<icon_extension>`
    pub fn icon_url(&self, source: &PluginSource) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base_url, self.icon_path, source.stem, self.icon_extension
        )
    }

    /// `<base>/<plugin_path>/<file_name>`
    pub fn download_url(&self, source: &PluginSource) -> String {
        format!("{}/{}/{}", self.base_url, self.plugin_path, source.file_name)
    }

    /// File name the icon is expected to have locally.
    pub fn icon_file_name(&self, source: &PluginSource) -> String {
        format!("{}.{}", source.stem, self.icon_extension)
    }
}
