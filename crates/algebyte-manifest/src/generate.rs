// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The scan-and-generate pass.
//!
//! One linear sweep over the plugin directory: read each candidate, extract
//! metadata, keep files declaring all four fields, and synthesize their URLs.
//! Nothing touches the output file until every source has been read.

use std::path::PathBuf;

use algebyte_config::AlgebyteConfig;
use algebyte_core::{PluginMetadata, StoreError};

use crate::extract::extract_metadata;
use crate::layout::RepositoryLayout;
use crate::manifest::Manifest;
use crate::source::{discover_sources, PluginSource};
use crate::writer::{write_manifest, JsonStyle};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of entries written.
    pub count: usize,
    /// Where the manifest was written.
    pub output_file: PathBuf,
}

impl std::fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generated {} with {} plugins.",
            self.output_file.display(),
            self.count
        )
    }
}

/// Build the manifest for the configured plugin directory without writing it.
pub fn generate_manifest(config: &AlgebyteConfig) -> Result<Manifest, StoreError> {
    let layout = RepositoryLayout::from_config(config);
    let mut sources = discover_sources(&config.paths.plugin_dir, &config.scan.source_extension)?;
    if config.scan.sort_entries {
        sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }
    tracing::debug!(
        dir = %config.paths.plugin_dir.display(),
        candidates = sources.len(),
        "scanning plugin sources"
    );

    let mut entries = Vec::new();
    for source in &sources {
        if let Some(entry) = build_entry(config, &layout, source)? {
            entries.push(entry);
        }
    }
    Ok(Manifest::new(entries))
}

fn build_entry(
    config: &AlgebyteConfig,
    layout: &RepositoryLayout,
    source: &PluginSource,
) -> Result<Option<PluginMetadata>, StoreError> {
    let content = source.read()?;
    let fields = match extract_metadata(&content, config.scan.match_scope).into_fields() {
        Ok(fields) => fields,
        Err(missing) => {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            tracing::debug!(
                file = %source.file_name,
                missing = %missing.join(", "),
                "skipping plugin without complete metadata"
            );
            return Ok(None);
        }
    };

    let icon = config.paths.icon_dir.join(layout.icon_file_name(source));
    if !icon.is_file() {
        tracing::warn!(
            plugin = %fields.name,
            icon = %icon.display(),
            "icon file not found; manifest will reference it anyway"
        );
    }

    Ok(Some(PluginMetadata {
        name: fields.name,
        author: fields.author,
        version: fields.version,
        description: fields.description,
        icon_url: layout.icon_url(source),
        download_url: layout.download_url(source),
    }))
}

/// Generate the manifest and write it to the configured output file.
pub fn run(config: &AlgebyteConfig) -> Result<GenerationReport, StoreError> {
    let manifest = generate_manifest(config)?;
    let style = JsonStyle {
        escape_non_ascii: config.output.escape_non_ascii,
    };
    write_manifest(&manifest, &config.paths.output_file, style)?;

    let report = GenerationReport {
        count: manifest.len(),
        output_file: config.paths.output_file.clone(),
    };
    tracing::info!(
        count = report.count,
        output = %report.output_file.display(),
        "manifest generated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn config_in(dir: &std::path::Path) -> AlgebyteConfig {
        let mut config = AlgebyteConfig::default();
        config.paths.plugin_dir = dir.join("plugins");
        config.paths.icon_dir = dir.join("icons");
        config.paths.output_file = dir.join("plugins.json");
        std::fs::create_dir_all(&config.paths.plugin_dir).unwrap();
        std::fs::create_dir_all(&config.paths.icon_dir).unwrap();
        config
    }

    const GRAPHER: &str = concat!(
        "__plugin_name__ = \"Grapher\"\n",
        "__plugin_author__ = \"Ayden\"\n",
        "__plugin_version__ = \"1.0\"\n",
        "__plugin_description__ = \"Draw graphs\"\n",
    );

    #[test]
    #[traced_test]
    fn missing_icon_is_warned_but_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.paths.plugin_dir.join("Grapher.py"), GRAPHER).unwrap();

        let manifest = generate_manifest(&config).unwrap();
        assert_eq!(manifest.len(), 1);
        assert!(logs_contain("icon file not found"));
    }

    #[test]
    #[traced_test]
    fn present_icon_is_not_warned() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.paths.plugin_dir.join("Grapher.py"), GRAPHER).unwrap();
        std::fs::write(config.paths.icon_dir.join("Grapher.png"), b"\x89PNG").unwrap();

        generate_manifest(&config).unwrap();
        assert!(!logs_contain("icon file not found"));
    }

    #[test]
    #[traced_test]
    fn incomplete_file_logs_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(
            config.paths.plugin_dir.join("Half.py"),
            "__plugin_name__ = \"Half\"\n__plugin_author__ = \"Ayden\"\n",
        )
        .unwrap();

        assert!(generate_manifest(&config).unwrap().is_empty());
        assert!(logs_contain("version, description"));
    }

    #[test]
    fn report_summary_line() {
        let report = GenerationReport {
            count: 4,
            output_file: "plugins.json".into(),
        };
        assert_eq!(report.to_string(), "Generated plugins.json with 4 plugins.");
    }
}
