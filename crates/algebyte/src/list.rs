// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `algebyte list` command implementation.
//!
//! Reads the manifest written by a previous run and prints the entries that
//! match an optional query.

use std::io::Write;

use algebyte_config::AlgebyteConfig;
use algebyte_core::{PluginMetadata, StoreError};
use algebyte_manifest::read_manifest;

/// Format one entry as a single human-readable line.
pub fn format_entry(entry: &PluginMetadata) -> String {
    format!("{} {} - {}", entry.name, entry.version, entry.description)
}

/// Run the `algebyte list` command, writing to `out`.
pub fn run_list(
    config: &AlgebyteConfig,
    query: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), StoreError> {
    let manifest = read_manifest(&config.paths.output_file)?;
    let matches = manifest.search(query.unwrap_or_default());

    let io_err = |e: std::io::Error| StoreError::io("<stdout>", e);
    if json {
        let text = serde_json::to_string_pretty(&matches)?;
        writeln!(out, "{text}").map_err(io_err)?;
    } else if matches.is_empty() {
        writeln!(out, "no plugins found").map_err(io_err)?;
    } else {
        for entry in matches {
            writeln!(out, "{}", format_entry(entry)).map_err(io_err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebyte_manifest::{write_manifest, JsonStyle, Manifest};

    fn entry(name: &str, description: &str) -> PluginMetadata {
        PluginMetadata {
            name: name.to_string(),
            author: "Ayden".to_string(),
            version: "1.0".to_string(),
            description: description.to_string(),
            icon_url: format!("https://host/icons/{name}.png"),
            download_url: format!("https://host/plugins/{name}.py"),
        }
    }

    fn config_with_manifest(dir: &std::path::Path) -> AlgebyteConfig {
        let mut config = AlgebyteConfig::default();
        config.paths.output_file = dir.join("plugins.json");
        let manifest = Manifest::new(vec![
            entry("Grapher", "Draw graphs"),
            entry("Function Analyzer", "Differentiate and integrate"),
        ]);
        write_manifest(&manifest, &config.paths.output_file, JsonStyle::default()).unwrap();
        config
    }

    #[test]
    fn lists_all_entries_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let mut out = Vec::new();
        run_list(&config, None, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Grapher 1.0 - Draw graphs\nFunction Analyzer 1.0 - Differentiate and integrate\n"
        );
    }

    #[test]
    fn query_filters_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let mut out = Vec::new();
        run_list(&config, Some("integrate"), true, &mut out).unwrap();
        let parsed: Vec<PluginMetadata> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Function Analyzer");
    }

    #[test]
    fn no_match_message() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let mut out = Vec::new();
        run_list(&config, Some("zzz"), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no plugins found\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let err = run_list(&config, None, false, &mut ClosedPipe).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AlgebyteConfig::default();
        config.paths.output_file = dir.path().join("plugins.json");
        let mut out = Vec::new();
        assert!(run_list(&config, None, false, &mut out).is_err());
    }
}
