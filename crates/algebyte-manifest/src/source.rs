// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discovery of plugin source files in the plugin directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use algebyte_core::StoreError;

/// A candidate plugin source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSource {
    /// Full path used for reading.
    pub path: PathBuf,
    /// File name, e.g. `CurrencyConverter.py`.
    pub file_name: String,
    /// File name without its extension, e.g. `CurrencyConverter`.
    pub stem: String,
}

impl PluginSource {
    /// Read the whole file as UTF-8 text.
    pub fn read(&self) -> Result<String, StoreError> {
        std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

/// List regular files in `plugin_dir` whose extension is `extension`.
///
/// The extension is taken from [`Path::extension`], so a file named exactly
/// `.py` has none and is not a source.
///
/// Entries keep the order the directory listing returns them in. A missing
/// or unreadable directory is an error; so is a matching file whose name is
/// not valid UTF-8, since it could not be published under a URL.
pub fn discover_sources(
    plugin_dir: &Path,
    extension: &str,
) -> Result<Vec<PluginSource>, StoreError> {
    let entries = std::fs::read_dir(plugin_dir).map_err(|e| StoreError::io(plugin_dir, e))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(plugin_dir, e))?;
        let path = entry.path();
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let names = path
            .file_name()
            .and_then(OsStr::to_str)
            .zip(path.file_stem().and_then(OsStr::to_str))
            .map(|(file_name, stem)| (file_name.to_string(), stem.to_string()));
        let Some((file_name, stem)) = names else {
            return Err(StoreError::Encoding { path });
        };

        sources.push(PluginSource {
            path,
            file_name,
            stem,
        });
    }
    Ok(sources)
}
