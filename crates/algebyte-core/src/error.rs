// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Algebyte plugin store tooling.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The primary error type used across manifest generation and reading.
///
/// Every variant is fatal to the run that produced it. A plugin file that is
/// merely missing metadata is not an error and never surfaces here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while listing, reading, or writing a path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A plugin source file is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// Manifest JSON could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred on.
    ///
    /// Invalid UTF-8 reported by `read_to_string` is mapped to
    /// [`StoreError::Encoding`] so callers can tell the two apart.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::InvalidData {
            StoreError::Encoding { path }
        } else {
            StoreError::Io { path, source }
        }
    }
}
