// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manifest serialization and atomic file output.
//!
//! The document is rendered in memory with two-space indentation, then
//! written to a temporary file next to the target and persisted over it.
//! A failure at any point leaves the previous manifest untouched.

use std::io::{self, Write};
use std::path::Path;

use algebyte_core::StoreError;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tempfile::NamedTempFile;

use crate::manifest::Manifest;

const INDENT: &[u8] = b"  ";

/// How strings are written into the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    /// Escape every non-ASCII character as `\uXXXX` (UTF-16 code units).
    pub escape_non_ascii: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            escape_non_ascii: true,
        }
    }
}

/// Pretty formatter that keeps the output pure ASCII.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Render a manifest to JSON bytes.
pub fn render_manifest(manifest: &Manifest, style: JsonStyle) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    if style.escape_non_ascii {
        let formatter = AsciiPrettyFormatter {
            inner: PrettyFormatter::with_indent(INDENT),
        };
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        manifest.serialize(&mut ser)?;
    } else {
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        manifest.serialize(&mut ser)?;
    }
    Ok(buf)
}

/// Write `manifest` to `output_file`, replacing any previous content.
pub fn write_manifest(
    manifest: &Manifest,
    output_file: &Path,
    style: JsonStyle,
) -> Result<(), StoreError> {
    let bytes = render_manifest(manifest, style)?;

    let dir = match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| StoreError::io(tmp.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| StoreError::io(tmp.path(), e))?;
    }

    tmp.persist(output_file)
        .map_err(|e| StoreError::io(output_file, e.error))?;
    tracing::debug!(path = %output_file.display(), bytes = bytes.len(), "manifest written");
    Ok(())
}
