// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the manifest generator and its consumers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One of the metadata constants every published plugin must declare.
///
/// The textual form is the `<field>` part of a `__plugin_<field>__` assignment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    Name,
    Author,
    Version,
    Description,
}

impl MetadataField {
    /// All required fields, in manifest order.
    pub const ALL: [MetadataField; 4] = [
        MetadataField::Name,
        MetadataField::Author,
        MetadataField::Version,
        MetadataField::Description,
    ];
}

/// A single manifest entry describing an installable plugin.
///
/// Field order matches the published `plugins.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: String,
    pub icon_url: String,
    pub download_url: String,
}
