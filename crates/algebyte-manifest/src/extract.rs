// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual extraction of `__plugin_<field>__ = "<value>"` assignments.
//!
//! Extraction is pattern matching, not parsing. Quotes may be single or
//! double and need not match each other. The value runs up to the first
//! quote character of either kind on the same line. When a field is assigned
//! more than once, the last occurrence wins.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use algebyte_config::MatchScope;
use algebyte_core::MetadataField;
use regex::Regex;

static ANYWHERE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"__plugin_(name|author|version|description)__\s*=\s*["'](.+?)["']"#).unwrap()
});

static TOP_LEVEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^__plugin_(name|author|version|description)__\s*=\s*["'](.+?)["']"#)
        .unwrap()
});

/// The four required values of a fully described plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginFields {
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: String,
}

/// Metadata fields found in one source file, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    fields: BTreeMap<MetadataField, String>,
}

impl ExtractedMetadata {
    /// Required fields with no assignment in the file, in manifest order.
    pub fn missing(&self) -> Vec<MetadataField> {
        MetadataField::ALL
            .into_iter()
            .filter(|f| !self.fields.contains_key(f))
            .collect()
    }

    /// Convert into the four required values, or report what is missing.
    pub fn into_fields(mut self) -> Result<PluginFields, Vec<MetadataField>> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(missing);
        }
        let mut take = |field| self.fields.remove(&field).unwrap_or_default();
        Ok(PluginFields {
            name: take(MetadataField::Name),
            author: take(MetadataField::Author),
            version: take(MetadataField::Version),
            description: take(MetadataField::Description),
        })
    }
}

/// Scan `content` for metadata assignments.
pub fn extract_metadata(content: &str, scope: MatchScope) -> ExtractedMetadata {
    let pattern = match scope {
        MatchScope::Anywhere => &*ANYWHERE_PATTERN,
        MatchScope::TopLevel => &*TOP_LEVEL_PATTERN,
    };

    let mut fields = BTreeMap::new();
    for caps in pattern.captures_iter(content) {
        // Group 1 only matches the four field names.
        let Ok(field) = MetadataField::from_str(&caps[1]) else {
            continue;
        };
        fields.insert(field, caps[2].to_string());
    }
    ExtractedMetadata { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENCY: &str = r#"
import requests
from core.plugin_interface import PluginWidget

__plugin_name__ = "Money Converter"
__plugin_author__ = "Ayden"
__plugin_version__ = "1.1"
__plugin_description__ = "Convert currencies with live or offline exchange rates."

API_URL = "https://open.er-api.com/v6/latest/{}"
"#;

    fn field(meta: &ExtractedMetadata, field: MetadataField) -> Option<&str> {
        meta.fields.get(&field).map(String::as_str)
    }

    #[test]
    fn extracts_all_four_fields() {
        let meta = extract_metadata(CURRENCY, MatchScope::Anywhere);
        assert!(meta.missing().is_empty());
        let fields = meta.into_fields().unwrap();
        assert_eq!(fields.name, "Money Converter");
        assert_eq!(fields.author, "Ayden");
        assert_eq!(fields.version, "1.1");
        assert_eq!(
            fields.description,
            "Convert currencies with live or offline exchange rates."
        );
    }

    #[test]
    fn single_quotes_and_loose_spacing() {
        let src = "__plugin_name__='Grapher'\n__plugin_author__   =   'Ayden'\n";
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Name), Some("Grapher"));
        assert_eq!(field(&meta, MetadataField::Author), Some("Ayden"));
    }

    #[test]
    fn value_stops_at_first_quote_of_either_kind() {
        let src = r#"__plugin_description__ = "Ayden's tools""#;
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Description), Some("Ayden"));
    }

    #[test]
    fn mismatched_quotes_still_match() {
        let src = r#"__plugin_version__ = "2.0'"#;
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Version), Some("2.0"));
    }

    #[test]
    fn empty_value_does_not_match() {
        let src = r#"__plugin_name__ = """#;
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Name), None);
    }

    #[test]
    fn value_does_not_span_lines() {
        let src = "__plugin_name__ = \"Unit\nConverter\"\n";
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Name), None);
    }

    #[test]
    fn last_duplicate_wins() {
        let src = "__plugin_version__ = \"1.0\"\n__plugin_version__ = \"1.1\"\n";
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Version), Some("1.1"));
    }

    #[test]
    fn anywhere_matches_inside_comments() {
        let src = "# __plugin_name__ = \"Commented\"\n";
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(field(&meta, MetadataField::Name), Some("Commented"));
    }

    #[test]
    fn top_level_ignores_comments_and_indentation() {
        let src = "# __plugin_name__ = \"Commented\"\n\
                   class X:\n    __plugin_author__ = \"Nested\"\n\
                   __plugin_version__ = \"3.0\"\n";
        let meta = extract_metadata(src, MatchScope::TopLevel);
        assert_eq!(field(&meta, MetadataField::Name), None);
        assert_eq!(field(&meta, MetadataField::Author), None);
        assert_eq!(field(&meta, MetadataField::Version), Some("3.0"));
    }

    #[test]
    fn missing_reports_each_absent_field() {
        for skipped in MetadataField::ALL {
            let src: String = MetadataField::ALL
                .into_iter()
                .filter(|f| *f != skipped)
                .map(|f| format!("__plugin_{f}__ = \"v\"\n"))
                .collect();
            let meta = extract_metadata(&src, MatchScope::Anywhere);
            assert_eq!(meta.missing(), vec![skipped]);
            assert_eq!(meta.clone().into_fields().unwrap_err(), vec![skipped]);
        }
    }

    #[test]
    fn unrelated_dunders_are_ignored() {
        let src = "__plugin_license__ = \"MIT\"\n__version__ = \"9\"\n";
        let meta = extract_metadata(src, MatchScope::Anywhere);
        assert_eq!(meta.missing().len(), 4);
    }
}
