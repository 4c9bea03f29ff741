// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::AlgebyteConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &AlgebyteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let base = config.repository.base_url.trim();
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        fail(format!(
            "repository.base_url `{base}` must start with http:// or https://"
        ));
    }

    for (key, value) in [
        ("repository.plugin_path", &config.repository.plugin_path),
        ("repository.icon_path", &config.repository.icon_path),
    ] {
        if value.trim_matches('/').trim().is_empty() {
            fail(format!("{key} must not be empty"));
        }
    }

    for (key, value) in [
        ("paths.plugin_dir", &config.paths.plugin_dir),
        ("paths.icon_dir", &config.paths.icon_dir),
        ("paths.output_file", &config.paths.output_file),
    ] {
        if value.as_os_str().is_empty() {
            fail(format!("{key} must not be empty"));
        }
    }

    for (key, value) in [
        ("scan.source_extension", &config.scan.source_extension),
        ("scan.icon_extension", &config.scan.icon_extension),
    ] {
        if value.is_empty() {
            fail(format!("{key} must not be empty"));
        } else if value.contains(['.', '/', '\\']) {
            fail(format!(
                "{key} `{value}` must be a bare extension without `.` or path separators"
            ));
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        fail(format!(
            "log.level `{}` must be one of: {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
