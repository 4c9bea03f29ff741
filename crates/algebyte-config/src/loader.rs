// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./algebyte.toml` > `~/.config/algebyte/algebyte.toml`
//! > `/etc/algebyte/algebyte.toml`, with environment variable overrides via the
//! `ALGEBYTE_` prefix.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AlgebyteConfig;

/// File name looked up in every configuration directory.
pub const CONFIG_FILE_NAME: &str = "algebyte.toml";

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/algebyte/algebyte.toml";

/// Section names recognized in `ALGEBYTE_<SECTION>_<KEY>` variables.
const ENV_SECTIONS: &[&str] = &["repository", "paths", "scan", "output", "log"];

/// Per-user configuration file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("algebyte").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/algebyte/algebyte.toml` (system-wide)
/// 3. `~/.config/algebyte/algebyte.toml` (user XDG config)
/// 4. `./algebyte.toml` (local directory)
/// 5. `ALGEBYTE_*` environment variables
pub fn load_config() -> Result<AlgebyteConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env vars).
pub fn load_config_from_str(toml_content: &str) -> Result<AlgebyteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AlgebyteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the hierarchy lookup, an explicitly named file must exist.
pub fn load_config_from_path(path: &Path) -> Result<AlgebyteConfig, figment::Error> {
    if !path.is_file() {
        return Err(figment::Error::from(format!(
            "config file {} does not exist",
            path.display()
        )));
    }
    Figment::new()
        .merge(Serialized::defaults(AlgebyteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(AlgebyteConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(CONFIG_FILE_NAME)).merge(env_provider())
}

/// Create the environment variable provider.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `ALGEBYTE_PATHS_OUTPUT_FILE` maps to `paths.output_file` and
/// `ALGEBYTE_OUTPUT_ESCAPE_NON_ASCII` maps to `output.escape_non_ascii`.
fn env_provider() -> Env {
    Env::prefixed("ALGEBYTE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config key.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}
