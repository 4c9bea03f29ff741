// SPDX-FileCopyrightText: 2026 Algebyte Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Algebyte plugin store tool.
//!
//! Running `algebyte` with no arguments scans the plugin directory and writes
//! `plugins.json`, printing a one-line summary.

mod list;

use std::path::PathBuf;

use algebyte_config::AlgebyteConfig;
use clap::{Parser, Subcommand};

/// Algebyte plugin store tool.
#[derive(Parser, Debug)]
#[command(name = "algebyte", version, about, long_about = None)]
struct Cli {
    /// Load this configuration file instead of the standard lookup.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the plugin directory and write the manifest (default).
    Generate,
    /// List entries of the previously generated manifest.
    List {
        /// Case-insensitive filter on name, author, or description.
        query: Option<String>,
        /// Print matching entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => algebyte_config::load_and_validate_path(path),
        None => algebyte_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            algebyte_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    tracing::debug!(command = ?cli.command, "dispatching");
    if let Err(e) = dispatch(cli.command, &config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn dispatch(
    command: Option<Commands>,
    config: &AlgebyteConfig,
) -> Result<(), algebyte_core::StoreError> {
    match command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let report = algebyte_manifest::run(config)?;
            println!("{report}");
        }
        Commands::List { query, json } => {
            list::run_list(config, query.as_deref(), json, &mut std::io::stdout().lock())?;
        }
        Commands::Config => {
            let text = toml::to_string_pretty(config).map_err(|e| {
                algebyte_core::StoreError::Internal(format!("failed to render config: {e}"))
            })?;
            print!("{text}");
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
///
/// Output goes to stderr so stdout only carries command results.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("algebyte={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_generate() {
        let cli = Cli::try_parse_from(["algebyte"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn list_accepts_query_and_json() {
        let cli = Cli::try_parse_from(["algebyte", "list", "graph", "--json"]).unwrap();
        match cli.command {
            Some(Commands::List { query, json }) => {
                assert_eq!(query.as_deref(), Some("graph"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["algebyte", "generate", "--config", "store.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("store.toml")));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
