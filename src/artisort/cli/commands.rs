//! # CLI Layer
//!
//! The only place that parses arguments, sets up logging, reads the config
//! file location from the platform, and writes to stdout/stderr. Everything
//! else is delegated to the library's command layer.

use super::print::{print_config, print_judged, print_messages, print_rules, print_vocabulary};
use super::setup::{Cli, Commands};
use artisort::api::Judge;
use artisort::commands;
use artisort::commands::config::ConfigAction;
use artisort::config::{ArtisortConfig, CONFIG_FILENAME};
use artisort::error::{ArtisortError, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(default_config_path);
    let config = match &config_path {
        Some(path) => ArtisortConfig::load(path)?,
        None => ArtisortConfig::default(),
    };
    tracing::debug!(config = ?config_path, "Using configuration");

    match cli.command {
        Commands::Check { rules } => handle_check(&rules, &config),
        Commands::Classify {
            items,
            rules,
            heuristic,
        } => handle_classify(&items, rules, heuristic, &config),
        Commands::Labels => handle_labels(),
        Commands::Config { key, value } => handle_config(config_path, key, value),
        Commands::Template { path, force } => handle_template(&path, force),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "artisort=debug" } else { "artisort=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "artisort", "artisort")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn handle_check(rules: &Path, config: &ArtisortConfig) -> Result<()> {
    let result = commands::check::run(rules, config)?;
    print_rules(&result.rules);
    print_messages(&result.messages);
    Ok(())
}

fn handle_classify(
    items: &Path,
    rules: Option<PathBuf>,
    heuristic: bool,
    config: &ArtisortConfig,
) -> Result<()> {
    let rules_file = if heuristic {
        None
    } else {
        rules.or_else(|| config.rules_file.clone())
    };
    let judge = match rules_file {
        Some(path) => Judge::load_file(&path, config)?,
        None => Judge::heuristic(),
    };

    let result = commands::classify::run(&judge, items)?;
    print_judged(&result.judged);
    print_messages(&result.messages);
    Ok(())
}

fn handle_labels() -> Result<()> {
    let result = commands::labels::run();
    print_vocabulary(&result.vocabulary);
    Ok(())
}

fn handle_config(
    config_path: Option<PathBuf>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let path = config_path.ok_or_else(|| {
        ArtisortError::Config("no config directory on this platform; pass --config".to_string())
    })?;
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(&path, action)?;
    if let Some(config) = &result.config {
        print_config(config, &path);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_template(path: &Path, force: bool) -> Result<()> {
    let result = commands::template::run(path, force)?;
    print_messages(&result.messages);
    Ok(())
}
