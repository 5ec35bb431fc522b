//! # portal-context-cli
//!
//! Command-line wiring for the portal context summary: argument parsing,
//! settings resolution, and output rendering. `main.rs` only parses, sets up
//! logging, and prints.

#![deny(unsafe_code)]

pub mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use portal_context::{ContextLoader, ContextLoaderConfig, render_summary};
use portal_settings::{PortalSettings, SettingsError};
use tracing::{info, warn};

/// Print the admin portal context summary.
#[derive(Parser, Debug, Default)]
#[command(name = "portal-context", about = "Print the admin portal context summary")]
pub struct Cli {
    /// Directory holding the reference docs (overrides settings).
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Do not fail when a reference doc is missing.
    #[arg(long)]
    pub allow_missing_docs: bool,

    /// Log filter used when `RUST_LOG` is unset (overrides settings).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Settings file to load instead of `~/.portal-context/settings.json`.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// What `run` prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The markdown summary.
    #[default]
    Text,
    /// The full context record as pretty JSON.
    Json,
}

/// Settings after every layer has been applied.
#[derive(Debug)]
pub struct ResolvedSettings {
    /// Effective settings.
    pub settings: PortalSettings,
    /// Why the settings file was skipped, if it was. Reported once logging is up.
    pub load_error: Option<SettingsError>,
}

impl ResolvedSettings {
    /// Log a skipped settings file. Call after the subscriber is installed.
    pub fn report(&self) {
        if let Some(err) = &self.load_error {
            warn!(error = %err, "failed to load settings, using defaults");
        }
    }
}

/// Settings from file and env, with CLI flags applied last.
///
/// An unreadable settings file falls back to defaults (plus env overrides).
pub fn resolve_settings(cli: &Cli) -> ResolvedSettings {
    let loaded = match &cli.settings {
        Some(path) => portal_settings::load_settings_from_path(path),
        None => portal_settings::load_settings(),
    };
    let (mut settings, load_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(err) => {
            let mut defaults = PortalSettings::default();
            portal_settings::apply_env_overrides(&mut defaults);
            (defaults, Some(err))
        }
    };

    if let Some(dir) = &cli.docs_dir {
        settings.docs_dir = dir.display().to_string();
    }
    if cli.allow_missing_docs {
        settings.require_docs = false;
    }
    if let Some(level) = &cli.log_level {
        settings.log_level.clone_from(level);
    }
    ResolvedSettings {
        settings,
        load_error,
    }
}

/// Build the loader described by `settings`.
pub fn loader_from_settings(settings: &PortalSettings) -> ContextLoader {
    ContextLoader::new(ContextLoaderConfig {
        docs_dir: PathBuf::from(&settings.docs_dir),
        require_docs: settings.require_docs,
    })
}

/// Load the context once and render it in the requested format.
pub fn run(cli: &Cli, settings: &PortalSettings) -> Result<String> {
    let loader = loader_from_settings(settings);
    let record = loader
        .load()
        .with_context(|| format!("Failed to load portal context from {}", settings.docs_dir))?;
    info!(docs_dir = %settings.docs_dir, format = ?cli.format, "rendering portal context");

    match cli.format {
        OutputFormat::Text => Ok(render_summary(&record)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&record).context("Failed to serialize context record")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
