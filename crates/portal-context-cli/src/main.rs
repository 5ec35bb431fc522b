//! # portal-context
//!
//! Prints the admin portal context summary for pasting into an AI assistant.

#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use portal_context_cli::{Cli, logging, resolve_settings, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resolved = resolve_settings(&cli);
    logging::init_subscriber(&resolved.settings.log_level);
    resolved.report();

    let output = run(&cli, &resolved.settings)?;
    println!("{output}");
    Ok(())
}
