//! # portal-context
//!
//! Architecture record for the Django admin portal, and the context summary
//! that gets pasted into an AI coding assistant at the start of a thread.
//!
//! ## Module Overview
//!
//! - [`record`] — The static [`ContextRecord`] (mixins, error types, session keys, PII fields)
//! - [`loader`] — Reads the reference docs and hands out the record
//! - [`summary`] — Renders the record into the markdown summary
//! - [`errors`] — Doc read failures
//! - [`constants`] — File names, headings, and footer paths
//!
//! ## Usage
//!
//! ```rust,no_run
//! let summary = portal_context::get_context_summary("docs").unwrap();
//! println!("{summary}");
//! ```

#![deny(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod loader;
pub mod record;
pub mod summary;

use std::path::PathBuf;

pub use errors::{ContextError, Result};
pub use loader::{ContextLoader, ContextLoaderConfig, ReferenceDocs};
pub use record::{ContextRecord, ErrorCategory, ErrorType, FieldSchema, Mixin, PracticeArea};
pub use summary::{context_summary, render_summary};

/// Load the context record, reading the reference docs in `docs_dir` first.
pub fn initialize_context(docs_dir: impl Into<PathBuf>) -> Result<ContextRecord> {
    ContextLoader::new(ContextLoaderConfig::for_dir(docs_dir)).load()
}

/// Build the pasteable summary for the docs in `docs_dir`.
pub fn get_context_summary(docs_dir: impl Into<PathBuf>) -> Result<String> {
    context_summary(&ContextLoader::new(ContextLoaderConfig::for_dir(docs_dir)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
