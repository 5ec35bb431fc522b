//! Reference doc loader.
//!
//! Reads `PROJECT_CONTEXT.md`, `PATTERNS.md`, and `QUICK_REFERENCE.md` from the
//! docs directory, then hands out the static [`ContextRecord`]. The doc text is
//! not folded into the record; the reads exist so a missing or unreadable doc
//! fails the load instead of producing a summary that points at files that
//! are not there.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_DOCS_DIR, PATTERNS_FILE, PROJECT_CONTEXT_FILE, QUICK_REFERENCE_FILE,
};
use crate::errors::{ContextError, Result};
use crate::record::ContextRecord;

// =============================================================================
// Types
// =============================================================================

/// Raw text of the three reference docs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceDocs {
    /// `PROJECT_CONTEXT.md`
    pub project_context: String,
    /// `PATTERNS.md`
    pub patterns: String,
    /// `QUICK_REFERENCE.md`
    pub quick_reference: String,
}

impl ReferenceDocs {
    /// Combined size of the three docs in bytes.
    pub fn total_bytes(&self) -> usize {
        self.project_context.len() + self.patterns.len() + self.quick_reference.len()
    }
}

/// Configuration for the loader.
#[derive(Clone, Debug)]
pub struct ContextLoaderConfig {
    /// Directory holding the reference docs.
    pub docs_dir: PathBuf,
    /// Read the docs before returning the record. When false, missing docs
    /// no longer fail the load.
    pub require_docs: bool,
}

impl ContextLoaderConfig {
    /// Default config pointed at `docs_dir`.
    pub fn for_dir(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for ContextLoaderConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            require_docs: true,
        }
    }
}

// =============================================================================
// ContextLoader
// =============================================================================

/// Loads the portal context.
#[derive(Clone, Debug)]
pub struct ContextLoader {
    config: ContextLoaderConfig,
}

impl ContextLoader {
    /// Create a loader with the given configuration.
    pub fn new(config: ContextLoaderConfig) -> Self {
        Self { config }
    }

    /// The loader's configuration.
    pub fn config(&self) -> &ContextLoaderConfig {
        &self.config
    }

    /// Load the context record.
    ///
    /// Reads every reference doc first (unless `require_docs` is off) and
    /// fails on the first one that cannot be read.
    pub fn load(&self) -> Result<ContextRecord> {
        if self.config.require_docs {
            let docs = self.read_reference_docs()?;
            debug!(
                docs_dir = %self.config.docs_dir.display(),
                total_bytes = docs.total_bytes(),
                "reference docs read"
            );
        } else {
            warn!(
                docs_dir = %self.config.docs_dir.display(),
                "skipping reference doc reads"
            );
        }
        Ok(ContextRecord::portal())
    }

    /// Read the three reference docs in order.
    pub fn read_reference_docs(&self) -> Result<ReferenceDocs> {
        let dir = &self.config.docs_dir;
        Ok(ReferenceDocs {
            project_context: read_doc(&dir.join(PROJECT_CONTEXT_FILE))?,
            patterns: read_doc(&dir.join(PATTERNS_FILE))?,
            quick_reference: read_doc(&dir.join(QUICK_REFERENCE_FILE))?,
        })
    }
}

impl Default for ContextLoader {
    fn default() -> Self {
        Self::new(ContextLoaderConfig::default())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Read one doc as UTF-8, tagging failures with the path.
fn read_doc(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| ContextError::ReadDoc {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read reference doc");
    Ok(content)
}

// =============================================================================
// Tests
// =============================================================================
