//! Context loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the portal context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A reference doc was missing, unreadable, or not valid UTF-8.
    #[error("failed to read reference doc {}: {source}", .path.display())]
    ReadDoc {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

impl ContextError {
    /// Path of the doc that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDoc { path, .. } => path,
        }
    }
}

/// Result type for context operations.
pub type Result<T> = std::result::Result<T, ContextError>;
