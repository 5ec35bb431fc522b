//! Settings types.

use serde::{Deserialize, Serialize};

/// Settings for the portal context tool.
///
/// Serialized with `camelCase` keys, e.g. `{"docsDir": "docs", "requireDocs": true}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortalSettings {
    /// Directory holding `PROJECT_CONTEXT.md`, `PATTERNS.md`, and `QUICK_REFERENCE.md`.
    pub docs_dir: String,
    /// Fail when a reference doc cannot be read.
    pub require_docs: bool,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            docs_dir: "docs".to_string(),
            require_docs: true,
            log_level: "warn".to_string(),
        }
    }
}
