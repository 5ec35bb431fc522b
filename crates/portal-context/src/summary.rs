//! Markdown summary of the portal context.
//!
//! Four sections in fixed order (core components, mixin responsibilities,
//! error types, best practices) followed by a footer pointing at the full
//! docs. Session keys and PII fields stay out of the summary; they are only
//! available on the record itself.

use std::fmt::Write;

use crate::constants::{
    BEST_PRACTICES_HEADING, CORE_COMPONENTS_HEADING, ERROR_TYPES_HEADING, FOOTER_LEAD,
    FOOTER_PATHS, MIXIN_RESPONSIBILITIES_HEADING, SUMMARY_TITLE,
};
use crate::errors::Result;
use crate::loader::ContextLoader;
use crate::record::ContextRecord;

/// Load the record once through `loader` and render it.
pub fn context_summary(loader: &ContextLoader) -> Result<String> {
    let record = loader.load()?;
    Ok(render_summary(&record))
}

/// Render a record into the pasteable summary.
pub fn render_summary(record: &ContextRecord) -> String {
    let core_components = bullets(record.core_components.iter().map(ToString::to_string));
    let mixins = bullets(
        record
            .mixin_responsibilities
            .iter()
            .map(|m| format!("{}: {}", m.name, m.responsibilities.join(", "))),
    );
    let error_types = bullets(
        record
            .error_types
            .iter()
            .map(|e| format!("{}: {}", e.category, e.fields)),
    );
    let practices = bullets(
        record
            .best_practices
            .iter()
            .map(|p| format!("{}: {}", p.area, p.practices.join(", "))),
    );

    let mut out = String::new();
    let _ = writeln!(out, "{SUMMARY_TITLE}\n");
    let _ = writeln!(out, "{CORE_COMPONENTS_HEADING}\n{core_components}\n");
    let _ = writeln!(out, "{MIXIN_RESPONSIBILITIES_HEADING}\n{mixins}\n");
    let _ = writeln!(out, "{ERROR_TYPES_HEADING}\n{error_types}\n");
    let _ = writeln!(out, "{BEST_PRACTICES_HEADING}\n{practices}\n");
    let _ = writeln!(out, "{FOOTER_LEAD}");
    for path in FOOTER_PATHS {
        let _ = writeln!(out, "- {path}");
    }
    out
}

/// One `- item` line per entry, newline-separated, no trailing newline.
fn bullets(items: impl Iterator<Item = String>) -> String {
    items
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
