//! Shared constants for loading and rendering the portal context.

// =============================================================================
// Reference docs
// =============================================================================

/// Project overview doc.
pub const PROJECT_CONTEXT_FILE: &str = "PROJECT_CONTEXT.md";

/// Mixin and coding patterns doc.
pub const PATTERNS_FILE: &str = "PATTERNS.md";

/// Cheat sheet doc.
pub const QUICK_REFERENCE_FILE: &str = "QUICK_REFERENCE.md";

/// All reference docs, in read order.
pub const REFERENCE_DOC_FILES: [&str; 3] =
    [PROJECT_CONTEXT_FILE, PATTERNS_FILE, QUICK_REFERENCE_FILE];

/// Directory the docs live in, relative to the project root.
pub const DEFAULT_DOCS_DIR: &str = "docs";

// =============================================================================
// Summary layout
// =============================================================================

/// Title line of the summary.
pub const SUMMARY_TITLE: &str = "# Project Context Summary";

/// First section: one bullet per core component.
pub const CORE_COMPONENTS_HEADING: &str = "## Core Components";
/// Second section: one bullet per mixin.
pub const MIXIN_RESPONSIBILITIES_HEADING: &str = "## Mixin Responsibilities";
/// Third section: one bullet per error category.
pub const ERROR_TYPES_HEADING: &str = "## Error Types";
/// Fourth section: one bullet per practice area.
pub const BEST_PRACTICES_HEADING: &str = "## Best Practices";

/// Lead-in for the footer.
pub const FOOTER_LEAD: &str = "For full context, refer to:";

/// Paths listed in the footer. Always project-relative, whatever docs dir was read.
pub const FOOTER_PATHS: [&str; 3] = [
    "docs/PROJECT_CONTEXT.md",
    "docs/PATTERNS.md",
    "docs/QUICK_REFERENCE.md",
];
