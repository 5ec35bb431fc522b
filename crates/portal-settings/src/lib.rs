//! # portal-settings
//!
//! Configuration for the portal context tool.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`PortalSettings::default()`]
//! 2. **User file** — `~/.portal-context/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `PORTAL_CONTEXT_*` overrides (highest priority)
//!
//! Command-line flags sit on top of all three and are applied by the binary.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, deep_merge, load_settings, load_settings_from_path, settings_path,
};
pub use types::PortalSettings;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
