//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Endpoint locations can be overridden at build time through environment
//! variables read with `option_env!`.

use crate::models::ConcurrencyPolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Tree Explorer";

/// Label of the root breadcrumb segment.
pub const ROOT_LABEL: &str = "root";

// =============================================================================
// Network Configuration
// =============================================================================

/// Listing endpoint root; a listing is requested at `{API_ROOT}/{nodeId}`.
///
/// Override with `EXPLORER_API_ROOT` at build time.
pub const API_ROOT: &str = match option_env!("EXPLORER_API_ROOT") {
    Some(url) => url,
    None => "/api/nodes",
};

/// Prefix prepended to a file's `filePath` to form the preview source.
///
/// Override with `EXPLORER_IMAGE_PREFIX` at build time.
pub const IMAGE_PATH_PREFIX: &str = match option_env!("EXPLORER_IMAGE_PREFIX") {
    Some(prefix) => prefix,
    None => "/static",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Navigation
// =============================================================================

/// Handling of clicks that arrive while a listing is loading.
pub const CONCURRENCY_POLICY: ConcurrencyPolicy = ConcurrencyPolicy::IgnoreWhileLoading;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
