// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Default width of the metadata sidebar in logical pixels.
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 290.0;

/// Minimum sidebar width.
pub const MIN_SIDEBAR_WIDTH: f32 = 200.0;

/// Maximum sidebar width.
pub const MAX_SIDEBAR_WIDTH: f32 = 600.0;

/// Whether the sidebar is shown on startup.
pub const DEFAULT_SIDEBAR_VISIBLE: bool = true;

/// Whether the EXIF details section is shown when the build supports it.
pub const DEFAULT_SHOW_METADATA: bool = true;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SIDEBAR_WIDTH > 0.0);
    assert!(MAX_SIDEBAR_WIDTH > MIN_SIDEBAR_WIDTH);
    assert!(DEFAULT_SIDEBAR_WIDTH >= MIN_SIDEBAR_WIDTH);
    assert!(DEFAULT_SIDEBAR_WIDTH <= MAX_SIDEBAR_WIDTH);
};
