//! Platform-specific key hint text

/// Submit shortcut display for form help text.
/// Bound to the Control key on every platform, including macOS.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Compact forms for the status bar
pub const SUBMIT_HINT: &str = "^S:estimate";
pub const RESET_HINT: &str = "^R:reset";
