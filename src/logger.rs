//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output shown only with `--verbose`
//! - `Status` for the per-image result lines printed during an import
//!
//! # Example
//!
//! ```ignore
//! log!("import"; "found {} images", count);
//! status(Status::Imported, "CountryBadge_CN");
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "import" => prefix.bright_blue().bold().to_string(),
        "done" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Per-image status lines
// ============================================================================

/// Result symbol printed in front of a per-image line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Imageset created (✓, green).
    Imported,
    /// Existing imageset removed before re-import (↻, yellow).
    Replacing,
    /// Image left alone (⚠, yellow).
    Skipped,
    /// Import failed (✗, red).
    Failed,
}

impl Status {
    /// Plain symbol for this status.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Imported => "✓",
            Self::Replacing => "↻",
            Self::Skipped => "⚠",
            Self::Failed => "✗",
        }
    }

    fn colored_symbol(self) -> String {
        let symbol = self.symbol();
        match self {
            Self::Imported => symbol.green().to_string(),
            Self::Replacing | Self::Skipped => symbol.yellow().to_string(),
            Self::Failed => symbol.red().to_string(),
        }
    }
}

/// Print an indented per-image status line.
pub fn status(kind: Status, message: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "  {} {}", kind.colored_symbol(), message).ok();
    stdout.flush().ok();
}

/// Print an unprefixed, indented line (layout hints, summary rows).
pub fn plain(message: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "  {message}").ok();
    stdout.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_symbols() {
        assert_eq!(Status::Imported.symbol(), "✓");
        assert_eq!(Status::Replacing.symbol(), "↻");
        assert_eq!(Status::Skipped.symbol(), "⚠");
        assert_eq!(Status::Failed.symbol(), "✗");
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("import", "import"), "[import]");
        assert_eq!(colorize_prefix("Warning", "warning"), "[Warning]");
        owo_colors::unset_override();
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
